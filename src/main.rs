use catalog_query::adapters::outbound::console::StderrProgressReporter;
use catalog_query::adapters::outbound::filesystem::FileSystemReader;
use catalog_query::application::dto::BrowseRequest;
use catalog_query::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use catalog_query::application::use_cases::BrowseCatalogUseCase;
use catalog_query::catalog::domain::{FilterQuery, SortSpec};
use catalog_query::catalog::services::{QueryCodec, DEFAULT_HISTOGRAM_BUCKETS, DEFAULT_PAGE_SIZE};
use catalog_query::cli::Args;
use catalog_query::config::{discover_config, load_config_from_path, ConfigFile};
use catalog_query::ports::outbound::ProgressReporter;
use catalog_query::shared::error::ExitCode;
use catalog_query::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let format = args.format.or(config.format).unwrap_or_default();
    let presenter_type = PresenterType::from_output(args.output.clone());
    let quiet = args.quiet;
    let request = build_request(args, &config);

    // Create adapters (Dependency Injection)
    let catalog_reader = FileSystemReader::new();
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    if !quiet {
        progress_reporter.report(FormatterFactory::progress_message(format));
    }

    let use_case = BrowseCatalogUseCase::new(catalog_reader, progress_reporter);
    let response = use_case.execute(request)?;

    let formatted_output = FormatterFactory::create(format).format(&response)?;
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit `--config` file, or the one in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// Merges CLI flags over the config file over built-in defaults
fn build_request(args: Args, config: &ConfigFile) -> BrowseRequest {
    let sort = match (&args.sort, &config.sort) {
        (Some(sort), _) => SortSpec::parse(sort, args.order.as_deref()),
        (None, Some(sort)) => SortSpec::parse(sort, config.order.as_deref()),
        (None, None) => SortSpec::default(),
    };
    let page_size = args
        .limit
        .map(usize::from)
        .or(config.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let buckets = args
        .buckets
        .map(usize::from)
        .or(config.histogram_buckets)
        .unwrap_or(DEFAULT_HISTOGRAM_BUCKETS);
    let include_facets = args.facets || config.facets.unwrap_or(false);

    let mut request = BrowseRequest::new(args.catalog.clone())
        .with_query(build_query(&args))
        .with_sort(sort)
        .with_page(args.page, page_size);
    if include_facets {
        request = request.with_facets(buckets);
    }
    request
}

/// Query string first, then individual flags on top
fn build_query(args: &Args) -> FilterQuery {
    let mut query = args
        .query
        .as_deref()
        .map(QueryCodec::parse_filter_query)
        .unwrap_or_default();

    if let Some(search) = &args.search {
        query.insert("search", search.as_str());
    }
    for (key, values) in [
        ("category", &args.categories),
        ("condition", &args.conditions),
        ("vendor", &args.vendors),
        ("tag", &args.tags),
    ] {
        for value in values {
            query.append(key, value.as_str());
        }
    }
    if args.in_stock {
        query.insert("inStock", true);
    }
    if let Some(min_price) = args.min_price {
        query.insert("minPrice", min_price);
    }
    if let Some(max_price) = args.max_price {
        query.insert("maxPrice", max_price);
    }

    query
}

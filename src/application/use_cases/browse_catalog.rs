use crate::application::dto::{BrowseRequest, BrowseResponse, CatalogFacets, ReportMetadata};
use crate::catalog::domain::Product;
use crate::catalog::services::{
    FacetCalculator, FilterQueryAdapter, FilterSummary, Paginator, ProductFilter, ProductSorter,
    QueryCodec,
};
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::Result;

/// Number of pipeline stages reported through `report_progress`
const PIPELINE_STAGES: usize = 4;

/// BrowseCatalogUseCase - loads a catalog and answers one listing request
///
/// Runs read → filter → sort → paginate, then summarizes the applied
/// filters and, when requested, computes facets over the full catalog.
///
/// # Type Parameters
/// * `R` - CatalogReader implementation
/// * `P` - ProgressReporter implementation
pub struct BrowseCatalogUseCase<R, P> {
    catalog_reader: R,
    progress_reporter: P,
}

impl<R, P> BrowseCatalogUseCase<R, P>
where
    R: CatalogReader,
    P: ProgressReporter,
{
    pub fn new(catalog_reader: R, progress_reporter: P) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: BrowseRequest) -> Result<BrowseResponse> {
        // Step 1: Load the catalog snapshot
        let products = self.read_catalog(&request)?;

        // Step 2: Normalize the query into a filter specification and apply it
        let filters = FilterQueryAdapter::to_filters(&request.query);
        let matched = ProductFilter::filter_products(&products, &filters);
        self.progress_reporter.report_progress(2, PIPELINE_STAGES, Some("filtered"));
        self.progress_reporter.report(&format!(
            "🔎 {} of {} product(s) match {} active filter(s)",
            matched.len(),
            products.len(),
            FilterSummary::active_filter_count(&filters)
        ));

        // Step 3: Order and slice
        self.progress_reporter
            .report(&format!("↕️  Sorting by {}", request.sort.label()));
        let sorted = ProductSorter::sort_products(&matched, &request.sort);
        self.progress_reporter.report_progress(3, PIPELINE_STAGES, Some("sorted"));
        let page = Paginator::paginate(&sorted, request.page, request.page_size);

        // Step 4: Facets describe the whole catalog, not the current page
        let facets = request
            .include_facets
            .then(|| Self::compute_facets(&products, request.histogram_buckets));
        self.progress_reporter.report_progress(4, PIPELINE_STAGES, Some("done"));

        let response = BrowseResponse {
            metadata: ReportMetadata::generate_default(),
            query_string: QueryCodec::build_filter_query(&FilterQueryAdapter::to_query(&filters)),
            sort: request.sort.to_string(),
            active_filter_count: FilterSummary::active_filter_count(&filters),
            applied_filters: FilterSummary::applied_filters(&filters),
            catalog_size: products.len(),
            filters,
            page,
            facets,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Page {}/{} ready ({} product(s))",
            response.page.page,
            response.page.total_pages().max(1),
            response.page.data.len()
        ));

        Ok(response)
    }

    fn read_catalog(&self, request: &BrowseRequest) -> Result<Vec<Product>> {
        self.progress_reporter.report(&format!(
            "📖 Loading catalog from: {}",
            request.catalog_path.display()
        ));

        let products = self.catalog_reader.read_catalog(&request.catalog_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} product(s)", products.len()));
        self.progress_reporter.report_progress(1, PIPELINE_STAGES, Some("loaded"));

        Ok(products)
    }

    fn compute_facets(products: &[Product], buckets: usize) -> CatalogFacets {
        CatalogFacets {
            price_histogram: FacetCalculator::price_histogram(products, buckets),
            vendors: FacetCalculator::unique_vendors(products),
            tags: FacetCalculator::unique_tags(products),
            price_range: FacetCalculator::price_range(products),
        }
    }
}

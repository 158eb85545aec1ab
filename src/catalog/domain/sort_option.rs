use std::fmt;
use std::str::FromStr;

/// Symbolic sort options understood by the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    LowToHigh,
    HighToLow,
    NameAsc,
    NameDesc,
    ByRatings,
    TopVendor,
    ProductsCount,
}

impl SortOption {
    pub const ALL: [SortOption; 11] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::LowToHigh,
        SortOption::HighToLow,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::ByRatings,
        SortOption::TopVendor,
        SortOption::ProductsCount,
    ];

    /// Wire value used in query strings and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "Oldest",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::LowToHigh => "lowToHigh",
            SortOption::HighToLow => "highToLow",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::ByRatings => "byRatings",
            SortOption::TopVendor => "TopVendor",
            SortOption::ProductsCount => "productsCount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest First",
            SortOption::Oldest => "Oldest First",
            SortOption::PriceAsc | SortOption::LowToHigh => "Price: Low to High",
            SortOption::PriceDesc | SortOption::HighToLow => "Price: High to Low",
            SortOption::NameAsc => "Name: A to Z",
            SortOption::NameDesc => "Name: Z to A",
            SortOption::ByRatings => "Rating: Highest First",
            SortOption::TopVendor => "Top Vendor",
            SortOption::ProductsCount => "Products Count",
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid sort option: {}. Expected one of: {}",
                    s,
                    SortOption::ALL.map(|o| o.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields accepted by the explicit `(field, direction)` sort form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    Name,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortField::Price),
            "name" => Ok(SortField::Name),
            _ => Err(format!("Invalid sort field: {}. Please specify 'price' or 'name'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `asc` (any case) is ascending; every other value sorts descending
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// Resolved sort request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSpec {
    Option(SortOption),
    Field {
        field: SortField,
        direction: SortDirection,
    },
    /// Unrecognized input; input order is kept
    Unsorted(String),
}

impl SortSpec {
    /// Resolves the two call shapes: with an `order` the first argument is
    /// a field name, without one it is a symbolic option.
    pub fn parse(option: &str, order: Option<&str>) -> Self {
        match order {
            Some(order) => match option.parse::<SortField>() {
                Ok(field) => SortSpec::Field {
                    field,
                    direction: SortDirection::parse_lenient(order),
                },
                Err(_) => SortSpec::Unsorted(option.to_string()),
            },
            None => option
                .parse::<SortOption>()
                .map(SortSpec::Option)
                .unwrap_or_else(|_| SortSpec::Unsorted(option.to_string())),
        }
    }
}

impl SortSpec {
    /// Human-readable label shown to shoppers
    pub fn label(&self) -> String {
        match self {
            SortSpec::Option(option) => option.label().to_string(),
            SortSpec::Field { field, direction } => {
                let option = match (field, direction) {
                    (SortField::Price, SortDirection::Asc) => SortOption::PriceAsc,
                    (SortField::Price, SortDirection::Desc) => SortOption::PriceDesc,
                    (SortField::Name, SortDirection::Asc) => SortOption::NameAsc,
                    (SortField::Name, SortDirection::Desc) => SortOption::NameDesc,
                };
                option.label().to_string()
            }
            SortSpec::Unsorted(_) => "Catalog Order".to_string(),
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec::Option(SortOption::Newest)
    }
}

impl From<SortOption> for SortSpec {
    fn from(option: SortOption) -> Self {
        SortSpec::Option(option)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSpec::Option(option) => write!(f, "{}", option),
            SortSpec::Field { field, direction } => {
                let field = match field {
                    SortField::Price => "price",
                    SortField::Name => "name",
                };
                let direction = match direction {
                    SortDirection::Asc => "asc",
                    SortDirection::Desc => "desc",
                };
                write!(f, "{} {}", field, direction)
            }
            SortSpec::Unsorted(raw) => write!(f, "{} (unrecognized)", raw),
        }
    }
}

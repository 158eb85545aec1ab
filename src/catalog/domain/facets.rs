use serde::Serialize;

/// Price histogram bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    /// Rounded bounds joined by a hyphen, e.g. `"0-50"`
    pub range: String,
    pub count: usize,
    pub range_min: f64,
    pub range_max: f64,
}

/// Vendor facet entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorFacet {
    pub id: String,
    pub name: String,
    pub count: usize,
}

use crate::catalog::domain::{find_condition, BrowseFilters};
use serde::Serialize;

/// One selected filter as shown in an "applied filters" strip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    pub filter_type: String,
    pub value: String,
    pub label: String,
}

/// FilterSummary service - describes which filters are active
pub struct FilterSummary;

impl FilterSummary {
    /// Number of active filter units
    ///
    /// Scalars count once; set-valued filters count once per selected element.
    pub fn active_filter_count(filters: &BrowseFilters) -> usize {
        let scalars = [
            !filters.search.is_empty(),
            filters.in_stock,
            filters.price_range.is_narrowed(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count();

        scalars
            + filters.categories.len()
            + filters.conditions.len()
            + filters.vendors.len()
            + filters.tags.len()
    }

    /// Human-readable label for a filter value
    pub fn format_filter_label(filter_type: &str, value: &str) -> String {
        match filter_type {
            "category" => value
                .split('-')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            "condition" => find_condition(value)
                .map(|grade| grade.label.to_string())
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }

    /// Every active filter, in display order
    pub fn applied_filters(filters: &BrowseFilters) -> Vec<AppliedFilter> {
        let mut applied = Vec::new();

        if !filters.search.is_empty() {
            applied.push(Self::applied("search", &filters.search));
        }
        for category in &filters.categories {
            applied.push(Self::applied("category", category));
        }
        for condition in &filters.conditions {
            applied.push(Self::applied("condition", condition));
        }
        if filters.price_range.is_narrowed() {
            let range = &filters.price_range;
            let value = if range.is_unbounded_above() {
                format!("{}+", range.min)
            } else {
                format!("{}-{}", range.min, range.max)
            };
            applied.push(Self::applied("price", &value));
        }
        for vendor in &filters.vendors {
            applied.push(Self::applied("vendor", vendor));
        }
        if filters.in_stock {
            applied.push(AppliedFilter {
                filter_type: "inStock".to_string(),
                value: "true".to_string(),
                label: "In Stock".to_string(),
            });
        }
        for tag in &filters.tags {
            applied.push(Self::applied("tag", tag));
        }

        applied
    }

    fn applied(filter_type: &str, value: &str) -> AppliedFilter {
        AppliedFilter {
            filter_type: filter_type.to_string(),
            value: value.to_string(),
            label: Self::format_filter_label(filter_type, value),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::PriceRange;

    #[test]
    fn test_default_filters_have_no_active_count() {
        assert_eq!(FilterSummary::active_filter_count(&BrowseFilters::default()), 0);
    }

    #[test]
    fn test_two_categories_and_in_stock_count_three() {
        let filters = BrowseFilters::default()
            .with_category("trading-cards")
            .with_category("comics")
            .with_in_stock(true);
        assert_eq!(FilterSummary::active_filter_count(&filters), 3);
    }

    #[test]
    fn test_price_range_counts_only_when_narrowed() {
        let narrowed = BrowseFilters::default().with_price_range(0.0, 500.0);
        assert_eq!(FilterSummary::active_filter_count(&narrowed), 1);

        let raised = BrowseFilters::default().with_price_range(5.0, 10_000.0);
        assert_eq!(FilterSummary::active_filter_count(&raised), 1);

        let widened = BrowseFilters {
            price_range: PriceRange::unbounded(),
            ..BrowseFilters::default()
        };
        assert_eq!(FilterSummary::active_filter_count(&widened), 0);
    }

    #[test]
    fn test_every_field_counted() {
        let filters = BrowseFilters::default()
            .with_search("holo")
            .with_condition("Mint")
            .with_vendor("v-1")
            .with_vendor("v-2")
            .with_tag("vintage")
            .with_price_range(10.0, 20.0);
        assert_eq!(FilterSummary::active_filter_count(&filters), 6);
    }

    #[test]
    fn test_format_category_label() {
        assert_eq!(
            FilterSummary::format_filter_label("category", "trading-cards"),
            "Trading Cards"
        );
        assert_eq!(FilterSummary::format_filter_label("category", "comics"), "Comics");
    }

    #[test]
    fn test_format_condition_label() {
        assert_eq!(
            FilterSummary::format_filter_label("condition", "PSA Graded"),
            "PSA Graded"
        );
        assert_eq!(FilterSummary::format_filter_label("condition", "Damaged"), "Damaged");
    }

    #[test]
    fn test_format_other_labels_unchanged() {
        assert_eq!(FilterSummary::format_filter_label("price", "10-500"), "10-500");
        assert_eq!(FilterSummary::format_filter_label("vendor", "v-1"), "v-1");
    }

    #[test]
    fn test_applied_filters() {
        let filters = BrowseFilters::default()
            .with_category("sealed-product")
            .with_price_range(25.0, 10_000.0)
            .with_in_stock(true);

        let applied = FilterSummary::applied_filters(&filters);
        let labels: Vec<&str> = applied.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Sealed Product", "25-10000", "In Stock"]);
        assert_eq!(applied.len(), FilterSummary::active_filter_count(&filters));
    }

    #[test]
    fn test_applied_price_without_upper_bound() {
        let filters = BrowseFilters {
            price_range: PriceRange::new(50.0, f64::MAX),
            ..BrowseFilters::default()
        };
        let applied = FilterSummary::applied_filters(&filters);
        assert_eq!(applied[0].value, "50+");
    }
}

use crate::models::PersonRecord;

/// Matching knobs for the filter engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Defaults to `false`: queries match regardless of case.
    pub case_sensitive: bool,
}

/// Substring filter with default options (case-insensitive).
pub fn filter(pool: &[PersonRecord], query: &str) -> Vec<PersonRecord> {
    filter_with(pool, query, FilterOptions::default())
}

/// Returns every record whose `first + last` contains `query`, in pool order.
///
/// Callers special-case the empty query before getting here; an empty query
/// would otherwise match the whole pool.
pub fn filter_with(pool: &[PersonRecord], query: &str, opts: FilterOptions) -> Vec<PersonRecord> {
    if opts.case_sensitive {
        pool.iter()
            .filter(|p| p.search_key().contains(query))
            .cloned()
            .collect()
    } else {
        let query_lower = query.to_lowercase();
        pool.iter()
            .filter(|p| p.search_key().to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    }
}

//! Case-insensitive table search.
//!
//! The legacy dashboards attached a live search box above each admin
//! table; the same semantics back the bookings table here: a row stays
//! visible when any of its cells contains the filter text.

#[cfg(test)]
#[path = "table_filter_test.rs"]
mod table_filter_test;

/// Whether a row should stay visible under `filter`. An empty or
/// whitespace-only filter matches everything.
pub fn row_matches<S: AsRef<str>>(filter: &str, cells: &[S]) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    cells
        .iter()
        .any(|cell| cell.as_ref().to_lowercase().contains(&needle))
}

pub struct LimitResult<T> {
    pub items: Vec<T>,
    pub excluded_by_limit: usize,
}

/// Keep the first `max_items` of an already ranked sequence.
///
/// Dropping the tail is not an error; the count is reported for metadata.
pub fn apply_limit<T>(ranked: Vec<T>, max_items: usize) -> LimitResult<T> {
    let mut items = ranked;
    let excluded_by_limit = items.len().saturating_sub(max_items);
    items.truncate(max_items);

    LimitResult {
        items,
        excluded_by_limit,
    }
}

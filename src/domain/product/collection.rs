use super::Product;

/// Next id to assign: the current maximum plus one, or 1 for an empty collection.
///
/// `None` once the maximum id is `u64::MAX`.
pub fn next_id(products: &[Product]) -> Option<u64> {
    products.iter().map(|p| p.id).max().unwrap_or(0).checked_add(1)
}

/// Products with `in_stock == true`, in stored order.
pub fn in_stock(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.in_stock).cloned().collect()
}

/// Index of the record with `id` (linear scan; collections are small).
pub fn position_of(products: &[Product], id: u64) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

/// Parses a path segment as a product id. Only positive decimal integers are accepted.
pub fn parse_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

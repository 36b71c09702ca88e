/// Sums a sequence of prices in pence. An empty sequence sums to 0.
/// Overflow wraps around instead of panicking.
pub fn total_price(prices: impl IntoIterator<Item = i64>) -> i64 {
    prices.into_iter().fold(0i64, i64::wrapping_add)
}

/// Averages a sequence of prices in pence.
///
/// - Returns `None` whenever the total is exactly 0, which covers both the
///   empty sequence and prices that cancel out.
/// - Otherwise, returns total / count as a float.
/// - Sums in `f64`, so large prices lose precision rather than overflow.
pub fn average_price(prices: impl IntoIterator<Item = i64>) -> Option<f64> {
    let (total, count) = prices
        .into_iter()
        .fold((0.0f64, 0usize), |(total, count), price| (total + price as f64, count + 1));

    if total == 0.0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// Picks one of the items with the greatest key, comparing only real items.
/// Ties go to whichever maximum `Iterator::max_by_key` settles on.
pub fn max_by_price<T, I, F>(items: I, price: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> i64,
{
    items.into_iter().max_by_key(|item| price(item))
}

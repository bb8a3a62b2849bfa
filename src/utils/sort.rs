use std::cmp::Ordering;

/// Stable descending arg-sort over scores, truncated to `k`.
/// - Sorts by score descending
/// - Equal scores keep their original (ascending index) order
/// - NaN is treated as lower than every finite score
///
/// Returns the positions into `scores`, length `min(k, scores.len())`.
pub fn top_k_desc_stable(scores: &[f64], k: usize) -> Vec<usize> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // sort_by は安定ソートなので同点は元の順序を保つ
    order.sort_by(|&a, &b| cmp_desc(scores[a], scores[b]));
    order.truncate(k);
    order
}

#[inline]
fn cmp_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

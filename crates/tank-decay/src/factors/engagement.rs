/// View-count engagement: `min(1.0, ln(1 + views) / ln(1 + target))`.
///
/// Range: 0.0 – 1.0. Diminishing returns: doubling views adds less than
/// double the engagement. A zero target is treated as 1.
pub fn normalize_views(view_count: u64, target: u32) -> f64 {
    let target = target.max(1) as f64;
    let views = view_count as f64;
    ((1.0 + views).ln() / (1.0 + target).ln()).min(1.0)
}

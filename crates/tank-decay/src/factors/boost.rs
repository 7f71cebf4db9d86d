/// Review boost: `min(1.0, s + α × (1 − s))`.
///
/// Recovers a fraction `α` of the headroom above `s`. Never lowers `s`,
/// and a strength at the ceiling stays at 1.0.
pub fn calculate(strength: f64, alpha: f64) -> f64 {
    (strength + alpha * (1.0 - strength)).min(1.0)
}

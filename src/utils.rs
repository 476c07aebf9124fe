pub mod date_formatter;
pub mod labels;

/// Batch sizes from which mapping and extent scans go through rayon.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Return `(min, max)` for two values.
pub fn sorted_pair(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

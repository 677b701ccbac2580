pub const COUNTER_DURATION_MS: f64 = 1800.0;

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Value a stat counter shows `elapsed_ms` after it started. Reaches
/// exactly `target` once the duration has passed.
pub fn counter_value(target: u32, elapsed_ms: f64) -> u32 {
    let progress = (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0);
    if progress >= 1.0 {
        return target;
    }
    (ease_out_cubic(progress) * target as f64).floor() as u32
}

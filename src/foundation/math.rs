/// Saturate `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics and never propagates `NaN`: a `NaN` input yields
/// `min`. Infinities saturate to the matching bound.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Format with exactly two decimals, normalizing `-0.00` to `0.00`.
///
/// Path data uses this fixed precision so golden strings stay stable across hosts.
pub(crate) fn fmt_fixed2(v: f64) -> String {
    let s = format!("{v:.2}");
    if s == "-0.00" { "0.00".to_owned() } else { s }
}

/// Format with at most `decimals` decimals and no trailing zeros (`1.50` -> `1.5`, `2.00` -> `2`).
pub(crate) fn fmt_compact(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    };
    if s == "-0" { "0".to_owned() } else { s }
}

/// Normalize a hue in degrees into `[0, 360)`.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

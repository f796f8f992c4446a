use crate::utils::constants::SERIES_COLORS;

// Anchor colors of the diverging cool-warm map: blue, neutral grey, red.
const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// `n` colors sampled evenly from the cool-warm map, endpoints excluded
pub fn coolwarm(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let t = (i + 1) as f64 / (n + 1) as f64;
            let (r, g, b) = coolwarm_at(t);
            format!("rgb({}, {}, {})", r, g, b)
        })
        .collect()
}

/// Cool-warm colors with the warm end first
pub fn coolwarm_reversed(n: usize) -> Vec<String> {
    let mut colors = coolwarm(n);
    colors.reverse();
    colors
}

fn coolwarm_at(t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t <= 0.5 {
        (COOL, NEUTRAL, t * 2.0)
    } else {
        (NEUTRAL, WARM, (t - 0.5) * 2.0)
    };

    let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
    (lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Line color for the series at `position`, cycling through the fixed palette
pub fn series_color(position: usize) -> &'static str {
    SERIES_COLORS[position % SERIES_COLORS.len()]
}

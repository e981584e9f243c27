//! Screen glow derived from the visible text
//!
//! The monitor's emissive light gets brighter as more characters are on
//! screen. Spaces do not count.

/// Brightness for the visible lines: non-space character count times `scale`
pub fn intensity<S: AsRef<str>>(lines: &[S], scale: f32) -> f32 {
    let count: usize = lines
        .iter()
        .map(|line| line.as_ref().chars().filter(|&c| c != ' ').count())
        .sum();
    count as f32 * scale
}

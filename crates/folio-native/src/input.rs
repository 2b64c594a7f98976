use clap::Parser;
use folio_core::ScrollPolicy;

/// Pixels per wheel "line" when a device reports line deltas.
pub const PIXELS_PER_LINE: f32 = 100.0;

#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "folio-native")]
#[command(about = "Scroll-driven portfolio scene in a desktop window")]
pub struct NativeOptions {
    /// Wheel policy: `accumulate` or `target`
    #[arg(long, default_value_t = ScrollPolicy::default())]
    pub scroll: ScrollPolicy,
}

// winit reports "scroll down" as a negative y; the choreographer expects the browser
// convention where scrolling down is a positive delta.

#[inline]
pub fn line_delta(y: f32) -> Option<f32> {
    y.is_finite().then_some(-y * PIXELS_PER_LINE)
}

#[inline]
pub fn pixel_delta(y: f64) -> Option<f32> {
    y.is_finite().then_some(-y as f32)
}

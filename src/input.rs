use folio_core::{ParsePolicyError, ScrollPolicy};

/// `WheelEvent.deltaY` as the choreographer expects it. Non-finite values count as missing.
#[inline]
pub fn wheel_delta(raw: f64) -> Option<f32> {
    raw.is_finite().then_some(raw as f32)
}

/// Look up `key` in a `location.search` string and parse it as a scroll policy.
///
/// `Ok(None)` when the key is absent or empty.
pub fn policy_from_query(search: &str, key: &str) -> Result<Option<ScrollPolicy>, ParsePolicyError> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k == key && !v.is_empty() {
            return v.parse::<ScrollPolicy>().map(Some);
        }
    }
    Ok(None)
}

/// Inline style placing the label overlay.
///
/// - `anchor`: normalized screen position of the label origin, y down
/// - `height_frac`: projected label height as a share of the viewport height
#[inline]
pub fn label_css(anchor: [f32; 2], height_frac: f32, max_vh: f32) -> String {
    let font_vh = (height_frac * 100.0).clamp(0.0, max_vh);
    format!(
        "position:absolute;left:{:.2}%;top:{:.2}%;font-size:{:.2}vh;transform:translateY(-100%);pointer-events:none;",
        anchor[0] * 100.0,
        anchor[1] * 100.0,
        font_vh
    )
}

/// CSS pixels for a canvas backing dimension. A bad `device_pixel_ratio` counts as 1.
#[inline]
pub fn css_size(backing_px: u32, device_pixel_ratio: f64) -> u32 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    ((backing_px as f64 / dpr).round() as u32).max(1)
}

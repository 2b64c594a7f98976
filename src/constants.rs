// DOM hooks and web-only tuning.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const LABEL_ID: &str = "name-label";

// `?scroll=accumulate` or `?scroll=target`
pub const SCROLL_QUERY_KEY: &str = "scroll";

// Upper bound for the label font, as a share of viewport height
pub const LABEL_MAX_VH: f32 = 20.0;

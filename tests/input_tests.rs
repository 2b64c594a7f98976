// Host-side tests for pure input functions of both frontends.
// The web crate is wasm-only and the native one is a binary, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod native_input {
    include!("../crates/folio-native/src/input.rs");
}

use clap::Parser;
use folio_core::ScrollPolicy;
use input::*;
use native_input::NativeOptions;

#[test]
fn wheel_delta_drops_non_finite_values() {
    assert_eq!(wheel_delta(120.0), Some(120.0));
    assert_eq!(wheel_delta(-3.5), Some(-3.5));
    assert_eq!(wheel_delta(f64::NAN), None);
    assert_eq!(wheel_delta(f64::INFINITY), None);
}

#[test]
fn policy_from_query_finds_the_key() {
    assert_eq!(
        policy_from_query("?scroll=accumulate", "scroll"),
        Ok(Some(ScrollPolicy::Accumulate))
    );
    assert_eq!(
        policy_from_query("?debug=1&scroll=target", "scroll"),
        Ok(Some(ScrollPolicy::TargetDirection))
    );
    assert_eq!(
        policy_from_query("scroll=additive", "scroll"),
        Ok(Some(ScrollPolicy::Accumulate))
    );
}

#[test]
fn policy_from_query_absent_or_empty() {
    assert_eq!(policy_from_query("", "scroll"), Ok(None));
    assert_eq!(policy_from_query("?", "scroll"), Ok(None));
    assert_eq!(policy_from_query("?scroll=", "scroll"), Ok(None));
    assert_eq!(policy_from_query("?scroll", "scroll"), Ok(None));
    assert_eq!(policy_from_query("?scrolling=accumulate", "scroll"), Ok(None));
}

#[test]
fn policy_from_query_rejects_unknown_values() {
    let err = policy_from_query("?scroll=wobble", "scroll").unwrap_err();
    assert!(err.to_string().contains("wobble"));
}

#[test]
fn label_css_places_and_caps_font() {
    let css = label_css([0.25, 0.1], 0.05, 20.0);
    assert!(css.contains("left:25.00%"));
    assert!(css.contains("top:10.00%"));
    assert!(css.contains("font-size:5.00vh"));

    let capped = label_css([0.0, 0.0], 3.0, 20.0);
    assert!(capped.contains("font-size:20.00vh"));
}

#[test]
fn native_args_select_policy() {
    let parse = |args: &[&str]| {
        NativeOptions::try_parse_from(std::iter::once("folio-native").chain(args.iter().copied()))
    };
    assert_eq!(parse(&[]).unwrap().scroll, ScrollPolicy::TargetDirection);
    assert_eq!(
        parse(&["--scroll", "accumulate"]).unwrap().scroll,
        ScrollPolicy::Accumulate
    );
    assert_eq!(
        parse(&["--scroll=target"]).unwrap().scroll,
        ScrollPolicy::TargetDirection
    );
    assert!(parse(&["--scroll"]).is_err());
    assert!(parse(&["--scroll=sideways"]).is_err());
    assert!(parse(&["--fullscreen"]).is_err());
}

#[test]
fn css_size_divides_out_the_pixel_ratio() {
    assert_eq!(css_size(2000, 2.0), 1000);
    assert_eq!(css_size(1500, 1.5), 1000);
    assert_eq!(css_size(800, 1.0), 800);
    assert_eq!(css_size(800, f64::NAN), 800);
    assert_eq!(css_size(800, 0.0), 800);
    assert_eq!(css_size(0, 2.0), 1);
}

#[test]
fn orbit_radii_ignore_the_pixel_ratio() {
    use folio_core::{OrbitLight, OrbitParams, Viewport};
    let light = OrbitLight::new(OrbitParams::default(), [1.0; 3]);
    let lowdpi = Viewport::new(css_size(1280, 1.0), css_size(720, 1.0));
    let hidpi = Viewport::new(css_size(2560, 2.0), css_size(1440, 2.0));
    assert_eq!(light.radii(lowdpi), light.radii(hidpi));
}

#[test]
fn native_wheel_follows_browser_sign() {
    // winit: negative y scrolls down, browsers: positive deltaY scrolls down
    assert_eq!(
        native_input::line_delta(-1.0),
        Some(native_input::PIXELS_PER_LINE)
    );
    assert_eq!(native_input::pixel_delta(12.0), Some(-12.0));
    assert_eq!(native_input::line_delta(f32::NAN), None);
    assert_eq!(native_input::pixel_delta(f64::INFINITY), None);
}

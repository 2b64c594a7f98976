use crate::constants::{LABEL_ID, LABEL_MAX_VH};
use crate::input;
use folio_core::{SceneCamera, TextLabel};
use glam::Vec3;
use web_sys as web;

/// DOM text element tracking the 3D name label.
pub struct LabelOverlay {
    el: web::HtmlElement,
    anchor: Vec3,
    size: f32,
    hidden: bool,
}

impl LabelOverlay {
    /// Use `#name-label` if the page has one, otherwise create it under `<body>`.
    pub fn mount(document: &web::Document, label: &TextLabel) -> Option<Self> {
        let el = match document.get_element_by_id(LABEL_ID) {
            Some(el) => el,
            None => {
                let el = document.create_element("div").ok()?;
                el.set_id(LABEL_ID);
                document.body()?.append_child(&el).ok()?;
                el
            }
        };
        let el: web::HtmlElement = wasm_bindgen::JsCast::dyn_into(el).ok()?;
        el.set_inner_text(&label.text);
        log::info!("[scene] label overlay mounted: {}", label.text);
        Some(Self {
            el,
            anchor: label.position,
            size: label.size,
            hidden: false,
        })
    }

    pub fn place(&mut self, camera: &SceneCamera) {
        let base = camera.project_to_screen(self.anchor);
        let top = camera.project_to_screen(self.anchor + Vec3::Y * self.size);
        match (base, top) {
            (Some(b), Some(t)) => {
                let css = input::label_css(b, (b[1] - t[1]).abs(), LABEL_MAX_VH);
                _ = self.el.set_attribute("style", &css);
                self.hidden = false;
            }
            _ => {
                if !self.hidden {
                    _ = self.el.set_attribute("style", "display:none");
                    self.hidden = true;
                }
            }
        }
    }
}

use tilt_core::{css_value, ParamSink, VisualParams};
use web_sys as web;

/// Writes the parameter set as CSS custom properties on the card; the
/// stylesheet turns `--rx`, `--ry`, `--tx`, `--ty`, `--posx`, `--posy` into
/// the 3D transform and the holo highlight gradient.
pub struct CssVarSink {
    style: web::CssStyleDeclaration,
}

impl CssVarSink {
    pub fn new(card: &web::HtmlElement) -> Self {
        Self {
            style: card.style(),
        }
    }
}

impl ParamSink for CssVarSink {
    fn write(&mut self, params: &VisualParams) {
        for (name, value, unit) in params.entries() {
            _ = self.style.set_property(name, &css_value(value, unit));
        }
    }
}

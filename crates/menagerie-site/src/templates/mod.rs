//! Askama Templates
//!
//! Template structs for rendering the picker page and the option-list
//! fragment.

use askama::Template;
use askama_web::WebTemplate;

use crate::{speed::Speed, BUILD_VERSION};

/// Speed picker page template.
#[derive(Template, WebTemplate)]
#[template(path = "picker.html")]
pub struct PickerTemplate {
    pub title: String,
    pub selected: &'static str,
    pub animals: &'static [&'static str],
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl PickerTemplate {
    pub fn new(title: impl Into<String>, speed: Speed) -> Self {
        Self {
            title: title.into(),
            selected: speed.as_str(),
            animals: speed.animals(),
            v: BUILD_VERSION,
        }
    }
}

/// Option-list fragment, rendered alone by the delaying endpoint and
/// included by the picker page.
#[derive(Template, WebTemplate)]
#[template(path = "options.html")]
pub struct OptionsTemplate {
    pub selected: &'static str,
    pub animals: &'static [&'static str],
}

impl OptionsTemplate {
    pub fn new(speed: Speed) -> Self {
        Self {
            selected: speed.as_str(),
            animals: speed.animals(),
        }
    }
}

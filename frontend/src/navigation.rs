use log::{debug, error, info};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// In-page anchors the nav can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Services, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    // The mobile sheet has room for a longer label
    pub fn sheet_label(self) -> &'static str {
        match self {
            Section::About => "About Me",
            other => other.nav_label(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("no browser window")]
    NoWindow,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for NavigationError {
    fn from(value: JsValue) -> Self {
        NavigationError::Dom(format!("{:?}", value))
    }
}

/// Smooth-scrolls to `section`. Returns false when the anchor isn't on the
/// page, which is not an error.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    match document.get_element_by_id(section.id()) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No #{} element to scroll to", section.id());
            false
        }
    }
}

/// Saves a same-origin file through a throwaway `<a download>` element.
pub fn download_file(href: &str, filename: &str) -> Result<(), NavigationError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(NavigationError::NoWindow)?;
    let body = document.body().ok_or(NavigationError::NoBody)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into().map_err(|e: web_sys::Element| {
        NavigationError::Dom(format!("created <{}> is not an anchor", e.tag_name()))
    })?;
    link.set_href(href);
    link.set_download(filename);

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

pub fn download_cv() {
    match download_file(config::CV_PATH, config::CV_FILENAME) {
        Ok(()) => info!("Started CV download"),
        Err(e) => error!("CV download failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids_are_stable() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["about", "services", "contact"]);
    }

    #[test]
    fn sheet_labels_only_differ_for_about() {
        assert_eq!(Section::About.sheet_label(), "About Me");
        assert_eq!(Section::Services.sheet_label(), Section::Services.nav_label());
        assert_eq!(Section::Contact.sheet_label(), "Contact");
    }

    #[test]
    fn errors_read_well_in_the_console() {
        assert_eq!(NavigationError::NoBody.to_string(), "document has no body");
    }
}

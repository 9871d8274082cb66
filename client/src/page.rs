//! Browser implementation of [`Page`](crate::bootstrap::Page).
//!
//! Requires a browser environment; compiled only with the `csr` feature.

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement};

use crate::bootstrap::{BootError, Page, contains_stylesheet};

/// The live `window.document`.
pub struct WebPage {
    document: Document,
}

impl WebPage {
    /// Grab the current document.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::NoDocument`] outside a window context.
    pub fn current() -> Result<Self, BootError> {
        let document = web_sys::window().and_then(|w| w.document()).ok_or(BootError::NoDocument)?;
        Ok(Self { document })
    }
}

fn dom_error(err: &wasm_bindgen::JsValue) -> BootError {
    BootError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl Page for WebPage {
    type Mount = HtmlElement;

    fn add_root_class(&mut self, class: &str) -> Result<(), BootError> {
        let root = self.document.document_element().ok_or(BootError::NoDocument)?;
        // DOMTokenList.add is a no-op for classes already present.
        root.class_list().add_1(class).map_err(|e| dom_error(&e))
    }

    fn ensure_stylesheet(&mut self, href: &str) -> Result<(), BootError> {
        // Compare attribute values rather than building a selector from `href`.
        let links = self.document.query_selector_all("link[rel=\"stylesheet\"]").map_err(|e| dom_error(&e))?;
        let existing = (0..links.length())
            .filter_map(|i| links.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|link| link.get_attribute("href"));
        if contains_stylesheet(existing, href) {
            return Ok(());
        }

        let head = self.document.head().ok_or(BootError::NoDocument)?;
        let link = self.document.create_element("link").map_err(|e| dom_error(&e))?;
        link.set_attribute("rel", "stylesheet").map_err(|e| dom_error(&e))?;
        link.set_attribute("href", href).map_err(|e| dom_error(&e))?;
        head.append_child(&link).map_err(|e| dom_error(&e))?;
        Ok(())
    }

    fn mount_point(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }
}

//! One-shot startup wiring between Leptos and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm entry point calls [`initialize`] once after the document is
//! available. It marks the document root with the theme class, registers the
//! global stylesheet, then mounts the root component under the mount element.
//!
//! DESIGN
//! ======
//! The theme is a [`BootConfig`] value handed to the root component rather
//! than an ambient DOM side effect, so it can be overridden and tested
//! without a browser. The page itself sits behind the [`Page`] trait; the
//! browser implementation lives in `crate::page`.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

/// Element id the application mounts under.
pub const DEFAULT_MOUNT_ID: &str = "app";

/// Stylesheet emitted next to `index.html` by the build.
pub const DEFAULT_STYLESHEET_HREF: &str = "/padscope.css";

/// Presentation mode selected through a class on the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Class added to the document root element.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Application configuration threaded into the root component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootConfig {
    pub theme: Theme,
    pub mount_id: String,
    pub stylesheet_href: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_owned(),
        }
    }
}

/// Startup fault: a required page element or resource is missing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error("no document available")]
    NoDocument,
    #[error("mount element #{id} not found")]
    MissingMountPoint { id: String },
    #[error("no stylesheet configured")]
    MissingStylesheet,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Page structure the bootstrapper writes to.
pub trait Page {
    /// Handle to the element the application mounts under.
    type Mount;

    /// Add `class` to the document root element. Class sets deduplicate.
    fn add_root_class(&mut self, class: &str) -> Result<(), BootError>;

    /// Make sure a stylesheet link for `href` is present exactly once.
    fn ensure_stylesheet(&mut self, href: &str) -> Result<(), BootError>;

    /// Look up the element with the given id.
    fn mount_point(&self, id: &str) -> Option<Self::Mount>;
}

/// Whether `href` is among the `existing` stylesheet hrefs.
///
/// Matches the attribute value verbatim, so quotes or backslashes in the
/// href need no escaping.
pub fn contains_stylesheet<I, S>(existing: I, href: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    existing.into_iter().any(|h| h.as_ref() == href)
}

/// Run the startup sequence: theme class, stylesheet, then exactly one
/// mount of the root component.
///
/// `mount` constructs the application for the root component with `config`
/// and attaches it to the mount element.
///
/// # Errors
///
/// Returns [`BootError::MissingMountPoint`] without mounting when the mount
/// element is absent, [`BootError::MissingStylesheet`] when no stylesheet is
/// configured, and any error reported by the page or the mount itself.
pub fn initialize<P, M>(page: &mut P, config: &BootConfig, mount: M) -> Result<(), BootError>
where
    P: Page,
    M: FnOnce(P::Mount, &BootConfig) -> Result<(), BootError>,
{
    page.add_root_class(config.theme.class_name())?;

    let href = config.stylesheet_href.trim();
    if href.is_empty() {
        return Err(BootError::MissingStylesheet);
    }
    page.ensure_stylesheet(href)?;

    let target = page
        .mount_point(&config.mount_id)
        .ok_or_else(|| BootError::MissingMountPoint { id: config.mount_id.clone() })?;
    mount(target, config)
}

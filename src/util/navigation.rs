//! Page navigation with query parameters.
//!
//! DESIGN
//! ======
//! Location changes go through [`Navigator`] so callers can assert the URL
//! that would be visited. In the browser, [`BrowserNavigator`] performs a full
//! page load by assigning `location.href`, which abandons the current page.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;

use super::query::{encode_query, query_value};

/// Pages served by the backend's HTML routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// User picker and drawing grid.
    Index,
    Archive,
    LensView,
    DrawingDetail,
}

impl Page {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Archive => "/archive",
            Self::LensView => "/lens-view",
            Self::DrawingDetail => "/drawing-detail",
        }
    }
}

impl AsRef<str> for Page {
    fn as_ref(&self) -> &str {
        self.path()
    }
}

/// Read and change the current location.
pub trait Navigator {
    /// Query string of the current location, including the leading `?`, or
    /// `""` when there is none.
    fn search(&self) -> String;

    /// Navigate to `url`, replacing the current page.
    fn assign(&self, url: &str);
}

/// `page` followed by `?` and the encoded `params`, or just `page` when
/// `params` is empty.
pub fn build_url<I, K, V>(page: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let query = encode_query(params);
    if query.is_empty() {
        page.to_owned()
    } else {
        format!("{page}?{query}")
    }
}

pub struct Navigation<N> {
    navigator: N,
}

impl<N: Navigator> Navigation<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Build the URL for `page` and `params` and navigate to it.
    pub fn navigate<I, K, V>(&self, page: impl AsRef<str>, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = build_url(page.as_ref(), params);
        log::debug!("navigate {url}");
        self.navigator.assign(&url);
    }

    /// Value of `name` in the current query string.
    pub fn param(&self, name: &str) -> Option<String> {
        query_value(&self.navigator.search(), name)
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process navigator that records every URL it is sent to.
///
/// Assigning a URL also makes its query string current, as a real page load
/// would.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    search: RefCell<String>,
    visited: RefCell<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a location whose query string is `search`.
    pub fn at(search: &str) -> Self {
        Self { search: RefCell::new(search.to_owned()), visited: RefCell::default() }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last_visited(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn search(&self) -> String {
        self.search.borrow().clone()
    }

    fn assign(&self, url: &str) {
        // `location.search` stops at the fragment.
        let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
        let search = without_fragment
            .find('?')
            .map_or_else(String::new, |i| without_fragment[i..].to_owned());
        *self.search.borrow_mut() = search;
        self.visited.borrow_mut().push(url.to_owned());
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.location`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn assign(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::warn!("navigation to {url} failed: {e:?}");
        }
    }
}

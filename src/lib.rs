//! # mirror-client
//!
//! Browser-side plumbing for the Drawing Mirror front-end: a JSON request
//! client over the `/api` base path, a `localStorage`-backed accessor for the
//! signed-in user, and query-string navigation helpers.
//!
//! Browser bindings live behind the `hydrate` feature; the `native` feature
//! adds a `reqwest` transport for use outside the browser. Without either,
//! the crate still builds with in-memory stores and navigators, which is how
//! the tests run.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

pub use config::{ClientConfig, ConfigError};
pub use net::client::{ApiError, HttpRequest, HttpResponse, Method, RequestClient, Transport, TransportError};
pub use state::persisted::PersistedState;
pub use util::navigation::{Navigation, Navigator, Page, build_url};
pub use util::storage::{KeyValueStore, MemoryStorage};

/// Install console logging and the panic hook for the WASM build.
///
/// Safe to call more than once; later calls leave the first logger in place.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

pub mod app;
pub mod app_dirs;
pub mod catalog;
pub mod classify;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod snippet;
pub mod ui;

pub use app::{App, Flow};
pub use catalog::{Catalog, SnippetSet};
pub use classify::{classify, CharState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CatalogError;
pub use metrics::Metrics;
pub use session::{reset_session, Session};
pub use snippet::Snippet;

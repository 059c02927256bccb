//! Browser-print PDF backend.
//!
//! A content producer's markup is wrapped by the compositor in a document
//! whose stylesheet mirrors the vector backend's palette and fonts, printed
//! to PDF by a headless browser session, and given a page count afterwards.
//!
//! The browser itself sits behind [`BrowserLauncher`]/[`BrowserSession`];
//! [`ChromeLauncher`] drives a local Chrome or Chromium.

mod chrome;
mod compose;
pub mod page_count;
mod renderer;
mod session;

pub use chrome::{CHROME_ENV, ChromeLauncher, ChromeSession};
pub use compose::{compose_document, stylesheet};
pub use page_count::{PageCountStrategy, count_page_markers, count_pages};
pub use renderer::{
    BrowserOptions, BrowserRenderer, DEFAULT_PRINT_TIMEOUT, DEFAULT_READY_TIMEOUT,
    DEFAULT_VIRTUAL_TIME_BUDGET,
};
pub use session::{BrowserLauncher, BrowserSession, PrintMargins, PrintOptions};

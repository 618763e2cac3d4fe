//! Viewmaster
//!
//! Viewport geometry helpers: window scroll offset, element visibility,
//! overflow detection and scroll direction, for sticky headers, "back to
//! top" controls and scroll-triggered effects.
//!
//! The crate follows a Pure Core / Impure Shell split:
//!
//! - [`geometry`]: pure arithmetic over plain numbers
//! - [`host`]: traits for what a window and an element report, with
//!   recorded snapshots and (on wasm32) live `web-sys` bindings
//! - [`viewport`]: the [`Viewport`] facade exposing every query
//!
//! The remaining modules back the `viewmaster` probe binary, which
//! evaluates recorded scenes from the command line.

pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod scene;
pub mod viewport;

pub use geometry::{Rect, ScrollDirection, ScrollTracker};
pub use host::{ElementSource, WindowSource};
pub use viewport::Viewport;

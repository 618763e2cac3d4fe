//! Pure geometry layer
//!
//! Arithmetic over viewport and element measurements. Nothing in this module
//! talks to a host; the [`crate::viewport`] facade reads measurements through
//! [`crate::host`] and hands plain numbers down here.
//!
//! # Module Structure
//!
//! - `types`: `Rect` and reading helpers (buffer normalization, fallback chains)
//! - `visibility`: visible height and the visibility/overflow predicates
//! - `scroll`: `ScrollDirection`, `ScrollTracker` and the pure direction function

pub mod scroll;
pub mod types;
pub mod visibility;

pub use scroll::{scroll_direction, ScrollDirection, ScrollTracker};
pub use types::{buffer_or_zero, first_positive_reading, first_reading, Rect};
pub use visibility::{
    has_overflown, is_bottom_in_view, is_cut_off, is_in_viewport, is_top_in_view,
    vertical_distance, visible_height,
};

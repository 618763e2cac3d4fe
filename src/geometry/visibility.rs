//! Visibility predicates over plain viewport and element measurements.
//!
//! Every function here is total arithmetic: no host access, no state.
//! `NaN` inputs flow through unchanged, and comparisons against `NaN`
//! are false, so a missing measurement never reports an element as visible.

use super::types::Rect;

/// Height of the part of an element that lies inside the viewport.
///
/// # Arguments
/// - `rect`: the element's bounding rectangle relative to the viewport
/// - `outer_height`: the element's full rendered height (padding and border included)
/// - `window_height`: the viewport height
///
/// # Known quirk
/// When the element starts at or above the viewport top and ends inside it,
/// the result is `rect.bottom`, which is a position rather than a clipped
/// height. It is only equal to the visible height while `rect.top <= 0`
/// holds, which is exactly the branch it is used in. When the element spans
/// the whole viewport the result is `window_height`, even if that exceeds
/// `outer_height`.
pub fn visible_height(rect: Rect, outer_height: f64, window_height: f64) -> f64 {
    if rect.top > 0.0 {
        // space above the element in the viewport
        nan_min(outer_height, window_height - rect.top)
    } else if rect.bottom < window_height {
        // space below the element in the viewport
        rect.bottom
    } else {
        window_height
    }
}

/// `f64::min` drops a `NaN` operand; a missing measurement must stay missing.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Whether an element is partially visible.
///
/// An element with no visible height is absent, not cut off.
pub fn is_cut_off(visible_height: f64, outer_height: f64) -> bool {
    visible_height > 0.0 && visible_height < outer_height
}

/// Whether an element's top edge has not yet scrolled above the viewport top.
///
/// A positive `buffer` keeps the answer `true` for that many pixels past the top.
pub fn is_top_in_view(top: f64, buffer: f64) -> bool {
    top + buffer > 0.0
}

/// Whether an element's bottom edge sits above the viewport's bottom edge.
///
/// Both bottoms are absolute document offsets. The element must also have
/// some visible height.
pub fn is_bottom_in_view(
    visible_height: f64,
    element_bottom: f64,
    viewport_bottom: f64,
    buffer: f64,
) -> bool {
    visible_height > 0.0 && element_bottom + buffer < viewport_bottom
}

/// Whether an element's top edge has risen above the viewport's bottom threshold.
///
/// One-sided: an element scrolled far past the viewport top still answers `true`.
/// This is the check used to hide a floating "back to top" control once a
/// footer comes into view.
pub fn is_in_viewport(top: f64, buffer: f64, window_height: f64) -> bool {
    top - buffer < window_height
}

/// Gap between the bottom edge of `upper` and the top edge of `lower`.
///
/// Offsets are document-relative; the result is negative when they overlap.
pub fn vertical_distance(upper_top: f64, upper_client_height: f64, lower_top: f64) -> f64 {
    lower_top - (upper_top + upper_client_height)
}

/// Whether content is taller than the box that clips it.
pub fn has_overflown(scroll_height: f64, offset_height: f64) -> bool {
    scroll_height > offset_height
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f64 = 800.0;

    mod visible_height {
        use super::*;

        #[test]
        fn element_fully_inside_viewport_is_fully_visible() {
            let rect = Rect::vertical(100.0, 400.0);
            assert_eq!(visible_height(rect, 300.0, WINDOW), 300.0);
        }

        #[test]
        fn element_flush_with_viewport_top_is_fully_visible() {
            let rect = Rect::vertical(0.0, 300.0);
            assert_eq!(visible_height(rect, 300.0, WINDOW), 300.0);
        }

        #[test]
        fn element_extending_below_viewport_is_clipped_to_remaining_space() {
            let rect = Rect::vertical(600.0, 1100.0);
            assert_eq!(visible_height(rect, 500.0, WINDOW), 200.0);
        }

        #[test]
        fn element_entirely_below_viewport_has_no_visible_height() {
            let rect = Rect::vertical(900.0, 1000.0);
            let visible = visible_height(rect, 100.0, WINDOW);
            assert!(visible <= 0.0, "expected non-positive, got {visible}");
        }

        #[test]
        fn element_scrolled_partly_past_top_uses_bottom_edge() {
            let rect = Rect::vertical(-100.0, 200.0);
            assert_eq!(visible_height(rect, 300.0, WINDOW), 200.0);
        }

        #[test]
        fn element_spanning_viewport_reports_window_height() {
            let rect = Rect::vertical(-100.0, 1500.0);
            assert_eq!(visible_height(rect, 1600.0, WINDOW), WINDOW);
        }

        #[test]
        fn known_quirk_spanning_branch_ignores_outer_height() {
            // Bottom at the viewport edge with a stale, smaller outer height.
            let rect = Rect::vertical(-10.0, WINDOW);
            assert_eq!(visible_height(rect, 50.0, WINDOW), WINDOW);
        }

        #[test]
        fn known_quirk_element_above_viewport_reports_negative_bottom() {
            let rect = Rect::vertical(-300.0, -100.0);
            assert_eq!(visible_height(rect, 200.0, WINDOW), -100.0);
        }

        #[test]
        fn nan_window_height_propagates_below_top() {
            let rect = Rect::vertical(10.0, 100.0);
            assert!(visible_height(rect, 90.0, f64::NAN).is_nan());
        }

        #[test]
        fn nan_window_height_propagates() {
            let rect = Rect::vertical(-10.0, 100.0);
            assert!(visible_height(rect, 110.0, f64::NAN).is_nan());
        }
    }

    mod cut_off {
        use super::*;

        #[test]
        fn partially_visible_element_is_cut_off() {
            assert!(is_cut_off(200.0, 500.0));
        }

        #[test]
        fn fully_visible_element_is_not_cut_off() {
            assert!(!is_cut_off(300.0, 300.0));
        }

        #[test]
        fn absent_element_is_not_cut_off() {
            assert!(!is_cut_off(0.0, 300.0));
            assert!(!is_cut_off(-100.0, 300.0));
        }

        #[test]
        fn nan_visible_height_is_not_cut_off() {
            assert!(!is_cut_off(f64::NAN, 300.0));
        }
    }

    mod top_in_view {
        use super::*;

        #[test]
        fn positive_top_without_buffer_is_in_view() {
            assert!(is_top_in_view(1.0, 0.0));
        }

        #[test]
        fn zero_top_without_buffer_is_not_in_view() {
            assert!(!is_top_in_view(0.0, 0.0));
        }

        #[test]
        fn buffer_extends_threshold_past_viewport_top() {
            assert!(is_top_in_view(-49.0, 50.0));
            assert!(!is_top_in_view(-50.0, 50.0));
        }
    }

    mod bottom_in_view {
        use super::*;

        #[test]
        fn visible_element_ending_above_viewport_bottom_is_in_view() {
            assert!(is_bottom_in_view(100.0, 900.0, 1000.0, 0.0));
        }

        #[test]
        fn element_ending_below_viewport_bottom_is_not_in_view() {
            assert!(!is_bottom_in_view(100.0, 1100.0, 1000.0, 0.0));
        }

        #[test]
        fn buffer_raises_required_clearance() {
            assert!(!is_bottom_in_view(100.0, 900.0, 1000.0, 100.0));
            assert!(is_bottom_in_view(100.0, 900.0, 1000.0, 99.0));
        }

        #[test]
        fn invisible_element_is_never_in_view() {
            assert!(!is_bottom_in_view(0.0, 100.0, 1000.0, 0.0));
        }
    }

    mod in_viewport {
        use super::*;

        #[test]
        fn element_above_bottom_threshold_is_in_viewport() {
            assert!(is_in_viewport(799.0, 0.0, WINDOW));
        }

        #[test]
        fn element_at_bottom_threshold_is_not_in_viewport() {
            assert!(!is_in_viewport(WINDOW, 0.0, WINDOW));
        }

        #[test]
        fn buffer_lets_element_count_before_it_arrives() {
            assert!(is_in_viewport(850.0, 100.0, WINDOW));
        }

        #[test]
        fn element_far_above_viewport_still_counts() {
            assert!(is_in_viewport(-5000.0, 0.0, WINDOW));
        }
    }

    mod distance {
        use super::*;

        #[test]
        fn gap_between_stacked_elements() {
            assert_eq!(vertical_distance(10.0, 20.0, 50.0), 20.0);
        }

        #[test]
        fn overlapping_elements_have_negative_distance() {
            assert_eq!(vertical_distance(10.0, 100.0, 50.0), -60.0);
        }

        #[test]
        fn touching_elements_have_zero_distance() {
            assert_eq!(vertical_distance(0.0, 40.0, 40.0), 0.0);
        }
    }

    mod overflow {
        use super::*;

        #[test]
        fn taller_content_has_overflown() {
            assert!(has_overflown(500.0, 300.0));
        }

        #[test]
        fn equal_heights_have_not_overflown() {
            assert!(!has_overflown(300.0, 300.0));
        }

        #[test]
        fn shorter_content_has_not_overflown() {
            assert!(!has_overflown(100.0, 300.0));
        }
    }
}

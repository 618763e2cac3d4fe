//! Core geometry value types

use serde::{Deserialize, Serialize};

/// An element's bounding rectangle relative to the viewport, in CSS pixels.
///
/// Mirrors what a layout engine reports for `getBoundingClientRect()`:
/// `top` is negative once the element's top edge has scrolled above the
/// viewport, and `bottom` exceeds the viewport height while the element
/// still extends below it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the viewport top to the element's top edge.
    pub top: f64,
    /// Distance from the viewport top to the element's bottom edge.
    pub bottom: f64,
    /// Distance from the viewport left to the element's left edge.
    #[serde(default)]
    pub left: f64,
    /// Distance from the viewport left to the element's right edge.
    #[serde(default)]
    pub right: f64,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Create a zero-width rectangle spanning `top..bottom`.
    pub fn vertical(top: f64, bottom: f64) -> Self {
        Self::new(top, bottom, 0.0, 0.0)
    }

    /// Vertical extent (`bottom - top`).
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

}

/// Normalize an optional threshold buffer.
///
/// Absent and `NaN` buffers both count as zero.
pub fn buffer_or_zero(buffer: Option<f64>) -> f64 {
    buffer.filter(|b| !b.is_nan()).unwrap_or(0.0)
}

/// Pick the first available reading from a priority-ordered list of sources.
pub fn first_reading<I>(readings: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    readings.into_iter().flatten().next()
}

/// Pick the first positive reading from a priority-ordered list of sources.
///
/// A zero-sized viewport is treated as unreported, so the next source is tried.
pub fn first_positive_reading<I>(readings: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    first_reading(readings.into_iter().map(|r| r.filter(|v| *v > 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rect {
        use super::*;

        #[test]
        fn height_is_bottom_minus_top() {
            let rect = Rect::vertical(100.0, 400.0);
            assert_eq!(rect.height(), 300.0);
        }

        #[test]
        fn height_survives_negative_top() {
            let rect = Rect::vertical(-50.0, 150.0);
            assert_eq!(rect.height(), 200.0);
        }

        #[test]
        fn deserializes_without_horizontal_edges() {
            let rect: Rect = serde_json::from_str(r#"{"top": 1, "bottom": 2}"#).unwrap();
            assert_eq!(rect, Rect::vertical(1.0, 2.0));
        }
    }

    mod buffer {
        use super::*;

        #[test]
        fn none_is_zero() {
            assert_eq!(buffer_or_zero(None), 0.0);
        }

        #[test]
        fn nan_is_zero() {
            assert_eq!(buffer_or_zero(Some(f64::NAN)), 0.0);
        }

        #[test]
        fn value_passes_through() {
            assert_eq!(buffer_or_zero(Some(-25.0)), -25.0);
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn first_defined_reading_wins() {
            assert_eq!(first_reading([None, Some(12.0), Some(99.0)]), Some(12.0));
        }

        #[test]
        fn zero_is_a_defined_reading() {
            assert_eq!(first_reading([Some(0.0), Some(40.0)]), Some(0.0));
        }

        #[test]
        fn positive_reading_skips_zero() {
            assert_eq!(first_positive_reading([Some(0.0), Some(700.0)]), Some(700.0));
        }

        #[test]
        fn positive_reading_skips_negative_and_nan() {
            assert_eq!(
                first_positive_reading([Some(-1.0), Some(f64::NAN), Some(640.0)]),
                Some(640.0)
            );
        }

        #[test]
        fn positive_reading_of_all_zero_is_none() {
            assert_eq!(first_positive_reading([Some(0.0), Some(0.0)]), None);
        }

        #[test]
        fn all_missing_yields_none() {
            assert_eq!(first_reading([None, None, None, None]), None);
        }
    }
}

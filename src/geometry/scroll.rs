//! Scroll direction tracking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertical direction of the most recent scroll movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Offset decreased or stayed put.
    Up,
    /// Offset increased.
    Down,
}

impl ScrollDirection {
    /// Lowercase name, as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare a fresh scroll reading against the previous one.
///
/// Returns the direction and the value to remember for the next call,
/// which is always `current`. Ties resolve to [`ScrollDirection::Up`].
pub fn scroll_direction(previous: f64, current: f64) -> (ScrollDirection, f64) {
    let direction = if current > previous {
        ScrollDirection::Down
    } else {
        ScrollDirection::Up
    };
    (direction, current)
}

/// Caller-owned memory of the last observed scroll offset.
///
/// Call [`ScrollTracker::observe`] on every scroll event; the first call
/// only establishes a baseline relative to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    previous: f64,
}

impl ScrollTracker {
    /// Create a tracker whose previous offset is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that remembers `previous` as the last offset.
    pub fn starting_at(previous: f64) -> Self {
        Self { previous }
    }

    /// The offset observed by the most recent call to [`observe`](Self::observe).
    pub fn previous(&self) -> f64 {
        self.previous
    }

    /// Record `current` and report which way it moved from the previous offset.
    pub fn observe(&mut self, current: f64) -> ScrollDirection {
        let (direction, next) = scroll_direction(self.previous, current);
        self.previous = next;
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod pure {
        use super::*;

        #[test]
        fn increase_is_down() {
            assert_eq!(scroll_direction(100.0, 150.0), (ScrollDirection::Down, 150.0));
        }

        #[test]
        fn decrease_is_up() {
            assert_eq!(scroll_direction(150.0, 20.0), (ScrollDirection::Up, 20.0));
        }

        #[test]
        fn tie_is_up() {
            assert_eq!(scroll_direction(150.0, 150.0), (ScrollDirection::Up, 150.0));
        }
    }

    mod tracker {
        use super::*;

        #[test]
        fn new_tracker_starts_at_zero() {
            assert_eq!(ScrollTracker::new().previous(), 0.0);
        }

        #[test]
        fn first_observation_at_top_is_up() {
            let mut tracker = ScrollTracker::new();
            assert_eq!(tracker.observe(0.0), ScrollDirection::Up);
        }

        #[test]
        fn observe_updates_previous_and_ties_resolve_up() {
            let mut tracker = ScrollTracker::starting_at(100.0);

            assert_eq!(tracker.observe(150.0), ScrollDirection::Down);
            assert_eq!(tracker.previous(), 150.0);

            assert_eq!(tracker.observe(150.0), ScrollDirection::Up);
            assert_eq!(tracker.previous(), 150.0);
        }

        #[test]
        fn trackers_are_independent() {
            let mut a = ScrollTracker::new();
            let mut b = ScrollTracker::new();
            a.observe(500.0);
            assert_eq!(b.observe(10.0), ScrollDirection::Down);
            assert_eq!(a.previous(), 500.0);
        }
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ScrollDirection::Down).unwrap(), "\"down\"");
        assert_eq!(ScrollDirection::Up.to_string(), "up");
    }
}

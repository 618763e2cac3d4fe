//! Scene files: recorded page geometry evaluated offline.
//!
//! A scene is a JSON snapshot of one window and a list of named elements,
//! optionally with a sequence of scroll offsets to run through a
//! [`ScrollTracker`] and pairs of elements to measure the gap between.
//! [`Scene::evaluate`] answers every viewport query for it and returns a
//! [`SceneReport`], which prints as a table or serializes to JSON.

use crate::config::Buffers;
use crate::geometry::{Rect, ScrollDirection, ScrollTracker};
use crate::host::{ElementSnapshot, WindowSnapshot};
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Failures loading or validating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("Failed to read scene file at {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scene is not valid JSON or does not match the scene schema.
    #[error("Invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two elements share a name.
    #[error("Duplicate element name {0:?}")]
    DuplicateElement(String),

    /// A distance pair names an element the scene does not define.
    #[error("Distance pair {index} refers to unknown element {name:?}")]
    UnknownElement {
        /// Position of the pair in `distances`.
        index: usize,
        /// The missing element name.
        name: String,
    },
}

/// Buffers set by the scene itself; each one overrides the configured value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneBuffers {
    /// Override for the top-in-view buffer.
    #[serde(default)]
    pub top: Option<f64>,
    /// Override for the bottom-in-view buffer.
    #[serde(default)]
    pub bottom: Option<f64>,
    /// Override for the in-viewport buffer.
    #[serde(default)]
    pub viewport: Option<f64>,
}

impl SceneBuffers {
    /// Layer these overrides on top of `base`.
    pub fn resolve(&self, base: Buffers) -> Buffers {
        Buffers {
            top: self.top.unwrap_or(base.top),
            bottom: self.bottom.unwrap_or(base.bottom),
            viewport: self.viewport.unwrap_or(base.viewport),
        }
    }
}

/// An element as written in a scene file.
///
/// Only `name` and `rect` are required. Heights default to the rectangle's
/// height and `document_top` to `rect.top` plus the window's scroll offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneElement {
    /// Unique name used in reports and distance pairs.
    pub name: String,
    /// Bounding rectangle relative to the viewport.
    pub rect: Rect,
    /// Rendered height including padding and border.
    #[serde(default)]
    pub outer_height: Option<f64>,
    /// Inner height.
    #[serde(default)]
    pub client_height: Option<f64>,
    /// Clipping box height.
    #[serde(default)]
    pub offset_height: Option<f64>,
    /// Full content height.
    #[serde(default)]
    pub scroll_height: Option<f64>,
    /// Top edge relative to the document origin.
    #[serde(default)]
    pub document_top: Option<f64>,
}

impl SceneElement {
    /// Fill in defaults and produce a measurable element.
    pub fn snapshot(&self, scroll_top: f64) -> ElementSnapshot {
        let base = ElementSnapshot::from_rect(self.rect, scroll_top);
        ElementSnapshot {
            rect: self.rect,
            outer_height: self.outer_height.unwrap_or(base.outer_height),
            client_height: self.client_height.unwrap_or(base.client_height),
            offset_height: self.offset_height.unwrap_or(base.offset_height),
            scroll_height: self.scroll_height.unwrap_or(base.scroll_height),
            document_top: self.document_top.unwrap_or(base.document_top),
        }
    }
}

/// Two elements whose vertical gap should be measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistancePair {
    /// Name of the element expected on top.
    pub upper: String,
    /// Name of the element expected below it.
    pub lower: String,
}

/// A recorded window with named elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Window readings.
    pub window: WindowSnapshot,
    /// Elements to evaluate, in report order.
    #[serde(default)]
    pub elements: Vec<SceneElement>,
    /// Scene-level buffer overrides.
    #[serde(default)]
    pub buffers: SceneBuffers,
    /// Successive scroll offsets fed through one scroll tracker.
    #[serde(default)]
    pub scroll_samples: Vec<f64>,
    /// Element pairs to measure.
    #[serde(default)]
    pub distances: Vec<DistancePair>,
}

impl Scene {
    /// Parse and validate a scene from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read, parse and validate a scene file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check element names are unique and every distance pair resolves.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = HashSet::new();
        for element in &self.elements {
            if !seen.insert(element.name.as_str()) {
                return Err(SceneError::DuplicateElement(element.name.clone()));
            }
        }

        for (index, pair) in self.distances.iter().enumerate() {
            for name in [&pair.upper, &pair.lower] {
                if !seen.contains(name.as_str()) {
                    return Err(SceneError::UnknownElement {
                        index,
                        name: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Answer every viewport query for this scene.
    ///
    /// `defaults` are the configured buffers; the scene's own buffers win.
    pub fn evaluate(&self, defaults: Buffers) -> Result<SceneReport, SceneError> {
        self.validate()?;

        let buffers = self.buffers.resolve(defaults);
        let viewport = Viewport::new(self.window);
        let scroll_top = viewport.scroll_top();

        debug!(
            elements = self.elements.len(),
            samples = self.scroll_samples.len(),
            scroll_top,
            "evaluating scene"
        );

        let snapshots: Vec<(&str, ElementSnapshot)> = self
            .elements
            .iter()
            .map(|element| (element.name.as_str(), element.snapshot(scroll_top)))
            .collect();

        let elements = snapshots
            .iter()
            .map(|(name, element)| ElementReport {
                name: (*name).to_string(),
                top: viewport.element_top(element),
                visible_height: viewport.visible_element_height(element),
                cut_off: viewport.is_element_cut_off(element),
                top_in_view: viewport.is_element_top_in_view(element, Some(buffers.top)),
                bottom_in_view: viewport.is_element_bottom_in_view(element, Some(buffers.bottom)),
                in_viewport: viewport.is_element_in_viewport(element, Some(buffers.viewport)),
                overflown: viewport.has_element_overflown(element),
            })
            .collect();

        let mut tracker = ScrollTracker::new();
        let directions = self
            .scroll_samples
            .iter()
            .map(|&sample| {
                let scrolled = Viewport::new(self.window.scrolled_to(sample));
                DirectionStep {
                    scroll_top: sample,
                    direction: scrolled.scroll_direction(&mut tracker),
                }
            })
            .collect();

        let by_name: HashMap<&str, &ElementSnapshot> =
            snapshots.iter().map(|(name, element)| (*name, element)).collect();
        let distances = self
            .distances
            .iter()
            .filter_map(|pair| {
                let upper = by_name.get(pair.upper.as_str())?;
                let lower = by_name.get(pair.lower.as_str())?;
                Some(DistanceReport {
                    upper: pair.upper.clone(),
                    lower: pair.lower.clone(),
                    distance: viewport.vertical_distance(*upper, *lower),
                })
            })
            .collect();

        Ok(SceneReport {
            scroll_top,
            window_height: viewport.height(),
            window_width: viewport.width(),
            buffers,
            elements,
            directions,
            distances,
        })
    }
}

/// Query results for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    /// Element name.
    pub name: String,
    /// Top edge relative to the viewport.
    pub top: f64,
    /// Visible height.
    pub visible_height: f64,
    /// Partly visible.
    pub cut_off: bool,
    /// Top edge below the viewport top (with buffer).
    pub top_in_view: bool,
    /// Bottom edge above the viewport bottom (with buffer).
    pub bottom_in_view: bool,
    /// Top edge above the viewport bottom (with buffer).
    pub in_viewport: bool,
    /// Content taller than its box.
    pub overflown: bool,
}

/// One scroll sample and the direction it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionStep {
    /// The sampled offset.
    pub scroll_top: f64,
    /// Direction relative to the previous sample (the first compares to 0).
    pub direction: ScrollDirection,
}

/// Gap between two named elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    /// Upper element name.
    pub upper: String,
    /// Lower element name.
    pub lower: String,
    /// Gap in pixels; negative on overlap.
    pub distance: f64,
}

/// Everything a scene evaluation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    /// Window scroll offset (`NaN`, serialized as `null`, when unavailable).
    pub scroll_top: f64,
    /// Viewport height.
    pub window_height: f64,
    /// Viewport width.
    pub window_width: f64,
    /// Buffers the predicates were evaluated with.
    pub buffers: Buffers,
    /// Per-element results, in scene order.
    pub elements: Vec<ElementReport>,
    /// Scroll direction sequence.
    pub directions: Vec<DirectionStep>,
    /// Measured gaps.
    pub distances: Vec<DistanceReport>,
}

impl SceneReport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn px(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Left-align `text` in `width` terminal columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for SceneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "window    scroll_top={} height={} width={}",
            px(self.scroll_top),
            px(self.window_height),
            px(self.window_width)
        )?;
        writeln!(
            f,
            "buffers   top={} bottom={} viewport={}",
            px(self.buffers.top),
            px(self.buffers.bottom),
            px(self.buffers.viewport)
        )?;

        if !self.elements.is_empty() {
            let width = self
                .elements
                .iter()
                .map(|e| e.name.width())
                .max()
                .unwrap_or(0)
                .max("element".len());

            writeln!(f)?;
            writeln!(
                f,
                "{}  {:>8}  {:>8}  {:<7}  {:<11}  {:<14}  {:<11}  {:<9}",
                pad_to_width("element", width),
                "top",
                "visible",
                "cut_off",
                "top_in_view",
                "bottom_in_view",
                "in_viewport",
                "overflown",
            )?;
            for e in &self.elements {
                writeln!(
                    f,
                    "{}  {:>8}  {:>8}  {:<7}  {:<11}  {:<14}  {:<11}  {:<9}",
                    pad_to_width(&e.name, width),
                    px(e.top),
                    px(e.visible_height),
                    yes_no(e.cut_off),
                    yes_no(e.top_in_view),
                    yes_no(e.bottom_in_view),
                    yes_no(e.in_viewport),
                    yes_no(e.overflown),
                )?;
            }
        }

        if !self.directions.is_empty() {
            writeln!(f)?;
            writeln!(f, "scroll samples")?;
            for step in &self.directions {
                writeln!(f, "  {:>8}  {}", px(step.scroll_top), step.direction)?;
            }
        }

        if !self.distances.is_empty() {
            writeln!(f)?;
            for d in &self.distances {
                writeln!(f, "distance  {} -> {}: {}", d.upper, d.lower, px(d.distance))?;
            }
        }

        Ok(())
    }
}

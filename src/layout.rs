//! JSON cell-layout input
//!
//! The binary mask formats (OASIS, GDSII) are read by external tooling; this
//! crate consumes a flattened JSON form of the same data:
//!
//! ```json
//! {
//!   "cells": {
//!     "top": {
//!       "polygons": [ { "layer": [1, 0], "points": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]] } ],
//!       "labels":   [ { "layer": [1, 0], "x": 5.0, "y": 5.0, "text": "A" } ]
//!     }
//!   }
//! }
//! ```
//!
//! Coordinates are in pre-scale units; polygons are closed implicitly.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::geometry::{Label, LayerId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutPolygon {
    pub layer: LayerId,
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutLabel {
    pub layer: LayerId,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub polygons: Vec<LayoutPolygon>,
    #[serde(default)]
    pub labels: Vec<LayoutLabel>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layout {
    pub cells: IndexMap<String, Cell>,
}

pub fn load_layout(path: &Path) -> Result<Layout> {
    let file =
        File::open(path).with_context(|| format!("opening layout {}", path.display()))?;
    let layout = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing layout {}", path.display()))?;
    Ok(layout)
}

impl Layout {
    /// Select a cell by name, or the sole cell when the file has exactly one.
    pub fn cell(&self, name: Option<&str>) -> Result<&Cell> {
        match name {
            Some(name) => self
                .cells
                .get(name)
                .with_context(|| format!("layout has no cell named {name:?}")),
            None if self.cells.len() == 1 => Ok(&self.cells[0]),
            None if self.cells.is_empty() => bail!("layout has no cells"),
            None => bail!(
                "layout has {} cells; pick one of: {}",
                self.cells.len(),
                self.cells.keys().cloned().collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

impl Cell {
    /// Group polygon vertex lists by layer, preserving file order.
    pub fn polys_by_layer(&self) -> IndexMap<LayerId, Vec<Vec<[f64; 2]>>> {
        let mut by_layer: IndexMap<LayerId, Vec<Vec<[f64; 2]>>> = IndexMap::new();
        for polygon in &self.polygons {
            by_layer.entry(polygon.layer).or_default().push(polygon.points.clone());
        }
        by_layer
    }

    /// Group labels by layer. Unless `raw_names` is set, a trailing
    /// `_<integer>` suffix is stripped from each label text.
    pub fn labels_by_layer(&self, raw_names: bool) -> IndexMap<LayerId, Vec<Label>> {
        let mut by_layer: IndexMap<LayerId, Vec<Label>> = IndexMap::new();
        for label in &self.labels {
            let text = if raw_names {
                label.text.clone()
            } else {
                strip_label_suffix(&label.text).to_string()
            };
            by_layer
                .entry(label.layer)
                .or_default()
                .push(Label { x: label.x, y: label.y, text });
        }
        by_layer
    }
}

/// Drop a trailing `_<integer>` instance suffix, as emitted by extraction
/// tools that number each label occurrence.
pub fn strip_label_suffix(text: &str) -> &str {
    match text.rsplit_once('_') {
        Some((prefix, suffix)) if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) => {
            prefix
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        serde_json::from_str(
            r#"{
                "cells": {
                    "top": {
                        "polygons": [
                            { "layer": [1, 0], "points": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]] },
                            { "layer": [2, 0], "points": [[0.0, 0.0], [5.0, 0.0], [5.0, 5.0]] },
                            { "layer": [1, 0], "points": [[20.0, 0.0], [30.0, 0.0], [30.0, 10.0]] }
                        ],
                        "labels": [
                            { "layer": [1, 0], "x": 5.0, "y": 5.0, "text": "A_3" }
                        ]
                    },
                    "empty": {}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cell_selection() {
        let layout = sample();
        assert!(layout.cell(Some("top")).is_ok());
        assert!(layout.cell(Some("missing")).is_err());
        // Ambiguous without a name: two cells
        assert!(layout.cell(None).is_err());
    }

    #[test]
    fn test_polys_by_layer_groups_and_orders() {
        let layout = sample();
        let polys = layout.cell(Some("top")).unwrap().polys_by_layer();
        assert_eq!(polys[&LayerId(1, 0)].len(), 2);
        assert_eq!(polys[&LayerId(2, 0)].len(), 1);
    }

    #[test]
    fn test_labels_strip_suffix_unless_raw() {
        let layout = sample();
        let cell = layout.cell(Some("top")).unwrap();
        assert_eq!(cell.labels_by_layer(false)[&LayerId(1, 0)][0].text, "A");
        assert_eq!(cell.labels_by_layer(true)[&LayerId(1, 0)][0].text, "A_3");
    }

    #[test]
    fn test_strip_label_suffix() {
        assert_eq!(strip_label_suffix("VDD_12"), "VDD");
        assert_eq!(strip_label_suffix("VDD"), "VDD");
        assert_eq!(strip_label_suffix("VDD_"), "VDD_");
        assert_eq!(strip_label_suffix("VDD_a1"), "VDD_a1");
        assert_eq!(strip_label_suffix("_7"), "");
        assert_eq!(strip_label_suffix("A_1_2"), "A_1");
    }
}

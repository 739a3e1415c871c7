//! Geometric types and primitives for connectivity extraction
//!
//! All analysis happens on a scaled integer grid; floats exist only at the
//! input boundary (see `scale`).
//!
//! # Submodules
//! - `scale` - Float to integer-grid coordinate conversion
//! - `clip` - Boolean polygon operations over the Clipper2 engine
//! - `contains` - Point-in-polygon classification
//! - `union` - Per-layer polygon unioning and tree flattening

pub mod clip;
pub mod contains;
pub mod scale;
pub mod union;

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// A point on the scaled integer grid.
pub type IntPoint = [i64; 2];

/// A closed polygon ring in scaled integer coordinates. The last vertex
/// connects back to the first implicitly.
pub type Contour = Vec<IntPoint>;

/// A `(layer, datatype)` pair identifying one mask layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u32, pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

impl FromStr for LayerId {
    type Err = anyhow::Error;

    /// Parse a `layer/datatype` designation such as `123/45`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (layer, datatype) = s
            .split_once('/')
            .ok_or_else(|| anyhow!("layer designation {s:?} is missing \"/\""))?;
        let layer = layer
            .trim()
            .parse()
            .map_err(|_| anyhow!("bad layer number in {s:?}"))?;
        let datatype = datatype
            .trim()
            .parse()
            .map_err(|_| anyhow!("bad datatype number in {s:?}"))?;
        Ok(LayerId(layer, datatype))
    }
}

/// An outer contour plus the holes directly inside it. Islands nested inside
/// the holes are *not* part of this record; the unioner promotes them to
/// records of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyWithHoles {
    pub outer: Contour,
    pub holes: Vec<Contour>,
}

/// A text label anchored at a point, in pre-scale units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Axis-aligned bounding box over scaled coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: IntPoint,
    pub max: IntPoint,
}

impl Bounds {
    pub fn of_contour(contour: &[IntPoint]) -> Option<Bounds> {
        let (&first, rest) = contour.split_first()?;
        let mut bounds = Bounds { min: first, max: first };
        for &[x, y] in rest {
            bounds.min[0] = bounds.min[0].min(x);
            bounds.min[1] = bounds.min[1].min(y);
            bounds.max[0] = bounds.max[0].max(x);
            bounds.max[1] = bounds.max[1].max(y);
        }
        Some(bounds)
    }

    pub fn of_contours(contours: &[Contour]) -> Option<Bounds> {
        let mut merged: Option<Bounds> = None;
        for contour in contours {
            if let Some(bounds) = Bounds::of_contour(contour) {
                merged = Some(match merged {
                    Some(acc) => acc.union(&bounds),
                    None => bounds,
                });
            }
        }
        merged
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    /// Touching edges count as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min[0] <= other.max[0]
            && other.min[0] <= self.max[0]
            && self.min[1] <= other.max[1]
            && other.min[1] <= self.max[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_id_roundtrip() {
        let layer: LayerId = "123/45".parse().unwrap();
        assert_eq!(layer, LayerId(123, 45));
        assert_eq!(layer.to_string(), "123/45");
    }

    #[test]
    fn test_layer_id_rejects_garbage() {
        assert!("123".parse::<LayerId>().is_err());
        assert!("a/b".parse::<LayerId>().is_err());
        assert!("-1/0".parse::<LayerId>().is_err());
    }

    #[test]
    fn test_bounds_intersects() {
        let a = Bounds { min: [0, 0], max: [10, 10] };
        let b = Bounds { min: [10, 10], max: [20, 20] };
        let c = Bounds { min: [11, 0], max: [20, 9] };
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_bounds_of_contours() {
        let contours = vec![vec![[0, 0], [4, 0], [4, 4]], vec![[-2, 1], [1, 1], [1, 8]]];
        let bounds = Bounds::of_contours(&contours).unwrap();
        assert_eq!(bounds, Bounds { min: [-2, 0], max: [4, 8] });
    }
}

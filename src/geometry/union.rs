//! Per-layer polygon unioning
//!
//! Raw input polygons on one layer become a set of disjoint conductors:
//! scale, union under non-zero winding, then flatten the nesting hierarchy
//! into outer-with-holes records. Islands nested inside holes are separate
//! conductors and come out as records of their own.

use anyhow::{Context, Result};

use super::clip::{self, PolyNode};
use super::{scale, Contour, LayerId, PolyWithHoles};

/// Scale and union the raw polygons of one layer.
pub fn union_layer(
    raw: &[Vec<[f64; 2]>],
    layer: LayerId,
    scale_factor: i64,
) -> Result<Vec<PolyWithHoles>> {
    let scaled = scale::scale_polys(raw, scale_factor, layer)?;
    union_input_polys(scaled).with_context(|| format!("unioning layer {layer}"))
}

/// Union already-scaled polygons and partially flatten the result: every
/// non-hole node becomes a root-level record carrying its direct holes.
pub fn union_input_polys(scaled: Vec<Contour>) -> Result<Vec<PolyWithHoles>> {
    let mut outer_stack = clip::union_nonzero(&scaled)?;
    let mut conductors = Vec::with_capacity(outer_stack.len());
    while let Some(outer) = outer_stack.pop() {
        let mut holes = Vec::with_capacity(outer.children.len());
        for hole in outer.children {
            let PolyNode { contour, children } = hole;
            holes.push(contour);
            // Islands inside the hole are disjoint conductors
            outer_stack.extend(children);
        }
        conductors.push(PolyWithHoles { outer: outer.contour, holes });
    }
    Ok(conductors)
}

/// Convert outer-with-holes records into the flat oriented contour form the
/// even-odd intersection tests consume.
pub fn flatten_to_oriented(polys: Vec<PolyWithHoles>) -> Vec<Contour> {
    let mut contours = Vec::new();
    for poly in polys {
        contours.push(poly.outer);
        contours.extend(poly.holes);
    }
    clip::union_evenodd(&contours)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYER: LayerId = LayerId(1, 0);
    const SCALE: i64 = 1 << 24;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<[f64; 2]> {
        vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }

    #[test]
    fn test_disjoint_squares_stay_separate() {
        let raw = vec![square(0.0, 0.0, 10.0, 10.0), square(20.0, 0.0, 30.0, 10.0)];
        let conductors = union_layer(&raw, LAYER, SCALE).unwrap();
        assert_eq!(conductors.len(), 2);
        assert!(conductors.iter().all(|p| p.holes.is_empty()));
    }

    #[test]
    fn test_overlapping_squares_fuse() {
        let raw = vec![square(0.0, 0.0, 10.0, 10.0), square(5.0, 0.0, 15.0, 10.0)];
        let conductors = union_layer(&raw, LAYER, SCALE).unwrap();
        assert_eq!(conductors.len(), 1);
    }

    #[test]
    fn test_annulus_keeps_hole() {
        let mut inner = square(5.0, 5.0, 15.0, 15.0);
        inner.reverse();
        let raw = vec![square(0.0, 0.0, 20.0, 20.0), inner];
        let conductors = union_layer(&raw, LAYER, SCALE).unwrap();
        assert_eq!(conductors.len(), 1);
        assert_eq!(conductors[0].holes.len(), 1);
    }

    #[test]
    fn test_island_is_promoted_to_conductor() {
        let mut inner = square(5.0, 5.0, 25.0, 25.0);
        inner.reverse();
        let raw = vec![
            square(0.0, 0.0, 30.0, 30.0),
            inner,
            square(10.0, 10.0, 20.0, 20.0),
        ];
        let conductors = union_layer(&raw, LAYER, SCALE).unwrap();
        assert_eq!(conductors.len(), 2);

        let with_hole = conductors.iter().filter(|p| !p.holes.is_empty()).count();
        assert_eq!(with_hole, 1);
    }

    #[test]
    fn test_flatten_excludes_hole_region() {
        let mut inner = square(5.0, 5.0, 15.0, 15.0);
        inner.reverse();
        let raw = vec![square(0.0, 0.0, 20.0, 20.0), inner];
        let conductors = union_layer(&raw, LAYER, SCALE).unwrap();
        let flat = flatten_to_oriented(conductors);
        assert_eq!(flat.len(), 2);

        // The flat form still distinguishes metal from hole: intersecting
        // with a probe square inside the hole yields nothing.
        let probe = vec![vec![
            [8 << 24, 8 << 24],
            [12 << 24, 8 << 24],
            [12 << 24, 12 << 24],
            [8 << 24, 12 << 24],
        ]];
        assert!(clip::intersection_evenodd(&flat, &probe).is_empty());

        let metal_probe = vec![vec![[1 << 24, 1 << 24], [3 << 24, 1 << 24], [3 << 24, 3 << 24], [1 << 24, 3 << 24]]];
        assert!(!clip::intersection_evenodd(&flat, &metal_probe).is_empty());
    }

    #[test]
    fn test_union_is_idempotent_on_its_own_output() {
        let mut inner = square(5.0, 5.0, 15.0, 15.0);
        inner.reverse();
        let raw = vec![
            square(0.0, 0.0, 20.0, 20.0),
            inner,
            square(30.0, 0.0, 40.0, 10.0),
        ];
        let first = union_layer(&raw, LAYER, SCALE).unwrap();

        let mut contours: Vec<Contour> = Vec::new();
        for poly in &first {
            contours.push(poly.outer.clone());
            contours.extend(poly.holes.iter().cloned());
        }
        let second = union_input_polys(contours).unwrap();

        let hole_count =
            |polys: &[PolyWithHoles]| polys.iter().map(|p| p.holes.len()).sum::<usize>();
        assert_eq!(second.len(), first.len());
        assert_eq!(hole_count(&second), hole_count(&first));
    }

    #[test]
    fn test_empty_layer() {
        let conductors = union_layer(&[], LAYER, SCALE).unwrap();
        assert!(conductors.is_empty());
        assert!(flatten_to_oriented(conductors).is_empty());
    }
}

//! Float to integer-grid coordinate conversion
//!
//! The Boolean engine works on integer coordinates only, so every input
//! vertex is multiplied by a fixed scale factor on the way in. Fractional
//! remainders are truncated toward zero; the first one on a layer gets a
//! warning.

use anyhow::{bail, Result};
use log::warn;

use super::{Contour, IntPoint, LayerId};

/// Default grid scale. Matches the fixed-point precision the original
/// Clipper-based tooling used.
pub const DEFAULT_SCALE_FACTOR: i64 = 1 << 24;

/// Scaled coordinates past this magnitude leave no headroom for the clipping
/// arithmetic and are rejected outright.
pub const MAX_SCALED_COORD: i64 = 1 << 62;

/// Scale one layer's raw polygons onto the integer grid.
///
/// Non-integer results are truncated; the first occurrence on the layer is
/// warned about once. Coordinates that land outside `±MAX_SCALED_COORD` (or
/// are not finite to begin with) are an error.
pub fn scale_polys(
    raw: &[Vec<[f64; 2]>],
    scale_factor: i64,
    layer: LayerId,
) -> Result<Vec<Contour>> {
    let mut warned = false;
    let mut scaled = Vec::with_capacity(raw.len());
    for poly in raw {
        let mut contour = Vec::with_capacity(poly.len());
        for &[x, y] in poly {
            let (sx, fx) = scale_coord(x, scale_factor, layer)?;
            let (sy, fy) = scale_coord(y, scale_factor, layer)?;
            if (fx || fy) && !warned {
                warn!("layer {layer}: non-integer coordinates after scaling; values will be truncated");
                warned = true;
            }
            contour.push([sx, sy]);
        }
        scaled.push(contour);
    }
    Ok(scaled)
}

/// Scale a single label anchor. Labels truncate silently; they are test
/// points, not geometry.
pub fn scale_point(x: f64, y: f64, scale_factor: i64) -> IntPoint {
    [
        (x * scale_factor as f64).trunc() as i64,
        (y * scale_factor as f64).trunc() as i64,
    ]
}

/// Map a scaled coordinate back to input units, for diagnostics and output.
pub fn descale_point(point: IntPoint, scale_factor: i64) -> [f64; 2] {
    [
        point[0] as f64 / scale_factor as f64,
        point[1] as f64 / scale_factor as f64,
    ]
}

fn scale_coord(value: f64, scale_factor: i64, layer: LayerId) -> Result<(i64, bool)> {
    let scaled = value * scale_factor as f64;
    if !scaled.is_finite() {
        bail!("layer {layer}: coordinate {value} is not finite");
    }
    if scaled.abs() > MAX_SCALED_COORD as f64 {
        bail!("layer {layer}: coordinate {value} exceeds the supported range after scaling");
    }
    Ok((scaled.trunc() as i64, scaled.fract() != 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYER: LayerId = LayerId(1, 0);

    #[test]
    fn test_integer_input_scales_exactly() {
        let raw = vec![vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]];
        let scaled = scale_polys(&raw, 1 << 24, LAYER).unwrap();
        assert_eq!(scaled[0][1], [10 << 24, 0]);
        assert_eq!(scaled[0][2], [10 << 24, 10 << 24]);
    }

    #[test]
    fn test_fractional_input_truncates() {
        let raw = vec![vec![[0.3, -0.3], [1.0, 1.0], [2.0, 2.0]]];
        let scaled = scale_polys(&raw, 10, LAYER).unwrap();
        // 0.3 * 10 = 3 exactly in this case, but -0.3 truncates toward zero
        assert_eq!(scaled[0][0], [3, -3]);

        let raw = vec![vec![[0.25, -0.25], [1.0, 1.0], [2.0, 2.0]]];
        let scaled = scale_polys(&raw, 2, LAYER).unwrap();
        assert_eq!(scaled[0][0], [0, 0]);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let raw = vec![vec![[1e18, 0.0], [1.0, 1.0], [2.0, 2.0]]];
        assert!(scale_polys(&raw, 1 << 24, LAYER).is_err());

        let raw = vec![vec![[f64::NAN, 0.0]]];
        assert!(scale_polys(&raw, 1 << 24, LAYER).is_err());
    }

    #[test]
    fn test_descale_roundtrip() {
        let point = scale_point(5.0, -7.0, 1 << 24);
        assert_eq!(descale_point(point, 1 << 24), [5.0, -7.0]);
    }
}

//! Point-in-polygon classification
//!
//! Even-odd crossing test over integer coordinates. All intermediate products
//! run in i128 so coordinates near the ±2^62 limit cannot overflow. Points
//! exactly on a contour edge classify as inside; whatever the verdict, it is
//! a pure function of the inputs, so repeated calls agree.

use super::{Contour, IntPoint, PolyWithHoles};

/// Classify each of `points` against one closed contour.
pub fn contains_points(contour: &[IntPoint], points: &[IntPoint]) -> Vec<bool> {
    points.iter().map(|&p| contains_point(contour, p)).collect()
}

/// Even-odd test of a single point against one closed contour.
pub fn contains_point(contour: &[IntPoint], point: IntPoint) -> bool {
    if contour.len() < 3 {
        return false;
    }
    let px = point[0] as i128;
    let py = point[1] as i128;

    let mut inside = false;
    let mut j = contour.len() - 1;
    for i in 0..contour.len() {
        let xi = contour[i][0] as i128;
        let yi = contour[i][1] as i128;
        let xj = contour[j][0] as i128;
        let yj = contour[j][1] as i128;

        if on_segment(px, py, xi, yi, xj, yj) {
            return true;
        }

        // Horizontal ray toward +x; edge counts if it straddles the ray's y
        if (yi > py) != (yj > py) {
            let t = (py - yi) * (xj - xi) - (px - xi) * (yj - yi);
            if (t > 0) == (yj > yi) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Containment in an outer contour minus its holes.
pub fn in_conductor(poly: &PolyWithHoles, points: &[IntPoint]) -> Vec<bool> {
    let mut inside = contains_points(&poly.outer, points);
    for hole in &poly.holes {
        if inside.iter().all(|flag| !flag) {
            break;
        }
        let in_hole = contains_points(hole, points);
        for (flag, in_hole) in inside.iter_mut().zip(in_hole) {
            *flag = *flag && !in_hole;
        }
    }
    inside
}

fn on_segment(px: i128, py: i128, ax: i128, ay: i128, bx: i128, by: i128) -> bool {
    let cross = (bx - ax) * (py - ay) - (px - ax) * (by - ay);
    cross == 0
        && px >= ax.min(bx)
        && px <= ax.max(bx)
        && py >= ay.min(by)
        && py <= ay.max(by)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Contour {
        vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }

    #[test]
    fn test_square_containment() {
        let sq = square(0, 0, 10, 10);
        let verdicts = contains_points(&sq, &[[5, 5], [15, 5], [-1, -1]]);
        assert_eq!(verdicts, vec![true, false, false]);
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let sq = square(0, 0, 10, 10);
        assert!(contains_point(&sq, [0, 5]));
        assert!(contains_point(&sq, [10, 10]));
        assert!(contains_point(&sq, [5, 0]));
    }

    #[test]
    fn test_classification_is_stable() {
        let sq = square(0, 0, 10, 10);
        let points = [[0, 0], [5, 5], [10, 0], [3, 10], [11, 11]];
        assert_eq!(contains_points(&sq, &points), contains_points(&sq, &points));
    }

    #[test]
    fn test_hole_defeats_containment() {
        let annulus = PolyWithHoles {
            outer: square(0, 0, 20, 20),
            holes: vec![square(5, 5, 15, 15)],
        };
        let verdicts = in_conductor(&annulus, &[[10, 10], [2, 2], [25, 10]]);
        assert_eq!(verdicts, vec![false, true, false]);
    }

    #[test]
    fn test_concave_contour() {
        // U shape: the notch between the arms is outside
        let u = vec![[0, 0], [30, 0], [30, 30], [20, 30], [20, 10], [10, 10], [10, 30], [0, 30]];
        assert!(contains_point(&u, [5, 20]));
        assert!(contains_point(&u, [25, 20]));
        assert!(!contains_point(&u, [15, 20]));
        assert!(contains_point(&u, [15, 5]));
    }

    #[test]
    fn test_large_coordinates_do_not_overflow() {
        let big = 1i64 << 61;
        let sq = square(-big, -big, big, big);
        assert!(contains_point(&sq, [0, 0]));
        assert!(!contains_point(&sq, [big, big + 1]));
    }
}

//! Boolean polygon operations over the Clipper2 engine
//!
//! Thin façade over `clipper2-sys`. The non-zero union reports its result as
//! a nesting hierarchy (outer contours, their holes, islands inside the
//! holes, and so on); the even-odd operations return flat oriented contour
//! lists. Nothing else in the crate talks to the engine directly, so a
//! replacement engine only has to honour these three entry points.

use anyhow::{bail, Result};
use clipper2_sys::{ClipType, Clipper64, FillRule, Path64, Paths64, Point64};

use super::contains::contains_point;
use super::Contour;

/// One node of the union hierarchy. An outer contour's children are its
/// holes; a hole's children are islands nested inside it.
#[derive(Clone, Debug, Default)]
pub struct PolyNode {
    pub contour: Contour,
    pub children: Vec<PolyNode>,
}

/// Union under the non-zero winding rule, returned as a nesting hierarchy.
/// The top-level entries are the outermost (filled) contours.
///
/// Clipper2 hands back a flat contour list; the hierarchy is rebuilt here by
/// containment depth. An inconsistent nesting (a contour at depth `k` with no
/// parent at depth `k - 1`) means the engine produced self-intersecting
/// output and is reported as an error.
pub fn union_nonzero(paths: &[Contour]) -> Result<Vec<PolyNode>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }
    build_tree(execute(paths, &[], ClipType::Union, FillRule::NonZero))
}

/// Union under the even-odd rule, as a flat oriented contour list.
pub fn union_evenodd(paths: &[Contour]) -> Vec<Contour> {
    if paths.is_empty() {
        return Vec::new();
    }
    execute(paths, &[], ClipType::Union, FillRule::EvenOdd)
}

/// Even-odd intersection of two contour sets, as a flat oriented contour
/// list. Clip contours are always treated as closed.
pub fn intersection_evenodd(subject: &[Contour], clip: &[Contour]) -> Vec<Contour> {
    if subject.is_empty() || clip.is_empty() {
        return Vec::new();
    }
    execute(subject, clip, ClipType::Intersection, FillRule::EvenOdd)
}

fn execute(subject: &[Contour], clip: &[Contour], op: ClipType, fill: FillRule) -> Vec<Contour> {
    let mut clipper = Clipper64::new();
    clipper.add_subject(to_paths(subject));
    if !clip.is_empty() {
        clipper.add_clip(to_paths(clip));
    }
    let solution = clipper.boolean_operation(op, fill);
    from_paths(&solution)
}

fn to_paths(contours: &[Contour]) -> Paths64 {
    let mut paths = Paths64::new(&vec![]);
    for contour in contours {
        let mut path = Path64::new(&vec![]);
        for &[x, y] in contour {
            path.add_point(Point64::new(x, y));
        }
        paths.add_path(path);
    }
    paths
}

fn from_paths(paths: &Paths64) -> Vec<Contour> {
    let mut contours = Vec::with_capacity(paths.len());
    for i in 0..paths.len() {
        let path = paths.get_path(i);
        let mut contour = Vec::with_capacity(path.len());
        for j in 0..path.len() {
            let point = path.get_point(j);
            contour.push([point.x, point.y]);
        }
        if contour.len() >= 3 {
            contours.push(contour);
        }
    }
    contours
}

/// Rebuild the nesting hierarchy of a disjoint contour set. Depth is the
/// number of other contours containing a representative vertex; a contour's
/// parent is its container one level up.
fn build_tree(contours: Vec<Contour>) -> Result<Vec<PolyNode>> {
    let n = contours.len();
    let mut containers: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        let probe = contours[i][0];
        for j in 0..n {
            if i != j && contains_point(&contours[j], probe) {
                containers[i].push(j);
            }
        }
    }
    let depth: Vec<usize> = containers.iter().map(Vec::len).collect();

    let mut parent = vec![usize::MAX; n];
    for i in 0..n {
        if depth[i] == 0 {
            continue;
        }
        let mut found = None;
        for &j in &containers[i] {
            if depth[j] == depth[i] - 1 {
                if found.is_some() {
                    bail!("clipping engine returned overlapping contours");
                }
                found = Some(j);
            }
        }
        match found {
            Some(j) => parent[i] = j,
            None => bail!("clipping engine returned an inconsistent contour nesting"),
        }
    }

    // Deepest first, so every node's children are complete before the node
    // itself moves into its parent.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(depth[i]));

    let mut nodes: Vec<Option<PolyNode>> = contours
        .into_iter()
        .map(|contour| Some(PolyNode { contour, children: Vec::new() }))
        .collect();
    for &i in &order {
        if depth[i] == 0 {
            continue;
        }
        let node = nodes[i].take();
        let slot = nodes[parent[i]].as_mut();
        match (node, slot) {
            (Some(node), Some(parent)) => parent.children.push(node),
            _ => bail!("clipping engine returned an inconsistent contour nesting"),
        }
    }

    Ok(nodes.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Contour {
        vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }

    fn reversed(mut contour: Contour) -> Contour {
        contour.reverse();
        contour
    }

    #[test]
    fn test_union_nonzero_merges_overlap() {
        let tree = union_nonzero(&[square(0, 0, 10, 10), square(5, 0, 15, 10)]).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_union_nonzero_keeps_disjoint_separate() {
        let tree = union_nonzero(&[square(0, 0, 10, 10), square(20, 0, 30, 10)]).unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_union_nonzero_builds_hole() {
        // Opposite winding on the inner ring makes it a hole under non-zero
        let tree =
            union_nonzero(&[square(0, 0, 20, 20), reversed(square(5, 5, 15, 15))]).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert!(tree[0].children[0].children.is_empty());
    }

    #[test]
    fn test_union_nonzero_nests_island() {
        let tree = union_nonzero(&[
            square(0, 0, 30, 30),
            reversed(square(5, 5, 25, 25)),
            square(10, 10, 20, 20),
        ])
        .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].children.len(), 1);
    }

    #[test]
    fn test_union_empty_input() {
        assert!(union_nonzero(&[]).unwrap().is_empty());
        assert!(union_evenodd(&[]).is_empty());
    }

    #[test]
    fn test_intersection_evenodd() {
        let overlap = intersection_evenodd(&[square(0, 0, 10, 10)], &[square(5, 5, 15, 15)]);
        assert_eq!(overlap.len(), 1);
        let empty = intersection_evenodd(&[square(0, 0, 10, 10)], &[square(20, 20, 30, 30)]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_intersection_with_empty_side() {
        assert!(intersection_evenodd(&[], &[square(0, 0, 1, 1)]).is_empty());
        assert!(intersection_evenodd(&[square(0, 0, 1, 1)], &[]).is_empty());
    }
}

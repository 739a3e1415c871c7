//! Connectivity tracing pipeline
//!
//! Per-layer unioning, label-to-conductor assignment, via-driven merging,
//! and the final short/open analysis.
//!
//! # Submodules
//! - `netname` - Net identities and the disambiguation counters
//! - `registry` - Union-find over identities with per-layer geometry
//! - `viamerge` - Via-mediated overlap detection between nets

pub mod netname;
pub mod registry;
mod viamerge;

use std::collections::BTreeSet;
use std::fmt;

use anyhow::{bail, Result};
use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use rayon::prelude::*;
use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::{
    contains, scale, union, Bounds, Contour, IntPoint, Label, LayerId, PolyWithHoles,
};
use netname::NetName;
use registry::NetRegistry;

/// One adjacency from the connectivity list: conductors on `top` and `bot`
/// connect where they overlap a polygon on `via`, or anywhere they overlap
/// each other when `via` is absent (direct contact).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayerConnection {
    pub top: LayerId,
    pub via: Option<LayerId>,
    pub bot: LayerId,
}

/// Final analysis output.
///
/// `nets` holds every live named identity; two entries sharing a text are an
/// open (and appear in `opens`). `shorts` holds groups of distinct labels
/// that the geometry joined; groups whose labels all match are one healthy
/// net and are filtered out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceResult {
    pub nets: BTreeSet<NetName>,
    pub shorts: Vec<BTreeSet<NetName>>,
    pub opens: IndexMap<String, Vec<NetName>>,
}

impl TraceResult {
    /// Read the short/open topology out of a final registry state.
    pub fn from_registry<G>(registry: &NetRegistry<G>) -> TraceResult {
        let nets = registry
            .live_names()
            .filter(|name| name.is_named())
            .cloned()
            .collect();
        let shorts = registry
            .get_shorted_nets()
            .into_iter()
            .filter(|group| {
                let mut texts = group.iter().filter_map(NetName::text);
                match texts.next() {
                    Some(first) => texts.any(|text| text != first),
                    None => false,
                }
            })
            .collect();
        let opens = registry.get_open_nets();
        TraceResult { nets, shorts, opens }
    }
}

impl fmt::Display for TraceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nets:")?;
        for name in &self.nets {
            write!(f, " {name}")?;
        }
        writeln!(f)?;

        writeln!(f, "Opens:")?;
        for (text, members) in &self.opens {
            write!(f, "  {text} appears on {} disjoint conductors:", members.len())?;
            for member in members {
                write!(f, " {member}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Shorts:")?;
        for group in &self.shorts {
            write!(f, "  (")?;
            for (i, member) in group.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{member}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

/// Partition the connectivity list into metal and via layer sets. A layer
/// appearing on both sides of the partition is a configuration error.
pub fn connectivity_layers(
    connectivity: &[LayerConnection],
) -> Result<(IndexSet<LayerId>, IndexSet<LayerId>)> {
    let mut metal_layers = IndexSet::new();
    let mut via_layers = IndexSet::new();
    for connection in connectivity {
        metal_layers.insert(connection.top);
        metal_layers.insert(connection.bot);
        if let Some(via) = connection.via {
            via_layers.insert(via);
        }
    }

    let both: Vec<String> = metal_layers
        .intersection(&via_layers)
        .map(LayerId::to_string)
        .collect();
    if !both.is_empty() {
        bail!("layers used as both metal and via: {}", both.join(", "));
    }
    Ok((metal_layers, via_layers))
}

/// Trace electrical connectivity through the given geometry.
///
/// `polys` and `labels` are keyed by layer, in pre-scale units; layers not
/// named by `connectivity` are ignored. `label_remap` moves labels from
/// annotation layers onto the conductor layer they describe (identity when
/// empty). The returned registry holds the final merged state; feed it to
/// [`TraceResult::from_registry`] for the short/open report.
pub fn check_connectivity(
    polys: &IndexMap<LayerId, Vec<Vec<[f64; 2]>>>,
    labels: &IndexMap<LayerId, Vec<Label>>,
    connectivity: &[LayerConnection],
    label_remap: &IndexMap<LayerId, LayerId>,
    scale_factor: i64,
) -> Result<NetRegistry<Contour>> {
    let (metal_layers, via_layers) = connectivity_layers(connectivity)?;

    let metal_polys = union_layers(&metal_layers, polys, scale_factor)?;
    let via_polys = union_layers(&via_layers, polys, scale_factor)?;

    // Group labels onto the conductor layer they annotate
    let mut labels_by_metal: IndexMap<LayerId, Vec<&Label>> =
        metal_layers.iter().map(|&layer| (layer, Vec::new())).collect();
    for (&label_layer, layer_labels) in labels {
        let target = label_remap.get(&label_layer).copied().unwrap_or(label_layer);
        match labels_by_metal.get_mut(&target) {
            Some(bucket) => bucket.extend(layer_labels.iter()),
            None => warn!(
                "{} label(s) on layer {label_layer} map to {target}, which is not a conductor layer; ignored",
                layer_labels.len()
            ),
        }
    }

    let mut registry: NetRegistry<PolyWithHoles> = NetRegistry::new();
    let mut merge_groups: Vec<Vec<NetName>> = Vec::new();

    for (layer, layer_labels) in labels_by_metal {
        debug!("assigning labels on layer {layer}");
        let anchors: Vec<IntPoint> = layer_labels
            .iter()
            .map(|label| scale::scale_point(label.x, label.y, scale_factor))
            .collect();
        let index = LabelIndex::build(&anchors);

        let conductors = metal_polys.get(&layer).map_or(&[][..], Vec::as_slice);
        for conductor in conductors {
            let hits = label_hits(conductor, &anchors, &layer_labels, &index);

            let name = match hits.first() {
                Some(text) => registry.new_named(text),
                None => registry.new_anonymous(),
            };
            registry.push_geometry(&name, layer, conductor.clone());

            if hits.len() > 1 {
                let [x, y] = scale::descale_point(conductor.outer[0], scale_factor);
                warn!(
                    "nets {} are shorted on layer {layer} in the conductor near ({x}, {y})",
                    hits.join(", ")
                );
                let mut group = vec![name];
                for text in &hits[1..] {
                    group.push(registry.new_named(text));
                }
                merge_groups.push(group);
            }
        }
    }

    for group in &merge_groups {
        for other in &group[1..] {
            registry.merge(&group[0], other);
        }
    }

    // Flat even-odd form for the intersection tests; the hierarchical form
    // is dropped here
    let mut registry = registry.map_geometry(union::flatten_to_oriented);
    let via_flat: IndexMap<LayerId, Vec<Contour>> = via_polys
        .into_iter()
        .map(|(layer, polys)| (layer, union::flatten_to_oriented(polys)))
        .collect();

    let merge_pairs = viamerge::find_merge_pairs(connectivity, &registry, &via_flat, scale_factor);
    for (a, b) in &merge_pairs {
        registry.merge(a, b);
    }

    Ok(registry)
}

/// Union each requested layer's polygons, in parallel across layers.
fn union_layers(
    layers: &IndexSet<LayerId>,
    polys: &IndexMap<LayerId, Vec<Vec<[f64; 2]>>>,
    scale_factor: i64,
) -> Result<IndexMap<LayerId, Vec<PolyWithHoles>>> {
    let unioned: Vec<(LayerId, Vec<PolyWithHoles>)> = layers
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|layer| {
            let raw = polys.get(&layer).map_or(&[][..], Vec::as_slice);
            Ok((layer, union::union_layer(raw, layer, scale_factor)?))
        })
        .collect::<Result<_>>()?;
    Ok(unioned.into_iter().collect())
}

/// Label anchor wrapper for R-tree lookup by conductor bounding box.
struct LabelAnchor {
    index: usize,
    point: IntPoint,
}

impl RTreeObject for LabelAnchor {
    type Envelope = AABB<IntPoint>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

struct LabelIndex {
    tree: RTree<LabelAnchor>,
}

impl LabelIndex {
    fn build(anchors: &[IntPoint]) -> LabelIndex {
        let entries = anchors
            .iter()
            .enumerate()
            .map(|(index, &point)| LabelAnchor { index, point })
            .collect();
        LabelIndex { tree: RTree::bulk_load(entries) }
    }

    /// Indices of anchors inside the bounding box, in input order.
    fn candidates_in(&self, bounds: Bounds) -> Vec<usize> {
        let envelope = AABB::from_corners(bounds.min, bounds.max);
        let mut indices: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|anchor| anchor.index)
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Texts of the labels landing inside the conductor, sorted. Candidates come
/// from the R-tree; the exact outer-minus-holes test decides membership.
fn label_hits(
    conductor: &PolyWithHoles,
    anchors: &[IntPoint],
    layer_labels: &[&Label],
    index: &LabelIndex,
) -> Vec<String> {
    let Some(bounds) = Bounds::of_contour(&conductor.outer) else {
        return Vec::new();
    };
    let candidates = index.candidates_in(bounds);
    if candidates.is_empty() {
        return Vec::new();
    }

    let candidate_points: Vec<IntPoint> = candidates.iter().map(|&i| anchors[i]).collect();
    let inside = contains::in_conductor(conductor, &candidate_points);

    let mut hits: Vec<String> = candidates
        .iter()
        .zip(inside)
        .filter(|(_, inside)| *inside)
        .map(|(&i, _)| layer_labels[i].text.clone())
        .collect();
    hits.sort();
    hits
}

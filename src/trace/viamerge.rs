//! Via-mediated net merging
//!
//! For each connectivity triple, every pair of live nets is checked for
//! overlap through the via layer (or for direct contact when the triple has
//! no via). The live-name set is snapshotted before enumeration and the
//! resulting merge queue applied afterwards, so merges never disturb an
//! enumeration in progress.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::warn;

use super::netname::NetName;
use super::registry::NetRegistry;
use super::LayerConnection;
use crate::geometry::{clip, scale, Bounds, Contour, LayerId};

/// Pairs of live nets that the via geometry electrically joins. The caller
/// applies the merges; each entry re-resolves at merge time.
pub fn find_merge_pairs(
    connectivity: &[LayerConnection],
    registry: &NetRegistry<Contour>,
    via_polys: &IndexMap<LayerId, Vec<Contour>>,
    scale_factor: i64,
) -> Vec<(NetName, NetName)> {
    let live: Vec<&NetName> = registry.live_names().collect();

    let mut queue: Vec<(NetName, NetName)> = Vec::new();
    let mut queued: HashSet<(&NetName, &NetName)> = HashSet::new();
    for connection in connectivity {
        let vias: Option<&[Contour]> = match connection.via {
            Some(via_layer) => {
                let vias = via_polys
                    .get(&via_layer)
                    .map_or(&[][..], Vec::as_slice);
                if vias.is_empty() {
                    continue;
                }
                Some(vias)
            }
            None => None,
        };
        let via_bounds = vias.and_then(Bounds::of_contours);

        // Each unordered pair is examined at most once per triple
        let mut examined: HashSet<(&NetName, &NetName)> = HashSet::new();

        for &top_name in &live {
            let top = registry.layer_geometry(top_name, connection.top);
            if top.is_empty() {
                continue;
            }
            let top_bounds = Bounds::of_contours(top);

            for &bot_name in &live {
                if bot_name == top_name {
                    continue;
                }
                let pair = canonical(top_name, bot_name);
                if !examined.insert(pair) || queued.contains(&pair) {
                    continue;
                }

                let bot = registry.layer_geometry(bot_name, connection.bot);
                if bot.is_empty() {
                    continue;
                }

                // Bounding-box pre-filter before the expensive clipping
                let bot_bounds = Bounds::of_contours(bot);
                if !may_touch(top_bounds, via_bounds, bot_bounds) {
                    continue;
                }

                let overlap = match vias {
                    Some(vias) => {
                        let via_top = clip::intersection_evenodd(top, vias);
                        clip::intersection_evenodd(&via_top, bot)
                    }
                    None => clip::intersection_evenodd(top, bot),
                };
                if overlap.is_empty() {
                    continue;
                }

                if let (Some(top_text), Some(bot_text)) = (top_name.text(), bot_name.text()) {
                    if top_text != bot_text {
                        let [x, y] = scale::descale_point(overlap[0][0], scale_factor);
                        match connection.via {
                            Some(via_layer) => warn!(
                                "nets {top_name} and {bot_name} are shorted through via layer {via_layer} near ({x}, {y})"
                            ),
                            None => warn!(
                                "nets {top_name} and {bot_name} are shorted by contact between layers {} and {} near ({x}, {y})",
                                connection.top, connection.bot
                            ),
                        }
                    }
                }
                queued.insert(pair);
                queue.push((pair.0.clone(), pair.1.clone()));
            }
        }
    }
    queue
}

fn canonical<'a>(a: &'a NetName, b: &'a NetName) -> (&'a NetName, &'a NetName) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn may_touch(top: Option<Bounds>, via: Option<Bounds>, bot: Option<Bounds>) -> bool {
    let (Some(top), Some(bot)) = (top, bot) else {
        return false;
    };
    if !top.intersects(&bot) {
        return false;
    }
    match via {
        Some(via) => via.intersects(&top) && via.intersects(&bot),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_may_touch_requires_all_three() {
        let a = Bounds { min: [0, 0], max: [10, 10] };
        let b = Bounds { min: [5, 5], max: [15, 15] };
        let far = Bounds { min: [100, 100], max: [110, 110] };
        assert!(may_touch(Some(a), None, Some(b)));
        assert!(!may_touch(Some(a), None, Some(far)));
        assert!(may_touch(Some(a), Some(b), Some(a)));
        assert!(!may_touch(Some(a), Some(far), Some(b)));
        assert!(!may_touch(None, None, Some(b)));
    }
}

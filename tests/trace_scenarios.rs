// End-to-end connectivity scenarios over the public API
use indexmap::IndexMap;
use nettrace::{
    check_connectivity, Label, LayerConnection, LayerId, NetName, TraceResult,
    DEFAULT_SCALE_FACTOR,
};
use std::collections::BTreeSet;

const M1: LayerId = LayerId(1, 0);
const M2: LayerId = LayerId(2, 0);
const V12: LayerId = LayerId(1, 2);

const M1_V12_M2: &[LayerConnection] =
    &[LayerConnection { top: M1, via: Some(V12), bot: M2 }];
const M1_M2_DIRECT: &[LayerConnection] = &[LayerConnection { top: M1, via: None, bot: M2 }];

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<[f64; 2]> {
    vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
}

fn label(x: f64, y: f64, text: &str) -> Label {
    Label { x, y, text: text.to_string() }
}

fn named(text: &str, subname: u32) -> NetName {
    NetName::Named { text: text.to_string(), subname }
}

fn names(entries: &[NetName]) -> BTreeSet<NetName> {
    entries.iter().cloned().collect()
}

fn trace(
    polys: Vec<(LayerId, Vec<Vec<[f64; 2]>>)>,
    labels: Vec<(LayerId, Vec<Label>)>,
    connectivity: &[LayerConnection],
) -> TraceResult {
    let polys: IndexMap<_, _> = polys.into_iter().collect();
    let labels: IndexMap<_, _> = labels.into_iter().collect();
    let registry = check_connectivity(
        &polys,
        &labels,
        connectivity,
        &IndexMap::new(),
        DEFAULT_SCALE_FACTOR,
    )
    .expect("trace failed");
    TraceResult::from_registry(&registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_labelled_net() {
        let result = trace(
            vec![(M1, vec![square(0.0, 0.0, 10.0, 10.0)])],
            vec![(M1, vec![label(5.0, 5.0, "A")])],
            M1_V12_M2,
        );
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert!(result.shorts.is_empty());
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_same_text_without_via_is_an_open() {
        let result = trace(
            vec![(M1, vec![square(0.0, 0.0, 10.0, 10.0), square(20.0, 0.0, 30.0, 10.0)])],
            vec![(M1, vec![label(5.0, 5.0, "A"), label(25.0, 5.0, "A")])],
            M1_V12_M2,
        );
        assert_eq!(result.nets, names(&[named("A", 0), named("A", 1)]));
        assert!(result.shorts.is_empty());
        assert_eq!(result.opens.len(), 1);
        assert_eq!(result.opens["A"], vec![named("A", 0), named("A", 1)]);
    }

    #[test]
    fn test_same_text_joined_by_via_stack() {
        let result = trace(
            vec![
                (M1, vec![square(0.0, 0.0, 10.0, 10.0), square(20.0, 0.0, 30.0, 10.0)]),
                (M2, vec![square(5.0, -5.0, 25.0, 15.0)]),
                (V12, vec![square(5.0, 5.0, 7.0, 7.0), square(23.0, 5.0, 25.0, 7.0)]),
            ],
            vec![(M1, vec![label(5.0, 5.0, "A"), label(25.0, 5.0, "A")])],
            M1_V12_M2,
        );
        // Both conductors and the bridging strip collapse into one net; the
        // same-text merge is not a short
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert!(result.shorts.is_empty());
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_two_labels_on_one_conductor_is_a_short() {
        let result = trace(
            vec![(M1, vec![square(0.0, 0.0, 10.0, 10.0)])],
            vec![(M1, vec![label(2.0, 5.0, "A"), label(8.0, 5.0, "B")])],
            M1_V12_M2,
        );
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert_eq!(result.shorts, vec![names(&[named("A", 0), named("B", 0)])]);
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_via_mediated_short() {
        let result = trace(
            vec![
                (M1, vec![square(0.0, 0.0, 10.0, 10.0)]),
                (M2, vec![square(0.0, 0.0, 10.0, 10.0)]),
                (V12, vec![square(4.0, 4.0, 6.0, 6.0)]),
            ],
            vec![
                (M1, vec![label(5.0, 5.0, "A")]),
                (M2, vec![label(5.0, 5.0, "B")]),
            ],
            M1_V12_M2,
        );
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert_eq!(result.shorts, vec![names(&[named("A", 0), named("B", 0)])]);
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_label_inside_hole_misses_conductor() {
        let mut hole = square(5.0, 5.0, 15.0, 15.0);
        hole.reverse();
        let result = trace(
            vec![(M1, vec![square(0.0, 0.0, 20.0, 20.0), hole])],
            vec![(M1, vec![label(10.0, 10.0, "A")])],
            M1_V12_M2,
        );
        // The annulus stays anonymous; the label lands in its hole
        assert!(result.nets.is_empty());
        assert!(result.shorts.is_empty());
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_island_inside_hole_is_its_own_net() {
        let mut hole = square(5.0, 5.0, 15.0, 15.0);
        hole.reverse();
        let result = trace(
            vec![(M1, vec![square(0.0, 0.0, 20.0, 20.0), hole, square(8.0, 8.0, 12.0, 12.0)])],
            vec![(M1, vec![label(2.0, 10.0, "A"), label(10.0, 10.0, "B")])],
            M1_V12_M2,
        );
        assert_eq!(result.nets, names(&[named("A", 0), named("B", 0)]));
        assert!(result.shorts.is_empty());
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_direct_contact_without_via_layer() {
        let result = trace(
            vec![
                (M1, vec![square(0.0, 0.0, 10.0, 10.0)]),
                (M2, vec![square(5.0, 5.0, 15.0, 15.0)]),
            ],
            vec![
                (M1, vec![label(2.0, 2.0, "A")]),
                (M2, vec![label(12.0, 12.0, "B")]),
            ],
            M1_M2_DIRECT,
        );
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert_eq!(result.shorts, vec![names(&[named("A", 0), named("B", 0)])]);
    }

    #[test]
    fn test_empty_via_layer_skips_the_triple() {
        let result = trace(
            vec![
                (M1, vec![square(0.0, 0.0, 10.0, 10.0)]),
                (M2, vec![square(0.0, 0.0, 10.0, 10.0)]),
            ],
            vec![
                (M1, vec![label(5.0, 5.0, "A")]),
                (M2, vec![label(5.0, 5.0, "A")]),
            ],
            M1_V12_M2,
        );
        // No via polygons anywhere: the conductors stay apart
        assert_eq!(result.nets, names(&[named("A", 0), named("A", 1)]));
        assert_eq!(result.opens.len(), 1);
        assert!(result.shorts.is_empty());
    }

    #[test]
    fn test_duplicate_labels_on_one_conductor_are_not_a_short() {
        let result = trace(
            vec![(M1, vec![square(0.0, 0.0, 10.0, 10.0)])],
            vec![(M1, vec![label(2.0, 5.0, "A"), label(8.0, 5.0, "A")])],
            M1_V12_M2,
        );
        // Both labels name the same net; the internal same-text merge is
        // filtered out of the report
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert!(result.shorts.is_empty());
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_anonymous_bridge_keeps_distinct_labels_shorted() {
        // A and B tie into an unlabelled M2 strip through separate vias
        let result = trace(
            vec![
                (M1, vec![square(0.0, 0.0, 10.0, 10.0), square(20.0, 0.0, 30.0, 10.0)]),
                (M2, vec![square(0.0, 0.0, 30.0, 10.0)]),
                (V12, vec![square(2.0, 2.0, 4.0, 4.0), square(26.0, 2.0, 28.0, 4.0)]),
            ],
            vec![(M1, vec![label(5.0, 5.0, "A"), label(25.0, 5.0, "B")])],
            M1_V12_M2,
        );
        assert_eq!(result.nets, names(&[named("A", 0)]));
        assert_eq!(result.shorts, vec![names(&[named("A", 0), named("B", 0)])]);
        assert!(result.opens.is_empty());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let build = || {
            trace(
                vec![
                    (M1, vec![square(0.0, 0.0, 10.0, 10.0), square(20.0, 0.0, 30.0, 10.0)]),
                    (M2, vec![square(5.0, -5.0, 25.0, 15.0)]),
                    (V12, vec![square(5.0, 5.0, 7.0, 7.0)]),
                ],
                vec![(M1, vec![label(5.0, 5.0, "A"), label(25.0, 5.0, "B")])],
                M1_V12_M2,
            )
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_label_remap_moves_annotation_layer() {
        let annotation = LayerId(63, 0);
        let polys: IndexMap<_, _> =
            vec![(M1, vec![square(0.0, 0.0, 10.0, 10.0)])].into_iter().collect();
        let labels: IndexMap<_, _> =
            vec![(annotation, vec![label(5.0, 5.0, "A")])].into_iter().collect();
        let label_remap: IndexMap<_, _> = vec![(annotation, M1)].into_iter().collect();

        let registry = check_connectivity(
            &polys,
            &labels,
            M1_V12_M2,
            &label_remap,
            DEFAULT_SCALE_FACTOR,
        )
        .expect("trace failed");
        let result = TraceResult::from_registry(&registry);
        assert_eq!(result.nets, names(&[named("A", 0)]));
    }

    #[test]
    fn test_metal_and_via_overlap_is_rejected() {
        let bad = &[LayerConnection { top: M1, via: Some(M1), bot: M2 }];
        let polys = IndexMap::new();
        let labels = IndexMap::new();
        let outcome =
            check_connectivity(&polys, &labels, bad, &IndexMap::new(), DEFAULT_SCALE_FACTOR);
        assert!(outcome.is_err());
    }
}

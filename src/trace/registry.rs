//! Union-find registry of net identities and their geometry
//!
//! Live identities key the `nets` map; merged-away identities survive only as
//! parent pointers in the alias forest. The registry is generic over its
//! geometry payload: conductors enter as outer-with-holes records and are
//! converted wholesale to flat contours before via merging.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::netname::{NameGenerator, NetName};
use crate::geometry::LayerId;

#[derive(Debug)]
pub struct NetRegistry<G> {
    nets: IndexMap<NetName, IndexMap<LayerId, Vec<G>>>,
    aliases: IndexMap<NetName, NetName>,
    namer: NameGenerator,
}

impl<G> Default for NetRegistry<G> {
    fn default() -> Self {
        NetRegistry {
            nets: IndexMap::new(),
            aliases: IndexMap::new(),
            namer: NameGenerator::default(),
        }
    }
}

impl<G> NetRegistry<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh named identity; repeated texts get increasing counters.
    pub fn new_named(&mut self, text: &str) -> NetName {
        self.namer.named(text)
    }

    /// Fresh anonymous identity.
    pub fn new_anonymous(&mut self) -> NetName {
        self.namer.anonymous()
    }

    /// Walk the alias chain to the live representative, compressing the
    /// walked path.
    pub fn resolve(&mut self, name: &NetName) -> NetName {
        let mut current = name.clone();
        let mut walked = Vec::new();
        while let Some(next) = self.aliases.get(&current) {
            walked.push(current);
            current = next.clone();
        }
        for link in walked {
            self.aliases.insert(link, current.clone());
        }
        current
    }

    /// Non-compressing resolve, for read-only reporting.
    fn resolve_ref(&self, name: &NetName) -> NetName {
        let mut current = name;
        while let Some(next) = self.aliases.get(current) {
            current = next;
        }
        current.clone()
    }

    /// Attach one geometry record to a net on one layer.
    pub fn push_geometry(&mut self, name: &NetName, layer: LayerId, geometry: G) {
        let live = self.resolve(name);
        self.nets
            .entry(live)
            .or_default()
            .entry(layer)
            .or_default()
            .push(geometry);
    }

    /// Merge two nets. The identity that sorts first survives, so a named
    /// identity always survives an anonymous one. The dropped identity's
    /// geometry moves (by concatenation) onto the survivor, and its key
    /// leaves the live set.
    pub fn merge(&mut self, a: &NetName, b: &NetName) {
        let a = self.resolve(a);
        let b = self.resolve(b);
        if a == b {
            return;
        }
        let (keep, drop) = if a < b { (a, b) } else { (b, a) };
        self.aliases.insert(drop.clone(), keep.clone());
        if let Some(layers) = self.nets.shift_remove(&drop) {
            let target = self.nets.entry(keep).or_default();
            for (layer, mut geometry) in layers {
                target.entry(layer).or_default().append(&mut geometry);
            }
        }
    }

    /// Identities that currently own geometry (or were registered and never
    /// merged away).
    pub fn live_names(&self) -> impl Iterator<Item = &NetName> {
        self.nets.keys()
    }

    /// Geometry of one live net on one layer; empty when the net has nothing
    /// there.
    pub fn layer_geometry(&self, name: &NetName, layer: LayerId) -> &[G] {
        self.nets
            .get(name)
            .and_then(|layers| layers.get(&layer))
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate live nets with their per-layer geometry.
    pub fn iter(&self) -> impl Iterator<Item = (&NetName, &IndexMap<LayerId, Vec<G>>)> {
        self.nets.iter()
    }

    /// Groups of named identities merged into one live net. Each group is the
    /// live representative plus every named identity aliased onto it. Groups
    /// whose members all share one text are still included here; the final
    /// report filters them out.
    pub fn get_shorted_nets(&self) -> Vec<BTreeSet<NetName>> {
        let mut buckets: IndexMap<NetName, Vec<NetName>> = IndexMap::new();
        for name in self.aliases.keys() {
            if !name.is_named() {
                continue;
            }
            let live = self.resolve_ref(name);
            buckets.entry(live).or_default().push(name.clone());
        }

        buckets
            .into_iter()
            .filter(|(live, _)| live.is_named())
            .map(|(live, mut members)| {
                members.push(live);
                members.into_iter().collect()
            })
            .collect()
    }

    /// Texts carried by two or more live identities: the label marks one
    /// intended net, but the geometry left it as disjoint conductors.
    pub fn get_open_nets(&self) -> IndexMap<String, Vec<NetName>> {
        let mut opens: IndexMap<String, Vec<NetName>> = IndexMap::new();
        let mut first_seen: IndexMap<&str, &NetName> = IndexMap::new();
        for name in self.nets.keys() {
            let Some(text) = name.text() else { continue };
            match first_seen.get(text) {
                Some(first) => {
                    let group = opens.entry(text.to_string()).or_default();
                    if group.is_empty() {
                        group.push((*first).clone());
                    }
                    group.push(name.clone());
                }
                None => {
                    first_seen.insert(text, name);
                }
            }
        }
        opens
    }

    /// Convert every stored geometry record, keeping names, aliases, and
    /// counters. Used for the transition to the flat even-odd representation.
    pub fn map_geometry<H>(self, mut convert: impl FnMut(Vec<G>) -> Vec<H>) -> NetRegistry<H> {
        NetRegistry {
            nets: self
                .nets
                .into_iter()
                .map(|(name, layers)| {
                    let layers = layers
                        .into_iter()
                        .map(|(layer, geometry)| (layer, convert(geometry)))
                        .collect();
                    (name, layers)
                })
                .collect(),
            aliases: self.aliases,
            namer: self.namer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M1: LayerId = LayerId(1, 0);
    const M2: LayerId = LayerId(2, 0);

    #[test]
    fn test_named_survives_anonymous() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let named = registry.new_named("A");
        let anon = registry.new_anonymous();
        registry.push_geometry(&named, M1, 1);
        registry.push_geometry(&anon, M2, 2);

        registry.merge(&anon, &named);
        assert_eq!(registry.resolve(&anon), named);
        assert_eq!(registry.layer_geometry(&named, M1), &[1]);
        assert_eq!(registry.layer_geometry(&named, M2), &[2]);
        assert_eq!(registry.live_names().count(), 1);
    }

    #[test]
    fn test_merge_concatenates_per_layer() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a = registry.new_named("A");
        let b = registry.new_named("B");
        registry.push_geometry(&a, M1, 1);
        registry.push_geometry(&b, M1, 2);
        registry.push_geometry(&b, M1, 3);

        registry.merge(&a, &b);
        assert_eq!(registry.layer_geometry(&a, M1), &[1, 2, 3]);
        assert!(registry.layer_geometry(&b, M1).is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent_across_chains() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a = registry.new_named("A");
        let b = registry.new_named("B");
        let c = registry.new_named("C");
        registry.push_geometry(&a, M1, 1);
        registry.push_geometry(&b, M1, 2);
        registry.push_geometry(&c, M1, 3);

        registry.merge(&b, &c); // C -> B
        registry.merge(&a, &b); // B -> A
        let live = registry.resolve(&c);
        assert_eq!(live, a);
        assert_eq!(registry.resolve(&live), a);
        // Path compression points C straight at A now
        assert_eq!(registry.aliases.get(&c), Some(&a));
    }

    #[test]
    fn test_merge_is_a_noop_on_same_class() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a = registry.new_named("A");
        let b = registry.new_named("B");
        registry.push_geometry(&a, M1, 1);
        registry.push_geometry(&b, M1, 2);
        registry.merge(&a, &b);
        registry.merge(&b, &a);
        assert_eq!(registry.layer_geometry(&a, M1), &[1, 2]);
        assert_eq!(registry.aliases.len(), 1);
    }

    #[test]
    fn test_no_geometry_lost_or_duplicated() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let names: Vec<NetName> = (0..4).map(|i| registry.new_named(&format!("N{i}"))).collect();
        for (i, name) in names.iter().enumerate() {
            registry.push_geometry(name, M1, i as u32);
            registry.push_geometry(name, M2, 100 + i as u32);
        }
        registry.merge(&names[0], &names[2]);
        registry.merge(&names[3], &names[1]);
        registry.merge(&names[2], &names[3]);

        let mut all: Vec<u32> = registry
            .iter()
            .flat_map(|(_, layers)| layers.values().flatten().copied())
            .collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 100, 101, 102, 103]);
        assert_eq!(registry.live_names().count(), 1);
    }

    #[test]
    fn test_shorted_nets_grouped_by_representative() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a = registry.new_named("A");
        let b = registry.new_named("B");
        let c = registry.new_named("C");
        let lone = registry.new_named("D");
        registry.push_geometry(&a, M1, 1);
        registry.push_geometry(&b, M1, 2);
        registry.push_geometry(&c, M1, 3);
        registry.push_geometry(&lone, M1, 4);

        registry.merge(&a, &b);
        registry.merge(&a, &c);

        let shorts = registry.get_shorted_nets();
        assert_eq!(shorts.len(), 1);
        let group = &shorts[0];
        assert_eq!(group.len(), 3);
        assert!(group.contains(&a) && group.contains(&b) && group.contains(&c));
    }

    #[test]
    fn test_anonymous_aliases_do_not_form_short_groups() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a = registry.new_named("A");
        let anon = registry.new_anonymous();
        registry.push_geometry(&a, M1, 1);
        registry.push_geometry(&anon, M1, 2);
        registry.merge(&a, &anon);
        assert!(registry.get_shorted_nets().is_empty());
    }

    #[test]
    fn test_open_nets_group_live_same_text() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a0 = registry.new_named("A");
        let a1 = registry.new_named("A");
        let b = registry.new_named("B");
        registry.push_geometry(&a0, M1, 1);
        registry.push_geometry(&a1, M1, 2);
        registry.push_geometry(&b, M1, 3);

        let opens = registry.get_open_nets();
        assert_eq!(opens.len(), 1);
        assert_eq!(opens["A"], vec![a0.clone(), a1.clone()]);

        // Once merged, the open disappears
        registry.merge(&a0, &a1);
        assert!(registry.get_open_nets().is_empty());
    }

    #[test]
    fn test_map_geometry_keeps_aliases() {
        let mut registry: NetRegistry<u32> = NetRegistry::new();
        let a = registry.new_named("A");
        let b = registry.new_named("B");
        registry.push_geometry(&a, M1, 7);
        registry.push_geometry(&b, M1, 8);
        registry.merge(&a, &b);

        let mut registry = registry.map_geometry(|geometry| {
            geometry.into_iter().map(|v| v.to_string()).collect::<Vec<String>>()
        });
        assert_eq!(registry.resolve(&b), a);
        assert_eq!(registry.layer_geometry(&a, M1), ["7".to_string(), "8".to_string()]);
    }
}

//! Layer remap files
//!
//! One `old : new` pair per line; each side is a layer name or a
//! `layer/datatype` designation. Used to move labels from annotation layers
//! onto the conductor layers they describe.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use super::LayerRef;
use crate::geometry::LayerId;

pub fn read_remap(path: &Path) -> Result<Vec<(LayerRef, LayerRef)>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading remap {}", path.display()))?;
    parse_remap(&text).with_context(|| format!("parsing remap {}", path.display()))
}

pub fn parse_remap(text: &str) -> Result<Vec<(LayerRef, LayerRef)>> {
    let mut entries = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        let line_number = line_number + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() != 2 {
            bail!("expected exactly one \":\" on line {line_number}");
        }
        let old = LayerRef::parse(fields[0], line_number)?;
        let new = LayerRef::parse(fields[1], line_number)?;
        entries.push((old, new));
    }
    Ok(entries)
}

/// Resolve both sides of every entry against the layer map.
pub fn resolve_remap(
    entries: &[(LayerRef, LayerRef)],
    layer_map: &IndexMap<String, LayerId>,
) -> Result<IndexMap<LayerId, LayerId>> {
    entries
        .iter()
        .map(|(old, new)| Ok((old.resolve(layer_map)?, new.resolve(layer_map)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remap() {
        let entries = parse_remap("10/0 : M1\n\n11/0:2/0\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, LayerRef::Nums(LayerId(10, 0)));
        assert_eq!(entries[0].1, LayerRef::Name("M1".to_string()));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_remap("10/0\n").is_err());
        assert!(parse_remap("a : b : c\n").is_err());
        assert!(parse_remap(" : M1\n").is_err());
    }

    #[test]
    fn test_resolve_remap() {
        let mut layer_map = IndexMap::new();
        layer_map.insert("M1".to_string(), LayerId(1, 0));
        let entries = parse_remap("10/0 : M1\n").unwrap();
        let remap = resolve_remap(&entries, &layer_map).unwrap();
        assert_eq!(remap[&LayerId(10, 0)], LayerId(1, 0));
    }
}

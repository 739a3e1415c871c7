//! Connectivity list files
//!
//! One layer adjacency per line:
//!
//! ```text
//! M1, V12, M2
//! M2, V23, M3
//! WELL, SUBSTRATE
//! ```
//!
//! Fields are layer names or `layer/datatype` designations. Two-field lines
//! denote direct contact between the conductor layers, with no via.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use super::LayerRef;
use crate::geometry::LayerId;
use crate::trace::LayerConnection;

/// An adjacency as written in the file, before layer names are resolved.
pub type ConnectivityEntry = (LayerRef, Option<LayerRef>, LayerRef);

pub fn read_connectivity(path: &Path) -> Result<Vec<ConnectivityEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading connectivity list {}", path.display()))?;
    parse_connectivity(&text)
        .with_context(|| format!("parsing connectivity list {}", path.display()))
}

pub fn parse_connectivity(text: &str) -> Result<Vec<ConnectivityEntry>> {
    let mut entries = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        let line_number = line_number + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let refs: Vec<LayerRef> = fields
            .iter()
            .map(|field| LayerRef::parse(field, line_number))
            .collect::<Result<_>>()?;

        match <[LayerRef; 3]>::try_from(refs) {
            Ok([top, via, bot]) => entries.push((top, Some(via), bot)),
            Err(refs) => match <[LayerRef; 2]>::try_from(refs) {
                Ok([top, bot]) => entries.push((top, None, bot)),
                Err(_) => bail!("expected 2 or 3 fields on line {line_number}"),
            },
        }
    }
    Ok(entries)
}

/// Resolve every name reference against the layer map.
pub fn resolve_connectivity(
    entries: &[ConnectivityEntry],
    layer_map: &IndexMap<String, LayerId>,
) -> Result<Vec<LayerConnection>> {
    entries
        .iter()
        .map(|(top, via, bot)| {
            Ok(LayerConnection {
                top: top.resolve(layer_map)?,
                via: via.as_ref().map(|v| v.resolve(layer_map)).transpose()?,
                bot: bot.resolve(layer_map)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> LayerRef {
        LayerRef::Name(s.to_string())
    }

    #[test]
    fn test_parse_triples_and_pairs() {
        let entries = parse_connectivity("M1, V12, M2\n\n1/0, 5/0\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (name("M1"), Some(name("V12")), name("M2")));
        assert_eq!(
            entries[1],
            (LayerRef::Nums(LayerId(1, 0)), None, LayerRef::Nums(LayerId(5, 0)))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_field_counts() {
        assert!(parse_connectivity("M1\n").is_err());
        let err = parse_connectivity("M1, V, M2, M3\n").unwrap_err();
        assert!(err.to_string().contains("line 1"), "{err}");
        assert!(parse_connectivity("M1, , M2\n").is_err());
    }

    #[test]
    fn test_resolve_connectivity() {
        let mut layer_map = IndexMap::new();
        layer_map.insert("M1".to_string(), LayerId(1, 0));
        layer_map.insert("M2".to_string(), LayerId(2, 0));

        let entries = parse_connectivity("M1, 1/2, M2\nM1, M2\n").unwrap();
        let connections = resolve_connectivity(&entries, &layer_map).unwrap();
        assert_eq!(
            connections[0],
            LayerConnection { top: LayerId(1, 0), via: Some(LayerId(1, 2)), bot: LayerId(2, 0) }
        );
        assert_eq!(connections[1].via, None);

        let entries = parse_connectivity("M1, M9\n").unwrap();
        assert!(resolve_connectivity(&entries, &layer_map).is_err());
    }
}

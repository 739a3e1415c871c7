//! Layer map files
//!
//! One `layer/datatype:name` per line, klayout's simplest layer-map form.
//! Blank lines are ignored; wildcard and range characters are not supported.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use crate::geometry::LayerId;

const FORBIDDEN: [char; 4] = ['*', '-', '(', ')'];

pub fn read_layermap(path: &Path) -> Result<IndexMap<String, LayerId>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading layer map {}", path.display()))?;
    parse_layermap(&text).with_context(|| format!("parsing layer map {}", path.display()))
}

pub fn parse_layermap(text: &str) -> Result<IndexMap<String, LayerId>> {
    let mut layer_map = IndexMap::new();
    for (line_number, line) in text.lines().enumerate() {
        let line_number = line_number + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(c) = line.chars().find(|c| FORBIDDEN.contains(c)) {
            bail!("unsupported special character {c:?} on line {line_number}");
        }

        let Some((layer_part, name)) = line.split_once(':') else {
            bail!("missing \":\" on line {line_number}");
        };
        if name.contains(':') {
            bail!("too many \":\" on line {line_number}");
        }
        let layer: LayerId = layer_part
            .trim()
            .parse()
            .with_context(|| format!("bad layer designation on line {line_number}"))?;

        let name = name.trim();
        if name.is_empty() {
            bail!("empty layer name on line {line_number}");
        }
        layer_map.insert(name.to_string(), layer);
    }
    Ok(layer_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_map() {
        let layer_map = parse_layermap("1/0:M1\n\n  2/0 : M2  \n1/2:V12\n").unwrap();
        assert_eq!(layer_map.len(), 3);
        assert_eq!(layer_map["M1"], LayerId(1, 0));
        assert_eq!(layer_map["M2"], LayerId(2, 0));
        assert_eq!(layer_map["V12"], LayerId(1, 2));
    }

    #[test]
    fn test_parse_rejects_special_characters() {
        let err = parse_layermap("1/0:M1\n2/0-3:M2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
        assert!(parse_layermap("*/0:any\n").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_layermap("1/0 M1\n").is_err());
        assert!(parse_layermap("1:M1\n").is_err());
        assert!(parse_layermap("1/0:\n").is_err());
        assert!(parse_layermap("1/0:a:b\n").is_err());
    }
}

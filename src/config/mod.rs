//! Text-file formats configuring a trace run
//!
//! # Submodules
//! - `layermap` - `layer/datatype:name` mapping files
//! - `connectivity` - metal/via/metal adjacency lists
//! - `remap` - `old : new` layer remapping files

pub mod connectivity;
pub mod layermap;
pub mod remap;

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;

use crate::geometry::LayerId;

/// A layer reference as written in a connectivity or remap file: either a
/// layer-map name or a literal `layer/datatype` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerRef {
    Name(String),
    Nums(LayerId),
}

impl LayerRef {
    /// Parse one comma- or colon-delimited field. Fields containing `/` are
    /// numeric designations; anything else is a layer name.
    pub fn parse(field: &str, line_number: usize) -> Result<LayerRef> {
        let field = field.trim();
        if field.contains('/') {
            let layer = field
                .parse()
                .with_context(|| format!("bad layer designation on line {line_number}"))?;
            Ok(LayerRef::Nums(layer))
        } else if field.is_empty() {
            bail!("empty layer field on line {line_number}");
        } else {
            Ok(LayerRef::Name(field.to_string()))
        }
    }

    /// Resolve to a concrete layer, looking names up in the layer map.
    pub fn resolve(&self, layer_map: &IndexMap<String, LayerId>) -> Result<LayerId> {
        match self {
            LayerRef::Nums(layer) => Ok(*layer),
            LayerRef::Name(name) => layer_map
                .get(name)
                .copied()
                .ok_or_else(|| anyhow!("layer name {name:?} is not in the layer map")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_field() {
        assert_eq!(LayerRef::parse(" 12/3 ", 1).unwrap(), LayerRef::Nums(LayerId(12, 3)));
    }

    #[test]
    fn test_parse_name_field() {
        assert_eq!(LayerRef::parse(" M1 ", 1).unwrap(), LayerRef::Name("M1".to_string()));
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(LayerRef::parse("  ", 4).is_err());
        assert!(LayerRef::parse("1/x", 4).is_err());
    }

    #[test]
    fn test_resolve() {
        let mut layer_map = IndexMap::new();
        layer_map.insert("M1".to_string(), LayerId(1, 0));
        assert_eq!(LayerRef::Name("M1".to_string()).resolve(&layer_map).unwrap(), LayerId(1, 0));
        assert_eq!(LayerRef::Nums(LayerId(7, 7)).resolve(&layer_map).unwrap(), LayerId(7, 7));
        assert!(LayerRef::Name("M9".to_string()).resolve(&layer_map).is_err());
    }
}

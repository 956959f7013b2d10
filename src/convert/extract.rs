use crate::schematic::Litematic;
use crate::types::BlockPos;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Namespace the converter understands; anything else becomes air.
const NAMESPACE: &str = "minecraft:";

/// Identifier aliases applied after namespace stripping. Mapping to "air"
/// drops the block. Additive: new rules are new rows.
static BLOCK_REMAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("smooth_stone", "stone"),
        ("barrier", "air"),
        ("light", "air"),
        ("structure_void", "air"),
    ])
});

/// One placed block as the conversion pipeline sees it. Produced per voxel
/// and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBlock {
    pub id: String,
    pub pos: BlockPos,
    pub properties: HashMap<String, String>,
}

impl SourceBlock {
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Resolves a namespaced block state name to an output identifier, or None
/// when the block is air or otherwise dropped.
fn resolve_id(name: &str) -> Option<&str> {
    let id = name.strip_prefix(NAMESPACE).unwrap_or("air");
    let id = BLOCK_REMAP.get(id).copied().unwrap_or(id);
    (id != "air").then_some(id)
}

/// Lazily walks every placed block of the schematic in encounter order,
/// dropping air and unmapped identifiers.
pub fn blocks(schematic: &Litematic) -> impl Iterator<Item = SourceBlock> + '_ {
    schematic.blocks().filter_map(|(state, pos)| {
        let id = resolve_id(&state.name)?;
        Some(SourceBlock {
            id: id.to_owned(),
            pos,
            properties: state.properties.clone(),
        })
    })
}

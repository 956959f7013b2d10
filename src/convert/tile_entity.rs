use crate::schematic::Litematic;
use crate::types::BlockPos;
use sandmatic_nbt::Tag;
use std::collections::HashMap;

/// A tile entity attached to one voxel: its identifier plus the raw compound
/// payload (sign text lives under `front_text.messages`).
#[derive(Debug, Clone)]
pub struct TileEntityRecord {
    pub id: String,
    pub pos: BlockPos,
    pub data: Tag,
}

/// Position-keyed lookup over every tile entity of the schematic. Built once
/// per conversion; a miss is an expected branch, never an error.
pub struct TileEntityIndex {
    pub(crate) records: HashMap<BlockPos, TileEntityRecord>,
}

impl TileEntityIndex {
    pub fn build(schematic: &Litematic) -> Self {
        let mut records = HashMap::new();
        for region in schematic.regions() {
            for (pos, data) in region.tile_entities() {
                let id = data
                    .get("id")
                    .and_then(Tag::as_str)
                    .unwrap_or_default()
                    .to_owned();
                records.insert(
                    *pos,
                    TileEntityRecord {
                        id,
                        pos: *pos,
                        data: data.clone(),
                    },
                );
            }
        }
        TileEntityIndex { records }
    }

    pub fn get(&self, pos: BlockPos) -> Option<&TileEntityRecord> {
        self.records.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

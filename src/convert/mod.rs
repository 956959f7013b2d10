pub mod compress;
pub mod document;
pub mod extract;
pub mod geometry;
pub mod orient;
pub mod palette;
pub mod sign;
pub mod tile_entity;

pub use document::{OutputDocument, PlacementRecord};
pub use orient::OrientationCode;
pub use palette::{PaletteBuilder, PaletteEntry};
pub use tile_entity::{TileEntityIndex, TileEntityRecord};

use crate::alert::Alert;
use crate::schematic::Litematic;
use crate::types::{Result, Vec3};

/// The artifact of one successful conversion: the compressed payload plus
/// any non-fatal warnings raised along the way.
#[derive(Debug)]
pub struct Conversion {
    pub payload: String,
    pub alerts: Vec<Alert>,
}

/// Converts a parsed litematic into the sandmatic payload. One synchronous
/// pass; every component instance is owned by this call, so concurrent
/// conversions of different schematics never share state.
pub fn convert(schematic: &Litematic, file_name: &str) -> Result<Conversion> {
    let mut alerts = Vec::new();
    let name = document::output_name(schematic.name(), file_name, &mut alerts);

    let tile_entities = TileEntityIndex::build(schematic);
    let mut palette = PaletteBuilder::new();
    let mut data = Vec::new();

    for block in extract::blocks(schematic) {
        let orientation = orient::resolve(
            &block.id,
            block.property("axis"),
            block.property("facing"),
            block.property("rotation").and_then(|r| r.parse().ok()),
        );
        let index = palette.intern(&block.id, orientation) as u32;
        let sign_text = sign::sign_text(&block, &tile_entities);

        let base = Vec3::from(block.pos);
        for offset in geometry::vertical_offsets(block.property("type")) {
            data.push(PlacementRecord {
                position: Vec3::new(base.x, base.y + offset, base.z),
                palette_index: index + 1,
                sign_text: sign_text.clone(),
            });
        }
    }

    let document = OutputDocument {
        name,
        palette: palette.into_entries(),
        data,
    };
    let payload = compress::pack(&document)?;

    Ok(Conversion { payload, alerts })
}

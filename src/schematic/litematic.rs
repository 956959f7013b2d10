use crate::error::SandmaticError;
use crate::schematic::BlockState;
use crate::types::{BlockPos, Result};
use sandmatic_nbt::{NbtFile, Tag};
use std::io::Cursor;

/// A parsed litematic schematic: declared name plus regions in file order.
#[derive(Debug)]
pub struct Litematic {
    name: Option<String>,
    regions: Vec<Region>,
}

/// One named region: block state palette, bit-packed voxel data and tile
/// entities. Positions handed out are absolute (region anchor applied).
#[derive(Debug)]
pub struct Region {
    pub name: String,
    position: BlockPos,
    size: BlockPos,
    pub palette: Vec<BlockState>,
    bits: usize,
    states: Vec<i64>,
    tile_entities: Vec<(BlockPos, Tag)>,
}

impl Litematic {
    /// Decodes a gzip-compressed litematic byte stream. Anything that is not
    /// a well-formed litematic comes back as InvalidInput.
    pub fn read(bytes: &[u8]) -> Result<Litematic> {
        let file = NbtFile::read_gzip(&mut Cursor::new(bytes))
            .map_err(|e| SandmaticError::InvalidInput(format!("not a litematic file: {}", e)))?;

        let name = file
            .root
            .get("Metadata")
            .and_then(|metadata| metadata.get("Name"))
            .and_then(Tag::as_str)
            .map(str::to_owned);

        let regions_tag = file.root.get("Regions").and_then(Tag::as_compound).ok_or_else(|| {
            SandmaticError::InvalidInput("litematic has no Regions compound".to_owned())
        })?;

        let mut regions = Vec::with_capacity(regions_tag.len());
        for (region_name, region_tag) in regions_tag {
            regions.push(Region::parse(region_name, region_tag)?);
        }

        Ok(Litematic { name, regions })
    }

    /// The declared schematic name from metadata, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Every placed voxel across all regions, in encounter order: region
    /// order first, voxel index order within a region.
    pub fn blocks(&self) -> impl Iterator<Item = (&BlockState, BlockPos)> + '_ {
        self.regions.iter().flat_map(Region::blocks)
    }
}

impl Region {
    fn parse(name: &str, tag: &Tag) -> Result<Region> {
        let position = read_vector(tag.get("Position"))
            .ok_or_else(|| invalid(name, "missing or malformed Position"))?;
        let size = read_vector(tag.get("Size"))
            .ok_or_else(|| invalid(name, "missing or malformed Size"))?;

        let palette_tag = tag
            .get("BlockStatePalette")
            .and_then(Tag::as_list)
            .ok_or_else(|| invalid(name, "missing BlockStatePalette"))?;
        let palette: Vec<BlockState> = palette_tag
            .iter()
            .filter_map(BlockState::from_tag)
            .collect();
        if palette.len() != palette_tag.len() {
            return Err(invalid(name, "malformed BlockStatePalette entry"));
        }

        let states = tag
            .get("BlockStates")
            .and_then(Tag::as_long_array)
            .ok_or_else(|| invalid(name, "missing BlockStates"))?
            .to_vec();

        let bits = bits_per_entry(palette.len());
        let volume =
            size.x.unsigned_abs() as usize * size.y.unsigned_abs() as usize * size.z.unsigned_abs() as usize;
        let expected = (volume * bits + 63) / 64;
        if states.len() < expected {
            return Err(invalid(name, "BlockStates array is too short"));
        }

        let mut tile_entities = Vec::new();
        if let Some(list) = tag.get("TileEntities").and_then(Tag::as_list) {
            for entity in list {
                let (Some(x), Some(y), Some(z)) = (
                    entity.get("x").and_then(Tag::as_i32),
                    entity.get("y").and_then(Tag::as_i32),
                    entity.get("z").and_then(Tag::as_i32),
                ) else {
                    continue;
                };
                // Stored region-relative; expose absolute
                let pos = BlockPos::new(position.x + x, position.y + y, position.z + z);
                tile_entities.push((pos, entity.clone()));
            }
        }

        Ok(Region {
            name: name.to_owned(),
            position,
            size,
            palette,
            bits,
            states,
            tile_entities,
        })
    }

    /// Region extent along each axis (sizes may be negative in the file).
    fn extents(&self) -> (usize, usize, usize) {
        (
            self.size.x.unsigned_abs() as usize,
            self.size.y.unsigned_abs() as usize,
            self.size.z.unsigned_abs() as usize,
        )
    }

    /// Minimum corner of the region. A negative size component grows the
    /// region away from Position, shifting the corner by size + 1.
    fn anchor(&self) -> BlockPos {
        BlockPos::new(
            self.position.x + (self.size.x + 1).min(0),
            self.position.y + (self.size.y + 1).min(0),
            self.position.z + (self.size.z + 1).min(0),
        )
    }

    /// Palette index at the given voxel index. Entries are `bits` wide and
    /// may straddle a long boundary.
    fn state_index(&self, voxel: usize) -> usize {
        let bit_index = voxel * self.bits;
        let start = bit_index / 64;
        let end = (bit_index + self.bits - 1) / 64;
        let offset = bit_index % 64;
        let mask = (1u64 << self.bits) - 1;

        let value = if start == end {
            (self.states[start] as u64) >> offset
        } else {
            ((self.states[start] as u64) >> offset) | ((self.states[end] as u64) << (64 - offset))
        };
        (value & mask) as usize
    }

    /// Voxels of this region in index order, `(y * sz + z) * sx + x`, with
    /// absolute positions. Indices outside the palette are skipped.
    pub fn blocks(&self) -> impl Iterator<Item = (&BlockState, BlockPos)> + '_ {
        let (sx, sy, sz) = self.extents();
        let anchor = self.anchor();
        (0..sx * sy * sz).filter_map(move |voxel| {
            let state = self.palette.get(self.state_index(voxel))?;
            let x = voxel % sx;
            let z = (voxel / sx) % sz;
            let y = voxel / (sx * sz);
            let pos = BlockPos::new(
                anchor.x + x as i32,
                anchor.y + y as i32,
                anchor.z + z as i32,
            );
            Some((state, pos))
        })
    }

    /// Tile entity compounds with absolute positions, in list order.
    pub fn tile_entities(&self) -> &[(BlockPos, Tag)] {
        &self.tile_entities
    }
}

fn invalid(region: &str, message: &str) -> SandmaticError {
    SandmaticError::InvalidInput(format!("region {}: {}", region, message))
}

/// Reads an `{x, y, z}` int compound.
fn read_vector(tag: Option<&Tag>) -> Option<BlockPos> {
    let tag = tag?;
    Some(BlockPos::new(
        tag.get("x")?.as_i32()?,
        tag.get("y")?.as_i32()?,
        tag.get("z")?.as_i32()?,
    ))
}

/// Bits per packed entry: enough for the palette, never fewer than two.
fn bits_per_entry(palette_len: usize) -> usize {
    if palette_len <= 1 {
        2
    } else {
        ((usize::BITS - (palette_len - 1).leading_zeros()) as usize).max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn compound(entries: Vec<(&str, Tag)>) -> Tag {
        Tag::Compound(
            entries
                .into_iter()
                .map(|(name, tag)| (name.to_owned(), tag))
                .collect(),
        )
    }

    fn vector(x: i32, y: i32, z: i32) -> Tag {
        compound(vec![("x", Tag::Int(x)), ("y", Tag::Int(y)), ("z", Tag::Int(z))])
    }

    fn palette_entry(name: &str) -> Tag {
        compound(vec![("Name", Tag::String(name.to_owned()))])
    }

    #[test]
    fn test_bits_per_entry() {
        assert_eq!(bits_per_entry(0), 2);
        assert_eq!(bits_per_entry(1), 2);
        assert_eq!(bits_per_entry(2), 2);
        assert_eq!(bits_per_entry(4), 2);
        assert_eq!(bits_per_entry(5), 3);
        assert_eq!(bits_per_entry(16), 4);
        assert_eq!(bits_per_entry(17), 5);
    }

    #[test]
    fn test_region_blocks_order_and_positions() {
        // 2x2x2 region, palette [air, stone], two stone blocks at voxel
        // indices 0 and 7 (2 bits each, packed little-end first)
        let region_tag = compound(vec![
            ("Position", vector(10, 20, 30)),
            ("Size", vector(2, 2, 2)),
            (
                "BlockStatePalette",
                Tag::List(vec![palette_entry("minecraft:air"), palette_entry("minecraft:stone")]),
            ),
            ("BlockStates", Tag::LongArray(vec![0b01_00_00_00_00_00_00_01])),
        ]);

        let region = Region::parse("main", &region_tag).unwrap();
        let blocks: Vec<(String, BlockPos)> = region
            .blocks()
            .map(|(state, pos)| (state.name.clone(), pos))
            .collect();

        assert_eq!(blocks.len(), 8);
        // Voxel 0 is the anchor corner, voxel 7 the opposite corner
        assert_eq!(blocks[0], ("minecraft:stone".to_owned(), BlockPos::new(10, 20, 30)));
        assert_eq!(blocks[7], ("minecraft:stone".to_owned(), BlockPos::new(11, 21, 31)));
        assert_eq!(blocks[1].0, "minecraft:air");
    }

    #[test]
    fn test_region_negative_size_anchor() {
        let region_tag = compound(vec![
            ("Position", vector(0, 0, 0)),
            ("Size", vector(-2, 1, 1)),
            ("BlockStatePalette", Tag::List(vec![palette_entry("minecraft:stone")])),
            ("BlockStates", Tag::LongArray(vec![0])),
        ]);

        let region = Region::parse("main", &region_tag).unwrap();
        let positions: Vec<BlockPos> = region.blocks().map(|(_, pos)| pos).collect();
        assert_eq!(positions, vec![BlockPos::new(-1, 0, 0), BlockPos::new(0, 0, 0)]);
    }

    #[test]
    fn test_state_index_straddles_longs() {
        // 5-entry palette forces 3-bit entries; voxel 21 spans longs 0 and 1
        let palette: Vec<Tag> = (0..5)
            .map(|i| palette_entry(&format!("minecraft:block_{}", i)))
            .collect();
        let mut states = vec![0i64; 2];
        // voxel 21 starts at bit 63: low bit in long 0, high bits in long 1
        states[0] = (0b1u64 << 63) as i64;
        states[1] = 0b10;
        let region_tag = compound(vec![
            ("Position", vector(0, 0, 0)),
            ("Size", vector(3, 3, 3)),
            ("BlockStatePalette", Tag::List(palette)),
            ("BlockStates", Tag::LongArray(states)),
        ]);

        let region = Region::parse("main", &region_tag).unwrap();
        assert_eq!(region.state_index(21), 0b101);
    }

    #[test]
    fn test_short_block_states_rejected() {
        let region_tag = compound(vec![
            ("Position", vector(0, 0, 0)),
            ("Size", vector(8, 8, 8)),
            ("BlockStatePalette", Tag::List(vec![palette_entry("minecraft:stone")])),
            ("BlockStates", Tag::LongArray(vec![0])),
        ]);

        assert_matches!(
            Region::parse("main", &region_tag),
            Err(SandmaticError::InvalidInput(_))
        );
    }

    #[test]
    fn test_tile_entities_made_absolute() {
        let entity = compound(vec![
            ("id", Tag::String("minecraft:sign".to_owned())),
            ("x", Tag::Int(1)),
            ("y", Tag::Int(2)),
            ("z", Tag::Int(3)),
        ]);
        let region_tag = compound(vec![
            ("Position", vector(100, 0, -100)),
            ("Size", vector(4, 4, 4)),
            ("BlockStatePalette", Tag::List(vec![palette_entry("minecraft:air")])),
            ("BlockStates", Tag::LongArray(vec![0, 0])),
            ("TileEntities", Tag::List(vec![entity])),
        ]);

        let region = Region::parse("main", &region_tag).unwrap();
        assert_eq!(region.tile_entities().len(), 1);
        assert_eq!(region.tile_entities()[0].0, BlockPos::new(101, 2, -97));
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert_matches!(
            Litematic::read(b"not a schematic"),
            Err(SandmaticError::InvalidInput(_))
        );
    }
}

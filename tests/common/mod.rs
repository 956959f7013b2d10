use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use sandmatic_nbt::{NbtFile, Tag};
use std::io::Read;

pub fn compound(entries: Vec<(&str, Tag)>) -> Tag {
    Tag::Compound(
        entries
            .into_iter()
            .map(|(name, tag)| (name.to_owned(), tag))
            .collect(),
    )
}

pub fn vector(x: i32, y: i32, z: i32) -> Tag {
    compound(vec![("x", Tag::Int(x)), ("y", Tag::Int(y)), ("z", Tag::Int(z))])
}

/// A litematic palette entry compound with string properties.
pub fn palette_entry(name: &str, properties: &[(&str, &str)]) -> Tag {
    let mut entries = vec![("Name", Tag::String(name.to_owned()))];
    let props: Vec<(String, Tag)> = properties
        .iter()
        .map(|(key, value)| ((*key).to_owned(), Tag::String((*value).to_owned())))
        .collect();
    if !props.is_empty() {
        entries.push(("Properties", Tag::Compound(props)));
    }
    compound(entries)
}

/// A sign tile entity compound at region-relative coordinates, with lines
/// stored as quoted literals.
pub fn sign_tile_entity(x: i32, y: i32, z: i32, lines: &[&str]) -> Tag {
    let messages = Tag::List(lines.iter().map(|l| Tag::String((*l).to_owned())).collect());
    compound(vec![
        ("id", Tag::String("minecraft:sign".to_owned())),
        ("x", Tag::Int(x)),
        ("y", Tag::Int(y)),
        ("z", Tag::Int(z)),
        ("front_text", compound(vec![("messages", messages)])),
    ])
}

/// Packs palette indices into the litematic long array layout: entries are
/// `max(2, bits(palette_len - 1))` wide and may straddle long boundaries.
pub fn pack_states(indices: &[usize], palette_len: usize) -> Vec<i64> {
    let bits = if palette_len <= 1 {
        2
    } else {
        ((usize::BITS - (palette_len - 1).leading_zeros()) as usize).max(2)
    };
    let mut longs = vec![0i64; (indices.len() * bits + 63) / 64];
    let mask = (1u64 << bits) - 1;

    for (i, &index) in indices.iter().enumerate() {
        let bit = i * bits;
        let start = bit / 64;
        let end = (bit + bits - 1) / 64;
        let offset = bit % 64;
        let value = index as u64 & mask;

        longs[start] |= (value << offset) as i64;
        if start != end {
            longs[end] |= (value >> (64 - offset)) as i64;
        }
    }
    longs
}

pub struct RegionSpec {
    pub position: (i32, i32, i32),
    pub size: (i32, i32, i32),
    pub palette: Vec<Tag>,
    /// Palette index per voxel, in `(y * sz + z) * sx + x` order.
    pub blocks: Vec<usize>,
    pub tile_entities: Vec<Tag>,
}

impl RegionSpec {
    pub fn new(size: (i32, i32, i32), palette: Vec<Tag>, blocks: Vec<usize>) -> Self {
        RegionSpec {
            position: (0, 0, 0),
            size,
            palette,
            blocks,
            tile_entities: Vec::new(),
        }
    }

    fn to_tag(&self) -> Tag {
        let states = pack_states(&self.blocks, self.palette.len());
        compound(vec![
            ("Position", vector(self.position.0, self.position.1, self.position.2)),
            ("Size", vector(self.size.0, self.size.1, self.size.2)),
            ("BlockStatePalette", Tag::List(self.palette.clone())),
            ("BlockStates", Tag::LongArray(states)),
            ("TileEntities", Tag::List(self.tile_entities.clone())),
        ])
    }
}

/// Serializes a complete litematic byte stream (gzip-wrapped NBT) from the
/// given metadata name and regions.
pub fn litematic_bytes(name: Option<&str>, regions: Vec<(&str, RegionSpec)>) -> Vec<u8> {
    let mut metadata = Vec::new();
    if let Some(name) = name {
        metadata.push(("Name", Tag::String(name.to_owned())));
    }

    let region_tags: Vec<(String, Tag)> = regions
        .iter()
        .map(|(region_name, spec)| ((*region_name).to_owned(), spec.to_tag()))
        .collect();

    let root = compound(vec![
        ("Version", Tag::Int(6)),
        ("Metadata", compound(metadata)),
        ("Regions", Tag::Compound(region_tags)),
    ]);

    let mut bytes = Vec::new();
    NbtFile::new("".to_owned(), root)
        .write_gzip(&mut bytes)
        .unwrap();
    bytes
}

/// Reverses the compression pipeline: base64 decode, inflate, parse JSON.
pub fn unpack_payload(payload: &str) -> serde_json::Value {
    let compressed = BASE64_STANDARD.decode(payload).unwrap();
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut serialized = String::new();
    decoder.read_to_string(&mut serialized).unwrap();
    serde_json::from_str(&serialized).unwrap()
}

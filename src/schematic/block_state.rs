use sandmatic_nbt::Tag;
use std::collections::HashMap;

/// A block identifier plus its property bag, e.g. `minecraft:oak_slab` with
/// `type=top`. Property values are kept as strings; consumers parse what
/// they need.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub name: String,
    pub properties: HashMap<String, String>,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        BlockState {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Parses the textual block state form `name[key=value,key=value]`.
    /// Malformed property segments are skipped rather than rejected.
    pub fn parse(state: &str) -> BlockState {
        let (name, rest) = match state.split_once('[') {
            Some((name, rest)) => (name, rest.trim_end_matches(']')),
            None => (state, ""),
        };

        let mut block = BlockState::new(name);
        for pair in rest.split(',').filter(|pair| !pair.is_empty()) {
            if let Some((key, value)) = pair.split_once('=') {
                block
                    .properties
                    .insert(key.trim().to_owned(), value.trim().to_owned());
            }
        }
        block
    }

    /// Builds a block state from a litematic palette entry compound
    /// (`Name` string plus optional `Properties` compound of strings).
    pub fn from_tag(tag: &Tag) -> Option<BlockState> {
        let name = tag.get("Name")?.as_str()?;
        let mut block = BlockState::new(name);

        if let Some(properties) = tag.get("Properties").and_then(Tag::as_compound) {
            for (key, value) in properties {
                if let Some(value) = value.as_str() {
                    block.properties.insert(key.clone(), value.to_owned());
                }
            }
        }
        Some(block)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

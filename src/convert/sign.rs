use crate::convert::extract::SourceBlock;
use crate::convert::tile_entity::TileEntityIndex;
use sandmatic_nbt::Tag;

/// Tile entity identifier all sign variants share.
const SIGN_TILE_ENTITY: &str = "minecraft:sign";

pub fn is_sign(id: &str) -> bool {
    id.ends_with("sign")
}

/// Extracts the co-located sign text for a sign block, if any. Every miss
/// (no tile entity, wrong identifier, no surviving lines) is silent.
pub fn sign_text(block: &SourceBlock, index: &TileEntityIndex) -> Option<String> {
    if !is_sign(&block.id) {
        return None;
    }

    let record = index.get(block.pos)?;
    if record.id != SIGN_TILE_ENTITY {
        return None;
    }

    let messages = record
        .data
        .get("front_text")?
        .get("messages")?
        .as_list()?;

    let lines: Vec<&str> = messages
        .iter()
        .filter_map(Tag::as_str)
        .map(strip_quotes)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}

/// Sign lines are stored as quoted literals; drop one leading and one
/// trailing character.
fn strip_quotes(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

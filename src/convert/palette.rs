use crate::convert::orient::OrientationCode;
use serde::Serialize;

/// One deduplicated (identifier, orientation) pair. `b` is the block
/// identifier, `r` the orientation code, omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    #[serde(rename = "b")]
    pub block: String,
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub orientation: Option<OrientationCode>,
}

/// Grows the output palette in first-seen order. Interning is an exact-match
/// linear scan on purpose: insertion order, and with it every emitted index,
/// must be identical across runs of the same input. Palettes stay small
/// enough that the scan does not matter.
#[derive(Default)]
pub struct PaletteBuilder {
    entries: Vec<PaletteEntry>,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        PaletteBuilder::default()
    }

    /// Returns the 0-based index for the pair, appending a new entry the
    /// first time it is seen.
    pub fn intern(&mut self, block: &str, orientation: Option<OrientationCode>) -> usize {
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.block == block && entry.orientation == orientation)
        {
            return index;
        }

        self.entries.push(PaletteEntry {
            block: block.to_owned(),
            orientation,
        });
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<PaletteEntry> {
        self.entries
    }
}

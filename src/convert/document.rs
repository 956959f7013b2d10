use crate::alert::Alert;
use crate::convert::palette::PaletteEntry;
use crate::types::Vec3;
use serde::{Serialize, Serializer};

/// Longest name the target application accepts.
pub const MAX_NAME_LEN: usize = 30;

/// One emitted voxel. `p` is the comma-joined position, `l` the 1-based
/// palette index (0 is reserved for "no palette reference" in the
/// non-paletted document form), `S` optional sign text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementRecord {
    #[serde(rename = "p", serialize_with = "serialize_position")]
    pub position: Vec3,
    #[serde(rename = "l")]
    pub palette_index: u32,
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub sign_text: Option<String>,
}

/// The assembled sandmatic document. Field order is fixed so identical
/// inputs serialize to identical bytes.
#[derive(Debug, Serialize)]
pub struct OutputDocument {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Palette")]
    pub palette: Vec<PaletteEntry>,
    #[serde(rename = "Data")]
    pub data: Vec<PlacementRecord>,
}

/// Resolves the output name: the declared schematic name when non-empty,
/// else the file name minus its extension; capped at 30 characters with a
/// warning when trimming was needed.
pub fn output_name(
    declared: Option<&str>,
    file_name: &str,
    alerts: &mut Vec<Alert>,
) -> String {
    let name = match declared {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => file_stem(file_name).to_owned(),
    };

    if name.chars().count() > MAX_NAME_LEN {
        alerts.push(Alert::warning(
            "The name is too long, it will be trimmed to 30 characters.",
        ));
        return name.chars().take(MAX_NAME_LEN).collect();
    }
    name
}

/// File name with its final extension removed.
fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}

fn serialize_position<S: Serializer>(pos: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!(
        "{},{},{}",
        format_coordinate(pos.x),
        format_coordinate(pos.y),
        format_coordinate(pos.z)
    ))
}

/// Integral coordinates print without a fractional part, slab offsets keep
/// theirs, matching the target application's parser.
fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

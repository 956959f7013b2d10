use serde::{Serialize, Serializer};

/// Canonical orientation of a palette entry. Serializes as the sandmatic
/// wire form: a number of rotation steps, or the symbolic side codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationCode {
    /// Rotation steps; cardinal facings map to 0-3, raw rotations pass
    /// through on the 0-15 scale.
    Steps(i32),
    /// Laid on its side along the x axis; wire form "l".
    SideX,
    /// Laid on its side along the z axis; wire form "f".
    SideZ,
}

impl Serialize for OrientationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OrientationCode::Steps(steps) => serializer.serialize_i32(*steps),
            OrientationCode::SideX => serializer.serialize_str("l"),
            OrientationCode::SideZ => serializer.serialize_str("f"),
        }
    }
}

/// Per-identifier rotation overrides, consulted in registration order with
/// the first matching predicate winning.
type RotationRule = (fn(&str) -> bool, fn(i32) -> i32);

static ROTATION_OVERRIDES: &[RotationRule] = &[
    // Signs rotate the opposite way around on the 16-step scale
    (
        |id| id.ends_with("sign"),
        |rotation| if rotation > 0 { 16 - rotation } else { 0 },
    ),
];

/// Resolves a block's orientation from its raw properties. Precedence:
/// physical axis beats cardinal facing beats freeform rotation beats nothing.
pub fn resolve(
    id: &str,
    axis: Option<&str>,
    facing: Option<&str>,
    rotation: Option<i32>,
) -> Option<OrientationCode> {
    match axis {
        Some("x") => return Some(OrientationCode::SideX),
        Some("z") => return Some(OrientationCode::SideZ),
        _ => {}
    }

    match facing {
        Some("north") => return Some(OrientationCode::Steps(0)),
        Some("east") => return Some(OrientationCode::Steps(1)),
        Some("south") => return Some(OrientationCode::Steps(2)),
        Some("west") => return Some(OrientationCode::Steps(3)),
        _ => {}
    }

    let rotation = rotation?;
    let transformed = ROTATION_OVERRIDES
        .iter()
        .find(|(applies, _)| applies(id))
        .map(|(_, transform)| transform(rotation))
        .unwrap_or(rotation);
    Some(OrientationCode::Steps(transformed))
}

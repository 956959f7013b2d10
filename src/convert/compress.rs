use crate::convert::document::OutputDocument;
use crate::error::{SandmaticError, SizeStage};
use crate::types::Result;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// Serialized document character ceiling, checked before compression.
pub const MAX_SERIALIZED_LEN: usize = 200_000;
/// Compressed-and-encoded character ceiling.
pub const MAX_ENCODED_LEN: usize = 50_000;

/// Serializes, deflates and base64-encodes the document, enforcing both size
/// gates. Either gate failing is terminal for the conversion; no partial
/// output escapes.
pub fn pack(document: &OutputDocument) -> Result<String> {
    let serialized = serde_json::to_string(document)?;
    let length = serialized.chars().count();
    if length > MAX_SERIALIZED_LEN {
        return Err(SandmaticError::OutputTooLarge {
            stage: SizeStage::Serialized,
            length,
            limit: MAX_SERIALIZED_LEN,
        });
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(serialized.as_bytes())?;
    let compressed = encoder.finish()?;

    let encoded = BASE64_STANDARD.encode(&compressed);
    if encoded.len() > MAX_ENCODED_LEN {
        return Err(SandmaticError::OutputTooLarge {
            stage: SizeStage::Compressed,
            length: encoded.len(),
            limit: MAX_ENCODED_LEN,
        });
    }

    Ok(encoded)
}

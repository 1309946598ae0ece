//! Human and JSON renderings of messages and layouts
use core::fmt::Write;

use gridsync_messages::layout::{FieldLayout, layout, layout_bits};
use gridsync_messages::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::ToolsError;
use crate::hex::to_hex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// A decoded buffer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoded {
    pub kind: MessageKind,
    pub tag: u8,
    /// Bits used by the message, without the padding of the last byte
    pub bits: usize,
    pub bytes: usize,
    pub message: Message,
}

pub fn decode(codec: &MessageCodec, bytes: &[u8]) -> Result<Decoded, ToolsError> {
    let message = codec.decode(bytes)?;
    let decoded = Decoded {
        kind: message.kind(),
        tag: message.kind().tag(),
        bits: codec.encoded_bits(&message),
        bytes: bytes.len(),
        message,
    };
    debug!(kind = %decoded.kind, bits = decoded.bits, "decoded buffer");
    Ok(decoded)
}

/// Encodes a message written in its JSON form, e.g. `{"MapEvent":{"entity":2,"cell":255}}`
pub fn encode_json(codec: &MessageCodec, json: &str) -> Result<Vec<u8>, ToolsError> {
    let message: Message = serde_json::from_str(json)?;
    Ok(codec.encode(&message)?.to_vec())
}

pub fn render_decoded(decoded: &Decoded, format: Format) -> Result<String, ToolsError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(decoded)?),
        Format::Text => Ok(format!(
            "{} (tag {}, {} bits in {} bytes)\n{:#?}",
            decoded.kind, decoded.tag, decoded.bits, decoded.bytes, decoded.message
        )),
    }
}

pub fn render_encoded(bytes: &[u8], format: Format) -> Result<String, ToolsError> {
    match format {
        Format::Json => Ok(serde_json::to_string(bytes)?),
        Format::Text => Ok(to_hex(bytes)),
    }
}

/// Bit layout of one message kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindLayout {
    pub kind: MessageKind,
    pub tag: u8,
    pub fixed_bits: usize,
    /// Bits of one roster entry; zero for the kinds without a roster
    pub entry_bits: usize,
    pub fields: Vec<FieldLayout>,
}

pub fn layouts(config: &CodecConfig) -> Vec<KindLayout> {
    MessageKind::ALL
        .iter()
        .map(|kind| {
            let (fixed_bits, entry_bits) = layout_bits(*kind, config);
            KindLayout {
                kind: *kind,
                tag: kind.tag(),
                fixed_bits,
                entry_bits,
                fields: layout(*kind, config),
            }
        })
        .collect()
}

pub fn render_layouts(config: &CodecConfig, format: Format) -> Result<String, ToolsError> {
    let layouts = layouts(config);
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(&layouts)?);
    }
    let mut out = String::new();
    for kind in &layouts {
        let _ = write!(out, "{} (tag {}): {} bits", kind.kind, kind.tag, kind.fixed_bits);
        if kind.entry_bits > 0 {
            let _ = write!(out, " + {} bits per entry", kind.entry_bits);
        }
        out.push('\n');
        for field in &kind.fields {
            let marker = if field.repeated { "*" } else { "" };
            let _ = writeln!(out, "  {:<12}{:>3}{marker}", field.name, field.bits);
        }
    }
    Ok(out)
}

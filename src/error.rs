//! Error types for the pbcg library

use std::io;
use thiserror::Error;

use crate::types::SetProperty;

/// Main error type for pbcg operations
///
/// Every variant is fatal to the decode or replay attempt that raised it.
#[derive(Debug, Error)]
pub enum PbcgError {
    /// IO error occurred while loading a blob
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The blob does not start with the `PBCG` version 1 header
    #[error("Invalid magic header: {found:02X?}")]
    InvalidMagic { found: Vec<u8> },

    /// The blob ended in the middle of a field
    #[error("Truncated input at offset {offset}: {needed} more byte(s) needed")]
    TruncatedInput { offset: usize, needed: usize },

    /// A path stream contained an unrecognized primitive tag
    #[error("Unknown path primitive {tag} at offset {offset}")]
    UnknownPathPrimitive { tag: u8, offset: usize },

    /// An instruction verb, set-property or fill-rule code is out of range
    #[error("Unknown {kind} code {code} at {position}")]
    UnknownOpcode {
        kind: &'static str,
        code: u8,
        position: usize,
    },

    /// An instruction references a path beyond the path table
    #[error("Dangling path reference: index {index}, table holds {len}")]
    DanglingPathReference { index: u16, len: usize },

    /// A paint reference points at or beyond the referencing position
    #[error("Dangling palette reference: index {index}, {len} entries available")]
    DanglingPaletteReference { index: u16, len: usize },

    /// A SET instruction targets a property the format cannot express
    #[error("Unsupported property: {0}")]
    UnsupportedProperty(SetProperty),

    /// A RESTORE would pop the implicit outer save
    #[error("Unbalanced restore at instruction {instruction}")]
    UnbalancedRestore { instruction: usize },

    /// Bytes follow the instruction stream and the reader rejects them
    #[error("Trailing data at offset {offset}: {remaining} byte(s) after the last instruction")]
    TrailingData { offset: usize, remaining: usize },
}

/// Result type alias for pbcg operations
pub type Result<T> = std::result::Result<T, PbcgError>;

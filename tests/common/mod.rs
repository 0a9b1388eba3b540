//! Shared test utilities for pbcg integration tests.
//!
//! Blob construction lives in [`builders`]; this module adds the decode and
//! replay helpers every test crate imports via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use pbcg::render::{RecordingSurface, SurfaceCall};
use pbcg::{PbcgError, PbcgReader, PbcgReaderConfiguration, Program};

pub use builders::{BlobBuilder, PathBytes, MAGIC};

// ===========================================================================
// Decode helpers
// ===========================================================================

/// Decode and build, panicking with the error on failure.
pub fn decode(blob: &[u8]) -> Program {
    pbcg::decode(blob).unwrap_or_else(|e| panic!("decode failed: {e}"))
}

/// Decode and build, returning the error; panics if decoding succeeds.
pub fn decode_err(blob: &[u8]) -> PbcgError {
    match pbcg::decode(blob) {
        Ok(program) => panic!(
            "expected a decode error, got {} instructions",
            program.instructions().len()
        ),
        Err(e) => e,
    }
}

/// Read with trailing data rejected.
pub fn decode_strict(blob: &[u8]) -> Result<Program, PbcgError> {
    let image = PbcgReader::from_bytes(blob)
        .with_configuration(PbcgReaderConfiguration {
            reject_trailing_data: true,
        })
        .read()?;
    Program::from_image(&image)
}

// ===========================================================================
// Replay helpers
// ===========================================================================

/// Replay a blob on a fresh recording surface.
///
/// The surface is returned together with the outcome so tests can inspect
/// the trace of a failed replay too.
pub fn replay(blob: &[u8]) -> (RecordingSurface, pbcg::Result<pbcg::ReplaySummary>) {
    let mut surface = RecordingSurface::new();
    let result = pbcg::replay(blob, &mut surface);
    (surface, result)
}

pub fn count_restores(surface: &RecordingSurface) -> usize {
    surface.count(|c| *c == SurfaceCall::Restore)
}

pub fn count_saves(surface: &RecordingSurface) -> usize {
    surface.count(|c| *c == SurfaceCall::Save)
}

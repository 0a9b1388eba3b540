//! # pbcg
//!
//! A pure Rust decoder and replayer for PBCG, a compact binary
//! vector-graphics format.
//!
//! A PBCG blob holds a palette (solid colors and gradients), a table of
//! paths, and a stream of drawing instructions. This crate decodes the blob,
//! resolves every palette and path reference into an immutable [`Program`],
//! and replays that program against any [`DrawingSurface`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pbcg::{render::RecordingSurface, Executor};
//!
//! let program = pbcg::decode(&std::fs::read("star.pbcg")?)?;
//!
//! let mut surface = RecordingSurface::new();
//! Executor::new(&program).replay(&mut surface)?;
//!
//! for call in surface.calls() {
//!     println!("{}", call);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! Data flows strictly forward:
//!
//! - [`io::pbcg::PbcgReader`] - bytes to raw records ([`PbcgImage`])
//! - [`program::ProgramBuilder`] - records to a resolved [`Program`]
//! - [`render::Executor`] - program to surface calls
//!
//! Every decode failure is fatal: no partial program is ever produced.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod notification;
pub mod program;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use error::{PbcgError, Result};
pub use types::{Color, FillRule, SetProperty, TableIndex};

pub use io::pbcg::{PbcgImage, PbcgReader, PbcgReaderConfiguration};
pub use program::{Instruction, Paint, Path, PathPrimitive, Program, ProgramFeatures, Setting};
pub use render::{DrawingSurface, Executor, ReplaySummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decode a blob and build its program in one step.
pub fn decode(blob: &[u8]) -> Result<Program> {
    let image = PbcgReader::from_bytes(blob).read()?;
    Program::from_image(&image)
}

/// Decode a blob and replay it against `surface`.
pub fn replay<S: DrawingSurface + ?Sized>(blob: &[u8], surface: &mut S) -> Result<ReplaySummary> {
    let program = decode(blob)?;
    Executor::new(&program).replay(surface)
}

//! PBCG binary format support.
//!
//! # Layout
//!
//! All multi-byte integers are big-endian.
//!
//! | Field | Encoding |
//! |-------|----------|
//! | magic | `50 42 43 47 00 01` (`PBCG`, version 1) |
//! | counts | 6 x `u16`: opaque colors, alpha colors, linear gradients, radial gradients, paths, instructions |
//! | opaque color | `u8` r, g, b |
//! | alpha color | `u8` r, g, b, a |
//! | linear gradient | `i16` x0, y0, x1, y1; `u16` stop count; stops |
//! | radial gradient | `u16` x0, y0, r0, x1, y1, r1; `u16` stop count; stops |
//! | color stop | `u16` offset, `u16` palette index |
//! | path | (`u8` tag, operands)* terminated by tag 0 |
//! | instruction | `u8` verb, operands |
//!
//! # Module Structure
//!
//! - [`constants`] - magic, tag codes, field sizes
//! - [`records`] - decoded records holding the raw wire integers
//! - [`reader`] - the reader stack

pub mod constants;
pub mod reader;
pub mod records;

pub use reader::{PbcgReader, PbcgReaderConfiguration};
pub use records::{
    ColorStopRecord, InstructionRecord, LinearGradientRecord, PaletteRecord, PathPrimitiveRecord,
    PathRecord, PbcgHeader, PbcgImage, RadialGradientRecord,
};

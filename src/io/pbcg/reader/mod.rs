//! PBCG blob reader.
//!
//! - [`stream_reader`] - big-endian primitive reads and normalization
//! - [`resource_reader`] - palette and path tables
//! - [`instruction_reader`] - the instruction stream
//! - [`pbcg_reader`] - header handling and orchestration

pub mod instruction_reader;
pub mod pbcg_reader;
pub mod resource_reader;
pub mod stream_reader;

pub use instruction_reader::InstructionReader;
pub use pbcg_reader::{PbcgReader, PbcgReaderConfiguration};
pub use resource_reader::ResourceReader;
pub use stream_reader::{
    normalize_angle, normalize_signed, normalize_unsigned, read_i16_at, read_u16_at,
    PbcgStreamReader,
};

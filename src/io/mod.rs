//! I/O module for reading PBCG blobs

pub mod pbcg;

pub use pbcg::{PbcgReader, PbcgReaderConfiguration};

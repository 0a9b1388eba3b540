//! Top-level PBCG reader.
//!
//! Reads, in order: the magic, the six table counts, the palette, the paths
//! and the instruction stream. Any failure aborts the whole read; no partial
//! image is ever returned.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{PbcgError, Result};
use crate::io::pbcg::constants::MAGIC;
use crate::io::pbcg::records::{PbcgHeader, PbcgImage};
use crate::notification::{NotificationCollection, NotificationType};

use super::instruction_reader::InstructionReader;
use super::resource_reader::ResourceReader;
use super::stream_reader::PbcgStreamReader;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration options for the PBCG reader.
#[derive(Debug, Clone)]
pub struct PbcgReaderConfiguration {
    /// When `true`, bytes after the last instruction fail the read with
    /// [`PbcgError::TrailingData`]. Otherwise they are reported as a
    /// notification and ignored.
    ///
    /// Default: `false`.
    pub reject_trailing_data: bool,
}

impl Default for PbcgReaderConfiguration {
    fn default() -> Self {
        Self {
            reject_trailing_data: false,
        }
    }
}

// ---------------------------------------------------------------------------
// PbcgReader
// ---------------------------------------------------------------------------

/// PBCG blob reader
pub struct PbcgReader {
    blob: Vec<u8>,
    config: PbcgReaderConfiguration,
}

impl PbcgReader {
    /// Create a reader over an in-memory blob.
    pub fn from_bytes(blob: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: blob.into(),
            config: PbcgReaderConfiguration::default(),
        }
    }

    /// Create a reader by draining any byte source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut blob = Vec::new();
        reader.read_to_end(&mut blob)?;
        Ok(Self::from_bytes(blob))
    }

    /// Open a PBCG file by path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: PbcgReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Raw blob being read.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Decode the blob into its raw tables.
    pub fn read(&self) -> Result<PbcgImage> {
        let mut reader = PbcgStreamReader::new(&self.blob);
        let mut notifications = NotificationCollection::new();

        Self::read_magic(&mut reader)?;
        let header = Self::read_header(&mut reader)?;
        log::debug!("header: {:?}", header);

        let (palette, paths) = {
            let mut resources = ResourceReader::new(&mut reader, &mut notifications);
            let palette = resources.read_palette(&header)?;
            let paths = resources.read_paths(header.paths)?;
            (palette, paths)
        };
        let instructions = InstructionReader::new(&mut reader).read_instructions(header.instructions)?;

        self.check_trailing_data(&reader, &mut notifications)?;

        Ok(PbcgImage {
            header,
            palette,
            paths,
            instructions,
            notifications,
        })
    }

    /// Compare the available prefix first, so a short blob with a wrong
    /// signature is still reported as a magic mismatch.
    fn read_magic(reader: &mut PbcgStreamReader<'_>) -> Result<()> {
        let found = reader.peek(MAGIC.len());
        if found != &MAGIC[..found.len()] {
            return Err(PbcgError::InvalidMagic {
                found: found.to_vec(),
            });
        }
        reader.read_bytes(MAGIC.len())?;
        Ok(())
    }

    fn read_header(reader: &mut PbcgStreamReader<'_>) -> Result<PbcgHeader> {
        Ok(PbcgHeader {
            opaque_colors: reader.read_u16()?,
            alpha_colors: reader.read_u16()?,
            linear_gradients: reader.read_u16()?,
            radial_gradients: reader.read_u16()?,
            paths: reader.read_u16()?,
            instructions: reader.read_u16()?,
        })
    }

    fn check_trailing_data(
        &self,
        reader: &PbcgStreamReader<'_>,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        let remaining = reader.remaining();
        if remaining == 0 {
            return Ok(());
        }

        let offset = reader.position();
        if self.config.reject_trailing_data {
            return Err(PbcgError::TrailingData { offset, remaining });
        }
        notifications.notify_at(
            NotificationType::Warning,
            offset,
            format!("{} trailing byte(s) ignored", remaining),
        );
        Ok(())
    }
}

//! Instruction stream reader.
//!
//! Only the shape of each instruction is checked here. Path and palette
//! indices are taken at face value and validated by the program builder.

use crate::error::{PbcgError, Result};
use crate::io::pbcg::constants::verbs;
use crate::io::pbcg::records::InstructionRecord;
use crate::types::{SetProperty, TableIndex};

use super::stream_reader::PbcgStreamReader;

/// Reader for the counted instruction stream.
pub struct InstructionReader<'r, 'a> {
    reader: &'r mut PbcgStreamReader<'a>,
}

impl<'r, 'a> InstructionReader<'r, 'a> {
    pub fn new(reader: &'r mut PbcgStreamReader<'a>) -> Self {
        Self { reader }
    }

    /// Read `count` instructions.
    pub fn read_instructions(&mut self, count: u16) -> Result<Vec<InstructionRecord>> {
        let mut instructions = Vec::with_capacity(count as usize);
        for _ in 0..count {
            instructions.push(self.read_instruction()?);
        }
        log::debug!(
            "instructions: {} entries, ends at offset {}",
            instructions.len(),
            self.reader.position()
        );
        Ok(instructions)
    }

    pub fn read_instruction(&mut self) -> Result<InstructionRecord> {
        let offset = self.reader.position();
        let verb = self.reader.read_u8()?;

        let instruction = match verb {
            verbs::CLIP => InstructionRecord::Clip {
                fill_rule: self.reader.read_u8()?,
                path: TableIndex::new(self.reader.read_u16()?),
            },
            verbs::FILL => InstructionRecord::Fill {
                fill_rule: self.reader.read_u8()?,
                path: TableIndex::new(self.reader.read_u16()?),
            },
            verbs::RESTORE => InstructionRecord::Restore,
            verbs::SAVE => InstructionRecord::Save,
            verbs::SET => {
                let property_offset = self.reader.position();
                let code = self.reader.read_u8()?;
                let property =
                    SetProperty::from_code(code).ok_or(PbcgError::UnknownOpcode {
                        kind: "property",
                        code,
                        position: property_offset,
                    })?;
                InstructionRecord::Set {
                    property,
                    value: self.reader.read_u16()?,
                }
            }
            verbs::STROKE => InstructionRecord::Stroke {
                path: TableIndex::new(self.reader.read_u16()?),
            },
            _ => {
                return Err(PbcgError::UnknownOpcode {
                    kind: "verb",
                    code: verb,
                    position: offset,
                })
            }
        };

        log::trace!("instruction at {}: {:?}", offset, instruction);
        Ok(instruction)
    }
}

//! Summary of the surface capabilities a program relies on

use bitflags::bitflags;

use super::instruction::{Instruction, Setting};
use super::paint::Paint;

bitflags! {
    /// Capabilities exercised by a program's instructions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProgramFeatures: u16 {
        const FILL = 0x1;
        const STROKE = 0x2;
        const CLIP = 0x4;
        /// At least one explicit SAVE.
        const NESTED_SCOPES = 0x8;
        /// A paint in use carries an alpha channel.
        const ALPHA = 0x10;
        const LINEAR_GRADIENT = 0x20;
        const RADIAL_GRADIENT = 0x40;
        /// LINE_GAP or LINE_DASH_OFFSET is set.
        const DASHED_LINES = 0x80;
    }
}

impl ProgramFeatures {
    /// Flags raised by one instruction. Paints set by SET FILL / SET STROKE
    /// contribute through their palette entry, see [`ProgramFeatures::of_paint`].
    pub fn of_instruction(instruction: &Instruction) -> Self {
        match instruction {
            Instruction::Clip { .. } => ProgramFeatures::CLIP,
            Instruction::Fill { .. } => ProgramFeatures::FILL,
            Instruction::Stroke { .. } => ProgramFeatures::STROKE,
            Instruction::Save => ProgramFeatures::NESTED_SCOPES,
            Instruction::Restore => ProgramFeatures::empty(),
            Instruction::Set(setting) => match setting {
                Setting::LineDashOffset(_) | Setting::LineGap(_) => ProgramFeatures::DASHED_LINES,
                Setting::FillStyle(_) | Setting::StrokeStyle(_) | Setting::LineWidth(_) => {
                    ProgramFeatures::empty()
                }
            },
        }
    }

    /// The flag of `paint` itself. Stops are not followed; the builder
    /// merges the flags already stored for the entries they reference.
    pub fn of_paint(paint: &Paint) -> Self {
        match paint {
            Paint::Solid(color) if color.has_alpha() => ProgramFeatures::ALPHA,
            Paint::Solid(_) => ProgramFeatures::empty(),
            Paint::LinearGradient(_) => ProgramFeatures::LINEAR_GRADIENT,
            Paint::RadialGradient(_) => ProgramFeatures::RADIAL_GRADIENT,
        }
    }
}

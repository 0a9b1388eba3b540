//! Resolved instructions

use std::sync::Arc;

use crate::types::FillRule;

use super::paint::Paint;
use super::path::Path;

/// A SET instruction with its value already interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    FillStyle(Arc<Paint>),
    StrokeStyle(Arc<Paint>),
    LineDashOffset(f64),
    LineGap(f64),
    LineWidth(f64),
}

/// An executable drawing instruction. No raw indices remain.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Clip {
        path: Arc<Path>,
        /// `None` leaves the rule to the surface default.
        fill_rule: Option<FillRule>,
    },
    Fill {
        path: Arc<Path>,
        fill_rule: Option<FillRule>,
    },
    Restore,
    Save,
    Set(Setting),
    Stroke {
        path: Arc<Path>,
    },
}

impl Instruction {
    pub fn verb(&self) -> &'static str {
        match self {
            Instruction::Clip { .. } => "CLIP",
            Instruction::Fill { .. } => "FILL",
            Instruction::Restore => "RESTORE",
            Instruction::Save => "SAVE",
            Instruction::Set(_) => "SET",
            Instruction::Stroke { .. } => "STROKE",
        }
    }

    /// The path drawn or clipped by this instruction, if any.
    pub fn path(&self) -> Option<&Arc<Path>> {
        match self {
            Instruction::Clip { path, .. }
            | Instruction::Fill { path, .. }
            | Instruction::Stroke { path } => Some(path),
            _ => None,
        }
    }
}

//! Executable drawing programs.
//!
//! A [`Program`] is the fully resolved form of a PBCG blob: paints and paths
//! normalized to floating point, and instructions holding shared references
//! instead of table positions. It is immutable once built and can be
//! replayed any number of times with [`crate::render::Executor`].

pub mod builder;
pub mod features;
pub mod instruction;
pub mod paint;
pub mod path;

pub use builder::ProgramBuilder;
pub use features::ProgramFeatures;
pub use instruction::{Instruction, Setting};
pub use paint::{ColorStop, LinearGradient, Paint, RadialGradient};
pub use path::{Path, PathPrimitive};

use std::sync::Arc;

use crate::error::Result;
use crate::io::pbcg::records::PbcgImage;
use crate::notification::NotificationCollection;

/// Resolved instruction list with the palette and path tables it references.
#[derive(Debug, Clone)]
pub struct Program {
    palette: Vec<Arc<Paint>>,
    paths: Vec<Arc<Path>>,
    instructions: Vec<Instruction>,
    features: ProgramFeatures,
    notifications: NotificationCollection,
}

impl Program {
    /// Build a program from decoded records.
    pub fn from_image(image: &PbcgImage) -> Result<Self> {
        ProgramBuilder::new(image).build()
    }

    pub fn palette(&self) -> &[Arc<Paint>] {
        &self.palette
    }

    pub fn paths(&self) -> &[Arc<Path>] {
        &self.paths
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Capabilities the instructions rely on.
    pub fn features(&self) -> ProgramFeatures {
        self.features
    }

    /// Decode and build notifications, in the order they were raised.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

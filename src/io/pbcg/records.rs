//! Decoded records, one per wire structure.
//!
//! Records keep the integers exactly as transmitted. Normalization and
//! reference resolution happen later, in [`crate::program::ProgramBuilder`].

use crate::notification::NotificationCollection;
use crate::types::{Color, SetProperty, TableIndex};

/// The six table counts following the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PbcgHeader {
    pub opaque_colors: u16,
    pub alpha_colors: u16,
    pub linear_gradients: u16,
    pub radial_gradients: u16,
    pub paths: u16,
    pub instructions: u16,
}

impl PbcgHeader {
    /// Total number of palette entries described by the header.
    pub fn palette_len(&self) -> usize {
        self.opaque_colors as usize
            + self.alpha_colors as usize
            + self.linear_gradients as usize
            + self.radial_gradients as usize
    }
}

/// A gradient stop: `u16` offset and a palette position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStopRecord {
    pub offset: u16,
    pub paint: TableIndex<PaletteRecord>,
}

/// Linear gradient with signed endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearGradientRecord {
    pub x0: i16,
    pub y0: i16,
    pub x1: i16,
    pub y1: i16,
    pub stops: Vec<ColorStopRecord>,
}

/// Radial gradient. Unlike linear gradients every field is unsigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadialGradientRecord {
    pub x0: u16,
    pub y0: u16,
    pub r0: u16,
    pub x1: u16,
    pub y1: u16,
    pub r1: u16,
    pub stops: Vec<ColorStopRecord>,
}

/// One palette entry as transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteRecord {
    Color(Color),
    LinearGradient(LinearGradientRecord),
    RadialGradient(RadialGradientRecord),
}

impl PaletteRecord {
    pub fn stops(&self) -> &[ColorStopRecord] {
        match self {
            PaletteRecord::Color(_) => &[],
            PaletteRecord::LinearGradient(g) => &g.stops,
            PaletteRecord::RadialGradient(g) => &g.stops,
        }
    }
}

/// One path step as transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrimitiveRecord {
    Arc {
        center_x: i16,
        center_y: i16,
        radius: u16,
        start_angle: u16,
        end_angle: u16,
    },
    ArcTo {
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        radius: u16,
    },
    BezierCurveTo {
        cp1x: i16,
        cp1y: i16,
        cp2x: i16,
        cp2y: i16,
        x: i16,
        y: i16,
    },
    Ellipse {
        center_x: i16,
        center_y: i16,
        radius_x: u16,
        radius_y: u16,
        rotation: u16,
        start_angle: u16,
        end_angle: u16,
    },
    LineTo {
        x: i16,
        y: i16,
    },
    MoveTo {
        x: i16,
        y: i16,
    },
    QuadraticCurveTo {
        cpx: i16,
        cpy: i16,
        x: i16,
        y: i16,
    },
    Rect {
        center_x: i16,
        center_y: i16,
        width: u16,
        height: u16,
    },
}

/// A path: its steps without the END sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathRecord {
    pub steps: Vec<PathPrimitiveRecord>,
}

/// One instruction as transmitted, indices not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionRecord {
    Clip {
        fill_rule: u8,
        path: TableIndex<PathRecord>,
    },
    Fill {
        fill_rule: u8,
        path: TableIndex<PathRecord>,
    },
    Restore,
    Save,
    Set {
        property: SetProperty,
        value: u16,
    },
    Stroke {
        path: TableIndex<PathRecord>,
    },
}

/// Everything read from one blob.
#[derive(Debug, Clone, Default)]
pub struct PbcgImage {
    pub header: PbcgHeader,
    /// Solid colors, alpha colors, linear then radial gradients, in file order.
    pub palette: Vec<PaletteRecord>,
    pub paths: Vec<PathRecord>,
    pub instructions: Vec<InstructionRecord>,
    pub notifications: NotificationCollection,
}

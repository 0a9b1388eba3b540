//! Resolved paint styles

use std::sync::Arc;

use crate::types::Color;

/// A gradient stop referring to an earlier palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, in [0, 1].
    pub offset: f64,
    pub paint: Arc<Paint>,
}

/// Linear gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

/// Radial gradient between two circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
    pub stops: Vec<ColorStop>,
}

/// A palette entry usable as fill or stroke style.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Paint::Solid(color) => Some(*color),
            _ => None,
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Paint::Solid(_) => &[],
            Paint::LinearGradient(g) => &g.stops,
            Paint::RadialGradient(g) => &g.stops,
        }
    }
}

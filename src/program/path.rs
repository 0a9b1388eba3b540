//! Resolved path geometry
//!
//! Coordinates live in the normalized drawing space: positions in roughly
//! [-1, 1], magnitudes in [0, 1], angles in radians. Arcs and ellipses sweep
//! counter-clockwise.

/// One step of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathPrimitive {
    Arc {
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ArcTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        radius: f64,
    },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    Ellipse {
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    MoveTo {
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    },
    /// Axis-aligned rectangle given by its top-left corner.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl PathPrimitive {
    pub fn name(&self) -> &'static str {
        match self {
            PathPrimitive::Arc { .. } => "ARC",
            PathPrimitive::ArcTo { .. } => "ARC_TO",
            PathPrimitive::BezierCurveTo { .. } => "BEZIER_CURVE_TO",
            PathPrimitive::Ellipse { .. } => "ELLIPSE",
            PathPrimitive::LineTo { .. } => "LINE_TO",
            PathPrimitive::MoveTo { .. } => "MOVE_TO",
            PathPrimitive::QuadraticCurveTo { .. } => "QUADRATIC_CURVE_TO",
            PathPrimitive::Rect { .. } => "RECT",
        }
    }
}

/// An ordered sequence of primitives forming one shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    primitives: Vec<PathPrimitive>,
}

impl Path {
    pub fn new(primitives: Vec<PathPrimitive>) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &[PathPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathPrimitive> {
        self.primitives.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathPrimitive;
    type IntoIter = std::slice::Iter<'a, PathPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

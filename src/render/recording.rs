//! A surface that records calls instead of drawing

use std::fmt;

use crate::program::{Paint, Path};
use crate::types::FillRule;

use super::surface::DrawingSurface;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    Clip {
        path: Path,
        fill_rule: Option<FillRule>,
    },
    Fill {
        path: Path,
        fill_rule: Option<FillRule>,
    },
    Stroke {
        path: Path,
    },
    SetFillStyle(Paint),
    SetStrokeStyle(Paint),
    SetLineWidth(f64),
    SetLineGap(f64),
    SetLineDashOffset(f64),
}

impl SurfaceCall {
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            SurfaceCall::Clip { .. } | SurfaceCall::Fill { .. } | SurfaceCall::Stroke { .. }
        )
    }
}

impl fmt::Display for SurfaceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = |r: &Option<FillRule>| r.map_or("default", |r| r.as_str());
        match self {
            SurfaceCall::Save => write!(f, "save()"),
            SurfaceCall::Restore => write!(f, "restore()"),
            SurfaceCall::Clip { path, fill_rule } => {
                write!(f, "clip({} steps, {})", path.len(), rule(fill_rule))
            }
            SurfaceCall::Fill { path, fill_rule } => {
                write!(f, "fill({} steps, {})", path.len(), rule(fill_rule))
            }
            SurfaceCall::Stroke { path } => write!(f, "stroke({} steps)", path.len()),
            SurfaceCall::SetFillStyle(paint) => write!(f, "fillStyle = {}", describe(paint)),
            SurfaceCall::SetStrokeStyle(paint) => write!(f, "strokeStyle = {}", describe(paint)),
            SurfaceCall::SetLineWidth(v) => write!(f, "lineWidth = {}", v),
            SurfaceCall::SetLineGap(v) => write!(f, "lineGap = {}", v),
            SurfaceCall::SetLineDashOffset(v) => write!(f, "lineDashOffset = {}", v),
        }
    }
}

fn describe(paint: &Paint) -> String {
    match paint {
        Paint::Solid(color) => color.to_css_hex(),
        Paint::LinearGradient(_) => format!("linear-gradient({} stops)", paint.stops().len()),
        Paint::RadialGradient(_) => format!("radial-gradient({} stops)", paint.stops().len()),
    }
}

/// Records every call and tracks the save/restore nesting depth.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    depth: usize,
    max_depth: usize,
    /// Restores issued with nothing saved.
    underflows: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Current nesting depth; 0 when balanced.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn underflows(&self) -> usize {
        self.underflows
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(*c)).count()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.calls.push(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.underflows += 1,
        }
        self.calls.push(SurfaceCall::Restore);
    }

    fn clip(&mut self, path: &Path, fill_rule: Option<FillRule>) {
        self.calls.push(SurfaceCall::Clip {
            path: path.clone(),
            fill_rule,
        });
    }

    fn fill(&mut self, path: &Path, fill_rule: Option<FillRule>) {
        self.calls.push(SurfaceCall::Fill {
            path: path.clone(),
            fill_rule,
        });
    }

    fn stroke(&mut self, path: &Path) {
        self.calls.push(SurfaceCall::Stroke { path: path.clone() });
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.calls.push(SurfaceCall::SetFillStyle(paint.clone()));
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.calls.push(SurfaceCall::SetStrokeStyle(paint.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(SurfaceCall::SetLineWidth(width));
    }

    fn set_line_gap(&mut self, gap: f64) {
        self.calls.push(SurfaceCall::SetLineGap(gap));
    }

    fn set_line_dash_offset(&mut self, offset: f64) {
        self.calls.push(SurfaceCall::SetLineDashOffset(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_depth_tracking() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.save();
        surface.restore();
        assert_eq!(surface.depth(), 1);
        assert_eq!(surface.max_depth(), 2);
        surface.restore();
        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.underflows(), 1);
    }

    #[test]
    fn test_call_display() {
        let path = Path::default();
        assert_eq!(
            SurfaceCall::Fill {
                path,
                fill_rule: Some(FillRule::EvenOdd)
            }
            .to_string(),
            "fill(0 steps, evenodd)"
        );
        assert_eq!(
            SurfaceCall::SetFillStyle(Paint::Solid(Color::from_rgb(255, 255, 0))).to_string(),
            "fillStyle = #ffff00"
        );
    }

    #[test]
    fn test_count_drawing_calls() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.stroke(&Path::default());
        surface.set_line_width(0.5);
        assert_eq!(surface.count(SurfaceCall::is_drawing), 1);
        surface.clear();
        assert!(surface.calls().is_empty());
    }
}

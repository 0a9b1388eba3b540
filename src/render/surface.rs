//! Drawing surface collaborator

use crate::program::{Paint, Path};
use crate::types::FillRule;

/// A 2D drawing surface the executor replays programs against.
///
/// Mirrors the canvas 2D context subset the format needs. `save` and
/// `restore` manage a nestable state stack; paint styles and line settings
/// are part of that state.
pub trait DrawingSurface {
    fn save(&mut self);

    fn restore(&mut self);

    /// Intersect the clip region with `path`.
    fn clip(&mut self, path: &Path, fill_rule: Option<FillRule>);

    fn fill(&mut self, path: &Path, fill_rule: Option<FillRule>);

    fn stroke(&mut self, path: &Path);

    fn set_fill_style(&mut self, paint: &Paint);

    fn set_stroke_style(&mut self, paint: &Paint);

    fn set_line_width(&mut self, width: f64);

    fn set_line_gap(&mut self, gap: f64);

    fn set_line_dash_offset(&mut self, offset: f64);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn save(&mut self) {
        (**self).save()
    }

    fn restore(&mut self) {
        (**self).restore()
    }

    fn clip(&mut self, path: &Path, fill_rule: Option<FillRule>) {
        (**self).clip(path, fill_rule)
    }

    fn fill(&mut self, path: &Path, fill_rule: Option<FillRule>) {
        (**self).fill(path, fill_rule)
    }

    fn stroke(&mut self, path: &Path) {
        (**self).stroke(path)
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        (**self).set_fill_style(paint)
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        (**self).set_stroke_style(paint)
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    fn set_line_gap(&mut self, gap: f64) {
        (**self).set_line_gap(gap)
    }

    fn set_line_dash_offset(&mut self, offset: f64) {
        (**self).set_line_dash_offset(offset)
    }
}

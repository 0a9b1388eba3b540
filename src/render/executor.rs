//! Program executor.
//!
//! Replays a [`Program`] against a [`DrawingSurface`]. Before the first
//! instruction the executor performs one implicit `save()`, so the scope
//! depth starts at 1. A RESTORE that would pop that outer scope fails with
//! [`PbcgError::UnbalancedRestore`].
//!
//! Whatever happens during replay (normal completion, an error, or a panic
//! inside the surface) the surface is restored back to the depth it had
//! before replay started.

use crate::error::{PbcgError, Result};
use crate::program::{Instruction, Program, Setting};

use super::surface::DrawingSurface;

/// Outcome of a successful replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Instructions applied.
    pub executed: usize,
    /// Deepest scope reached, counting the implicit outer save.
    pub max_depth: usize,
    /// `restore()` calls issued after the last instruction, including the
    /// one closing the implicit outer save.
    pub unwound: usize,
}

/// Open save scopes on a surface.
///
/// Holds the surface for the duration of a replay; dropping it restores
/// every scope still open.
struct SaveScope<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
    depth: usize,
    max_depth: usize,
}

impl<'s, S: DrawingSurface + ?Sized> SaveScope<'s, S> {
    /// Perform the implicit outer save.
    fn open(surface: &'s mut S) -> Self {
        surface.save();
        Self {
            surface,
            depth: 1,
            max_depth: 1,
        }
    }

    fn save(&mut self) {
        self.surface.save();
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn restore(&mut self, instruction: usize) -> Result<()> {
        if self.depth <= 1 {
            return Err(PbcgError::UnbalancedRestore { instruction });
        }
        self.surface.restore();
        self.depth -= 1;
        Ok(())
    }

    /// Restore every open scope; returns how many were closed.
    fn close(&mut self) -> usize {
        let unwound = self.depth;
        for _ in 0..unwound {
            self.surface.restore();
        }
        self.depth = 0;
        unwound
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SaveScope<'_, S> {
    fn drop(&mut self) {
        if self.depth > 0 {
            log::warn!("replay interrupted, unwinding {} scope(s)", self.depth);
            self.close();
        }
    }
}

/// Replays programs against drawing surfaces.
pub struct Executor<'p> {
    program: &'p Program,
}

impl<'p> Executor<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self { program }
    }

    /// Replay every instruction in order.
    ///
    /// The surface must not be used reentrantly while this runs.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<ReplaySummary> {
        log::debug!(
            "replay: {} instructions",
            self.program.instructions().len()
        );

        let mut scope = SaveScope::open(surface);
        let outcome = self.run(&mut scope);
        let max_depth = scope.max_depth;
        let unwound = scope.close();

        match outcome {
            Ok(executed) => {
                log::debug!(
                    "replay done: {} executed, max depth {}, {} unwound",
                    executed,
                    max_depth,
                    unwound
                );
                Ok(ReplaySummary {
                    executed,
                    max_depth,
                    unwound,
                })
            }
            Err(err) => {
                log::debug!("replay failed after unwinding {} scope(s): {}", unwound, err);
                Err(err)
            }
        }
    }

    fn run<S: DrawingSurface + ?Sized>(&self, scope: &mut SaveScope<'_, S>) -> Result<usize> {
        let instructions = self.program.instructions();
        for (position, instruction) in instructions.iter().enumerate() {
            Self::apply(scope, position, instruction)?;
        }
        Ok(instructions.len())
    }

    fn apply<S: DrawingSurface + ?Sized>(
        scope: &mut SaveScope<'_, S>,
        position: usize,
        instruction: &Instruction,
    ) -> Result<()> {
        match instruction {
            Instruction::Save => scope.save(),
            Instruction::Restore => scope.restore(position)?,
            Instruction::Clip { path, fill_rule } => scope.surface.clip(path, *fill_rule),
            Instruction::Fill { path, fill_rule } => scope.surface.fill(path, *fill_rule),
            Instruction::Stroke { path } => scope.surface.stroke(path),
            Instruction::Set(setting) => match setting {
                Setting::FillStyle(paint) => scope.surface.set_fill_style(paint),
                Setting::StrokeStyle(paint) => scope.surface.set_stroke_style(paint),
                Setting::LineWidth(v) => scope.surface.set_line_width(*v),
                Setting::LineGap(v) => scope.surface.set_line_gap(*v),
                Setting::LineDashOffset(v) => scope.surface.set_line_dash_offset(*v),
            },
        }
        Ok(())
    }
}

/// Replay `program` against `surface`.
pub fn execute<S: DrawingSurface + ?Sized>(
    program: &Program,
    surface: &mut S,
) -> Result<ReplaySummary> {
    Executor::new(program).replay(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pbcg::records::{InstructionRecord, PathRecord, PbcgImage};
    use crate::program::{Paint, Path};
    use crate::render::recording::{RecordingSurface, SurfaceCall};
    use crate::types::{FillRule, TableIndex};

    fn program(instructions: Vec<InstructionRecord>) -> Program {
        let image = PbcgImage {
            paths: vec![PathRecord::default()],
            instructions,
            ..Default::default()
        };
        Program::from_image(&image).unwrap()
    }

    fn fill() -> InstructionRecord {
        InstructionRecord::Fill {
            fill_rule: 1,
            path: TableIndex::new(0),
        }
    }

    #[test]
    fn test_empty_program_saves_and_restores_once() {
        let mut surface = RecordingSurface::new();
        let summary = execute(&program(vec![]), &mut surface).unwrap();
        assert_eq!(surface.calls(), &[SurfaceCall::Save, SurfaceCall::Restore]);
        assert_eq!(summary.executed, 0);
        assert_eq!(summary.unwound, 1);
    }

    #[test]
    fn test_balanced_program() {
        let mut surface = RecordingSurface::new();
        let summary = execute(
            &program(vec![
                InstructionRecord::Save,
                fill(),
                InstructionRecord::Restore,
            ]),
            &mut surface,
        )
        .unwrap();
        assert_eq!(surface.depth(), 0);
        assert_eq!(summary.max_depth, 2);
        assert_eq!(summary.unwound, 1);
        assert_eq!(
            surface.calls()[2],
            SurfaceCall::Fill {
                path: Path::default(),
                fill_rule: Some(FillRule::NonZero)
            }
        );
    }

    #[test]
    fn test_early_restore_fails_and_unwinds_once() {
        let mut surface = RecordingSurface::new();
        let err = execute(&program(vec![InstructionRecord::Restore]), &mut surface).unwrap_err();
        assert!(matches!(err, PbcgError::UnbalancedRestore { instruction: 0 }));
        assert_eq!(surface.count(|c| *c == SurfaceCall::Restore), 1);
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.underflows(), 0);
    }

    #[test]
    fn test_unclosed_saves_are_flushed() {
        let mut surface = RecordingSurface::new();
        let summary = execute(
            &program(vec![InstructionRecord::Save, InstructionRecord::Save, fill()]),
            &mut surface,
        )
        .unwrap();
        assert_eq!(summary.unwound, 3);
        assert_eq!(surface.count(|c| *c == SurfaceCall::Restore), 3);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_failure_after_nesting_unwinds_everything() {
        let mut surface = RecordingSurface::new();
        let err = execute(
            &program(vec![
                InstructionRecord::Save,
                InstructionRecord::Restore,
                InstructionRecord::Save,
                InstructionRecord::Save,
                InstructionRecord::Restore,
                InstructionRecord::Restore,
                InstructionRecord::Restore,
                fill(),
            ]),
            &mut surface,
        )
        .unwrap_err();
        assert!(matches!(err, PbcgError::UnbalancedRestore { instruction: 6 }));
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.count(SurfaceCall::is_drawing), 0);
    }

    struct PanickingSurface {
        inner: RecordingSurface,
    }

    impl DrawingSurface for PanickingSurface {
        fn save(&mut self) {
            self.inner.save()
        }
        fn restore(&mut self) {
            self.inner.restore()
        }
        fn clip(&mut self, path: &Path, fill_rule: Option<FillRule>) {
            self.inner.clip(path, fill_rule)
        }
        fn fill(&mut self, _path: &Path, _fill_rule: Option<FillRule>) {
            panic!("fill failed");
        }
        fn stroke(&mut self, path: &Path) {
            self.inner.stroke(path)
        }
        fn set_fill_style(&mut self, paint: &Paint) {
            self.inner.set_fill_style(paint)
        }
        fn set_stroke_style(&mut self, paint: &Paint) {
            self.inner.set_stroke_style(paint)
        }
        fn set_line_width(&mut self, width: f64) {
            self.inner.set_line_width(width)
        }
        fn set_line_gap(&mut self, gap: f64) {
            self.inner.set_line_gap(gap)
        }
        fn set_line_dash_offset(&mut self, offset: f64) {
            self.inner.set_line_dash_offset(offset)
        }
    }

    #[test]
    fn test_panicking_surface_is_unwound() {
        let program = program(vec![InstructionRecord::Save, fill()]);
        let mut surface = PanickingSurface {
            inner: RecordingSurface::new(),
        };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = execute(&program, &mut surface);
        }));
        assert!(result.is_err());
        assert_eq!(surface.inner.depth(), 0);
        assert_eq!(surface.inner.max_depth(), 2);
    }
}

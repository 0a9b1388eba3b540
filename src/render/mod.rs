//! Replaying programs against drawing surfaces.
//!
//! The surface itself is a collaborator supplied by the host through the
//! [`DrawingSurface`] trait. [`RecordingSurface`] is a ready-made
//! implementation that records calls, used by the tests and `pbcg_dump`.

pub mod executor;
pub mod recording;
pub mod surface;

pub use executor::{execute, Executor, ReplaySummary};
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::DrawingSurface;

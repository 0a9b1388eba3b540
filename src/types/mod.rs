//! Value types shared by the decoder and the program model

pub mod color;
pub mod handle;
pub mod selectors;

pub use color::Color;
pub use handle::TableIndex;
pub use selectors::{FillRule, SetProperty};

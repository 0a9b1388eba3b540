//! Magic bytes, tag codes and field widths of the PBCG format.

/// File header: ASCII `PBCG` followed by the big-endian version `0x0001`.
pub const MAGIC: [u8; 6] = [0x50, 0x42, 0x43, 0x47, 0x00, 0x01];

/// Number of `u16` table counts following the magic.
pub const COUNT_FIELDS: usize = 6;

/// Size of the fixed header (magic + counts).
pub const HEADER_SIZE: usize = MAGIC.len() + COUNT_FIELDS * 2;

/// Divisor mapping a `u16` onto [0, 1].
pub const UNSIGNED_LIMIT: f64 = 65535.0;

/// Divisor mapping an `i16` onto roughly [-1, 1].
pub const SIGNED_LIMIT: f64 = 32767.0;

/// Path primitive tags.
pub mod path_tags {
    /// Terminates the step stream of one path.
    pub const END: u8 = 0;
    pub const ARC: u8 = 1;
    pub const ARC_TO: u8 = 2;
    pub const BEZIER_CURVE_TO: u8 = 3;
    pub const ELLIPSE: u8 = 4;
    pub const LINE_TO: u8 = 5;
    pub const MOVE_TO: u8 = 6;
    pub const QUADRATIC_CURVE_TO: u8 = 7;
    pub const RECT: u8 = 8;
}

/// Instruction verb tags. Tag 0 is reserved and invalid.
pub mod verbs {
    pub const CLIP: u8 = 1;
    pub const FILL: u8 = 2;
    pub const RESTORE: u8 = 3;
    pub const SAVE: u8 = 4;
    pub const SET: u8 = 5;
    pub const STROKE: u8 = 6;
}

/// Fixed record sizes.
pub mod sizes {
    pub const OPAQUE_COLOR: usize = 3;
    pub const ALPHA_COLOR: usize = 4;
    /// `u16` offset + `u16` palette index.
    pub const COLOR_STOP: usize = 4;
}

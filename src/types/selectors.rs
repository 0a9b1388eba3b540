//! Byte-coded selectors carried by instructions

use std::fmt;

/// Interior rule for fill and clip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FillRule {
    NonZero = 1,
    EvenOdd = 2,
}

impl FillRule {
    /// Resolve a fill-rule byte.
    ///
    /// `Some(None)` is the explicit "none" code 0, leaving the choice to the
    /// surface; `None` means the code is out of range.
    pub fn from_code(code: u8) -> Option<Option<Self>> {
        match code {
            0 => Some(None),
            1 => Some(Some(Self::NonZero)),
            2 => Some(Some(Self::EvenOdd)),
            _ => None,
        }
    }

    /// Canvas keyword for the rule
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property targeted by a SET instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SetProperty {
    Fill = 1,
    LineDashOffset = 2,
    LineGap = 3,
    LineJoin = 4,
    LineWidth = 5,
    Stroke = 6,
}

impl SetProperty {
    /// Create from a raw byte code; 0 and codes above 6 are invalid.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Fill),
            2 => Some(Self::LineDashOffset),
            3 => Some(Self::LineGap),
            4 => Some(Self::LineJoin),
            5 => Some(Self::LineWidth),
            6 => Some(Self::Stroke),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fill => "FILL",
            Self::LineDashOffset => "LINE_DASH_OFFSET",
            Self::LineGap => "LINE_GAP",
            Self::LineJoin => "LINE_JOIN",
            Self::LineWidth => "LINE_WIDTH",
            Self::Stroke => "STROKE",
        }
    }
}

impl fmt::Display for SetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

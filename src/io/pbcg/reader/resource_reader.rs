//! Palette and path table reader.
//!
//! Palette entries are appended to a single list in file order: opaque
//! colors, alpha colors, linear gradients, radial gradients. Stop indices are
//! stored as read; whether they point backwards is checked when the program
//! is built.

use crate::error::{PbcgError, Result};
use crate::io::pbcg::constants::{path_tags, sizes};
use crate::io::pbcg::records::{
    ColorStopRecord, LinearGradientRecord, PaletteRecord, PathPrimitiveRecord, PathRecord,
    PbcgHeader, RadialGradientRecord,
};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Color, TableIndex};

use super::stream_reader::PbcgStreamReader;

/// Reader for the palette and path tables.
pub struct ResourceReader<'r, 'a> {
    reader: &'r mut PbcgStreamReader<'a>,
    notifications: &'r mut NotificationCollection,
}

impl<'r, 'a> ResourceReader<'r, 'a> {
    pub fn new(
        reader: &'r mut PbcgStreamReader<'a>,
        notifications: &'r mut NotificationCollection,
    ) -> Self {
        Self {
            reader,
            notifications,
        }
    }

    /// Read the whole palette described by `header`.
    pub fn read_palette(&mut self, header: &PbcgHeader) -> Result<Vec<PaletteRecord>> {
        let mut palette = Vec::with_capacity(header.palette_len());

        for _ in 0..header.opaque_colors {
            palette.push(PaletteRecord::Color(self.read_opaque_color()?));
        }
        for _ in 0..header.alpha_colors {
            palette.push(PaletteRecord::Color(self.read_alpha_color()?));
        }
        for _ in 0..header.linear_gradients {
            palette.push(PaletteRecord::LinearGradient(self.read_linear_gradient()?));
        }
        for _ in 0..header.radial_gradients {
            palette.push(PaletteRecord::RadialGradient(self.read_radial_gradient()?));
        }

        log::debug!(
            "palette: {} entries, ends at offset {}",
            palette.len(),
            self.reader.position()
        );
        Ok(palette)
    }

    /// Read `count` paths.
    pub fn read_paths(&mut self, count: u16) -> Result<Vec<PathRecord>> {
        let mut paths = Vec::with_capacity(count as usize);
        for _ in 0..count {
            paths.push(self.read_path()?);
        }
        log::debug!(
            "paths: {} entries, ends at offset {}",
            paths.len(),
            self.reader.position()
        );
        Ok(paths)
    }

    pub fn read_opaque_color(&mut self) -> Result<Color> {
        let rgb = self.reader.read_bytes(sizes::OPAQUE_COLOR)?;
        Ok(Color::from_rgb(rgb[0], rgb[1], rgb[2]))
    }

    pub fn read_alpha_color(&mut self) -> Result<Color> {
        let rgba = self.reader.read_bytes(sizes::ALPHA_COLOR)?;
        Ok(Color::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3]))
    }

    pub fn read_linear_gradient(&mut self) -> Result<LinearGradientRecord> {
        let start = self.reader.position();
        let x0 = self.reader.read_i16()?;
        let y0 = self.reader.read_i16()?;
        let x1 = self.reader.read_i16()?;
        let y1 = self.reader.read_i16()?;
        let stops = self.read_color_stops(start)?;

        Ok(LinearGradientRecord {
            x0,
            y0,
            x1,
            y1,
            stops,
        })
    }

    pub fn read_radial_gradient(&mut self) -> Result<RadialGradientRecord> {
        let start = self.reader.position();
        let x0 = self.reader.read_u16()?;
        let y0 = self.reader.read_u16()?;
        let r0 = self.reader.read_u16()?;
        let x1 = self.reader.read_u16()?;
        let y1 = self.reader.read_u16()?;
        let r1 = self.reader.read_u16()?;
        let stops = self.read_color_stops(start)?;

        Ok(RadialGradientRecord {
            x0,
            y0,
            r0,
            x1,
            y1,
            r1,
            stops,
        })
    }

    /// Stop count followed by (offset, palette index) pairs.
    fn read_color_stops(&mut self, gradient_offset: usize) -> Result<Vec<ColorStopRecord>> {
        let count = self.reader.read_u16()?;
        if count == 0 {
            self.notifications.notify_at(
                NotificationType::Warning,
                gradient_offset,
                "gradient has no color stops",
            );
        }

        // A bogus count must not drive the allocation.
        let capacity = (count as usize).min(self.reader.remaining() / sizes::COLOR_STOP);
        let mut stops = Vec::with_capacity(capacity);
        for _ in 0..count {
            let offset = self.reader.read_u16()?;
            let paint = TableIndex::new(self.reader.read_u16()?);
            stops.push(ColorStopRecord { offset, paint });
        }
        Ok(stops)
    }

    /// Read path steps up to and including the END tag.
    pub fn read_path(&mut self) -> Result<PathRecord> {
        let start = self.reader.position();
        let mut steps = Vec::new();

        loop {
            let tag_offset = self.reader.position();
            let tag = self.reader.read_u8()?;
            if tag == path_tags::END {
                break;
            }
            let step = self.read_primitive(tag, tag_offset)?;
            log::trace!("path step at {}: {:?}", tag_offset, step);
            steps.push(step);
        }

        if steps.is_empty() {
            self.notifications
                .notify_at(NotificationType::Warning, start, "path has no steps");
        }
        Ok(PathRecord { steps })
    }

    fn read_primitive(&mut self, tag: u8, tag_offset: usize) -> Result<PathPrimitiveRecord> {
        let r = &mut *self.reader;
        let step = match tag {
            path_tags::ARC => PathPrimitiveRecord::Arc {
                center_x: r.read_i16()?,
                center_y: r.read_i16()?,
                radius: r.read_u16()?,
                start_angle: r.read_u16()?,
                end_angle: r.read_u16()?,
            },
            path_tags::ARC_TO => PathPrimitiveRecord::ArcTo {
                x1: r.read_i16()?,
                y1: r.read_i16()?,
                x2: r.read_i16()?,
                y2: r.read_i16()?,
                radius: r.read_u16()?,
            },
            path_tags::BEZIER_CURVE_TO => PathPrimitiveRecord::BezierCurveTo {
                cp1x: r.read_i16()?,
                cp1y: r.read_i16()?,
                cp2x: r.read_i16()?,
                cp2y: r.read_i16()?,
                x: r.read_i16()?,
                y: r.read_i16()?,
            },
            path_tags::ELLIPSE => PathPrimitiveRecord::Ellipse {
                center_x: r.read_i16()?,
                center_y: r.read_i16()?,
                radius_x: r.read_u16()?,
                radius_y: r.read_u16()?,
                rotation: r.read_u16()?,
                start_angle: r.read_u16()?,
                end_angle: r.read_u16()?,
            },
            path_tags::LINE_TO => PathPrimitiveRecord::LineTo {
                x: r.read_i16()?,
                y: r.read_i16()?,
            },
            path_tags::MOVE_TO => PathPrimitiveRecord::MoveTo {
                x: r.read_i16()?,
                y: r.read_i16()?,
            },
            path_tags::QUADRATIC_CURVE_TO => PathPrimitiveRecord::QuadraticCurveTo {
                cpx: r.read_i16()?,
                cpy: r.read_i16()?,
                x: r.read_i16()?,
                y: r.read_i16()?,
            },
            path_tags::RECT => PathPrimitiveRecord::Rect {
                center_x: r.read_i16()?,
                center_y: r.read_i16()?,
                width: r.read_u16()?,
                height: r.read_u16()?,
            },
            _ => {
                return Err(PbcgError::UnknownPathPrimitive {
                    tag,
                    offset: tag_offset,
                })
            }
        };
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_path(bytes: &[u8]) -> (Result<PathRecord>, usize, NotificationCollection) {
        let mut reader = PbcgStreamReader::new(bytes);
        let mut notifications = NotificationCollection::new();
        let result = ResourceReader::new(&mut reader, &mut notifications).read_path();
        (result, reader.position(), notifications)
    }

    #[test]
    fn test_arc_path_consumes_twelve_bytes() {
        let bytes = [
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let (path, position, _) = read_path(&bytes);
        let path = path.unwrap();
        assert_eq!(
            path.steps,
            vec![PathPrimitiveRecord::Arc {
                center_x: 0,
                center_y: 0,
                radius: 10,
                start_angle: 0,
                end_angle: 0,
            }]
        );
        assert_eq!(position, 12);
    }

    #[test]
    fn test_unknown_primitive() {
        let (path, _, _) = read_path(&[0x06, 0x00, 0x01, 0x00, 0x02, 0x09]);
        assert!(matches!(
            path,
            Err(PbcgError::UnknownPathPrimitive { tag: 9, offset: 5 })
        ));
    }

    #[test]
    fn test_truncated_primitive() {
        let (path, _, _) = read_path(&[0x05, 0x00, 0x01, 0x00]);
        assert!(matches!(path, Err(PbcgError::TruncatedInput { .. })));
    }

    #[test]
    fn test_missing_end_is_truncation() {
        let (path, _, _) = read_path(&[0x06, 0x00, 0x01, 0x00, 0x02]);
        assert!(matches!(path, Err(PbcgError::TruncatedInput { offset: 5, .. })));
    }

    #[test]
    fn test_empty_path_is_noted() {
        let (path, position, notifications) = read_path(&[0x00]);
        assert!(path.unwrap().steps.is_empty());
        assert_eq!(position, 1);
        assert!(notifications.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_rect_operands() {
        let bytes = [0x08, 0xFF, 0xFF, 0x00, 0x01, 0x80, 0x00, 0x40, 0x00, 0x00];
        let (path, position, _) = read_path(&bytes);
        assert_eq!(
            path.unwrap().steps,
            vec![PathPrimitiveRecord::Rect {
                center_x: -1,
                center_y: 1,
                width: 0x8000,
                height: 0x4000,
            }]
        );
        assert_eq!(position, 10);
    }

    #[test]
    fn test_arc_to_radius_high_bit() {
        let bytes = [
            0x02, 0x00, 0x01, 0xFF, 0xFF, 0x00, 0x02, 0x00, 0x03, 0x80, 0x00, 0x00,
        ];
        let (path, position, _) = read_path(&bytes);
        assert_eq!(
            path.unwrap().steps,
            vec![PathPrimitiveRecord::ArcTo {
                x1: 1,
                y1: -1,
                x2: 2,
                y2: 3,
                radius: 0x8000,
            }]
        );
        assert_eq!(position, 12);
    }

    #[test]
    fn test_radial_gradient_fields_are_unsigned() {
        let bytes = [
            0xFF, 0xFF, 0x00, 0x01, 0x00, 0x02, 0x80, 0x00, 0x00, 0x04, 0x00, 0x05, // fields
            0x00, 0x01, // one stop
            0xFF, 0xFF, 0x00, 0x00,
        ];
        let mut reader = PbcgStreamReader::new(&bytes);
        let mut notifications = NotificationCollection::new();
        let gradient = ResourceReader::new(&mut reader, &mut notifications)
            .read_radial_gradient()
            .unwrap();
        assert_eq!(gradient.x0, 65535);
        assert_eq!(gradient.x1, 0x8000);
        assert_eq!(gradient.stops.len(), 1);
        assert_eq!(gradient.stops[0].offset, 65535);
        assert_eq!(gradient.stops[0].paint.value(), 0);
        assert_eq!(reader.position(), bytes.len());
    }

    #[test]
    fn test_palette_order() {
        let header = PbcgHeader {
            opaque_colors: 1,
            alpha_colors: 1,
            linear_gradients: 1,
            ..Default::default()
        };
        let bytes = [
            0x10, 0x20, 0x30, // opaque
            0x01, 0x02, 0x03, 0x04, // alpha
            0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // linear, no stops
        ];
        let mut reader = PbcgStreamReader::new(&bytes);
        let mut notifications = NotificationCollection::new();
        let palette = ResourceReader::new(&mut reader, &mut notifications)
            .read_palette(&header)
            .unwrap();

        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0], PaletteRecord::Color(Color::from_rgb(0x10, 0x20, 0x30)));
        assert_eq!(palette[1], PaletteRecord::Color(Color::from_rgba(1, 2, 3, 4)));
        match &palette[2] {
            PaletteRecord::LinearGradient(g) => {
                assert_eq!(g.x0, -1);
                assert_eq!(g.x1, 1);
                assert!(g.stops.is_empty());
            }
            other => panic!("expected linear gradient, got {:?}", other),
        }
        assert_eq!(notifications.len(), 1);
    }
}

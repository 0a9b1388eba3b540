//! Program builder.
//!
//! Turns a decoded [`PbcgImage`] into a [`Program`]: palette entries and paths
//! are normalized into floating-point geometry, and every index carried by
//! an instruction or a gradient stop is resolved to a shared reference.
//!
//! The palette is built in file order. A gradient at position `n` can only
//! see entries `0..n`, so a stop pointing at itself or later fails with
//! [`PbcgError::DanglingPaletteReference`].
//!
//! Feature flags are recorded per palette entry as it is built: an entry's
//! flags are its own plus the stored flags of its stops. Gradients may share
//! stops, so nothing ever walks a paint graph.

use std::sync::Arc;

use crate::error::{PbcgError, Result};
use crate::io::pbcg::constants::SIGNED_LIMIT;
use crate::io::pbcg::reader::{normalize_angle, normalize_signed, normalize_unsigned};
use crate::io::pbcg::records::{
    ColorStopRecord, InstructionRecord, PaletteRecord, PathPrimitiveRecord, PathRecord, PbcgImage,
};
use crate::notification::{Notification, NotificationCollection, NotificationType};
use crate::types::{FillRule, SetProperty, TableIndex};

use super::features::ProgramFeatures;
use super::instruction::{Instruction, Setting};
use super::paint::{ColorStop, LinearGradient, Paint, RadialGradient};
use super::path::{Path, PathPrimitive};
use super::Program;

/// Builds a [`Program`] from decoded records.
pub struct ProgramBuilder<'a> {
    image: &'a PbcgImage,
    palette: Vec<Arc<Paint>>,
    paths: Vec<Arc<Path>>,
    /// Flags of `palette[i]`, stops included.
    paint_features: Vec<ProgramFeatures>,
    features: ProgramFeatures,
    notifications: NotificationCollection,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(image: &'a PbcgImage) -> Self {
        Self {
            image,
            palette: Vec::with_capacity(image.palette.len()),
            paths: Vec::with_capacity(image.paths.len()),
            paint_features: Vec::with_capacity(image.palette.len()),
            features: ProgramFeatures::empty(),
            notifications: NotificationCollection::new(),
        }
    }

    /// Resolve everything. Fails on the first dangling or unsupported operand.
    pub fn build(mut self) -> Result<Program> {
        let image = self.image;

        for record in &image.palette {
            self.push_paint(record)?;
        }

        self.paths = image
            .paths
            .iter()
            .map(|record| Arc::new(build_path(record)))
            .collect();

        let mut instructions = Vec::with_capacity(image.instructions.len());
        for (position, record) in image.instructions.iter().enumerate() {
            let instruction = self.build_instruction(position, record)?;
            self.features |= ProgramFeatures::of_instruction(&instruction);
            instructions.push(instruction);
        }

        let features = self.features;
        log::debug!(
            "program: {} paints, {} paths, {} instructions, features {:?}",
            self.palette.len(),
            self.paths.len(),
            instructions.len(),
            features
        );

        let mut notifications = image.notifications.clone();
        notifications.extend(self.notifications);

        Ok(Program {
            palette: self.palette,
            paths: self.paths,
            instructions,
            features,
            notifications,
        })
    }

    /// Build the next palette entry and store its flags.
    fn push_paint(&mut self, record: &PaletteRecord) -> Result<()> {
        let paint = self.build_paint(record)?;
        let features = record
            .stops()
            .iter()
            .fold(ProgramFeatures::of_paint(&paint), |acc, stop| {
                acc | self.paint_features(stop.paint)
            });
        self.palette.push(Arc::new(paint));
        self.paint_features.push(features);
        Ok(())
    }

    fn build_paint(&self, record: &PaletteRecord) -> Result<Paint> {
        let paint = match record {
            PaletteRecord::Color(color) => Paint::Solid(*color),
            PaletteRecord::LinearGradient(g) => Paint::LinearGradient(LinearGradient {
                x0: normalize_signed(g.x0),
                y0: normalize_signed(g.y0),
                x1: normalize_signed(g.x1),
                y1: normalize_signed(g.y1),
                stops: self.build_stops(&g.stops)?,
            }),
            PaletteRecord::RadialGradient(g) => Paint::RadialGradient(RadialGradient {
                x0: radial_coordinate(g.x0),
                y0: radial_coordinate(g.y0),
                r0: normalize_unsigned(g.r0),
                x1: radial_coordinate(g.x1),
                y1: radial_coordinate(g.y1),
                r1: normalize_unsigned(g.r1),
                stops: self.build_stops(&g.stops)?,
            }),
        };
        Ok(paint)
    }

    /// Stops may only reference entries already built.
    fn build_stops(&self, stops: &[ColorStopRecord]) -> Result<Vec<ColorStop>> {
        stops
            .iter()
            .map(|stop| -> Result<ColorStop> {
                Ok(ColorStop {
                    offset: normalize_unsigned(stop.offset),
                    paint: self.resolve_paint(stop.paint)?,
                })
            })
            .collect()
    }

    fn resolve_paint(&self, index: TableIndex<PaletteRecord>) -> Result<Arc<Paint>> {
        if !index.is_within(self.palette.len()) {
            return Err(PbcgError::DanglingPaletteReference {
                index: index.value(),
                len: self.palette.len(),
            });
        }
        Ok(Arc::clone(&self.palette[index.as_usize()]))
    }

    /// Resolve a SET FILL / SET STROKE operand and record the paint's flags.
    fn resolve_style(&mut self, value: u16) -> Result<Arc<Paint>> {
        let index = TableIndex::new(value);
        let paint = self.resolve_paint(index)?;
        self.features |= self.paint_features(index);
        Ok(paint)
    }

    fn paint_features(&self, index: TableIndex<PaletteRecord>) -> ProgramFeatures {
        self.paint_features
            .get(index.as_usize())
            .copied()
            .unwrap_or_default()
    }

    fn resolve_path(&self, index: TableIndex<PathRecord>) -> Result<Arc<Path>> {
        if !index.is_within(self.paths.len()) {
            return Err(PbcgError::DanglingPathReference {
                index: index.value(),
                len: self.paths.len(),
            });
        }
        Ok(Arc::clone(&self.paths[index.as_usize()]))
    }

    fn resolve_fill_rule(&mut self, position: usize, code: u8) -> Result<Option<FillRule>> {
        let rule = FillRule::from_code(code).ok_or(PbcgError::UnknownOpcode {
            kind: "fill rule",
            code,
            position,
        })?;
        if rule.is_none() {
            self.notifications.push(Notification::new(
                NotificationType::NotSupported,
                format!("instruction {} leaves the fill rule to the surface", position),
            ));
        }
        Ok(rule)
    }

    fn build_instruction(
        &mut self,
        position: usize,
        record: &InstructionRecord,
    ) -> Result<Instruction> {
        let instruction = match *record {
            InstructionRecord::Clip { fill_rule, path } => Instruction::Clip {
                fill_rule: self.resolve_fill_rule(position, fill_rule)?,
                path: self.resolve_path(path)?,
            },
            InstructionRecord::Fill { fill_rule, path } => Instruction::Fill {
                fill_rule: self.resolve_fill_rule(position, fill_rule)?,
                path: self.resolve_path(path)?,
            },
            InstructionRecord::Restore => Instruction::Restore,
            InstructionRecord::Save => Instruction::Save,
            InstructionRecord::Set { property, value } => {
                Instruction::Set(self.build_setting(property, value)?)
            }
            InstructionRecord::Stroke { path } => Instruction::Stroke {
                path: self.resolve_path(path)?,
            },
        };
        Ok(instruction)
    }

    fn build_setting(&mut self, property: SetProperty, value: u16) -> Result<Setting> {
        let setting = match property {
            SetProperty::Fill => Setting::FillStyle(self.resolve_style(value)?),
            SetProperty::Stroke => Setting::StrokeStyle(self.resolve_style(value)?),
            SetProperty::LineDashOffset => Setting::LineDashOffset(normalize_unsigned(value)),
            SetProperty::LineGap => Setting::LineGap(normalize_unsigned(value)),
            SetProperty::LineWidth => Setting::LineWidth(normalize_unsigned(value)),
            SetProperty::LineJoin => return Err(PbcgError::UnsupportedProperty(property)),
        };
        Ok(setting)
    }
}

/// Radial centers travel unsigned but share the signed scale of linear
/// gradient endpoints, so they cover [0, 2].
fn radial_coordinate(value: u16) -> f64 {
    value as f64 / SIGNED_LIMIT
}

fn build_path(record: &PathRecord) -> Path {
    Path::new(record.steps.iter().map(build_primitive).collect())
}

fn build_primitive(step: &PathPrimitiveRecord) -> PathPrimitive {
    match *step {
        PathPrimitiveRecord::Arc {
            center_x,
            center_y,
            radius,
            start_angle,
            end_angle,
        } => PathPrimitive::Arc {
            center_x: normalize_signed(center_x),
            center_y: normalize_signed(center_y),
            radius: normalize_unsigned(radius),
            start_angle: normalize_angle(start_angle),
            end_angle: normalize_angle(end_angle),
        },
        PathPrimitiveRecord::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        } => PathPrimitive::ArcTo {
            x1: normalize_signed(x1),
            y1: normalize_signed(y1),
            x2: normalize_signed(x2),
            y2: normalize_signed(y2),
            radius: normalize_unsigned(radius),
        },
        PathPrimitiveRecord::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        } => PathPrimitive::BezierCurveTo {
            cp1x: normalize_signed(cp1x),
            cp1y: normalize_signed(cp1y),
            cp2x: normalize_signed(cp2x),
            cp2y: normalize_signed(cp2y),
            x: normalize_signed(x),
            y: normalize_signed(y),
        },
        PathPrimitiveRecord::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        } => PathPrimitive::Ellipse {
            center_x: normalize_signed(center_x),
            center_y: normalize_signed(center_y),
            radius_x: normalize_unsigned(radius_x),
            radius_y: normalize_unsigned(radius_y),
            rotation: normalize_angle(rotation),
            start_angle: normalize_angle(start_angle),
            end_angle: normalize_angle(end_angle),
        },
        PathPrimitiveRecord::LineTo { x, y } => PathPrimitive::LineTo {
            x: normalize_signed(x),
            y: normalize_signed(y),
        },
        PathPrimitiveRecord::MoveTo { x, y } => PathPrimitive::MoveTo {
            x: normalize_signed(x),
            y: normalize_signed(y),
        },
        PathPrimitiveRecord::QuadraticCurveTo { cpx, cpy, x, y } => {
            PathPrimitive::QuadraticCurveTo {
                cpx: normalize_signed(cpx),
                cpy: normalize_signed(cpy),
                x: normalize_signed(x),
                y: normalize_signed(y),
            }
        }
        PathPrimitiveRecord::Rect {
            center_x,
            center_y,
            width,
            height,
        } => {
            let width = normalize_unsigned(width);
            let height = normalize_unsigned(height);
            PathPrimitive::Rect {
                x: normalize_signed(center_x) - width / 2.0,
                y: normalize_signed(center_y) - height / 2.0,
                width,
                height,
            }
        }
    }
}

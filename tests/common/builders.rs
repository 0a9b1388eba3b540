//! Blob builders for crafting PBCG files in tests.
//!
//! [`BlobBuilder`] writes the sections in file order and patches the six
//! header counts as records are appended, so tests only describe content.

#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};

pub const MAGIC: [u8; 6] = [0x50, 0x42, 0x43, 0x47, 0x00, 0x01];

#[derive(Default)]
pub struct BlobBuilder {
    opaque: Vec<u8>,
    alpha: Vec<u8>,
    linear: Vec<u8>,
    radial: Vec<u8>,
    paths: Vec<u8>,
    instructions: Vec<u8>,
    counts: [u16; 6],
}

impl BlobBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opaque_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.opaque.extend_from_slice(&[r, g, b]);
        self.counts[0] += 1;
        self
    }

    pub fn alpha_color(mut self, r: u8, g: u8, b: u8, a: u8) -> Self {
        self.alpha.extend_from_slice(&[r, g, b, a]);
        self.counts[1] += 1;
        self
    }

    /// `stops` are (offset, palette index) pairs.
    pub fn linear_gradient(mut self, points: [i16; 4], stops: &[(u16, u16)]) -> Self {
        for p in points {
            self.linear.write_i16::<BigEndian>(p).unwrap();
        }
        write_stops(&mut self.linear, stops);
        self.counts[2] += 1;
        self
    }

    /// `fields` are x0, y0, r0, x1, y1, r1.
    pub fn radial_gradient(mut self, fields: [u16; 6], stops: &[(u16, u16)]) -> Self {
        for f in fields {
            self.radial.write_u16::<BigEndian>(f).unwrap();
        }
        write_stops(&mut self.radial, stops);
        self.counts[3] += 1;
        self
    }

    /// Append a path; the END tag is added automatically.
    pub fn path(mut self, path: PathBytes) -> Self {
        self.paths.extend_from_slice(&path.bytes);
        self.paths.push(0);
        self.counts[4] += 1;
        self
    }

    pub fn clip(mut self, fill_rule: u8, path: u16) -> Self {
        self.instructions.extend_from_slice(&[1, fill_rule]);
        self.instructions.write_u16::<BigEndian>(path).unwrap();
        self.counts[5] += 1;
        self
    }

    pub fn fill(mut self, fill_rule: u8, path: u16) -> Self {
        self.instructions.extend_from_slice(&[2, fill_rule]);
        self.instructions.write_u16::<BigEndian>(path).unwrap();
        self.counts[5] += 1;
        self
    }

    pub fn restore(mut self) -> Self {
        self.instructions.push(3);
        self.counts[5] += 1;
        self
    }

    pub fn save(mut self) -> Self {
        self.instructions.push(4);
        self.counts[5] += 1;
        self
    }

    pub fn set(mut self, property: u8, value: u16) -> Self {
        self.instructions.extend_from_slice(&[5, property]);
        self.instructions.write_u16::<BigEndian>(value).unwrap();
        self.counts[5] += 1;
        self
    }

    pub fn stroke(mut self, path: u16) -> Self {
        self.instructions.push(6);
        self.instructions.write_u16::<BigEndian>(path).unwrap();
        self.counts[5] += 1;
        self
    }

    /// Append raw instruction bytes counted as one instruction.
    pub fn raw_instruction(mut self, bytes: &[u8]) -> Self {
        self.instructions.extend_from_slice(bytes);
        self.counts[5] += 1;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut blob = MAGIC.to_vec();
        for count in self.counts {
            blob.write_u16::<BigEndian>(count).unwrap();
        }
        blob.extend_from_slice(&self.opaque);
        blob.extend_from_slice(&self.alpha);
        blob.extend_from_slice(&self.linear);
        blob.extend_from_slice(&self.radial);
        blob.extend_from_slice(&self.paths);
        blob.extend_from_slice(&self.instructions);
        blob
    }
}

fn write_stops(out: &mut Vec<u8>, stops: &[(u16, u16)]) {
    out.write_u16::<BigEndian>(stops.len() as u16).unwrap();
    for &(offset, index) in stops {
        out.write_u16::<BigEndian>(offset).unwrap();
        out.write_u16::<BigEndian>(index).unwrap();
    }
}

/// Path step encoder.
#[derive(Default)]
pub struct PathBytes {
    bytes: Vec<u8>,
}

impl PathBytes {
    pub fn new() -> Self {
        Self::default()
    }

    fn i16(mut self, v: i16) -> Self {
        self.bytes.write_i16::<BigEndian>(v).unwrap();
        self
    }

    fn u16(mut self, v: u16) -> Self {
        self.bytes.write_u16::<BigEndian>(v).unwrap();
        self
    }

    fn tag(mut self, tag: u8) -> Self {
        self.bytes.push(tag);
        self
    }

    pub fn arc(self, cx: i16, cy: i16, radius: u16, start: u16, end: u16) -> Self {
        self.tag(1).i16(cx).i16(cy).u16(radius).u16(start).u16(end)
    }

    pub fn arc_to(self, x1: i16, y1: i16, x2: i16, y2: i16, radius: u16) -> Self {
        self.tag(2).i16(x1).i16(y1).i16(x2).i16(y2).u16(radius)
    }

    pub fn bezier_curve_to(self, c1: (i16, i16), c2: (i16, i16), to: (i16, i16)) -> Self {
        self.tag(3)
            .i16(c1.0)
            .i16(c1.1)
            .i16(c2.0)
            .i16(c2.1)
            .i16(to.0)
            .i16(to.1)
    }

    pub fn ellipse(self, cx: i16, cy: i16, rx: u16, ry: u16, rotation: u16, start: u16, end: u16) -> Self {
        self.tag(4)
            .i16(cx)
            .i16(cy)
            .u16(rx)
            .u16(ry)
            .u16(rotation)
            .u16(start)
            .u16(end)
    }

    pub fn line_to(self, x: i16, y: i16) -> Self {
        self.tag(5).i16(x).i16(y)
    }

    pub fn move_to(self, x: i16, y: i16) -> Self {
        self.tag(6).i16(x).i16(y)
    }

    pub fn quadratic_curve_to(self, cx: i16, cy: i16, x: i16, y: i16) -> Self {
        self.tag(7).i16(cx).i16(cy).i16(x).i16(y)
    }

    pub fn rect(self, cx: i16, cy: i16, width: u16, height: u16) -> Self {
        self.tag(8).i16(cx).i16(cy).u16(width).u16(height)
    }
}

/// The five-pointed star used across tests: one yellow fill, one stroke.
pub fn yellow_star() -> Vec<u8> {
    let star = PathBytes::new()
        .move_to(0, -30000)
        .line_to(7000, -9000)
        .line_to(28500, -9300)
        .line_to(11300, 3700)
        .line_to(17600, 24300)
        .line_to(0, 11500)
        .line_to(-17600, 24300)
        .line_to(-11300, 3700)
        .line_to(-28500, -9300)
        .line_to(-7000, -9000)
        .line_to(0, -30000);

    BlobBuilder::new()
        .opaque_color(0xFF, 0xD7, 0x00)
        .opaque_color(0x80, 0x60, 0x00)
        .path(star)
        .save()
        .set(1, 0)
        .fill(1, 0)
        .set(6, 1)
        .set(5, 1000)
        .stroke(0)
        .restore()
        .build()
}

/// Concentric rings with a radial gradient backdrop.
pub fn archery_target() -> Vec<u8> {
    let mut builder = BlobBuilder::new()
        .opaque_color(0xFF, 0xFF, 0xFF)
        .opaque_color(0x00, 0x00, 0x00)
        .opaque_color(0x1E, 0x90, 0xFF)
        .opaque_color(0xDC, 0x14, 0x3C)
        .opaque_color(0xFF, 0xD7, 0x00)
        .alpha_color(0x00, 0x00, 0x00, 0x40)
        .radial_gradient(
            [32767, 32767, 0, 32767, 32767, 65535],
            &[(0, 5), (65535, 0)],
        )
        .path(PathBytes::new().rect(0, 0, 65535, 65535));

    let radii = [30000u16, 24000, 18000, 12000, 6000];
    for radius in radii {
        builder = builder.path(PathBytes::new().arc(0, 0, radius, 0, 65535));
    }

    builder = builder.set(1, 6).fill(0, 0).set(3, 500).set(2, 250).set(5, 300);
    for (ring, color) in [0u16, 1, 2, 3, 4].into_iter().enumerate() {
        builder = builder
            .set(1, color)
            .fill(1, ring as u16 + 1)
            .set(6, 1)
            .stroke(ring as u16 + 1);
    }
    builder.build()
}

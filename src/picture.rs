use std::fs::File;
use std::io::{BufWriter, Write};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::path::{Path, PathBuf};

use bytemuck::cast_slice;
use bytemuck_derive::{Pod, Zeroable};
use log::debug;

use crate::error::Result;

/// Fill for freshly created canvases. Differs from the black that misses shade to.
pub const CANVAS_BACKGROUND: Rgb8 = Rgb8::new_hex(0x0000FF);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Sum for Color {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Color::BLACK, Add::add)
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Color> for Rgb8 {
    fn from(value: Color) -> Self {
        Rgb8::new(quantize(value.r), quantize(value.g), quantize(value.b))
    }
}

// NaN saturates to 0 through the float-to-int cast.
fn quantize(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }

    pub const fn new_hex(rgb: u32) -> Rgb8 {
        Rgb8 {
            r: ((rgb & 0xff0000) >> 16) as u8,
            g: ((rgb & 0x00ff00) >> 8) as u8,
            b: (rgb & 0x0000ff) as u8,
        }
    }
}

/// Row-major RGB raster. Buffer row 0 is the bottom row of the picture, so
/// `plot(x, 0, ..)` lands in the last buffer row.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: Vec<Rgb8>,
    size: (u32, u32),
    name: String,
}

impl Canvas {
    pub fn new(width: u32, height: u32, name: impl Into<String>) -> Self {
        Canvas {
            pixels: vec![CANVAS_BACKGROUND; width as usize * height as usize],
            size: (width, height),
            name: name.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.size.0
    }

    pub fn height(&self) -> u32 {
        self.size.1
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn to_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width() && y < self.height(), "pixel ({x}, {y}) out of bounds");
        let row = self.height() - 1 - y;
        row as usize * self.width() as usize + x as usize
    }

    pub fn plot(&mut self, x: u32, y: u32, color: Color) {
        let index = self.to_index(x, y);
        self.pixels[index] = color.into();
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.to_index(x, y)]
    }

    /// Raw R,G,B bytes in buffer order.
    pub fn as_bytes(&self) -> &[u8] {
        cast_slice(&self.pixels)
    }

    pub fn write_ppm<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width(), self.height())?;
        writer.write_all(self.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_ppm(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3 + 32);
        buffer.extend_from_slice(format!("P6\n{} {}\n255\n", self.width(), self.height()).as_bytes());
        buffer.extend_from_slice(self.as_bytes());
        buffer
    }

    /// Writes `<name>.ppm` into the working directory, replacing any existing file.
    pub fn save(&self) -> Result<PathBuf> {
        self.save_in(".")
    }

    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(format!("{}.ppm", self.name));
        debug!(target: "app", "Saving {}x{} canvas to {}", self.width(), self.height(), path.display());
        let file = File::create(&path)?;
        self.write_ppm(BufWriter::new(file))?;
        Ok(path)
    }
}

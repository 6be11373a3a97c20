use crate::error::{Error, Result};
use crate::picture::Color;
use crate::ray::Ray;
use crate::render::ray_color;
use crate::scene::Scene;
use crate::vector::{Point, Reflect, Vector, ORIGIN};

/// Weights of the three shading terms. `ambient` is whatever specular and
/// lambert leave over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    specular: f64,
    lambert: f64,
    ambient: f64,
}

impl Coefficients {
    pub fn new(specular: f64, lambert: f64) -> Result<Self> {
        let valid = specular >= 0.0 && lambert >= 0.0 && specular + lambert <= 1.0;
        if !valid {
            return Err(Error::InvalidCoefficients { specular, lambert });
        }
        Ok(Coefficients { specular, lambert, ambient: 1.0 - specular - lambert })
    }

    pub const fn mirror() -> Self {
        Coefficients { specular: 1.0, lambert: 0.0, ambient: 0.0 }
    }

    pub fn specular(&self) -> f64 {
        self.specular
    }

    pub fn lambert(&self) -> f64 {
        self.lambert
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Coefficients { specular: 0.2, lambert: 0.6, ambient: 0.2 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimpleSurface {
    pub color: Color,
    coefficients: Coefficients,
}

impl SimpleSurface {
    pub fn new(color: Color, coefficients: Coefficients) -> Self {
        SimpleSurface { color, coefficients }
    }
}

impl Default for SimpleSurface {
    fn default() -> Self {
        SimpleSurface { color: Color::WHITE, coefficients: Coefficients::default() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckerboardSurface {
    pub color: Color,
    pub other_color: Color,
    check_size: f64,
    coefficients: Coefficients,
}

impl CheckerboardSurface {
    pub fn new(color: Color, other_color: Color, check_size: f64) -> Result<Self> {
        if !(check_size.is_finite() && check_size > 0.0) {
            return Err(Error::InvalidCheckSize(check_size));
        }
        Ok(CheckerboardSurface {
            color,
            other_color,
            check_size,
            coefficients: Coefficients::default(),
        })
    }

    pub fn check_size(&self) -> f64 {
        self.check_size
    }

    fn base_color_at(&self, point: &Point) -> Color {
        let v = (*point - ORIGIN) / self.check_size;
        let parity = (v.x.abs() + 0.5).floor() + (v.y.abs() + 0.5).floor() + (v.z.abs() + 0.5).floor();
        if parity.rem_euclid(2.0) == 1.0 {
            self.other_color
        } else {
            self.color
        }
    }
}

impl Default for CheckerboardSurface {
    fn default() -> Self {
        CheckerboardSurface {
            color: Color::WHITE,
            other_color: Color::BLACK,
            check_size: 1.0,
            coefficients: Coefficients::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    Simple(SimpleSurface),
    Checkerboard(CheckerboardSurface),
}

impl Default for Surface {
    fn default() -> Self {
        Surface::Simple(SimpleSurface::default())
    }
}

impl Surface {
    pub fn simple(color: Color) -> Surface {
        Surface::Simple(SimpleSurface { color, ..SimpleSurface::default() })
    }

    pub fn checkerboard() -> Surface {
        Surface::Checkerboard(CheckerboardSurface::default())
    }

    pub fn mirror() -> Surface {
        Surface::Simple(SimpleSurface { color: Color::WHITE, coefficients: Coefficients::mirror() })
    }

    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Surface {
        match &mut self {
            Surface::Simple(simple) => simple.coefficients = coefficients,
            Surface::Checkerboard(checkerboard) => checkerboard.coefficients = coefficients,
        }
        self
    }

    pub fn coefficients(&self) -> Coefficients {
        match self {
            Surface::Simple(simple) => simple.coefficients,
            Surface::Checkerboard(checkerboard) => checkerboard.coefficients,
        }
    }

    pub fn base_color_at(&self, point: &Point) -> Color {
        match self {
            Surface::Simple(simple) => simple.color,
            Surface::Checkerboard(checkerboard) => checkerboard.base_color_at(point),
        }
    }

    /// Shades a hit. `depth` has already been advanced past the ray that hit,
    /// so the reflected ray is traced at `depth` as is. The sum is left
    /// unclamped; `Canvas::plot` clamps.
    pub fn color_at(&self, scene: &Scene, ray: &Ray, point: &Point, normal: &Vector, depth: u32) -> Color {
        let Coefficients { specular, lambert, ambient } = self.coefficients();
        let base = self.base_color_at(point);

        let reflection = if specular > 0.0 {
            let reflected = Ray::new(*point, ray.direction.reflect_through(normal));
            specular * ray_color(scene, &reflected, depth)
        } else {
            Color::BLACK
        };

        let diffuse = if lambert > 0.0 {
            let amount: f64 = scene.visible_lights(point)
                .map(|light| (*light - *point).normalize().dot(normal).max(0.0))
                .sum();
            (lambert * amount.min(1.0)) * base
        } else {
            Color::BLACK
        };

        [reflection, diffuse, ambient * base].into_iter().sum()
    }
}

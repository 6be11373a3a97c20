use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("half-space normal has zero length")]
    DegenerateNormal,

    #[error("invalid surface coefficients: specular {specular}, lambert {lambert}")]
    InvalidCoefficients { specular: f64, lambert: f64 },

    #[error("checker size must be positive and finite, got {0}")]
    InvalidCheckSize(f64),

    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
}

use thiserror::Error;

/// Precondition failures for grid allocation and generation. Everything else
/// (interval 0, sampling before generation) is accepted and produces defined
/// output.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NoiseError {
    #[error("invalid grid size {0}: side length must be at least 1")]
    InvalidSize(usize),
    #[error("invalid octave count {0}: must be non-negative")]
    InvalidOctaves(f32),
}

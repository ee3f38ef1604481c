use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerAtlasError {
    #[error("layer {index} has degenerate dimensions {width}x{height}")]
    DegenerateLayer {
        index: usize,
        width: u32,
        height: u32,
    },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Nothing to pack")]
    Empty,
    #[error("canvas growth exhausted after {attempts} attempts at {width}x{height}")]
    GrowthExhausted {
        attempts: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, LayerAtlasError>;

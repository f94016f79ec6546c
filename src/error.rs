use thiserror::Error;

/// Smallest and largest edge accepted for an inserted picture
pub const INSERT_SIZE_RANGE: std::ops::RangeInclusive<i64> = 30..=500;

/// Largest edge a resize may produce
pub const MAX_EDGE: i64 = 16_384;

/// Errors that can occur while executing an editor command
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("No image has been opened!")]
    NoImage,
    #[error("Input must be between {min} and {max}.")]
    InvalidInsertSize { min: i64, max: i64 },
    #[error("Width and height must be between 1 and {max} (got {width}x{height}).")]
    InvalidDimensions { width: i64, height: i64, max: i64 },
    #[error("The selected area is empty.")]
    EmptySelection,
    #[error("Finish the current operation first.")]
    GestureInProgress,
    #[error("Failed to process image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to read EXIF data: {0}")]
    Exif(#[from] exif::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    pub fn invalid_insert_size() -> Self {
        Self::InvalidInsertSize {
            min: *INSERT_SIZE_RANGE.start(),
            max: *INSERT_SIZE_RANGE.end(),
        }
    }

    pub fn invalid_dimensions(width: i64, height: i64) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            max: MAX_EDGE,
        }
    }
}

/// Result type for command operations
pub type CommandResult = Result<(), EditorError>;

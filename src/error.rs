// error.rs
use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single batch item (one GIF, one image, or one subfolder).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("cannot write frame {}: {source}", path.display())]
    WriteFrame {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error(
        "frame {} is {}x{}, expected {}x{}",
        path.display(),
        found.0,
        found.1,
        expected.0,
        expected.1
    )]
    FrameSize {
        path: PathBuf,
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// The folder holds no file with a still-image extension.
    #[error("no valid images in {folder}")]
    NoImages { folder: String },

    /// Every candidate image in the folder failed to load.
    #[error("no valid images loaded from {folder}")]
    NoImagesLoaded { folder: String },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

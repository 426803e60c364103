// frames.rs
use crate::error::{ConvertError, ConvertResult};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Frames, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Walks the frames of one opened GIF from index 0 until the decoder reports
/// no further frame. Consumes the decoder; reopen the file to iterate again.
pub struct FrameSequence<'a> {
    path: PathBuf,
    frames: Frames<'a>,
    finished: bool,
}

impl FrameSequence<'static> {
    pub fn open(path: &Path) -> ConvertResult<Self> {
        let file = File::open(path).map_err(|source| ConvertError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoder = GifDecoder::new(BufReader::new(file)).map_err(|source| {
            ConvertError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(FrameSequence {
            path: path.to_path_buf(),
            frames: decoder.into_frames(),
            finished: false,
        })
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = ConvertResult<RgbaImage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.frames.next() {
            None => {
                self.finished = true;
                None
            }
            Some(Ok(frame)) => {
                // The decoder hands out an owned canvas per step.
                Some(Ok(frame.into_buffer()))
            }
            Some(Err(source)) => {
                self.finished = true;
                Some(Err(ConvertError::Decode {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

// image_processing.rs
use crate::app::console::Console;
use crate::app::file_selection::{self, file_name, file_stem};
use crate::app::frames::FrameSequence;
use crate::app::settings::ConverterSettings;
use crate::app::{BatchReport, BatchSummary};
use crate::error::{ConvertError, ConvertResult};
use crate::utils::{get_memory_usage, measure_time};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageFormat, ImageReader, RgbaImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extracts every GIF in `input_dir` into `output_dir/{stem}/frameNNNN.png`.
pub fn convert_gifs_to_frames(
    console: &mut dyn Console,
    settings: &ConverterSettings,
    input_dir: &Path,
    output_dir: &Path,
) -> BatchReport {
    debug!("{}", get_memory_usage());

    let gif_files = match file_selection::select_gif_files(input_dir, &settings.gif_extension) {
        Ok(files) => files,
        Err(e) => {
            warn!("Failed to list {}: {}", input_dir.display(), e);
            console.say(&format!("Error reading {}: {}", input_dir.display(), e));
            return BatchReport::NothingFound;
        }
    };
    if gif_files.is_empty() {
        console.say("No GIF files found in this directory.");
        return BatchReport::NothingFound;
    }
    debug!("Total GIFs to process: {}", gif_files.len());

    let mut summary = BatchSummary::default();
    let bar = console.progress(gif_files.len(), "Processing GIFs");
    for gif_path in &gif_files {
        let gif_file = file_name(gif_path);
        let out_folder = output_dir.join(file_stem(gif_path));

        let (result, duration) = measure_time(|| extract_frames(settings, gif_path, &out_folder));
        let line = match &result {
            Ok(count) => {
                debug!("Extracted {} frames from {} in {:?}", count, gif_file, duration);
                format!("Extracted frames from {}.", gif_file)
            }
            Err(e) => {
                warn!("Failed to extract {}: {}", gif_path.display(), e);
                format!("Error processing {}: {}", gif_file, e)
            }
        };
        bar.suspend(|| console.say(&line));
        summary.record(&result);
        bar.inc(1);
    }
    bar.finish_and_clear();

    console.say("");
    console.say(&format!(
        "Summary: {} GIFs processed, {} failed.",
        summary.succeeded, summary.failed
    ));
    BatchReport::Completed(summary)
}

/// Writes the frames of one GIF and returns how many were written. Existing
/// files in `out_folder` are overwritten, never cleared.
pub fn extract_frames(
    settings: &ConverterSettings,
    gif_path: &Path,
    out_folder: &Path,
) -> ConvertResult<usize> {
    fs::create_dir_all(out_folder).map_err(|source| ConvertError::CreateDir {
        path: out_folder.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for (index, frame) in FrameSequence::open(gif_path)?.enumerate() {
        let frame = frame?;
        let frame_path = out_folder.join(settings.frame_file_name(index));
        frame
            .save_with_format(&frame_path, ImageFormat::Png)
            .map_err(|source| ConvertError::WriteFrame {
                path: frame_path.clone(),
                source,
            })?;
        written += 1;
    }
    Ok(written)
}

/// Assembles each subfolder of `input_dir` into `output_dir/{folder}.gif`,
/// asking the operator for a frame duration per folder.
pub fn convert_images_to_gif(
    console: &mut dyn Console,
    settings: &ConverterSettings,
    input_dir: &Path,
    output_dir: &Path,
) -> BatchReport {
    debug!("{}", get_memory_usage());

    let subfolders = match file_selection::select_subfolders(input_dir) {
        Ok(folders) => folders,
        Err(e) => {
            warn!("Failed to list {}: {}", input_dir.display(), e);
            console.say(&format!("Error reading {}: {}", input_dir.display(), e));
            return BatchReport::NothingFound;
        }
    };
    if subfolders.is_empty() {
        console.say("No subfolders found in this directory.");
        return BatchReport::NothingFound;
    }

    let mut summary = BatchSummary::default();
    for folder_path in &subfolders {
        let folder = file_name(folder_path);
        let result = assemble_folder(console, settings, folder_path, &folder, output_dir);
        match &result {
            Ok(out_gif) => console.say(&format!("Saved GIF: {}", out_gif.display())),
            Err(ConvertError::NoImages { .. }) => {
                console.say(&format!("No valid images in {}. Skipping.", folder))
            }
            Err(ConvertError::NoImagesLoaded { .. }) => {
                console.say(&format!("No valid images loaded from {}. Skipping.", folder))
            }
            Err(e @ ConvertError::ListDir { .. }) => {
                warn!("Failed to list {}: {}", folder_path.display(), e);
                console.say(&format!("Error processing {}: {}", folder, e))
            }
            Err(e) => {
                warn!("Failed to build GIF for {}: {}", folder_path.display(), e);
                console.say(&format!("Error saving GIF for {}: {}", folder, e))
            }
        }
        summary.record(&result);
    }

    console.say("");
    console.say(&format!(
        "Summary: {} GIFs created, {} failed.",
        summary.succeeded, summary.failed
    ));
    BatchReport::Completed(summary)
}

fn assemble_folder(
    console: &mut dyn Console,
    settings: &ConverterSettings,
    folder_path: &Path,
    folder: &str,
    output_dir: &Path,
) -> ConvertResult<PathBuf> {
    let images = file_selection::select_images(folder_path, &settings.image_extensions)
        .map_err(|source| ConvertError::ListDir {
            path: folder_path.to_path_buf(),
            source,
        })?;
    if images.is_empty() {
        return Err(ConvertError::NoImages {
            folder: folder.to_string(),
        });
    }

    let answer = console
        .prompt(&format!(
            "Enter frame duration for {} in ms (default {}): ",
            folder, settings.default_duration_ms
        ))
        .unwrap_or_else(|e| {
            warn!("Failed to read frame duration: {}", e);
            String::new()
        });
    let duration_ms = settings.parse_duration(&answer);
    debug!("Using frame duration {} ms for {}", duration_ms, folder);

    let frames = load_frames(console, folder, &images);
    if frames.is_empty() {
        return Err(ConvertError::NoImagesLoaded {
            folder: folder.to_string(),
        });
    }

    let out_gif = output_dir.join(format!("{}.{}", folder, settings.gif_extension));
    let (result, duration) = measure_time(|| encode_gif(frames, duration_ms, &out_gif));
    debug!("Encoding {} took {:?}", out_gif.display(), duration);
    result.map(|()| out_gif)
}

/// Loads every image as an owned RGBA copy, reporting and skipping the ones
/// that fail or whose size differs from the first loaded frame.
fn load_frames(console: &mut dyn Console, folder: &str, images: &[PathBuf]) -> Vec<RgbaImage> {
    let bar = console.progress(images.len(), &format!("Loading frames from {}", folder));
    let mut frames: Vec<RgbaImage> = Vec::with_capacity(images.len());
    for img_path in images {
        let (result, duration) = measure_time(|| load_image(img_path));
        debug!("Loading image {} took {:?}", img_path.display(), duration);
        // The encoder sizes the canvas from the first frame and would crop
        // anything larger, so mismatched frames are dropped like load failures.
        let result = result.and_then(|frame| match frames.first() {
            Some(first) if first.dimensions() != frame.dimensions() => {
                Err(ConvertError::FrameSize {
                    path: img_path.clone(),
                    expected: first.dimensions(),
                    found: frame.dimensions(),
                })
            }
            _ => Ok(frame),
        });
        match result {
            Ok(frame) => frames.push(frame),
            Err(e) => {
                warn!("Failed to load {}: {}", img_path.display(), e);
                let line = format!("Error loading {}: {}", file_name(img_path), e);
                bar.suspend(|| console.say(&line));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    frames
}

fn load_image(path: &Path) -> ConvertResult<RgbaImage> {
    let reader = ImageReader::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Encodes `frames` in order as an infinitely looping GIF, replacing any
/// existing file at `out_gif`.
pub fn encode_gif(frames: Vec<RgbaImage>, duration_ms: u32, out_gif: &Path) -> ConvertResult<()> {
    let encode_err = |source| ConvertError::Encode {
        path: out_gif.to_path_buf(),
        source,
    };
    let create_err = |source| ConvertError::Create {
        path: out_gif.to_path_buf(),
        source,
    };

    let file = File::create(out_gif).map_err(create_err)?;
    let mut writer = BufWriter::new(file);
    {
        let mut encoder = GifEncoder::new(&mut writer);
        encoder.set_repeat(Repeat::Infinite).map_err(encode_err)?;
        let delay = Delay::from_numer_denom_ms(duration_ms, 1);
        encoder
            .encode_frames(frames.into_iter().map(|buffer| Frame::from_parts(buffer, 0, 0, delay)))
            .map_err(encode_err)?;
    }
    writer.flush().map_err(create_err)
}

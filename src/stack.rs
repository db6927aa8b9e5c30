//! Mask stack loading, normalization and scratch staging.
//!
//! A stack is an ordered set of same-shaped grayscale frames held as one
//! contiguous f32 buffer. Frame order follows the lexicographic order of the
//! source file names.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiff::encoder::{TiffEncoder, colortype};

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageStack {
    frames: usize,
    height: u32,
    width: u32,
    data: Vec<f32>,
}

impl ImageStack {
    pub fn new(frames: usize, height: u32, width: u32, data: Vec<f32>) -> Result<Self> {
        let expected = frames * height as usize * width as usize;
        if data.len() != expected {
            anyhow::bail!(
                "stack buffer holds {} values, expected {} ({}x{}x{})",
                data.len(),
                expected,
                frames,
                height,
                width
            );
        }
        Ok(Self {
            frames,
            height,
            width,
            data,
        })
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total pixel count across all frames.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn frame(&self, index: usize) -> &[f32] {
        let size = self.height as usize * self.width as usize;
        &self.data[index * size..(index + 1) * size]
    }

    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn same_shape(&self, other: &Self) -> bool {
        self.frames == other.frames && self.height == other.height && self.width == other.width
    }

    /// Rescale intensities into [0,1] when the stack's own maximum exceeds 1.
    ///
    /// Assumes an 8-bit source range, so the divisor is 255. Each stack's own
    /// maximum governs its own rescale. Idempotent.
    pub fn normalize(&mut self) {
        if self.max() > 1.0 {
            for v in &mut self.data {
                *v /= 255.0;
            }
        }
    }

    /// Concatenate the stack with itself along the frame axis.
    ///
    /// The external engine refuses single-orientation inputs below a minimum
    /// frame count, so the staged copies carry every frame twice. The first
    /// half of the result is bit-identical to the input.
    pub fn duplicate(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len() * 2);
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&self.data);
        Self {
            frames: self.frames * 2,
            height: self.height,
            width: self.width,
            data,
        }
    }

    /// Flatten into a {0,1} pixel vector by thresholding intensity at 0.5.
    pub fn binarize(&self) -> Vec<u8> {
        self.data.iter().map(|&v| u8::from(v > 0.5)).collect()
    }
}

/// Load every `*.{ext}` image in `dir` into a stack of raw intensities.
///
/// Frames are ordered by file name. Fails with `EmptyInput` when nothing
/// matches and with `ShapeMismatch` when a frame's dimensions differ from the
/// first frame's.
pub fn load_stack(dir: &Path, ext: &str) -> Result<ImageStack> {
    if !dir.is_dir() {
        return Err(EvalError::InputNotFound(dir.to_path_buf()).into());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s.eq_ignore_ascii_case(ext))
        })
        .collect();
    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    if paths.is_empty() {
        return Err(EvalError::EmptyInput {
            dir: dir.to_path_buf(),
            ext: ext.to_string(),
        }
        .into());
    }

    let mut width = 0u32;
    let mut height = 0u32;
    let mut data = Vec::new();

    for (i, path) in paths.iter().enumerate() {
        let image = image::open(path)
            .with_context(|| format!("failed to decode {}", path.display()))?
            .to_luma8();
        let (w, h) = image.dimensions();
        if i == 0 {
            width = w;
            height = h;
            data.reserve(paths.len() * w as usize * h as usize);
        } else if (w, h) != (width, height) {
            return Err(EvalError::ShapeMismatch {
                path: path.clone(),
                want_w: width,
                want_h: height,
                got_w: w,
                got_h: h,
            }
            .into());
        }
        data.extend(image.as_raw().iter().map(|&v| v as f32));
    }

    ImageStack::new(paths.len(), height, width, data)
}

/// Persist a stack as a multi-page 32-bit float TIFF, one IFD per frame.
pub fn write_stack_tiff(stack: &ImageStack, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))
        .with_context(|| format!("failed to start TIFF {}", path.display()))?;
    for i in 0..stack.frames() {
        encoder
            .write_image::<colortype::Gray32Float>(stack.width(), stack.height(), stack.frame(i))
            .with_context(|| format!("failed to write frame {} of {}", i, path.display()))?;
    }
    Ok(())
}

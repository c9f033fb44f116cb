// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where finished frames go.  The renderer only knows about the
//! `FrameSink` trait; writing PPM files and stitching them into an
//! animation with ffmpeg live here.

use color::Color;
use error::RenderError;
use failure::Error;
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Receives each frame once it has been rendered, in frame order.
pub trait FrameSink {
    /// Takes frame number `frame`, whose `width * height` pixels are in
    /// row-major order.
    fn write_frame(
        &mut self,
        frame: usize,
        width: usize,
        height: usize,
        pixels: &[Color],
    ) -> Result<(), Error>;
}

/// Packs pixels into the byte stream of an RGB8 image.
pub fn flatten(pixels: &[Color]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        bytes.extend_from_slice(&pixel.to_bytes());
    }
    bytes
}

/// Writes a single binary PPM (P6) image.
pub fn write_image(path: &Path, pixels: &[Color], bounds: (usize, usize)) -> Result<(), Error> {
    let output = File::create(path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(
        flatten(pixels).as_slice(),
        bounds.0 as u32,
        bounds.1 as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

/// Writes every frame to `<directory>/<prefix>_NNN.ppm`.
#[derive(Debug)]
pub struct PpmSink {
    directory: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PpmSink {
    /// A sink writing into `directory`, which must already exist.
    pub fn new<P: Into<PathBuf>>(directory: P, prefix: &str) -> PpmSink {
        PpmSink {
            directory: directory.into(),
            prefix: prefix.to_string(),
            written: vec![],
        }
    }

    /// The path frame `frame` is written to.
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.directory
            .join(format!("{}_{:03}.ppm", self.prefix, frame))
    }

    /// The files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Runs ffmpeg over the frames written so far to produce `output`,
    /// then removes the frames.
    pub fn animate(&mut self, output: &Path) -> Result<(), Error> {
        let pattern = self.directory.join(format!("{}_%03d.ppm", self.prefix));
        info!("Encoding {} frames into {}", self.written.len(), output.display());
        let status = Command::new("ffmpeg")
            .arg("-y")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(&pattern)
            .arg(output)
            .status()?;
        if !status.success() {
            return Err(RenderError::Encoder {
                status: status.to_string(),
            }
            .into());
        }
        self.cleanup()
    }

    /// Deletes the frames written so far.
    pub fn cleanup(&mut self) -> Result<(), Error> {
        for path in self.written.drain(..) {
            debug!("Removing {}", path.display());
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

impl FrameSink for PpmSink {
    fn write_frame(
        &mut self,
        frame: usize,
        width: usize,
        height: usize,
        pixels: &[Color],
    ) -> Result<(), Error> {
        let path = self.frame_path(frame);
        write_image(&path, pixels, (width, height))?;
        debug!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Quaternion Newton fractal renderer
//!
//! Each frame samples a different two-dimensional slice of the
//! quaternions.  Every pixel in that slice is used as the starting point
//! of Newton's method for `q^3 - 1`, and the pixel is colored by the
//! root it lands on.  No pixel depends on any other, so a frame can be
//! cut into bands of rows and each band handed to its own thread; the
//! bands are disjoint slices of the one output buffer and need no
//! locking.

extern crate crossbeam;

use color::{outcome_color, Color};
use error::RenderError;
use failure::Error;
use itertools::iproduct;
use newton::{iterate_with, Outcome};
use planes::{Pixel, PlaneMapper, SamplePlane};
use setup::Setup;
use sink::FrameSink;

/// Renders frames of the quaternion Newton fractal for a given setup.
pub struct Renderer {
    setup: Setup,
    plane: PlaneMapper,
}

impl Renderer {
    /// Validates the setup and prepares the pixel mapping.
    pub fn new(setup: Setup) -> Result<Self, RenderError> {
        let plane = PlaneMapper::new(&setup)?;
        Ok(Renderer { setup, plane })
    }

    /// The setup this renderer was built with.
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// Runs Newton's method for one pixel of one frame.
    pub fn sample(&self, frame: usize, pixel: &Pixel) -> Outcome {
        let slice = SamplePlane::for_frame(frame, self.setup.frames);
        self.sample_in(&slice, pixel)
    }

    fn sample_in(&self, slice: &SamplePlane, pixel: &Pixel) -> Outcome {
        let (a0, a1) = self.plane.pixel_to_point(pixel);
        iterate_with(slice.point(a0, a1), &self.setup)
    }

    fn shade(&self, slice: &SamplePlane, pixel: &Pixel) -> Color {
        outcome_color(&self.sample_in(slice, pixel), self.setup.epsilon)
    }

    /// Fills `band`, a run of whole rows starting at `first_row`.
    fn render_rows(&self, slice: &SamplePlane, first_row: usize, band: &mut [Color]) {
        let width = self.plane.integral_plane.0;
        for (offset, color) in band.iter_mut().enumerate() {
            let pixel = Pixel(offset % width, first_row + offset / width);
            *color = self.shade(slice, &pixel);
        }
    }

    /// Renders one frame on the calling thread.  Pixels come back in
    /// row-major order.
    pub fn render_frame(&self, frame: usize) -> Vec<Color> {
        let slice = SamplePlane::for_frame(frame, self.setup.frames);
        let mut buffer = vec![Color::BLACK; self.plane.len()];
        for (row, column) in iproduct!(0..self.plane.integral_plane.1, 0..self.plane.integral_plane.0)
        {
            let pixel = Pixel(column, row);
            buffer[self.plane.pixel_to_offset(&pixel)] = self.shade(&slice, &pixel);
        }
        buffer
    }

    /// Renders one frame with up to `threads` worker threads.  The
    /// output is identical to `render_frame`.
    pub fn render_frame_threaded(
        &self,
        frame: usize,
        threads: usize,
    ) -> Result<Vec<Color>, RenderError> {
        if threads <= 1 {
            return Ok(self.render_frame(frame));
        }

        let slice = SamplePlane::for_frame(frame, self.setup.frames);
        let width = self.plane.integral_plane.0;
        let height = self.plane.integral_plane.1;
        let rows_per_band = (height + threads - 1) / threads;
        let mut buffer = vec![Color::BLACK; self.plane.len()];

        crossbeam::scope(|spawner| {
            for (i, band) in buffer.chunks_mut(rows_per_band * width).enumerate() {
                let slice = &slice;
                spawner.spawn(move |_| {
                    self.render_rows(slice, i * rows_per_band, band);
                });
            }
        })
        .map_err(|_| RenderError::WorkerPanicked)?;

        Ok(buffer)
    }

    /// Renders every frame in order and hands each one to `sink`.
    pub fn render<S: FrameSink>(&self, sink: &mut S, threads: usize) -> Result<(), Error> {
        let (width, height) = (self.plane.integral_plane.0, self.plane.integral_plane.1);
        for frame in 0..self.setup.frames {
            let pixels = self.render_frame_threaded(frame, threads)?;
            sink.write_frame(frame, width, height, &pixels)?;
            info!("Current frame: {:3}  Total: {}", frame + 1, self.setup.frames);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(Vec<(usize, usize, usize, Vec<Color>)>);

    impl FrameSink for Collect {
        fn write_frame(
            &mut self,
            frame: usize,
            width: usize,
            height: usize,
            pixels: &[Color],
        ) -> Result<(), Error> {
            self.0.push((frame, width, height, pixels.to_vec()));
            Ok(())
        }
    }

    fn small(width: usize, height: usize, frames: usize) -> Setup {
        Setup {
            width,
            height,
            frames,
            ..Setup::default()
        }
    }

    #[test]
    fn rejects_bad_setup() {
        assert!(Renderer::new(small(0, 4, 1)).is_err());
        assert!(Renderer::new(small(4, 4, 0)).is_err());
    }

    #[test]
    fn grid_center_is_black() {
        let renderer = Renderer::new(small(5, 5, 100)).unwrap();
        let outcome = renderer.sample(0, &Pixel(2, 2));
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 32);
        let frame = renderer.render_frame(0);
        assert_eq!(frame.len(), 25);
        assert_eq!(frame[2 * 5 + 2], Color::BLACK);
    }

    #[test]
    fn real_root_pixel_is_gray() {
        // 7 columns over [-3, 3] step by 1.0, so row 4 has a0 = 1 and
        // column 3 has a1 = 0; at frame 0 that starts on the root 1.
        let renderer = Renderer::new(small(7, 7, 100)).unwrap();
        let outcome = renderer.sample(0, &Pixel(3, 4));
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(renderer.render_frame(0)[4 * 7 + 3], Color::new(127, 127, 127));
    }

    #[test]
    fn threaded_matches_single() {
        let renderer = Renderer::new(small(33, 17, 10)).unwrap();
        for frame in &[0, 3, 7] {
            let single = renderer.render_frame(*frame);
            for threads in 2..6 {
                let threaded = renderer.render_frame_threaded(*frame, threads).unwrap();
                assert_eq!(single, threaded, "frame {} threads {}", frame, threads);
            }
        }
    }

    #[test]
    fn more_threads_than_rows() {
        let renderer = Renderer::new(small(4, 3, 1)).unwrap();
        let threaded = renderer.render_frame_threaded(0, 8).unwrap();
        assert_eq!(threaded, renderer.render_frame(0));
    }

    #[test]
    fn frames_differ_and_arrive_in_order() {
        let renderer = Renderer::new(small(16, 16, 4)).unwrap();
        let mut sink = Collect(vec![]);
        renderer.render(&mut sink, 2).unwrap();
        assert_eq!(sink.0.len(), 4);
        for (i, frame) in sink.0.iter().enumerate() {
            assert_eq!(frame.0, i);
            assert_eq!((frame.1, frame.2), (16, 16));
            assert_eq!(frame.3.len(), 256);
        }
        assert_ne!(sink.0[0].3, sink.0[1].3);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The fixed parameters of a render: image size, the real window the
//! pixels cover, the Newton iteration cap, the convergence thresholds,
//! and the number of animation frames.

/// Pixels along the horizontal axis.
pub const WIDTH: usize = 1024;
/// Pixels along the vertical axis.
pub const HEIGHT: usize = 1024;
/// Lower bound of the real window, shared by both axes.
pub const START: f64 = -3.0;
/// Upper bound of the real window, shared by both axes.
pub const END: f64 = 3.0;
/// Newton steps allowed per sample.
pub const MAX_ITERATIONS: usize = 32;
/// Frames in one full turn of the sample plane.
pub const FRAMES: usize = 100;
/// Distance below which a converged point counts as the real root.
pub const EPSILON: f64 = 1.0E-8;
/// Squared residual below which a point counts as converged.
pub const EPSILON_SQ: f64 = 1.0E-16;

/// One immutable bundle of everything the plane mapper, the Newton
/// iterator and the renderer need to know.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Setup {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// First real coordinate of the window.
    pub start: f64,
    /// Last real coordinate of the window.
    pub end: f64,
    /// Newton steps allowed per sample.
    pub max_iterations: usize,
    /// Frames per full rotation.
    pub frames: usize,
    /// Real-root distance threshold.
    pub epsilon: f64,
    /// Convergence threshold on the squared residual.
    pub epsilon_sq: f64,
}

impl Default for Setup {
    fn default() -> Setup {
        Setup {
            width: WIDTH,
            height: HEIGHT,
            start: START,
            end: END,
            max_iterations: MAX_ITERATIONS,
            frames: FRAMES,
            epsilon: EPSILON,
            epsilon_sq: EPSILON_SQ,
        }
    }
}

impl Setup {
    /// Checks the parts of the setup that the arithmetic cannot survive.
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 2 || self.height < 2 {
            return Err(format!(
                "The image must be at least 2x2 pixels, got {}x{}",
                self.width, self.height
            ));
        }
        if !(self.end > self.start) {
            return Err(format!(
                "The window start {} is not below the window end {}",
                self.start, self.end
            ));
        }
        if self.frames == 0 {
            return Err("At least one frame is required".to_string());
        }
        if self.max_iterations == 0 {
            return Err("At least one Newton iteration is required".to_string());
        }
        Ok(())
    }

    /// Number of pixels in one frame.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the frame has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

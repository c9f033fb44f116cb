// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns the outcome of a Newton run into a pixel.
//!
//! Points that never converge are black, and points that reach the real
//! root 1 are gray.  Every other cube root of unity has real part -1/2
//! and an imaginary part lying on a sphere of radius sqrt(3)/2, so those
//! roots are told apart by the direction of the imaginary part: the
//! longitude picks a hue from a six-segment color wheel and the latitude
//! pushes that hue toward white (north) or black (south).

use newton::Outcome;
use num::clamp;
use quaternion::{dist, Quaternion};
use std::f64::consts::{FRAC_PI_2, PI};

/// Steps in one full turn of the color wheel; six ramps of 256.
pub const GRADIENT_STEPS: f64 = 1536.0;

/// An 8-bit RGB pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    /// Pure white.
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    /// Pure blue.
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xFF);

    /// Builds a color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    /// Multiplies every channel by `t`, truncating toward zero.
    pub fn scale(&self, t: f64) -> Color {
        Color::new(
            (t * f64::from(self.red)) as u8,
            (t * f64::from(self.green)) as u8,
            (t * f64::from(self.blue)) as u8,
        )
    }

    /// Shifts every channel by `255 * val`, clamped to the channel range.
    /// Positive values wash toward white, negative values toward black.
    pub fn saturate(&self, val: f64) -> Color {
        let shift = |channel: u8| clamp(f64::from(channel) + 255.0 * val, 0.0, 255.0) as u8;
        Color::new(shift(self.red), shift(self.green), shift(self.blue))
    }

    /// The channels as a byte triple.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Picks a hue for `angle` in `(-pi, pi]`.  The wheel starts at blue
/// and passes through cyan, green, yellow, red and magenta before
/// returning to blue.  Float-to-channel conversion saturates, so a ramp
/// that starts at 256 starts at 255.
pub fn color_wheel(angle: f64) -> Color {
    let val = (angle + PI) * (GRADIENT_STEPS / (2.0 * PI));

    if val < 0.0 {
        Color::BLUE
    } else if val < 256.0 {
        Color::new(0x00, val as u8, 0xFF)
    } else if val < 512.0 {
        Color::new(0x00, 0xFF, (256.0 - (val - 256.0)) as u8)
    } else if val < 768.0 {
        Color::new((val - 512.0) as u8, 0xFF, 0x00)
    } else if val < 1024.0 {
        Color::new(0xFF, (256.0 - (val - 768.0)) as u8, 0x00)
    } else if val < 1280.0 {
        Color::new(0xFF, 0x00, (val - 1024.0) as u8)
    } else if val < 1536.0 {
        Color::new((256.0 - (val - 1280.0)) as u8, 0x00, 0xFF)
    } else {
        Color::BLUE
    }
}

/// Colors a point on the sphere by latitude `phi` and longitude `theta`.
pub fn sphere_color(phi: f64, theta: f64) -> Color {
    let s = (phi + FRAC_PI_2) / FRAC_PI_2 - 1.0;
    color_wheel(theta).saturate(s)
}

/// Colors the imaginary part of a quaternion by its direction.
pub fn direction_color(q: &Quaternion) -> Color {
    let rho = (q.x * q.x + q.y * q.y).sqrt();
    let phi = q.z.atan2(rho);
    let theta = q.y.atan2(q.x);
    sphere_color(phi, theta)
}

/// The pixel for one Newton run.  `epsilon` is the distance under which
/// a converged point is taken to be the real root.
pub fn outcome_color(outcome: &Outcome, epsilon: f64) -> Color {
    let one = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    if !outcome.converged {
        Color::BLACK
    } else if dist(&outcome.point, &one) < epsilon {
        Color::WHITE.scale(0.5)
    } else {
        direction_color(&outcome.point)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 and
//! a square window on the real plane, and the SamplePlane struct, which
//! places that real plane inside the quaternions for one frame of the
//! animation.

use quaternion::Quaternion;
use setup::Setup;
use std::f64::consts::PI;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the column, row of a pixel.  Row 0 is the top of the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the integral plane to pairs of real coordinates.  The
/// first and last pixel of each axis land exactly on the ends of the
/// window.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Width and height of the integral plane.
    pub integral_plane: IntegralPlane,
    /// First real coordinate of the window, shared by both axes.
    pub start: f64,
    // The distance on the real plane between neighbouring columns and
    // neighbouring rows, respectively.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the setup describing the image size and the
    /// real window.
    pub fn new(setup: &Setup) -> Result<PlaneMapper, String> {
        setup.validate()?;
        let span = setup.end - setup.start;
        Ok(PlaneMapper {
            integral_plane: IntegralPlane(setup.width, setup.height),
            start: setup.start,
            grid_factors: (
                span / ((setup.width - 1) as f64),
                span / ((setup.height - 1) as f64),
            ),
        })
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel, return the pair `(a0, a1)` of real coordinates
    /// that weight the two basis quaternions of the sample plane.  The
    /// row picks `a0` and the column picks `a1`.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> (f64, f64) {
        (
            self.start + self.grid_factors.1 * (pixel.1 as f64),
            self.start + self.grid_factors.0 * (pixel.0 as f64),
        )
    }

    /// The linear offset of a pixel from the root of a row-major buffer.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> usize {
        pixel.1 * self.integral_plane.0 + pixel.0
    }
}

/// The two-dimensional slice of the quaternions sampled by one frame.
/// `u0` and `u1` are orthogonal unit quaternions; as the frame index
/// goes round they trace two great circles of the unit 3-sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplePlane {
    /// Basis direction weighted by the row coordinate.
    pub u0: Quaternion,
    /// Basis direction weighted by the column coordinate.
    pub u1: Quaternion,
}

impl SamplePlane {
    /// The plane for frame `frame` out of `frames` per full turn.
    pub fn for_frame(frame: usize, frames: usize) -> SamplePlane {
        let angle = (frame as f64) * (2.0 * PI / (frames as f64));
        SamplePlane::at_angle(angle)
    }

    /// The plane rotated by `angle` radians.
    pub fn at_angle(angle: f64) -> SamplePlane {
        let (sin, cos) = angle.sin_cos();
        SamplePlane {
            u0: Quaternion::new(cos, sin, 0.0, 0.0),
            u1: Quaternion::new(0.0, 0.0, cos, sin),
        }
    }

    /// The quaternion `u0 * a0 + u1 * a1`.
    pub fn point(&self, a0: f64, a1: f64) -> Quaternion {
        self.u0 * a0 + self.u1 * a1
    }
}

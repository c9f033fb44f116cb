#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Quaternion Newton fractal renderer
//!
//! Newton's method for `z^3 - 1` on the complex plane splits the plane
//! into three basins, one for each cube root of unity, with a famously
//! tangled fractal boundary between them.  Over the quaternions the
//! same polynomial has infinitely many roots: 1, and every quaternion
//! with real part -1/2 whose imaginary part has length sqrt(3)/2, a
//! whole 2-sphere of them.
//!
//! We cannot draw four dimensions, so each frame picks a plane through
//! the quaternions, spanned by `u0 = cos t + i sin t` and
//! `u1 = j cos t + k sin t`, runs Newton's method from every pixel of
//! that plane, and colors the pixel by where on the sphere of roots it
//! ended up.  Turning `t` once around the circle gives the animation.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;

pub mod color;
pub mod error;
pub mod newton;
pub mod planes;
pub mod quaternion;
pub mod renderer;
pub mod setup;
pub mod sink;

pub use color::Color;
pub use error::RenderError;
pub use newton::{iterate, Outcome};
pub use planes::{Pixel, PlaneMapper, SamplePlane};
pub use quaternion::{dist, Quaternion};
pub use renderer::Renderer;
pub use setup::Setup;
pub use sink::{FrameSink, PpmSink};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton's method for `f(q) = q^3 - 1` over the quaternions.
//!
//! With `f'(q) = 3q^2` the Newton step `q - f(q) / f'(q)` simplifies to
//! `(2q^3 + 1) / (3q^2)`, which is what we compute.  There is no
//! guard against a vanishing denominator: a start at the origin divides
//! by zero, the iterate turns into NaN, and because every comparison
//! with NaN is false the loop simply runs out its budget and the sample
//! is reported as not converged.

use quaternion::Quaternion;
use setup::Setup;

/// Where a single Newton run stopped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The last iterate.
    pub point: Quaternion,
    /// How many Newton steps were taken.
    pub iterations: usize,
    /// Whether the squared residual fell below the threshold.
    pub converged: bool,
}

/// The residual `q^3 - 1`.
#[inline]
pub fn residual(q: &Quaternion) -> Quaternion {
    q.cube() - 1.0
}

/// One Newton step, `(2q^3 + 1) / (3q^2)`.
#[inline]
pub fn newton_step(q: &Quaternion) -> Quaternion {
    let num = q.cube() * 2.0 + 1.0;
    let den = q.square() * 3.0;
    num / den
}

/// Runs Newton's method from `start` until the squared residual drops
/// below `epsilon_sq` or `max_iterations` steps have been taken.
pub fn iterate(start: Quaternion, max_iterations: usize, epsilon_sq: f64) -> Outcome {
    let mut q = start;
    let mut p = residual(&q);
    let mut iterations = 0;

    while iterations < max_iterations {
        if p.norm_sq() < epsilon_sq {
            break;
        }
        q = newton_step(&q);
        p = residual(&q);
        iterations += 1;
    }

    Outcome {
        point: q,
        iterations,
        converged: p.norm_sq() < epsilon_sq,
    }
}

/// `iterate` with the budget and threshold taken from a setup.
pub fn iterate_with(start: Quaternion, setup: &Setup) -> Outcome {
    iterate(start, setup.max_iterations, setup.epsilon_sq)
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised around the edges of a render.  The arithmetic itself
//! never fails; NaN and infinity are allowed to flow through it.

/// Everything that can stop a render before its frames are written.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The setup describes a plane we cannot map pixels onto.
    #[fail(display = "invalid plane: {}", _0)]
    Plane(String),

    /// A worker thread panicked while filling its band of rows.
    #[fail(display = "a render thread panicked")]
    WorkerPanicked,

    /// The external encoder could not assemble the frames.
    #[fail(display = "ffmpeg exited with {}", status)]
    Encoder {
        /// The encoder's exit status, as reported by the OS.
        status: String,
    },
}

impl From<String> for RenderError {
    fn from(message: String) -> RenderError {
        RenderError::Plane(message)
    }
}

/*
 * The $1 Unistroke Recognizer (rust version)
 *
 * Rust implementation by Ferran Pujol Camins.
 *
 * Original authors:
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 * 	    University of Washington
 *	    Seattle, WA 98195-2840
 * 	    yangli@cs.washington.edu
 *
 * The academic publication for the $1 recognizer, and what should be
 * used to cite it, is:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island (October
 *	  7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (C) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::error::{RecognizeError, Result};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Default number of points on the gesture path
pub const SAMPLING_RESOLUTION: usize = 64;
/// Default side of the reference square gestures are scaled into
pub const SQUARE_SIZE: f32 = 250.0;
/// Default bound of the rotation search, ±45°
pub const ANGLE_RANGE: f32 = std::f32::consts::FRAC_PI_4;
/// Default termination width of the rotation search, 2°
pub const ANGLE_PRECISION: f32 = 2.0 * std::f32::consts::PI / 180.0;
/// Default lower bound of a bounding box side, relative to its longer side.
/// Zero keeps the plain $1 scaling: every stroke fills the whole square.
pub const MIN_EXTENT_RATIO: f32 = 0.0;
/// Opt-in value of [`RecognizerParameters::min_extent_ratio`] for template sets that contain
/// straight lines. Thin strokes then keep their aspect ratio, at the cost of no longer
/// matching purely by shape.
pub const LINE_EXTENT_RATIO: f32 = 0.1;
/// Golden ratio φ = 0.5 * (√5 - 1)
pub const PHI: f32 = 0.618_034;

/// Tunable constants of the $1 recognizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecognizerParameters {
    /// Number of equally spaced points every stroke is resampled to
    pub num_points: usize,
    /// Side of the square the bounding box of every stroke is mapped to
    pub square_size: f32,
    /// Half width (radians) of the golden-section rotation search
    pub angle_range: f32,
    /// The rotation search stops once its interval is narrower than this (radians)
    pub angle_precision: f32,
    /// A bounding box side shorter than this fraction of the longer side is
    /// scaled as if it had exactly this length. `0` scales every stroke to the full square;
    /// see [`LINE_EXTENT_RATIO`].
    pub min_extent_ratio: f32,
    /// When disabled, strokes keep their drawn orientation and only the
    /// bounded rotation search compensates for small tilts.
    pub rotation_invariant: bool,
}

impl Default for RecognizerParameters {
    fn default() -> Self {
        RecognizerParameters {
            num_points: SAMPLING_RESOLUTION,
            square_size: SQUARE_SIZE,
            angle_range: ANGLE_RANGE,
            angle_precision: ANGLE_PRECISION,
            min_extent_ratio: MIN_EXTENT_RATIO,
            rotation_invariant: true,
        }
    }
}

impl RecognizerParameters {
    /// Half of the diagonal of the reference square: the distance that maps to a zero score
    pub fn half_diagonal(&self) -> f32 {
        0.5 * (2.0 * self.square_size * self.square_size).sqrt()
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_points < 2 {
            return Err(RecognizeError::InvalidParameters(format!(
                "num_points must be at least 2, got {}",
                self.num_points
            )));
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(RecognizeError::InvalidParameters(format!(
                "square_size must be positive, got {}",
                self.square_size
            )));
        }
        if !(self.angle_range.is_finite() && self.angle_range >= 0.0) {
            return Err(RecognizeError::InvalidParameters(format!(
                "angle_range must not be negative, got {}",
                self.angle_range
            )));
        }
        if !(self.angle_precision.is_finite() && self.angle_precision > 0.0) {
            return Err(RecognizeError::InvalidParameters(format!(
                "angle_precision must be positive, got {}",
                self.angle_precision
            )));
        }
        if !(0.0..=1.0).contains(&self.min_extent_ratio) {
            return Err(RecognizeError::InvalidParameters(format!(
                "min_extent_ratio must lie in [0, 1], got {}",
                self.min_extent_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        let params = RecognizerParameters::default();
        assert!(params.validate().is_ok());
        assert_relative_eq!(params.half_diagonal(), 176.776_7, epsilon = 1e-3);
    }

    #[test]
    fn rejects_degenerate_values() {
        let params = RecognizerParameters { num_points: 1, ..Default::default() };
        assert!(matches!(params.validate(), Err(RecognizeError::InvalidParameters(_))));

        let params = RecognizerParameters { square_size: 0.0, ..Default::default() };
        assert!(params.validate().is_err());

        let params = RecognizerParameters { angle_precision: 0.0, ..Default::default() };
        assert!(params.validate().is_err());

        let params = RecognizerParameters { angle_range: -1.0, ..Default::default() };
        assert!(params.validate().is_err());

        let params = RecognizerParameters { min_extent_ratio: 1.5, ..Default::default() };
        assert!(params.validate().is_err());
    }
}

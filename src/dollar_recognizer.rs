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

use crate::{
    error::{RecognizeError, Result},
    geometry,
    gesture::Gesture,
    library::TemplateLibrary,
    parameters::{RecognizerParameters, PHI},
    point::Point,
};
use log::{debug, trace, warn};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Label reported when there is nothing to recognize
pub const NO_MATCH_LABEL: &str = "Unknown";
/// Score from which the sandbox treats a recognition as successful
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f32 = 0.75;
/// Upper bound on golden-section steps, whatever the parameters say
const MAX_SEARCH_ITERATIONS: usize = 64;

/// Best matching template for a candidate stroke.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecognitionResult {
    pub label: String,
    /// Similarity in [0..1], 1 being a perfect match
    pub score: f32,
}

impl RecognitionResult {
    /// Zero-confidence result for strokes without a shape
    pub fn no_match() -> Self {
        Self {
            label: NO_MATCH_LABEL.into(),
            score: 0.0,
        }
    }

    /// Whether the caller's acceptance policy admits this result
    pub fn is_accepted(&self, threshold: f32) -> bool {
        self.score >= threshold
    }
}

/// Main function of the $1 recognizer.
/// Classifies a normalized candidate gesture against every template of the library.
/// Returns the label of the closest template and its score; on ties the template
/// registered first wins.
pub fn classify(candidate: &Gesture, templates: &TemplateLibrary) -> Result<RecognitionResult> {
    if templates.is_empty() {
        warn!("recognition requested but no templates are configured");
        return Err(RecognizeError::NoTemplatesConfigured);
    }
    let params = templates.parameters();

    let mut best: Option<(&str, f32)> = None;
    for template in templates.iter() {
        let dist = distance_at_best_angle(&candidate.points, &template.points, params);
        // NaN compares false with everything; rank it last so ties keep registration order
        let dist = if dist.is_finite() { dist } else { f32::MAX };
        trace!(
            "template {:?}: distance {:.3}, score {:.3}",
            template.name,
            dist,
            score(dist, params)
        );
        match best {
            Some((_, min_distance)) if dist >= min_distance => {}
            _ => best = Some((template.name.as_str(), dist)),
        }
    }

    let (label, dist) = best.ok_or(RecognizeError::NoTemplatesConfigured)?;
    let result = RecognitionResult {
        label: label.to_owned(),
        score: score(dist, params),
    };
    debug!(
        "recognized {} points as {:?} (score {:.3})",
        candidate.points.len(),
        result.label,
        result.score
    );
    Ok(result)
}

/// Converts an average point distance into a similarity in [0..1]
pub fn score(distance: f32, params: &RecognizerParameters) -> f32 {
    let s = 1.0 - distance / params.half_diagonal();
    if s.is_nan() {
        0.0
    } else {
        s.clamp(0.0, 1.0)
    }
}

/// Searches, with a golden-section search over [-angle_range..angle_range], the rotation
/// of `points` that minimizes its path distance to `template`.
/// Returns that minimum distance.
pub fn distance_at_best_angle(
    points: &[Point],
    template: &[Point],
    params: &RecognizerParameters,
) -> f32 {
    let mut a = -params.angle_range;
    let mut b = params.angle_range;

    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(points, template, x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(points, template, x2);

    let mut iterations = 0;
    while (b - a).abs() > params.angle_precision && iterations < MAX_SEARCH_ITERATIONS {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(points, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(points, template, x2);
        }
        iterations += 1;
    }

    // the search never probes the unrotated alignment itself
    f1.min(f2).min(geometry::path_distance(points, template))
}

fn distance_at_angle(points: &[Point], template: &[Point], radians: f32) -> f32 {
    let rotated = geometry::rotate_by(points, radians);
    geometry::path_distance(&rotated, template)
}

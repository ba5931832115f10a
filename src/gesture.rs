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
    geometry::{self, MIN_EXTENT_FRACTION},
    parameters::RecognizerParameters,
    point::Point,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Implements a gesture as an ordered path of points.
/// Gestures are resampled into a fixed number of equally spaced points, rotated so that
/// their indicative angle is zero, scaled into the reference square and translated so
/// that their centroid lies at the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gesture {
    /// Gesture class
    pub name: String,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
}

impl Gesture {
    /// Constructs a normalized gesture from a stroke and a name.
    /// Returns `None` when the stroke cannot be normalized, see [`Gesture::is_degenerate`].
    pub fn new(pts: &[Point], name: &str, params: &RecognizerParameters) -> Option<Self> {
        if Self::is_degenerate(pts) {
            return None;
        }
        Some(Self {
            name: name.into(),
            points: Self::normalize(pts, params),
        })
    }

    /// A stroke with fewer than two points, a non-finite coordinate, or no measurable
    /// length has no shape to compare. Any positive length counts, whatever the scale.
    pub fn is_degenerate(pts: &[Point]) -> bool {
        pts.len() < 2
            || pts.iter().any(|p| !p.x.is_finite() || !p.y.is_finite())
            || !has_length(geometry::path_length(pts))
    }

    /// Normalizes the gesture path.
    pub fn normalize(pts: &[Point], params: &RecognizerParameters) -> Vec<Point> {
        // standard $-family processing: resample, rotate, scale, and translate to origin
        let mut points = resample(pts, params.num_points);
        if params.rotation_invariant {
            let radians = geometry::indicative_angle(&points);
            points = geometry::rotate_by(&points, -radians);
        }
        points = scale_to(&points, params.square_size, params.min_extent_ratio);
        let c = geometry::centroid(&points);
        translate_to(&points, &c)
    }
}

/// Resamples the array of points into n equally-distanced points.
///
/// The output always has exactly `n` points (for a non-empty input and `n >= 1`).
/// Repeated samples are tolerated; a path without length resamples to `n` copies of
/// its first point.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let length = geometry::path_length(points);
    if n < 2 || !has_length(length) {
        return vec![first; n];
    }

    let interval = length / (n as f32 - 1.0);
    let mut new_points = Vec::with_capacity(n);
    new_points.push(first);

    let mut d = 0.0;
    for w in points.windows(2) {
        let mut anchor = w[0];
        let mut dist = geometry::euclidean_distance(&anchor, &w[1]);
        while d + dist >= interval && new_points.len() < n {
            let t = ((interval - d) / dist).clamp(0.0, 1.0);
            let q = anchor.lerp(&w[1], t);
            new_points.push(q);

            // update partial length
            dist = d + dist - interval;
            d = 0.0;
            anchor = q;
        }
        d += dist;
    }
    // sometimes we fall a rounding-error short of adding the last point
    let last = points[points.len() - 1];
    while new_points.len() < n {
        new_points.push(last);
    }
    new_points
}

// overflowed lengths are as unusable as zero ones
fn has_length(length: f32) -> bool {
    length > 0.0 && length.is_finite()
}

/// Non-uniformly scales the points so that their bounding box becomes a square of side `size`.
/// Sides shorter than `min_extent_ratio` times the longer side (and never shorter than
/// [`MIN_EXTENT_FRACTION`] of it) are scaled by that minimum instead.
fn scale_to(points: &[Point], size: f32, min_extent_ratio: f32) -> Vec<Point> {
    let b = geometry::bounding_box(points);
    let longer = b.width().max(b.height());
    let floor = (longer * min_extent_ratio.max(MIN_EXTENT_FRACTION)).max(f32::MIN_POSITIVE);
    let width = b.width().max(floor);
    let height = b.height().max(floor);
    points
        .iter()
        .map(|p| Point::new(p.x * size / width, p.y * size / height))
        .collect()
}

/// Translates the array of points by -p
fn translate_to(points: &[Point], p: &Point) -> Vec<Point> {
    points
        .iter()
        .map(|point| Point::new(point.x - p.x, point.y - p.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 30.0),
            Point::new(10.0, 30.0),
            Point::new(20.0, 0.0),
            Point::new(35.0, 40.0),
            Point::new(50.0, 5.0),
        ]
    }

    #[test]
    fn resample_produces_exactly_n_points() {
        let stroke = zigzag();
        for n in [2, 3, 7, 16, 32, 64, 100, 257] {
            assert_eq!(resample(&stroke, n).len(), n, "n = {n}");
        }
    }

    #[test]
    fn resample_keeps_endpoints_and_length() {
        // a straight polyline loses nothing to corner cutting
        let stroke = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(17.0, 0.0),
            Point::new(100.0, 0.0),
        ];
        let resampled = resample(&stroke, 64);
        assert_abs_diff_eq!(resampled[0].x, 0.0);
        assert_abs_diff_eq!(resampled[63].x, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(
            geometry::path_length(&resampled),
            geometry::path_length(&stroke),
            epsilon = 1e-3
        );
        for w in resampled.windows(2) {
            assert_abs_diff_eq!(geometry::euclidean_distance(&w[0], &w[1]), 100.0 / 63.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn resample_length_close_to_original_on_curves() {
        let stroke: Vec<Point> = (0..200)
            .map(|i| {
                let a = i as f32 * 0.05;
                Point::new(80.0 * a.cos(), 50.0 * a.sin())
            })
            .collect();
        let original = geometry::path_length(&stroke);
        let resampled = geometry::path_length(&resample(&stroke, 64));
        assert!((original - resampled).abs() / original < 0.01);
    }

    #[test]
    fn resample_zero_length_path() {
        let stroke = vec![Point::new(4.0, 4.0), Point::new(4.0, 4.0)];
        let resampled = resample(&stroke, 8);
        assert_eq!(resampled, vec![Point::new(4.0, 4.0); 8]);
    }

    #[test]
    fn degenerate_strokes_are_not_normalized() {
        let params = RecognizerParameters::default();
        assert!(Gesture::new(&[], "empty", &params).is_none());
        assert!(Gesture::new(&[Point::new(1.0, 1.0)], "dot", &params).is_none());
        assert!(Gesture::new(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)], "dot", &params).is_none());
        assert!(Gesture::new(&[Point::new(0.0, 0.0), Point::new(f32::NAN, 1.0)], "nan", &params).is_none());
        // finite points whose length overflows
        let huge = [Point::new(-f32::MAX, -f32::MAX), Point::new(f32::MAX, f32::MAX)];
        assert!(Gesture::new(&huge, "huge", &params).is_none());
    }

    #[test]
    fn tiny_strokes_normalize_like_large_ones() {
        let params = RecognizerParameters::default();
        let tiny: Vec<Point> = zigzag().iter().map(|p| Point::new(p.x * 1e-6, p.y * 1e-6)).collect();
        assert!(!Gesture::is_degenerate(&tiny));
        let a = Gesture::new(&zigzag(), "a", &params).unwrap();
        let b = Gesture::new(&tiny, "b", &params).unwrap();
        assert!(geometry::path_distance(&a.points, &b.points) < 0.5);
    }

    #[test]
    fn normalized_gesture_is_centered_and_fills_square() {
        let params = RecognizerParameters::default();
        let g = Gesture::new(&zigzag(), "zigzag", &params).unwrap();
        assert_eq!(g.points.len(), params.num_points);

        let c = geometry::centroid(&g.points);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-3);

        let b = geometry::bounding_box(&g.points);
        assert_abs_diff_eq!(b.width(), params.square_size, epsilon = 1e-2);
        assert_abs_diff_eq!(b.height(), params.square_size, epsilon = 1e-2);

        // first point sits on the positive x axis
        assert_abs_diff_eq!(g.points[0].y, 0.0, epsilon = 1e-2);
        assert!(g.points[0].x > 0.0);
    }

    fn ellipse(rx: f32, ry: f32) -> Vec<Point> {
        (0..=64)
            .map(|i| {
                let a = i as f32 / 64.0 * std::f32::consts::TAU;
                Point::new(rx * a.cos(), ry * a.sin())
            })
            .collect()
    }

    #[test]
    fn thin_strokes_fill_the_square_by_default() {
        let params = RecognizerParameters::default();
        let g = Gesture::new(&ellipse(200.0, 10.0), "ellipse", &params).unwrap();
        let b = geometry::bounding_box(&g.points);
        assert_abs_diff_eq!(b.width(), params.square_size, epsilon = 1e-2);
        assert_abs_diff_eq!(b.height(), params.square_size, epsilon = 1e-2);
    }

    #[test]
    fn line_extent_ratio_keeps_thin_strokes_thin() {
        let params = RecognizerParameters {
            min_extent_ratio: crate::parameters::LINE_EXTENT_RATIO,
            ..Default::default()
        };
        let g = Gesture::new(&ellipse(200.0, 10.0), "ellipse", &params).unwrap();
        let b = geometry::bounding_box(&g.points);
        assert_abs_diff_eq!(b.width(), params.square_size, epsilon = 1e-2);
        assert!(b.height() < params.square_size * 0.6, "{}", b.height());
    }

    #[test]
    fn straight_line_stays_flat() {
        let params = RecognizerParameters {
            min_extent_ratio: crate::parameters::LINE_EXTENT_RATIO,
            ..Default::default()
        };
        let line = [Point::new(0.0, 0.0), Point::new(70.0, 70.0)];
        let g = Gesture::new(&line, "line", &params).unwrap();
        for p in &g.points {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(p.y.abs() < 1.0);
        }
    }

    #[test]
    fn normalization_ignores_drawing_orientation() {
        let params = RecognizerParameters::default();
        let stroke = zigzag();
        let rotated = geometry::rotate_by(&stroke, 2.0);
        let a = Gesture::new(&stroke, "a", &params).unwrap();
        let b = Gesture::new(&rotated, "b", &params).unwrap();
        assert!(geometry::path_distance(&a.points, &b.points) < 0.5);
    }
}

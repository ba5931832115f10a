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

//! Geometric helpers shared by the normalization and matching steps.

use crate::point::Point;

/// Smallest bounding box side, as a fraction of the longer side, used as a divisor
pub const MIN_EXTENT_FRACTION: f32 = 1e-5;

/// Axis-aligned bounding box of a point sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Computes the Euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f32 {
    sqr_euclidean_distance(a, b).sqrt()
}

/// Computes the squared Euclidean distance between two points
pub fn sqr_euclidean_distance(a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Computes the path length for an array of points
pub fn path_length(points: &[Point]) -> f32 {
    points
        .windows(2)
        .map(|w| euclidean_distance(&w[0], &w[1]))
        .sum()
}

/// Computes the centroid for an array of points.
/// An empty array has its centroid at the origin.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f32;
    Point::new(cx / n, cy / n)
}

/// Computes the bounding box of an array of points
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    if points.is_empty() {
        return BoundingBox { min_x: 0.0, min_y: 0.0, max_x: 0.0, max_y: 0.0 };
    }
    BoundingBox { min_x, min_y, max_x, max_y }
}

/// Angle (radians) from the centroid of the points to the first point
pub fn indicative_angle(points: &[Point]) -> f32 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let c = centroid(points);
    (first.y - c.y).atan2(first.x - c.x)
}

/// Rotates the points by `radians` about their centroid
pub fn rotate_by(points: &[Point], radians: f32) -> Vec<Point> {
    let c = centroid(points);
    rotate_about(points, &c, radians)
}

/// Rotates the points by `radians` about `pivot`
pub fn rotate_about(points: &[Point], pivot: &Point, radians: f32) -> Vec<Point> {
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - pivot.x;
            let dy = p.y - pivot.y;
            Point::new(dx * cos - dy * sin + pivot.x, dx * sin + dy * cos + pivot.y)
        })
        .collect()
}

/// Average distance between corresponding points of two equally long paths
pub fn path_distance(points1: &[Point], points2: &[Point]) -> f32 {
    let n = points1.len().min(points2.len());
    if n == 0 {
        return f32::MAX;
    }
    let sum: f32 = points1
        .iter()
        .zip(points2)
        .map(|(a, b)| euclidean_distance(a, b))
        .sum();
    sum / n as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn path_length_ignores_repeated_samples() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 0.0),
        ];
        assert_abs_diff_eq!(path_length(&pts), 9.0);
    }

    #[test]
    fn indicative_angle_points_from_centroid_to_first_point() {
        let pts = [Point::new(1.0, 0.0), Point::new(-1.0, 0.0)];
        assert_abs_diff_eq!(indicative_angle(&pts), 0.0);

        let pts = [Point::new(0.0, 1.0), Point::new(0.0, -1.0)];
        assert_abs_diff_eq!(indicative_angle(&pts), FRAC_PI_2);
    }

    #[test]
    fn rotate_by_keeps_centroid() {
        let pts = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 3.0)];
        let rotated = rotate_by(&pts, 1.234);
        let before = centroid(&pts);
        let after = centroid(&rotated);
        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-5);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-5);
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let pts = [Point::new(1.0, 0.0)];
        let rotated = rotate_about(&pts, &Point::default(), FRAC_PI_2);
        assert_abs_diff_eq!(rotated[0].x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated[0].y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn bounding_box_of_single_point_is_empty() {
        let b = bounding_box(&[Point::new(2.0, 5.0)]);
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert_eq!(b.min_x, 2.0);
    }

    #[test]
    fn path_distance_is_average() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = [Point::new(0.0, 1.0), Point::new(1.0, 3.0)];
        assert_abs_diff_eq!(path_distance(&a, &b), 2.0);
    }
}

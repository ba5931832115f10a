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

//! Reference strokes of the primitives the sandbox turns into physics bodies.
//!
//! All closed shapes are traced counter-clockwise (y axis pointing up) and end where
//! they start.

use crate::point::Point;
use std::f32::consts::TAU;

pub const CIRCLE: &str = "circle";
pub const RECTANGLE: &str = "rectangle";
pub const TRIANGLE: &str = "triangle";
pub const LINE: &str = "line";

/// Circle of radius 100 sampled at `n` points, starting from its rightmost point
pub fn circle(n: usize) -> Vec<Point> {
    let n = n.max(3);
    (0..n)
        .map(|i| {
            let a = TAU * i as f32 / (n - 1) as f32;
            Point::new(100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect()
}

/// Rectangle starting at its bottom-left corner
pub fn rectangle(width: f32, height: f32) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
        Point::new(0.0, 0.0),
    ]
}

/// Equilateral triangle of side 200 starting at its bottom-left vertex
pub fn triangle() -> Vec<Point> {
    let h = 200.0 * 3f32.sqrt() / 2.0;
    vec![
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
        Point::new(100.0, h),
        Point::new(0.0, 0.0),
    ]
}

/// Horizontal segment of length 200
pub fn line() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)]
}

/// Built-in templates, in registration order
pub fn builtin_shapes() -> Vec<(&'static str, Vec<Point>)> {
    vec![
        (CIRCLE, circle(64)),
        (RECTANGLE, rectangle(200.0, 200.0)),
        (TRIANGLE, triangle()),
        (LINE, line()),
    ]
}

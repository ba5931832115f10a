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

//! $1 unistroke recognizer for sketched shapes.
//!
//! A stroke (the points sampled between pointer press and release) is resampled, rotated,
//! scaled and translated into a canonical form, then compared point by point with every
//! registered template. The closest template wins and its distance is reported as a score
//! in [0..1].
//!
//! Plain $1 scaling stretches every stroke to a square, which turns straight lines into
//! noise. Template sets that include a line opt into [`parameters::LINE_EXTENT_RATIO`]:
//!
//! ```
//! use unistroke_recognizer::{parameters, shapes, Point, Recognizer, RecognizerParameters};
//!
//! let params = RecognizerParameters {
//!     min_extent_ratio: parameters::LINE_EXTENT_RATIO,
//!     ..Default::default()
//! };
//! let recognizer = Recognizer::with_builtin_shapes(params).unwrap();
//! let stroke: Vec<Point> = (0..=20).map(|i| Point::new(i as f32 * 5.0, i as f32 * 2.0)).collect();
//! let result = recognizer.recognize(&stroke).unwrap();
//! assert_eq!(result.label, shapes::LINE);
//! ```

pub mod dollar_recognizer;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod library;
pub mod parameters;
pub mod point;
pub mod recognizer;
pub mod shapes;

pub use dollar_recognizer::{RecognitionResult, DEFAULT_ACCEPTANCE_THRESHOLD, NO_MATCH_LABEL};
pub use error::{RecognizeError, Result};
pub use gesture::Gesture;
pub use library::{TemplateDefinition, TemplateLibrary};
pub use parameters::RecognizerParameters;
pub use point::Point;
pub use recognizer::Recognizer;

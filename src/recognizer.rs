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
    dollar_recognizer::{self, RecognitionResult, NO_MATCH_LABEL},
    error::{RecognizeError, Result},
    gesture::Gesture,
    library::{TemplateDefinition, TemplateLibrary},
    parameters::RecognizerParameters,
    point::Point,
    shapes,
};
use log::warn;

/// Stroke recognition service: an immutable template library plus the `recognize` entry point.
///
/// Recognition only borrows the recognizer, so one instance can serve several threads at
/// once. Adding or removing templates needs `&mut self`; a host that does so while other
/// threads recognize has to wrap the recognizer in its own lock.
#[derive(Default)]
pub struct Recognizer {
    library: TemplateLibrary,
}

impl Recognizer {
    /// Recognizer with default parameters and no templates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(params: RecognizerParameters) -> Result<Self> {
        Ok(Self {
            library: TemplateLibrary::with_parameters(params)?,
        })
    }

    /// Recognizer preloaded with the circle, rectangle, triangle and line templates
    pub fn with_builtin_shapes(params: RecognizerParameters) -> Result<Self> {
        let mut recognizer = Self::with_parameters(params)?;
        for (label, stroke) in shapes::builtin_shapes() {
            recognizer.register_template(label, &stroke)?;
        }
        Ok(recognizer)
    }

    /// Loads a shape-definition asset
    pub fn from_definitions<I>(definitions: I, params: RecognizerParameters) -> Result<Self>
    where
        I: IntoIterator<Item = TemplateDefinition>,
    {
        let mut recognizer = Self::with_parameters(params)?;
        for def in definitions {
            recognizer.register_template(&def.label, &def.points)?;
        }
        Ok(recognizer)
    }

    pub fn register_template(&mut self, label: &str, stroke: &[Point]) -> Result<()> {
        self.library.register(label, stroke)
    }

    pub fn remove_template(&mut self, label: &str) -> Option<Gesture> {
        self.library.remove(label)
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn parameters(&self) -> &RecognizerParameters {
        self.library.parameters()
    }

    /// Classifies a stroke against the registered templates.
    ///
    /// An empty library is an error. A stroke that has no shape yet (fewer than two points,
    /// or all points identical) is not: it yields [`RecognitionResult::no_match`].
    pub fn recognize(&self, stroke: &[Point]) -> Result<RecognitionResult> {
        if self.library.is_empty() {
            warn!("recognition requested but no templates are configured");
            return Err(RecognizeError::NoTemplatesConfigured);
        }
        match Gesture::new(stroke, NO_MATCH_LABEL, self.library.parameters()) {
            Some(candidate) => dollar_recognizer::classify(&candidate, &self.library),
            None => {
                warn!("stroke of {} points has no shape to recognize", stroke.len());
                Ok(RecognitionResult::no_match())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shapes_are_registered_in_order() {
        let recognizer = Recognizer::with_builtin_shapes(RecognizerParameters::default()).unwrap();
        assert_eq!(
            recognizer.library().labels().collect::<Vec<_>>(),
            [shapes::CIRCLE, shapes::RECTANGLE, shapes::TRIANGLE, shapes::LINE]
        );
        assert_eq!(recognizer.parameters(), &RecognizerParameters::default());
    }

    #[test]
    fn short_strokes_do_not_match() {
        let recognizer = Recognizer::with_builtin_shapes(RecognizerParameters::default()).unwrap();
        assert_eq!(recognizer.recognize(&[]), Ok(RecognitionResult::no_match()));
        assert_eq!(
            recognizer.recognize(&[Point::new(1.0, 2.0)]),
            Ok(RecognitionResult::no_match())
        );
    }

    #[test]
    fn empty_library_wins_over_short_stroke() {
        let recognizer = Recognizer::new();
        assert_eq!(recognizer.recognize(&[]), Err(RecognizeError::NoTemplatesConfigured));
    }

    #[test]
    fn from_definitions_propagates_duplicates() {
        let defs = vec![
            TemplateDefinition { label: "line".into(), points: shapes::line() },
            TemplateDefinition { label: "line".into(), points: shapes::line() },
        ];
        let result = Recognizer::from_definitions(defs, RecognizerParameters::default());
        assert!(matches!(result, Err(RecognizeError::DuplicateLabel(label)) if label == "line"));
    }
}

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

use std::collections::HashMap;

use crate::{
    error::{RecognizeError, Result},
    gesture::Gesture,
    parameters::RecognizerParameters,
    point::Point,
};
use log::debug;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A raw, not yet normalized, template as stored in shape-definition assets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateDefinition {
    pub label: String,
    pub points: Vec<Point>,
}

struct Template {
    gesture: Gesture,
    stroke: Vec<Point>,
}

/// The set of reference gestures a candidate is compared against.
///
/// Every template is normalized once, with the library's parameters, when it is registered.
/// Labels are unique and registration order is kept: it decides ties during classification.
pub struct TemplateLibrary {
    params: RecognizerParameters,
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateLibrary {
    /// Empty library using the default parameters
    pub fn new() -> Self {
        Self {
            params: RecognizerParameters::default(),
            templates: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_parameters(params: RecognizerParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            templates: Vec::new(),
            index: HashMap::new(),
        })
    }

    pub fn parameters(&self) -> &RecognizerParameters {
        &self.params
    }

    /// Normalizes `stroke` and adds it under `label`.
    pub fn register(&mut self, label: &str, stroke: &[Point]) -> Result<()> {
        if self.index.contains_key(label) {
            return Err(RecognizeError::DuplicateLabel(label.into()));
        }
        let gesture = Gesture::new(stroke, label, &self.params).ok_or_else(|| {
            RecognizeError::InvalidTemplate {
                label: label.into(),
                points: stroke.len(),
            }
        })?;
        self.index.insert(label.into(), self.templates.len());
        self.templates.push(Template {
            gesture,
            stroke: stroke.to_vec(),
        });
        debug!("registered template {:?} ({} points)", label, stroke.len());
        Ok(())
    }

    /// Removes a template, keeping the order of the remaining ones.
    pub fn remove(&mut self, label: &str) -> Option<Gesture> {
        let position = self.index.remove(label)?;
        let removed = self.templates.remove(position);
        for i in self.index.values_mut() {
            if *i > position {
                *i -= 1;
            }
        }
        debug!("removed template {:?}", label);
        Some(removed.gesture)
    }

    pub fn get(&self, label: &str) -> Option<&Gesture> {
        self.index.get(label).map(|&i| &self.templates[i].gesture)
    }

    /// The stroke a template was registered with
    pub fn stroke(&self, label: &str) -> Option<&[Point]> {
        self.index
            .get(label)
            .map(|&i| self.templates[i].stroke.as_slice())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Normalized templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.templates.iter().map(|t| &t.gesture)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.gesture.name.as_str())
    }

    /// Raw strokes of every template, in registration order, ready to be saved as an asset
    pub fn definitions(&self) -> Vec<TemplateDefinition> {
        self.templates
            .iter()
            .map(|t| TemplateDefinition {
                label: t.gesture.name.clone(),
                points: t.stroke.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vee() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(5.0, -10.0), Point::new(10.0, 0.0)]
    }

    fn hook() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0), Point::new(4.0, 12.0)]
    }

    #[test]
    fn keeps_registration_order() {
        let mut library = TemplateLibrary::new();
        library.register("vee", &vee()).unwrap();
        library.register("hook", &hook()).unwrap();
        library.register("line", &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
        assert_eq!(library.labels().collect::<Vec<_>>(), ["vee", "hook", "line"]);
        assert_eq!(library.len(), 3);
        assert_eq!(library.get("hook").unwrap().points.len(), library.parameters().num_points);
    }

    #[test]
    fn rejects_duplicate_labels() {
        let mut library = TemplateLibrary::new();
        library.register("vee", &vee()).unwrap();
        assert_eq!(
            library.register("vee", &hook()),
            Err(RecognizeError::DuplicateLabel("vee".into()))
        );
        assert_eq!(library.stroke("vee").unwrap(), vee().as_slice());
    }

    #[test]
    fn rejects_degenerate_templates() {
        let mut library = TemplateLibrary::new();
        let result = library.register("dot", &[Point::new(3.0, 3.0), Point::new(3.0, 3.0)]);
        assert_eq!(
            result,
            Err(RecognizeError::InvalidTemplate { label: "dot".into(), points: 2 })
        );
        assert!(library.is_empty());
    }

    #[test]
    fn remove_reindexes_remaining_templates() {
        let mut library = TemplateLibrary::new();
        library.register("vee", &vee()).unwrap();
        library.register("hook", &hook()).unwrap();
        library.register("line", &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();

        assert_eq!(library.remove("vee").map(|g| g.name), Some("vee".to_string()));
        assert!(library.remove("vee").is_none());
        assert_eq!(library.get("line").unwrap().name, "line");
        assert_eq!(library.stroke("hook").unwrap(), hook().as_slice());
        assert_eq!(library.labels().collect::<Vec<_>>(), ["hook", "line"]);
    }

    #[test]
    fn invalid_parameters_are_refused() {
        let params = RecognizerParameters { num_points: 0, ..Default::default() };
        assert!(TemplateLibrary::with_parameters(params).is_err());
    }

    #[test]
    fn definitions_round_trip_raw_strokes() {
        let mut library = TemplateLibrary::new();
        library.register("vee", &vee()).unwrap();
        let defs = library.definitions();
        assert_eq!(defs, vec![TemplateDefinition { label: "vee".into(), points: vee() }]);
    }
}

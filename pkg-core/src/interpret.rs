// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interpretation engine.
//!
//! Renders an [`AnnotatedStatement`] echoed by the API back into a
//! human-readable sentence: facts become "This statement is a fact about
//! {subject}", preferences become polarity wording, and the viewer's own
//! URI (or a literal "I") is replaced with "you".

use url::Url;

use crate::annotation::{AnnotatedStatement, Annotation, TripleElement};

/// Interpret an annotated statement from the viewer's perspective.
///
/// Returns `None` when no interpretation can be produced: a missing or
/// malformed subject slot, a preference topic without a value, or a
/// preference weight other than -1 or +1. Malformed input degrades to
/// omission, never a panic.
pub fn interpret(data: &AnnotatedStatement, viewer_uri: &str) -> Option<String> {
    let subject = data.triple.as_ref()?.subject.as_ref()?.display_name()?;
    let subject = if subject == "I" || subject == "i" || subject == viewer_uri {
        "you"
    } else {
        subject
    };

    match &data.preference {
        None => Some(format!("This statement is a fact about {}", subject)),
        Some(preference) => {
            let object = topic_label(&preference.topic)?;
            if preference.weight == -1.0 {
                Some(format!(
                    "{} expressed a negative preference towards \"{}\"",
                    subject, object
                ))
            } else if preference.weight == 1.0 {
                Some(format!(
                    "{} expressed a positive preference towards \"{}\"",
                    subject, object
                ))
            } else {
                None
            }
        }
    }
}

/// Interpret and wrap the sentence as display markup.
pub fn interpret_html(data: &AnnotatedStatement, viewer_uri: &str) -> Option<String> {
    interpret(data, viewer_uri).map(|sentence| format!("<p> Interpretation: {}.</p>", sentence))
}

/// Display text for a preference topic.
///
/// String topics that parse as absolute URIs are rendered as an anchor
/// whose label is the last path segment with underscores replaced by
/// spaces.
fn topic_label(topic: &Annotation) -> Option<String> {
    match topic.value.as_ref()? {
        TripleElement::Concept(concept) => Some(concept.description.clone()),
        TripleElement::Reference(value) => {
            if Url::parse(value).is_ok() {
                Some(hyperlink(value))
            } else {
                Some(value.clone())
            }
        }
    }
}

fn hyperlink(uri: &str) -> String {
    let label = uri.rsplit('/').next().unwrap_or(uri).replace('_', " ");
    format!("<a href='{}'>{}</a>", uri, label)
}

/// Display state for an echoed statement and its interpretation.
///
/// Each [`update`](StatementView::update) fully replaces the previous
/// rendering, so re-interpreting new input never appends to stale output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementView {
    statement: String,
    interpretation: Option<String>,
}

impl StatementView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &AnnotatedStatement, viewer_uri: &str) {
        self.statement = data.statement.clone();
        self.interpretation = interpret_html(data, viewer_uri);
    }

    /// The verbatim statement text shown next to the interpretation.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn interpretation(&self) -> Option<&str> {
        self.interpretation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Concept, Preference, Triple};

    fn statement_with_subject(subject: Annotation) -> AnnotatedStatement {
        AnnotatedStatement {
            statement: "test statement".to_string(),
            triple: Some(Triple {
                subject: Some(subject),
                ..Default::default()
            }),
            preference: None,
        }
    }

    fn with_preference(
        mut data: AnnotatedStatement,
        topic: TripleElement,
        weight: f64,
    ) -> AnnotatedStatement {
        data.preference = Some(Preference {
            topic: Annotation::from(topic),
            weight,
        });
        data
    }

    #[test]
    fn fact_about_reference_subject() {
        let data = statement_with_subject(Annotation {
            reference: Some("http://ex/alice".to_string()),
            value: None,
        });
        assert_eq!(
            interpret(&data, "http://example.org/viewer").as_deref(),
            Some("This statement is a fact about http://ex/alice")
        );
    }

    #[test]
    fn literal_i_becomes_you() {
        let data = with_preference(
            statement_with_subject(Annotation::from(TripleElement::reference("I"))),
            TripleElement::reference("pizza"),
            1.0,
        );
        assert_eq!(
            interpret(&data, "http://example.org/viewer").as_deref(),
            Some("you expressed a positive preference towards \"pizza\"")
        );
    }

    #[test]
    fn viewer_uri_becomes_you() {
        let data = statement_with_subject(Annotation::from(TripleElement::reference(
            "http://example.org/viewer",
        )));
        assert_eq!(
            interpret(&data, "http://example.org/viewer").as_deref(),
            Some("This statement is a fact about you")
        );
    }

    #[test]
    fn uri_topic_renders_as_anchor() {
        let data = with_preference(
            statement_with_subject(Annotation::from(TripleElement::reference("I"))),
            TripleElement::reference("http://ex.org/Blue_Jazz"),
            -1.0,
        );
        assert_eq!(
            interpret(&data, "").as_deref(),
            Some(
                "you expressed a negative preference towards \
                 \"<a href='http://ex.org/Blue_Jazz'>Blue Jazz</a>\""
            )
        );
    }

    #[test]
    fn concept_topic_uses_description() {
        let data = with_preference(
            statement_with_subject(Annotation::from(TripleElement::reference("i"))),
            TripleElement::Concept(Concept::new("movies with Tom Cruise")),
            1.0,
        );
        assert_eq!(
            interpret(&data, "").as_deref(),
            Some("you expressed a positive preference towards \"movies with Tom Cruise\"")
        );
    }

    #[test]
    fn unsupported_weight_produces_nothing() {
        for weight in [0.0, 0.5, -0.5, f64::NAN] {
            let data = with_preference(
                statement_with_subject(Annotation::from(TripleElement::reference("I"))),
                TripleElement::reference("pizza"),
                weight,
            );
            assert_eq!(interpret(&data, ""), None);
        }
    }

    #[test]
    fn malformed_input_degrades_to_none() {
        // No triple at all.
        assert_eq!(interpret(&AnnotatedStatement::default(), ""), None);
        // A subject slot with neither reference nor value.
        let data = statement_with_subject(Annotation::default());
        assert_eq!(interpret(&data, ""), None);
        // A preference topic without a value.
        let mut data = statement_with_subject(Annotation::from(TripleElement::reference("I")));
        data.preference = Some(Preference {
            topic: Annotation::default(),
            weight: 1.0,
        });
        assert_eq!(interpret(&data, ""), None);
    }

    #[test]
    fn html_wraps_the_sentence() {
        let data = statement_with_subject(Annotation::from(TripleElement::reference("pizza")));
        assert_eq!(
            interpret_html(&data, "").as_deref(),
            Some("<p> Interpretation: This statement is a fact about pizza.</p>")
        );
    }

    #[test]
    fn view_replaces_previous_interpretation() {
        let mut view = StatementView::new();
        let first = statement_with_subject(Annotation::from(TripleElement::reference("pizza")));
        view.update(&first, "");
        let rendered = view.interpretation().map(str::to_string);
        assert!(rendered.is_some());

        // New input with an unsupported weight clears the rendering
        // instead of appending to it.
        let second = with_preference(first, TripleElement::reference("pizza"), 0.0);
        view.update(&second, "");
        assert_eq!(view.interpretation(), None);
        assert_eq!(view.statement(), "test statement");
    }
}

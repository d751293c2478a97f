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

//! Annotation model for personal knowledge graph statements.
//!
//! A statement is annotated with a subject-predicate-object triple and an
//! optional preference. Each triple slot holds either a URI reference or an
//! inline [`Concept`] when no stable identifier exists.

use serde::{Deserialize, Serialize};

/// An inline, URI-less description of an entity.
///
/// Concepts follow the SKOS vocabulary: a free-text description plus
/// related/broader/narrower entity relations. An empty description means the
/// concept is still unset; that state is representable and only rejected at
/// submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub description: String,
    #[serde(default)]
    pub related_entities: Vec<String>,
    #[serde(default)]
    pub broader_entities: Vec<String>,
    #[serde(default)]
    pub narrower_entities: Vec<String>,
}

impl Concept {
    /// Create a concept with a description and no relations.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// True while no description has been entered.
    pub fn is_unset(&self) -> bool {
        self.description.is_empty()
    }
}

/// A value usable in subject, predicate or object position.
///
/// On the wire a reference is a bare JSON string and a concept is an object
/// carrying all four concept fields, so the two variants deserialize without
/// a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripleElement {
    Reference(String),
    Concept(Concept),
}

impl TripleElement {
    /// Create a reference element from a URI or literal string.
    pub fn reference(uri: impl Into<String>) -> Self {
        TripleElement::Reference(uri.into())
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            TripleElement::Reference(uri) => Some(uri),
            TripleElement::Concept(_) => None,
        }
    }

    pub fn as_concept(&self) -> Option<&Concept> {
        match self {
            TripleElement::Reference(_) => None,
            TripleElement::Concept(concept) => Some(concept),
        }
    }
}

impl Default for TripleElement {
    fn default() -> Self {
        TripleElement::Reference(String::new())
    }
}

impl From<&str> for TripleElement {
    fn from(uri: &str) -> Self {
        TripleElement::Reference(uri.to_string())
    }
}

impl From<String> for TripleElement {
    fn from(uri: String) -> Self {
        TripleElement::Reference(uri)
    }
}

impl From<Concept> for TripleElement {
    fn from(concept: Concept) -> Self {
        TripleElement::Concept(concept)
    }
}

/// A triple slot as echoed by the API.
///
/// The API may return a raw `reference` string, a resolved `value`, both, or
/// neither when annotation failed. Consumers must tolerate every combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TripleElement>,
}

impl Annotation {
    /// The human-readable name of this slot.
    ///
    /// A non-empty reference wins; otherwise a string value is used as-is and
    /// a concept value contributes its description. Returns `None` when the
    /// slot carries neither shape.
    pub fn display_name(&self) -> Option<&str> {
        if let Some(reference) = self.reference.as_deref().filter(|r| !r.is_empty()) {
            return Some(reference);
        }
        match &self.value {
            Some(TripleElement::Reference(value)) => Some(value),
            Some(TripleElement::Concept(concept)) => Some(&concept.description),
            None => None,
        }
    }
}

impl From<TripleElement> for Annotation {
    fn from(value: TripleElement) -> Self {
        Annotation {
            reference: None,
            value: Some(value),
        }
    }
}

/// Subject, predicate and object annotations of a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Annotation>,
}

/// A preference attached to a statement.
///
/// The topic refers to the object of the originating triple; the weight is a
/// signed value on the [-1, 1] scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub topic: Annotation,
    pub weight: f64,
}

/// An annotated statement as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedStatement {
    pub statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triple: Option<Triple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_serializes_to_bare_string() {
        let element = TripleElement::reference("http://example.org/Tom_Cruise");
        let wire = serde_json::to_string(&element).unwrap();
        assert_eq!(wire, "\"http://example.org/Tom_Cruise\"");
    }

    #[test]
    fn concept_serializes_with_all_four_fields() {
        let element = TripleElement::Concept(Concept::new("movies with Tom Cruise"));
        let wire = serde_json::to_value(&element).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "description": "movies with Tom Cruise",
                "related_entities": [],
                "broader_entities": [],
                "narrower_entities": [],
            })
        );
    }

    #[test]
    fn concept_deserializes_with_missing_lists() {
        let element: TripleElement =
            serde_json::from_str(r#"{"description": "jazz"}"#).unwrap();
        let concept = element.as_concept().unwrap();
        assert_eq!(concept.description, "jazz");
        assert!(concept.related_entities.is_empty());
    }

    #[test]
    fn display_name_prefers_non_empty_reference() {
        let annotation = Annotation {
            reference: Some("http://example.org/alice".to_string()),
            value: Some(TripleElement::reference("ignored")),
        };
        assert_eq!(annotation.display_name(), Some("http://example.org/alice"));
    }

    #[test]
    fn display_name_falls_back_past_empty_reference() {
        let annotation = Annotation {
            reference: Some(String::new()),
            value: Some(TripleElement::Concept(Concept::new("jazz music"))),
        };
        assert_eq!(annotation.display_name(), Some("jazz music"));
    }

    #[test]
    fn display_name_is_none_for_empty_slot() {
        assert_eq!(Annotation::default().display_name(), None);
    }

    fn concept_strategy() -> impl Strategy<Value = Concept> {
        let entities = proptest::collection::vec("[a-zA-Z0-9:/._-]{1,20}", 0..4);
        (".{0,30}", entities.clone(), entities.clone(), entities).prop_map(
            |(description, related, broader, narrower)| Concept {
                description,
                related_entities: related,
                broader_entities: broader,
                narrower_entities: narrower,
            },
        )
    }

    fn triple_element_strategy() -> impl Strategy<Value = TripleElement> {
        prop_oneof![
            ".{0,40}".prop_map(TripleElement::Reference),
            concept_strategy().prop_map(TripleElement::Concept),
        ]
    }

    proptest! {
        #[test]
        fn triple_element_round_trips(element in triple_element_strategy()) {
            let wire = serde_json::to_string(&element).unwrap();
            let decoded: TripleElement = serde_json::from_str(&wire).unwrap();
            prop_assert_eq!(&decoded, &element);
            prop_assert_eq!(serde_json::to_string(&decoded).unwrap(), wire);
        }
    }
}

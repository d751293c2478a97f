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

//! Outgoing submission payloads and their validation.
//!
//! A [`Statement`] is assembled entirely client-side from form state and has
//! no identity until the API assigns one. Validation happens once, right
//! before submission; a failure sends nothing.

use serde::{Deserialize, Serialize};

use crate::annotation::TripleElement;
use crate::error::ValidationError;

/// The graph owner on whose behalf submissions are made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub uri: String,
    pub username: String,
}

impl Owner {
    pub fn new(uri: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            username: username.into(),
        }
    }
}

/// An annotated statement submission for `POST`/`DELETE /statements`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub owner_uri: String,
    pub owner_username: String,
    pub description: String,
    pub subject: TripleElement,
    pub predicate: TripleElement,
    pub object: TripleElement,
    /// `None` means the statement carries no preference; the key is still
    /// sent on the wire as `null`.
    pub preference: Option<f64>,
    /// Back-reference to the statement this preference was derived from.
    #[serde(
        rename = "statementID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub statement_id: Option<String>,
}

impl Statement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.is_empty() {
            return Err(ValidationError::MissingField("Description"));
        }
        validate_slot(&self.subject, "Subject")?;
        validate_slot(&self.predicate, "Predicate")?;
        validate_slot(&self.object, "Object")?;
        if let Some(weight) = self.preference {
            validate_weight(weight)?;
        }
        Ok(())
    }
}

/// A bare fact for `POST`/`DELETE /facts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "subjectURI")]
    pub subject_uri: String,
    pub predicate: String,
    #[serde(rename = "objectURI")]
    pub object_uri: String,
}

impl Fact {
    pub fn new(
        subject_uri: impl Into<String>,
        predicate: impl Into<String>,
        object_uri: impl Into<String>,
    ) -> Self {
        Self {
            subject_uri: subject_uri.into(),
            predicate: predicate.into(),
            object_uri: object_uri.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject_uri.is_empty() {
            return Err(ValidationError::MissingField("Subject URI"));
        }
        if self.predicate.is_empty() {
            return Err(ValidationError::MissingField("Predicate"));
        }
        if self.object_uri.is_empty() {
            return Err(ValidationError::MissingField("Object URI"));
        }
        Ok(())
    }
}

/// A standalone preference submission for `POST /preference`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSubmission {
    pub owner_uri: String,
    pub owner_username: String,
    pub subject: String,
    pub object: TripleElement,
    pub preference: f64,
    #[serde(
        rename = "statementID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub statement_id: Option<String>,
}

impl PreferenceSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.is_empty() {
            return Err(ValidationError::MissingField("Subject"));
        }
        validate_weight(self.preference)?;
        match &self.object {
            TripleElement::Reference(uri) if uri.is_empty() => {
                Err(ValidationError::MissingField("Object"))
            }
            TripleElement::Concept(concept) if concept.is_unset() => {
                Err(ValidationError::MissingConceptDescription("Object"))
            }
            _ => Ok(()),
        }
    }
}

fn validate_slot(element: &TripleElement, label: &'static str) -> Result<(), ValidationError> {
    match element {
        // A bare reference slot may stay empty on statements; the
        // description alone is enough to store one.
        TripleElement::Reference(_) => Ok(()),
        TripleElement::Concept(concept) if concept.is_unset() => {
            Err(ValidationError::MissingConceptDescription(label))
        }
        TripleElement::Concept(_) => Ok(()),
    }
}

pub(crate) fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if weight.is_nan() {
        return Err(ValidationError::MissingPreferenceValue);
    }
    if !(-1.0..=1.0).contains(&weight) {
        return Err(ValidationError::PreferenceOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Concept;

    fn valid_statement() -> Statement {
        Statement {
            owner_uri: "http://example.org/alice".to_string(),
            owner_username: "alice".to_string(),
            description: "I dislike all movies with the actor Tom Cruise.".to_string(),
            subject: TripleElement::reference("http://example.org/alice"),
            predicate: TripleElement::reference("dislike"),
            object: TripleElement::Concept(Concept::new("all movies with the actor Tom Cruise")),
            preference: Some(-1.0),
            statement_id: None,
        }
    }

    #[test]
    fn valid_statement_passes() {
        assert!(valid_statement().validate().is_ok());
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut statement = valid_statement();
        statement.description.clear();
        assert_eq!(
            statement.validate(),
            Err(ValidationError::MissingField("Description"))
        );
    }

    #[test]
    fn concept_slot_requires_description() {
        let mut statement = valid_statement();
        statement.object = TripleElement::Concept(Concept::default());
        assert_eq!(
            statement.validate(),
            Err(ValidationError::MissingConceptDescription("Object"))
        );
    }

    #[test]
    fn nan_weight_is_rejected() {
        let mut statement = valid_statement();
        statement.preference = Some(f64::NAN);
        assert_eq!(
            statement.validate(),
            Err(ValidationError::MissingPreferenceValue)
        );
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        for weight in [-1.5, 1.1, f64::INFINITY, f64::NEG_INFINITY] {
            let mut statement = valid_statement();
            statement.preference = Some(weight);
            assert_eq!(
                statement.validate(),
                Err(ValidationError::PreferenceOutOfRange)
            );
        }
    }

    #[test]
    fn boundary_weights_pass() {
        for weight in [-1.0, 0.0, 1.0] {
            let mut statement = valid_statement();
            statement.preference = Some(weight);
            assert!(statement.validate().is_ok());
        }
    }

    #[test]
    fn statement_wire_format() {
        let statement = valid_statement();
        let wire = serde_json::to_value(&statement).unwrap();
        assert_eq!(wire["subject"], "http://example.org/alice");
        assert_eq!(
            wire["object"]["description"],
            "all movies with the actor Tom Cruise"
        );
        assert_eq!(wire["preference"], -1.0);
        // No origin statement: the key must be absent, not null.
        assert!(wire.get("statementID").is_none());
    }

    #[test]
    fn unset_preference_serializes_as_null() {
        let mut statement = valid_statement();
        statement.preference = None;
        let wire = serde_json::to_value(&statement).unwrap();
        assert!(wire["preference"].is_null());
    }

    #[test]
    fn fact_requires_all_three_uris() {
        let fact = Fact::new("http://example.org/alice", "likes", "");
        assert_eq!(
            fact.validate(),
            Err(ValidationError::MissingField("Object URI"))
        );
        let fact = Fact::new("http://example.org/alice", "likes", "http://example.org/jazz");
        assert!(fact.validate().is_ok());
    }

    #[test]
    fn fact_wire_keys() {
        let fact = Fact::new("http://s", "p", "http://o");
        let wire = serde_json::to_value(&fact).unwrap();
        assert_eq!(wire["subjectURI"], "http://s");
        assert_eq!(wire["objectURI"], "http://o");
    }

    #[test]
    fn preference_submission_validation_order() {
        let submission = PreferenceSubmission {
            owner_uri: String::new(),
            owner_username: String::new(),
            subject: String::new(),
            object: TripleElement::default(),
            preference: f64::NAN,
            statement_id: None,
        };
        // Subject is reported before the weight or the object.
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingField("Subject"))
        );

        let submission = PreferenceSubmission {
            subject: "http://example.org/alice".to_string(),
            ..submission
        };
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingPreferenceValue)
        );

        let submission = PreferenceSubmission {
            preference: 1.0,
            ..submission
        };
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingField("Object"))
        );
    }
}

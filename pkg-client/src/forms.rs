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

//! Annotation form controllers.
//!
//! Pure state machines that assemble submission payloads from user input.
//! All render-relevant attributes (disabled flags, placeholders, pending
//! indicators, banner messages) are stored state; nothing is mutated
//! imperatively at render time. Submitting validates first, keeps at most
//! one request in flight per form, and either clears the fields on success
//! or preserves them for correction on failure.

use pkg_core::{Concept, Fact, Owner, PreferenceSubmission, Statement, TripleElement};

use crate::client::PkgClient;

const SUBJECT_PLACEHOLDER: &str = "Enter subject URI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitAction {
    Add,
    Delete,
}

/// Info/error banner state shown above a form.
///
/// At most one side is set at a time; both messages are server or
/// validation wording, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    info: String,
    error: String,
}

impl FormStatus {
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.info = message.into();
        self.error.clear();
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.info.clear();
    }
}

/// Keystroke buffer for an inline concept.
///
/// The three entity lists are kept as raw comma-separated text while the
/// user types and are only split when the concept is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptDraft {
    pub description: String,
    pub related_entities: String,
    pub broader_entities: String,
    pub narrower_entities: String,
}

impl ConceptDraft {
    /// Split the entity buffers into a concept. Tokens are trimmed and
    /// empty ones dropped, so empty source text yields an empty list.
    pub fn to_concept(&self) -> Concept {
        Concept {
            description: self.description.clone(),
            related_entities: split_entities(&self.related_entities),
            broader_entities: split_entities(&self.broader_entities),
            narrower_entities: split_entities(&self.narrower_entities),
        }
    }
}

fn split_entities(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// State machine for one annotation slot (predicate or object).
///
/// The "Concept" switch toggles between the reference and concept
/// representations. Both buffers are kept while the form is open, so
/// toggling away and back restores whatever was entered before; only the
/// active buffer is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleElementField {
    concept_mode: bool,
    reference: String,
    concept: ConceptDraft,
}

impl TripleElementField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the "Concept" switch. The inactive buffer is preserved.
    pub fn set_concept_mode(&mut self, enabled: bool) {
        self.concept_mode = enabled;
    }

    pub fn concept_mode(&self) -> bool {
        self.concept_mode
    }

    pub fn set_reference(&mut self, text: impl Into<String>) {
        self.reference = text.into();
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn concept(&self) -> &ConceptDraft {
        &self.concept
    }

    pub fn concept_mut(&mut self) -> &mut ConceptDraft {
        &mut self.concept
    }

    /// Serialize the active representation.
    pub fn value(&self) -> TripleElement {
        if self.concept_mode {
            TripleElement::Concept(self.concept.to_concept())
        } else {
            TripleElement::Reference(self.reference.clone())
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Subject input with the "Subject is Me" toggle.
///
/// While the toggle is on, the field is force-set to the owner URI, shown
/// as read-only with the URI as placeholder, and text edits are ignored.
/// Turning the toggle off clears the field back to empty editable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectField {
    text: String,
    is_me: bool,
    placeholder: String,
}

impl Default for SubjectField {
    fn default() -> Self {
        Self {
            text: String::new(),
            is_me: false,
            placeholder: SUBJECT_PLACEHOLDER.to_string(),
        }
    }
}

impl SubjectField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle "Subject is Me". Idempotent: on/off/on restores the owner
    /// URI for any owner, including one with an empty URI.
    pub fn set_me(&mut self, owner: &Owner, enabled: bool) {
        self.is_me = enabled;
        if enabled {
            self.text = owner.uri.clone();
            self.placeholder = owner.uri.clone();
        } else {
            self.text.clear();
            self.placeholder = SUBJECT_PLACEHOLDER.to_string();
        }
    }

    pub fn is_me(&self) -> bool {
        self.is_me
    }

    /// Edit the subject text. Ignored while the field is disabled.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if !self.is_me {
            self.text = text.into();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the input is rendered read-only.
    pub fn is_disabled(&self) -> bool {
        self.is_me
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Form for adding or deleting an annotated statement.
#[derive(Debug, Default)]
pub struct StatementForm {
    description: String,
    subject: SubjectField,
    predicate: TripleElementField,
    object: TripleElementField,
    preference: Option<f64>,
    status: FormStatus,
    submitting: bool,
}

impl StatementForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn subject(&self) -> &SubjectField {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut SubjectField {
        &mut self.subject
    }

    pub fn predicate(&self) -> &TripleElementField {
        &self.predicate
    }

    pub fn predicate_mut(&mut self) -> &mut TripleElementField {
        &mut self.predicate
    }

    pub fn object(&self) -> &TripleElementField {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut TripleElementField {
        &mut self.object
    }

    /// Set the preference weight. `NaN` (an empty number input) clears it.
    pub fn set_preference(&mut self, weight: Option<f64>) {
        self.preference = weight.filter(|w| !w.is_nan());
    }

    pub fn preference(&self) -> Option<f64> {
        self.preference
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// True while a request is in flight; the submit controls are
    /// disabled and a pending indicator is shown.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit as an add request.
    pub async fn add(&mut self, client: &PkgClient) {
        self.submit(client, SubmitAction::Add).await;
    }

    /// Submit as a delete request.
    pub async fn delete(&mut self, client: &PkgClient) {
        self.submit(client, SubmitAction::Delete).await;
    }

    async fn submit(&mut self, client: &PkgClient, action: SubmitAction) {
        if self.submitting {
            return;
        }
        let statement = self.to_statement(client.owner());
        if let Err(error) = statement.validate() {
            self.status.set_error(error.to_string());
            return;
        }

        self.submitting = true;
        let result = match action {
            SubmitAction::Add => client.add_statement(&statement).await,
            SubmitAction::Delete => client.delete_statement(&statement).await,
        };
        self.submitting = false;

        match result {
            Ok(response) => {
                self.reset_fields();
                self.status.set_info(response.message);
            }
            Err(error) => self.status.set_error(error.to_string()),
        }
    }

    fn to_statement(&self, owner: &Owner) -> Statement {
        Statement {
            owner_uri: owner.uri.clone(),
            owner_username: owner.username.clone(),
            description: self.description.clone(),
            subject: TripleElement::reference(self.subject.text()),
            predicate: self.predicate.value(),
            object: self.object.value(),
            preference: self.preference,
            statement_id: None,
        }
    }

    // Clears the inputs but not the banner, so the confirmation message
    // survives the reset.
    fn reset_fields(&mut self) {
        self.description.clear();
        self.subject.clear();
        self.predicate.clear();
        self.object.clear();
        self.preference = None;
    }
}

/// Form for adding a standalone preference, optionally derived from an
/// existing statement.
#[derive(Debug, Default)]
pub struct PreferenceForm {
    subject: SubjectField,
    object: TripleElementField,
    weight: Option<f64>,
    statement_id: String,
    status: FormStatus,
    submitting: bool,
}

impl PreferenceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> &SubjectField {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut SubjectField {
        &mut self.subject
    }

    pub fn object(&self) -> &TripleElementField {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut TripleElementField {
        &mut self.object
    }

    /// Set the preference weight. `NaN` (an empty number input) clears it.
    pub fn set_weight(&mut self, weight: Option<f64>) {
        self.weight = weight.filter(|w| !w.is_nan());
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Origin statement this preference was derived from, if any.
    pub fn set_statement_id(&mut self, id: impl Into<String>) {
        self.statement_id = id.into();
    }

    pub fn statement_id(&self) -> &str {
        &self.statement_id
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the preference.
    pub async fn add(&mut self, client: &PkgClient) {
        if self.submitting {
            return;
        }
        let submission = self.to_submission(client.owner());
        if let Err(error) = submission.validate() {
            self.status.set_error(error.to_string());
            return;
        }

        self.submitting = true;
        let result = client.add_preference(&submission).await;
        self.submitting = false;

        match result {
            Ok(response) => {
                self.reset_fields();
                self.status.set_info(response.message);
            }
            Err(error) => self.status.set_error(error.to_string()),
        }
    }

    fn to_submission(&self, owner: &Owner) -> PreferenceSubmission {
        PreferenceSubmission {
            owner_uri: owner.uri.clone(),
            owner_username: owner.username.clone(),
            subject: self.subject.text().to_string(),
            object: self.object.value(),
            // A missing weight is carried as NaN so validation reports it
            // as the unfilled field.
            preference: self.weight.unwrap_or(f64::NAN),
            statement_id: if self.statement_id.is_empty() {
                None
            } else {
                Some(self.statement_id.clone())
            },
        }
    }

    fn reset_fields(&mut self) {
        self.subject.clear();
        self.object.clear();
        self.weight = None;
        self.statement_id.clear();
    }
}

/// Form for adding or retracting a bare fact.
#[derive(Debug, Default)]
pub struct FactForm {
    subject_uri: String,
    predicate: String,
    object_uri: String,
    status: FormStatus,
    submitting: bool,
}

impl FactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_subject_uri(&mut self, uri: impl Into<String>) {
        self.subject_uri = uri.into();
    }

    pub fn subject_uri(&self) -> &str {
        &self.subject_uri
    }

    pub fn set_predicate(&mut self, predicate: impl Into<String>) {
        self.predicate = predicate.into();
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn set_object_uri(&mut self, uri: impl Into<String>) {
        self.object_uri = uri.into();
    }

    pub fn object_uri(&self) -> &str {
        &self.object_uri
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn add(&mut self, client: &PkgClient) {
        self.submit(client, SubmitAction::Add).await;
    }

    pub async fn delete(&mut self, client: &PkgClient) {
        self.submit(client, SubmitAction::Delete).await;
    }

    async fn submit(&mut self, client: &PkgClient, action: SubmitAction) {
        if self.submitting {
            return;
        }
        let fact = Fact::new(&self.subject_uri, &self.predicate, &self.object_uri);
        if let Err(error) = fact.validate() {
            self.status.set_error(error.to_string());
            return;
        }

        self.submitting = true;
        let result = match action {
            SubmitAction::Add => client.add_fact(&fact).await,
            SubmitAction::Delete => client.delete_fact(&fact).await,
        };
        self.submitting = false;

        match result {
            Ok(response) => {
                self.reset_fields();
                self.status.set_info(response.message);
            }
            Err(error) => self.status.set_error(error.to_string()),
        }
    }

    fn reset_fields(&mut self) {
        self.subject_uri.clear();
        self.predicate.clear();
        self.object_uri.clear();
    }
}

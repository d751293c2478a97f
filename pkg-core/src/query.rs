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

//! Population query builder.
//!
//! The `/population` endpoint accepts a textual query in the grammar
//! `Type: [fact|preference] Subject: [me|owner|URI] Predicate: [URI]
//! Object: [URI|Literal] Preference: [value]`. Fields after `Type` are
//! optional depending on the query type, but their relative order must be
//! preserved. The query is parsed server-side; this builder only renders
//! it. Field values must not contain spaces.

use std::fmt;

/// Subject of a population query. `Me` and `Owner` are resolved to the
/// owner URI by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulationSubject {
    Me,
    Owner,
    Uri(String),
}

impl fmt::Display for PopulationSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopulationSubject::Me => write!(f, "me"),
            PopulationSubject::Owner => write!(f, "owner"),
            PopulationSubject::Uri(uri) => write!(f, "{}", uri),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryType {
    Fact,
    Preference,
}

impl QueryType {
    fn as_str(&self) -> &'static str {
        match self {
            QueryType::Fact => "fact",
            QueryType::Preference => "preference",
        }
    }
}

/// A population query in the server's textual grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationQuery {
    query_type: QueryType,
    subject: PopulationSubject,
    predicate: Option<String>,
    object: Option<String>,
    preference: Option<f64>,
}

impl PopulationQuery {
    /// A fact query: subject, predicate and object are all required.
    pub fn fact(
        subject: PopulationSubject,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            query_type: QueryType::Fact,
            subject,
            predicate: Some(predicate.into()),
            object: Some(object.into()),
            preference: None,
        }
    }

    /// A preference query: subject, object and weight are required, the
    /// predicate is implied by the preference vocabulary.
    pub fn preference(subject: PopulationSubject, object: impl Into<String>, weight: f64) -> Self {
        Self {
            query_type: QueryType::Preference,
            subject,
            predicate: None,
            object: Some(object.into()),
            preference: Some(weight),
        }
    }
}

impl fmt::Display for PopulationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}", self.query_type.as_str())?;
        write!(f, " Subject: {}", self.subject)?;
        if let Some(predicate) = &self.predicate {
            write!(f, " Predicate: {}", predicate)?;
        }
        if let Some(object) = &self.object {
            write!(f, " Object: {}", object)?;
        }
        if let Some(preference) = self.preference {
            write!(f, " Preference: {}", preference)?;
        }
        Ok(())
    }
}

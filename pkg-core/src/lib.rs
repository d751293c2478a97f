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

//! # PKG Core
//!
//! Data model and pure logic for personal knowledge graph clients: the
//! Concept/TripleElement annotation model, outgoing submission payloads
//! with their validation, the interpretation engine that renders echoed
//! statements as sentences, and the population query builder.
//!
//! All I/O lives in the companion `pkg-client` crate.

pub mod annotation;
pub mod error;
pub mod interpret;
pub mod query;
pub mod statement;

pub use annotation::{AnnotatedStatement, Annotation, Concept, Preference, Triple, TripleElement};
pub use error::ValidationError;
pub use interpret::{interpret, interpret_html, StatementView};
pub use query::{PopulationQuery, PopulationSubject};
pub use statement::{Fact, Owner, PreferenceSubmission, Statement};

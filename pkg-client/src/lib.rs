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

//! # PKG Client for Rust
//!
//! Async client and form controllers for a Personal Knowledge Graph API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pkg_client::{ClientConfig, PkgClient, StatementForm};
//! use pkg_core::Owner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let owner = Owner::new("http://example.org/alice", "alice");
//!     let client = PkgClient::new(ClientConfig::default(), owner.clone());
//!
//!     let mut form = StatementForm::new();
//!     form.set_description("I dislike all movies with Tom Cruise.");
//!     form.subject_mut().set_me(&owner, true);
//!     form.add(&client).await;
//!
//!     println!("{}", form.status().info());
//!     Ok(())
//! }
//! ```
//!
//! ## Interpreting echoed statements
//!
//! ```
//! use pkg_core::{interpret, AnnotatedStatement};
//!
//! let data: AnnotatedStatement = serde_json::from_str(
//!     r#"{"statement": "I like pizza",
//!         "triple": {"subject": {"value": "I"}},
//!         "preference": {"topic": {"value": "pizza"}, "weight": 1.0}}"#,
//! ).unwrap();
//! let sentence = interpret(&data, "http://example.org/alice");
//! assert_eq!(
//!     sentence.as_deref(),
//!     Some("you expressed a positive preference towards \"pizza\"")
//! );
//! ```

mod client;
mod forms;

pub use client::{
    ClientConfig, ClientError, MessageResponse, PkgClient, Result, SparqlResponse,
    DEFAULT_BASE_URL,
};
pub use forms::{
    ConceptDraft, FactForm, FormStatus, PreferenceForm, StatementForm, SubjectField,
    TripleElementField,
};

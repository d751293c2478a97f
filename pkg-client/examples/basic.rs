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

//! PKG Client Basic Example
//!
//! Fills the statement form the way the UI would, submits it, and renders
//! the interpretation of an echoed statement.

use pkg_client::{ClientConfig, PkgClient, StatementForm};
use pkg_core::{interpret, AnnotatedStatement, Owner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let owner = Owner::new("http://example.org/alice", "alice");
    let client = PkgClient::new(ClientConfig::default(), owner.clone());

    println!("PKG Client Example\n");

    // 1. Assemble and submit a statement.
    println!("1. Submitting a statement...");
    let mut form = StatementForm::new();
    form.set_description("I dislike all movies with the actor Tom Cruise.");
    form.subject_mut().set_me(&owner, true);
    form.predicate_mut().set_reference("dislike");
    form.object_mut().set_concept_mode(true);
    form.object_mut().concept_mut().description =
        "all movies with the actor Tom Cruise".to_string();
    form.object_mut().concept_mut().related_entities =
        "https://dbpedia.org/page/Tom_Cruise".to_string();
    form.set_preference(Some(-1.0));

    form.add(&client).await;
    if form.status().error().is_empty() {
        println!("   {}\n", form.status().info());
    } else {
        println!("   Warning: {}\n", form.status().error());
    }

    // 2. Interpret a statement echoed by the API.
    println!("2. Interpreting an echoed statement...");
    let echoed: AnnotatedStatement = serde_json::from_str(
        r#"{
            "statement": "I hate Blue Jazz",
            "triple": {"subject": {"value": "I"}},
            "preference": {"topic": {"value": "http://ex.org/Blue_Jazz"}, "weight": -1.0}
        }"#,
    )?;
    match interpret(&echoed, &owner.uri) {
        Some(sentence) => println!("   {}", sentence),
        None => println!("   No interpretation available."),
    }

    Ok(())
}

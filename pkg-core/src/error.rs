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

//! Validation error types.

use thiserror::Error;

/// Local validation failures detected before any network call.
///
/// Each variant renders as a single inline message naming the offending
/// field; a validation failure blocks the submission entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("Please fill the required field: {0}.")]
    MissingField(&'static str),

    /// A concept annotation was chosen but its description was left empty.
    #[error("Please fill the required field: {0} description.")]
    MissingConceptDescription(&'static str),

    /// The preference weight was missing or not a number.
    #[error("Please fill the required field: Preference value.")]
    MissingPreferenceValue,

    /// The preference weight was outside the supported scale.
    #[error("Preference value must be between -1 and 1.")]
    PreferenceOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_field() {
        assert_eq!(
            ValidationError::MissingField("Description").to_string(),
            "Please fill the required field: Description."
        );
        assert_eq!(
            ValidationError::MissingConceptDescription("Object").to_string(),
            "Please fill the required field: Object description."
        );
    }
}

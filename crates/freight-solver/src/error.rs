// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use freight_heuristics::error::AllocationError;
use freight_model::loading::LoaderError;

/// Failures of a solver call: either the input could not be turned into a
/// model or the heuristic could not finish.
#[derive(Debug)]
pub enum SolveError {
    Load(LoaderError),
    Allocation(AllocationError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "failed to load problem: {}", e),
            Self::Allocation(e) => write!(f, "allocation failed: {}", e),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Allocation(e) => Some(e),
        }
    }
}

impl From<LoaderError> for SolveError {
    fn from(e: LoaderError) -> Self {
        Self::Load(e)
    }
}

impl From<AllocationError> for SolveError {
    fn from(e: AllocationError) -> Self {
        Self::Allocation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_model::loading::InputField;
    use std::error::Error;

    #[test]
    fn test_loader_errors_keep_their_field() {
        let err: SolveError = LoaderError::EmptyField {
            field: InputField::Demand,
            position: 2,
        }
        .into();
        assert!(matches!(&err, SolveError::Load(e) if e.field() == Some(InputField::Demand)));
        assert!(err.to_string().starts_with("failed to load problem: "));
        assert!(err.source().is_some());
    }
}

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

use freight_model::{
    index::{SinkIndex, SourceIndex},
    model::ModelError,
};

/// Failures of an allocation call.
///
/// Unbalanced supply and demand is deliberately absent: a heuristic stops when
/// one side is exhausted and reports the leftover through its residual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The supplied vectors and cost matrix do not form a valid model.
    Malformed(ModelError),
    /// `quantity * cost` or the running total overflowed the numeric type
    /// while shipping on the given cell.
    CostOverflow { source: SourceIndex, sink: SinkIndex },
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed input: {}", e),
            Self::CostOverflow { source, sink } => write!(
                f,
                "total cost overflowed while shipping from source {} to sink {}",
                source.get(),
                sink.get()
            ),
        }
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::CostOverflow { .. } => None,
        }
    }
}

impl From<ModelError> for AllocationError {
    fn from(e: ModelError) -> Self {
        Self::Malformed(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_model_error_converts_to_malformed() {
        let err: AllocationError = ModelError::RowCountMismatch {
            expected: 3,
            found: 2,
        }
        .into();
        assert!(matches!(err, AllocationError::Malformed(_)));
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "malformed input: cost matrix has 2 rows but there are 3 sources"
        );
    }

    #[test]
    fn test_overflow_message_names_the_cell() {
        let err = AllocationError::CostOverflow {
            source: SourceIndex::new(1),
            sink: SinkIndex::new(4),
        };
        assert_eq!(
            err.to_string(),
            "total cost overflowed while shipping from source 1 to sink 4"
        );
        assert!(err.source().is_none());
    }
}

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

//! Text loader for transportation instances.
//!
//! Instances are entered as three fields: a supply list, a demand list and a
//! cost matrix. Lists are delimited by `,`; the cost matrix is a `;`-delimited
//! list of `,`-delimited rows:
//!
//! ```raw
//! supply: 20, 30, 25
//! demand: 10, 25, 40
//! cost:   8,6,10; 9,12,13; 14,9,16
//! ```
//!
//! Every token is trimmed and must parse as an integer. Blank tokens (for
//! example a trailing delimiter) are reported as `LoaderError::EmptyField`,
//! non-numeric tokens as `LoaderError::Parse`. Each error names the field and
//! the position of the token, so a front end can tell "fix the supply and
//! demand lists" apart from "fix the cost matrix". Shape and sign problems are
//! forwarded from `ModelBuilder` as `LoaderError::Model`. No heuristic is ever
//! run on input that did not load.
//!
//! Besides three separate strings, the loader reads a whole document from any
//! `BufRead` or file path: the first non-blank line is the supply list, the
//! second the demand list and every following line is one or more cost rows.
//! Text after `#` on a line is a comment.

use crate::model::{ModelError, TransportModel};
use freight_core::num::quantity::Quantity;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The input field a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Supply,
    Demand,
    /// Row `row` (zero-based) of the cost matrix.
    Cost { row: usize },
}

impl InputField {
    /// Returns `true` for the supply and demand lists.
    #[inline]
    pub fn is_vector(&self) -> bool {
        matches!(self, InputField::Supply | InputField::Demand)
    }

    /// Returns `true` for a row of the cost matrix.
    #[inline]
    pub fn is_cost_matrix(&self) -> bool {
        matches!(self, InputField::Cost { .. })
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Supply => write!(f, "supply"),
            InputField::Demand => write!(f, "demand"),
            InputField::Cost { row } => write!(f, "cost row {}", row),
        }
    }
}

/// Details about a token that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The field the token belongs to.
    pub field: InputField,
    /// Zero-based position of the token inside its field.
    pub position: usize,
    /// The trimmed token text.
    pub token: String,
    /// The type we tried to parse into (e.g. "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not parse token '{}' at position {} of {} as type {}",
            self.token, self.position, self.field, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// The error type for loading a transportation instance.
#[derive(Debug)]
pub enum LoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The document ended before the given field was read.
    UnexpectedEof { expected: InputField },
    /// A token is empty or only whitespace.
    EmptyField { field: InputField, position: usize },
    /// A token could not be parsed into the numeric type.
    Parse(ParseTokenError),
    /// The parsed values do not form a valid model.
    Model(ModelError),
}

impl LoaderError {
    /// The input field the error points at, if any.
    pub fn field(&self) -> Option<InputField> {
        match self {
            LoaderError::Io(_) => None,
            LoaderError::UnexpectedEof { expected } => Some(*expected),
            LoaderError::EmptyField { field, .. } => Some(*field),
            LoaderError::Parse(e) => Some(e.field),
            LoaderError::Model(ModelError::RowCountMismatch { .. }) => {
                Some(InputField::Cost { row: 0 })
            }
            LoaderError::Model(ModelError::ColumnCountMismatch { source, .. }) => {
                Some(InputField::Cost { row: source.get() })
            }
            LoaderError::Model(ModelError::NegativeSupply { .. }) => Some(InputField::Supply),
            LoaderError::Model(ModelError::NegativeDemand { .. }) => Some(InputField::Demand),
        }
    }
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input while reading {}", expected)
            }
            Self::EmptyField { field, position } => {
                write!(f, "empty value at position {} of {}", position, field)
            }
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::Model(e) => write!(f, "invalid model: {}", e),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for LoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ModelError> for LoaderError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// A configurable loader for transportation instances.
///
/// # Examples
///
/// ```rust
/// # use freight_model::loading::ProblemLoader;
/// let model = ProblemLoader::<i64>::new()
///     .load("20,30,25", "10,25,40", "8,6,10;9,12,13;14,9,16")
///     .unwrap();
/// assert_eq!(model.num_sources(), 3);
/// assert_eq!(model.supply(), &[20, 30, 25]);
///
/// let model = ProblemLoader::<i64>::new()
///     .value_delimiter(' ')
///     .row_delimiter('|')
///     .load("5", "3", "7")
///     .unwrap();
/// assert_eq!(model.costs(), &[7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader<T> {
    value_delimiter: char,
    row_delimiter: char,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> Default for ProblemLoader<T> {
    fn default() -> Self {
        Self {
            value_delimiter: ',',
            row_delimiter: ';',
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> ProblemLoader<T>
where
    T: Quantity,
{
    /// Creates a loader with `,` between values and `;` between cost rows.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter between values of a list or cost row.
    #[inline]
    pub fn value_delimiter(mut self, delimiter: char) -> Self {
        self.value_delimiter = delimiter;
        self
    }

    /// Sets the delimiter between cost rows.
    #[inline]
    pub fn row_delimiter(mut self, delimiter: char) -> Self {
        self.row_delimiter = delimiter;
        self
    }

    /// Parses the three input fields and builds a validated model.
    pub fn load(
        &self,
        supply: &str,
        demand: &str,
        cost: &str,
    ) -> Result<TransportModel<T>, LoaderError> {
        let supply = self.parse_list(supply, InputField::Supply)?;
        let demand = self.parse_list(demand, InputField::Demand)?;
        let rows = self.parse_matrix(cost)?;

        Ok(TransportModel::from_rows(&supply, &demand, &rows)?)
    }

    /// Parses a delimited list of integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freight_model::loading::{InputField, LoaderError, ProblemLoader};
    /// let loader = ProblemLoader::<i32>::new();
    /// assert_eq!(loader.parse_list(" 1, 2 ,3", InputField::Supply).unwrap(), vec![1, 2, 3]);
    ///
    /// let err = loader.parse_list("1,,3", InputField::Demand).unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     LoaderError::EmptyField { field: InputField::Demand, position: 1 }
    /// ));
    /// ```
    pub fn parse_list(&self, text: &str, field: InputField) -> Result<Vec<T>, LoaderError> {
        text.split(self.value_delimiter)
            .enumerate()
            .map(|(position, raw)| parse_token(raw, field, position))
            .collect()
    }

    /// Parses a cost matrix into one `Vec` per row. Rows may differ in
    /// length here; the shape is checked when the model is built.
    pub fn parse_matrix(&self, text: &str) -> Result<Vec<Vec<T>>, LoaderError> {
        text.split(self.row_delimiter)
            .enumerate()
            .map(|(row, raw)| self.parse_list(raw, InputField::Cost { row }))
            .collect()
    }

    /// Loads an instance document from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<TransportModel<T>, LoaderError> {
        let mut lines = Vec::new();
        for line in rdr.lines() {
            let line = line?;
            let content = match line.find('#') {
                Some(comment) => &line[..comment],
                None => line.as_str(),
            };
            let content = content.trim();
            if !content.is_empty() {
                lines.push(content.to_owned());
            }
        }

        let mut lines = lines.into_iter();
        let supply = lines.next().ok_or(LoaderError::UnexpectedEof {
            expected: InputField::Supply,
        })?;
        let demand = lines.next().ok_or(LoaderError::UnexpectedEof {
            expected: InputField::Demand,
        })?;

        let cost_lines: Vec<String> = lines.collect();
        if cost_lines.is_empty() {
            return Err(LoaderError::UnexpectedEof {
                expected: InputField::Cost { row: 0 },
            });
        }

        // One line may hold several delimited rows; several lines are several rows.
        let cost = cost_lines.join(&self.row_delimiter.to_string());
        self.load(&supply, &demand, &cost)
    }

    /// Loads an instance document from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<TransportModel<T>, LoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance document from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<TransportModel<T>, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance document from a string slice.
    #[inline]
    pub fn from_document(&self, s: &str) -> Result<TransportModel<T>, LoaderError> {
        self.from_reader(s.as_bytes())
    }
}

fn parse_token<T>(raw: &str, field: InputField, position: usize) -> Result<T, LoaderError>
where
    T: Quantity,
{
    let token = raw.trim();
    if token.is_empty() {
        return Err(LoaderError::EmptyField { field, position });
    }

    token.parse::<T>().map_err(|_| {
        LoaderError::Parse(ParseTokenError {
            field,
            position,
            token: token.to_owned(),
            type_name: std::any::type_name::<T>(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{SinkIndex, SourceIndex};

    const DOCUMENT: &str = r#"
        # three suppliers, three consumers
        20, 30, 25      # supply
        10, 25, 40      # demand
        8, 6, 10        # cost rows
        9, 12, 13; 14, 9, 16
    "#;

    #[test]
    fn test_load_three_fields() {
        let model = ProblemLoader::<i64>::new()
            .load("20,30,25", "10,25,40", "8,6,10;9,12,13;14,9,16")
            .expect("failed to load");

        assert_eq!(model.supply(), &[20, 30, 25]);
        assert_eq!(model.demand(), &[10, 25, 40]);
        assert_eq!(model.cost(SourceIndex::new(2), SinkIndex::new(0)), 14);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let model = ProblemLoader::<i64>::new()
            .load(" 5 ", "\t3", " 7 ")
            .expect("failed to load");
        assert_eq!(model.supply(), &[5]);
        assert_eq!(model.demand(), &[3]);
        assert_eq!(model.costs(), &[7]);
    }

    #[test]
    fn test_empty_supply_field() {
        let err = ProblemLoader::<i64>::new().load("", "1", "1").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::EmptyField {
                field: InputField::Supply,
                position: 0
            }
        ));
        assert_eq!(err.field(), Some(InputField::Supply));
    }

    #[test]
    fn test_trailing_delimiter_is_an_empty_field() {
        let err = ProblemLoader::<i64>::new()
            .load("1,2,", "3", "1;1")
            .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::EmptyField {
                field: InputField::Supply,
                position: 2
            }
        ));
    }

    #[test]
    fn test_non_numeric_demand() {
        let err = ProblemLoader::<i64>::new()
            .load("1", "abc", "1")
            .unwrap_err();
        match err {
            LoaderError::Parse(e) => {
                assert_eq!(e.field, InputField::Demand);
                assert_eq!(e.position, 0);
                assert_eq!(e.token, "abc");
                assert!(e.type_name.contains("i64"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_cost_names_the_row() {
        let err = ProblemLoader::<i64>::new()
            .load("1,1", "1,1", "1,2;3,x")
            .unwrap_err();
        match err {
            LoaderError::Parse(e) => {
                assert_eq!(e.field, InputField::Cost { row: 1 });
                assert_eq!(e.position, 1);
                assert!(e.field.is_cost_matrix());
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_fractional_value_is_not_an_integer() {
        let err = ProblemLoader::<i64>::new().load("1.5", "1", "1").unwrap_err();
        assert!(matches!(err, LoaderError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_value_is_a_parse_error() {
        let err = ProblemLoader::<i8>::new().load("300", "1", "1").unwrap_err();
        assert!(matches!(err, LoaderError::Parse(ParseTokenError { ref token, .. }) if token == "300"));
    }

    #[test]
    fn test_ragged_cost_matrix_is_a_model_error() {
        let err = ProblemLoader::<i64>::new()
            .load("1,1", "1,1", "1,2;3")
            .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Model(ModelError::ColumnCountMismatch { .. })
        ));
        assert_eq!(err.field(), Some(InputField::Cost { row: 1 }));
    }

    #[test]
    fn test_oversized_cost_matrix_is_trimmed() {
        let model = ProblemLoader::<i64>::new()
            .load("5", "3", "7, 1; 2, 2")
            .expect("failed to load");
        assert_eq!(model.num_sources(), 1);
        assert_eq!(model.num_sinks(), 1);
        assert_eq!(model.costs(), &[7]);
    }

    #[test]
    fn test_missing_cost_row_is_a_model_error() {
        let err = ProblemLoader::<i64>::new()
            .load("1,1", "2", "1")
            .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Model(ModelError::RowCountMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_negative_supply_is_a_model_error() {
        let err = ProblemLoader::<i64>::new().load("-1", "1", "1").unwrap_err();
        assert!(matches!(err, LoaderError::Model(ModelError::NegativeSupply { .. })));
        assert!(err.field().is_some_and(|f| f.is_vector()));
    }

    #[test]
    fn test_custom_delimiters() {
        let model = ProblemLoader::<i32>::new()
            .value_delimiter(' ')
            .row_delimiter('/')
            .load("1 2", "3", "4/5")
            .expect("failed to load");
        assert_eq!(model.costs(), &[4, 5]);
    }

    #[test]
    fn test_document_with_comments_and_multiline_costs() {
        let model = ProblemLoader::<i64>::new()
            .from_document(DOCUMENT)
            .expect("failed to load");
        assert_eq!(model.num_sources(), 3);
        assert_eq!(model.num_sinks(), 3);
        assert_eq!(model.costs(), &[8, 6, 10, 9, 12, 13, 14, 9, 16]);
    }

    #[test]
    fn test_document_without_cost_rows() {
        let err = ProblemLoader::<i64>::new()
            .from_document("1\n1\n# nothing else")
            .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::UnexpectedEof {
                expected: InputField::Cost { row: 0 }
            }
        ));
    }

    #[test]
    fn test_empty_document() {
        let err = ProblemLoader::<i64>::new().from_document("").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::UnexpectedEof {
                expected: InputField::Supply
            }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ProblemLoader::<i64>::new()
            .from_path("/definitely/not/here.txt")
            .unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = LoaderError::EmptyField {
            field: InputField::Cost { row: 2 },
            position: 1,
        };
        assert_eq!(err.to_string(), "empty value at position 1 of cost row 2");
    }
}

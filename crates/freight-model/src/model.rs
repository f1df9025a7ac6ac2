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

use crate::index::{SinkIndex, SourceIndex, flatten_index};
use freight_core::num::quantity::Quantity;

/// Reasons a transportation instance is rejected before any heuristic runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The cost matrix has fewer rows than there are sources.
    RowCountMismatch { expected: usize, found: usize },
    /// A cost row has fewer entries than there are sinks.
    ColumnCountMismatch {
        source: SourceIndex,
        expected: usize,
        found: usize,
    },
    /// A source was given a negative supply.
    NegativeSupply { source: SourceIndex },
    /// A sink was given a negative demand.
    NegativeDemand { sink: SinkIndex },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowCountMismatch { expected, found } => write!(
                f,
                "cost matrix has {} rows but there are {} sources",
                found, expected
            ),
            Self::ColumnCountMismatch {
                source,
                expected,
                found,
            } => write!(
                f,
                "cost row {} has {} entries but there are {} sinks",
                source.get(),
                found,
                expected
            ),
            Self::NegativeSupply { source } => {
                write!(f, "supply of source {} is negative", source.get())
            }
            Self::NegativeDemand { sink } => {
                write!(f, "demand of sink {} is negative", sink.get())
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// How total supply compares to total demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance<T> {
    /// Total supply equals total demand.
    Balanced,
    /// Supply exceeds demand by the contained amount.
    ExcessSupply(T),
    /// Demand exceeds supply by the contained amount.
    ExcessDemand(T),
}

impl<T> std::fmt::Display for Balance<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Balance::Balanced => write!(f, "Balanced"),
            Balance::ExcessSupply(d) => write!(f, "ExcessSupply({})", d),
            Balance::ExcessDemand(d) => write!(f, "ExcessDemand({})", d),
        }
    }
}

/// An immutable, shape-checked transportation instance.
///
/// Supply and demand are stored as plain vectors indexed by `SourceIndex` and
/// `SinkIndex`; the cost matrix is stored flattened in row-major order, so the
/// cost of shipping one unit from source `s` to sink `k` lives at
/// `s * num_sinks + k`.
///
/// A `TransportModel` is only obtainable through `ModelBuilder::build` or
/// `TransportModel::from_rows`, both of which validate:
/// - the cost matrix covers every (source, sink) pair;
/// - no supply or demand is negative.
///
/// Unequal totals are accepted; see `TransportModel::balance`.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportModel<T> {
    supply: Vec<T>,   // len = num_sources
    demand: Vec<T>,   // len = num_sinks
    costs: Vec<T>,    // len = num_sources * num_sinks
}

impl<T> TransportModel<T>
where
    T: Quantity,
{
    /// Builds a model from a supply list, a demand list and a cost matrix
    /// given as rows.
    ///
    /// `cost` needs at least `supply.len()` rows, each with at least
    /// `demand.len()` entries; this is checked before any entry is read.
    /// Rows past `supply.len()` and entries past `demand.len()` are ignored,
    /// so the model is always `supply.len() x demand.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freight_model::model::{TransportModel, ModelError};
    /// let model = TransportModel::from_rows(&[5_i64, 5], &[10], &[[3], [4]]).unwrap();
    /// assert_eq!(model.num_sources(), 2);
    /// assert_eq!(model.num_sinks(), 1);
    ///
    /// let err = TransportModel::from_rows(&[5_i64, 5], &[10], &[[3]]).unwrap_err();
    /// assert_eq!(err, ModelError::RowCountMismatch { expected: 2, found: 1 });
    ///
    /// // A wider or taller matrix is trimmed to the supply and demand lengths.
    /// let model = TransportModel::from_rows(&[5_i64], &[3], &[[7, 1], [2, 2]]).unwrap();
    /// assert_eq!(model.costs(), &[7]);
    /// ```
    pub fn from_rows<R>(supply: &[T], demand: &[T], cost: &[R]) -> Result<Self, ModelError>
    where
        R: AsRef<[T]>,
    {
        let num_sources = supply.len();
        let num_sinks = demand.len();

        if cost.len() < num_sources {
            return Err(ModelError::RowCountMismatch {
                expected: num_sources,
                found: cost.len(),
            });
        }

        let mut builder = ModelBuilder::new(num_sources, num_sinks);
        for (source, row) in SourceIndex::range(num_sources).zip(cost) {
            let row = row.as_ref();
            if row.len() < num_sinks {
                return Err(ModelError::ColumnCountMismatch {
                    source,
                    expected: num_sinks,
                    found: row.len(),
                });
            }

            builder.set_source_supply(source, supply[source.get()]);
            for (sink, &c) in SinkIndex::range(num_sinks).zip(row) {
                builder.set_cost(source, sink, c);
            }
        }
        for sink in SinkIndex::range(num_sinks) {
            builder.set_sink_demand(sink, demand[sink.get()]);
        }

        builder.build()
    }

    /// Returns the number of sources (rows).
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// Returns the number of sinks (columns).
    #[inline]
    pub fn num_sinks(&self) -> usize {
        self.demand.len()
    }

    /// Returns the supply of every source.
    #[inline]
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// Returns the demand of every sink.
    #[inline]
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    /// Returns the flattened, row-major cost matrix.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns the supply of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not in `0..num_sources()`.
    #[inline]
    pub fn source_supply(&self, source: SourceIndex) -> T {
        self.supply[source.get()]
    }

    /// Returns the demand of `sink`.
    ///
    /// # Panics
    ///
    /// Panics if `sink` is not in `0..num_sinks()`.
    #[inline]
    pub fn sink_demand(&self, sink: SinkIndex) -> T {
        self.demand[sink.get()]
    }

    /// Returns the unit shipping cost from `source` to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freight_model::model::TransportModel;
    /// # use freight_model::index::{SourceIndex, SinkIndex};
    /// let model = TransportModel::from_rows(&[1_i64, 1], &[1, 1], &[[8, 6], [9, 12]]).unwrap();
    /// assert_eq!(model.cost(SourceIndex::new(1), SinkIndex::new(0)), 9);
    /// ```
    #[inline]
    pub fn cost(&self, source: SourceIndex, sink: SinkIndex) -> T {
        assert!(
            source.get() < self.num_sources() && sink.get() < self.num_sinks(),
            "called `TransportModel::cost` with index out of bounds: shape is {}x{} but the cell is ({}, {})",
            self.num_sources(),
            self.num_sinks(),
            source.get(),
            sink.get()
        );

        self.costs[flatten_index(self.num_sinks(), source, sink)]
    }

    /// Returns the cost row of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not in `0..num_sources()`.
    #[inline]
    pub fn cost_row(&self, source: SourceIndex) -> &[T] {
        let start = flatten_index(self.num_sinks(), source, SinkIndex::new(0));
        &self.costs[start..start + self.num_sinks()]
    }

    /// Returns the total supply, or `None` if the sum overflows `T`.
    #[inline]
    pub fn total_supply(&self) -> Option<T> {
        checked_sum(&self.supply)
    }

    /// Returns the total demand, or `None` if the sum overflows `T`.
    #[inline]
    pub fn total_demand(&self) -> Option<T> {
        checked_sum(&self.demand)
    }

    /// Compares total supply with total demand.
    ///
    /// Returns `None` if either total overflows `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freight_model::model::{Balance, TransportModel};
    /// let model = TransportModel::from_rows(&[5_i64], &[3], &[[7]]).unwrap();
    /// assert_eq!(model.balance(), Some(Balance::ExcessSupply(2)));
    /// ```
    pub fn balance(&self) -> Option<Balance<T>> {
        let supply = self.total_supply()?;
        let demand = self.total_demand()?;
        Some(match supply.cmp(&demand) {
            std::cmp::Ordering::Equal => Balance::Balanced,
            std::cmp::Ordering::Greater => Balance::ExcessSupply(supply - demand),
            std::cmp::Ordering::Less => Balance::ExcessDemand(demand - supply),
        })
    }

    /// Returns `true` if total supply equals total demand.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        matches!(self.balance(), Some(Balance::Balanced))
    }
}

fn checked_sum<T: Quantity>(values: &[T]) -> Option<T> {
    values
        .iter()
        .try_fold(T::zero(), |acc, &v| acc.checked_add_val(v))
}

impl<T> std::fmt::Debug for TransportModel<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportModel")
            .field("supply", &self.supply)
            .field("demand", &self.demand)
            .field("costs", &self.costs)
            .finish()
    }
}

impl<T> std::fmt::Display for TransportModel<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TransportModel(num_sources: {}, num_sinks: {})",
            self.num_sources(),
            self.num_sinks()
        )
    }
}

/// Mutable staging area for a `TransportModel`.
///
/// All supplies, demands and costs start at zero. `build` validates the
/// values and freezes them.
#[derive(Clone)]
pub struct ModelBuilder<T> {
    num_sources: usize,
    num_sinks: usize,
    supply: Vec<T>,
    demand: Vec<T>,
    costs: Vec<T>,
}

impl<T> ModelBuilder<T>
where
    T: Quantity,
{
    /// Creates a builder for `num_sources` x `num_sinks` instances.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freight_model::model::ModelBuilder;
    /// # use freight_model::index::{SourceIndex, SinkIndex};
    /// let mut builder = ModelBuilder::<i64>::new(2, 3);
    /// builder
    ///     .set_source_supply(SourceIndex::new(0), 20)
    ///     .set_sink_demand(SinkIndex::new(2), 20)
    ///     .set_cost(SourceIndex::new(0), SinkIndex::new(2), 10);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_sources(), 2);
    /// assert_eq!(model.num_sinks(), 3);
    /// ```
    pub fn new(num_sources: usize, num_sinks: usize) -> Self {
        Self {
            num_sources,
            num_sinks,
            supply: vec![T::zero(); num_sources],
            demand: vec![T::zero(); num_sinks],
            costs: vec![T::zero(); num_sources * num_sinks],
        }
    }

    /// Returns the number of sources.
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    /// Returns the number of sinks.
    #[inline]
    pub fn num_sinks(&self) -> usize {
        self.num_sinks
    }

    /// Sets the supply of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not in `0..num_sources()`.
    #[inline]
    pub fn set_source_supply(&mut self, source: SourceIndex, supply: T) -> &mut Self {
        self.supply[source.get()] = supply;
        self
    }

    /// Sets the demand of `sink`.
    ///
    /// # Panics
    ///
    /// Panics if `sink` is not in `0..num_sinks()`.
    #[inline]
    pub fn set_sink_demand(&mut self, sink: SinkIndex, demand: T) -> &mut Self {
        self.demand[sink.get()] = demand;
        self
    }

    /// Sets the unit cost of shipping from `source` to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set_cost(&mut self, source: SourceIndex, sink: SinkIndex, cost: T) -> &mut Self {
        assert!(
            source.get() < self.num_sources && sink.get() < self.num_sinks,
            "called `ModelBuilder::set_cost` with index out of bounds: shape is {}x{} but the cell is ({}, {})",
            self.num_sources,
            self.num_sinks,
            source.get(),
            sink.get()
        );

        let flat = flatten_index(self.num_sinks, source, sink);
        self.costs[flat] = cost;
        self
    }

    /// Validates the staged values and freezes them into a `TransportModel`.
    pub fn build(self) -> Result<TransportModel<T>, ModelError> {
        if let Some(position) = self.supply.iter().position(|s| s.is_negative()) {
            return Err(ModelError::NegativeSupply {
                source: SourceIndex::new(position),
            });
        }
        if let Some(position) = self.demand.iter().position(|d| d.is_negative()) {
            return Err(ModelError::NegativeDemand {
                sink: SinkIndex::new(position),
            });
        }

        debug_assert_eq!(self.costs.len(), self.num_sources * self.num_sinks);

        Ok(TransportModel {
            supply: self.supply,
            demand: self.demand,
            costs: self.costs,
        })
    }
}

impl<T> std::fmt::Debug for ModelBuilder<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBuilder")
            .field("num_sources", &self.num_sources)
            .field("num_sinks", &self.num_sinks)
            .field("supply", &self.supply)
            .field("demand", &self.demand)
            .field("costs", &self.costs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(i: usize) -> SourceIndex {
        SourceIndex::new(i)
    }

    fn k(i: usize) -> SinkIndex {
        SinkIndex::new(i)
    }

    fn textbook() -> TransportModel<i64> {
        TransportModel::from_rows(
            &[20, 30, 25],
            &[10, 25, 40],
            &[[8, 6, 10], [9, 12, 13], [14, 9, 16]],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows_lays_out_costs_row_major() {
        let model = textbook();
        assert_eq!(model.costs(), &[8, 6, 10, 9, 12, 13, 14, 9, 16]);
        assert_eq!(model.cost(s(2), k(1)), 9);
        assert_eq!(model.cost_row(s(1)), &[9, 12, 13]);
    }

    #[test]
    fn test_from_rows_keeps_supply_and_demand() {
        let model = textbook();
        assert_eq!(model.supply(), &[20, 30, 25]);
        assert_eq!(model.demand(), &[10, 25, 40]);
        assert_eq!(model.source_supply(s(1)), 30);
        assert_eq!(model.sink_demand(k(2)), 40);
    }

    #[test]
    fn test_from_rows_accepts_vec_rows() {
        let rows = vec![vec![1_i32, 2], vec![3, 4]];
        let model = TransportModel::from_rows(&[1, 1], &[1, 1], &rows).unwrap();
        assert_eq!(model.cost(s(1), k(1)), 4);
    }

    #[test]
    fn test_too_few_rows_is_rejected() {
        let err = TransportModel::from_rows(&[1_i64, 2, 3], &[6], &[[1], [2]]).unwrap_err();
        assert_eq!(
            err,
            ModelError::RowCountMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_extra_rows_are_ignored() {
        let model = TransportModel::from_rows(&[1_i64], &[1], &[[1], [2]]).unwrap();
        assert_eq!(model.num_sources(), 1);
        assert_eq!(model.costs(), &[1]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let rows: Vec<Vec<i64>> = vec![vec![1, 2, 9], vec![3, 4, 9, 9]];
        let model = TransportModel::from_rows(&[1, 1], &[1, 1], &rows).unwrap();
        assert_eq!(model.num_sinks(), 2);
        assert_eq!(model.costs(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_rows_past_the_sources_are_not_validated() {
        // Only the first `num_sources` rows are read, so a short trailing row
        // beyond them does not matter.
        let rows: Vec<Vec<i64>> = vec![vec![1, 2], vec![3]];
        let model = TransportModel::from_rows(&[1], &[1, 1], &rows).unwrap();
        assert_eq!(model.costs(), &[1, 2]);
    }

    #[test]
    fn test_short_row_is_rejected_with_its_index() {
        let rows: Vec<Vec<i64>> = vec![vec![1, 2], vec![3]];
        let err = TransportModel::from_rows(&[1, 1], &[1, 1], &rows).unwrap_err();
        assert_eq!(
            err,
            ModelError::ColumnCountMismatch {
                source: s(1),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_negative_quantities_are_rejected() {
        let err = TransportModel::from_rows(&[1_i64, -1], &[0], &[[1], [1]]).unwrap_err();
        assert_eq!(err, ModelError::NegativeSupply { source: s(1) });

        let err = TransportModel::from_rows(&[1_i64], &[-4, 5], &[[1, 1]]).unwrap_err();
        assert_eq!(err, ModelError::NegativeDemand { sink: k(0) });
    }

    #[test]
    fn test_negative_costs_are_allowed() {
        let model = TransportModel::from_rows(&[1_i64], &[1], &[[-3]]).unwrap();
        assert_eq!(model.cost(s(0), k(0)), -3);
    }

    #[test]
    fn test_zero_sources_model() {
        let rows: [[i64; 2]; 0] = [];
        let model = TransportModel::from_rows(&[], &[4, 5], &rows).unwrap();
        assert_eq!(model.num_sources(), 0);
        assert_eq!(model.num_sinks(), 2);
        assert!(model.costs().is_empty());
    }

    #[test]
    fn test_zero_sinks_model() {
        let rows: Vec<Vec<i64>> = vec![vec![], vec![]];
        let model = TransportModel::from_rows(&[4, 5], &[], &rows).unwrap();
        assert_eq!(model.num_sources(), 2);
        assert_eq!(model.num_sinks(), 0);
        assert!(model.cost_row(s(1)).is_empty());
    }

    #[test]
    fn test_balance() {
        assert_eq!(textbook().balance(), Some(Balance::Balanced));
        assert!(textbook().is_balanced());

        let over = TransportModel::from_rows(&[5_i64], &[3], &[[7]]).unwrap();
        assert_eq!(over.balance(), Some(Balance::ExcessSupply(2)));

        let under = TransportModel::from_rows(&[1_i64], &[3], &[[7]]).unwrap();
        assert_eq!(under.balance(), Some(Balance::ExcessDemand(2)));
        assert!(!under.is_balanced());
    }

    #[test]
    fn test_balance_overflow_is_none() {
        let model = TransportModel::from_rows(&[i8::MAX, 1], &[0], &[[0], [0]]).unwrap();
        assert_eq!(model.total_supply(), None);
        assert_eq!(model.balance(), None);
    }

    #[test]
    #[should_panic(expected = "called `TransportModel::cost` with index out of bounds")]
    fn test_cost_panics_out_of_bounds() {
        let _ = textbook().cost(s(3), k(0));
    }

    #[test]
    fn test_builder_defaults_to_zero() {
        let model = ModelBuilder::<i32>::new(2, 2).build().unwrap();
        assert!(model.supply().iter().all(|&v| v == 0));
        assert!(model.demand().iter().all(|&v| v == 0));
        assert!(model.costs().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_display_and_debug() {
        let model = textbook();
        assert_eq!(
            format!("{}", model),
            "TransportModel(num_sources: 3, num_sinks: 3)"
        );
        let dbg = format!("{:?}", model);
        assert!(dbg.contains("supply"));
        assert!(dbg.contains("costs"));

        let builder = ModelBuilder::<i64>::new(1, 1);
        assert!(format!("{:?}", builder).contains("ModelBuilder"));
    }

    #[test]
    fn test_error_messages() {
        let err = ModelError::ColumnCountMismatch {
            source: s(2),
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "cost row 2 has 1 entries but there are 3 sinks");
        assert_eq!(
            ModelError::NegativeDemand { sink: k(0) }.to_string(),
            "demand of sink 0 is negative"
        );
    }
}

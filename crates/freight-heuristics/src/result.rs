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

use crate::stats::HeuristicStatistics;
use freight_core::num::quantity::Quantity;
use freight_model::{
    index::{SinkIndex, SourceIndex},
    plan::AllocationPlan,
};

/// Working supply and demand left over once a heuristic has stopped.
///
/// For a balanced instance both vectors are all zeros. Otherwise exactly one
/// side still holds the excess: leftover supply when total supply exceeds total
/// demand, unmet demand in the opposite case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residual<T> {
    supply: Vec<T>,
    demand: Vec<T>,
}

impl<T> Residual<T>
where
    T: Quantity,
{
    #[inline]
    pub fn new(supply: Vec<T>, demand: Vec<T>) -> Self {
        Self { supply, demand }
    }

    /// Remaining supply per source.
    #[inline]
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// Remaining demand per sink.
    #[inline]
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    /// Remaining supply of one source.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of bounds.
    #[inline]
    pub fn source_supply(&self, source: SourceIndex) -> T {
        self.supply[source.get()]
    }

    /// Remaining demand of one sink.
    ///
    /// # Panics
    ///
    /// Panics if `sink` is out of bounds.
    #[inline]
    pub fn sink_demand(&self, sink: SinkIndex) -> T {
        self.demand[sink.get()]
    }

    /// Total supply nobody asked for, saturating on overflow.
    pub fn leftover_supply(&self) -> T {
        self.supply
            .iter()
            .fold(T::zero(), |acc, &v| acc.saturating_add(v))
    }

    /// Total demand nobody could serve, saturating on overflow.
    pub fn unmet_demand(&self) -> T {
        self.demand
            .iter()
            .fold(T::zero(), |acc, &v| acc.saturating_add(v))
    }

    /// Returns `true` if every source and every sink was fully used up.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.supply.iter().all(|v| v.is_zero()) && self.demand.iter().all(|v| v.is_zero())
    }
}

impl<T> std::fmt::Display for Residual<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Residual(leftover_supply: {}, unmet_demand: {})",
            self.leftover_supply(),
            self.unmet_demand()
        )
    }
}

/// Everything a heuristic run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicOutcome<T> {
    plan: AllocationPlan<T>,
    residual: Residual<T>,
    statistics: HeuristicStatistics,
}

impl<T> HeuristicOutcome<T>
where
    T: Quantity,
{
    #[inline]
    pub fn new(
        plan: AllocationPlan<T>,
        residual: Residual<T>,
        statistics: HeuristicStatistics,
    ) -> Self {
        Self {
            plan,
            residual,
            statistics,
        }
    }

    #[inline]
    pub fn plan(&self) -> &AllocationPlan<T> {
        &self.plan
    }

    #[inline]
    pub fn residual(&self) -> &Residual<T> {
        &self.residual
    }

    #[inline]
    pub fn statistics(&self) -> &HeuristicStatistics {
        &self.statistics
    }

    /// Shortcut for `self.plan().total_cost()`.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.plan.total_cost()
    }

    /// Consumes the outcome and returns only the plan.
    #[inline]
    pub fn into_plan(self) -> AllocationPlan<T> {
        self.plan
    }

    #[inline]
    pub fn into_parts(self) -> (AllocationPlan<T>, Residual<T>, HeuristicStatistics) {
        (self.plan, self.residual, self.statistics)
    }
}

impl<T> std::fmt::Display for HeuristicOutcome<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.plan)?;
        writeln!(f, "{}", self.residual)?;
        write!(f, "{}", self.statistics)
    }
}

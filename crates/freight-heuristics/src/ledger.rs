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

//! Working state shared by the allocation heuristics.
//!
//! Both heuristics run the same inner step: pick a cell, ship as much as the
//! smaller of the two remaining capacities allows, and charge the cost. The
//! `Ledger` owns the per-call working copies of supply and demand, the
//! shipment grid and the running total, so that the heuristics only decide
//! *which* cell to fill next.

use crate::{error::AllocationError, result::Residual};
use freight_core::num::quantity::Quantity;
use freight_model::{
    index::{SinkIndex, SourceIndex, flatten_index},
    model::TransportModel,
    plan::AllocationPlan,
};

/// A single shipment written by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationStep<T> {
    pub source: SourceIndex,
    pub sink: SinkIndex,
    /// Units shipped on the cell. May be zero.
    pub quantity: T,
    pub unit_cost: T,
    /// Running total cost after this step.
    pub total_cost: T,
}

impl<T> std::fmt::Display for AllocationStep<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AllocationStep(source: {}, sink: {}, quantity: {}, unit_cost: {}, total_cost: {})",
            self.source.get(),
            self.sink.get(),
            self.quantity,
            self.unit_cost,
            self.total_cost
        )
    }
}

#[derive(Debug, Clone)]
pub struct Ledger<T> {
    num_sources: usize,
    num_sinks: usize,
    supply: Vec<T>,
    demand: Vec<T>,
    shipments: Vec<T>,
    total_cost: T,
}

impl<T> Ledger<T>
where
    T: Quantity,
{
    /// Opens a ledger with fresh working copies of the model's supply and
    /// demand and an all-zero shipment grid.
    pub fn new(model: &TransportModel<T>) -> Self {
        let num_sources = model.num_sources();
        let num_sinks = model.num_sinks();
        Self {
            num_sources,
            num_sinks,
            supply: model.supply().to_vec(),
            demand: model.demand().to_vec(),
            shipments: vec![T::zero(); num_sources * num_sinks],
            total_cost: T::zero(),
        }
    }

    #[inline]
    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    #[inline]
    pub fn num_sinks(&self) -> usize {
        self.num_sinks
    }

    /// Remaining working supply of `source`.
    #[inline]
    pub fn remaining_supply(&self, source: SourceIndex) -> T {
        debug_assert!(source.get() < self.num_sources);
        self.supply[source.get()]
    }

    /// Remaining working demand of `sink`.
    #[inline]
    pub fn remaining_demand(&self, sink: SinkIndex) -> T {
        debug_assert!(sink.get() < self.num_sinks);
        self.demand[sink.get()]
    }

    #[inline]
    pub fn has_supply(&self, source: SourceIndex) -> bool {
        self.remaining_supply(source) > T::zero()
    }

    #[inline]
    pub fn has_demand(&self, sink: SinkIndex) -> bool {
        self.remaining_demand(sink) > T::zero()
    }

    /// A cell is eligible while both its source and its sink still have
    /// positive remaining capacity.
    #[inline]
    pub fn is_eligible(&self, source: SourceIndex, sink: SinkIndex) -> bool {
        self.has_supply(source) && self.has_demand(sink)
    }

    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Ships `min(remaining supply, remaining demand)` on the cell and charges
    /// `quantity * cost` to the running total.
    ///
    /// The cell is assigned, not added to, so each cell should be shipped on at
    /// most once per run. Returns `AllocationError::CostOverflow` if the charge
    /// does not fit into `T`; the ledger is left untouched in that case.
    pub fn ship(
        &mut self,
        model: &TransportModel<T>,
        source: SourceIndex,
        sink: SinkIndex,
    ) -> Result<AllocationStep<T>, AllocationError> {
        debug_assert!(source.get() < self.num_sources);
        debug_assert!(sink.get() < self.num_sinks);

        let s = source.get();
        let d = sink.get();
        let quantity = std::cmp::min(self.supply[s], self.demand[d]);
        let unit_cost = model.cost(source, sink);

        let overflow = || AllocationError::CostOverflow { source, sink };
        let total_cost = quantity
            .checked_mul_val(unit_cost)
            .and_then(|charge| self.total_cost.checked_add_val(charge))
            .ok_or_else(overflow)?;

        // `quantity` is the minimum of two non-negative values, so neither
        // subtraction can underflow.
        self.supply[s] = self.supply[s]
            .checked_sub_val(quantity)
            .ok_or_else(overflow)?;
        self.demand[d] = self.demand[d]
            .checked_sub_val(quantity)
            .ok_or_else(overflow)?;
        self.shipments[flatten_index(self.num_sinks, source, sink)] = quantity;
        self.total_cost = total_cost;

        Ok(AllocationStep {
            source,
            sink,
            quantity,
            unit_cost,
            total_cost,
        })
    }

    /// Closes the ledger into the finished plan and whatever was left over.
    pub fn finish(self) -> (AllocationPlan<T>, Residual<T>) {
        let plan = AllocationPlan::new(
            self.num_sources,
            self.num_sinks,
            self.shipments,
            self.total_cost,
        );
        (plan, Residual::new(self.supply, self.demand))
    }
}

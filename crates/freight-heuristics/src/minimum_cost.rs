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

//! # Minimum Cost
//!
//! Greedy heuristic: repeatedly pick the cheapest cell whose source still has
//! supply and whose sink still has demand, ship as much as possible on it,
//! and stop when no such cell is left.
//!
//! Cells are scanned in row-major order and only a strictly smaller cost
//! replaces the current candidate, so among equally cheap cells the first one
//! in that order wins. Every iteration exhausts a source or a sink, which
//! bounds the number of iterations by `rows + cols - 1`; each one scans the
//! whole grid.

use crate::{
    error::AllocationError, heuristic::InitialPlanHeuristic, ledger::Ledger,
    monitor::allocation_monitor::AllocationMonitor, result::HeuristicOutcome,
    stats::HeuristicStatistics,
};
use freight_core::num::quantity::Quantity;
use freight_model::{
    index::{SinkIndex, SourceIndex},
    model::TransportModel,
};
use std::time::Instant;

/// The Minimum Cost heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimumCost;

impl MinimumCost {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Finds the cheapest eligible cell, or `None` if no source with supply
    /// meets a sink with demand.
    fn cheapest_cell<T>(
        model: &TransportModel<T>,
        ledger: &Ledger<T>,
        stats: &mut HeuristicStatistics,
    ) -> Option<(SourceIndex, SinkIndex)>
    where
        T: Quantity,
    {
        let mut best: Option<(SourceIndex, SinkIndex, T)> = None;
        let mut scanned: u64 = 0;

        for source in SourceIndex::range(model.num_sources()) {
            if !ledger.has_supply(source) {
                continue;
            }
            for (sink, &cost) in SinkIndex::range(model.num_sinks()).zip(model.cost_row(source)) {
                scanned += 1;
                if !ledger.has_demand(sink) {
                    continue;
                }
                match best {
                    Some((_, _, best_cost)) if cost >= best_cost => {}
                    _ => best = Some((source, sink, cost)),
                }
            }
        }

        stats.on_cells_scanned(scanned);
        best.map(|(source, sink, _)| (source, sink))
    }

    fn fill<T, M>(
        model: &TransportModel<T>,
        ledger: &mut Ledger<T>,
        stats: &mut HeuristicStatistics,
        monitor: &mut M,
    ) -> Result<(), AllocationError>
    where
        T: Quantity,
        M: AllocationMonitor<T> + ?Sized,
    {
        while let Some((source, sink)) = Self::cheapest_cell(model, ledger, stats) {
            let step = ledger.ship(model, source, sink)?;
            debug_assert!(step.quantity > T::zero());
            debug_assert!(!ledger.is_eligible(source, sink));

            stats.on_iteration();
            monitor.on_allocate(&step, stats);
        }

        Ok(())
    }
}

impl std::fmt::Display for MinimumCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MinimumCost")
    }
}

impl<T> InitialPlanHeuristic<T> for MinimumCost
where
    T: Quantity,
{
    fn name(&self) -> &str {
        "MinimumCost"
    }

    fn construct<M>(
        &mut self,
        model: &TransportModel<T>,
        monitor: &mut M,
    ) -> Result<HeuristicOutcome<T>, AllocationError>
    where
        M: AllocationMonitor<T> + ?Sized,
    {
        let start = Instant::now();
        let mut stats = HeuristicStatistics::default();
        let mut ledger = Ledger::new(model);

        monitor.on_enter(model);
        let filled = Self::fill(model, &mut ledger, &mut stats, monitor);
        stats.set_total_time(start.elapsed());
        monitor.on_exit(&stats);
        filled?;

        let (plan, residual) = ledger.finish();
        Ok(HeuristicOutcome::new(plan, residual, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, recording::RecordingMonitor};

    fn run(supply: &[i64], demand: &[i64], cost: &[Vec<i64>]) -> HeuristicOutcome<i64> {
        let model = TransportModel::from_rows(supply, demand, cost).expect("valid model");
        MinimumCost::new()
            .construct(&model, &mut NoOperationMonitor::new())
            .expect("no overflow")
    }

    #[test]
    fn test_textbook_instance() {
        let outcome = run(
            &[20, 30, 25],
            &[10, 25, 40],
            &[vec![8, 6, 10], vec![9, 12, 13], vec![14, 9, 16]],
        );
        assert_eq!(
            outcome.plan().to_rows(),
            vec![vec![0, 20, 0], vec![10, 0, 20], vec![0, 5, 20]]
        );
        assert_eq!(outcome.total_cost(), 835);
        assert!(outcome.residual().is_exhausted());
        assert_eq!(outcome.statistics().iterations, 5);
    }

    #[test]
    fn test_cells_are_filled_in_cost_order() {
        let model = TransportModel::from_rows(
            &[20_i64, 30, 25],
            &[10, 25, 40],
            &[vec![8, 6, 10], vec![9, 12, 13], vec![14, 9, 16]],
        )
        .unwrap();
        let mut monitor = RecordingMonitor::new();
        MinimumCost::new().construct(&model, &mut monitor).unwrap();

        let order: Vec<(usize, usize)> = monitor
            .steps()
            .iter()
            .map(|s| (s.source.get(), s.sink.get()))
            .collect();
        // (1, 0) and (2, 1) both cost 9; row-major order picks (1, 0) first.
        assert_eq!(order, vec![(0, 1), (1, 0), (2, 1), (1, 2), (2, 2)]);
        let totals: Vec<i64> = monitor.steps().iter().map(|s| s.total_cost).collect();
        assert_eq!(totals, vec![120, 210, 255, 515, 835]);
    }

    #[test]
    fn test_ties_resolve_to_first_cell_in_row_major_order() {
        let outcome = run(&[1, 1], &[1, 1], &[vec![3, 3], vec![3, 3]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(outcome.total_cost(), 6);
    }

    #[test]
    fn test_never_writes_zero_shipments() {
        let outcome = run(&[5, 5], &[5, 5], &[vec![1, 2], vec![3, 4]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![5, 0], vec![0, 5]]);
        assert_eq!(outcome.statistics().zero_allocations, 0);
        assert_eq!(outcome.statistics().iterations, 2);
    }

    #[test]
    fn test_excess_supply_is_left_over() {
        let outcome = run(&[5], &[3], &[vec![7]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![3]]);
        assert_eq!(outcome.total_cost(), 21);
        assert_eq!(outcome.residual().leftover_supply(), 2);
    }

    #[test]
    fn test_negative_costs_are_preferred() {
        let outcome = run(&[4], &[2, 2], &[vec![5, -1]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![2, 2]]);
        assert_eq!(outcome.total_cost(), 8);
    }

    #[test]
    fn test_nothing_to_ship() {
        let outcome = run(&[0], &[0], &[vec![5]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![0]]);
        assert_eq!(outcome.total_cost(), 0);
        assert_eq!(outcome.statistics().iterations, 0);

        let empty = run(&[], &[], &[] as &[Vec<i64>]);
        assert_eq!(empty.plan().num_sources(), 0);
        assert_eq!(empty.total_cost(), 0);
    }
}

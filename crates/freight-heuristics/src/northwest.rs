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

//! # Northwest Corner
//!
//! Fills the shipment grid starting from the top-left cell. At every step the
//! current cell receives as much as the smaller of the remaining supply and
//! demand allows. The cursor then moves down if the source is used up and
//! right otherwise, so when a source and a sink run out together only the
//! row advances and the next cell in the same column receives a zero.
//!
//! Costs play no part in the choice of cells; they are only charged to the
//! running total. The method visits at most `rows + cols - 1` cells.

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

/// The Northwest Corner heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NorthwestCorner;

impl NorthwestCorner {
    #[inline]
    pub fn new() -> Self {
        Self
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
        let mut source = SourceIndex::new(0);
        let mut sink = SinkIndex::new(0);

        while source.get() < model.num_sources() && sink.get() < model.num_sinks() {
            stats.on_cells_scanned(1);
            let step = ledger.ship(model, source, sink)?;

            stats.on_iteration();
            if step.quantity.is_zero() {
                stats.on_zero_allocation();
            }
            monitor.on_allocate(&step, stats);

            if ledger.has_supply(source) {
                sink = sink.next();
            } else {
                source = source.next();
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for NorthwestCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NorthwestCorner")
    }
}

impl<T> InitialPlanHeuristic<T> for NorthwestCorner
where
    T: Quantity,
{
    fn name(&self) -> &str {
        "NorthwestCorner"
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
        NorthwestCorner::new()
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
            vec![vec![10, 10, 0], vec![0, 15, 15], vec![0, 0, 25]]
        );
        assert_eq!(outcome.total_cost(), 915);
        assert!(outcome.residual().is_exhausted());
        assert_eq!(outcome.statistics().iterations, 5);
        assert_eq!(outcome.statistics().zero_allocations, 0);
    }

    #[test]
    fn test_simultaneous_exhaustion_advances_row_only() {
        // Source 0 and sink 0 run out together; the cursor moves to (1, 0)
        // and writes a zero there before moving right.
        let model = TransportModel::from_rows(
            &[5_i64, 5],
            &[5, 5],
            &[vec![1, 2], vec![3, 4]],
        )
        .unwrap();
        let mut monitor = RecordingMonitor::new();
        let outcome = NorthwestCorner::new()
            .construct(&model, &mut monitor)
            .unwrap();

        let cells: Vec<(usize, usize, i64)> = monitor
            .steps()
            .iter()
            .map(|s| (s.source.get(), s.sink.get(), s.quantity))
            .collect();
        assert_eq!(cells, vec![(0, 0, 5), (1, 0, 0), (1, 1, 5)]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![5, 0], vec![0, 5]]);
        assert_eq!(outcome.total_cost(), 25);
        assert_eq!(outcome.statistics().zero_allocations, 1);
    }

    #[test]
    fn test_excess_supply_is_left_over() {
        let outcome = run(&[5], &[3], &[vec![7]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![3]]);
        assert_eq!(outcome.total_cost(), 21);
        assert_eq!(outcome.residual().leftover_supply(), 2);
        assert_eq!(outcome.residual().unmet_demand(), 0);
    }

    #[test]
    fn test_excess_demand_is_left_unmet() {
        let outcome = run(&[2, 1], &[4], &[vec![1], vec![10]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![2], vec![1]]);
        assert_eq!(outcome.total_cost(), 12);
        assert_eq!(outcome.residual().unmet_demand(), 1);
    }

    #[test]
    fn test_all_zero_instance() {
        let outcome = run(&[0], &[0], &[vec![5]]);
        assert_eq!(outcome.plan().to_rows(), vec![vec![0]]);
        assert_eq!(outcome.total_cost(), 0);
    }

    #[test]
    fn test_empty_dimensions() {
        let no_sources = run(&[], &[4, 2], &[] as &[Vec<i64>]);
        assert_eq!(no_sources.plan().num_sources(), 0);
        assert_eq!(no_sources.plan().num_sinks(), 2);
        assert_eq!(no_sources.total_cost(), 0);

        let no_sinks = run(&[3], &[], &[vec![]]);
        assert_eq!(no_sinks.plan().to_rows(), vec![Vec::<i64>::new()]);
        assert_eq!(no_sinks.total_cost(), 0);
        assert_eq!(no_sinks.statistics().iterations, 0);
    }

    #[test]
    fn test_overflow_is_reported_and_monitor_still_exits() {
        let model = TransportModel::from_rows(&[100_i8], &[100], &[vec![2_i8]]).unwrap();
        let mut monitor = RecordingMonitor::new();
        let err = NorthwestCorner::new()
            .construct(&model, &mut monitor)
            .unwrap_err();
        assert!(matches!(err, AllocationError::CostOverflow { .. }));
        assert!(monitor.final_statistics().is_some());
        assert!(monitor.steps().is_empty());
    }
}

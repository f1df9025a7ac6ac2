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

use crate::{
    ledger::AllocationStep, monitor::allocation_monitor::AllocationMonitor,
    stats::HeuristicStatistics,
};
use freight_core::num::quantity::Quantity;
use freight_model::model::TransportModel;
use std::time::Instant;

const TABLE_WIDTH: usize = 78;

/// Prints one table line per shipment to stdout.
///
/// Heuristic runs are short, so unlike a search log there is no throttling:
/// every step is printed. Zero shipments can be hidden with
/// `with_zero_allocations(false)`.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    show_zero_allocations: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T>
where
    T: Quantity,
{
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            show_zero_allocations: true,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Whether zero-quantity shipments get a line of their own.
    pub fn with_zero_allocations(mut self, show: bool) -> Self {
        self.show_zero_allocations = show;
        self
    }

    #[inline(always)]
    fn print_header(&self, model: &TransportModel<T>) {
        println!(
            "Allocating {} sources x {} sinks",
            model.num_sources(),
            model.num_sinks()
        );
        println!(
            "{:<9} | {:<6} | {:<6} | {:<6} | {:<12} | {:<10} | {:<14}",
            "Elapsed", "Step", "Source", "Sink", "Quantity", "Unit Cost", "Total Cost"
        );
        println!("{}", "-".repeat(TABLE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&self, step: &AllocationStep<T>, stats: &HeuristicStatistics) {
        let elapsed = self.start_time.elapsed().as_secs_f64() * 1_000.0;
        let elapsed_field = format!("{:.3}ms", elapsed);

        println!(
            "{:<9} | {:<6} | {:<6} | {:<6} | {:<12} | {:<10} | {:<14}",
            elapsed_field,
            stats.iterations,
            step.source.get(),
            step.sink.get(),
            step.quantity,
            step.unit_cost,
            step.total_cost
        );
    }
}

impl<T> Default for LogMonitor<T>
where
    T: Quantity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(show_zero_allocations: {})",
            self.show_zero_allocations
        )
    }
}

impl<T> AllocationMonitor<T> for LogMonitor<T>
where
    T: Quantity,
{
    fn on_enter(&mut self, model: &TransportModel<T>) {
        self.start_time = Instant::now();
        self.print_header(model);
    }

    fn on_allocate(&mut self, step: &AllocationStep<T>, stats: &HeuristicStatistics) {
        if self.show_zero_allocations || !step.quantity.is_zero() {
            self.log_line(step, stats);
        }
    }

    fn on_exit(&mut self, stats: &HeuristicStatistics) {
        println!("{}", "-".repeat(TABLE_WIDTH));
        println!(
            "Allocation finished: {} steps, {} cells scanned.",
            stats.iterations, stats.cells_scanned
        );
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

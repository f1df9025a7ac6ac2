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

use crate::{ledger::AllocationStep, stats::HeuristicStatistics};
use freight_core::num::quantity::Quantity;
use freight_model::model::TransportModel;

/// Observer hooks invoked by a heuristic while it fills a plan.
pub trait AllocationMonitor<T>: Send + Sync
where
    T: Quantity,
{
    /// Called once before the first cell is written.
    fn on_enter(&mut self, model: &TransportModel<T>);

    /// Called after every cell the heuristic writes, including zero shipments.
    fn on_allocate(&mut self, step: &AllocationStep<T>, stats: &HeuristicStatistics);

    /// Called once the heuristic has stopped.
    fn on_exit(&mut self, stats: &HeuristicStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<T> std::fmt::Debug for dyn AllocationMonitor<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn AllocationMonitor<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationMonitor({})", self.name())
    }
}

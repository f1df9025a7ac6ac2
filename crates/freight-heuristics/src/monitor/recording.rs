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

/// Keeps every step a heuristic takes, in order.
///
/// Mostly useful in tests and for replaying how a plan came about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordingMonitor<T> {
    steps: Vec<AllocationStep<T>>,
    final_statistics: Option<HeuristicStatistics>,
    runs: usize,
}

impl<T> RecordingMonitor<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            final_statistics: None,
            runs: 0,
        }
    }

    /// Steps of the most recent run.
    #[inline]
    pub fn steps(&self) -> &[AllocationStep<T>] {
        &self.steps
    }

    /// Statistics reported when the most recent run finished, if it did.
    #[inline]
    pub fn final_statistics(&self) -> Option<&HeuristicStatistics> {
        self.final_statistics.as_ref()
    }

    /// Number of runs this monitor has observed.
    #[inline]
    pub fn runs(&self) -> usize {
        self.runs
    }

    #[inline]
    pub fn into_steps(self) -> Vec<AllocationStep<T>> {
        self.steps
    }
}

impl<T> AllocationMonitor<T> for RecordingMonitor<T>
where
    T: Quantity,
{
    fn on_enter(&mut self, model: &TransportModel<T>) {
        self.steps.clear();
        self.steps
            .reserve(model.num_sources() + model.num_sinks().saturating_sub(1));
        self.final_statistics = None;
        self.runs += 1;
    }

    fn on_allocate(&mut self, step: &AllocationStep<T>, _stats: &HeuristicStatistics) {
        self.steps.push(*step);
    }

    fn on_exit(&mut self, stats: &HeuristicStatistics) {
        self.final_statistics = Some(stats.clone());
    }

    fn name(&self) -> &str {
        "RecordingMonitor"
    }
}

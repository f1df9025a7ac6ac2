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
    error::AllocationError, monitor::allocation_monitor::AllocationMonitor,
    result::HeuristicOutcome,
};
use freight_core::num::quantity::Quantity;
use freight_model::model::TransportModel;

/// A constructive heuristic producing an initial feasible shipment plan.
///
/// Implementations must be deterministic: the same model always yields the
/// same plan, and the model is never modified.
pub trait InitialPlanHeuristic<T>
where
    T: Quantity,
{
    /// Returns the name of the heuristic.
    fn name(&self) -> &str;

    /// Builds a plan for `model`, reporting every shipment to `monitor`.
    fn construct<M>(
        &mut self,
        model: &TransportModel<T>,
        monitor: &mut M,
    ) -> Result<HeuristicOutcome<T>, AllocationError>
    where
        M: AllocationMonitor<T> + ?Sized;
}

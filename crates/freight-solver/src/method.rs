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

use freight_core::num::quantity::Quantity;
use freight_heuristics::{
    error::AllocationError, heuristic::InitialPlanHeuristic, minimum_cost::MinimumCost,
    monitor::allocation_monitor::AllocationMonitor, northwest::NorthwestCorner,
    result::HeuristicOutcome,
};
use freight_model::model::TransportModel;

/// The initial-plan heuristics the solver can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Method {
    #[default]
    NorthwestCorner,
    MinimumCost,
}

impl Method {
    /// Every method, in the order `Solver::compare` runs and ranks them.
    pub const ALL: [Method; 2] = [Method::NorthwestCorner, Method::MinimumCost];

    /// Human readable name, as printed in reports.
    pub const fn name(&self) -> &'static str {
        match self {
            Method::NorthwestCorner => "Northwest Corner",
            Method::MinimumCost => "Minimum Cost",
        }
    }

    /// Runs the heuristic behind this method on `model`.
    pub fn construct<T, M>(
        &self,
        model: &TransportModel<T>,
        monitor: &mut M,
    ) -> Result<HeuristicOutcome<T>, AllocationError>
    where
        T: Quantity,
        M: AllocationMonitor<T> + ?Sized,
    {
        match self {
            Method::NorthwestCorner => NorthwestCorner::new().construct(model, monitor),
            Method::MinimumCost => MinimumCost::new().construct(model, monitor),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A string that names no known method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError {
    input: String,
}

impl ParseMethodError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown method '{}', expected 'northwest-corner' or 'minimum-cost'",
            self.input
        )
    }
}

impl std::error::Error for ParseMethodError {}

impl std::str::FromStr for Method {
    type Err = ParseMethodError;

    /// Accepts the kebab-case names and the usual abbreviations, ignoring
    /// case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "northwest-corner" | "northwest" | "nw" | "nwc" => Ok(Method::NorthwestCorner),
            "minimum-cost" | "min-cost" | "least-cost" | "mc" | "lcm" => Ok(Method::MinimumCost),
            _ => Err(ParseMethodError {
                input: s.to_string(),
            }),
        }
    }
}

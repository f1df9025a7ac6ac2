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

//! # Solver Facade
//!
//! Wires the loader, the heuristics and the renderer together: text goes in,
//! a plan and its report come out.
//!
//! ## Highlights
//!
//! - `solve` / `solve_str` / `solve_path`: one configured method, optionally
//!   traced to stdout through a `LogMonitor`.
//! - `compare`: every method in `Method::ALL` runs on its own thread using
//!   `std::thread::scope`; the cheapest plan wins and ties go to the method
//!   listed first.
//! - `SolverBuilder`: consuming builder for method, verbosity, loader and
//!   renderer.
//!
//! ## Usage
//!
//! ```rust
//! use freight_solver::{method::Method, solver::SolverBuilder};
//!
//! let solver = SolverBuilder::<i64>::new()
//!     .method(Method::MinimumCost)
//!     .build();
//!
//! let outcome = solver
//!     .solve_str("20, 30, 25", "10, 25, 40", "8,6,10; 9,12,13; 14,9,16")
//!     .unwrap();
//! assert_eq!(outcome.total_cost(), 835);
//! assert_eq!(
//!     solver.render(&outcome),
//!     "0\t20\t0\n10\t0\t20\n0\t5\t20\nTotal cost: 835"
//! );
//! ```

use crate::{error::SolveError, method::Method};
use freight_core::num::quantity::Quantity;
use freight_heuristics::{
    error::AllocationError,
    monitor::{log::LogMonitor, no_op::NoOperationMonitor},
    result::{HeuristicOutcome, Residual},
    stats::HeuristicStatistics,
};
use freight_model::{
    loading::ProblemLoader,
    model::TransportModel,
    plan::{AllocationPlan, PlanRenderer},
};
use std::path::Path;

/// How much the solver reports while a heuristic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Nothing is printed.
    #[default]
    Quiet,
    /// Every shipment is printed as a table line.
    Trace,
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verbosity::Quiet => write!(f, "Quiet"),
            Verbosity::Trace => write!(f, "Trace"),
        }
    }
}

/// The outcome of one method on one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T> {
    method: Method,
    outcome: HeuristicOutcome<T>,
}

impl<T> SolverOutcome<T>
where
    T: Quantity,
{
    #[inline]
    pub fn new(method: Method, outcome: HeuristicOutcome<T>) -> Self {
        Self { method, outcome }
    }

    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    #[inline]
    pub fn plan(&self) -> &AllocationPlan<T> {
        self.outcome.plan()
    }

    #[inline]
    pub fn residual(&self) -> &Residual<T> {
        self.outcome.residual()
    }

    #[inline]
    pub fn statistics(&self) -> &HeuristicStatistics {
        self.outcome.statistics()
    }

    #[inline]
    pub fn total_cost(&self) -> T {
        self.outcome.total_cost()
    }

    #[inline]
    pub fn into_outcome(self) -> HeuristicOutcome<T> {
        self.outcome
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolverOutcome(method: {}, total_cost: {})",
            self.method,
            self.total_cost()
        )
    }
}

/// Side-by-side results of every method on the same model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    outcomes: Vec<SolverOutcome<T>>,
    best: usize,
}

impl<T> Comparison<T>
where
    T: Quantity,
{
    /// Picks the cheapest outcome; among equal costs the earliest one wins.
    fn from_outcomes(outcomes: Vec<SolverOutcome<T>>) -> Self {
        debug_assert!(!outcomes.is_empty());
        let best = outcomes
            .iter()
            .enumerate()
            .min_by_key(|(i, o)| (o.total_cost(), *i))
            .map(|(i, _)| i)
            .unwrap_or(0);
        Self { outcomes, best }
    }

    /// All outcomes, in `Method::ALL` order.
    #[inline]
    pub fn outcomes(&self) -> &[SolverOutcome<T>] {
        &self.outcomes
    }

    /// The cheapest outcome.
    #[inline]
    pub fn best(&self) -> &SolverOutcome<T> {
        &self.outcomes[self.best]
    }

    /// The outcome of one particular method.
    pub fn get(&self, method: Method) -> Option<&SolverOutcome<T>> {
        self.outcomes.iter().find(|o| o.method() == method)
    }

    #[inline]
    pub fn into_outcomes(self) -> Vec<SolverOutcome<T>> {
        self.outcomes
    }
}

impl<T> std::fmt::Display for Comparison<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{:<18} {}", outcome.method().name(), outcome.total_cost())?;
        }
        write!(f, "Cheapest: {}", self.best().method())
    }
}

#[derive(Debug, Clone)]
pub struct Solver<T> {
    method: Method,
    verbosity: Verbosity,
    loader: ProblemLoader<T>,
    renderer: PlanRenderer,
}

impl<T> Solver<T>
where
    T: Quantity,
{
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[inline]
    pub fn loader(&self) -> &ProblemLoader<T> {
        &self.loader
    }

    #[inline]
    pub fn renderer(&self) -> &PlanRenderer {
        &self.renderer
    }

    /// Runs the configured method on `model`.
    pub fn solve(&self, model: &TransportModel<T>) -> Result<SolverOutcome<T>, SolveError> {
        let outcome = self.run(self.method, model)?;
        Ok(SolverOutcome::new(self.method, outcome))
    }

    /// Parses the three text fields with the configured loader and solves.
    pub fn solve_str(
        &self,
        supply: &str,
        demand: &str,
        cost: &str,
    ) -> Result<SolverOutcome<T>, SolveError> {
        let model = self.loader.load(supply, demand, cost)?;
        self.solve(&model)
    }

    /// Loads an instance file (supply line, demand line, cost rows) and solves.
    pub fn solve_path<P: AsRef<Path>>(&self, path: P) -> Result<SolverOutcome<T>, SolveError> {
        let model = self.loader.from_path(path)?;
        self.solve(&model)
    }

    /// Runs every method in `Method::ALL` concurrently and ranks the plans.
    ///
    /// Runs are always quiet, whatever the configured verbosity, since trace
    /// tables from several threads would interleave. If more than one method
    /// fails, the error of the method listed first is returned.
    pub fn compare(&self, model: &TransportModel<T>) -> Result<Comparison<T>, SolveError> {
        let results: Vec<Result<HeuristicOutcome<T>, AllocationError>> =
            std::thread::scope(|scope| {
                let handles: Vec<_> = Method::ALL
                    .iter()
                    .map(|&method| {
                        scope.spawn(move || {
                            method.construct(model, &mut NoOperationMonitor::new())
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                    })
                    .collect()
            });

        let mut outcomes = Vec::with_capacity(results.len());
        for (method, result) in Method::ALL.into_iter().zip(results) {
            outcomes.push(SolverOutcome::new(method, result?));
        }

        Ok(Comparison::from_outcomes(outcomes))
    }

    /// Like `compare`, reading the three text fields first.
    pub fn compare_str(
        &self,
        supply: &str,
        demand: &str,
        cost: &str,
    ) -> Result<Comparison<T>, SolveError> {
        let model = self.loader.load(supply, demand, cost)?;
        self.compare(&model)
    }

    /// Renders the plan of `outcome` with the configured renderer.
    #[inline]
    pub fn render(&self, outcome: &SolverOutcome<T>) -> String {
        self.renderer.render(outcome.plan())
    }

    fn run(
        &self,
        method: Method,
        model: &TransportModel<T>,
    ) -> Result<HeuristicOutcome<T>, AllocationError> {
        match self.verbosity {
            Verbosity::Quiet => method.construct(model, &mut NoOperationMonitor::new()),
            Verbosity::Trace => {
                println!("Solving with {}", method);
                method.construct(model, &mut LogMonitor::new())
            }
        }
    }
}

impl<T> std::fmt::Display for Solver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solver(method: {}, verbosity: {})",
            self.method, self.verbosity
        )
    }
}

#[derive(Debug, Clone)]
pub struct SolverBuilder<T> {
    method: Method,
    verbosity: Verbosity,
    loader: ProblemLoader<T>,
    renderer: PlanRenderer,
}

impl<T> Default for SolverBuilder<T>
where
    T: Quantity,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SolverBuilder<T>
where
    T: Quantity,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            method: Method::default(),
            verbosity: Verbosity::default(),
            loader: ProblemLoader::new(),
            renderer: PlanRenderer::default(),
        }
    }

    #[inline]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[inline]
    pub fn monitor_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    #[inline]
    pub fn loader(mut self, loader: ProblemLoader<T>) -> Self {
        self.loader = loader;
        self
    }

    #[inline]
    pub fn renderer(mut self, renderer: PlanRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[inline]
    pub fn build(self) -> Solver<T> {
        Solver {
            method: self.method,
            verbosity: self.verbosity,
            loader: self.loader,
            renderer: self.renderer,
        }
    }
}

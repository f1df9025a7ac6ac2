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

//! Allocation plans and their text rendering.
//!
//! An `AllocationPlan` is what every initial-plan heuristic hands back: the
//! shipment grid (same shape as the cost matrix) and the total cost that was
//! accumulated while the grid was filled. Plans know nothing about how they
//! were produced; they only offer read access, feasibility checks against a
//! `TransportModel`, and rendering.
//!
//! The default `Display` output is one line per source with the shipped
//! quantities separated by tabs, followed by a `Total cost: <n>` line.
//! `PlanRenderer` allows changing the header, separator and label.

use crate::{
    index::{SinkIndex, SourceIndex, flatten_index},
    model::TransportModel,
};
use freight_core::num::quantity::Quantity;

/// A feasible shipment plan and its total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationPlan<T> {
    num_sources: usize,
    num_sinks: usize,
    /// Row-major shipped quantities, `num_sources * num_sinks` entries.
    shipments: Vec<T>,
    total_cost: T,
}

impl<T> AllocationPlan<T>
where
    T: Quantity,
{
    /// Constructs a new `AllocationPlan`.
    ///
    /// # Panics
    ///
    /// Panics if `shipments.len() != num_sources * num_sinks`.
    pub fn new(num_sources: usize, num_sinks: usize, shipments: Vec<T>, total_cost: T) -> Self {
        assert_eq!(
            shipments.len(),
            num_sources * num_sinks,
            "called AllocationPlan::new with inconsistent shape: {} x {} needs {} cells but got {}",
            num_sources,
            num_sinks,
            num_sources * num_sinks,
            shipments.len()
        );

        Self {
            num_sources,
            num_sinks,
            shipments,
            total_cost,
        }
    }

    /// Returns the number of sources (rows).
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    /// Returns the number of sinks (columns).
    #[inline]
    pub fn num_sinks(&self) -> usize {
        self.num_sinks
    }

    /// Returns the total cost accumulated while the plan was built.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the flattened, row-major shipment grid.
    #[inline]
    pub fn shipments(&self) -> &[T] {
        &self.shipments
    }

    /// Returns the quantity shipped from `source` to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn shipment(&self, source: SourceIndex, sink: SinkIndex) -> T {
        assert!(
            source.get() < self.num_sources && sink.get() < self.num_sinks,
            "called `AllocationPlan::shipment` with index out of bounds: shape is {}x{} but the cell is ({}, {})",
            self.num_sources,
            self.num_sinks,
            source.get(),
            sink.get()
        );

        self.shipments[flatten_index(self.num_sinks, source, sink)]
    }

    /// Returns the shipments leaving `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not in `0..num_sources()`.
    #[inline]
    pub fn row(&self, source: SourceIndex) -> &[T] {
        let start = flatten_index(self.num_sinks, source, SinkIndex::new(0));
        &self.shipments[start..start + self.num_sinks]
    }

    /// Iterates over the shipment rows in source order.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        SourceIndex::range(self.num_sources).map(move |source| self.row(source))
    }

    /// Total quantity shipped out of `source`, or `None` if the sum
    /// overflows `T`.
    pub fn shipped_from(&self, source: SourceIndex) -> Option<T> {
        checked_sum(self.row(source).iter().copied())
    }

    /// Total quantity shipped into `sink`, or `None` if the sum overflows `T`.
    ///
    /// # Panics
    ///
    /// Panics if `sink` is not in `0..num_sinks()`.
    pub fn shipped_to(&self, sink: SinkIndex) -> Option<T> {
        assert!(
            sink.get() < self.num_sinks,
            "called `AllocationPlan::shipped_to` with sink index out of bounds: the len is {} but the index is {}",
            self.num_sinks,
            sink.get()
        );

        checked_sum(
            SourceIndex::range(self.num_sources)
                .map(|source| self.shipments[flatten_index(self.num_sinks, source, sink)]),
        )
    }

    /// Total quantity shipped over all cells, or `None` if the sum overflows
    /// `T`.
    pub fn total_shipped(&self) -> Option<T> {
        checked_sum(self.shipments.iter().copied())
    }

    /// Cells with a positive shipment, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (SourceIndex, SinkIndex, T)> + '_ {
        let num_sinks = self.num_sinks;
        self.shipments
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_positive())
            .map(move |(flat, &x)| {
                (
                    SourceIndex::new(flat / num_sinks),
                    SinkIndex::new(flat % num_sinks),
                    x,
                )
            })
    }

    /// Recomputes `Σ shipment × cost` from scratch against `model`.
    ///
    /// Returns `None` if the shapes differ or the sum overflows `T`. Used to
    /// verify the incrementally accumulated `total_cost`.
    pub fn recomputed_cost(&self, model: &TransportModel<T>) -> Option<T> {
        if !self.has_shape_of(model) {
            return None;
        }

        self.shipments
            .iter()
            .zip(model.costs())
            .try_fold(T::zero(), |acc, (&x, &c)| {
                acc.checked_add_val(x.checked_mul_val(c)?)
            })
    }

    /// Returns `true` if the plan has the same shape as `model`.
    #[inline]
    pub fn has_shape_of(&self, model: &TransportModel<T>) -> bool {
        self.num_sources == model.num_sources() && self.num_sinks == model.num_sinks()
    }

    /// Returns `true` if no shipment is negative, no source ships more than
    /// its supply and no sink receives more than its demand. A row or column
    /// whose sum overflows `T` counts as infeasible.
    pub fn is_feasible_for(&self, model: &TransportModel<T>) -> bool {
        if !self.has_shape_of(model) {
            return false;
        }
        if self.shipments.iter().any(|x| x.is_negative()) {
            return false;
        }

        let rows_ok = SourceIndex::range(self.num_sources)
            .all(|source| {
                self.shipped_from(source)
                    .is_some_and(|shipped| shipped <= model.source_supply(source))
            });
        let cols_ok = SinkIndex::range(self.num_sinks).all(|sink| {
            self.shipped_to(sink)
                .is_some_and(|shipped| shipped <= model.sink_demand(sink))
        });

        rows_ok && cols_ok
    }

    /// Returns `true` if every source ships exactly its supply and every sink
    /// receives exactly its demand.
    pub fn is_complete_for(&self, model: &TransportModel<T>) -> bool {
        self.has_shape_of(model)
            && SourceIndex::range(self.num_sources)
                .all(|source| self.shipped_from(source) == Some(model.source_supply(source)))
            && SinkIndex::range(self.num_sinks)
                .all(|sink| self.shipped_to(sink) == Some(model.sink_demand(sink)))
    }

    /// Copies the shipments out as one `Vec` per source.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Splits the plan into `(allocation rows, total cost)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freight_model::plan::AllocationPlan;
    /// let plan = AllocationPlan::new(1, 2, vec![3_i64, 0], 21);
    /// let (allocation, total_cost) = plan.into_parts();
    /// assert_eq!(allocation, vec![vec![3, 0]]);
    /// assert_eq!(total_cost, 21);
    /// ```
    pub fn into_parts(self) -> (Vec<Vec<T>>, T) {
        (self.to_rows(), self.total_cost)
    }
}

fn checked_sum<T, I>(values: I) -> Option<T>
where
    T: Quantity,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::zero(), |acc, v| acc.checked_add_val(v))
}

impl<T> std::fmt::Display for AllocationPlan<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        PlanRenderer::default().write_plan(f, self)
    }
}

/// Text rendering options for an `AllocationPlan`.
///
/// # Examples
///
/// ```rust
/// # use freight_model::plan::{AllocationPlan, PlanRenderer};
/// let plan = AllocationPlan::new(2, 2, vec![3_i64, 0, 0, 4], 10);
///
/// assert_eq!(plan.to_string(), "3\t0\n0\t4\nTotal cost: 10");
///
/// let renderer = PlanRenderer::new()
///     .with_header("Initial plan:")
///     .cell_separator(" ")
///     .total_label("Cost");
/// assert_eq!(renderer.render(&plan), "Initial plan:\n3 0\n0 4\nCost: 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRenderer {
    header: Option<String>,
    cell_separator: String,
    total_label: String,
}

impl Default for PlanRenderer {
    fn default() -> Self {
        Self {
            header: None,
            cell_separator: "\t".to_string(),
            total_label: "Total cost".to_string(),
        }
    }
}

impl PlanRenderer {
    /// Creates a renderer with the default layout.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints `header` on its own line above the grid.
    #[inline]
    pub fn with_header<S: Into<String>>(mut self, header: S) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Removes the header line.
    #[inline]
    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }

    /// Sets the string placed between two cells of a row.
    #[inline]
    pub fn cell_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.cell_separator = separator.into();
        self
    }

    /// Sets the label of the closing total-cost line.
    #[inline]
    pub fn total_label<S: Into<String>>(mut self, label: S) -> Self {
        self.total_label = label.into();
        self
    }

    /// Renders `plan` into a new `String`.
    pub fn render<T: Quantity>(&self, plan: &AllocationPlan<T>) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_plan(&mut out, plan);
        out
    }

    /// Writes `plan` into any `fmt::Write` sink.
    pub fn write_plan<W, T>(&self, out: &mut W, plan: &AllocationPlan<T>) -> std::fmt::Result
    where
        W: std::fmt::Write,
        T: Quantity,
    {
        if let Some(header) = &self.header {
            writeln!(out, "{}", header)?;
        }

        for row in plan.rows() {
            for (i, x) in row.iter().enumerate() {
                if i > 0 {
                    out.write_str(&self.cell_separator)?;
                }
                write!(out, "{}", x)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}: {}", self.total_label, plan.total_cost())
    }
}

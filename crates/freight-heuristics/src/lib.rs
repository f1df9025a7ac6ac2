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

//! # Freight Heuristics
//!
//! Constructive heuristics that turn a `TransportModel` into an initial
//! feasible shipment plan.
//!
//! ## Modules
//!
//! - `northwest`: the Northwest Corner method, which ignores costs and fills
//!   the grid from the top-left cell.
//! - `minimum_cost`: the Minimum Cost method, which always fills the cheapest
//!   eligible cell next.
//! - `ledger`: working supply, demand and shipments shared by both methods,
//!   with checked cost accounting.
//! - `heuristic`: the `InitialPlanHeuristic` trait.
//! - `monitor`: observer hooks (`NoOperationMonitor`, `LogMonitor`,
//!   `RecordingMonitor`).
//! - `result`, `stats`, `error`: outcome, counters and failures of a run.
//!
//! ## Quick start
//!
//! ```rust
//! let plan = freight_heuristics::minimum_cost(
//!     &[20_i64, 30, 25],
//!     &[10, 25, 40],
//!     &[vec![8, 6, 10], vec![9, 12, 13], vec![14, 9, 16]],
//! )
//! .unwrap();
//! assert_eq!(plan.total_cost(), 835);
//! ```

pub mod error;
pub mod heuristic;
pub mod ledger;
pub mod minimum_cost;
pub mod monitor;
pub mod northwest;
pub mod result;
pub mod stats;

use crate::{
    error::AllocationError, heuristic::InitialPlanHeuristic, minimum_cost::MinimumCost,
    monitor::no_op::NoOperationMonitor, northwest::NorthwestCorner,
};
use freight_core::num::quantity::Quantity;
use freight_model::{model::TransportModel, plan::AllocationPlan};

/// Validates the raw input and runs `heuristic` on it without monitoring.
fn allocate<T, R, H>(
    mut heuristic: H,
    supply: &[T],
    demand: &[T],
    cost: &[R],
) -> Result<AllocationPlan<T>, AllocationError>
where
    T: Quantity,
    R: AsRef<[T]>,
    H: InitialPlanHeuristic<T>,
{
    let model = TransportModel::from_rows(supply, demand, cost)?;
    let outcome = heuristic.construct(&model, &mut NoOperationMonitor::new())?;
    Ok(outcome.into_plan())
}

/// Allocates with the Northwest Corner method.
///
/// `cost` must have one row per supply entry and one column per demand
/// entry; anything else is rejected as `AllocationError::Malformed`.
///
/// ```rust
/// let plan = freight_heuristics::northwest_corner(&[5_i32], &[3], &[[7]]).unwrap();
/// assert_eq!(plan.to_rows(), vec![vec![3]]);
/// assert_eq!(plan.total_cost(), 21);
/// ```
pub fn northwest_corner<T, R>(
    supply: &[T],
    demand: &[T],
    cost: &[R],
) -> Result<AllocationPlan<T>, AllocationError>
where
    T: Quantity,
    R: AsRef<[T]>,
{
    allocate(NorthwestCorner::new(), supply, demand, cost)
}

/// Allocates with the Minimum Cost method.
///
/// Same input contract as [`northwest_corner`].
pub fn minimum_cost<T, R>(
    supply: &[T],
    demand: &[T],
    cost: &[R],
) -> Result<AllocationPlan<T>, AllocationError>
where
    T: Quantity,
    R: AsRef<[T]>,
{
    allocate(MinimumCost::new(), supply, demand, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_model::model::ModelError;

    #[test]
    fn test_free_functions_agree_with_heuristics() {
        let cost = [vec![8_i64, 6, 10], vec![9, 12, 13], vec![14, 9, 16]];
        let nw = northwest_corner(&[20, 30, 25], &[10, 25, 40], &cost).unwrap();
        let mc = minimum_cost(&[20, 30, 25], &[10, 25, 40], &cost).unwrap();
        assert_eq!(nw.total_cost(), 915);
        assert_eq!(mc.total_cost(), 835);
    }

    #[test]
    fn test_missing_cost_row_is_malformed() {
        let err = northwest_corner(&[1_i64, 2], &[3], &[vec![1]]).unwrap_err();
        assert_eq!(
            err,
            AllocationError::Malformed(ModelError::RowCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_short_cost_row_is_malformed() {
        let err = minimum_cost(&[1_i64, 2], &[3, 4], &[vec![1, 1], vec![1]]).unwrap_err();
        assert!(matches!(
            err,
            AllocationError::Malformed(ModelError::ColumnCountMismatch { source, .. })
                if source.get() == 1
        ));
    }

    #[test]
    fn test_extra_cost_rows_and_columns_are_ignored() {
        let wide = northwest_corner(&[5_i64], &[3], &[vec![7, 1]]).unwrap();
        assert_eq!(wide.into_parts(), (vec![vec![3]], 21));

        let tall = minimum_cost(&[5_i64], &[3], &[vec![7], vec![2]]).unwrap();
        assert_eq!(tall.into_parts(), (vec![vec![3]], 21));

        // The cheap cell (0, 1) lies outside the demand range and is never used.
        let mc = minimum_cost(&[5_i64], &[3], &[vec![7, 1]]).unwrap();
        assert_eq!(mc.total_cost(), 21);
    }

    #[test]
    fn test_negative_supply_is_malformed() {
        let err = minimum_cost(&[-1_i64], &[1], &[vec![1]]).unwrap_err();
        assert!(matches!(err, AllocationError::Malformed(_)));
    }
}

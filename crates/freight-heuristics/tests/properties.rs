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

use freight_heuristics::heuristic::InitialPlanHeuristic;
use freight_heuristics::minimum_cost::MinimumCost;
use freight_heuristics::monitor::no_op::NoOperationMonitor;
use freight_heuristics::northwest::NorthwestCorner;
use freight_heuristics::result::HeuristicOutcome;
use freight_heuristics::{minimum_cost as minimum_cost_plan, northwest_corner};
use freight_model::index::{SinkIndex, SourceIndex};
use freight_model::model::TransportModel;
use proptest::prelude::*;

type RawInstance = (Vec<i64>, Vec<i64>, Vec<Vec<i64>>);

/// Raw supply, demand and cost rows with up to 6 sources and sinks.
fn raw_instance() -> impl Strategy<Value = RawInstance> {
    (0usize..7, 0usize..7).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(0i64..60, rows),
            prop::collection::vec(0i64..60, cols),
            prop::collection::vec(prop::collection::vec(-20i64..100, cols), rows),
        )
    })
}

/// Arbitrary (possibly unbalanced) instances.
fn instance() -> impl Strategy<Value = TransportModel<i64>> {
    raw_instance().prop_map(|(supply, demand, cost)| {
        TransportModel::from_rows(&supply, &demand, &cost).expect("generated shape is valid")
    })
}

/// Balanced instances: supply and demand are the row and column sums of a
/// random non-negative grid, so a complete plan always exists.
fn balanced_instance() -> impl Strategy<Value = TransportModel<i64>> {
    (1usize..7, 1usize..7).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(0i64..25, cols), rows),
            prop::collection::vec(prop::collection::vec(1i64..50, cols), rows),
        )
            .prop_map(move |(grid, cost)| {
                let supply: Vec<i64> = grid.iter().map(|row| row.iter().sum()).collect();
                let demand: Vec<i64> = (0..cols).map(|c| grid.iter().map(|row| row[c]).sum()).collect();
                TransportModel::from_rows(&supply, &demand, &cost).expect("generated shape is valid")
            })
    })
}

fn northwest(model: &TransportModel<i64>) -> HeuristicOutcome<i64> {
    NorthwestCorner::new()
        .construct(model, &mut NoOperationMonitor::new())
        .expect("small instances cannot overflow")
}

fn minimum_cost(model: &TransportModel<i64>) -> HeuristicOutcome<i64> {
    MinimumCost::new()
        .construct(model, &mut NoOperationMonitor::new())
        .expect("small instances cannot overflow")
}

fn check_outcome(model: &TransportModel<i64>, outcome: &HeuristicOutcome<i64>) {
    let plan = outcome.plan();
    assert!(plan.has_shape_of(model));
    assert!(plan.is_feasible_for(model));
    assert_eq!(plan.recomputed_cost(model), Some(plan.total_cost()));

    let total_supply = model.total_supply().unwrap();
    let total_demand = model.total_demand().unwrap();
    assert_eq!(plan.total_shipped(), Some(total_supply.min(total_demand)));

    let residual = outcome.residual();
    for source in SourceIndex::range(model.num_sources()) {
        assert_eq!(
            residual.source_supply(source),
            model.source_supply(source) - plan.shipped_from(source).unwrap()
        );
    }
    for sink in SinkIndex::range(model.num_sinks()) {
        assert_eq!(
            residual.sink_demand(sink),
            model.sink_demand(sink) - plan.shipped_to(sink).unwrap()
        );
    }
    // Once a heuristic stops, leftovers remain on one side only.
    assert!(residual.leftover_supply() == 0 || residual.unmet_demand() == 0);
}

proptest! {
    #[test]
    fn northwest_corner_is_feasible_and_consistent(model in instance()) {
        let outcome = northwest(&model);
        check_outcome(&model, &outcome);
        let iterations = outcome.statistics().iterations as usize;
        prop_assert!(iterations <= (model.num_sources() + model.num_sinks()).saturating_sub(1));
    }

    #[test]
    fn minimum_cost_is_feasible_and_consistent(model in instance()) {
        let outcome = minimum_cost(&model);
        check_outcome(&model, &outcome);
        prop_assert_eq!(outcome.statistics().zero_allocations, 0);
        let iterations = outcome.statistics().iterations as usize;
        prop_assert!(iterations <= (model.num_sources() + model.num_sinks()).saturating_sub(1));
    }

    #[test]
    fn heuristics_are_deterministic(model in instance()) {
        let (first, second) = (northwest(&model), northwest(&model));
        prop_assert_eq!(first.plan(), second.plan());
        let (first, second) = (minimum_cost(&model), minimum_cost(&model));
        prop_assert_eq!(first.plan(), second.plan());
    }

    #[test]
    fn balanced_instances_are_shipped_completely(model in balanced_instance()) {
        let nw = northwest(&model);
        let mc = minimum_cost(&model);
        prop_assert!(nw.plan().is_complete_for(&model));
        prop_assert!(mc.plan().is_complete_for(&model));
        prop_assert!(nw.residual().is_exhausted());
        prop_assert!(mc.residual().is_exhausted());
    }

    #[test]
    fn caller_vectors_can_be_reused_across_calls((supply, demand, cost) in raw_instance()) {
        let (supply_before, demand_before, cost_before) =
            (supply.clone(), demand.clone(), cost.clone());

        let nw = northwest_corner(&supply, &demand, &cost).unwrap();
        let mc = minimum_cost_plan(&supply, &demand, &cost).unwrap();
        prop_assert_eq!(&supply, &supply_before);
        prop_assert_eq!(&demand, &demand_before);
        prop_assert_eq!(&cost, &cost_before);

        // Same vectors, other order: the plans do not depend on earlier calls.
        let mc_again = minimum_cost_plan(&supply, &demand, &cost).unwrap();
        let nw_again = northwest_corner(&supply, &demand, &cost).unwrap();
        prop_assert_eq!(nw, nw_again);
        prop_assert_eq!(mc, mc_again);
    }
}

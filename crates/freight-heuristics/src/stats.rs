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

use freight_core::num::ops::SaturatingAddVal;
use std::time::Duration;

/// Counters collected while a heuristic fills a plan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeuristicStatistics {
    /// Number of cells written (one per loop iteration).
    pub iterations: u64,
    /// Cells written with a quantity of zero. Northwest Corner produces these
    /// when a row and a column are exhausted at the same time.
    pub zero_allocations: u64,
    /// Cells inspected while searching for the next cell to fill.
    pub cells_scanned: u64,
    /// Wall-clock time spent inside the heuristic.
    pub time_total: Duration,
}

impl HeuristicStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add_val(1);
    }

    #[inline]
    pub fn on_zero_allocation(&mut self) {
        self.zero_allocations = self.zero_allocations.saturating_add_val(1);
    }

    #[inline]
    pub fn on_cells_scanned(&mut self, cells: u64) {
        self.cells_scanned = self.cells_scanned.saturating_add_val(cells);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for HeuristicStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Heuristic Statistics:")?;
        writeln!(f, "  Iterations:        {}", self.iterations)?;
        writeln!(f, "  Zero allocations:  {}", self.zero_allocations)?;
        writeln!(f, "  Cells scanned:     {}", self.cells_scanned)?;
        writeln!(f, "  Total time:        {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = HeuristicStatistics::default();
        stats.on_iteration();
        stats.on_iteration();
        stats.on_zero_allocation();
        stats.on_cells_scanned(9);
        stats.on_cells_scanned(4);
        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.zero_allocations, 1);
        assert_eq!(stats.cells_scanned, 13);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = HeuristicStatistics {
            cells_scanned: u64::MAX - 1,
            ..Default::default()
        };
        stats.on_cells_scanned(10);
        assert_eq!(stats.cells_scanned, u64::MAX);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let text = HeuristicStatistics::default().to_string();
        assert!(text.starts_with("Heuristic Statistics:"));
        assert!(text.contains("Iterations:"));
        assert!(text.contains("Zero allocations:"));
        assert!(text.contains("Cells scanned:"));
        assert!(text.contains("Total time:"));
    }
}

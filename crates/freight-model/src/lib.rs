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

//! # Freight Model
//!
//! **The domain model for transportation problems.**
//!
//! This crate holds the data the heuristics consume and produce, and the text
//! boundary through which instances enter the system.
//!
//! ## Architecture
//!
//! * **`index`**: strongly typed `SourceIndex` / `SinkIndex` so rows and
//!   columns of the cost matrix cannot be swapped.
//! * **`model`**: the immutable `TransportModel` (supply, demand, flattened
//!   cost matrix) and its `ModelBuilder`.
//! * **`loading`**: `ProblemLoader`, which turns delimited text into a model
//!   and rejects empty or non-numeric input with a precise location.
//! * **`plan`**: `AllocationPlan`, the shipment grid plus total cost returned
//!   by every heuristic, and `PlanRenderer` for its tab-separated text form.
//!
//! ## Design Philosophy
//!
//! 1. **Fail fast**: the cost matrix shape and the sign of supply and demand
//!    are validated when a model is built, never while a heuristic indexes
//!    into it.
//! 2. **Flat storage**: the cost matrix and shipment grid are single row-major
//!    vectors.
//! 3. **Unbalanced is valid**: totals are reported through
//!    `TransportModel::balance`, not rejected.

pub mod index;
pub mod loading;
pub mod model;
pub mod plan;

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

use freight_core::index::{TypedIndex, TypedIndexTag};

/// Tag for source (supplier) indices, i.e. rows of the cost matrix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SourceIndexTag;

impl TypedIndexTag for SourceIndexTag {
    const NAME: &'static str = "SourceIndex";
}

/// A typed index for sources.
pub type SourceIndex = TypedIndex<SourceIndexTag>;

/// Tag for sink (consumer) indices, i.e. columns of the cost matrix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SinkIndexTag;

impl TypedIndexTag for SinkIndexTag {
    const NAME: &'static str = "SinkIndex";
}

/// A typed index for sinks.
pub type SinkIndex = TypedIndex<SinkIndexTag>;

/// Position of the (source, sink) cell in a row-major flattened matrix.
#[inline(always)]
pub fn flatten_index(num_sinks: usize, source: SourceIndex, sink: SinkIndex) -> usize {
    source.get() * num_sinks + sink.get()
}

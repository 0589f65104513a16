// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use serde::{Deserialize, Serialize};

use crate::mesh::DEFAULT_VERTEX_TOLERANCE;

/// Default for [`TraceConfig::relocate_interior_points`].
pub const DEFAULT_RELOCATE_INTERIOR_POINTS: bool = true;

/// Tracer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Absolute per-axis distance under which a path point counts as being
    /// on a mesh vertex. Exact coincidence always counts, so `0.0` disables
    /// only the fuzzy match.
    pub vertex_tolerance: f64,
    /// Confirm interior points with a full point-location scan, so that a
    /// point also claimed by an earlier, overlapping triangle is not taken
    /// as interior to the current one.
    pub relocate_interior_points: bool,
    /// Crossings allowed while resolving a single path segment before the
    /// walk is declared divergent. `None` uses the mesh's triangle count.
    pub max_crossings_per_segment: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            vertex_tolerance: DEFAULT_VERTEX_TOLERANCE,
            relocate_interior_points: DEFAULT_RELOCATE_INTERIOR_POINTS,
            max_crossings_per_segment: None,
        }
    }
}

impl TraceConfig {
    pub fn with_vertex_tolerance(mut self, tolerance: f64) -> Self {
        self.vertex_tolerance = tolerance;
        self
    }

    pub fn with_max_crossings_per_segment(mut self, limit: usize) -> Self {
        self.max_crossings_per_segment = Some(limit);
        self
    }

    pub fn with_relocate_interior_points(mut self, relocate: bool) -> Self {
        self.relocate_interior_points = relocate;
        self
    }
}

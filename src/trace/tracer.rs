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

use tracing::{debug, info};

use crate::error::TraceError;
use crate::geometry::{Path, PathVertex, Point2, Segment2, SegmentOps};
use crate::kernel::Orientation;
use crate::mesh::{HalfEdge, HalfEdgeId, Location, Mesh, Triangle, TriangleId};
use crate::trace::config::TraceConfig;

/// Summary of a successful trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceReport {
    /// Crossing points inserted into the path.
    pub crossings: usize,
    /// Triangle transitions, counting the start triangle.
    pub triangles_visited: usize,
}

/// Walk state carried between path vertices.
#[derive(Debug)]
struct WalkState {
    current: TriangleId,
    /// Slot of the half-edge the walk entered `current` through.
    entry: Option<usize>,
    segment_crossings: usize,
}

impl WalkState {
    fn enter(&mut self, through: HalfEdgeId, report: &mut TraceReport) {
        self.current = through.triangle;
        self.entry = Some(through.slot);
        report.triangles_visited += 1;
    }

    fn resolved(&mut self) {
        self.segment_crossings = 0;
    }
}

/// Walks a path across a mesh, triangle to triangle, draping it onto the
/// surface. The mesh is only read, so several tracers may share one.
#[derive(Debug, Clone)]
pub struct Tracer<'m> {
    mesh: &'m Mesh,
    config: TraceConfig,
}

impl<'m> Tracer<'m> {
    pub fn new(mesh: &'m Mesh) -> Self {
        Self::with_config(mesh, TraceConfig::default())
    }

    pub fn with_config(mesh: &'m Mesh, config: TraceConfig) -> Self {
        Self { mesh, config }
    }

    pub fn mesh(&self) -> &'m Mesh {
        self.mesh
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Drapes `path` in place.
    ///
    /// On success every vertex carries an elevation and a vertex has been
    /// inserted wherever the path crosses a mesh edge. On failure the path
    /// keeps whatever the walk resolved before stopping.
    pub fn trace(&self, path: &mut Path) -> Result<TraceReport, TraceError> {
        let Some(start) = path.get(0).map(|v| v.position) else {
            return Ok(TraceReport::default());
        };
        let first = self
            .mesh
            .enclosing_triangle(&start)
            .ok_or(TraceError::StartPointOutsideMesh { point: start })?;
        path.set_elevation(0, first.elevation(&start));

        let mut state = WalkState {
            current: first.id,
            entry: None,
            segment_crossings: 0,
        };
        let mut report = TraceReport {
            crossings: 0,
            triangles_visited: 1,
        };

        // `path` grows while we walk it; re-read its length every step
        let mut i = 1;
        while i < path.len() {
            self.step(path, i, &mut state, &mut report)?;
            i += 1;
        }

        info!(
            vertices = path.len(),
            crossings = report.crossings,
            triangles = report.triangles_visited,
            "path draped"
        );
        Ok(report)
    }

    /// Resolves `path[i]` given that `path[i - 1]` lies in the current triangle.
    fn step(
        &self,
        path: &mut Path,
        i: usize,
        state: &mut WalkState,
        report: &mut TraceReport,
    ) -> Result<(), TraceError> {
        let triangle = self.mesh.triangle(state.current);
        let p1 = path[i - 1].position;
        let p2 = path[i].position;

        match self.locate(triangle, &p2) {
            Location::Vertex(slot) => {
                path.set_elevation(i, triangle.elevation(&p2));
                Err(self.vertex_landing(i, triangle.vertices[slot]))
            }
            Location::Edge(slot) => {
                path.set_elevation(i, triangle.elevation(&p2));
                state.resolved();

                let edge = triangle.half_edge(slot);
                let Some(p3) = path.get(i + 1).map(|v| v.position) else {
                    debug!(index = i, edge = %edge.key, "path ends on an edge");
                    return Ok(());
                };

                if continues_across(edge, &p1, &p3) {
                    let flip = edge.flip.ok_or(TraceError::PathExitsMesh {
                        index: i,
                        edge: edge.key,
                        point: p2,
                    })?;
                    debug!(index = i, edge = %edge.key, to = flip.triangle.0, "edge hit, crossing over");
                    state.enter(flip, report);
                } else {
                    debug!(index = i, edge = %edge.key, "edge hit, staying");
                    state.entry = None;
                }
                Ok(())
            }
            Location::Interior => {
                path.set_elevation(i, triangle.elevation(&p2));
                state.resolved();
                state.entry = None;
                debug!(index = i, triangle = triangle.id.0, "interior");
                Ok(())
            }
            Location::Outside => self.cross(path, i, triangle, Segment2::new(p1, p2), state, report),
        }
    }

    /// Inserts the point where `segment` leaves `triangle` at `path[i]` and
    /// moves the walk to the neighbour across that edge.
    fn cross(
        &self,
        path: &mut Path,
        i: usize,
        triangle: &Triangle,
        segment: Segment2,
        state: &mut WalkState,
        report: &mut TraceReport,
    ) -> Result<(), TraceError> {
        let limit = self
            .config
            .max_crossings_per_segment
            .unwrap_or(self.mesh.triangles().len());
        if state.segment_crossings >= limit {
            return Err(TraceError::WalkDiverged { index: i, limit });
        }

        let (slot, point) = triangle
            .intersects_other_edges(state.entry, &segment)
            .ok_or(TraceError::MissingCrossing {
                index: i,
                triangle: triangle.id,
            })?;
        let edge = triangle.half_edge(slot);
        let vertex = PathVertex::draped(point, triangle.elevation(&point));

        // touching the edge at one of its endpoints: the next triangle is
        // somewhere in that vertex's fan, not necessarily across this edge
        if let Some(end) = edge.points.iter().position(|p| *p == point) {
            path.insert(i, vertex);
            return Err(self.vertex_landing(i, edge.vertices[end]));
        }

        let flip = edge.flip.ok_or(TraceError::PathExitsMesh {
            index: i,
            edge: edge.key,
            point,
        })?;

        path.insert(i, vertex);
        report.crossings += 1;
        state.segment_crossings += 1;
        debug!(
            index = i,
            x = point.x,
            y = point.y,
            edge = %edge.key,
            to = flip.triangle.0,
            "crossing"
        );
        state.enter(flip, report);
        Ok(())
    }

    fn locate(&self, triangle: &Triangle, p: &Point2) -> Location {
        let location = triangle.classify(p, self.config.vertex_tolerance);
        if location == Location::Interior
            && self.config.relocate_interior_points
            && self.mesh.enclosing_triangle(p).map(|t| t.id) != Some(triangle.id)
        {
            return Location::Outside;
        }
        location
    }

    fn vertex_landing(&self, index: usize, vertex: usize) -> TraceError {
        let candidates = self.mesh.spoke(vertex).to_vec();
        debug!(index, vertex, fan = candidates.len(), "path vertex on mesh vertex");
        TraceError::UnsupportedVertexLanding {
            index,
            vertex,
            candidates,
        }
    }
}

/// Decides, for a path that touches `edge` between `previous` and `next`,
/// whether it continues into the flip triangle.
///
/// A `next` collinear with the edge stays put; the following step resolves it
/// as another edge or vertex hit. A `previous` on the edge line is taken to be
/// on the owning triangle's interior side.
fn continues_across(edge: &HalfEdge, previous: &Point2, next: &Point2) -> bool {
    let next_side = Orientation::of(edge.orientation(next));
    if next_side == Orientation::Collinear {
        return false;
    }
    let previous_side = match Orientation::of(edge.orientation(previous)) {
        Orientation::Collinear => Orientation::CounterClockwise,
        side => side,
    };
    next_side != previous_side
}

/// Drapes `path` onto `mesh` with the default configuration.
pub fn drape(mesh: &Mesh, path: &mut Path) -> Result<TraceReport, TraceError> {
    Tracer::new(mesh).trace(path)
}

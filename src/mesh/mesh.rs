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

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace, warn};

use crate::error::MeshError;
use crate::geometry::{Point2, Point3};
use crate::mesh::basic_types::{EdgeKey, HalfEdgeId, TriangleId};
use crate::mesh::half_edge::HalfEdge;
use crate::mesh::triangle::Triangle;

/// A 2.5D triangulated surface: planar triangles whose vertices carry an
/// elevation. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Point3>,
    triangles: Vec<Triangle>,
    edge_map: HashMap<EdgeKey, HalfEdgeId>,
    /// Triangles incident to each vertex.
    spokes: Vec<Vec<TriangleId>>,
    pub(crate) duplicate_edges: Vec<(EdgeKey, [TriangleId; 2])>,
}

impl Mesh {
    /// Builds the mesh from vertex index triples (0-based) and `[x, y, z]`
    /// vertex coordinates, then pairs every half-edge with its flip.
    pub fn new(triangles: &[[usize; 3]], vertices: &[[f64; 3]]) -> Result<Self, MeshError> {
        let mut mesh = Self {
            vertices: vertices.iter().copied().map(Point3::from).collect(),
            triangles: Vec::with_capacity(triangles.len()),
            edge_map: HashMap::with_capacity(triangles.len() * 3),
            spokes: vec![Vec::new(); vertices.len()],
            duplicate_edges: Vec::new(),
        };

        for (face, &indices) in triangles.iter().enumerate() {
            mesh.add_triangle(face, indices)?;
        }
        mesh.connect_flips();

        debug!(
            vertices = mesh.vertices.len(),
            triangles = mesh.triangles.len(),
            boundary_edges = mesh.boundary_edges().count(),
            "built mesh"
        );
        Ok(mesh)
    }

    fn add_triangle(&mut self, face: usize, indices: [usize; 3]) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        if let Some((slot, &index)) = indices.iter().enumerate().find(|(_, i)| **i >= vertex_count) {
            return Err(MeshError::MalformedMesh {
                face,
                slot,
                index,
                vertex_count,
            });
        }
        let [a, b, c] = indices;
        if a == b || b == c || c == a {
            return Err(MeshError::DegenerateFace { face });
        }

        let id = TriangleId(self.triangles.len());
        let triangle = Triangle::new(id, indices, indices.map(|i| self.vertices[i]));

        for (slot, edge) in triangle.edges.iter().enumerate() {
            match self.edge_map.entry(edge.key) {
                Entry::Vacant(entry) => {
                    entry.insert(HalfEdgeId::new(id, slot));
                }
                Entry::Occupied(entry) => {
                    let owner = entry.get().triangle;
                    warn!(
                        edge = %edge.key,
                        first = owner.0,
                        second = id.0,
                        "directed edge shared by two triangles; keeping the first"
                    );
                    self.duplicate_edges.push((edge.key, [owner, id]));
                }
            }
        }

        for &v in &indices {
            self.spokes[v].push(id);
        }
        trace!(triangle = id.0, ?indices, "added triangle");

        self.triangles.push(triangle);
        Ok(())
    }

    fn connect_flips(&mut self) {
        let pairs: Vec<(HalfEdgeId, HalfEdgeId)> = self
            .edge_map
            .iter()
            .filter_map(|(key, &id)| self.edge_map.get(&key.reversed()).map(|&flip| (id, flip)))
            .collect();

        // each undirected interior edge shows up once per direction
        for (id, flip) in pairs {
            self.triangles[id.triangle.0].set_flip(id.slot, flip);
        }
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// # Panics
    /// If `id` did not come from this mesh.
    pub fn triangle(&self, id: TriangleId) -> &Triangle {
        &self.triangles[id.0]
    }

    pub fn get_triangle(&self, id: TriangleId) -> Option<&Triangle> {
        self.triangles.get(id.0)
    }

    /// # Panics
    /// If `id` did not come from this mesh.
    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        self.triangle(id.triangle).half_edge(id.slot)
    }

    pub fn get_half_edge(&self, id: HalfEdgeId) -> Option<&HalfEdge> {
        self.get_triangle(id.triangle)?.edges.get(id.slot)
    }

    /// The neighbour's half-edge over the same two vertices, if any.
    pub fn flip(&self, id: HalfEdgeId) -> Option<&HalfEdge> {
        self.half_edge(id).flip.map(|f| self.half_edge(f))
    }

    pub fn half_edge_by_key(&self, key: EdgeKey) -> Option<&HalfEdge> {
        self.edge_map.get(&key).map(|&id| self.half_edge(id))
    }

    pub fn half_edges(&self) -> impl Iterator<Item = &HalfEdge> {
        self.triangles.iter().flat_map(|t| t.edges.iter())
    }

    pub fn boundary_edges(&self) -> impl Iterator<Item = &HalfEdge> {
        self.half_edges().filter(|e| e.is_boundary())
    }

    /// Triangles incident to `vertex`; empty for unknown vertices.
    pub fn spoke(&self, vertex: usize) -> &[TriangleId] {
        self.spokes.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First triangle, in mesh order, that strictly contains `p`.
    ///
    /// Linear scan over all triangles.
    pub fn enclosing_triangle(&self, p: &Point2) -> Option<&Triangle> {
        self.triangles.iter().find(|t| t.is_inside(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> Mesh {
        // 3---2
        // | \ |
        // 0---1
        let vertices = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 2.0],
            [0.0, 1.0, 1.0],
        ];
        Mesh::new(&[[0, 1, 3], [1, 2, 3]], &vertices).unwrap()
    }

    #[test]
    fn shared_edge_is_paired() {
        let mesh = two_triangles();
        let e = mesh.half_edge_by_key(EdgeKey::new(1, 3)).unwrap();
        let flip = mesh.half_edge(e.flip.unwrap());
        assert_eq!(flip.key, EdgeKey::new(3, 1));
        assert_eq!(flip.triangle, TriangleId(1));
        assert_eq!(mesh.boundary_edges().count(), 4);
    }

    #[test]
    fn spokes() {
        let mesh = two_triangles();
        assert_eq!(mesh.spoke(0), &[TriangleId(0)]);
        assert_eq!(mesh.spoke(1), &[TriangleId(0), TriangleId(1)]);
        assert!(mesh.spoke(42).is_empty());
    }

    #[test]
    fn duplicate_directed_edges_are_recorded() {
        let vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
        // both faces contain the directed edge 0-1
        let mesh = Mesh::new(&[[0, 1, 2], [0, 1, 3]], &vertices).unwrap();
        assert_eq!(mesh.duplicate_edges.len(), 1);
        assert_eq!(mesh.half_edge_by_key(EdgeKey::new(0, 1)).unwrap().triangle, TriangleId(0));
    }
}

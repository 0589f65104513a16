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

mod helpers;

use drape::{EdgeKey, HalfEdgeId, Mesh, MeshError, Point2, SegmentOps, TriangleId};
use helpers::{grid, grid_triangles, grid_vertices};

#[test]
fn builds_every_triangle_and_vertex() {
    let mesh = grid();
    assert_eq!(mesh.triangles().len(), 8);
    assert_eq!(mesh.vertices().len(), 9);
    assert!(mesh.validate().is_empty());
}

#[test]
fn spokes_count_incident_triangles() {
    let mesh = grid();
    assert_eq!(mesh.spoke(0).len(), 1);
    assert_eq!(mesh.spoke(4).len(), 6);
    assert_eq!(mesh.spoke(2).len(), 2);
    assert_eq!(mesh.spoke(8).len(), 1);
    for &t in mesh.spoke(4) {
        assert!(mesh.triangle(t).vertices.contains(&4));
    }
}

#[test]
fn boundary_edges_have_no_flip() {
    let mesh = grid();
    let e = mesh.half_edge_by_key(EdgeKey::new(0, 1)).unwrap();
    assert!(e.flip.is_none());
    assert_eq!(mesh.boundary_edges().count(), 8);
}

#[test]
fn interior_edges_are_flip_paired() {
    let mesh = grid();
    let e = mesh.half_edge_by_key(EdgeKey::new(1, 4)).unwrap();
    let flip = mesh.half_edge(e.flip.unwrap());
    assert_eq!(flip.key, EdgeKey::new(4, 1));
    assert_eq!(mesh.half_edge(flip.flip.unwrap()).key, EdgeKey::new(1, 4));

    for t in mesh.triangles() {
        for slot in 0..3 {
            let id = t.half_edge_id(slot);
            let edge = mesh.half_edge(id);
            if let Some(flip) = mesh.flip(id) {
                assert_eq!(flip.flip, Some(id));
                assert_eq!(flip.key, edge.flip_key);
                assert_ne!(flip.triangle, edge.triangle);
            }
        }
    }
}

#[test]
fn enclosing_triangle_scans_in_order() {
    let mesh = grid();
    let t = mesh.enclosing_triangle(&Point2::new(0.25, 0.25)).unwrap();
    assert_eq!(t.id, TriangleId(0));
    let t = mesh.enclosing_triangle(&Point2::new(1.75, 1.75)).unwrap();
    assert_eq!(t.id, TriangleId(7));

    // outside, and on an edge: neither is strictly inside anything
    assert!(mesh.enclosing_triangle(&Point2::new(-0.5, 0.5)).is_none());
    assert!(mesh.enclosing_triangle(&Point2::new(0.5, 0.5)).is_none());
}

#[test]
fn half_edge_points_match_vertices() {
    let mesh = grid();
    for e in mesh.half_edges() {
        assert_eq!(e.points[0], mesh.vertices()[e.vertices[0]].xy());
        assert_eq!(e.points[1], mesh.vertices()[e.vertices[1]].xy());
        // the opposite vertex of the owner is on the interior side
        let owner = mesh.triangle(e.triangle);
        let opposite = owner
            .vertices
            .iter()
            .position(|v| !e.vertices.contains(v))
            .unwrap();
        assert!(e.orientation(&owner.points[opposite].xy()) < 0.0);
    }
}

#[test]
fn out_of_range_index_is_malformed() {
    let mut triangles = grid_triangles();
    triangles.push([2, 5, 9]);
    let err = Mesh::new(&triangles, &grid_vertices()).unwrap_err();
    assert_eq!(
        err,
        MeshError::MalformedMesh {
            face: 8,
            slot: 2,
            index: 9,
            vertex_count: 9,
        }
    );
    assert!(err.to_string().contains("face 8"));
}

#[test]
fn repeated_index_is_degenerate() {
    let err = Mesh::new(&[[0, 1, 1]], &grid_vertices()).unwrap_err();
    assert_eq!(err, MeshError::DegenerateFace { face: 0 });
}

#[test]
fn empty_mesh_encloses_nothing() {
    let mesh = Mesh::new(&[], &[]).unwrap();
    assert!(mesh.triangles().is_empty());
    assert!(mesh.enclosing_triangle(&Point2::new(0.0, 0.0)).is_none());
}

#[test]
fn checked_lookup_of_foreign_ids() {
    let mesh = grid();
    assert_eq!(mesh.get_triangle(TriangleId(7)).map(|t| t.vertices), Some([5, 8, 7]));
    assert!(mesh.get_triangle(TriangleId(8)).is_none());

    let e = mesh.get_half_edge(HalfEdgeId::new(TriangleId(0), 1)).unwrap();
    assert_eq!(e.key, EdgeKey::new(1, 3));
    assert!(mesh.get_half_edge(HalfEdgeId::new(TriangleId(0), 3)).is_none());
    assert!(mesh.get_half_edge(HalfEdgeId::new(TriangleId(42), 0)).is_none());
}

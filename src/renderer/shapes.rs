//! Shape tessellation for 2D primitives
//!
//! Star outlines are concave, so they are filled as a fan of triangles
//! around the star's center (every vertex is visible from it).

use glam::Vec2;

use crate::sim::Star;

/// A filled triangle in screen space
pub type Triangle = [Vec2; 3];

/// Fan-triangulate a closed outline around `center`
pub fn fan(center: Vec2, outline: &[Vec2]) -> Vec<Triangle> {
    if outline.len() < 2 {
        return Vec::new();
    }

    let mut triangles = Vec::with_capacity(outline.len());
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        triangles.push([center, a, b]);
    }
    triangles
}

/// Triangles covering a star's polygon
pub fn star_triangles(star: &Star) -> Vec<Triangle> {
    fan(star.center, &star.points)
}

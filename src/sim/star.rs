//! Star polygon geometry
//!
//! A star with `n` points is an outline of `2n` vertices around its center:
//! - even vertices are tips, at the full radius
//! - odd vertices are notches, at half the radius
//!
//! Vertex `i` sits at angle `i * PI / n`, measured in screen space (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::collision::Rect;
use crate::consts::{STAR_POINTS, WINDOW_HEIGHT};

/// Generate the outline of a star centered at `center`
pub fn star_points(center: Vec2, radius: f32, num_points: usize) -> Vec<Vec2> {
    let angle = PI / num_points as f32;
    (0..num_points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius / 2.0 };
            let theta = i as f32 * angle;
            center + Vec2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// A falling star
#[derive(Debug, Clone)]
pub struct Star {
    pub center: Vec2,
    pub radius: f32,
    /// Precomputed outline, translated together with the center
    pub points: Vec<Vec2>,
    /// Fall speed (pixels per tick)
    pub velocity: f32,
}

impl Star {
    pub fn new(center: Vec2, radius: f32, velocity: f32) -> Self {
        Self {
            center,
            radius,
            points: star_points(center, radius, STAR_POINTS),
            velocity,
        }
    }

    /// Move the star down by one tick
    pub fn advance(&mut self) {
        let step = Vec2::new(0.0, self.velocity);
        self.center += step;
        for point in &mut self.points {
            *point += step;
        }
    }

    /// Largest screen-space y of the outline
    pub fn lowest_y(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// True once the whole star has dropped below the window
    pub fn is_off_screen(&self) -> bool {
        self.lowest_y() > WINDOW_HEIGHT
    }

    /// Hit box anchored at the leading point, one radius on a side
    pub fn hitbox(&self) -> Rect {
        let lead = self.points.first().copied().unwrap_or(self.center);
        Rect::new(lead.x, lead.y, self.radius, self.radius)
    }
}

//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in arena pixel space (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};

/// Single triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Axis-aligned filled rectangle from its top-left corner
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Arrowhead ship with a notched tail and a cockpit stripe
pub fn player_ship(pos: Vec2, size: Vec2) -> Vec<Vertex> {
    let c = pos + size / 2.0;
    let (hw, hh) = (size.x / 2.0, size.y / 2.0);
    let nose = c + Vec2::new(0.0, -hh);
    let right = c + Vec2::new(hw, hh);
    let notch = c + Vec2::new(0.0, hh / 2.0);
    let left = c + Vec2::new(-hw, hh);

    let mut vertices = Vec::with_capacity(12);
    vertices.extend(triangle(nose, right, notch, colors::PLAYER));
    vertices.extend(triangle(nose, notch, left, colors::PLAYER));
    vertices.extend(rect(
        c + Vec2::new(-6.0, -size.y / 6.0),
        Vec2::new(12.0, size.y / 2.0),
        colors::COCKPIT,
    ));
    vertices
}

/// Point-up enemy hull with a vertical gradient and a shaded core
pub fn enemy_ship(pos: Vec2, size: Vec2) -> Vec<Vertex> {
    let c = pos + size / 2.0;
    let (hw, hh) = (size.x / 2.0, size.y / 2.0);

    let mut vertices = vec![
        Vertex::new(c.x, c.y - hh, colors::ENEMY_TOP),
        Vertex::new(c.x + hw, c.y + hh, colors::ENEMY_BOTTOM),
        Vertex::new(c.x - hw, c.y + hh, colors::ENEMY_BOTTOM),
    ];
    vertices.extend(rect(
        c + Vec2::new(-size.x / 4.0, -size.y / 4.0),
        Vec2::new(size.x / 2.0, size.y / 1.6),
        colors::ENEMY_SHADE,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 6.0);
    }

    #[test]
    fn test_circle_segments() {
        let v = circle(Vec2::ZERO, 5.0, [1.0; 4], 8);
        assert_eq!(v.len(), 24);
        for vert in &v {
            let r = Vec2::from(vert.position).length();
            assert!(r <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_ship_stays_in_hull() {
        let pos = Vec2::new(100.0, 500.0);
        let size = Vec2::new(42.0, 54.0);
        for v in player_ship(pos, size) {
            assert!(v.position[0] >= pos.x - 1e-4 && v.position[0] <= pos.x + size.x + 1e-4);
            assert!(v.position[1] >= pos.y - 1e-4 && v.position[1] <= pos.y + size.y + 1e-4);
        }
    }

    #[test]
    fn test_enemy_ship_vertices() {
        assert_eq!(enemy_ship(Vec2::ZERO, Vec2::splat(40.0)).len(), 9);
    }
}

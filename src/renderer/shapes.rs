//! Shape generation for 2D primitives
//!
//! All shapes are triangle lists in play-surface coordinates (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for full circles
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    sector(center, radius, 0.0, 2.0 * PI, color, segments)
}

/// Filled pie slice from `theta_start` to `theta_end` (radians, y down)
pub fn sector(
    center: Vec2,
    radius: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = theta_end - theta_start;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = theta_start + (i as f32 / segments as f32) * span;
        let theta2 = theta_start + ((i + 1) as f32 / segments as f32) * span;

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

/// Filled axis-aligned rectangle from its top-left corner
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Rectangle border of the given stroke width, drawn inside the bounds
pub fn rect_outline(min: Vec2, size: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(size.x / 2.0).min(size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(min, Vec2::new(size.x, w), color));
    vertices.extend(rect(Vec2::new(min.x, min.y + size.y - w), Vec2::new(size.x, w), color));
    vertices.extend(rect(min, Vec2::new(w, size.y), color));
    vertices.extend(rect(Vec2::new(min.x + size.x - w, min.y), Vec2::new(w, size.y), color));
    vertices
}

/// Thick line segment as a quad
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Connected thick segments through `points`
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    points
        .windows(2)
        .flat_map(|pair| line(pair[0], pair[1], width, color))
        .collect()
}

/// Dashed thick line: `dash` drawn, `gap` skipped, repeating from `a`
pub fn dashed_line(a: Vec2, b: Vec2, width: f32, dash: f32, gap: f32, color: [f32; 4]) -> Vec<Vertex> {
    let length = a.distance(b);
    let period = dash + gap;
    if length <= 0.0 || dash <= 0.0 || period <= 0.0 {
        return Vec::new();
    }
    let dir = (b - a) / length;

    let mut vertices = Vec::new();
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        vertices.extend(line(a + dir * t, a + dir * end, width, color));
        t += period;
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_triangle_count() {
        let v = circle(Vec2::ZERO, 10.0, WHITE, 16);
        assert_eq!(v.len(), 16 * 3);
        // All rim vertices at the radius
        for vertex in v.iter().skip(1).step_by(3) {
            let p = Vec2::from(vertex.position);
            assert!((p.length() - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_upper_half_sector() {
        // PI -> 2PI sweeps through -y, which is up on screen
        let v = sector(Vec2::ZERO, 10.0, PI, 2.0 * PI, WHITE, 8);
        assert!(v.iter().all(|vertex| vertex.position[1] <= 1e-3));
    }

    #[test]
    fn test_rect_bounds() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), WHITE);
        assert_eq!(v.len(), 6);
        for vertex in &v {
            assert!(vertex.position[0] >= 10.0 && vertex.position[0] <= 40.0);
            assert!(vertex.position[1] >= 20.0 && vertex.position[1] <= 60.0);
        }
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_dashed_line_dash_count() {
        // 30 units with 6 on / 6 off: dashes start at 0, 12, 24
        let v = dashed_line(Vec2::ZERO, Vec2::new(30.0, 0.0), 2.0, 6.0, 6.0, WHITE);
        assert_eq!(v.len(), 3 * 6);
        assert!(v.iter().all(|vertex| vertex.position[0] <= 30.0 + 1e-3));
    }

    #[test]
    fn test_polyline_segments() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        assert_eq!(polyline(&points, 2.0, WHITE).len(), 12);
    }
}

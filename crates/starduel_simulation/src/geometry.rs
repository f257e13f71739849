//! Axis-aligned rectangles in arena units.
//!
//! Координаты целочисленные: origin в левом верхнем углу арены, y растёт вниз.
//! Целые числа дают точный детерминизм без float drift.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-left corner in arena units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Bounding box of a craft or projectile (top-left + size).
///
/// Half-open on both axes: covers `x..x + width` and `y..y + height`,
/// so boxes that only touch along an edge do not overlap.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn from_parts(origin: Point, size: Extent) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        intersects(self, other)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Exact overlap test. Symmetric; empty boxes never collide.
pub fn intersects(a: &BoundingBox, b: &BoundingBox) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

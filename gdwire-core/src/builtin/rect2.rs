/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector2;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[repr(C)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    pub const fn from_components(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(width, height))
    }

    /// Bottom-right corner.
    pub fn end(self) -> Vector2 {
        self.position + self.size
    }

    pub fn area(self) -> f32 {
        self.size.x * self.size.y
    }

    /// Whether `point` lies inside; the right and bottom edges are excluded.
    pub fn has_point(self, point: Vector2) -> bool {
        let end = self.end();
        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment() {
        let rect = Rect2::from_components(1.0, 1.0, 2.0, 3.0);
        assert_eq!(rect.end(), Vector2::new(3.0, 4.0));
        assert_eq!(rect.area(), 6.0);
        assert!(rect.has_point(Vector2::new(1.0, 3.5)));
        assert!(!rect.has_point(Vector2::new(3.0, 2.0)));
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glam::{IVec2, IVec3, Vec2, Vec3};

/// 2D vector of `f32`.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    pub fn length(self) -> f32 {
        self.to_glam().length()
    }

    pub fn dot(self, with: Self) -> f32 {
        self.to_glam().dot(with.to_glam())
    }

    /// Unit vector in the same direction, or zero if `self` is zero.
    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }

    pub fn distance_to(self, to: Self) -> f32 {
        self.to_glam().distance(to.to_glam())
    }

    pub fn from_glam(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }

    pub fn to_glam(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl_vector_operators!(Vector2, f32, (x, y));

/// 2D vector of `i32`.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn from_glam(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }

    pub fn to_glam(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Converts to float components.
    pub fn cast_float(self) -> Vector2 {
        Vector2::from_glam(self.to_glam().as_vec2())
    }
}

impl_vector_operators!(Vector2i, i32, (x, y));

/// 3D vector of `f32`.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        self.to_glam().length()
    }

    pub fn dot(self, with: Self) -> f32 {
        self.to_glam().dot(with.to_glam())
    }

    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }

    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }

    pub fn from_glam(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn to_glam(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl_vector_operators!(Vector3, f32, (x, y, z));

/// 3D vector of `i32`.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub struct Vector3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3i {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn from_glam(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn to_glam(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl_vector_operators!(Vector3i, i32, (x, y, z));

// ----------------------------------------------------------------------------------------------------------------------------------------------

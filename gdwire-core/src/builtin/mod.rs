/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types that cross the wire.
//!
//! Two kinds exist:
//! * Plain values laid out like their engine counterparts (`Vector2`, `Color`, ...), copied into call frames.
//! * Engine-managed values (`GString`, `StringName`, `Callable`), whose storage is opaque to Rust and only touched by
//!   engine constructors/destructors. These are passed by pointer.

#[macro_use]
mod macros;

mod callable;
mod color;
mod rect2;
mod string;
mod string_name;
mod vectors;

pub use callable::Callable;
pub use color::Color;
pub use rect2::Rect2;
pub use string::GString;
pub use string_name::StringName;
pub use vectors::{Vector2, Vector2i, Vector3, Vector3i};

use crate::sys;

// Layouts must match the engine's (single precision).
sys::static_assert!(std::mem::size_of::<Vector2>() == 8);
sys::static_assert!(std::mem::size_of::<Vector2i>() == 8);
sys::static_assert!(std::mem::size_of::<Vector3>() == 12);
sys::static_assert!(std::mem::size_of::<Vector3i>() == 12);
sys::static_assert!(std::mem::size_of::<Color>() == 16);
sys::static_assert!(std::mem::size_of::<Rect2>() == 16);
sys::static_assert!(std::mem::size_of::<GString>() == 8);
sys::static_assert!(std::mem::size_of::<StringName>() == 8);
sys::static_assert!(std::mem::size_of::<Callable>() == 16);

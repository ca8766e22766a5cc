/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use super::builtin::{Callable, Color, GString, Rect2, StringName, Vector2, Vector2i, Vector3, Vector3i};
pub use super::classes::{
    AStar2D, Engine, IAStar2D, INode, INode2D, IObject, IRefCounted, IResource, ITimer, Node, Node2D, Object, RefCounted,
    Resource, Timer,
};
pub use super::global::Error;
pub use super::init::{gdextension, ExtensionLibrary, InitLevel};
pub use super::meta::error::ConvertError;
pub use super::obj::{Base, Gd, GdMut, GdRef, GodotClass, Inherits, InstanceId};
pub use super::register::{godot_api, GodotClass};
pub use super::{godot_error, godot_warn};

// Make trait methods available.
#[rustfmt::skip] // One per line.
mod trait_reexports {
    pub use crate::obj::EngineBitfield as _;
    pub use crate::obj::EngineEnum as _;
    pub use crate::obj::NewAlloc as _;
    pub use crate::obj::NewGd as _;
}

pub use trait_reexports::*;

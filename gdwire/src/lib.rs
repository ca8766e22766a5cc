/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Rust bindings for the GDExtension API
//!
//! Engine classes are generated from the engine's class database (`extension_api.json`). Each class struct exposes its
//! methods with Rust types; calls are marshalled into pointer call frames and dispatched through method binds that are
//! looked up once per class.
//!
//! ## Modules
//! * [`classes`]: engine classes, their virtual-method traits `I*` and per-class enums.
//! * [`global`]: global enums such as [`Error`][global::Error], and logging macros.
//! * [`obj`]: the `Gd<T>` smart pointer and class traits.
//! * [`builtin`]: value types that cross the wire (strings, vectors, colors, callables).
//! * [`init`]: the extension entry point.
//!
//! ## User classes
//! ```ignore
//! use gdwire::prelude::*;
//!
//! #[derive(GodotClass)]
//! #[class(base = Node, init)]
//! struct Player {
//!     base: Base<Node>,
//! }
//!
//! #[godot_api]
//! impl INode for Player {
//!     fn ready(&mut self) {
//!         godot_warn!("player {} ready", self.base.get_name());
//!     }
//! }
//!
//! struct MyExtension;
//!
//! #[gdextension]
//! unsafe impl ExtensionLibrary for MyExtension {}
//! ```

#[doc(inline)]
pub use gdwire_core::{builtin, classes, global, meta, obj};

#[doc(inline)]
pub use gdwire_core::{GENERATED_API_VERSION, GENERATED_API_VERSION_STRING, GENERATED_CLASS_COUNT};

#[doc(hidden)]
pub use gdwire_core::{private, sys};

/// Entry point and initialization levels.
pub mod init {
    pub use gdwire_core::init::*;

    // Re-exports
    pub use gdwire_macros::gdextension;
}

/// Registering user classes with the engine.
pub mod register {
    pub use gdwire_macros::{godot_api, GodotClass};
}

pub mod prelude;

pub use gdwire_core::{godot_error, godot_warn};

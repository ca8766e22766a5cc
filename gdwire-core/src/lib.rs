/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine classes generated from the class database, and the runtime they call into.
//!
//! Users depend on the `gdwire` crate, which re-exports the public modules of this one.

mod registry;
mod storage;

pub mod builtin;
pub mod classes;
pub mod global;
pub mod init;
pub mod meta;
pub mod obj;

#[doc(hidden)]
pub mod private;

pub use gdwire_ffi as sys;

// Output of generated code. Mimics the file structure, symbols are re-exported.
#[rustfmt::skip]
#[allow(unused_imports, unused_variables, unused_mut, unused_must_use, dead_code)]
#[allow(non_snake_case, non_upper_case_globals, non_camel_case_types)]
#[allow(clippy::all)]
mod gen;

/// Version of the class database the bindings were generated from.
pub use gen::central::{GENERATED_API_VERSION, GENERATED_API_VERSION_STRING, GENERATED_CLASS_COUNT};

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine classes, generated from the class database.
//!
//! Each class `X` comes with:
//! * struct `X`, reached through `Gd<X>`;
//! * trait `IX` with the virtual methods a user class extending `X` can override;
//! * module `x`, containing the class's enums and its low-level `Advanced` API.

pub use crate::gen::classes::*;

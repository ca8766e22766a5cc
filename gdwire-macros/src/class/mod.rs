/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod derive_godot_class;
mod godot_api;
mod inherent_impl;

pub use derive_godot_class::derive_godot_class;
pub use godot_api::attribute_godot_api;

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Errors in conversions between engine objects and Rust types.

use std::error::Error;
use std::fmt;

use crate::meta::ClassName;
use crate::obj::InstanceId;

/// Failed conversion of an engine object into a Rust handle.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ConvertError {
    kind: ErrorKind,
}

/// Why a conversion failed.
#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The object exists, but is not an instance of the target class.
    CastFailed { from: String, to: ClassName },

    /// No live object has this instance ID.
    DeadInstance(InstanceId),

    /// A null object was passed where a valid one was expected.
    NullObject,
}

impl ConvertError {
    pub(crate) fn cast_failed(from: String, to: ClassName) -> Self {
        Self {
            kind: ErrorKind::CastFailed { from, to },
        }
    }

    pub(crate) fn dead_instance(instance_id: InstanceId) -> Self {
        Self {
            kind: ErrorKind::DeadInstance(instance_id),
        }
    }

    pub(crate) fn null_object() -> Self {
        Self {
            kind: ErrorKind::NullObject,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::CastFailed { from, to } => write!(f, "cannot cast {from} object to {to}"),
            ErrorKind::DeadInstance(id) => write!(f, "no live object with {id:?}"),
            ErrorKind::NullObject => f.write_str("object is null"),
        }
    }
}

impl Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let cast = ConvertError::cast_failed("Node".to_string(), ClassName::new_static("Timer"));
        assert_eq!(cast.to_string(), "cannot cast Node object to Timer");

        let id = InstanceId::try_from_i64(77).expect("non-zero");
        let dead = ConvertError::dead_instance(id);
        assert_eq!(dead.kind(), &ErrorKind::DeadInstance(id));
        assert_eq!(dead.to_string(), "no live object with InstanceId(77)");

        assert_eq!(ConvertError::null_object().to_string(), "object is null");
    }
}

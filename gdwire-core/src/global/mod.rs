/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Global enums (not belonging to a class) and engine logging.

mod print;

use std::fmt;

pub use crate::gen::global_enums::*;
#[doc(hidden)]
pub use print::{print_engine_message, MessageKind};

use crate::obj::EngineEnum;

impl Error {
    /// Whether this is [`Error::OK`].
    pub fn is_ok(self) -> bool {
        self == Error::OK
    }

    /// `Ok(())` for [`Error::OK`], otherwise `Err(self)`.
    ///
    /// Allows engine error codes to be propagated with `?`.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            "" => write!(f, "unknown error ({})", self.ord()),
            name => f.write_str(name),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_ordinals_follow_engine() {
        assert_eq!(Error::OK.ord(), 0);
        assert_eq!(Error::FAILED.ord(), 1);
        assert_eq!(Error::ERR_OUT_OF_MEMORY.ord(), 6);
        assert_eq!(Error::from_ord(7), Error::ERR_FILE_NOT_FOUND);
    }

    #[test]
    fn error_into_result() {
        assert_eq!(Error::OK.into_result(), Ok(()));
        assert_eq!(Error::FAILED.into_result(), Err(Error::FAILED));
    }

    #[test]
    fn unknown_ordinal_survives() {
        let unknown = Error::from_ord(1234);
        assert_eq!(unknown.ord(), 1234);
        assert_eq!(Error::try_from_ord(1234), None);
        assert_eq!(unknown.to_string(), "unknown error (1234)");
        assert_eq!(Error::ERR_UNAVAILABLE.to_string(), "ERR_UNAVAILABLE");
    }
}

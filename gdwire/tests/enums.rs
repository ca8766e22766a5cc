/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod mock;

use gdwire::classes::node::ProcessMode;
use gdwire::classes::object::ConnectFlags;
use gdwire::classes::text_server::Feature;
use gdwire::global::{MethodFlags, Side};
use gdwire::obj::{EngineBitfield, EngineEnum};
use gdwire::prelude::*;

struct EnumTests;

#[gdextension]
unsafe impl ExtensionLibrary for EnumTests {}

fn start() {
    mock::start(gdext_rust_init);
}

#[test]
fn global_error_keeps_engine_names() {
    assert_eq!(Error::OK.ord(), 0);
    assert_eq!(Error::FAILED.ord(), 1);
    assert_eq!(Error::ERR_FILE_NOT_FOUND.ord(), 7);
    assert_eq!(Error::ERR_INVALID_PARAMETER.ord(), 31);

    assert_eq!(Error::ERR_INVALID_PARAMETER.as_str(), "ERR_INVALID_PARAMETER");
    assert_eq!(format!("{:?}", Error::OK), "OK");
    assert_eq!(Error::ERR_FILE_NOT_FOUND.to_string(), "ERR_FILE_NOT_FOUND");
}

#[test]
fn error_propagates_with_question_mark() {
    fn open_all(codes: &[Error]) -> Result<usize, Error> {
        for code in codes {
            code.into_result()?;
        }
        Ok(codes.len())
    }

    assert_eq!(open_all(&[Error::OK, Error::OK]), Ok(2));
    assert_eq!(open_all(&[Error::OK, Error::ERR_INVALID_PARAMETER, Error::FAILED]), Err(Error::ERR_INVALID_PARAMETER));

    let boxed: Box<dyn std::error::Error> = Box::new(Error::FAILED);
    assert_eq!(boxed.to_string(), "FAILED");
}

#[test]
fn unknown_ordinals_round_trip() {
    let unknown = Error::from_ord(4096);
    assert_eq!(unknown.ord(), 4096);
    assert_eq!(unknown.as_str(), "");
    assert_eq!(Error::try_from_ord(4096), None);
    assert_eq!(Error::try_from_ord(31), Some(Error::ERR_INVALID_PARAMETER));

    let mode = ProcessMode::from_ord(99);
    assert_eq!(mode.ord(), 99);
    assert!(format!("{mode:?}").contains("99"));
}

#[test]
fn class_enumerators_drop_shared_prefix() {
    assert_eq!(ProcessMode::INHERIT.ord(), 0);
    assert_eq!(ProcessMode::WHEN_PAUSED.ord(), 2);
    assert_eq!(ProcessMode::DISABLED.as_str(), "DISABLED");
    assert_eq!(Side::BOTTOM.ord(), 3);

    // "FLAG_" and "FLAGS_" differ in their second word, so only "METHOD_" is shared.
    assert_eq!(MethodFlags::FLAGS_DEFAULT.ord(), 1);

    // Values with gaps keep their engine ordinal.
    assert_eq!(gdwire::classes::file_access::ModeFlags::WRITE_READ.ord(), 7);

    use gdwire::classes::file_access::CompressionMode;
    let modes = [
        CompressionMode::FASTLZ,
        CompressionMode::DEFLATE,
        CompressionMode::ZSTD,
        CompressionMode::GZIP,
        CompressionMode::BROTLI,
    ];
    let ordinals: Vec<i32> = modes.iter().map(|mode| mode.ord()).collect();
    assert_eq!(ordinals, [0, 1, 2, 3, 4]);
    assert_eq!(Error::ERR_OUT_OF_MEMORY.ord(), 6);
}

#[test]
fn enum_survives_engine_round_trip() {
    start();

    let mut node = Node::new_alloc();
    assert_eq!(node.get_process_mode(), ProcessMode::INHERIT);

    for mode in [ProcessMode::ALWAYS, ProcessMode::WHEN_PAUSED, ProcessMode::from_ord(42)] {
        node.set_process_mode(mode);
        assert_eq!(node.get_process_mode(), mode);
    }

    node.free();
}

#[test]
fn bitfield_operations() {
    let features = Feature::SIMPLE_LAYOUT | Feature::SHAPING;
    assert_eq!(features.ord(), 1 | 8);
    assert!(features.is_set(Feature::SHAPING));
    assert!(!features.is_set(Feature::BIDI_LAYOUT));
    assert!(!features.is_set(Feature::SHAPING | Feature::BIDI_LAYOUT));

    let mut flags = MethodFlags::FLAG_NORMAL;
    flags |= MethodFlags::FLAG_CONST;
    assert_eq!(flags.ord(), 5);
    assert!(flags.is_set(MethodFlags::FLAGS_DEFAULT));

    assert_eq!(format!("{features:?}"), "Feature(SIMPLE_LAYOUT | SHAPING)");
    assert_eq!(format!("{:?}", Feature::from_ord(8 | 0x10000)), "Feature(SHAPING | 0x10000)");
    assert_eq!(MethodFlags::from_ord(0).ord(), 0);
    assert_eq!(ConnectFlags::ONE_SHOT.ord(), 4);
}

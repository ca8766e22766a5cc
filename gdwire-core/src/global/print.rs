/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Printing to the engine's error/warning log.

use std::ffi::CString;

use crate::sys;

#[doc(hidden)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MessageKind {
    Error,
    Warning,
}

// https://stackoverflow.com/a/40234666
#[macro_export]
#[doc(hidden)]
macro_rules! inner_function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! inner_godot_msg {
    ($kind:ident; $fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::global::print_engine_message(
            $crate::global::MessageKind::$kind,
            &format!($fmt $(, $args)*),
            $crate::inner_function!(),
            file!(),
            line!(),
        )
    };
}

/// Pushes a warning message to the engine's debugger and terminal.
#[macro_export]
macro_rules! godot_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(Warning; $fmt $(, $args)*)
    };
}

/// Pushes an error message to the engine's debugger and terminal.
///
/// Falls back to stderr if the engine is not loaded.
#[macro_export]
macro_rules! godot_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(Error; $fmt $(, $args)*)
    };
}

#[doc(hidden)]
pub fn print_engine_message(kind: MessageKind, msg: &str, function: &str, file: &str, line: u32) {
    if !sys::is_initialized() {
        eprintln!("[{kind:?}] {msg}");
        return;
    }

    let desc = to_c_string(msg);
    let function = to_c_string(function);
    let file = to_c_string(file);

    let print = match kind {
        MessageKind::Error => sys::interface_fn!(print_error),
        MessageKind::Warning => sys::interface_fn!(print_warning),
    };

    // SAFETY: all strings are NUL-terminated and outlive the call.
    unsafe {
        print(
            desc.as_ptr(),
            function.as_ptr(),
            file.as_ptr(),
            line as i32,
            sys::SYS_FALSE, // no toast notification in the editor
        );
    }
}

fn to_c_string(s: &str) -> CString {
    // Interior NULs would truncate the message.
    let sanitized = s.replace('\0', "\u{FFFD}");
    CString::new(sanitized).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_nul_is_replaced() {
        let c = to_c_string("a\0b");
        assert_eq!(c.to_str(), Ok("a\u{FFFD}b"));
    }

    #[test]
    fn function_name_without_suffix() {
        let name = crate::inner_function!();
        assert!(name.ends_with("function_name_without_suffix"), "{name}");
    }
}

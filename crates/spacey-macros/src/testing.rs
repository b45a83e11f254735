// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assertion macros for lexer tests.
//!
//! Each macro names the failing expression in its panic message; the
//! `Result` macros also accept a trailing format string for context.

/// Assert that an expression matches a pattern, with an optional guard.
///
/// # Example
///
/// ```
/// use spacey_macros::assert_matches;
///
/// let opening = "'abc'".chars().next();
/// assert_matches!(opening, Some('"' | '\''));
/// assert_matches!("0x1F".strip_prefix("0x"), Some(digits) if digits.len() == 2);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => {}
            ref other => panic!(
                "`{}` does not match `{}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat $(if $guard)?),
                other
            ),
        }
    };
}

/// Unwrap an `Ok`, panicking with the expression and error otherwise.
///
/// # Example
///
/// ```
/// use spacey_macros::assert_ok;
///
/// let radix = assert_ok!(u32::from_str_radix("ff", 16));
/// assert_eq!(radix, 255);
///
/// let octal = assert_ok!(u32::from_str_radix("377", 8), "octal digits in {:?}", "0o377");
/// assert_eq!(octal, 255);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr $(,)?) => {
        $crate::assert_ok!($expr, "")
    };
    ($expr:expr, $($context:tt)+) => {
        match $expr {
            Ok(value) => value,
            Err(err) => panic!(
                "`{}` failed: {:?} {}",
                stringify!($expr),
                err,
                format_args!($($context)+)
            ),
        }
    };
}

/// Unwrap an `Err`, panicking with the expression and value otherwise.
///
/// # Example
///
/// ```
/// use spacey_macros::assert_err;
///
/// let err = assert_err!(u8::from_str_radix("12", 2));
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// ```
#[macro_export]
macro_rules! assert_err {
    ($expr:expr $(,)?) => {
        $crate::assert_err!($expr, "")
    };
    ($expr:expr, $($context:tt)+) => {
        match $expr {
            Ok(value) => panic!(
                "`{}` succeeded unexpectedly: {:?} {}",
                stringify!($expr),
                value,
                format_args!($($context)+)
            ),
            Err(err) => err,
        }
    };
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative macros shared by the Spacey lexer crates.
//!
//! # Macros Overview
//!
//! ## Types
//! - [`str_enum!`] - Enum with a total two-way name table
//!
//! ## Testing
//! - [`assert_matches!`] - Assert an expression matches a pattern
//! - [`assert_ok!`] - Unwrap an `Ok` or panic with context
//! - [`assert_err!`] - Unwrap an `Err` or panic with context
//!
//! # Examples
//!
//! ```
//! use spacey_macros::*;
//!
//! str_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq)]
//!     pub enum Quote {
//!         Double => "DOUBLE",
//!         Single => "SINGLE",
//!     }
//! }
//!
//! assert_eq!(Quote::from_name("SINGLE"), Some(Quote::Single));
//! assert_matches!(Quote::from_name("BACKTICK"), None);
//! ```

#![warn(missing_docs)]

mod testing;
mod types;

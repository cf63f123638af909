//! Compile-time assertions.
//!
//! Each macro rejects the build when its condition is false, and compiles
//! to nothing when it holds. Three forms cover the three places a check
//! can appear:
//!
//! - [`static_assert!`]: an item, at module scope or inside a function body.
//! - [`static_assert_type!`]: a type, wherever the grammar wants one.
//! - [`static_assert_zero!`]: an expression that evaluates to `0`.
//!
//! The [`layout`] module adds size, alignment and field-offset checks built
//! on the item form.
//!
//! Every form takes a label identifier. A failing check reports
//! `static assertion failed: <label>` in rustc's const-evaluation error,
//! so the label should read as the invariant being enforced:
//!
//! ```ignore
//! hadron_static_assert::static_assert!(
//!     core::mem::size_of::<u32>() == 8,
//!     u32_must_be_eight_bytes
//! );
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod assert;
mod check;
pub mod layout;

pub use check::Assertion;

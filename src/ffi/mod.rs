//! FFI bindings to libcairo.
//!
//! This module contains low-level C bindings and the ownership handles
//! built on top of them. Users should prefer the safe Rust wrappers in
//! the parent modules.

pub mod handles;
pub mod raw;

pub use handles::*;
pub use raw::*;

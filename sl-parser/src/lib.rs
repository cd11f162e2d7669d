//! # sl
//!
//! A parser for the sl specification format, and the lowering that turns each
//! specified function into a signature stub plus a postcondition check.
//!
//! Pipeline
//!
//! The library is organised around one linear pipeline:
//!
//!     text -> lexing -> parsing -> ast -> lowering -> declarations
//!
//! Every stage is a plain function that either produces its full result or fails with
//! a structured error; nothing is printed and nothing is partially built. The stages are
//! also available as composable [transforms](sl::transforms), which is what the CLI and
//! the [loader](sl::loader) use.
//!
//! Rendering the declarations as text lives in [formats](sl::formats), outside the core.
//!
//! For sample documents used across the tests, see the [testing module](sl::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod sl;

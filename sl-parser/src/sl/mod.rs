//! Main module for sl library functionality

pub mod ast;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod loader;
pub mod lowering;
pub mod parsing;
pub mod sexpr;
pub mod testing;
pub mod token;
pub mod transforms;

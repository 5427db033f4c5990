//! Compilation bridge for embedded scripting engines.
//!
//! This crate is glue, not a compiler: the lexing, parsing, and code
//! generation all live inside an engine the embedding supplies via the
//! [`ScriptEngine`] trait. The bridge contributes exactly two operations,
//! [`compile_file`] and [`compile_source`], and the resource discipline
//! around them:
//!
//! - one parse arena per call, dropped on every exit path, so a parse tree
//!   never outlives the call that produced it;
//! - the file handle in [`compile_file`] is closed as soon as parsing
//!   returns, before code generation runs;
//! - engine state is borrowed per call, never owned or torn down here;
//! - a fresh compilation context per [`compile_source`] call, dropped with
//!   the call.
//!
//! Failures split into [`CompileError::Unavailable`] (the file could not be
//! opened; the engine was never invoked) and [`CompileError::Failed`] (the
//! engine rejected the source during parsing or code generation).

mod compile;
mod engine;
mod error;

pub use compile::{compile_file, compile_source};
pub use engine::ScriptEngine;
pub use error::CompileError;

pub mod prelude {
    pub use crate::compile::{compile_file, compile_source};
    pub use crate::engine::ScriptEngine;
    pub use crate::error::CompileError;
}

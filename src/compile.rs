//! The two bridge operations.
//!
//! Both walk the same pipeline: parse into an arena-backed tree, generate
//! code, hand the compiled unit to the caller. The arena lives on this
//! function's stack, so it is released on every exit path without any
//! cleanup code on the failure branches.
//!
//! # Example
//!
//! ```ignore
//! use script_bridge::{compile_file, compile_source, ScriptEngine};
//!
//! let engine = MyEngine::new();
//! let mut state = engine.create_state();
//!
//! let boot = compile_file(&engine, &mut state, "scripts/boot.scr")?;
//! let patch = compile_source(&engine, &mut state, "print('hot patch')")?;
//! ```

use crate::engine::ScriptEngine;
use crate::error::CompileError;
use bumpalo::Bump;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Compile the script at `path` into a callable unit.
///
/// If the file cannot be opened, returns [`CompileError::Unavailable`]
/// without touching the engine: no context, no arena, no parse attempt. The
/// file handle is closed as soon as parsing returns, before the parse
/// outcome is inspected and before code generation runs.
pub fn compile_file<E: ScriptEngine>(
    engine: &E,
    state: &mut E::State,
    path: impl AsRef<Path>,
) -> Result<E::Unit, CompileError<E::Error>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CompileError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let arena = Bump::new();

    // Scope the reader so the descriptor is closed right after parsing,
    // whether or not the parse succeeded.
    let parsed = {
        let mut reader = BufReader::new(file);
        engine.parse_file(state, &mut reader, None, &arena)
    };

    let tree = parsed.map_err(CompileError::Failed)?;
    engine
        .generate_code(state, &tree)
        .map_err(CompileError::Failed)
}

/// Compile an in-memory source string into a callable unit.
///
/// A fresh compilation context is created for this call only and dropped
/// when it returns; contexts are never reused across calls. The unit on
/// success is independent of any prior unit compiled from the same source.
pub fn compile_source<E: ScriptEngine>(
    engine: &E,
    state: &mut E::State,
    code: &str,
) -> Result<E::Unit, CompileError<E::Error>> {
    let mut context = engine.create_context(state);
    let arena = Bump::new();

    let tree = engine
        .parse_source(state, code, &mut context, &arena)
        .map_err(CompileError::Failed)?;

    engine
        .generate_code(state, &tree)
        .map_err(CompileError::Failed)
}

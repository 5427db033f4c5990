//! The engine collaborator surface.
//!
//! The bridge does not contain a lexer, parser, or code generator. All of
//! that lives behind [`ScriptEngine`], which an embedding implements for
//! whatever scripting runtime it hosts. The bridge only sequences the calls
//! and owns the per-call parse arena.

use bumpalo::Bump;
use std::io::Read;

/// An embedded scripting engine capable of parsing source and generating
/// executable code from the resulting parse tree.
///
/// The bridge never creates or tears down engine state on its own; it borrows
/// a [`State`](ScriptEngine::State) for the duration of a single call. The
/// parse arena is owned by the bridge and dropped on every exit path, so a
/// [`Tree`](ScriptEngine::Tree) can never outlive the call that produced it.
pub trait ScriptEngine {
    /// Global interpreter state. Created by the embedding, borrowed by the
    /// bridge one call at a time.
    type State;

    /// Per-call parse configuration. A fresh context is created for every
    /// in-memory compilation and dropped when the call returns.
    type Context;

    /// Parse tree handle, valid only while the arena it was allocated in is
    /// alive.
    type Tree<'arena>;

    /// The callable result of code generation. Owned by the caller on
    /// success; must not borrow from the parse arena.
    type Unit;

    /// Failure reported by parsing or code generation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a fresh interpreter state.
    fn create_state(&self) -> Self::State;

    /// Create a compilation context for string-based parsing.
    fn create_context(&self, state: &mut Self::State) -> Self::Context;

    /// Parse source read from an open file handle.
    ///
    /// The bridge passes `None` for the context; an engine whose file entry
    /// point needs one manages it internally. The reader is closed by the
    /// bridge as soon as this returns, so implementations must consume the
    /// input before returning.
    fn parse_file<'arena>(
        &self,
        state: &mut Self::State,
        file: &mut dyn Read,
        context: Option<&mut Self::Context>,
        arena: &'arena Bump,
    ) -> Result<Self::Tree<'arena>, Self::Error>;

    /// Parse an in-memory source string under the given context.
    fn parse_source<'arena>(
        &self,
        state: &mut Self::State,
        code: &str,
        context: &mut Self::Context,
        arena: &'arena Bump,
    ) -> Result<Self::Tree<'arena>, Self::Error>;

    /// Generate executable code from a parse tree.
    fn generate_code(
        &self,
        state: &mut Self::State,
        tree: &Self::Tree<'_>,
    ) -> Result<Self::Unit, Self::Error>;
}

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single bridge call.
///
/// The two variants keep "the source could not be read at all" separate from
/// "the engine rejected the source", while `Result::ok()` still collapses
/// both into a plain `Option` for callers that don't care.
#[derive(Debug, Error)]
pub enum CompileError<E>
where
    E: std::error::Error + 'static,
{
    /// The source file could not be opened. No parse was attempted and no
    /// arena was allocated.
    #[error("script source '{path}' is unavailable")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The engine reported a parse or code-generation failure.
    #[error("compilation failed")]
    Failed(#[source] E),
}

impl<E> CompileError<E>
where
    E: std::error::Error + 'static,
{
    /// True if the failure happened before any engine work started.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CompileError::Unavailable { .. })
    }

    /// True if the engine itself rejected the source.
    pub fn is_failed(&self) -> bool {
        matches!(self, CompileError::Failed(_))
    }

    /// The path that could not be opened, if that is what went wrong.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CompileError::Unavailable { path, .. } => Some(path),
            CompileError::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn unavailable_display_names_the_path() {
        let err: CompileError<Boom> = CompileError::Unavailable {
            path: PathBuf::from("scripts/init.scr"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("scripts/init.scr"));
        assert!(err.is_unavailable());
        assert_eq!(err.path(), Some(Path::new("scripts/init.scr")));
    }

    #[test]
    fn failed_chains_the_engine_error() {
        use std::error::Error as _;

        let err: CompileError<Boom> = CompileError::Failed(Boom);
        assert!(err.is_failed());
        assert!(err.path().is_none());
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }
}

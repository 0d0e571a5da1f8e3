//! Fatal, library-level errors — distinct from the tree-level Invalid
//! Token / Skip outcomes of spec.md §4.6, which are data, not errors. The
//! core never fails a parse by itself (spec.md §7 "user-visible failure:
//! there is none at this layer"); the only way an entrypoint returns
//! `Err` is a caller-configured guard rail (`ParserSettings::max_depth`)
//! actually tripping, mirroring the teacher's `Error` enum in `lib.rs`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The reader stack nested deeper than `ParserSettings::max_depth`
    /// allows (spec.md §5 "Resource bounds"). Unset by default — the core
    /// does not itself impose a limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;

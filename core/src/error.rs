//! Error types for schema construction and token parsing.
//!
//! The two enums split cleanly by lifecycle: [`SchemaError`] is raised
//! while a descriptor is built or a subcommand registered and indicates a
//! mistake in the schema declaration itself; [`ParseError`] is raised
//! while resolving tokens and indicates bad user input. The engine never
//! prints or exits — the front-end decides how to report either kind.

use thiserror::Error;

/// Schema declaration errors, surfaced when a parser is constructed.
///
/// These are programming errors in a field table or registration list,
/// not recoverable within a process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// More than one field is marked as the subcommand selector.
    #[error("schema declares more than one subcommand selector: `{first}` and `{second}`")]
    DuplicateSelector {
        /// Identifier of the first selector field.
        first: String,
        /// Identifier of the offending second selector field.
        second: String,
    },
    /// The subcommand selector is declared with a flag value kind.
    #[error("subcommand selector `{0}` must be a variant field, not a flag value")]
    SelectorNotVariant(String),
    /// A flag field is declared with the variant value kind.
    #[error("flag `{0}` cannot be of variant kind")]
    FlagIsVariant(String),
    /// A field identifier is not a PascalCase word.
    #[error("field identifier `{0}` is not PascalCase")]
    IdentNotPascal(String),
    /// Two flags resolve to the same effective long name.
    #[error("flags `{first}` and `{second}` both resolve to long name `--{long}`")]
    DuplicateLongName {
        /// Identifier of the flag that claimed the name first.
        first: String,
        /// Identifier of the colliding flag.
        second: String,
        /// The shared effective long name.
        long: String,
    },
    /// Two flags resolve to the same effective short name.
    #[error("flags `{first}` and `{second}` both resolve to short name `-{short}`")]
    DuplicateShortName {
        /// Identifier of the flag that claimed the name first.
        first: String,
        /// Identifier of the colliding flag.
        second: String,
        /// The shared effective short name.
        short: char,
    },
    /// A subcommand name is registered twice.
    #[error("subcommand `{0}` is already registered")]
    DuplicateCommand(String),
}

/// Token resolution errors, surfaced during `parse`.
///
/// Both variants carry the whole offending token so a front-end can echo
/// it back to the user. Resolution is fail-fast: the first bad token
/// aborts the pass with no error accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token matches no declared flag or registered subcommand.
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    /// A string-valued short flag appeared after boolean letters in a
    /// batched group, so its value cannot be separated from them.
    #[error("malformed flag `{0}`: a value-taking short flag must come first in a batch")]
    MalformedFlag(String),
}

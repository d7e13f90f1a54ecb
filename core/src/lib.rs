//! Declarative command-line parsing driven by static schema tables.
//!
//! Instead of hand-written per-flag parsing code, a configuration type
//! declares its surface once as a table of typed fields and the engine
//! resolves raw tokens against it:
//!
//! - [`FieldSpec`] / [`Schema`] — the field table a configuration type
//!   declares, and the trait routing resolved values into typed storage.
//! - [`SchemaDescriptor`] — the validated, indexed view of a table;
//!   schema mistakes surface here as [`SchemaError`].
//! - [`Parser`] — the engine: routes an optional subcommand token,
//!   resolves long (`--name[=value]`), short (`-x[value]`), and batched
//!   (`-xyz`) flags on both sides of the split, and renders help.
//! - [`to_kebab`] / [`to_pascal`] — the case conversions connecting
//!   field identifiers to user-facing flag names.
//!
//! The engine performs no I/O and holds no global state; a configured
//! [`Parser`] is immutable and reusable across calls and threads.
//!
//! # Example
//!
//! ```
//! use argline_core::{FieldSpec, FieldValue, Parser, Schema};
//!
//! #[derive(Debug, Default)]
//! struct Options {
//!     verbose: bool,
//!     work_dir: String,
//! }
//!
//! impl Schema for Options {
//!     fn fields() -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::boolean("Verbose").with_description("verbose output"),
//!             FieldSpec::text("WorkDir").with_description("working directory"),
//!         ]
//!     }
//!
//!     fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
//!         match (ident, value) {
//!             ("Verbose", FieldValue::Bool(v)) => self.verbose = v,
//!             ("WorkDir", FieldValue::Text(v)) => self.work_dir = v.to_string(),
//!             _ => {}
//!         }
//!     }
//! }
//!
//! let parser = Parser::<Options>::new()?;
//! let tokens: Vec<String> = ["-v", "--work-dir=/srv/projects"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let (options, _) = parser.parse(&tokens)?;
//!
//! assert!(options.verbose);
//! assert_eq!(options.work_dir, "/srv/projects");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod case;
mod engine;
mod error;
mod help;
mod resolve;
mod route;
mod schema;

pub use case::{to_kebab, to_pascal};
pub use engine::{AppInfo, Parser};
pub use error::{ParseError, SchemaError};
pub use schema::{FieldKind, FieldRole, FieldSpec, FieldValue, Schema, SchemaDescriptor};

//! The parse engine: descriptor caching, subcommand registration, and the
//! single public entry point.
//!
//! A [`Parser`] is configured once — root schema, application metadata,
//! subcommand registrations — and then reused; every `parse` call works on
//! a fresh pair of instances and shares nothing mutable, so one parser can
//! serve concurrent callers.

use crate::error::{ParseError, SchemaError};
use crate::help;
use crate::resolve::apply_token;
use crate::route::route;
use crate::schema::{FieldValue, Schema, SchemaDescriptor};

/// Application metadata rendered into help output.
#[derive(Debug, Clone)]
pub struct AppInfo {
    /// Program name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Licence name.
    pub licence: String,
    /// Free-text description.
    pub description: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "0.1.0".to_string(),
            licence: "MIT".to_string(),
            description: String::new(),
        }
    }
}

/// One registered subcommand: canonical name, help text, cached
/// descriptor, and the closure that populates and wraps its schema type.
pub(crate) struct Registration<C> {
    pub(crate) name: String,
    pub(crate) description: String,
    descriptor: SchemaDescriptor,
    build: Box<dyn Fn(&SchemaDescriptor, &[String]) -> Result<C, ParseError> + Send + Sync>,
}

/// The parse engine for a root schema `R` and a subcommand sum type `C`.
///
/// Descriptors are validated and indexed when the parser is built, so
/// schema mistakes surface as [`SchemaError`] here rather than as odd
/// behavior at parse time.
///
/// # Examples
///
/// ```
/// use argline_core::{FieldSpec, FieldValue, Parser, Schema};
///
/// #[derive(Debug, Default)]
/// struct RootArgs {
///     verbose: bool,
/// }
///
/// impl Schema for RootArgs {
///     fn fields() -> Vec<FieldSpec> {
///         vec![FieldSpec::boolean("Verbose").with_description("verbose output")]
///     }
///
///     fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
///         if let ("Verbose", FieldValue::Bool(v)) = (ident, value) {
///             self.verbose = v;
///         }
///     }
/// }
///
/// #[derive(Debug, Default)]
/// struct RenameArgs {
///     dry_run: bool,
/// }
///
/// impl Schema for RenameArgs {
///     fn fields() -> Vec<FieldSpec> {
///         vec![FieldSpec::boolean("DryRun").with_short('d')]
///     }
///
///     fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
///         if let ("DryRun", FieldValue::Bool(v)) = (ident, value) {
///             self.dry_run = v;
///         }
///     }
/// }
///
/// enum Command {
///     Rename(RenameArgs),
/// }
///
/// let parser = Parser::<RootArgs, Command>::new()?
///     .command("rename", "renames project files", Command::Rename)?;
///
/// let tokens: Vec<String> = ["-v", "rename", "-d"].iter().map(|s| s.to_string()).collect();
/// let (root, command) = parser.parse(&tokens)?;
///
/// assert!(root.verbose);
/// assert!(matches!(command, Some(Command::Rename(args)) if args.dry_run));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Parser<R: Schema, C = ()> {
    info: AppInfo,
    root: SchemaDescriptor,
    commands: Vec<Registration<C>>,
    _root: std::marker::PhantomData<fn() -> R>,
}

impl<R: Schema, C> Parser<R, C> {
    /// Builds a parser with default [`AppInfo`].
    pub fn new() -> Result<Self, SchemaError> {
        Self::with_info(AppInfo::default())
    }

    /// Builds a parser, validating the root schema table.
    pub fn with_info(info: AppInfo) -> Result<Self, SchemaError> {
        Ok(Self {
            info,
            root: SchemaDescriptor::describe(R::fields())?,
            commands: Vec::new(),
            _root: std::marker::PhantomData,
        })
    }

    /// Registers a subcommand under an explicit canonical name.
    ///
    /// The name is lowercased; bare tokens are matched against it
    /// case-insensitively during routing. `wrap` lifts the populated
    /// subcommand schema into the caller's sum type, which is what lets
    /// one parser return differently typed subcommand instances.
    pub fn command<S, F>(
        mut self,
        name: &str,
        description: &str,
        wrap: F,
    ) -> Result<Self, SchemaError>
    where
        S: Schema,
        F: Fn(S) -> C + Send + Sync + 'static,
    {
        let canonical = name.to_ascii_lowercase();
        if self.commands.iter().any(|cmd| cmd.name == canonical) {
            return Err(SchemaError::DuplicateCommand(canonical));
        }

        let descriptor = SchemaDescriptor::describe(S::fields())?;
        self.commands.push(Registration {
            name: canonical,
            description: description.to_string(),
            descriptor,
            build: Box::new(move |desc, tokens| {
                let mut inst = S::default();
                for token in tokens {
                    apply_token(desc, &mut inst, token)?;
                }
                Ok(wrap(inst))
            }),
        });
        Ok(self)
    }

    /// Parses one token list into a populated root instance and, when a
    /// subcommand token was routed, a populated subcommand instance.
    ///
    /// Tokens before the subcommand token resolve against the root
    /// schema, tokens after it against the subcommand schema; with no
    /// subcommand every token belongs to the root. Token order is
    /// preserved, so repeated flags keep last-write-wins behavior. An
    /// empty token list returns immediately with declared defaults.
    pub fn parse(&self, tokens: &[String]) -> Result<(R, Option<C>), ParseError> {
        let mut root = R::default();
        if tokens.is_empty() {
            return Ok((root, None));
        }

        let names: Vec<&str> = self.commands.iter().map(|cmd| cmd.name.as_str()).collect();
        match route(tokens, &names) {
            Some((split, matched)) => {
                for token in &tokens[..split] {
                    apply_token(&self.root, &mut root, token)?;
                }

                let registration = &self.commands[matched];
                if let Some(selector) = self.root.selector() {
                    root.assign(selector.ident, FieldValue::Command(&registration.name));
                }

                let sub = (registration.build)(&registration.descriptor, &tokens[split + 1..])?;
                Ok((root, Some(sub)))
            }
            None => {
                for token in tokens {
                    apply_token(&self.root, &mut root, token)?;
                }
                Ok((root, None))
            }
        }
    }

    /// Renders help text for the root schema and registered subcommands.
    pub fn render_help(&self) -> String {
        help::render(
            &self.info,
            self.commands
                .iter()
                .map(|cmd| (cmd.name.as_str(), cmd.description.as_str())),
            &self.root,
        )
    }

    /// The application metadata this parser renders help with.
    pub fn info(&self) -> &AppInfo {
        &self.info
    }
}

impl<R: Schema, C> std::fmt::Debug for Parser<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("info", &self.info)
            .field("root", &self.root)
            .field(
                "commands",
                &self
                    .commands
                    .iter()
                    .map(|cmd| cmd.name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

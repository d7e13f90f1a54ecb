//! Field tables, the [`Schema`] trait, and validated descriptors.
//!
//! A configuration type declares its surface once, as a literal table of
//! [`FieldSpec`] entries. [`SchemaDescriptor::describe`] validates the
//! table and builds the lookup maps the resolver uses, so no per-token
//! rescanning of the field list happens during parsing. Descriptors are
//! immutable after construction and safe to share across threads.

use std::collections::HashMap;

use crate::case::{to_kebab, to_pascal};
use crate::error::SchemaError;

/// Value kind a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean flag, set to `true` by its presence.
    Bool,
    /// String value supplied inline (`--name=value` or `-nvalue`).
    Text,
    /// Enumerable variant selected by a bare subcommand token. Only valid
    /// on the subcommand selector field.
    Variant,
}

/// Role a field plays within its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// A `-`/`--` prefixed flag.
    Flag,
    /// The single field recording which subcommand was selected.
    Selector,
}

/// One entry in a schema's field table.
///
/// Constructed with [`boolean`](FieldSpec::boolean),
/// [`text`](FieldSpec::text), or [`selector`](FieldSpec::selector), then
/// refined with the `with_*` builder methods.
///
/// # Examples
///
/// ```
/// use argline_core::FieldSpec;
///
/// let verbose = FieldSpec::boolean("Verbose")
///     .with_short('v')
///     .with_description("verbose output of the program");
/// assert_eq!(verbose.long_name(), "verbose");
/// assert_eq!(verbose.short_name(), Some('v'));
///
/// // Without annotations the names derive from the identifier.
/// let work_dir = FieldSpec::text("WorkDir");
/// assert_eq!(work_dir.long_name(), "work-dir");
/// assert_eq!(work_dir.short_name(), Some('w'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// PascalCase identifier, unique within the table.
    pub ident: &'static str,
    /// Value kind the field accepts.
    pub kind: FieldKind,
    /// Role the field plays.
    pub role: FieldRole,
    /// Explicit short name; defaults to the identifier's first letter.
    pub short: Option<char>,
    /// Explicit long name; defaults to the kebab-cased identifier.
    pub long: Option<&'static str>,
    /// Help text.
    pub description: Option<&'static str>,
}

impl FieldSpec {
    fn new(ident: &'static str, kind: FieldKind, role: FieldRole) -> Self {
        Self {
            ident,
            kind,
            role,
            short: None,
            long: None,
            description: None,
        }
    }

    /// Creates a boolean flag field.
    pub fn boolean(ident: &'static str) -> Self {
        Self::new(ident, FieldKind::Bool, FieldRole::Flag)
    }

    /// Creates a string-valued flag field.
    pub fn text(ident: &'static str) -> Self {
        Self::new(ident, FieldKind::Text, FieldRole::Flag)
    }

    /// Creates the subcommand selector field.
    pub fn selector(ident: &'static str) -> Self {
        Self::new(ident, FieldKind::Variant, FieldRole::Selector)
    }

    /// Binds an explicit short name.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Overrides the derived long name.
    pub fn with_long(mut self, long: &'static str) -> Self {
        self.long = Some(long);
        self
    }

    /// Adds help text.
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Effective long name: the override, or the kebab-cased identifier.
    pub fn long_name(&self) -> String {
        self.long
            .map(str::to_string)
            .unwrap_or_else(|| to_kebab(self.ident))
    }

    /// Effective short name: the annotation, or the identifier's first
    /// letter, lowercased either way.
    pub fn short_name(&self) -> Option<char> {
        self.short
            .or_else(|| self.ident.chars().next())
            .map(|ch| ch.to_ascii_lowercase())
    }
}

/// A value handed to [`Schema::assign`] by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A boolean flag was present.
    Bool(bool),
    /// Inline string value of a text flag.
    Text(&'a str),
    /// Canonical name of the matched subcommand, for the selector field.
    Command(&'a str),
}

/// A configuration type backed by a static field table.
///
/// Implementors declare their surface in [`fields`](Schema::fields) and
/// route resolved values into typed storage in
/// [`assign`](Schema::assign). The engine only ever assigns identifiers
/// that appear in the table, so `assign` can ignore anything else.
///
/// # Examples
///
/// ```
/// use argline_core::{FieldSpec, FieldValue, Schema};
///
/// #[derive(Debug, Default)]
/// struct Options {
///     verbose: bool,
///     work_dir: String,
/// }
///
/// impl Schema for Options {
///     fn fields() -> Vec<FieldSpec> {
///         vec![
///             FieldSpec::boolean("Verbose"),
///             FieldSpec::text("WorkDir"),
///         ]
///     }
///
///     fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
///         match (ident, value) {
///             ("Verbose", FieldValue::Bool(v)) => self.verbose = v,
///             ("WorkDir", FieldValue::Text(v)) => self.work_dir = v.to_string(),
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait Schema: Default {
    /// The field table describing this type. Must be stable across calls.
    fn fields() -> Vec<FieldSpec>;

    /// Applies one resolved value to the named field.
    fn assign(&mut self, ident: &str, value: FieldValue<'_>);
}

/// Validated, indexed view of a field table.
///
/// Built once per schema type and cached by the parser; resolution goes
/// through the long-name and short-name maps built here instead of
/// rescanning the field list per token.
///
/// # Examples
///
/// ```
/// use argline_core::{FieldSpec, SchemaDescriptor};
///
/// let desc = SchemaDescriptor::describe(vec![
///     FieldSpec::selector("Command"),
///     FieldSpec::boolean("Verbose"),
///     FieldSpec::text("WorkDir"),
/// ])
/// .unwrap();
///
/// assert_eq!(desc.fields().len(), 3);
/// assert_eq!(desc.selector().map(|f| f.ident), Some("Command"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    fields: Vec<FieldSpec>,
    selector: Option<usize>,
    by_long: HashMap<String, usize>,
    by_short: HashMap<char, usize>,
}

impl SchemaDescriptor {
    /// Validates a field table and builds the lookup maps.
    ///
    /// Side-effect-free and deterministic: the same table always yields
    /// the same descriptor. Fails with a [`SchemaError`] on a duplicate
    /// selector, a selector without variant kind, a flag with variant
    /// kind, a non-PascalCase identifier, or colliding effective names.
    pub fn describe(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut selector = None;
        let mut by_long: HashMap<String, usize> = HashMap::new();
        let mut by_short: HashMap<char, usize> = HashMap::new();

        for (idx, field) in fields.iter().enumerate() {
            if !is_pascal(field.ident) {
                return Err(SchemaError::IdentNotPascal(field.ident.to_string()));
            }

            match field.role {
                FieldRole::Selector => {
                    if field.kind != FieldKind::Variant {
                        return Err(SchemaError::SelectorNotVariant(field.ident.to_string()));
                    }
                    if let Some(prev) = selector {
                        let prev: &FieldSpec = &fields[prev];
                        return Err(SchemaError::DuplicateSelector {
                            first: prev.ident.to_string(),
                            second: field.ident.to_string(),
                        });
                    }
                    selector = Some(idx);
                }
                FieldRole::Flag => {
                    if field.kind == FieldKind::Variant {
                        return Err(SchemaError::FlagIsVariant(field.ident.to_string()));
                    }

                    let long = field.long_name();
                    if let Some(&prev) = by_long.get(&long) {
                        return Err(SchemaError::DuplicateLongName {
                            first: fields[prev].ident.to_string(),
                            second: field.ident.to_string(),
                            long,
                        });
                    }
                    by_long.insert(long, idx);

                    if let Some(short) = field.short_name() {
                        if let Some(&prev) = by_short.get(&short) {
                            return Err(SchemaError::DuplicateShortName {
                                first: fields[prev].ident.to_string(),
                                second: field.ident.to_string(),
                                short,
                            });
                        }
                        by_short.insert(short, idx);
                    }
                }
            }
        }

        Ok(Self {
            fields,
            selector,
            by_long,
            by_short,
        })
    }

    /// All declared fields, in table order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The flag fields, in table order.
    pub fn flags(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.role == FieldRole::Flag)
    }

    /// The subcommand selector field, if the schema declares one.
    pub fn selector(&self) -> Option<&FieldSpec> {
        self.selector.map(|idx| &self.fields[idx])
    }

    /// Looks up a flag by its effective long name (kebab-case, without
    /// the `--` prefix).
    pub fn flag_by_long(&self, name: &str) -> Option<&FieldSpec> {
        self.by_long.get(name).map(|&idx| &self.fields[idx])
    }

    /// Looks up a flag by its effective short name, case-insensitively.
    pub fn flag_by_short(&self, short: char) -> Option<&FieldSpec> {
        self.by_short
            .get(&short.to_ascii_lowercase())
            .map(|&idx| &self.fields[idx])
    }
}

/// A PascalCase identifier starts with an ASCII uppercase letter and
/// survives a round trip through kebab-case unchanged.
fn is_pascal(ident: &str) -> bool {
    ident
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_uppercase())
        && to_pascal(&to_kebab(ident)) == ident
}

//! Schema tables for the root configuration and the subcommands.

use argline_core::{AppInfo, FieldSpec, FieldValue, Parser, Schema, SchemaError};

use crate::error::CliError;

/// Which subcommand the root token stream selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandKind {
    /// No subcommand token was present.
    #[default]
    Unset,
    /// The `rename` workflow.
    Rename,
    /// The `check-size` workflow.
    CheckSize,
}

/// Root configuration, shared by every workflow.
#[derive(Debug, Default)]
pub struct AppArgs {
    pub command: CommandKind,
    pub work_dir: Option<String>,
    pub sub_dir: Option<String>,
    pub verbose: bool,
    pub time_exec: bool,
    pub help: bool,
}

impl Schema for AppArgs {
    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::selector("Command"),
            FieldSpec::text("WorkDir")
                .with_short('w')
                .with_description("sets root directory where all projects are located"),
            FieldSpec::text("SubDir")
                .with_short('s')
                .with_description("sets subdirectory for listing available projects"),
            FieldSpec::boolean("Verbose")
                .with_short('v')
                .with_description("verbose output of the program"),
            FieldSpec::boolean("TimeExec")
                .with_short('t')
                .with_description("displays program execution time"),
            FieldSpec::boolean("Help")
                .with_short('h')
                .with_description("prints this message"),
        ]
    }

    fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
        match (ident, value) {
            ("WorkDir", FieldValue::Text(v)) => self.work_dir = Some(v.to_string()),
            ("SubDir", FieldValue::Text(v)) => self.sub_dir = Some(v.to_string()),
            ("Verbose", FieldValue::Bool(v)) => self.verbose = v,
            ("TimeExec", FieldValue::Bool(v)) => self.time_exec = v,
            ("Help", FieldValue::Bool(v)) => self.help = v,
            ("Command", FieldValue::Command("rename")) => self.command = CommandKind::Rename,
            ("Command", FieldValue::Command("check-size")) => self.command = CommandKind::CheckSize,
            _ => {}
        }
    }
}

/// Flags of the `rename` subcommand.
#[derive(Debug, Default)]
pub struct RenameArgs {
    pub dry_run: bool,
}

impl Schema for RenameArgs {
    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::boolean("DryRun")
                .with_short('d')
                .with_description("test program without actually renaming files"),
        ]
    }

    fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
        if let ("DryRun", FieldValue::Bool(v)) = (ident, value) {
            self.dry_run = v;
        }
    }
}

/// Default per-directory size limit, in megabytes.
const DEFAULT_LIMIT_MB: u64 = 200;

/// Flags of the `check-size` subcommand.
///
/// Limits are kept as raw flag text and parsed on demand, so a bad value
/// surfaces as a [`CliError`] with the offending text instead of a
/// parse-time panic.
#[derive(Debug, Default)]
pub struct CheckSizeArgs {
    pub bp_limit: Option<String>,
    pub dm_limit: Option<String>,
}

impl CheckSizeArgs {
    /// Size limits for the `BP/` and `DM/` directories in megabytes.
    pub fn limits(&self) -> Result<(u64, u64), CliError> {
        Ok((parse_limit(&self.bp_limit)?, parse_limit(&self.dm_limit)?))
    }
}

fn parse_limit(raw: &Option<String>) -> Result<u64, CliError> {
    match raw.as_deref() {
        None | Some("") => Ok(DEFAULT_LIMIT_MB),
        Some(text) => text
            .parse()
            .map_err(|_| CliError::InvalidLimit(text.to_string())),
    }
}

impl Schema for CheckSizeArgs {
    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("BpLimit")
                .with_short('b')
                .with_description("size limit in megabytes for files under BP/"),
            FieldSpec::text("DmLimit")
                .with_short('m')
                .with_description("size limit in megabytes for files under DM/"),
        ]
    }

    fn assign(&mut self, ident: &str, value: FieldValue<'_>) {
        match (ident, value) {
            ("BpLimit", FieldValue::Text(v)) => self.bp_limit = Some(v.to_string()),
            ("DmLimit", FieldValue::Text(v)) => self.dm_limit = Some(v.to_string()),
            _ => {}
        }
    }
}

/// A populated subcommand instance.
#[derive(Debug)]
pub enum Command {
    Rename(RenameArgs),
    CheckSize(CheckSizeArgs),
}

/// Builds the parser with both subcommands registered.
pub fn build_parser() -> Result<Parser<AppArgs, Command>, SchemaError> {
    Parser::with_info(AppInfo {
        name: "vault-utils".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        licence: "MIT".to_string(),
        description: "maintenance helpers for versioned artwork archives".to_string(),
    })?
    .command(
        "rename",
        "renames project files after their directory",
        Command::Rename,
    )?
    .command(
        "check-size",
        "reports files exceeding the per-directory size limits",
        Command::CheckSize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_flags_before_subcommand() {
        let parser = build_parser().unwrap();
        let (cfg, command) = parser
            .parse(&tokens(&["-v", "--work-dir=/srv/vault", "rename", "-d"]))
            .unwrap();

        assert!(cfg.verbose);
        assert_eq!(cfg.work_dir.as_deref(), Some("/srv/vault"));
        assert_eq!(cfg.command, CommandKind::Rename);
        assert!(matches!(command, Some(Command::Rename(args)) if args.dry_run));
    }

    #[test]
    fn test_no_subcommand_leaves_kind_unset() {
        let parser = build_parser().unwrap();
        let (cfg, command) = parser.parse(&tokens(&["-vt"])).unwrap();

        assert!(cfg.verbose && cfg.time_exec);
        assert_eq!(cfg.command, CommandKind::Unset);
        assert!(command.is_none());
    }

    #[test]
    fn test_check_size_limits_default_to_200() {
        let parser = build_parser().unwrap();
        let (_, command) = parser.parse(&tokens(&["check-size"])).unwrap();

        let Some(Command::CheckSize(args)) = command else {
            panic!("expected check-size subcommand");
        };
        assert_eq!(args.limits().unwrap(), (200, 200));
    }

    #[test]
    fn test_check_size_limits_parse_flag_text() {
        let parser = build_parser().unwrap();
        let (_, command) = parser
            .parse(&tokens(&["check-size", "--bp-limit=150", "-m90"]))
            .unwrap();

        let Some(Command::CheckSize(args)) = command else {
            panic!("expected check-size subcommand");
        };
        assert_eq!(args.limits().unwrap(), (150, 90));
    }

    #[test]
    fn test_check_size_rejects_bad_limit() {
        let parser = build_parser().unwrap();
        let (_, command) = parser
            .parse(&tokens(&["check-size", "--bp-limit=many"]))
            .unwrap();

        let Some(Command::CheckSize(args)) = command else {
            panic!("expected check-size subcommand");
        };
        assert!(matches!(args.limits(), Err(CliError::InvalidLimit(text)) if text == "many"));
    }

    #[test]
    fn test_help_flag_short_and_long() {
        let parser = build_parser().unwrap();
        let (cfg, _) = parser.parse(&tokens(&["-h"])).unwrap();
        assert!(cfg.help);

        let (cfg, _) = parser.parse(&tokens(&["--help"])).unwrap();
        assert!(cfg.help);
    }
}

//! Help text rendering.
//!
//! Pure formatting over the root descriptor and the registration list;
//! no parsing state is read or written. Subcommand-specific flags are
//! deliberately not enumerated.

use crate::engine::AppInfo;
use crate::schema::SchemaDescriptor;

/// Renders the help screen: header line, description, subcommand list,
/// and the root schema's flag list.
pub(crate) fn render<'a>(
    info: &AppInfo,
    commands: impl Iterator<Item = (&'a str, &'a str)>,
    root: &SchemaDescriptor,
) -> String {
    let mut out = format!(
        "{} v{}  {} Licence\n{}\n\n",
        info.name, info.version, info.licence, info.description
    );

    out.push_str("SUBCOMMANDS:\n");
    for (name, description) in commands {
        out.push('\t');
        out.push_str(name);
        out.push('\t');
        out.push_str(description);
        out.push('\n');
    }

    out.push_str("\nOPTIONS:\n");
    for field in root.flags() {
        out.push_str("\t--");
        out.push_str(&field.long_name());
        if let Some(short) = field.short_name() {
            out.push_str(", -");
            out.push(short);
        }
        out.push_str("\t ");
        out.push_str(field.description.unwrap_or(""));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldSpec, SchemaDescriptor};

    fn info() -> AppInfo {
        AppInfo {
            name: "vault-utils".to_string(),
            version: "1.0.0".to_string(),
            licence: "MIT".to_string(),
            description: "archive maintenance tool".to_string(),
        }
    }

    fn descriptor() -> SchemaDescriptor {
        SchemaDescriptor::describe(vec![
            FieldSpec::selector("Command"),
            FieldSpec::boolean("Verbose")
                .with_short('v')
                .with_description("verbose output of the program"),
            FieldSpec::text("WorkDir")
                .with_short('w')
                .with_description("sets the working directory"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_header_and_sections() {
        let commands = [("rename", "renames project files")];
        let text = render(&info(), commands.iter().copied(), &descriptor());

        assert!(text.starts_with("vault-utils v1.0.0  MIT Licence\narchive maintenance tool\n"));
        assert!(text.contains("SUBCOMMANDS:\n\trename\trenames project files\n"));
        assert!(text.contains("OPTIONS:\n"));
        assert!(text.contains("\t--verbose, -v\t verbose output of the program\n"));
        assert!(text.contains("\t--work-dir, -w\t sets the working directory\n"));
    }

    #[test]
    fn test_render_skips_selector_field() {
        let text = render(&info(), std::iter::empty(), &descriptor());
        assert!(!text.contains("--command"));
    }
}

//! Workflow dispatch: directory selection, renaming, size auditing.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::audit::oversized_files;
use crate::config::{AppArgs, CheckSizeArgs, Command, RenameArgs};
use crate::dotenv::DotEnv;
use crate::error::CliError;
use crate::rename::RenamePass;

/// The rename passes run per project directory: subdirectory, extension
/// filter, and the suffix appended to the new names.
const RENAME_PASSES: [(&str, &str, &str); 4] = [
    ("", "jpg", ""),
    ("", "psd", ""),
    ("BP", "jpg", " вр"),
    ("DM", "jpg", " дм"),
];

/// A configured run of the tool.
#[derive(Debug)]
pub struct Application {
    config: AppArgs,
    base_dir: PathBuf,
}

impl Application {
    /// Resolves the base directory: `VAULT_DIR` wins, then `--work-dir`,
    /// then the current directory; `--sub-dir` is joined underneath.
    pub fn new(config: AppArgs, env: &DotEnv) -> Result<Self, CliError> {
        let base_dir = resolve_base_dir(&config, env.var("VAULT_DIR"))?;
        debug!(base_dir = %base_dir.display(), "resolved base directory");
        Ok(Self { config, base_dir })
    }

    /// Runs the selected workflow.
    pub fn run(&self, command: Command) -> Result<(), CliError> {
        match command {
            Command::Rename(args) => self.run_rename(&args),
            Command::CheckSize(args) => self.run_check_size(&args),
        }
    }

    fn run_rename(&self, args: &RenameArgs) -> Result<(), CliError> {
        let project = self.select_project()?;
        let new_name = project
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for (sub, extension, suffix) in RENAME_PASSES {
            let pass = RenamePass {
                dir: if sub.is_empty() {
                    project.clone()
                } else {
                    project.join(sub)
                },
                new_name: new_name.clone(),
                extension: extension.to_string(),
                suffix: suffix.to_string(),
            };

            if self.config.verbose {
                println!("Renaming {} files in /{}:", extension.to_uppercase(), sub);
            }
            let entries = pass.run(args.dry_run)?;
            if self.config.verbose {
                for entry in &entries {
                    println!("\t{}\t-->\t{}", entry.from, entry.to);
                }
            }
        }
        Ok(())
    }

    fn run_check_size(&self, args: &CheckSizeArgs) -> Result<(), CliError> {
        let (bp_limit, dm_limit) = args.limits()?;
        let project = self.select_project()?;

        let mut clean = true;
        for (sub, limit) in [("BP", bp_limit), ("DM", dm_limit)] {
            for file in oversized_files(&project.join(sub), limit)? {
                let megabytes = file.size as f64 / (1024.0 * 1024.0);
                println!("\t{sub}/{}\t{megabytes:.1} MB (limit {limit} MB)", file.name);
                clean = false;
            }
        }
        if clean {
            println!("All files within size limits.");
        }
        Ok(())
    }

    /// Lists the project directories under the base directory and asks
    /// which one to operate on.
    fn select_project(&self) -> Result<PathBuf, CliError> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(&self.base_dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        if dirs.is_empty() {
            return Err(CliError::NoProjects(self.base_dir.clone()));
        }

        println!("Select directory:");
        for (idx, dir) in dirs.iter().enumerate() {
            println!(
                "\t[{idx}] {}",
                dir.file_name().map(|name| name.to_string_lossy()).unwrap_or_default()
            );
        }

        let stdin = io::stdin();
        let idx = prompt_index(&mut stdin.lock(), &mut io::stdout(), dirs.len())?;
        Ok(dirs.swap_remove(idx))
    }
}

fn resolve_base_dir(config: &AppArgs, vault_dir: Option<String>) -> Result<PathBuf, CliError> {
    let root = match vault_dir {
        Some(dir) => PathBuf::from(dir),
        None => match &config.work_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        },
    };
    Ok(match &config.sub_dir {
        Some(sub) => root.join(sub),
        None => root,
    })
}

/// Prompts until the user supplies a valid directory index.
fn prompt_index(
    input: &mut impl BufRead,
    output: &mut impl Write,
    count: usize,
) -> Result<usize, CliError> {
    loop {
        write!(output, "Select directory index: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no selection made").into());
        }
        if let Ok(idx) = line.trim().parse::<usize>() {
            if idx < count {
                return Ok(idx);
            }
        }
    }
}

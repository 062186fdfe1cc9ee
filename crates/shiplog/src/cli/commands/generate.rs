//! Generate command

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use shiplog_changelog::ChangelogGenerator;
use shiplog_core::config::load_config_or_default;
use shiplog_core::error::ChangelogError;
use shiplog_git::GitRepo;

use crate::cli::{output, Cli, OutputFormat};

/// Generate the changelog section for a release
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Release label for the new section (e.g. v1.2.0)
    #[arg(long)]
    pub release: String,

    /// Section date (defaults to today, formatted per config)
    #[arg(long)]
    pub date: Option<String>,

    /// Changelog document (defaults to the configured file)
    #[arg(short, long)]
    pub document: Option<PathBuf>,

    /// Collect commits after this tag or revision
    /// (defaults to the configured tag, else full history)
    #[arg(long)]
    pub since: Option<String>,

    /// Read commit subjects from stdin, one per line, instead of git
    #[arg(long)]
    pub stdin: bool,

    /// Write the document in place (default prints to stdout)
    #[arg(short, long)]
    pub write: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            release = %self.release,
            write = self.write,
            stdin = self.stdin,
            "executing generate command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        // Collect commit subjects
        let subjects = if self.stdin {
            read_subjects_from_stdin()?
        } else {
            let repo = GitRepo::discover(&cwd)?;
            let commits = if let Some(rev) = &self.since {
                repo.commits_since(rev)?
            } else if let Some(tag) = &config.git.since_tag {
                repo.commits_since_tag(tag)?
            } else {
                repo.all_commits()?
            };
            commits.into_iter().map(|c| c.subject).collect()
        };

        if subjects.is_empty() && !cli.quiet {
            output::warning("No commits found in range.");
        }

        // Read the existing document. A read failure is fatal; a missing
        // file is documentless-root mode (new document, offset 0).
        let document_path = self
            .document
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));

        let lines: Vec<String> = if document_path.exists() {
            let content = std::fs::read_to_string(&document_path)
                .map_err(ChangelogError::Io)?;
            content.lines().map(String::from).collect()
        } else {
            Vec::new()
        };

        let date = self.date.clone().unwrap_or_else(|| {
            chrono::Local::now()
                .format(&config.changelog.date_format)
                .to_string()
        });

        let generator = ChangelogGenerator::new(&config)?;
        let result = generator.generate(
            &lines,
            &self.release,
            &date,
            subjects.iter().map(String::as_str),
        );

        // Output
        if self.write {
            let mut content = result.document.join("\n");
            content.push('\n');
            std::fs::write(&document_path, content)
                .map_err(|e| ChangelogError::WriteFailed(e.to_string()))?;

            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {}",
                    output::path_style().apply_to(document_path.display())
                ));
            }
        } else {
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result.batch)?);
                }
                OutputFormat::Text => {
                    println!("{}", result.document.join("\n"));
                }
            }
        }

        // Diagnostic report, operator-facing only
        if !cli.quiet {
            print!("{}", result.report);
        }

        Ok(())
    }
}

fn read_subjects_from_stdin() -> anyhow::Result<Vec<String>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

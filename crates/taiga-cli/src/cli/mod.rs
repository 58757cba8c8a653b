use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tbm` binary.
#[derive(Debug, Parser)]
#[command(name = "tbm", version, about = "Taiga bulk task manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Taiga instance URL (defaults to upstream.base_url from config)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            url: self.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{
        AuthCommands, FavoriteCommands, FavoriteProjectCommands, ProjectCommands, StoryCommands,
        TaskCommands,
    };

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tbm", "--format", "table", "--verbose", "auth", "me"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Me
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tbm",
            "project",
            "list",
            "--format",
            "raw",
            "--quiet",
            "--url",
            "https://tree.taiga.io",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(cli.global_flags().url.as_deref(), Some("https://tree.taiga.io"));
        assert!(matches!(
            cli.command,
            Commands::Project {
                action: ProjectCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["tbm", "--format", "xml", "auth", "me"]).is_err());
    }

    #[test]
    fn story_search_defaults() {
        let cli = Cli::try_parse_from(["tbm", "story", "search", "133", "--query", "login"])
            .expect("cli should parse");
        let Commands::Story {
            action: StoryCommands::Search(args),
        } = cli.command
        else {
            panic!("expected story search");
        };
        assert_eq!(args.project, 133);
        assert_eq!(args.query.as_deref(), Some("login"));
        assert_eq!(args.milestone, "null");
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, 100);
    }

    #[test]
    fn bulk_accepts_repeated_subjects() {
        let cli = Cli::try_parse_from([
            "tbm", "task", "bulk", "133", "--story", "5258", "--status", "7", "--subject", "A",
            "--subject", "B",
        ])
        .expect("cli should parse");
        let Commands::Task {
            action: TaskCommands::Bulk(args),
        } = cli.command
        else {
            panic!("expected task bulk");
        };
        assert_eq!(args.project, 133);
        assert_eq!(args.story, Some(5258));
        assert_eq!(args.status, Some(7));
        assert_eq!(args.subjects, vec!["A", "B"]);
        assert!(args.file.is_none());
    }

    #[test]
    fn bulk_file_and_subjects_conflict() {
        let parsed = Cli::try_parse_from([
            "tbm", "task", "bulk", "133", "--file", "tasks.json", "--subject", "A",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn favorite_project_add() {
        let cli = Cli::try_parse_from([
            "tbm", "favorite", "project", "add", "133", "--name", "DASA", "--slug", "dasa",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Favorite {
                action: FavoriteCommands::Project {
                    action: FavoriteProjectCommands::Add { project_id: 133, .. }
                }
            }
        ));
    }
}

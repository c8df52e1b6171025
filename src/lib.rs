mod commands;
mod pipeline;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use pipeline::{run_batch, BatchConfig, BatchReport, Change, FileOutcome, Outcome};

#[derive(Parser)]
#[command(name = "spell-annotator", version)]
#[command(about = "Derive gameplay metadata for spell JSON files")]
struct Cli {
    /// Directory holding one JSON document per spell
    #[arg(long, env = "SPELL_DIR", global = true)]
    spell_dir: Option<PathBuf>,

    /// Maximum number of spell files processed concurrently
    #[arg(long, env = "SPELL_JOBS", default_value_t = 4, global = true)]
    jobs: usize,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn batch_config(&self) -> anyhow::Result<BatchConfig> {
        let Some(spell_dir) = self.spell_dir.clone() else {
            anyhow::bail!("--spell-dir or SPELL_DIR is required");
        };
        Ok(BatchConfig {
            spell_dir,
            jobs: self.jobs,
        })
    }
}

#[derive(Subcommand)]
enum Command {
    /// Classify every spell and write effect, summon and condition fields back
    Annotate,
    /// Add the default class list to spells without one
    Classes,
    /// Print the derived annotation for a single spell file
    Show {
        /// Spell JSON file
        file: PathBuf,
    },
}

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spell_annotator=info,spell_data=info,spell_effect=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Annotate => commands::annotate(&cli.batch_config()?).await,
        Command::Classes => commands::classes(&cli.batch_config()?).await,
        Command::Show { file } => commands::show(file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_batch_options() {
        let cli = Cli::try_parse_from([
            "spell-annotator",
            "annotate",
            "--spell-dir",
            "data/spell",
            "--jobs",
            "8",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Annotate));
        let config = cli.batch_config().unwrap();
        assert_eq!(config.spell_dir, PathBuf::from("data/spell"));
        assert_eq!(config.jobs, 8);
    }

    #[test]
    fn test_cli_batch_options_before_subcommand() {
        let cli = Cli::try_parse_from([
            "spell-annotator",
            "--spell-dir",
            "data/spell",
            "--jobs",
            "2",
            "classes",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Classes));
        let config = cli.batch_config().unwrap();
        assert_eq!(config.spell_dir, PathBuf::from("data/spell"));
        assert_eq!(config.jobs, 2);
    }

    #[test]
    fn test_cli_show() {
        let cli = Cli::try_parse_from(["spell-annotator", "show", "fireball.json"]).unwrap();
        assert!(matches!(&cli.command, Command::Show { file } if *file == PathBuf::from("fireball.json")));
    }
}

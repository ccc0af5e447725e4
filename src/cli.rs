use clap::{Parser, Subcommand};
use yoga_domain::flow::parse_duration;
use yoga_domain::{Chakra, Difficulty};

use crate::app::Pacing;

#[derive(Debug, Parser)]
#[command(name = "yogaflow")]
#[command(about = "Yoga flows in the terminal: manage poses and templates, then practice a timed session", long_about = None)]
pub struct Cli {
    /// Archivo SQLite; tiene prioridad sobre DATABASE_URL.
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Sin subcomando se abre el menú interactivo.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create the database file and apply pending migrations
    Init,
    /// Load the starter catalog (49 poses, 7 flow templates)
    Seed {
        /// Drop and recreate every table first
        #[arg(long)]
        reset: bool,
    },
    /// List poses
    Poses {
        #[arg(long)]
        chakra: Option<Chakra>,
        #[arg(long)]
        json: bool,
    },
    /// List flow templates
    Flows {
        #[arg(long)]
        chakra: Option<Chakra>,
        /// Minutes (10, 20, 30, 40, 50 or 60)
        #[arg(long, value_parser = parse_duration)]
        duration: Option<u32>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        json: bool,
    },
    /// Run a timed session from a template or from a chakra and length
    Practice {
        /// Flow template id
        #[arg(long, conflicts_with_all = ["chakra", "minutes"])]
        flow: Option<i32>,
        #[arg(long, requires = "minutes")]
        chakra: Option<Chakra>,
        #[arg(long, requires = "chakra")]
        minutes: Option<u32>,
        /// Skip the waits between ticks
        #[arg(long)]
        dry_run: bool,
        /// Print the session report as JSON when done
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn pacing(&self) -> Pacing {
        match self.command {
            Some(Command::Practice { dry_run: true, .. }) => Pacing::Instant,
            _ => Pacing::RealTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_menu() {
        let cli = Cli::try_parse_from(["yogaflow"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.pacing(), Pacing::RealTime);
    }

    #[test]
    fn practice_by_chakra_with_dry_run() {
        let cli = Cli::try_parse_from(["yogaflow", "practice", "--chakra", "third eye", "--minutes", "10", "--dry-run"])
            .unwrap();
        assert_eq!(cli.pacing(), Pacing::Instant);
        assert!(matches!(cli.command,
                         Some(Command::Practice { chakra: Some(Chakra::ThirdEye),
                                                  minutes: Some(10),
                                                  flow: None,
                                                  .. })));
    }

    #[test]
    fn flow_and_chakra_conflict() {
        assert!(Cli::try_parse_from(["yogaflow", "practice", "--flow", "1", "--chakra", "Root", "--minutes", "10"])
            .is_err());
        assert!(Cli::try_parse_from(["yogaflow", "practice", "--chakra", "Root"]).is_err());
    }

    #[test]
    fn flows_filters_are_parsed() {
        let cli = Cli::try_parse_from(["yogaflow",
                                       "--database",
                                       "x.db",
                                       "flows",
                                       "--duration",
                                       "30 minutes",
                                       "--difficulty",
                                       "easy"]).unwrap();
        assert_eq!(cli.database.as_deref(), Some("x.db"));
        assert_eq!(cli.command,
                   Some(Command::Flows { chakra: None,
                                         duration: Some(30),
                                         difficulty: Some(Difficulty::Easy),
                                         json: false }));
        assert!(Cli::try_parse_from(["yogaflow", "flows", "--duration", "later"]).is_err());
        assert!(Cli::try_parse_from(["yogaflow", "poses", "--chakra", "Spleen"]).is_err());
    }
}

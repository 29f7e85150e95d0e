use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oidpath",
    about = "Resolve numeric OIDs into readable OID-IRI paths",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve one or more OIDs given in dotted-decimal notation
    Resolve(ResolveArgs),
    /// Show registry statistics
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// OIDs to resolve, e.g. 1.2.840.113549.1.1.11
    #[arg(required = true)]
    pub oids: Vec<String>,
}

#[derive(Args)]
pub struct StatsArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolve() {
        let cli = Cli::try_parse_from(["oidpath", "resolve", "2.5.4.3"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.oids, vec!["2.5.4.3"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_resolve_multiple() {
        let cli = Cli::try_parse_from(["oidpath", "resolve", "0.0.5", "2.999"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.oids.len(), 2);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn resolve_requires_at_least_one_oid() {
        assert!(Cli::try_parse_from(["oidpath", "resolve"]).is_err());
    }

    #[test]
    fn parse_stats() {
        let cli = Cli::try_parse_from(["oidpath", "stats"]).unwrap();
        assert!(matches!(cli.command, Command::Stats(_)));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["oidpath", "--format", "json", "stats"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["oidpath", "--verbose", "resolve", "1.2"]).unwrap();
        assert!(cli.verbose);
    }
}

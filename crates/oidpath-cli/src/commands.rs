use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use oidpath_registry::Registry;
use oidpath_resolver::{resolve, walk};
use oidpath_types::parse_dotted;

use crate::cli::{Cli, Command, OutputFormat, ResolveArgs};

/// One resolved OID, as emitted by `--format json`.
#[derive(Debug, Serialize)]
struct ResolveRecord {
    oid: String,
    iri: String,
    consumed: usize,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Resolve(args) => run_resolve(&args, &cli.format),
        Command::Stats(_) => run_stats(&cli.format),
    }
}

fn run_resolve(args: &ResolveArgs, format: &OutputFormat) -> anyhow::Result<()> {
    for oid in &args.oids {
        let record = resolve_record(oid)?;
        match format {
            OutputFormat::Text => {
                println!("{}  {}", record.oid.bold(), record.iri);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&record)?);
            }
        }
    }
    Ok(())
}

fn run_stats(format: &OutputFormat) -> anyhow::Result<()> {
    let registry = Registry::global();
    match format {
        OutputFormat::Text => {
            println!("{}  {}", "entries".bold(), registry.len());
            println!("{}  {}", "nodes  ".bold(), registry.node_count());
        }
        OutputFormat::Json => {
            let stats = serde_json::json!({
                "entries": registry.len(),
                "nodes": registry.node_count(),
            });
            println!("{stats}");
        }
    }
    Ok(())
}

fn resolve_record(oid: &str) -> anyhow::Result<ResolveRecord> {
    let arcs = parse_dotted(oid).with_context(|| format!("invalid OID {oid:?}"))?;
    let consumed = walk(Registry::global(), &arcs).consumed;
    let iri = resolve(&arcs).context("empty arc sequence")?;
    Ok(ResolveRecord {
        oid: oid.to_string(),
        iri,
        consumed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_for_registered_oid() {
        let record = resolve_record("2.5.4.3").unwrap();
        assert_eq!(record.iri, "/Joint-ISO-ITU-T/Directory/[Attribute types]/commonName");
        assert_eq!(record.consumed, 4);
    }

    #[test]
    fn record_for_partially_registered_oid() {
        let record = resolve_record("2.999.1").unwrap();
        assert_eq!(record.iri, "/Joint-ISO-ITU-T/999/1");
        assert_eq!(record.consumed, 2);
    }

    #[test]
    fn record_rejects_malformed_text() {
        assert!(resolve_record("1..2").is_err());
        assert!(resolve_record("not-an-oid").is_err());
        assert!(resolve_record("").is_err());
    }

    #[test]
    fn record_serializes_expected_fields() {
        let record = resolve_record("0.0.5").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["oid"], "0.0.5");
        assert_eq!(json["iri"], "/ITU-T/Recommendation/E");
        assert_eq!(json["consumed"], 3);
    }
}

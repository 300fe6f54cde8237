use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quadpts::api::{
    generate_named, Domain, ElementFamily, LegacyTable, PointSet, RuleParams, StandardSets,
};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

#[derive(Parser)]
#[command(name = "quadpts")]
#[command(about = "Inspect and export quadrature point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Rule selection shared by `show` and `export`.
#[derive(Args, Clone, Debug, Serialize)]
struct RuleArgs {
    /// LE, W5corner, W4stable, W5, W8fixed or W8
    #[arg(long)]
    rule: String,
    #[arg(long)]
    dim: usize,
    #[arg(long)]
    count: usize,
    /// Centroid weight for W5
    #[arg(long)]
    w0: Option<f64>,
    /// Axis-point weight for W8
    #[arg(long)]
    wb: Option<f64>,
}

impl RuleArgs {
    fn generate(&self) -> Result<PointSet> {
        let params = RuleParams {
            w0: self.w0,
            wb: self.wb,
        };
        generate_named(&self.rule, self.dim, self.count, &params).with_context(|| {
            format!(
                "generating {} with dim={} count={}",
                self.rule, self.dim, self.count
            )
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate a point set and print it as JSON
    Show(RuleArgs),
    /// Print a tabulated point set as JSON
    Legacy {
        /// lin, qua, hex, tri or tet
        #[arg(long)]
        domain: String,
        #[arg(long)]
        count: usize,
    },
    /// List the standard and tabulated point sets
    List,
    /// Generate a point set and write it as CSV or parquet (+ provenance sidecar)
    Export {
        #[command(flatten)]
        rule: RuleArgs,
        #[arg(long)]
        out: String,
    },
    /// Read an exported CSV and report point count and weight sum
    Check {
        #[arg(long)]
        input: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Show(rule) => show(rule),
        Action::Legacy { domain, count } => legacy(domain, count),
        Action::List => list(),
        Action::Export { rule, out } => export_set(rule, out),
        Action::Check { input } => check(input),
    }
}

fn show(args: RuleArgs) -> Result<()> {
    let set = args.generate()?;
    tracing::info!(rule = set.rule(), npts = set.npts(), "show");
    println!("{}", serde_json::to_string_pretty(&set)?);
    Ok(())
}

fn legacy(domain: String, count: usize) -> Result<()> {
    let d: Domain = domain.parse()?;
    let table = LegacyTable::load()?;
    let set = table
        .lookup(d, count)
        .with_context(|| format!("no tabulated {count}-point set for {d}"))?;
    println!("{}", serde_json::to_string_pretty(set)?);
    Ok(())
}

fn list() -> Result<()> {
    let standard = StandardSets::build()?;
    let legacy = LegacyTable::load()?;
    let mut families = serde_json::Map::new();
    for f in ElementFamily::ALL {
        let keys: Vec<_> = standard
            .family(f)
            .keys()
            .map(|(rule, npts)| json!([rule.name(), npts]))
            .collect();
        families.insert(f.tag().to_string(), keys.into());
    }
    let mut tables = serde_json::Map::new();
    for d in Domain::ALL {
        let counts: Vec<usize> = legacy
            .keys()
            .filter(|(k, _)| *k == d)
            .map(|(_, n)| n)
            .collect();
        tables.insert(d.tag().to_string(), json!(counts));
    }
    let doc = json!({ "standard": families, "legacy": tables });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn export_set(args: RuleArgs, out: String) -> Result<()> {
    tracing::info!(rule = %args.rule, dim = args.dim, count = args.count, out, "export");
    let set = args.generate()?;
    let mut df = export::to_frame(&set)?;
    let out_path = Path::new(&out);
    export::write_frame(&mut df, out_path)?;
    let payload = provenance::Payload::new(&args)?.with_point_set(&set);
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn check(input: String) -> Result<()> {
    let (rows, wsum) = export::summarize_csv(Path::new(&input))?;
    tracing::info!(input, rows, wsum, "check");
    println!("{}", json!({ "rows": rows, "weight_sum": wsum }));
    Ok(())
}

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use vlsm::config::parse_demand_arg;
use vlsm::config_loader;
use vlsm::ip::ParentNetwork;
use vlsm::report::{render_report, ReportFormat};
use vlsm::vlsm::{allocate, Demand};

/// Variable-Length Subnet Mask allocation planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML allocation plan
    #[arg(short, long, conflicts_with_all = ["network", "demand"])]
    config: Option<PathBuf>,

    /// Parent network in A.B.C.D/N notation
    #[arg(short, long, requires = "demand")]
    network: Option<String>,

    /// Subnet demand as NAME=HOSTS, may be repeated
    #[arg(short, long, value_parser = parse_demand_arg)]
    demand: Vec<Demand>,

    /// Report layout, overrides the plan file
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Append address utilisation figures to the report
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (network, demands, plan_format) = match (&args.config, &args.network) {
        (Some(path), _) => {
            let plan = config_loader::load_plan(path)?;
            let network = plan.parent_network()?;
            let demands = plan.demands()?;
            (network, demands, plan.format)
        }
        (None, Some(network)) => {
            let network: ParentNetwork = network
                .parse()
                .wrap_err_with(|| format!("Failed to parse network '{}'", network))?;
            (network, args.demand.clone(), None)
        }
        (None, None) => return Err(eyre!("either --config or --network with --demand is required")),
    };

    let format = args.format.or(plan_format).unwrap_or_default();
    info!("Parent network: {}", network);

    let subnets = allocate(&network, &demands).wrap_err("Allocation failed")?;
    let report = render_report(&network, &subnets, format, args.summary)?;
    print!("{}", report);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from([
            "vlsm",
            "--network", "192.168.1.0/24",
            "--demand", "A=50",
            "--demand", "B=30",
        ]);

        assert_eq!(args.network.as_deref(), Some("192.168.1.0/24"));
        assert_eq!(args.demand, vec![Demand::new("A", 50), Demand::new("B", 30)]);
        assert_eq!(args.format, None);
        assert!(!args.summary);
    }

    #[test]
    fn test_config_args() {
        let args = Args::parse_from([
            "vlsm",
            "--config", "plan.yaml",
            "--format", "json",
            "--summary",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("plan.yaml")));
        assert_eq!(args.format, Some(ReportFormat::Json));
        assert!(args.summary);
    }

    #[test]
    fn test_rejects_bad_demand() {
        let result = Args::try_parse_from(["vlsm", "--network", "10.0.0.0/8", "--demand", "A=0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_conflicts_with_network() {
        let result = Args::try_parse_from([
            "vlsm",
            "--config", "plan.yaml",
            "--network", "10.0.0.0/8",
            "--demand", "A=5",
        ]);
        assert!(result.is_err());
    }
}

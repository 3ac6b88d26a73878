//! valkey-route - inspect Valkey cluster routes
//!
//! Converts route notations, or command names resolved through a routing
//! config, into the directives handed to the dispatch engine.

use anyhow::{Context, Result};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use valkey_cluster_route::config::{CliArgs, RoutingConfig};
use valkey_cluster_route::output::{DirectiveReporter, DirectiveRow};
use valkey_cluster_route::Route;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    args.validate()
        .map_err(|e| anyhow::anyhow!("Invalid arguments: {}", e))?;

    let routing_config = match args.config {
        Some(ref path) => RoutingConfig::from_file(path)
            .with_context(|| format!("Failed to load routing config {}", path.display()))?,
        None => RoutingConfig::default(),
    };

    let mut rows = Vec::with_capacity(args.routes.len() + args.commands.len());

    for notation in &args.routes {
        let route: Route = notation
            .parse()
            .with_context(|| format!("Invalid route '{}'", notation))?;
        rows.push(DirectiveRow::new(notation.as_str(), route));
    }

    for command in &args.commands {
        let route = routing_config.route_for(command).clone();
        debug!("Command {} resolved to route {}", command, route);
        rows.push(DirectiveRow::new(command.as_str(), route));
    }

    DirectiveReporter::new(args.format)
        .report(&rows)
        .context("Failed to render directives")?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

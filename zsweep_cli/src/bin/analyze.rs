use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use zsweep_cli::plot::{render_svg, DEFAULT_SIZE};
use zsweep_cli::report::format_point;
use zsweep_core::{analyze, read_rows_from_path};

/// Plot benchmark results and the ratio/speed frontier of the tuned configurations
#[derive(Parser)]
#[command(name = "zsweep-analyze", version)]
struct Cli {
    /// Results CSV written by zsweep-bench
    csv: PathBuf,
    /// Chart output path
    #[arg(short, long, default_value = "pareto.svg")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    zsweep_cli::logging::init();
    let cli = Cli::parse();

    let rows = read_rows_from_path(&cli.csv)
        .with_context(|| format!("reading results {:?}", cli.csv))?;
    let analysis = analyze(&rows);

    println!(
        "{} rows: {} defaults, {} tuned, {} on the frontier",
        rows.len(),
        analysis.defaults.len(),
        analysis.tuned.len(),
        analysis.frontier.len()
    );
    for point in &analysis.frontier {
        println!("{}", format_point(point));
    }

    render_svg(&cli.output, &analysis, DEFAULT_SIZE)
        .with_context(|| format!("rendering chart {:?}", cli.output))?;
    log::info!("chart written to {:?}", cli.output);
    Ok(())
}

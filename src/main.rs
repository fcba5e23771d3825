// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use circle_pack::io::read_problem;
use circle_pack::{PackError, ProgressObserver, Solver, SolverConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Pack circles from a catalog of radii into a rectangle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file: a header line, "width height", then one radius per line
    #[arg(value_parser)]
    input: PathBuf,

    /// Output file: one "cx cy r typeIndex" line per circle
    #[arg(value_parser)]
    output: PathBuf,

    /// Scheduling weighting in [0, 2]: 0 uniform, 1 by radius, 2 by radius squared
    #[arg(short, long)]
    weighting: Option<f64>,

    /// TOML configuration file; command line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also draw the result as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Stop after this many placements
    #[arg(long)]
    max_circles: Option<usize>,

    /// Log progress every N passes (needs -v)
    #[arg(long, value_name = "N")]
    progress: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn configuration(args: &Args) -> Result<SolverConfig, PackError> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    if let Some(weighting) = args.weighting {
        config.weighting = weighting;
    }
    if args.max_circles.is_some() {
        config.max_circles = args.max_circles;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), PackError> {
    let config = configuration(args)?;
    let problem = read_problem(&args.input)?;
    let mut solver = Solver::new(&problem, config)?;
    if let Some(every) = args.progress {
        solver = solver.with_observer(Box::new(ProgressObserver::new(every)));
    }

    let packing = solver.run();
    packing.write_output(&args.output)?;
    if let Some(svg) = &args.svg {
        packing.write_svg(svg)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

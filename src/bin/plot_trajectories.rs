// Multi-trajectory report: x, y, z, yaw over time and the x/y track of
// every trajectory in a log, merged into one PDF.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use drone_log_tools::plotting::{TrajectoryReport, TrajectoryReportConfig};
use drone_log_tools::{init_logging, ToolResult, ToolsConfig};

#[derive(Parser, Debug)]
#[command(about = "Render a multi-trajectory log into a five page PDF")]
struct Args {
    /// Trajectory log (index time x y z yaw)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Merged PDF
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Directory for the per-chart temporaries
    #[arg(long)]
    work_dir: Option<PathBuf>,
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> ToolResult<()> {
    let tools = ToolsConfig::load(args.config.as_deref())?;
    let mut config: TrajectoryReportConfig = tools.trajectory_plot.into();
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(work_dir) = args.work_dir {
        config.work_dir = work_dir;
    }

    let output = TrajectoryReport::with_gnuplot(config).generate()?;
    println!("Report saved to: {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

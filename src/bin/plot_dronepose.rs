// Real vs desired drone pose: a 2x3 grid of planar comparisons and the
// two trajectories in 3D.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use drone_log_tools::plotting::{PoseComparison, PoseComparisonConfig};
use drone_log_tools::{init_logging, ToolResult, ToolsConfig};

#[derive(Parser, Debug)]
#[command(about = "Compare real and desired drone poses")]
struct Args {
    /// Pose log (time, real x y z yaw, desired x y z yaw)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Write the figures as PDFs into this directory instead of opening windows
    #[arg(long)]
    save_dir: Option<PathBuf>,
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> ToolResult<()> {
    let tools = ToolsConfig::load(args.config.as_deref())?;
    let mut config: PoseComparisonConfig = tools.pose_plot.into();
    if let Some(input) = args.input {
        config.input = input;
    }

    let comparison = PoseComparison::load(config)?;
    log::info!("Tracking error: {}", comparison.tracking_error());

    match args.save_dir {
        Some(dir) => {
            for path in comparison.save(&dir)? {
                println!("Plot saved to: {}", path.display());
            }
        }
        None => comparison.show()?,
    }
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

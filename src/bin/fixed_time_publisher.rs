// Republish the time captured at startup on a named channel at a fixed
// rate until interrupted.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use drone_log_tools::clock::{
    setup_interrupt_handler, FixedTimeConfig, FixedTimePublisher, UdpPublisher, WriterPublisher,
};
use drone_log_tools::{init_logging, StampPublisher, ToolResult, ToolsConfig};

#[derive(Parser, Debug)]
#[command(about = "Publish one fixed timestamp at a fixed rate")]
struct Args {
    /// Channel name
    #[arg(short, long)]
    topic: Option<String>,
    /// Publishing frequency in Hz
    #[arg(short, long)]
    rate: Option<f64>,
    /// Send JSON datagrams to this address instead of stdout
    #[arg(long)]
    udp: Option<String>,
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> ToolResult<()> {
    let tools = ToolsConfig::load(args.config.as_deref())?;
    let udp_target = args.udp.or_else(|| tools.clock.udp_target.clone());
    let mut config: FixedTimeConfig = tools.clock.into();
    if let Some(topic) = args.topic {
        config.topic = topic;
    }
    if let Some(rate) = args.rate {
        config.rate_hz = rate;
    }

    let sink: Box<dyn StampPublisher> = match udp_target {
        Some(target) => Box::new(UdpPublisher::new(target.as_str())?),
        None => Box::new(WriterPublisher::stdout()),
    };

    let running = setup_interrupt_handler()?;
    let mut node = FixedTimePublisher::new(config, sink);
    node.initialize()?;
    node.run(&running)?;
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

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use backend::config::TrackerConfig;
use backend::control::TurretController;
use backend::serial::{list_devices, SerialLink};
use clap::Parser;
use log::info;

use crate::error::Error;
use crate::sim::{ConsoleTransport, SweepDetector, SweepSource};

mod error;
mod sim;

pub(crate) type Result<T> = std::result::Result<T, crate::error::Error>;

const WRITE_TIMEOUT: Duration = Duration::from_secs(1);
const FRAME_PERIOD: Duration = Duration::from_millis(33);

/// Headless bench runner: sweeps a synthetic target across the frame and
/// streams the resulting corrections to the actuator.
#[derive(Debug, Parser)]
#[command(name = "turret-bench", version)]
struct Args {
    /// Serial device of the actuator controller. Defaults to the first
    /// device found.
    #[arg(long, env = "TURRET_PORT")]
    port: Option<PathBuf>,

    /// Baud rate for the serial link.
    #[arg(long, default_value_t = 9600)]
    baud: u32,

    /// TOML file with tracking tunables.
    #[arg(long, env = "TURRET_CONFIG")]
    config: Option<PathBuf>,

    /// Print corrections to stdout instead of opening a serial device.
    #[arg(long)]
    dry_run: bool,

    /// Number of sweep frames to emit before stopping.
    #[arg(long, default_value_t = 300)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> crate::Result<()> {
    let config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::Relaxed))?;

    let source = SweepSource::new(640.0, 480.0, args.frames, FRAME_PERIOD, Arc::clone(&stop));
    let detector = SweepDetector::new(60, 8);

    if args.dry_run {
        info!("dry run, printing corrections to stdout");
        let mut controller = TurretController::new(source, detector, ConsoleTransport, &config)?;
        controller.run(&stop);
    } else {
        let port = match args.port {
            Some(port) => port,
            None => list_devices()?.into_iter().next().ok_or(Error::NoDevice)?,
        };
        info!("sending corrections to {}", port.display());
        let link = SerialLink::open(&port, args.baud, WRITE_TIMEOUT)?;
        let mut controller = TurretController::new(source, detector, link, &config)?;
        controller.run(&stop);
    }

    Ok(())
}

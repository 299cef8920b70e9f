//! Unicorn ETA — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Adapters                                                    │
//! │  FixedArrivals / LineArrivals (ArrivalSource)  SystemClock   │
//! │  ──────────────────── Port Trait Boundary ────────────────── │
//! │  DisplayService ──▶ Client ──▶ codec ──▶ UnixSocketTransport │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use unicorn_eta::adapters::arrivals::{FixedArrivals, LineArrivals};
use unicorn_eta::adapters::time::SystemClock;
use unicorn_eta::app::service::DisplayService;
use unicorn_eta::config::DisplayConfig;
use unicorn_eta::display::matrix::{Matrix, circle, de_matrix};
use unicorn_eta::pixel::{ChannelOrder, Pixel};
use unicorn_eta::protocol::transport::{
    NullTransport, SharedTransport, Transport, UnixSocketTransport,
};
use unicorn_eta::Client;

#[derive(Parser)]
#[command(name = "unicorn-eta")]
#[command(about = "Show minutes until the next arrival on a Unicorn pHAT", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the unicornd socket path
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Override brightness (0-255)
    #[arg(long)]
    brightness: Option<u8>,

    /// Override wire channel order
    #[arg(long, value_parser = parse_order)]
    channel_order: Option<ChannelOrder>,

    /// Log every command sent to the daemon
    #[arg(short, long)]
    verbose: bool,

    /// Encode commands but do not connect to the daemon
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cycle through arrival minutes (from arguments, or one batch per stdin line)
    Show {
        minutes: Vec<u32>,
    },
    /// Draw an antialiased disc
    Circle {
        /// Radius in supersample cells (16 per LED)
        #[arg(short, long, default_value_t = 48)]
        radius: i32,
        /// Offset from the centre in supersample cells
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        dx: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        dy: i32,
        /// Colour as r,g,b
        #[arg(long, default_value = "0,255,255", value_parser = parse_colour)]
        colour: Pixel,
    },
    /// Blank the display
    Clear,
}

fn parse_order(s: &str) -> Result<ChannelOrder, String> {
    match s {
        "grb" => Ok(ChannelOrder::Grb),
        "rgb" => Ok(ChannelOrder::Rgb),
        other => Err(format!("unknown channel order `{other}` (expected grb or rgb)")),
    }
}

fn parse_colour(s: &str) -> Result<Pixel, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<u32>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    let [r, g, b] = parts[..] else {
        return Err("expected r,g,b".into());
    };
    Pixel::new(r, g, b).map_err(|e| e.to_string())
}

fn load_config(cli: &Cli) -> Result<DisplayConfig> {
    let mut config = match &cli.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };
    if let Some(socket) = &cli.socket {
        config.socket_path.clone_from(socket);
    }
    if let Some(b) = cli.brightness {
        config.brightness = b;
    }
    if let Some(order) = cli.channel_order {
        config.channel_order = order;
    }
    config.verbose |= cli.verbose;
    config.validate()?;
    Ok(config)
}

fn execute<T: Transport>(
    client: &mut Client<T>,
    config: &DisplayConfig,
    command: Commands,
) -> Result<()> {
    let service = DisplayService::new(config);
    let mut clock = SystemClock;

    match command {
        Commands::Show { minutes } => {
            service.start(client, &mut clock)?;
            if minutes.is_empty() {
                let mut source = LineArrivals::new(io::stdin().lock());
                service.run(client, &mut clock, &mut source)
            } else {
                service.run(client, &mut clock, &mut FixedArrivals::new(minutes))
            }
        }
        Commands::Circle {
            radius,
            dx,
            dy,
            colour,
        } => {
            let mut m = Matrix::new();
            m.map_supersample(&circle(radius, (dx, dy), colour));
            client.set_all_pixels(&de_matrix(&m))?;
            client.show()?;
            Ok(())
        }
        Commands::Clear => Ok(client.clear()?),
    }
}

/// Blank the display and exit on Ctrl-C. The handler holds the transport
/// lock until exit, so no frame from the display loop can follow the clear.
fn clear_on_interrupt<T>(shared: SharedTransport<T>, config: &DisplayConfig) -> Result<()>
where
    T: Transport + Send + 'static,
{
    let order = config.channel_order;
    let verbose = config.verbose;
    ctrlc::set_handler(move || {
        let mut guard = shared.lock();
        info!("Interrupted, clearing display");
        let mut client = Client::new(&mut *guard, verbose).with_channel_order(order);
        if let Err(e) = client.clear() {
            warn!("Clearing display on exit failed: {}", e);
        }
        process::exit(0);
    })
    .context("installing interrupt handler")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Unicorn ETA v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let command = cli.command;

    if cli.dry_run {
        info!("Dry run, frames are discarded");
        let mut client =
            Client::new(NullTransport, config.verbose).with_channel_order(config.channel_order);
        return execute(&mut client, &config, command);
    }

    if config.verbose {
        info!("Connecting to ({})...", config.socket_path.display());
    }
    let transport =
        UnixSocketTransport::connect(&config.socket_path, Some(config.write_timeout()))
            .context("starting unicorn client")?;
    let shared = SharedTransport::new(transport);
    clear_on_interrupt(shared.clone(), &config)?;

    let mut client =
        Client::new(shared, config.verbose).with_channel_order(config.channel_order);

    execute(&mut client, &config, command)
}

//! meteoq Server Binary
//!
//! Starts the UDP server for meteoq.

use clap::Parser;
use meteoq::forecast::Forecaster;
use meteoq::network::Server;
use meteoq::protocol::WireFormat;
use meteoq::{Config, WeatherService};
use tracing_subscriber::{fmt, EnvFilter};

/// meteoq Server
#[derive(Parser, Debug)]
#[command(name = "meteoq-server")]
#[command(about = "UDP weather query server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:27015")]
    listen: String,

    /// Response wire form: binary or text (must match the client)
    #[arg(short = 'f', long, default_value = "binary")]
    format: WireFormat,

    /// Largest accepted request datagram in bytes
    #[arg(long, default_value = "512")]
    max_datagram: usize,

    /// Fixed seed for the value generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,meteoq=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("meteoq server v{}", meteoq::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Wire format: {}", args.format);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .wire_format(args.format)
        .max_datagram(args.max_datagram)
        .seed(args.seed)
        .build();

    let forecaster = match config.seed {
        Some(seed) => {
            tracing::info!("Using fixed forecast seed {}", seed);
            Forecaster::with_seed(seed)
        }
        None => Forecaster::new(),
    };

    let service = WeatherService::with_forecaster(config.wire_format, forecaster);

    // Bind and serve
    let mut server = match Server::new(config, service) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

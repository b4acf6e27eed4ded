//! meteoq CLI Client
//!
//! Sends weather queries to a meteoq server and prints the replies.
//! With trailing arguments it runs one query and exits; without, it reads
//! `"<kind> <city>"` lines from stdin.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use meteoq::cities::{canonical_city_name, CITIES};
use meteoq::network::{describe_response, WeatherClient};
use meteoq::protocol::{parse_request, RequestOutcome, WireFormat};
use meteoq::MeteoError;
use tracing_subscriber::{fmt, EnvFilter};

/// meteoq CLI
#[derive(Parser, Debug)]
#[command(name = "meteoq-cli")]
#[command(about = "CLI client for the meteoq weather server")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:27015")]
    server: String,

    /// Response wire form: binary or text (must match the server)
    #[arg(short = 'f', long, default_value = "binary")]
    format: WireFormat,

    /// Receive timeout in milliseconds (0 waits forever)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    /// One-shot query, e.g. `t Bari`; interactive when omitted
    query: Vec<String>,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let timeout = (args.timeout_ms > 0).then(|| Duration::from_millis(args.timeout_ms));
    let client = match WeatherClient::connect(&args.server, args.format, timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to reach {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    if args.query.is_empty() {
        interactive(&client);
    } else {
        let line = args.query.join(" ");
        std::process::exit(run_query(&client, &line));
    }
}

/// Send one query line and print the reply. Returns an exit code.
fn run_query(client: &WeatherClient, line: &str) -> i32 {
    // Recover the city from our own line so the report can show it in
    // canonical capitalization. The server still validates for real.
    let city = match parse_request(line) {
        RequestOutcome::Valid(req) | RequestOutcome::CityUnavailable(req) => {
            canonical_city_name(req.city.as_str()).to_string()
        }
        RequestOutcome::Malformed => String::new(),
    };

    match client.query(line) {
        Ok(response) => {
            println!("{}", describe_response(&response, &city));
            0
        }
        Err(MeteoError::Io(ref e))
            if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::TimedOut =>
        {
            eprintln!("no response from server (timed out)");
            1
        }
        Err(e) => {
            eprintln!("query failed: {}", e);
            1
        }
    }
}

/// Read query lines from stdin until EOF or `quit`.
fn interactive(client: &WeatherClient) {
    println!("meteoq interactive client");
    println!("enter queries as `<kind> <city>` with kind one of t/h/w/p, e.g. `t Bari`");
    println!("known cities: {}", CITIES.join(", "));
    println!("Ctrl-D or `quit` exits");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("stdin error: {}", e);
                break;
            }
            None => break, // EOF
        };

        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        run_query(client, &line);
    }
}

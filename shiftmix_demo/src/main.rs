//! Demo for the `shiftmix` generator: prints a few sample draws.
//!
//! Examples:
//!   shiftmix-demo
//!   shiftmix-demo --seed 42 --count 10
//!   shiftmix-demo --entropy --bound 6
//!   shiftmix-demo --json
//!
//! The seed comes from `--seed`, else `SHIFTMIX_SEED`, else 123456789.

use serde::Serialize;
use shiftmix::{Generator, GeneratorConfig, GeneratorState};
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_SEED: i64 = 123456789;
const SEED_ENV: &str = "SHIFTMIX_SEED";

#[derive(Debug, Error)]
enum CliError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },
    #[error("invalid value for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error(transparent)]
    Rng(#[from] shiftmix::Error),
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    config: GeneratorConfig,
    count: usize,
    bytes: usize,
    bound: Option<i32>,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default().with_seed(DEFAULT_SEED),
            count: 5,
            bytes: 10,
            bound: None,
            json: false,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: i64,
    longs: Vec<i64>,
    ints: Vec<i32>,
    doubles: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounded: Option<Vec<i32>>,
    bytes: Vec<u8>,
    final_state: GeneratorState,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, CliError> {
    let value = value.ok_or_else(|| CliError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

fn parse_args<I>(args: I, env_seed: Option<String>) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    if let Some(raw) = env_seed {
        let seed = parse_number(SEED_ENV, Some(raw))?;
        opts.config = GeneratorConfig::default().with_seed(seed);
    }

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "--seed" => {
                let seed = parse_number(&arg, args.next())?;
                opts.config = GeneratorConfig::default().with_seed(seed);
            }
            "--entropy" => opts.config = GeneratorConfig::default(),
            "--count" => opts.count = parse_number(&arg, args.next())?,
            "--bytes" => opts.bytes = parse_number(&arg, args.next())?,
            "--bound" => opts.bound = Some(parse_number(&arg, args.next())?),
            "--json" => opts.json = true,
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }
    Ok(Command::Run(opts))
}

fn run(opts: &Options) -> Result<Report, CliError> {
    let seed = opts.config.seed.unwrap_or_else(shiftmix::default_seed);
    debug!(seed, reproducible = opts.config.is_reproducible(), "seed resolved");
    let mut rng = Generator::new(seed);

    let longs = (0..opts.count).map(|_| rng.next_int64()).collect();
    let ints = (0..opts.count).map(|_| rng.next_int32()).collect();
    let doubles = (0..opts.count).map(|_| rng.next_float64()).collect();
    let bounded = match opts.bound {
        Some(bound) => Some(
            (0..opts.count)
                .map(|_| rng.next_bounded_int32(bound))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };
    let mut bytes = vec![0u8; opts.bytes];
    rng.fill_bytes(&mut bytes);

    Ok(Report {
        seed,
        longs,
        ints,
        doubles,
        bounded,
        bytes,
        final_state: rng.state(),
    })
}

fn print_text(opts: &Options, report: &Report) {
    println!("seed: {}", report.seed);

    println!("\n{} longs:", opts.count);
    for v in &report.longs {
        println!("{v}");
    }

    println!("\n{} ints:", opts.count);
    for v in &report.ints {
        println!("{v}");
    }

    println!("\n{} doubles:", opts.count);
    for v in &report.doubles {
        println!("{v}");
    }

    if let (Some(bound), Some(values)) = (opts.bound, &report.bounded) {
        println!("\n{} ints in [0, {bound}):", opts.count);
        for v in values {
            println!("{v}");
        }
    }

    println!("\nRandom bytes ({}):", report.bytes.len());
    let hex: Vec<String> = report.bytes.iter().map(|b| format!("{b:02x}")).collect();
    println!("{}", hex.join(" "));
}

fn print_help() {
    println!("shiftmix-demo: print sample draws from a seeded generator\n");
    println!("Usage: shiftmix-demo [options]\n");
    println!("Options:");
    println!("  --seed <i64>    seed (default: ${SEED_ENV}, else {DEFAULT_SEED})");
    println!("  --entropy       seed from the clock and thread identity");
    println!("  --count <n>     values per section (default 5)");
    println!("  --bytes <n>     random bytes to dump (default 10)");
    println!("  --bound <i32>   also draw bounded ints in [0, bound)");
    println!("  --json          print a JSON report instead of text");
    println!("  -h, --help      show this help");
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let env_seed = std::env::var(SEED_ENV).ok();
    let opts = match parse_args(std::env::args().skip(1), env_seed) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            print_help();
            std::process::exit(2);
        }
    };

    let report = match run(&opts) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    info!(seed = report.seed, "generated samples");

    if opts.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to encode report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_text(&opts, &report);
    }
}

use std::error::Error;
use std::process::ExitCode;

use bigfact::{factorial_bigint, log2_factorial, normalize, round_log2};
use clap::Parser;
use log::{info, LevelFilter};

#[derive(clap::Parser, Debug)]
#[command(about = "Computes n! exactly and as mantissa * 2^exponent")]
struct Cli {
    #[arg(default_values_t = [25u32, 24u32], help = "The values of n")]
    numbers: Vec<u32>,

    #[command(flatten)]
    verbosity: VerbosityFlag,
}

#[derive(clap::Args, Debug)]
struct VerbosityFlag {
    #[arg(short, long, help = "Set the verbosity to quiet")]
    quiet: bool,

    #[arg(short, long, help = "Set the verbosity to verbose")]
    verbose: bool,

    #[arg(short, long, help = "Set the verbosity to debug")]
    debug: bool,

    #[arg(short, long, help = "Set the verbosity to trace")]
    trace: bool,
}

impl VerbosityFlag {
    /// Returns the log level filter corresponding to the given verbosity flags.
    fn log_level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}

///! Prints exact factorials and their base-2 approximations.
///!  cargo run --example factorials --release -- 25 24

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    for n in cli.numbers {
        let exact = factorial_bigint(n)?;
        info!("{}! has {} decimal digits", n, exact.len());

        let log2 = log2_factorial(n);
        let norm = normalize(log2);
        let (man10, exp10) = norm.as_decimal_exponent();

        println!("{}! (exact) = {}", n, exact);
        println!("{}! ≈ 2^({:.6})  (≈ 2^{:.0} if rounded)", n, log2, round_log2(log2));
        println!("{}! ≈ {}  => about {:.6}e{:.0}", n, norm, man10, exp10);
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

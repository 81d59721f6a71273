use std::io::{self, BufWriter, Write};

use clap::Parser;
use collatz_blaze::{Error, StepCounts, parse_count};
use instant::Instant;
use thousands::Separable;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "collatz_blaze",
    about = "Prints the Collatz step count of every start in a range, one per line"
)]
struct Args {
    #[arg(long = "start", aliases = ["from"], value_parser = parse_count, default_value_t = 0)]
    start: u64,

    /// Exclusive upper bound. `2^256` saturates to the u64 ceiling, which
    /// never terminates in practice.
    #[arg(long = "limit", aliases = ["end", "stop"], value_parser = parse_count, default_value = "2^256")]
    limit: u64,

    /// Print a status line to stderr every this many starts (0 = quiet).
    #[arg(long = "status", aliases = ["status-interval", "interval"], value_parser = parse_count, default_value_t = 0)]
    status_interval: u64,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let run_start = Instant::now();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut printed: u64 = 0;
    for result in StepCounts::new(args.start, args.limit) {
        let (start, steps) = result?;
        writeln!(out, "{steps}")?;
        printed += 1;
        if args.status_interval > 0 && printed % args.status_interval == 0 {
            eprintln!(
                "start {}: {} steps",
                start.separate_with_commas(),
                steps.separate_with_commas()
            );
        }
    }
    out.flush()?;

    eprintln!(
        "Final: {} starts in {:.3}s",
        printed.separate_with_commas(),
        run_start.elapsed().as_secs_f64()
    );

    Ok(())
}

use collatz_blaze::{Error, Records, parse_count};
use instant::Instant;
use thousands::Separable;

fn main() -> Result<(), Error> {
    let limit = std::env::args()
        .nth(1)
        .map_or(Ok(1_000_000), |arg| parse_count(&arg))?;
    let run_start = Instant::now();

    for result in Records::new(1, limit) {
        let (start, steps) = result?;
        println!(
            "{}\t{} steps\t{:.3}s",
            start.separate_with_commas(),
            steps.separate_with_commas(),
            run_start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

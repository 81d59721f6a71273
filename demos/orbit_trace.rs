use collatz_blaze::{CHAMP_27, Error, summarize, trajectory};
use itertools::Itertools;

fn main() -> Result<(), Error> {
    let values = trajectory(CHAMP_27)?;
    println!("{}", values.iter().format(", "));
    println!("{}", summarize(CHAMP_27));
    Ok(())
}

use collatz_blaze::{
    CHAMP_97, CHAMP_837799, Error, Orbit, StatusIterator, StepCounts, step_count,
};
use num_bigint::BigUint;
use num_traits::Zero;
use thousands::Separable;
use wasm_bindgen_test::wasm_bindgen_test;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Reference stepper with no ceiling, for cross-checking the u64 engine.
fn step_count_oracle(start: &BigUint) -> u64 {
    let one = BigUint::from(1u32);
    let mut value = start.clone();
    let mut steps: u64 = 0;

    while value > one {
        if (&value % 2u32).is_zero() {
            value /= 2u32;
        } else {
            value = &value * 3u32 + 1u32;
        }
        steps += 1;
    }

    steps
}

#[test]
fn champ_837799() -> Result<(), Error> {
    let mut orbit = Orbit::new(CHAMP_837799);

    let status_interval = 100;
    let step_count = orbit.count_with_status(status_interval);

    println!(
        "Final: Steps {}: {:?}",
        step_count.separate_with_commas(),
        orbit
    );

    assert_eq!(step_count, 524);
    assert_eq!(orbit.current(), 1);
    assert!(orbit.has_reached_one());

    Ok(())
}

#[wasm_bindgen_test]
#[test]
fn champ_97_js() -> Result<(), String> {
    let mut orbit = Orbit::from_string("97")?;

    let early_stop_some = false;
    let early_stop_number = 0;
    let step_count = orbit.count_js(early_stop_some, early_stop_number);

    assert_eq!(step_count, 118);
    assert_eq!(orbit.current(), 1);
    assert!(orbit.has_reached_one());
    assert!(!orbit.has_overflowed());

    Ok(())
}

#[wasm_bindgen_test]
#[test]
fn early_stop_js() -> Result<(), String> {
    let mut orbit = Orbit::from_string("2^20")?;

    let early_stop_some = true;
    let early_stop_number = 10;
    let step_count = orbit.count_js(early_stop_some, early_stop_number);

    assert_eq!(step_count, 10);
    assert_eq!(orbit.current(), 1024);
    assert!(!orbit.has_reached_one());

    Ok(())
}

#[wasm_bindgen_test]
#[test]
fn driver_sequence_for_first_six() -> Result<(), Error> {
    let counts = StepCounts::new(0, 6)
        .map(|result| result.map(|(_, steps)| steps))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(counts, [0, 0, 1, 7, 2, 5]);
    Ok(())
}

#[test]
fn oracle_agrees_with_u64_engine() -> Result<(), Error> {
    for start in (0..200).chain([CHAMP_97, CHAMP_837799, 1 << 40]) {
        let expected = step_count_oracle(&BigUint::from(start));
        assert_eq!(step_count(start)?, expected, "start {start}");
    }
    Ok(())
}

#[test]
fn oracle_survives_past_the_u64_ceiling() {
    // u64::MAX is odd, so the engine overflows on its first step while the
    // oracle still terminates.
    assert!(matches!(
        step_count(u64::MAX),
        Err(Error::ValueOverflow { .. })
    ));

    let steps = step_count_oracle(&BigUint::from(u64::MAX));
    assert!(steps >= 64, "needs at least 64 halvings, got {steps}");
}

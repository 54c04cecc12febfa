use std::env;
use std::error::Error;
use std::time::Instant;

use log::{info, LevelFilter};

use classic_sort::{is_sorted, patterns, show, Algorithm};

const DEFAULT_LEN: usize = 60_000;
const DEFAULT_RANGE: i32 = 60_000;

fn env_or<T>(name: &str, default: T) -> Result<T, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Error + 'static,
{
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map_err(|err| format!("invalid value '{val}' for {name}: {err}").into()),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(format!("can't read {name}: {err}").into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let alg = env_or("SORT_ALGO", Algorithm::BottomUpMerge)?;
    let len = env_or("SORT_LEN", DEFAULT_LEN)?;
    let range = env_or("SORT_RANGE", DEFAULT_RANGE)?;
    if range <= 0 {
        return Err(format!("SORT_RANGE must be positive, got {range}").into());
    }
    let show_values = env::var("SORT_SHOW").is_ok();

    info!(
        "algorithm: {alg} len: {len} range: [0, {range}) seed: {}",
        patterns::random_init_seed()
    );

    let mut values = patterns::generate_sequence(len, range);
    if show_values {
        println!("{}", show(&values));
    }

    let start = Instant::now();
    alg.try_sort(&mut values)?;
    let elapsed = start.elapsed();

    assert!(is_sorted(&values));
    info!("sorted {len} elements in {elapsed:?}");

    if show_values {
        println!("{}", show(&values));
    }

    Ok(())
}

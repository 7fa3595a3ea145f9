use std::env;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use drone_dispatch::dataset::Dataset;
use drone_dispatch::error::DispatchError;
use drone_dispatch::playback::{NoPlayback, RealTimePlayback};
use drone_dispatch::report;
use drone_dispatch::scheduler::{dispatch_dataset, DispatchOptions, DispatchReport};

const DATASET_ENV: &str = "DRONE_DISPATCH_DATASET";
const PLAYBACK_ENV: &str = "DRONE_DISPATCH_PLAYBACK";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = env::args().nth(1).or_else(|| env::var(DATASET_ENV).ok());
    let loaded = match &path {
        Some(path) => Dataset::from_path(path),
        None => Dataset::sample(),
    };
    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(err) => {
            error!(path = path.as_deref().unwrap_or("<sample>"), "{}", err);
            return ExitCode::FAILURE;
        }
    };

    for warning in dataset.lint() {
        warn!("{}", warning);
    }

    match run(&dataset) {
        Ok(report) => {
            println!("{}", report::render(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("An error occurred in the dispatch run: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(dataset: &Dataset) -> Result<DispatchReport, DispatchError> {
    let options = DispatchOptions::default();
    let playback_off = env::var(PLAYBACK_ENV).is_ok_and(|value| value.eq_ignore_ascii_case("off"));

    if !dataset.output.powered_on || playback_off {
        return dispatch_dataset(dataset, &NoPlayback, options);
    }

    match dataset
        .output
        .minutes
        .real_time_factor()
        .ok()
        .and_then(RealTimePlayback::new)
    {
        Some(playback) => {
            info!(real_time_factor = playback.real_time_factor(), "Real-time playback on");
            dispatch_dataset(dataset, &playback, options)
        }
        None => {
            warn!("Unusable time scale, running without playback");
            dispatch_dataset(dataset, &NoPlayback, options)
        }
    }
}

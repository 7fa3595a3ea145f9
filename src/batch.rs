//! Parallel execution of independent dispatch scenarios.

use rayon::prelude::*;

use crate::dataset::Dataset;
use crate::error::DispatchError;
use crate::playback::NoPlayback;
use crate::scheduler::{dispatch_dataset, DispatchOptions, DispatchReport};

/// A dataset paired with the options to run it under.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub dataset: Dataset,
    pub options: DispatchOptions,
}

impl Scenario {
    pub fn new(name: impl Into<String>, dataset: Dataset, options: DispatchOptions) -> Self {
        Self {
            name: name.into(),
            dataset,
            options,
        }
    }
}

/// Runs every scenario on the rayon pool without playback.
///
/// Each run owns its own fleet, so results match sequential runs and come
/// back in input order.
pub fn dispatch_scenarios(scenarios: &[Scenario]) -> Vec<Result<DispatchReport, DispatchError>> {
    scenarios
        .par_iter()
        .map(|scenario| {
            let _span = tracing::info_span!("scenario", name = %scenario.name).entered();
            dispatch_dataset(&scenario.dataset, &NoPlayback, scenario.options)
        })
        .collect()
}

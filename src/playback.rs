//! Playback strategies for assigned deliveries.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::model::Order;
use crate::traits::Playback;

/// Skips pacing entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlayback;

impl Playback for NoPlayback {
    fn play(&self, _order: &Order, _trip_minutes: f64, _wait_minutes: f64) {}
}

/// Sleeps the calling thread for each simulated leg.
///
/// One simulated minute lasts `1 / real_time_factor` seconds, so a factor of
/// 40 plays a 127-minute trip in about 3.2 seconds.
#[derive(Debug, Clone, Copy)]
pub struct RealTimePlayback {
    real_time_factor: f64,
}

impl RealTimePlayback {
    /// Returns `None` unless the factor is finite and positive.
    pub fn new(real_time_factor: f64) -> Option<Self> {
        (real_time_factor.is_finite() && real_time_factor > 0.0)
            .then_some(Self { real_time_factor })
    }

    pub fn real_time_factor(&self) -> f64 {
        self.real_time_factor
    }

    /// Wall-clock duration of `minutes` simulated minutes.
    pub fn wall_clock(&self, minutes: f64) -> Duration {
        Duration::try_from_secs_f64(minutes / self.real_time_factor).unwrap_or_default()
    }
}

impl Playback for RealTimePlayback {
    fn play(&self, order: &Order, trip_minutes: f64, wait_minutes: f64) {
        info!(customer_id = order.customer_id, "Sending drone to customer");
        thread::sleep(self.wall_clock(trip_minutes));
        info!(customer_id = order.customer_id, "Drone reached customer");
        info!(customer_id = order.customer_id, "Customer accepted the order");
        thread::sleep(self.wall_clock(wait_minutes));
        info!(customer_id = order.customer_id, "Drone returning to warehouse");
    }
}

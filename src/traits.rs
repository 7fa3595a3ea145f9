//! Seams between the dispatch core and its collaborators.

use crate::model::Order;

/// Paces a delivery in wall-clock time once the scheduler has assigned it.
///
/// Called after every successful assignment. Implementations must not feed
/// anything back into scheduling; a run with [`NoPlayback`](crate::playback::NoPlayback)
/// yields the same result as any other strategy.
pub trait Playback {
    /// `trip_minutes` is the flight to the customer, `wait_minutes` the
    /// handling delay that follows it.
    fn play(&self, order: &Order, trip_minutes: f64, wait_minutes: f64);
}

impl<P: Playback + ?Sized> Playback for &P {
    fn play(&self, order: &Order, trip_minutes: f64, wait_minutes: f64) {
        (**self).play(order, trip_minutes, wait_minutes)
    }
}

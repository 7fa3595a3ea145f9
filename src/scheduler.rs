//! Dispatch scheduler: assigns every order to a drone, one order at a time.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::error::{DispatchError, Entity, InvalidInput};
use crate::fleet::{DroneId, EnergyModel, FleetLedger};
use crate::geometry::trip_minutes;
use crate::model::{DroneType, Order, Warehouse};
use crate::selector::nearest_warehouse;
use crate::traits::Playback;

/// Handling delay charged to every order after the first one of a run.
pub const HANDLING_DELAY_MINUTES: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchOptions {
    /// Minutes added for warehouse handling, skipped for the first order.
    pub handling_delay_minutes: f64,
    /// Battery qualification and debit rule.
    pub energy: EnergyModel,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            handling_delay_minutes: HANDLING_DELAY_MINUTES,
            energy: EnergyModel::default(),
        }
    }
}

/// Aggregate outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunResult {
    pub total_delivery_time: f64,
    pub total_orders_processed: usize,
    pub total_drones_used: usize,
}

impl RunResult {
    /// `NaN` when every order was dropped.
    pub fn average_delivery_time_per_order(&self) -> f64 {
        if self.total_orders_processed == 0 {
            return f64::NAN;
        }
        self.total_delivery_time / self.total_orders_processed as f64
    }
}

/// A delivered order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// 1-based position of the order in the input queue.
    pub position: usize,
    pub customer_id: u64,
    pub warehouse: usize,
    pub trip_minutes: f64,
    pub wait_minutes: f64,
    pub drone: DroneId,
    /// The fleet grew to serve this order.
    pub spawned: bool,
    pub remaining_capacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DropReason {
    /// Not even a fresh drone of any catalog type covers the trip.
    NoSuitableDroneType,
}

/// An order the run gave up on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedOrder {
    /// 1-based position of the order in the input queue.
    pub position: usize,
    pub customer_id: u64,
    pub trip_minutes: f64,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub result: RunResult,
    pub trips: Vec<TripRecord>,
    pub dropped: Vec<DroppedOrder>,
    /// Fleet as it stands after the last order.
    pub fleet: FleetLedger,
}

/// Runs every order of `dataset` through [`dispatch`].
pub fn dispatch_dataset<P>(
    dataset: &Dataset,
    playback: &P,
    options: DispatchOptions,
) -> Result<DispatchReport, DispatchError>
where
    P: Playback,
{
    dispatch(
        &dataset.warehouses,
        &dataset.orders,
        &dataset.types_of_drones,
        playback,
        options,
    )
}

/// Assigns each order, in input order, to a drone flying from the nearest
/// warehouse.
///
/// An existing drone is reused when its remaining battery covers the trip;
/// otherwise the fleet grows by the first catalog type that can. Orders no
/// type can cover are dropped and the run continues.
pub fn dispatch<P>(
    warehouses: &[Warehouse],
    orders: &[Order],
    catalog: &[DroneType],
    playback: &P,
    options: DispatchOptions,
) -> Result<DispatchReport, DispatchError>
where
    P: Playback,
{
    validate(warehouses, orders, catalog)?;

    let mut fleet = FleetLedger::new(options.energy);
    let mut delivery_time = 0.0;
    let mut orders_remaining = orders.len();
    let mut drones_used = 0;
    let mut trips = Vec::with_capacity(orders.len());
    let mut dropped = Vec::new();

    for (index, order) in orders.iter().enumerate() {
        let position = index + 1;
        let warehouse = nearest_warehouse(order.customer_location, warehouses)?;
        let trip = trip_minutes(warehouses[warehouse].location, order.customer_location);
        let wait = if index > 0 {
            options.handling_delay_minutes
        } else {
            0.0
        };

        let (drone, spawned) = match fleet.find_usable(trip) {
            Some(drone) => (drone, false),
            None => match fleet.spawn(catalog, trip) {
                Ok(drone) => {
                    drones_used += 1;
                    (drone, true)
                }
                Err(err) => {
                    warn!(position, customer_id = order.customer_id, "Dropping order: {}", err);
                    orders_remaining -= 1;
                    dropped.push(DroppedOrder {
                        position,
                        customer_id: order.customer_id,
                        trip_minutes: trip,
                        reason: DropReason::NoSuitableDroneType,
                    });
                    continue;
                }
            },
        };

        delivery_time += trip + wait;
        let remaining_capacity = fleet.commit(drone, trip);

        debug!(
            position,
            customer_id = order.customer_id,
            warehouse = %warehouses[warehouse].name,
            trip_minutes = trip,
            wait_minutes = wait,
            %drone,
            spawned,
            remaining_capacity,
            "Assigned order"
        );

        trips.push(TripRecord {
            position,
            customer_id: order.customer_id,
            warehouse,
            trip_minutes: trip,
            wait_minutes: wait,
            drone,
            spawned,
            remaining_capacity,
        });

        playback.play(order, trip, wait);
    }

    let result = RunResult {
        total_delivery_time: delivery_time,
        total_orders_processed: orders_remaining,
        total_drones_used: drones_used,
    };

    info!(
        total_delivery_time = result.total_delivery_time,
        total_orders_processed = result.total_orders_processed,
        total_drones_used = result.total_drones_used,
        dropped = dropped.len(),
        "Dispatch run finished"
    );

    Ok(DispatchReport {
        result,
        trips,
        dropped,
        fleet,
    })
}

fn validate(
    warehouses: &[Warehouse],
    orders: &[Order],
    catalog: &[DroneType],
) -> Result<(), InvalidInput> {
    if warehouses.is_empty() {
        return Err(InvalidInput::NoWarehouses);
    }
    if orders.is_empty() {
        return Err(InvalidInput::NoOrders);
    }
    if catalog.is_empty() {
        return Err(InvalidInput::NoDroneTypes);
    }

    if let Some(index) = warehouses.iter().position(|w| !w.location.is_finite()) {
        return Err(InvalidInput::NonFiniteCoordinate {
            entity: Entity::Warehouse,
            index,
        });
    }
    if let Some(index) = orders.iter().position(|o| !o.customer_location.is_finite()) {
        return Err(InvalidInput::NonFiniteCoordinate {
            entity: Entity::Order,
            index,
        });
    }
    if let Some(index) = catalog.iter().position(|t| !t.is_finite()) {
        return Err(InvalidInput::NonFiniteDroneType { index });
    }

    Ok(())
}

//! Fleet ledger: the drones in service during one run and their batteries.
//!
//! Drones are never retired or recharged. Lookup is first-fit in creation
//! order; growth takes the first catalog entry that can cover the trip.

use std::fmt;

use serde::Serialize;

use crate::model::DroneType;

/// Scale applied to battery capacity when checking whether a trip fits.
pub const CAPACITY_UNIT_FACTOR: f64 = 1000.0;

/// How a completed trip is charged against a drone's battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DebitRule {
    /// Charge `trip * consumption` as-is, while qualification scales capacity
    /// by the unit factor. Remaining capacity can go negative.
    #[default]
    Unscaled,
    /// Charge `trip * consumption / capacity_unit_factor`, matching the scale
    /// used for qualification.
    Scaled,
}

/// Qualification and debit rule for drone batteries.
///
/// The default reproduces the reference behavior: a drone qualifies when
/// `capacity * 1000 >= trip * consumption`, yet is debited the unscaled
/// `trip * consumption`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyModel {
    pub capacity_unit_factor: f64,
    pub debit_rule: DebitRule,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self {
            capacity_unit_factor: CAPACITY_UNIT_FACTOR,
            debit_rule: DebitRule::Unscaled,
        }
    }
}

impl EnergyModel {
    /// Variant whose debit uses the same scale as qualification.
    pub fn corrected() -> Self {
        Self {
            debit_rule: DebitRule::Scaled,
            ..Self::default()
        }
    }

    /// Energy a trip of `trip_distance` minutes draws, in consumption units.
    pub fn trip_cost(&self, drone_type: &DroneType, trip_distance: f64) -> f64 {
        trip_distance * drone_type.consumption
    }

    /// Whether a battery holding `capacity` can take on the trip.
    pub fn covers(&self, capacity: f64, drone_type: &DroneType, trip_distance: f64) -> bool {
        capacity * self.capacity_unit_factor >= self.trip_cost(drone_type, trip_distance)
    }

    /// Capacity removed from the battery once the trip is flown.
    pub fn debit(&self, drone_type: &DroneType, trip_distance: f64) -> f64 {
        let cost = self.trip_cost(drone_type, trip_distance);
        match self.debit_rule {
            DebitRule::Unscaled => cost,
            DebitRule::Scaled => cost / self.capacity_unit_factor,
        }
    }
}

/// Handle to a drone in a [`FleetLedger`], in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DroneId(usize);

impl DroneId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DroneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drone#{}", self.0 + 1)
    }
}

/// A drone in service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroneInstance {
    drone_type: DroneType,
    catalog_index: usize,
    remaining_capacity: f64,
    trips: usize,
}

impl DroneInstance {
    pub fn drone_type(&self) -> &DroneType {
        &self.drone_type
    }

    /// Position of this drone's type in the catalog it was spawned from.
    pub fn catalog_index(&self) -> usize {
        self.catalog_index
    }

    pub fn remaining_capacity(&self) -> f64 {
        self.remaining_capacity
    }

    pub fn trips(&self) -> usize {
        self.trips
    }
}

/// No catalog entry can cover a trip, even fully charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoSuitableDroneType {
    pub trip_distance: f64,
}

impl fmt::Display for NoSuitableDroneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no drone type has enough battery for a {}-minute trip",
            self.trip_distance
        )
    }
}

impl std::error::Error for NoSuitableDroneType {}

/// Drones in service, owned by a single dispatch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FleetLedger {
    drones: Vec<DroneInstance>,
    energy: EnergyModel,
}

impl FleetLedger {
    pub fn new(energy: EnergyModel) -> Self {
        Self {
            drones: Vec::new(),
            energy,
        }
    }

    pub fn energy_model(&self) -> &EnergyModel {
        &self.energy
    }

    pub fn drones(&self) -> &[DroneInstance] {
        &self.drones
    }

    pub fn get(&self, drone: DroneId) -> Option<&DroneInstance> {
        self.drones.get(drone.0)
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }

    /// First drone, in creation order, whose remaining battery covers the trip.
    pub fn find_usable(&self, trip_distance: f64) -> Option<DroneId> {
        self.drones
            .iter()
            .position(|drone| {
                self.energy
                    .covers(drone.remaining_capacity, &drone.drone_type, trip_distance)
            })
            .map(DroneId)
    }

    /// Adds a fresh drone of the first catalog type able to cover the trip.
    pub fn spawn(
        &mut self,
        catalog: &[DroneType],
        trip_distance: f64,
    ) -> Result<DroneId, NoSuitableDroneType> {
        let (catalog_index, drone_type) = catalog
            .iter()
            .enumerate()
            .find(|(_, drone_type)| {
                self.energy
                    .covers(drone_type.capacity, drone_type, trip_distance)
            })
            .ok_or(NoSuitableDroneType { trip_distance })?;

        self.drones.push(DroneInstance {
            drone_type: *drone_type,
            catalog_index,
            remaining_capacity: drone_type.capacity,
            trips: 0,
        });

        Ok(DroneId(self.drones.len() - 1))
    }

    /// Charges a flown trip to `drone` and returns its remaining capacity.
    ///
    /// Only call this for a drone that `find_usable` or `spawn` just returned
    /// for the same trip.
    pub fn commit(&mut self, drone: DroneId, trip_distance: f64) -> f64 {
        let energy = self.energy;
        let instance = &mut self.drones[drone.0];
        debug_assert!(
            energy.covers(instance.remaining_capacity, &instance.drone_type, trip_distance),
            "{} does not qualify for a {}-minute trip",
            drone,
            trip_distance
        );

        instance.remaining_capacity -= energy.debit(&instance.drone_type, trip_distance);
        instance.trips += 1;
        instance.remaining_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<DroneType> {
        vec![
            DroneType::new(0.5, 1.0),
            DroneType::new(1.0, 3.0),
            DroneType::new(2.0, 5.0),
        ]
    }

    #[test]
    fn test_empty_ledger_has_nothing_usable() {
        let ledger = FleetLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.find_usable(1.0), None);
    }

    #[test]
    fn test_spawn_takes_first_qualifying_type() {
        let mut ledger = FleetLedger::default();
        // 0.5 * 1000 = 500 >= 127
        let drone = ledger.spawn(&catalog(), 127.0).expect("type 0 qualifies");
        assert_eq!(drone.index(), 0);
        assert_eq!(ledger.drones()[0].catalog_index(), 0);
        assert_eq!(ledger.drones()[0].remaining_capacity(), 0.5);

        // 600 > 500, 1800 > 1000, 3000 > 2000
        assert_eq!(
            ledger.spawn(&catalog(), 600.0),
            Err(NoSuitableDroneType { trip_distance: 600.0 })
        );

        let skewed = vec![DroneType::new(0.1, 10.0), DroneType::new(1.0, 1.0)];
        let drone = ledger.spawn(&skewed, 200.0).expect("second type qualifies");
        assert_eq!(drone.index(), 1);
        assert_eq!(ledger.drones()[1].catalog_index(), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_spawn_failure_leaves_ledger_untouched() {
        let mut ledger = FleetLedger::default();
        let catalog = vec![DroneType::new(0.1, 100.0)];
        // 100 >= 5000 fails
        assert!(ledger.spawn(&catalog, 50.0).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_find_usable_is_first_fit() {
        let mut ledger = FleetLedger::default();
        let catalog = vec![DroneType::new(0.01, 1.0), DroneType::new(2.0, 1.0)];
        let small = ledger.spawn(&catalog, 5.0).expect("small qualifies");
        let big = ledger.spawn(&catalog, 50.0).expect("big qualifies");
        assert_ne!(small, big);

        // Both cover a 5-minute trip; the older one wins.
        assert_eq!(ledger.find_usable(5.0), Some(small));
        // Only the big one covers 50 minutes.
        assert_eq!(ledger.find_usable(50.0), Some(big));
        assert_eq!(ledger.find_usable(5000.0), None);
    }

    #[test]
    fn test_commit_debits_unscaled_cost() {
        let mut ledger = FleetLedger::default();
        let drone = ledger.spawn(&catalog(), 127.0).expect("qualifies");
        let remaining = ledger.commit(drone, 127.0);

        assert_eq!(remaining, 0.5 - 127.0);
        assert_eq!(remaining, -126.5);
        assert_eq!(ledger.get(drone).map(DroneInstance::trips), Some(1));
        // Negative battery never qualifies again.
        assert_eq!(ledger.find_usable(1.0), None);
    }

    #[test]
    fn test_commit_with_corrected_model_scales_debit() {
        let mut ledger = FleetLedger::new(EnergyModel::corrected());
        let drone = ledger.spawn(&catalog(), 127.0).expect("qualifies");
        let remaining = ledger.commit(drone, 127.0);

        assert!((remaining - (0.5 - 0.127)).abs() < 1e-12);
        assert!(remaining >= 0.0);
        assert_eq!(ledger.find_usable(127.0), Some(drone));
    }

    #[test]
    fn test_capacity_never_increases() {
        let mut ledger = FleetLedger::new(EnergyModel::corrected());
        let drone = ledger.spawn(&catalog(), 10.0).expect("qualifies");
        let mut last = ledger.drones()[0].remaining_capacity();
        for _ in 0..20 {
            let Some(usable) = ledger.find_usable(10.0) else {
                break;
            };
            assert_eq!(usable, drone);
            let now = ledger.commit(usable, 10.0);
            assert!(now <= last);
            last = now;
        }
    }

    #[test]
    fn test_energy_model_default_is_reference() {
        let model = EnergyModel::default();
        assert_eq!(model.capacity_unit_factor, 1000.0);
        assert_eq!(model.debit_rule, DebitRule::Unscaled);

        let drone_type = DroneType::new(0.1, 100.0);
        assert!(!model.covers(0.1, &drone_type, 50.0));
        assert!(model.covers(0.1, &drone_type, 1.0));
    }
}

//! Domain records shared by the scheduler and the dataset loader.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A fixed pickup point for every order in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(flatten)]
    pub location: Point,
    pub name: String,
}

impl Warehouse {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            location: Point::new(x, y),
            name: name.into(),
        }
    }
}

/// A customer order, delivered in a single trip.
///
/// The product list is informational; drone assignment ignores quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub customer_id: u64,
    pub customer_location: Point,
    #[serde(default)]
    pub product_list: BTreeMap<String, u32>,
}

impl Order {
    pub fn new(customer_id: u64, x: f64, y: f64) -> Self {
        Self {
            customer_id,
            customer_location: Point::new(x, y),
            product_list: BTreeMap::new(),
        }
    }

    pub fn with_product(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.product_list.insert(name.into(), quantity);
        self
    }
}

/// An entry of the drone catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneType {
    /// Total battery budget of a fresh drone.
    pub capacity: f64,
    /// Energy drawn per minute of flight.
    pub consumption: f64,
}

impl DroneType {
    pub const fn new(capacity: f64, consumption: f64) -> Self {
        Self {
            capacity,
            consumption,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.capacity.is_finite() && self.consumption.is_finite()
    }
}

/// A registered customer. Orders carry their own location; this registry is
/// only used to cross-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub coordinates: Point,
}

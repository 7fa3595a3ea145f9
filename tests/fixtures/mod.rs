//! Shared fixtures for drone-dispatch integration tests.
//!
//! Mirrors the reference layout: two warehouses on the diagonal of a
//! 280 x 280 map.

#![allow(dead_code)]

use drone_dispatch::dataset::{Dataset, OutputSettings};
use drone_dispatch::geometry::Point;
use drone_dispatch::model::{DroneType, Order, Warehouse};

pub fn diagonal_warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse::new("Left warehouse", 100.0, 100.0),
        Warehouse::new("Right warehouse", 200.0, 200.0),
    ]
}

pub fn reference_catalog() -> Vec<DroneType> {
    vec![
        DroneType::new(0.5, 1.0),
        DroneType::new(1.0, 3.0),
        DroneType::new(2.0, 5.0),
    ]
}

/// Builder for ad-hoc datasets with sensible defaults.
#[derive(Clone, Debug)]
pub struct DatasetBuilder {
    warehouses: Vec<Warehouse>,
    orders: Vec<Order>,
    catalog: Vec<DroneType>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self {
            warehouses: diagonal_warehouses(),
            orders: Vec::new(),
            catalog: reference_catalog(),
        }
    }

    pub fn warehouse(mut self, name: &str, x: f64, y: f64) -> Self {
        self.warehouses.push(Warehouse::new(name, x, y));
        self
    }

    pub fn order(mut self, customer_id: u64, x: f64, y: f64) -> Self {
        self.orders.push(Order::new(customer_id, x, y));
        self
    }

    pub fn catalog(mut self, catalog: Vec<DroneType>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn build(self) -> Dataset {
        Dataset {
            output: OutputSettings::default(),
            map_top_right_coordinate: Some(Point::new(280.0, 280.0)),
            products: Vec::new(),
            warehouses: self.warehouses,
            customers: Vec::new(),
            orders: self.orders,
            types_of_drones: self.catalog,
        }
    }
}

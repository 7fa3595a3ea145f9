//! Input document loading and sanity checks.
//!
//! The document bundles warehouses, orders and the drone catalog with the
//! customer and product registries and playback settings of a simulation.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::{Customer, DroneType, Order, Warehouse};

const SAMPLE_DATASET: &str = include_str!("../data/sample_dataset.json");

/// Simulated-to-real minute mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    pub program: f64,
    pub real: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            program: 1.0,
            real: 1.0,
        }
    }
}

impl TimeScale {
    /// `real / program`; both must be finite and positive.
    pub fn real_time_factor(&self) -> Result<f64, DatasetError> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(self.program) || !valid(self.real) {
            return Err(DatasetError::InvalidTimeScale(*self));
        }
        Ok(self.real / self.program)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    /// Play trips back in wall-clock time.
    #[serde(default)]
    pub powered_on: bool,
    #[serde(default)]
    pub minutes: TimeScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default, rename = "map-top-right-coordinate")]
    pub map_top_right_coordinate: Option<Point>,
    #[serde(default)]
    pub products: Vec<String>,
    pub warehouses: Vec<Warehouse>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub types_of_drones: Vec<DroneType>,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidTimeScale(TimeScale),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to read dataset: {}", err),
            DatasetError::Json(err) => write!(f, "malformed dataset: {}", err),
            DatasetError::InvalidTimeScale(scale) => write!(
                f,
                "time scale needs positive minutes, got program={} real={}",
                scale.program, scale.real
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Json(err) => Some(err),
            DatasetError::InvalidTimeScale(_) => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(err: io::Error) -> Self {
        DatasetError::Io(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Json(err)
    }
}

/// Something odd about a dataset that does not stop a run.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetWarning {
    /// `position` is 1-based.
    UnknownCustomer { position: usize, customer_id: u64 },
    CustomerLocationMismatch {
        position: usize,
        customer_id: u64,
        registered: Point,
        ordered: Point,
    },
    UnknownProduct { position: usize, product: String },
    WarehouseOutsideMap { name: String, location: Point },
    OrderOutsideMap { position: usize, location: Point },
}

impl fmt::Display for DatasetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetWarning::UnknownCustomer {
                position,
                customer_id,
            } => write!(f, "order {} references unknown customer {}", position, customer_id),
            DatasetWarning::CustomerLocationMismatch {
                position,
                customer_id,
                registered,
                ordered,
            } => write!(
                f,
                "order {} ships to ({}, {}) but customer {} is registered at ({}, {})",
                position, ordered.x, ordered.y, customer_id, registered.x, registered.y
            ),
            DatasetWarning::UnknownProduct { position, product } => {
                write!(f, "order {} lists unknown product {:?}", position, product)
            }
            DatasetWarning::WarehouseOutsideMap { name, location } => write!(
                f,
                "warehouse {:?} at ({}, {}) lies outside the map",
                name, location.x, location.y
            ),
            DatasetWarning::OrderOutsideMap { position, location } => write!(
                f,
                "order {} at ({}, {}) lies outside the map",
                position, location.x, location.y
            ),
        }
    }
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Two warehouses, three orders and a three-type catalog.
    pub fn sample() -> Result<Self, DatasetError> {
        Self::from_json_str(SAMPLE_DATASET)
    }

    pub fn customer(&self, id: u64) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// Cross-checks orders against the registries and the map bounds.
    ///
    /// Registries and bounds that are absent from the document are not checked.
    pub fn lint(&self) -> Vec<DatasetWarning> {
        let mut warnings = Vec::new();
        let customers: HashMap<u64, &Customer> =
            self.customers.iter().map(|c| (c.id, c)).collect();
        let products: HashSet<&str> = self.products.iter().map(String::as_str).collect();
        let on_map = |point: Point| match self.map_top_right_coordinate {
            Some(top_right) => {
                (0.0..=top_right.x).contains(&point.x) && (0.0..=top_right.y).contains(&point.y)
            }
            None => true,
        };

        for warehouse in &self.warehouses {
            if !on_map(warehouse.location) {
                warnings.push(DatasetWarning::WarehouseOutsideMap {
                    name: warehouse.name.clone(),
                    location: warehouse.location,
                });
            }
        }

        for (index, order) in self.orders.iter().enumerate() {
            let position = index + 1;

            if !customers.is_empty() {
                match customers.get(&order.customer_id) {
                    None => warnings.push(DatasetWarning::UnknownCustomer {
                        position,
                        customer_id: order.customer_id,
                    }),
                    Some(customer) if customer.coordinates != order.customer_location => {
                        warnings.push(DatasetWarning::CustomerLocationMismatch {
                            position,
                            customer_id: order.customer_id,
                            registered: customer.coordinates,
                            ordered: order.customer_location,
                        })
                    }
                    Some(_) => {}
                }
            }

            if !products.is_empty() {
                for product in order.product_list.keys() {
                    if !products.contains(product.as_str()) {
                        warnings.push(DatasetWarning::UnknownProduct {
                            position,
                            product: product.clone(),
                        });
                    }
                }
            }

            if !on_map(order.customer_location) {
                warnings.push(DatasetWarning::OrderOutsideMap {
                    position,
                    location: order.customer_location,
                });
            }
        }

        warnings
    }
}

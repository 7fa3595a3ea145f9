//! Fatal run errors.

use std::fmt;

/// Which kind of record carried a bad coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Warehouse,
    Order,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Warehouse => write!(f, "warehouse"),
            Entity::Order => write!(f, "order"),
        }
    }
}

/// Input that cannot be scheduled at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    NoWarehouses,
    NoOrders,
    NoDroneTypes,
    /// `index` is 0-based into the offending list.
    NonFiniteCoordinate { entity: Entity, index: usize },
    NonFiniteDroneType { index: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NoWarehouses => write!(f, "warehouse list is empty"),
            InvalidInput::NoOrders => write!(f, "order list is empty"),
            InvalidInput::NoDroneTypes => write!(f, "drone type catalog is empty"),
            InvalidInput::NonFiniteCoordinate { entity, index } => {
                write!(f, "{} {} has a non-finite coordinate", entity, index)
            }
            InvalidInput::NonFiniteDroneType { index } => {
                write!(f, "drone type {} has a non-finite capacity or consumption", index)
            }
        }
    }
}

/// Errors that abort a dispatch run before any order is processed.
///
/// Per-order drone shortages are not errors; they end up in
/// [`DispatchReport::dropped`](crate::scheduler::DispatchReport::dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    InvalidInput(InvalidInput),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<InvalidInput> for DispatchError {
    fn from(reason: InvalidInput) -> Self {
        DispatchError::InvalidInput(reason)
    }
}

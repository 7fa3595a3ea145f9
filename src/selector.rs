//! Nearest-warehouse selection.

use crate::error::{DispatchError, InvalidInput};
use crate::geometry::{distance, Point};
use crate::model::Warehouse;

/// Index of the warehouse closest to `customer_location`.
///
/// Ties go to the lowest index.
pub fn nearest_warehouse(
    customer_location: Point,
    warehouses: &[Warehouse],
) -> Result<usize, DispatchError> {
    let (first, rest) = warehouses
        .split_first()
        .ok_or(InvalidInput::NoWarehouses)?;

    let mut closest = 0;
    let mut shortest = distance(customer_location, first.location);

    for (offset, warehouse) in rest.iter().enumerate() {
        let candidate = distance(customer_location, warehouse.location);
        if candidate < shortest {
            shortest = candidate;
            closest = offset + 1;
        }
    }

    Ok(closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouses(points: &[(f64, f64)]) -> Vec<Warehouse> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Warehouse::new(format!("w{}", i), x, y))
            .collect()
    }

    #[test]
    fn test_picks_closest() {
        let list = warehouses(&[(100.0, 100.0), (200.0, 200.0)]);
        assert_eq!(nearest_warehouse(Point::new(10.0, 10.0), &list), Ok(0));
        assert_eq!(nearest_warehouse(Point::new(213.0, 187.0), &list), Ok(1));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let list = warehouses(&[(5.0, 0.0), (-5.0, 0.0), (0.0, 5.0)]);
        assert_eq!(nearest_warehouse(Point::new(0.0, 0.0), &list), Ok(0));

        let list = warehouses(&[(50.0, 50.0), (0.0, 5.0), (5.0, 0.0)]);
        assert_eq!(nearest_warehouse(Point::new(0.0, 0.0), &list), Ok(1));
    }

    #[test]
    fn test_no_other_warehouse_strictly_closer() {
        let list = warehouses(&[(3.0, 9.0), (-4.0, 1.0), (8.0, -2.0), (0.5, 0.5), (12.0, 12.0)]);
        let customers = [(0.0, 0.0), (10.0, 10.0), (-5.0, 2.0), (7.0, -1.0)];

        for (x, y) in customers {
            let customer = Point::new(x, y);
            let chosen = nearest_warehouse(customer, &list).expect("non-empty list");
            let best = distance(customer, list[chosen].location);
            for warehouse in &list {
                assert!(distance(customer, warehouse.location) >= best);
            }
        }
    }

    #[test]
    fn test_single_warehouse() {
        let list = warehouses(&[(1000.0, -1000.0)]);
        assert_eq!(nearest_warehouse(Point::new(0.0, 0.0), &list), Ok(0));
    }

    #[test]
    fn test_empty_list_is_invalid_input() {
        assert_eq!(
            nearest_warehouse(Point::new(0.0, 0.0), &[]),
            Err(DispatchError::InvalidInput(InvalidInput::NoWarehouses))
        );
    }
}

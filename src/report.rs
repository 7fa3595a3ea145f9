//! Human-readable rendering of dispatch results.

use std::fmt;

use crate::scheduler::{DispatchReport, DropReason, DroppedOrder, RunResult};

/// Final totals, one per line.
pub struct Summary<'a>(pub &'a RunResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Total delivery time: {}", result.total_delivery_time)?;
        writeln!(f, "Total orders processed: {}", result.total_orders_processed)?;
        writeln!(f, "Total drones used: {}", result.total_drones_used)?;

        let average = result.average_delivery_time_per_order();
        if average.is_nan() {
            write!(f, "Average delivery time per order: undefined")
        } else {
            write!(f, "Average delivery time per order: {}", average)
        }
    }
}

impl fmt::Display for DroppedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DropReason::NoSuitableDroneType => write!(
                f,
                "No drone with enough battery for order {} (customer {}, {} minutes)",
                self.position, self.customer_id, self.trip_minutes
            ),
        }
    }
}

/// Dropped-order diagnostics followed by the summary.
pub fn render(report: &DispatchReport) -> String {
    let mut out = String::new();
    for dropped in &report.dropped {
        out.push_str(&dropped.to_string());
        out.push('\n');
    }
    out.push_str(&Summary(&report.result).to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let result = RunResult {
            total_delivery_time: 282.0,
            total_orders_processed: 3,
            total_drones_used: 3,
        };
        assert_eq!(
            Summary(&result).to_string(),
            "Total delivery time: 282\n\
             Total orders processed: 3\n\
             Total drones used: 3\n\
             Average delivery time per order: 94"
        );
    }

    #[test]
    fn test_summary_without_processed_orders() {
        let result = RunResult {
            total_delivery_time: 0.0,
            total_orders_processed: 0,
            total_drones_used: 0,
        };
        assert!(Summary(&result)
            .to_string()
            .ends_with("Average delivery time per order: undefined"));
    }

    #[test]
    fn test_dropped_order_message() {
        let dropped = DroppedOrder {
            position: 2,
            customer_id: 5,
            trip_minutes: 50.0,
            reason: DropReason::NoSuitableDroneType,
        };
        assert_eq!(
            dropped.to_string(),
            "No drone with enough battery for order 2 (customer 5, 50 minutes)"
        );
    }
}

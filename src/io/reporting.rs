// src/io/reporting.rs

use crate::analysis::eoq::CostCurveSample;
use crate::simulation::engine::SimulationTrace;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// One CSV row of the simulation trace. The placed/received flags carry the
/// chart-marker days alongside the inventory series so a plotting tool can
/// draw everything from a single file.
#[derive(Debug, Clone, Serialize)]
struct TraceRow {
    day: u32,
    inventory: f64,
    order_placed: bool,
    order_received: bool,
}

/// Writes the sampled cost curve to a CSV file.
///
/// Columns: quantity, total_cost. Values are written at full precision;
/// rounding is left to whatever renders the file.
pub fn write_cost_curve(file_path: &str, curve: &[CostCurveSample]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(Path::new(file_path))?;

    for sample in curve {
        wtr.serialize(sample)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the day-by-day simulation trace to a CSV file.
pub fn write_trace_log(file_path: &str, trace: &SimulationTrace) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(Path::new(file_path))?;

    for point in &trace.points {
        wtr.serialize(TraceRow {
            day: point.day,
            inventory: point.inventory,
            order_placed: trace.orders_placed.contains(&point.day),
            order_received: trace.orders_received.contains(&point.day),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

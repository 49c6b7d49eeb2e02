// src/model/params.rs

use crate::error::{PlannerError, PlannerResult};

/// The immutable input record for one planning run.
///
/// D, S and H must be strictly positive; lead time and safety stock may be
/// zero. All values are full-precision f64; rounding is a display concern.
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    /// Annual demand in units per year (D).
    pub annual_demand: f64,
    /// Fixed cost per order placed (S).
    pub order_cost: f64,
    /// Cost to hold one unit for one year (H).
    pub holding_cost: f64,
    /// Delay between placing an order and receiving it, in days. May be fractional.
    pub lead_time_days: f64,
    /// Buffer stock held on top of the cycle stock.
    pub safety_stock: f64,
}

impl Default for Parameters {
    /// Reference scenario from the planning worksheet.
    fn default() -> Self {
        Self {
            annual_demand: 1200.0,
            order_cost: 75_000.0,
            holding_cost: 2500.0,
            lead_time_days: 7.0,
            safety_stock: 0.0,
        }
    }
}

impl Parameters {
    /// Checks every parameter against its domain.
    ///
    /// Rejects non-positive or non-finite D/S/H and negative or non-finite
    /// lead time / safety stock. Callers gate the whole computation on this,
    /// so downstream code never divides by zero.
    pub fn validate(&self) -> PlannerResult<()> {
        check_positive("annual_demand", self.annual_demand)?;
        check_positive("order_cost", self.order_cost)?;
        check_positive("holding_cost", self.holding_cost)?;
        check_non_negative("lead_time_days", self.lead_time_days)?;
        check_non_negative("safety_stock", self.safety_stock)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> PlannerResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidParameter { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> PlannerResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidParameter { name, value })
    }
}

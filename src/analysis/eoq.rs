// src/analysis/eoq.rs

//! Closed-form EOQ math.
//!
//! The pure formulas: optimal order quantity, annual total-cost function,
//! reorder point, and the sampled cost curve used for charting. Everything
//! is f64 end to end; nothing here rounds for display.

use crate::error::{PlannerError, PlannerResult};
use serde::Serialize;

/// One point on the sampled total-cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostCurveSample {
    /// Integer order quantity, always >= 1.
    pub quantity: u64,
    /// Annual ordering + holding cost at that quantity.
    pub total_cost: f64,
}

/// Calculates the Economic Order Quantity.
///
/// # Formula
/// EOQ = sqrt(2 * D * S / H)
///
/// Where:
/// - D = annual demand (units/year)
/// - S = ordering cost per order
/// - H = holding cost per unit per year
///
/// Every input must be strictly positive and finite; anything else is an
/// `InvalidParameter` error rather than a silent NaN.
pub fn compute_eoq(annual_demand: f64, order_cost: f64, holding_cost: f64) -> PlannerResult<f64> {
    require_positive("annual_demand", annual_demand)?;
    require_positive("order_cost", order_cost)?;
    require_positive("holding_cost", holding_cost)?;

    Ok(((2.0 * annual_demand * order_cost) / holding_cost).sqrt())
}

/// Annual total cost at order quantity Q.
///
/// # Formula
/// TC(Q) = (D/Q) * S + (Q/2) * H
///
/// Ordering cost falls with Q, holding cost rises with Q; the curve is
/// convex with its minimum at the EOQ. Q must be nonzero; the curve
/// sampler guarantees that by construction.
pub fn total_cost(annual_demand: f64, order_cost: f64, holding_cost: f64, quantity: f64) -> f64 {
    (annual_demand / quantity) * order_cost + (quantity / 2.0) * holding_cost
}

/// The total cost at the exact (real-valued) EOQ.
///
/// Closed form: TC(EOQ) = sqrt(2 * D * S * H).
pub fn minimum_total_cost(annual_demand: f64, order_cost: f64, holding_cost: f64) -> f64 {
    (2.0 * annual_demand * order_cost * holding_cost).sqrt()
}

/// Inventory level that triggers a replenishment order.
///
/// # Formula
/// ROP = daily demand * lead time + safety stock
///
/// With deterministic demand the daily rate is simply D / days-per-year.
pub fn reorder_point(
    annual_demand: f64,
    lead_time_days: f64,
    safety_stock: f64,
    days_per_year: f64,
) -> f64 {
    (annual_demand / days_per_year) * lead_time_days + safety_stock
}

/// Samples TC(Q) over the integer quantity window around the EOQ.
///
/// The domain is [max(1, floor(0.5 * EOQ)), ceil(2 * EOQ)], wide enough to
/// show the curve's shape on both sides of the optimum while excluding Q=0.
/// An empty domain (possible only with a degenerate EOQ) is reported as
/// `EmptyDomain` so the caller can warn instead of drawing a chart.
pub fn sample_cost_curve(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
    eoq: f64,
) -> PlannerResult<Vec<CostCurveSample>> {
    if !eoq.is_finite() || eoq <= 0.0 {
        return Err(PlannerError::EmptyDomain { eoq });
    }

    let low = ((0.5 * eoq).floor() as u64).max(1);
    let high = (2.0 * eoq).ceil() as u64;

    if low > high {
        return Err(PlannerError::EmptyDomain { eoq });
    }

    let curve = (low..=high)
        .map(|quantity| CostCurveSample {
            quantity,
            total_cost: total_cost(annual_demand, order_cost, holding_cost, quantity as f64),
        })
        .collect();

    Ok(curve)
}

fn require_positive(name: &'static str, value: f64) -> PlannerResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidParameter { name, value })
    }
}

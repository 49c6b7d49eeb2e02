// src/analysis/report.rs

use crate::analysis::eoq::{compute_eoq, minimum_total_cost, sample_cost_curve, CostCurveSample};
use crate::error::PlannerResult;
use crate::model::params::Parameters;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{ReplenishmentSimulation, SimulationTrace};

/// Everything one planning run produces. The presentation layer picks which
/// parts to show; it never recomputes any of them.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub eoq: f64,
    pub minimum_cost: f64,
    pub daily_demand: f64,
    pub reorder_level: f64,
    pub cost_curve: Vec<CostCurveSample>,
    pub trace: SimulationTrace,
}

/// Runs the full pipeline: validation, EOQ, cost curve, simulation.
///
/// All-or-nothing: either every output in the report is produced, or the
/// first failure comes back as an error and nothing is. There are no
/// partial results to render.
pub fn run_analysis(params: &Parameters, config: &SimulationConfig) -> PlannerResult<AnalysisReport> {
    params.validate()?;

    let eoq = compute_eoq(params.annual_demand, params.order_cost, params.holding_cost)?;
    let cost_curve = sample_cost_curve(
        params.annual_demand,
        params.order_cost,
        params.holding_cost,
        eoq,
    )?;

    let sim = ReplenishmentSimulation::new(params, eoq, config.clone());
    let daily_demand = sim.daily_demand();
    let reorder_level = sim.reorder_level();
    let trace = sim.run();

    Ok(AnalysisReport {
        eoq,
        minimum_cost: minimum_total_cost(
            params.annual_demand,
            params.order_cost,
            params.holding_cost,
        ),
        daily_demand,
        reorder_level,
        cost_curve,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::eoq::reorder_point;
    use crate::error::PlannerError;

    #[test]
    fn reference_scenario_produces_all_outputs() {
        let report = run_analysis(&Parameters::default(), &SimulationConfig::default()).unwrap();

        assert!((report.eoq - 268.328_157_299_974_76).abs() < 1e-9);
        assert!((report.daily_demand - 3.287_671_232_876_712).abs() < 1e-9);
        assert!((report.reorder_level - 23.013_698_630_136_986).abs() < 1e-9);
        assert!(!report.cost_curve.is_empty());
        assert_eq!(report.trace.points.len(), 91);
    }

    #[test]
    fn invalid_parameters_yield_no_outputs() {
        let params = Parameters {
            holding_cost: 0.0,
            ..Parameters::default()
        };
        let result = run_analysis(&params, &SimulationConfig::default());
        assert!(matches!(
            result,
            Err(PlannerError::InvalidParameter {
                name: "holding_cost",
                ..
            })
        ));
    }

    #[test]
    fn reorder_level_uses_safety_stock() {
        let params = Parameters {
            safety_stock: 10.0,
            ..Parameters::default()
        };
        let report = run_analysis(&params, &SimulationConfig::default()).unwrap();
        let expected = reorder_point(1200.0, 7.0, 10.0, 365.0);
        assert!((report.reorder_level - expected).abs() < 1e-12);
    }
}

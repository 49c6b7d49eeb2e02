// src/simulation/config.rs

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of simulated days after day 0.
    pub horizon_days: u32,
    /// Divisor turning annual demand into a daily rate.
    pub days_per_year: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_days: 90,
            days_per_year: 365.0,
        }
    }
}

mod analysis;
mod error;
mod io;
mod model;
mod simulation;

use crate::analysis::report::run_analysis;
use crate::io::reporting;
use crate::model::params::Parameters;
use crate::simulation::config::SimulationConfig;

fn main() {
    println!("=== EOQ / Reorder-Point Planner ===");

    // 1. SETUP PARAMETERS
    // Reference scenario: D=1200 units/year, S=75,000 per order,
    // H=2,500 per unit per year, 7-day lead time, no safety stock.
    let params = Parameters::default();

    // Textbook scenario (EOQ ~= 223.61) for comparison:
    // let params = Parameters {
    //     annual_demand: 1000.0,
    //     order_cost: 50.0,
    //     holding_cost: 2.0,
    //     lead_time_days: 7.0,
    //     safety_stock: 0.0,
    // };

    let config = SimulationConfig::default();

    // 2. RUN THE FULL ANALYSIS
    // Validation, EOQ, cost curve and simulation happen together; a bad
    // parameter means none of the outputs exist.
    let report = match run_analysis(&params, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Cannot compute: {}", e);
            std::process::exit(1);
        }
    };

    // 3. PRINT THE HEADLINE NUMBERS
    println!("\n=== Optimal Policy ===");
    println!("EOQ:                {:.2} units per order", report.eoq);
    println!("Minimum total cost: {:.2} per year", report.minimum_cost);
    println!("Daily demand:       {:.3} units/day", report.daily_demand);
    println!("Reorder point:      {:.2} units", report.reorder_level);

    // 4. PRINT THE SIMULATION EVENTS
    println!(
        "\n=== {}-Day Simulation ===",
        config.horizon_days
    );
    for day in &report.trace.orders_placed {
        println!("Day {}: order placed ({:.2} units)", day, report.eoq);
    }
    for day in &report.trace.orders_received {
        println!("Day {}: order received", day);
    }
    if let Some(last) = report.trace.points.last() {
        println!("Closing inventory on day {}: {:.2} units", last.day, last.inventory);
    }

    // 5. EXPORT RESULTS
    let curve_file = "cost_curve.csv";
    match reporting::write_cost_curve(curve_file, &report.cost_curve) {
        Ok(_) => println!("\nCost curve written to ./{}", curve_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    let trace_file = "simulation_trace.csv";
    match reporting::write_trace_log(trace_file, &report.trace) {
        Ok(_) => println!("Simulation trace written to ./{}", trace_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    println!("\nDone.");
}

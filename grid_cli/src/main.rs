//! # Gridline CLI Application
//!
//! Terminal interface for distribution-network calculations. Prompts for
//! the voltage drop and pole loading parameters on stdin and prints a
//! formatted compliance report.

use std::io::{self, BufRead, Write};

use grid_core::calculations::mechanical_stress;
use grid_core::calculations::voltage_drop;
use grid_core::calculations::{MechanicalStressInput, VoltageDropInput};
use grid_core::conductors::ConductorType;
use grid_core::standards::VoltageLevel;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Gridline CLI - Distribution Network Calculator");
    println!("==============================================");
    println!();

    let current_a = prompt_f64("Load current (A) [100.0]: ", 100.0);
    let length_m = prompt_f64("Run length (m) [500.0]: ", 500.0);
    let cross_section_mm2 = prompt_f64("Cross-section (mm2) [50.0]: ", 50.0);
    let power_factor = prompt_f64("Power factor [0.92]: ", 0.92);

    println!();
    println!("Calculating 3-phase CA run at 220 V (BT)...");
    println!();

    let drop_input = VoltageDropInput {
        label: "CLI-Demo".to_string(),
        current_a,
        length_m,
        conductor_type: ConductorType::Ca,
        cross_section_mm2,
        power_factor,
        phases: 3,
        nominal_voltage_v: 220.0,
        voltage_level: VoltageLevel::Bt,
    };

    match voltage_drop::calculate(&drop_input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  VOLTAGE DROP RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Conductor:");
            println!("  R = {:.3} Ω/km, X = {:.3} Ω/km", result.resistance_ohm_km, result.reactance_ohm_km);
            println!();
            println!("Drop:");
            println!("  ΔV  = {:.2} V", result.drop_v);
            println!("  ΔV% = {:.2} % (limit {:.1} %, {})", result.drop_pct, result.limit_pct, result.standard);
            println!();
            if result.compliant {
                println!("  RESULT: COMPLIANT");
            } else {
                println!("  RESULT: NOT COMPLIANT - increase section or split the run");
            }
        }
        Err(e) => {
            eprintln!("Calculation failed: {}", e);
            std::process::exit(1);
        }
    }

    println!();
    let wind_speed_m_s = prompt_f64("Design wind speed (m/s) [25.0]: ", 25.0);
    let span_length_m = prompt_f64("Wind span (m) [60.0]: ", 60.0);

    let stress_input = MechanicalStressInput {
        label: "CLI-Demo".to_string(),
        wind_speed_m_s,
        conductor_diameter_mm: 14.4,
        span_length_m,
        conductor_weight_kg_km: 407.0,
        conductor_tension_n: 5000.0,
        pole_height_m: 11.0,
        attachment_height_m: 10.0,
        num_conductors: 3,
    };

    match mechanical_stress::calculate(&stress_input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  POLE LOADING RESULTS ({})", result.standard);
            println!("═══════════════════════════════════════");
            println!();
            println!("Per conductor:");
            println!("  Wind   = {:.1} N", result.wind_load_per_conductor_n);
            println!("  Weight = {:.1} N", result.weight_load_per_conductor_n);
            println!("  Pull   = {:.1} N", result.tension_load_n);
            println!();
            println!("Pole:");
            println!("  Resultant = {:.1} N", result.total_resultant_n);
            println!("  M(base)   = {:.1} N·m", result.moment_nm);
            println!("  Required safety factor: {:.1}", result.safety_factor_required);
        }
        Err(e) => {
            eprintln!("Calculation failed: {}", e);
            std::process::exit(1);
        }
    }
}

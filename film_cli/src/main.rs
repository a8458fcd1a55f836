//! # FilmCalc CLI Application
//!
//! Terminal interface for the film roll calculation engine. Collects
//! raw text input, parses it to numbers (blank or unparseable fields
//! become "no value"), and renders whatever the engine returns. All the
//! numeric policy lives in `film_core`; this binary is presentation.

use std::io::{self, BufRead, Write};

use film_core::calculations::length::{calculate, LengthInput};
use film_core::calculations::slitting::{plan, SlitInput};
use film_core::materials::FilmMaterial;

/// Read a line for `prompt`; blank or unparseable input becomes `None`.
///
/// The engine treats `None` as "field not filled in", so a parse
/// failure collapses to the same neutral state as an empty field.
fn prompt_opt_f64(prompt: &str) -> Option<f64> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    input.trim().parse().ok()
}

/// Like `prompt_opt_f64`, but falls back to a default on blank input.
fn prompt_f64_default(prompt: &str, default: f64) -> f64 {
    prompt_opt_f64(prompt).unwrap_or(default)
}

/// Interpret a yes/no answer; anything but an explicit yes is no.
fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

fn prompt_yes_no(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return false;
    }
    parse_yes_no(&input)
}

fn prompt_material() -> FilmMaterial {
    let codes: Vec<&str> = FilmMaterial::ALL.iter().map(|m| m.code()).collect();
    print!("Material [{}] (default BOPP): ", codes.join("/"));
    if io::stdout().flush().is_err() {
        return FilmMaterial::default();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return FilmMaterial::default();
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return FilmMaterial::default();
    }

    match FilmMaterial::from_str_flexible(trimmed) {
        Ok(material) => material,
        Err(e) => {
            eprintln!("{} - using BOPP", e);
            FilmMaterial::default()
        }
    }
}

/// Thickness selection constrained to the material's catalog.
///
/// A selection that is not in the new material's list falls back to its
/// first gauge - the same reconciliation a material switch triggers.
fn prompt_thickness(material: FilmMaterial) -> f64 {
    let gauges = material.allowed_thicknesses_microns();
    let listed: Vec<String> = gauges.iter().map(|t| format!("{}", t)).collect();
    let default = material.default_thickness_microns();

    let selected = prompt_f64_default(
        &format!("Thickness µm [{}] (default {}): ", listed.join("/"), default),
        default,
    );

    if material.is_thickness_allowed(selected) {
        selected
    } else {
        eprintln!(
            "{} µm is not available for {} - using {} µm",
            selected, material, default
        );
        default
    }
}

fn main() {
    println!("FilmCalc CLI - Film Roll Calculator");
    println!("===================================");
    println!();

    let material = prompt_material();
    let thickness = prompt_thickness(material);
    let width_mm = prompt_opt_f64("Roll width (mm): ");
    let weight_kg = prompt_opt_f64("Roll weight (kg): ");

    let input = LengthInput {
        material,
        thickness_microns: Some(thickness),
        width_mm,
        weight_kg,
    };

    let length = match calculate(&input) {
        Ok(Some(result)) => result,
        Ok(None) => {
            println!();
            println!("Enter a nonzero width and weight to see a result.");
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  ROLL LENGTH");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Material:  {}", length.material);
    println!("  Density:   {} g/cm³", length.density_g_cm3);
    println!("  Thickness: {} µm", thickness);
    println!("  Length:    {:.0} m", length.length_meters);
    println!();
    print_json(&length);
    println!();

    // Slitting simulation, seeded from the main roll but editable.
    if !prompt_yes_no("Plan slitting? (y/n): ") {
        return;
    }

    let mother_width = width_mm.map(|w| prompt_f64_default(
        &format!("Mother roll width (mm) [{}]: ", w),
        w,
    ));
    let mother_weight = weight_kg.map(|m| prompt_f64_default(
        &format!("Mother roll weight (kg) [{}]: ", m),
        m,
    ));
    let target_width = prompt_opt_f64("Daughter roll width (mm): ");
    let order_weight = prompt_opt_f64("Order weight (kg, blank for geometry only): ");

    let slit_input = SlitInput {
        mother_width_mm: mother_width,
        mother_weight_kg: mother_weight,
        target_width_mm: target_width,
        thickness_microns: thickness,
        density_g_cm3: length.density_g_cm3,
        target_order_weight_kg: order_weight,
    };

    match plan(&slit_input) {
        Ok(Some(result)) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  SLITTING PLAN");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Cuts:       {}", result.cut_count);
            println!(
                "  Trim waste: {:.1} mm {}",
                result.trim_waste_mm,
                if result.is_exact_fit { "(exact fit)" } else { "" }
            );
            if result.cut_count == 0 {
                println!();
                println!("  Cut width exceeds the mother roll width.");
            }
            if let Some(production) = &result.production {
                println!();
                println!("  Meters to run:       {:.1} m", production.meters_to_run);
                println!("  Weight per roll:     {:.2} kg", production.weight_per_roll_kg);
                println!("  Mother consumption:  {:.2} kg", production.mother_consumption_kg);
                println!("  Mother remaining:    {:.2} kg", production.mother_remaining_kg);
                if !production.is_feasible() {
                    println!();
                    println!("  WARNING: order exceeds the mother roll's material.");
                }
            }
            println!();
            print_json(&result);
        }
        Ok(None) => {
            println!();
            println!("Enter nonzero mother roll and cut width values to plan slitting.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!("{}", json);
    }
}

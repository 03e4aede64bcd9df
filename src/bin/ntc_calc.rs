//! NTC Thermistor Design Calculator
//!
//! Runs on your PC and evaluates the driver's conversion math, so divider
//! and calibration values can be worked out before touching hardware.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --features std --bin ntc_calc -- <command> [args...]
//! ```
//!
//! ## Commands
//!
//! - `beta <t1> <r1> <t2> <r2>` - Beta value from two measured points
//! - `steinhart <t1> <r1> <t2> <r2> <t3> <r3>` - Fit Steinhart-Hart coefficients
//! - `series <r25> <tmin> <tmax>` - Optimal series resistor for a range
//! - `temp <ohms> [r25] [beta]` - Resistance to temperature (beta model)
//! - `resistance <celsius> [r25] [beta]` - Temperature to resistance (beta model)
//! - `accuracy <ohms> <r_tol> <beta_tol>` - Rough accuracy estimate
//! - `table [part]` - Dump a compiled-in lookup table
//! - `help` - Show help
//!
//! ## Examples
//!
//! ```bash
//! ntc_calc beta 25 10000 85 1451        # ~3435 K
//! ntc_calc temp 4700                    # ~46 C for a 10k / 3435 part
//! ntc_calc series 10000 0 100           # divider resistor for 0-100 C
//! ntc_calc table NTCG163JFT103FT1S
//! ```

use std::error::Error;

use ntc::domain::config::defaults;
use ntc::domain::conversion::{
    beta_resistance_to_temperature, beta_temperature_to_resistance, calculate_beta_value,
    calculate_optimal_series_resistance, calculate_steinhart_hart_coefficients,
    calculate_temperature_accuracy, thermistor_voltage_from_resistance,
};
use ntc::domain::lookup_table_for;
use ntc::domain::units::celsius_to_fahrenheit;
use ntc::NtcType;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "beta" => {
            let [t1, r1, t2, r2] = numbers::<4>(rest)?;
            let beta = calculate_beta_value(t1, r1, t2, r2)?;
            println!("beta = {:.1} K", beta);
        }
        "steinhart" => {
            let [t1, r1, t2, r2, t3, r3] = numbers::<6>(rest)?;
            let coeffs = calculate_steinhart_hart_coefficients([(t1, r1), (t2, r2), (t3, r3)])?;
            println!("A = {:.6e}", coeffs.a);
            println!("B = {:.6e}", coeffs.b);
            println!("C = {:.6e}", coeffs.c);
        }
        "series" => {
            let [r25, tmin, tmax] = numbers::<3>(rest)?;
            let series = calculate_optimal_series_resistance(r25, tmin, tmax)?;
            println!("series resistor = {:.0} ohm", series);
        }
        "temp" => {
            let (value, r25, beta) = value_with_part(rest)?;
            let celsius = beta_resistance_to_temperature(value, r25, beta)?;
            println!("{:.2} C / {:.2} F", celsius, celsius_to_fahrenheit(celsius));
        }
        "resistance" => {
            let (value, r25, beta) = value_with_part(rest)?;
            let ohms = beta_temperature_to_resistance(value, r25, beta)?;
            let volts = thermistor_voltage_from_resistance(
                ohms,
                defaults::REFERENCE_VOLTAGE,
                defaults::SERIES_RESISTANCE,
            )?;
            println!(
                "{:.1} ohm ({:.3} V in a {:.0} ohm / {:.1} V divider)",
                ohms,
                volts,
                defaults::SERIES_RESISTANCE,
                defaults::REFERENCE_VOLTAGE
            );
        }
        "accuracy" => {
            let [ohms, r_tol, beta_tol] = numbers::<3>(rest)?;
            let accuracy = calculate_temperature_accuracy(ohms, r_tol, beta_tol)?;
            println!("accuracy ~ +/-{:.2} C", accuracy);
        }
        "table" => {
            let name = rest.first().map(String::as_str).unwrap_or("NTCG163JFT103FT1S");
            print_table(name)?;
        }
        "help" | "--help" | "-h" => print_help(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
            return Err(format!("unknown command '{}'", other).into());
        }
    }

    Ok(())
}

/// Parse exactly `N` numeric arguments
fn numbers<const N: usize>(args: &[String]) -> Result<[f32; N], Box<dyn Error>> {
    if args.len() != N {
        return Err(format!("expected {} numbers, got {}", N, args.len()).into());
    }

    let mut out = [0.0f32; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| format!("'{}' is not a number", arg))?;
    }
    Ok(out)
}

/// `<value> [r25] [beta]`, defaulting to the 10k / 3435 part
fn value_with_part(args: &[String]) -> Result<(f32, f32, f32), Box<dyn Error>> {
    let parse = |s: &String| -> Result<f32, Box<dyn Error>> {
        s.parse().map_err(|_| format!("'{}' is not a number", s).into())
    };

    match args {
        [value] => Ok((parse(value)?, defaults::RESISTANCE_AT_25C, defaults::BETA_VALUE)),
        [value, r25] => Ok((parse(value)?, parse(r25)?, defaults::BETA_VALUE)),
        [value, r25, beta] => Ok((parse(value)?, parse(r25)?, parse(beta)?)),
        _ => Err("expected <value> [r25] [beta]".into()),
    }
}

fn print_table(name: &str) -> Result<(), Box<dyn Error>> {
    let ntc_type = NtcType::from_name(name).ok_or_else(|| format!("unknown part '{}'", name))?;
    let table = lookup_table_for(ntc_type)
        .ok_or_else(|| format!("no compiled-in table for {}", ntc_type.as_str()))?;

    let stats = table.stats();
    println!("{} ({} entries)", ntc_type.as_str(), stats.entry_count);
    println!(
        "  {:.1} C .. {:.1} C, {:.1} ohm .. {:.1} ohm",
        stats.min_temperature, stats.max_temperature, stats.min_resistance, stats.max_resistance
    );
    println!();
    println!("{:>8}  {:>12}", "C", "ohm");
    for entry in table.entries() {
        println!("{:>8.1}  {:>12.1}", entry.temperature_celsius, entry.resistance_ohms);
    }
    Ok(())
}

fn print_help() {
    println!("NTC thermistor design calculator");
    println!();
    println!("Commands:");
    println!("  beta <t1> <r1> <t2> <r2>                  Beta value from two points");
    println!("  steinhart <t1> <r1> <t2> <r2> <t3> <r3>   Fit Steinhart-Hart coefficients");
    println!("  series <r25> <tmin> <tmax>                Optimal series resistor");
    println!("  temp <ohms> [r25] [beta]                  Resistance to temperature");
    println!("  resistance <celsius> [r25] [beta]         Temperature to resistance");
    println!("  accuracy <ohms> <r_tol> <beta_tol>        Accuracy estimate (tolerances 0..1)");
    println!("  table [part]                              Dump a lookup table");
    println!("  help                                      Show this help");
    println!();
    println!("Temperatures in C, resistances in ohm. Defaults: r25 = {} ohm, beta = {} K",
        defaults::RESISTANCE_AT_25C, defaults::BETA_VALUE);
}

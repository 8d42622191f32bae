//! pincode: command-line interface for pincode-core
//!
//! Validate Indian pincodes and query the packaged reference table from a
//! terminal. Every subcommand prints a short human-readable summary, or the
//! full response as JSON with `--json`.
//!
//! Usage examples
//! --------------
//!
//! - Validate and resolve
//!   $ pincode validate 110001
//!   $ pincode details 560001
//!
//! - Shipping questions
//!   $ pincode cod 793001
//!   $ pincode delivery 282001 --courier FedEx
//!   $ pincode distance 400001 110001
//!   $ pincode nearby 110001 --radius 25
//!
//! - Listings
//!   $ pincode city bangalore
//!   $ pincode tier 2 --json
//!
//! Data source
//! -----------
//!
//! The table compiled into `pincode-core` is used unless `--data <path>` (or
//! `PINCODE_DATA`) points at another `.json`, `.json.gz`, `.bin` or `.bin.gz`
//! file. `pincode build in.json out.bin.gz` writes a snapshot for fast loads.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use pincode_core::{
    DeliveryResponse, LocationDetails, PincodeDb, PincodeSearch, PincodeValidator, Tier,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `value` as JSON, or hand it to `human` for the text rendering.
fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human(value);
    }
    Ok(())
}

fn location_line(d: &LocationDetails) -> String {
    match d.record() {
        None => format!(
            "{}  invalid: {}",
            d.pincode(),
            d.error().map(|e| e.to_string()).unwrap_or_default()
        ),
        Some(_) if d.is_approximate() => format!(
            "{}  unknown location, {} region (tier {})",
            d.pincode(),
            d.region().map(|r| r.to_string()).unwrap_or_default(),
            d.tier()
        ),
        Some(r) => format!(
            "{}  {}, {}  [{} / {}, tier {}{}]",
            d.pincode(),
            r.city,
            r.state,
            r.region,
            r.zone,
            r.tier,
            if r.is_metro { ", metro" } else { "" }
        ),
    }
}

fn print_locations(list: &[LocationDetails]) {
    if list.is_empty() {
        println!("No matches");
    }
    for d in list {
        println!("{}", location_line(d));
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // `build` works on files only; everything else needs a table.
    if let Commands::Build { input, output } = &args.command {
        let db = PincodeDb::load_from_path(input)
            .with_context(|| format!("loading {}", input.display()))?;
        db.save_as(output)
            .with_context(|| format!("writing {}", output.display()))?;
        println!("Wrote {} pincodes to {}", db.len(), output.display());
        return Ok(());
    }

    let validator = match &args.data {
        Some(path) => PincodeValidator::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PincodeValidator::new()?,
    };
    debug!(pincodes = validator.db().len(), "reference table ready");
    let json = args.json;

    match args.command {
        Commands::Validate { pincode } => {
            emit(json, &validator.is_valid_format(&pincode), |v| {
                match &v.error {
                    None => println!("{pincode}: valid"),
                    Some(e) => println!("{pincode}: invalid ({e})"),
                }
            })?;
        }

        Commands::Details { pincode } => {
            emit(json, &validator.get_location_details(&pincode), |d| {
                println!("{}", location_line(d));
                if let Some(states) = d.possible_states() {
                    println!("  possible states: {}", states.join(", "));
                }
                if let Some(c) = d.coordinates() {
                    println!("  coordinates: {:.4}, {:.4}", c.latitude, c.longitude);
                }
            })?;
        }

        Commands::Cod { pincode } => {
            emit(json, &validator.check_cod(&pincode), |c| {
                if c.cod_available {
                    println!(
                        "{}: COD available up to Rs {} (charge Rs {})",
                        c.pincode,
                        c.max_cod_amount,
                        c.cod_charges.unwrap_or_default()
                    );
                } else {
                    println!(
                        "{}: COD unavailable ({})",
                        c.pincode,
                        c.reason.as_deref().unwrap_or("-")
                    );
                }
            })?;
        }

        Commands::Couriers { pincode } => {
            emit(json, &validator.get_courier_services(&pincode), |c| {
                println!(
                    "{}: {} service, {} day(s), express {}",
                    c.pincode,
                    c.service_level,
                    c.delivery_days,
                    if c.express_delivery { "yes" } else { "no" }
                );
                println!("  international: {}", c.international_couriers.join(", "));
                println!("  domestic: {}", c.domestic_couriers.join(", "));
            })?;
        }

        Commands::Delivery { pincode, courier } => {
            let answer = validator.check_delivery(&pincode, courier.as_deref());
            emit(json, &answer, |r| match r {
                DeliveryResponse::Any(a) if a.available => println!(
                    "{pincode}: deliverable in {} day(s) via {} (recommended {})",
                    a.delivery_days,
                    a.services.join(", "),
                    a.recommended_courier
                ),
                DeliveryResponse::Any(_) => println!("{pincode}: no courier services"),
                DeliveryResponse::Courier(c) if c.available => println!(
                    "{pincode}: {} delivers in {} day(s), about Rs {}",
                    c.courier,
                    c.delivery_days.unwrap_or_default(),
                    c.estimated_cost.unwrap_or_default()
                ),
                DeliveryResponse::Courier(c) => {
                    println!("{pincode}: {}", c.reason.as_deref().unwrap_or("unavailable"));
                    if !c.alternatives.is_empty() {
                        println!("  try: {}", c.alternatives.join(", "));
                    }
                }
            })?;
        }

        Commands::Bulk { pincodes } => {
            emit(json, &validator.validate_bulk(&pincodes), |results| {
                for r in results {
                    println!("{}", location_line(&r.details));
                }
            })?;
        }

        Commands::Distance { from, to } => {
            let estimate = validator.get_distance_estimate(&from, &to)?;
            emit(json, &estimate, |d| {
                println!("{} -> {}: {} km", from, to, d.distance_km);
                println!(
                    "  {} day(s), Rs {}, express {}, courier {}",
                    d.estimated_delivery_days,
                    d.estimated_shipping_cost,
                    if d.express_delivery_available { "yes" } else { "no" },
                    d.recommended_courier
                );
            })?;
        }

        Commands::Nearby { pincode, radius } => {
            emit(json, &validator.find_nearby_pincodes(&pincode, radius), |hits| {
                if hits.is_empty() {
                    println!("Nothing within {radius} km of {pincode}");
                }
                for h in hits {
                    println!(
                        "{:>7.1} km  {}  {}, {}",
                        h.distance_km, h.pincode, h.record.city, h.record.state
                    );
                }
            })?;
        }

        Commands::City { query } => {
            emit(json, &validator.search_by_city(&query), |l| print_locations(l))?;
        }

        Commands::State { query } => {
            emit(json, &validator.search_by_state(&query), |l| print_locations(l))?;
        }

        Commands::Metros => {
            emit(json, &validator.get_metro_cities(), |l| print_locations(l))?;
        }

        Commands::Tier { tier } => {
            let tier = Tier::try_from(tier)?;
            emit(json, &validator.get_tier_cities(tier), |l| print_locations(l))?;
        }

        Commands::Stats => {
            emit(json, &validator.db().stats(), |s| {
                println!("Reference table statistics:");
                println!("  Pincodes: {}", s.pincodes);
                println!("  Metros: {}", s.metros);
                println!("  With coordinates: {}", s.with_coordinates);
                println!("  Tier 1/2/3: {}/{}/{}", s.tier1, s.tier2, s.tier3);
            })?;
        }

        // Handled before the table is loaded.
        Commands::Build { .. } => {}
    }

    Ok(())
}

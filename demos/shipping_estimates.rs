//! Shipping estimates example for pincode-rs
//!
//! Walks through the checkout-style questions: can we deliver, who should
//! carry it, is COD on offer, and how long will it take.

use pincode_rs::prelude::*;
use pincode_rs::DeliveryResponse;

fn main() -> Result<()> {
    println!("=== pincode-rs Shipping Estimates Example ===\n");

    let warehouse = "400001"; // Mumbai
    let destinations = ["400070", "411001", "110001", "282001", "793001", "744101"];

    for dest in destinations {
        let d = get_distance(warehouse, dest)?;
        let cod = check_cod(dest);
        println!(
            "{warehouse} -> {dest} ({}): {} km, {} day(s), Rs {}, {}{}",
            d.to.city(),
            d.distance_km,
            d.estimated_delivery_days,
            d.estimated_shipping_cost,
            d.recommended_courier,
            if d.express_delivery_available { ", express" } else { "" }
        );
        match cod.reason {
            None => println!("    COD up to Rs {}", cod.max_cod_amount),
            Some(reason) => println!("    no COD: {reason}"),
        }
    }
    println!();

    // A specific courier, with fallbacks when it doesn't serve the pincode.
    println!("--- FedEx coverage ---");
    for dest in ["110001", "282001", "509001"] {
        match check_delivery(dest, Some("FedEx")) {
            DeliveryResponse::Courier(c) if c.available => println!(
                "{dest}: FedEx, {} day(s), Rs {}",
                c.delivery_days.unwrap_or_default(),
                c.estimated_cost.unwrap_or_default()
            ),
            DeliveryResponse::Courier(c) if c.alternatives.is_empty() => {
                println!("{dest}: no couriers at all")
            }
            DeliveryResponse::Courier(c) => {
                println!("{dest}: try {}", c.alternatives.join(" / "))
            }
            DeliveryResponse::Any(_) => {}
        }
    }
    println!();

    // Local pickup points around a store.
    println!("--- Within 30 km of 560001 ---");
    for hit in find_nearby_pincodes("560001", Some(30.0)) {
        println!("{:>5.1} km  {} {}", hit.distance_km, hit.pincode, hit.record.city);
    }

    Ok(())
}

//! Basic usage example for pincode-rs
//!
//! This example demonstrates how to:
//! - Validate pincodes given as text or integers
//! - Resolve a pincode to its location, exact or approximate
//! - Search the reference table by city, state and tier

use pincode_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== pincode-rs Basic Usage Example ===\n");

    let v = PincodeValidator::new()?;
    println!("✓ Reference table loaded: {} pincodes\n", v.db().len());

    // Example 1: Format validation
    println!("--- Example 1: Validate ---");
    for input in ["110001", "0110001", "12a456", ""] {
        let result = v.is_valid_format(input);
        println!("{input:>8?} -> {}", result.error.as_deref().unwrap_or("valid"));
    }
    // Integers work too, but lose any leading zero.
    println!("{:>8} -> {:?}\n", 560001, v.is_valid_format(560001).valid);

    // Example 2: Exact and approximate lookups
    println!("--- Example 2: Location details ---");
    let exact = v.get_location_details("400001");
    println!("400001: {}, {} (tier {})", exact.city(), exact.state(), exact.tier());
    let guess = v.get_location_details("799999");
    if let Some(states) = guess.possible_states() {
        println!("799999: not in table, could be one of {}", states.join(", "));
    }
    println!();

    // Example 3: Searches
    println!("--- Example 3: Search ---");
    for d in v.search_by_city("bangalore") {
        println!("{} {}", d.pincode(), d.city());
    }
    let tier2 = v.get_tier_cities(Tier::Two);
    println!("Tier 2 entries: {}", tier2.len());
    println!("Metro entries: {}", v.get_metro_cities().len());

    // Example 4: Same thing through the free functions
    println!("\n--- Example 4: Free functions ---");
    println!("{}", serde_json::to_string_pretty(&get_details(110001))?);

    Ok(())
}

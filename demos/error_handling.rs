//! Error handling example for pincode-rs
//!
//! Most queries never fail: bad input comes back inside the response. Only
//! table loading and the distance estimate return `Err`.

use pincode_rs::prelude::*;
use pincode_rs::Match;

fn main() -> Result<()> {
    println!("=== pincode-rs Error Handling Example ===\n");

    // Example 1: Loading a table from disk
    println!("--- Example 1: Loading a missing dataset ---");
    match PincodeValidator::from_path("does/not/exist.json") {
        Ok(_) => println!("unexpectedly loaded"),
        Err(PincodeError::NotFound(msg)) => println!("✗ {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    let v = PincodeValidator::new()?;

    // Example 2: Malformed input is reported, not raised
    println!("--- Example 2: Invalid pincodes in lookups ---");
    for input in ["", "11OOO1", "1234567", "012345"] {
        let details = v.get_location_details(input);
        match details.error() {
            Some(err) => println!("{input:?}: {err}"),
            None => println!("{input:?}: ok"),
        }
    }
    let cod = v.check_cod("12");
    println!(
        "COD for \"12\": available={}, reason={:?}, max={}",
        cod.cod_available, cod.reason, cod.max_cod_amount
    );
    println!();

    // Example 3: Matching on the resolved shape
    println!("--- Example 3: Exact, approximate, invalid ---");
    for input in ["110001", "999999", "000000"] {
        match v.get_location_details(input).into_result() {
            Ok(loc) if loc.matched == Match::Exact => println!("{input}: {}", loc.record.city),
            Ok(loc) => println!("{input}: somewhere in the {} region", loc.record.region),
            Err(invalid) => println!("{input}: rejected ({})", invalid.error),
        }
    }
    println!();

    // Example 4: The distance estimate fails hard
    println!("--- Example 4: Distance with a bad pincode ---");
    match v.get_distance_estimate("110001", "99") {
        Ok(d) => println!("{} km", d.distance_km),
        Err(PincodeError::InvalidPincode { pincode, reason }) => {
            println!("✗ {pincode}: {reason}")
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

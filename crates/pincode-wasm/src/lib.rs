//! pincode-wasm: WebAssembly bindings for pincode-core
//!
//! Exposes the pincode-core queries to JavaScript. The reference table is
//! compiled into the module, so there is nothing to fetch at start-up.
//!
//! What it provides
//! ----------------
//! - Initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Validation and lookup: `validate`, `get_details`, `validate_multiple`
//! - Shipping: `check_cod`, `get_couriers`, `check_delivery`, `get_distance`,
//!   `find_nearby_pincodes`
//! - Listings: `search_by_city`, `search_by_state`, `get_metro_cities`,
//!   `get_tier_cities`, `get_stats`
//!
//! Pincode arguments may be strings or integers; anything else is converted
//! to text and reported invalid rather than thrown. Results are plain JS
//! objects with the camelCase field names of the JSON API. Only
//! `get_distance` throws, on an invalid pincode.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { get_details, get_distance } from 'pincode-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(get_details('110001').city);      // "New Delhi"
//!   try {
//!     console.log(get_distance(400001, '793001').estimatedDeliveryDays);
//!   } catch (e) {
//!     console.error(e.message);                   // invalid pincode
//!   }
//! }
//! main();
//! ```

use pincode_core::functions::validator;
use pincode_core::geo::DEFAULT_NEARBY_RADIUS_KM;
use pincode_core::{PincodeSearch, Tier};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let stats = validator().db().stats();
    web_sys::console::log_1(&format!("pincode-wasm: {} pincodes loaded", stats.pincodes).into());
}

/* --------------------------------------------------------------------------
   Argument / result conversion
-------------------------------------------------------------------------- */

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    // json_compatible: objects instead of Maps, `null` for None.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Text form of any JS value, as `String(value)` would give it. Malformed
/// input is left for the validator to reject, so result-style exports
/// never throw on it.
fn pincode_arg(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        s
    } else if let Some(n) = value.as_f64() {
        n.to_string()
    } else if let Some(b) = value.as_bool() {
        b.to_string()
    } else if value.is_null() {
        "null".to_owned()
    } else if value.is_undefined() {
        "undefined".to_owned()
    } else {
        value.unchecked_ref::<js_sys::Object>().to_string().into()
    }
}

/* --------------------------------------------------------------------------
   Validation and lookup
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn validate(pincode: &JsValue) -> Result<JsValue, JsError> {
    to_js(&validator().is_valid_format(pincode_arg(pincode)))
}

#[wasm_bindgen]
pub fn get_details(pincode: &JsValue) -> Result<JsValue, JsError> {
    to_js(&validator().get_location_details(pincode_arg(pincode)))
}

/// Takes a JS array of pincodes.
#[wasm_bindgen]
pub fn validate_multiple(pincodes: js_sys::Array) -> Result<JsValue, JsError> {
    // Each element is coerced on its own; a bad one only affects its result.
    let inputs: Vec<String> = pincodes.iter().map(|p| pincode_arg(&p)).collect();
    to_js(&validator().validate_bulk(inputs))
}

/* --------------------------------------------------------------------------
   Shipping
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn check_cod(pincode: &JsValue) -> Result<JsValue, JsError> {
    to_js(&validator().check_cod(pincode_arg(pincode)))
}

#[wasm_bindgen]
pub fn get_couriers(pincode: &JsValue) -> Result<JsValue, JsError> {
    to_js(&validator().get_courier_services(pincode_arg(pincode)))
}

#[wasm_bindgen]
pub fn check_delivery(pincode: &JsValue, courier: Option<String>) -> Result<JsValue, JsError> {
    to_js(&validator().check_delivery(pincode_arg(pincode), courier.as_deref()))
}

/// Throws when either pincode is invalid.
#[wasm_bindgen]
pub fn get_distance(from: &JsValue, to: &JsValue) -> Result<JsValue, JsError> {
    let estimate = validator()
        .get_distance_estimate(pincode_arg(from), pincode_arg(to))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&estimate)
}

#[wasm_bindgen]
pub fn find_nearby_pincodes(pincode: &JsValue, radius_km: Option<f64>) -> Result<JsValue, JsError> {
    let radius = radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    to_js(&validator().find_nearby_pincodes(pincode_arg(pincode), radius))
}

/* --------------------------------------------------------------------------
   Listings
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search_by_city(query: &str) -> Result<JsValue, JsError> {
    to_js(&validator().search_by_city(query))
}

#[wasm_bindgen]
pub fn search_by_state(query: &str) -> Result<JsValue, JsError> {
    to_js(&validator().search_by_state(query))
}

#[wasm_bindgen]
pub fn get_metro_cities() -> Result<JsValue, JsError> {
    to_js(&validator().get_metro_cities())
}

#[wasm_bindgen]
pub fn get_tier_cities(tier: u8) -> Result<JsValue, JsError> {
    let tier = Tier::try_from(tier).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&validator().get_tier_cities(tier))
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    to_js(&validator().db().stats())
}

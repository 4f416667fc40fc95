//! Time value ROI calculator: a four-question flow whose monthly return is
//! shown on an animated split-flap display.

use wasm_bindgen::prelude::*;

pub mod calculator;
pub mod components;
pub mod config;
pub mod flip;
pub mod hooks;
pub mod utils;

pub use calculator::{
    compute_derived, sanitize_hours, CalculatorAction, Derived, FlowStage, Questionnaire,
};
pub use flip::{FlipBoard, FlipEvent, FlipFrame, FlipPlan};

/// JS-callable breakdown for host pages that only need the numbers.
///
/// `hours_js` is an array of at most four hours-per-week values; each is
/// clamped to the slider range and missing ones count as zero. Returns the
/// breakdown object
/// (`totalHours`, `monthlyHours`, `timeValue`, `subscriptionCost`,
/// `monthlyValue`) or an error string.
#[wasm_bindgen(js_name = roiBreakdown)]
pub fn roi_breakdown(hours_js: JsValue, hourly_rate: f64) -> JsValue {
    let raw: Vec<u32> = match serde_wasm_bindgen::from_value(hours_js) {
        Ok(h) => h,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize hours: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };
    let hours = match sanitize_hours(&raw) {
        Ok(h) => h,
        Err(e) => return serde_wasm_bindgen::to_value(&e).unwrap_or(JsValue::NULL),
    };
    let rate = if hourly_rate.is_finite() { hourly_rate.max(0.0) } else { 0.0 };

    let derived = compute_derived(&hours, rate);
    log::debug!("roiBreakdown({:?}, {}) -> {:?}", hours, rate, derived);
    serde_wasm_bindgen::to_value(&derived).unwrap_or(JsValue::NULL)
}

use super::*;
use rocket::serde::json::Json;
use serde_json::{json, Value};
use trainer_core::range::Range;

pub fn get_endpoints() -> Vec<rocket::route::Route> {
    routes![range_breakdown]
}

/// Expand a range spec and report its size. Situation authors use this to
/// check a range before committing it to a fixture.
#[get("/api/range?<spec>")]
fn range_breakdown(spec: Option<&str>) -> Json<Value> {
    match Range::parse(spec.unwrap_or_default()) {
        Ok(range) => Json(json!({
            "valid": true,
            "classes": range.class_count(),
            "combos": range.combo_count(),
        })),
        Err(e) => Json(json!({
            "valid": false,
            "error": e.to_string(),
        })),
    }
}

//! WASM bindings for timetable-engine.
//!
//! Exposes meeting conflict checks and timetable enumeration to the schedule
//! builder UI via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/timetable-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/timetable_engine_wasm.wasm
//! ```
//!
//! `wasm32-unknown-unknown` has no clock, so enumeration options may carry a
//! node budget (`max_nodes`) but not a wall-clock budget (`time_budget_ms`).

use serde::Serialize;
use timetable_engine::{
    conflicts, enumerate_with, find_meeting_conflicts, Catalog, EnumerateOptions, Enumeration,
    MeetingConflict, MeetingPattern, SearchOutcome, SearchStats,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct EnumerationDto<'a> {
    outcome: SearchOutcome,
    /// True only when every timetable was found; the UI must not claim
    /// "last timetable" otherwise.
    complete: bool,
    stats: SearchStats,
    timetables: Vec<Vec<&'a str>>,
}

impl<'a> From<&'a Enumeration> for EnumerationDto<'a> {
    fn from(e: &'a Enumeration) -> Self {
        Self {
            outcome: e.outcome,
            complete: e.is_complete(),
            stats: e.stats,
            timetables: e.timetables.iter().map(|t| t.section_ids()).collect(),
        }
    }
}

#[derive(Serialize)]
struct SectionConflictsDto<'a> {
    conflicts: bool,
    meetings: &'a [MeetingConflict],
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn parse_options(json: Option<String>) -> Result<EnumerateOptions, String> {
    let options: EnumerateOptions = match json.as_deref() {
        None | Some("") => EnumerateOptions::default(),
        Some(s) => serde_json::from_str(s).map_err(|e| e.to_string())?,
    };
    if options.time_budget.is_some() {
        return Err("time_budget_ms is not supported in WASM; use max_nodes".to_string());
    }
    Ok(options)
}

fn parse_meeting(json: &str) -> Result<MeetingPattern, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

fn enumerate_json(catalog_json: &str, options_json: Option<String>) -> Result<String, String> {
    let catalog = Catalog::from_json(catalog_json).map_err(|e| e.to_string())?;
    let groups = catalog.choice_groups().map_err(|e| e.to_string())?;
    let options = parse_options(options_json)?;
    let enumeration = enumerate_with(&groups, &options);
    serde_json::to_string(&EnumerationDto::from(&enumeration)).map_err(|e| e.to_string())
}

fn section_conflicts_json(
    catalog_json: &str,
    candidate_id: &str,
    selected_ids_json: &str,
) -> Result<String, String> {
    let catalog = Catalog::from_json(catalog_json).map_err(|e| e.to_string())?;
    let candidate = catalog.section(candidate_id).map_err(|e| e.to_string())?;
    let ids: Vec<String> = serde_json::from_str(selected_ids_json).map_err(|e| e.to_string())?;
    let selected = ids
        .iter()
        .filter(|id| id.as_str() != candidate_id)
        .map(|id| catalog.section(id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    let found = find_meeting_conflicts(&candidate, &selected);
    serde_json::to_string(&SectionConflictsDto {
        conflicts: !found.is_empty(),
        meetings: &found,
    })
    .map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Enumerate conflict-free timetables for a catalog.
///
/// # Arguments
/// - `catalog_json` -- catalog document (`{"courses": [...]}`) with per-course
///   `hidden` / `pinned` state
/// - `options_json` -- optional `{"cap": n, "max_nodes": n}`
///
/// Returns `{"outcome", "complete", "stats", "timetables": [[sectionId, ...], ...]}`.
#[wasm_bindgen(js_name = "enumerateTimetables")]
pub fn enumerate_timetables(
    catalog_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    enumerate_json(catalog_json, options_json).map_err(|e| js_error("Enumeration failed", e))
}

/// Whether two meetings (`{"kind", "days", "time"}` JSON objects) conflict.
#[wasm_bindgen(js_name = "meetingsConflict")]
pub fn meetings_conflict(a_json: &str, b_json: &str) -> Result<bool, JsValue> {
    let a = parse_meeting(a_json).map_err(|e| js_error("Invalid meeting", e))?;
    let b = parse_meeting(b_json).map_err(|e| js_error("Invalid meeting", e))?;
    Ok(conflicts(&a, &b))
}

/// Conflicts between one catalog section and the currently selected sections.
///
/// `selected_ids_json` is a JSON array of section ids. Returns
/// `{"conflicts": bool, "meetings": [...]}` for live "does this fit" previews.
#[wasm_bindgen(js_name = "sectionConflicts")]
pub fn section_conflicts(
    catalog_json: &str,
    candidate_id: &str,
    selected_ids_json: &str,
) -> Result<String, JsValue> {
    section_conflicts_json(catalog_json, candidate_id, selected_ids_json)
        .map_err(|e| js_error("Conflict check failed", e))
}

//! swissgeo-wasm: WebAssembly bindings for swissgeo-core
//!
//! Lets a browser filter UI drive the cascading location selection without
//! reimplementing it in JavaScript. The selection travels as a JSON string:
//! the UI keeps it (in component state, `localStorage`, the URL, ...) and
//! hands it back on every toggle.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { toggle_region, toggle_sub_region, region_tree, job_matches } from 'swissgeo-wasm';
//!
//! await init();
//! let state = "{}";
//! state = toggle_region(state, "zurich");
//! state = toggle_sub_region(state, "winterthur");
//! console.log(region_tree(state));           // tri-state tree for rendering
//! console.log(job_matches(state, jobJson));  // true / false
//! ```
//!
//! Notes
//! -----
//! - Invalid codes or malformed JSON surface as thrown JS errors.
//! - The plain-Rust functions in [`api`] back every binding and are what
//!   the tests exercise.
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let stats = swissgeo_core::hierarchy::stats();
    web_sys::console::log_1(
        &format!(
            "swissgeo-wasm ready: {} regions, {} cantons, {} sub-regions",
            stats.regions, stats.cantons, stats.sub_regions
        )
        .into(),
    );
}

pub mod api {
    //! JSON-in / JSON-out wrappers around the core.
    use swissgeo_core::job::JobLocationRaw;
    use swissgeo_core::prelude::*;

    pub type ApiResult<T> = std::result::Result<T, String>;

    fn parse_state(state_json: &str) -> ApiResult<SelectionState> {
        if state_json.trim().is_empty() {
            return Ok(SelectionState::new());
        }
        serde_json::from_str(state_json).map_err(|e| format!("invalid selection state: {e}"))
    }

    fn to_json<T: serde::Serialize>(value: &T) -> ApiResult<String> {
        serde_json::to_string(value).map_err(|e| e.to_string())
    }

    pub fn toggle(state_json: &str, toggle: Toggle) -> ApiResult<String> {
        let mut state = parse_state(state_json)?;
        state.apply(toggle);
        to_json(&state)
    }

    pub fn toggle_region(state_json: &str, code: &str) -> ApiResult<String> {
        let region: Region = code.parse().map_err(|e: ClassificationError| e.to_string())?;
        toggle(state_json, Toggle::Region(region))
    }

    pub fn toggle_canton(state_json: &str, code: &str) -> ApiResult<String> {
        let canton: Canton = code.parse().map_err(|e: ClassificationError| e.to_string())?;
        toggle(state_json, Toggle::Canton(canton))
    }

    pub fn toggle_sub_region(state_json: &str, code: &str) -> ApiResult<String> {
        let sub: SubRegion = code.parse().map_err(|e: ClassificationError| e.to_string())?;
        toggle(state_json, Toggle::SubRegion(sub))
    }

    pub fn region_tree(state_json: &str) -> ApiResult<String> {
        to_json(&parse_state(state_json)?.tree())
    }

    pub fn detect_sub_region(postal_code: &str) -> Option<String> {
        detect_sub_region_from_postal_code(postal_code).map(|s| s.code().to_string())
    }

    /// `job_json` is a raw job-location record (string codes).
    pub fn job_matches(state_json: &str, job_json: &str, mode: &str) -> ApiResult<bool> {
        let state = parse_state(state_json)?;
        let raw: JobLocationRaw =
            serde_json::from_str(job_json).map_err(|e| format!("invalid job record: {e}"))?;
        let job = JobLocationAttributes::try_from(raw).map_err(|e| e.to_string())?;
        let mode = match mode {
            "" | "strict" => MatchMode::StrictPrecedence,
            "union" => MatchMode::Union,
            other => return Err(format!("unknown match mode: {other:?}")),
        };
        Ok(LocationMatcher::with_mode(mode).matches(&state, &job))
    }
}

fn js_err(msg: String) -> JsValue {
    JsValue::from_str(&msg)
}

/* --------------------------------------------------------------------------
   Selection
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn toggle_region(state_json: &str, code: &str) -> Result<String, JsValue> {
    api::toggle_region(state_json, code).map_err(js_err)
}

#[wasm_bindgen]
pub fn toggle_canton(state_json: &str, code: &str) -> Result<String, JsValue> {
    api::toggle_canton(state_json, code).map_err(js_err)
}

#[wasm_bindgen]
pub fn toggle_sub_region(state_json: &str, code: &str) -> Result<String, JsValue> {
    api::toggle_sub_region(state_json, code).map_err(js_err)
}

#[wasm_bindgen]
pub fn region_tree(state_json: &str) -> Result<String, JsValue> {
    api::region_tree(state_json).map_err(js_err)
}

/* --------------------------------------------------------------------------
   Classification & matching
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn detect_sub_region(postal_code: &str) -> Option<String> {
    api::detect_sub_region(postal_code)
}

#[wasm_bindgen]
pub fn job_matches(state_json: &str, job_json: &str, mode: &str) -> Result<bool, JsValue> {
    api::job_matches(state_json, job_json, mode).map_err(js_err)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&swissgeo_core::hierarchy::stats()).map_err(JsValue::from)
}

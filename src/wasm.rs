// WebAssembly bindings for the browser form
use crate::compare;
use crate::config::Config;
use crate::input;
use crate::numeric;
use crate::slots::SlotList;
use crate::units::CATEGORY_TABLE;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitCostWasm {
    config: Config,
    slots: SlotList,
}

impl Default for UnitCostWasm {
    fn default() -> Self {
        Self::with_config(Config::empty())
    }
}

impl UnitCostWasm {
    fn with_config(config: Config) -> Self {
        let slots = SlotList::new(config.limits);
        Self { config, slots }
    }
}

#[wasm_bindgen]
impl UnitCostWasm {
    /// Optional TOML config content
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<UnitCostWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };
        Ok(Self::with_config(config))
    }

    /// Compare entries given as a JSON array of {id, name, quantity, unit, price}
    /// Returns JSON of {comparison, report}
    #[wasm_bindgen]
    pub fn compare(&self, entries_json: &str) -> Result<String, JsValue> {
        let entries: Vec<compare::RawEntry> = serde_json::from_str(entries_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse entries JSON: {}", e)))?;

        let comparison = compare::compare_with_limits(&entries, &self.config.limits)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let report = compare::Report::new(&comparison, &self.config.currency);

        let result = serde_json::json!({
            "comparison": comparison,
            "report": report,
        });

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Compare products written as a TOML `[[product]]` document
    #[wasm_bindgen]
    pub fn compare_toml(&self, content: &str) -> Result<String, JsValue> {
        let entries = input::load_entries_from_str(content)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let json = serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize entries: {}", e)))?;
        self.compare(&json)
    }

    /// Unit table for populating the unit selects, grouped by category
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        serde_json::to_string(CATEGORY_TABLE.groups())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize categories: {}", e)))
    }

    #[wasm_bindgen]
    pub fn category_of(&self, unit: &str) -> String {
        crate::units::category_name_of(unit).to_string()
    }

    #[wasm_bindgen]
    pub fn to_number(&self, text: &str) -> f64 {
        numeric::to_number(text)
    }

    /// Value to put back into a price field on blur
    #[wasm_bindgen]
    pub fn format_price(&self, text: &str) -> String {
        numeric::format_price_field(text)
    }

    /// Value to keep in a price field after a keystroke
    #[wasm_bindgen]
    pub fn sanitize_price(&self, text: &str) -> String {
        numeric::sanitize_price_keystroke(text)
    }

    #[wasm_bindgen]
    pub fn capitalize(&self, text: &str) -> String {
        numeric::capitalize(text)
    }

    /// Milliseconds an error banner stays visible
    #[wasm_bindgen]
    pub fn error_display_ms(&self) -> f64 {
        self.config.error_display_ms as f64
    }

    /// Returns the new slot id, or throws when the limit is reached
    #[wasm_bindgen]
    pub fn add_slot(&mut self) -> Result<usize, JsValue> {
        self.slots
            .add()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// False when nothing was removed
    #[wasm_bindgen]
    pub fn remove_slot(&mut self, id: usize) -> bool {
        self.slots.remove(id)
    }

    #[wasm_bindgen]
    pub fn can_add_slot(&self) -> bool {
        self.slots.can_add()
    }

    /// Current slots as a JS array of {id, title, removable}
    #[wasm_bindgen]
    pub fn slots(&self) -> Result<js_sys::Array, JsValue> {
        let array = js_sys::Array::new();
        for view in self.slots.views() {
            let json = serde_json::to_string(&view)
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize slot: {}", e)))?;
            array.push(&js_sys::JSON::parse(&json)?);
        }
        Ok(array)
    }
}

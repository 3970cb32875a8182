pub mod classifier;
pub mod config;
pub mod input;
pub mod layout;
pub mod measure;
pub mod session;
pub mod svg;
pub mod trip;

use wasm_bindgen::prelude::*;

use config::Config;
use input::parse_trip_list;
use layout::LayoutEngine;
use session::Session;
use svg::SvgRenderer;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Render a trip list (one `ORIGIN DESTINATION` per line) to SVG
#[wasm_bindgen(js_name = "tripsToSvg")]
pub fn render_trips(source: &str) -> Result<String, String> {
    let routes = parse_trip_list(source).map_err(|e| e.to_string())?;
    let mut session = Session::default();
    session.extend(routes);
    SvgRenderer::default()
        .render(session.layout())
        .map_err(|e| e.to_string())
}

/// Interactive diagram: submit trips one by one and read back the layout.
#[wasm_bindgen]
pub struct TripDiagram {
    session: Session,
    renderer: SvgRenderer,
}

#[wasm_bindgen]
impl TripDiagram {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<TripDiagram, String> {
        let config = match config_json.as_deref() {
            Some(json) => Config::from_json(json).map_err(|e| e.to_string())?,
            None => Config::default(),
        };
        let renderer = SvgRenderer::new(&config.layout);
        Ok(Self {
            session: Session::new(LayoutEngine::from_config(config)),
            renderer,
        })
    }

    /// Returns false when either code is empty after normalization.
    pub fn submit(&mut self, origin: &str, destination: &str) -> bool {
        self.session.submit(origin, destination).is_some()
    }

    pub fn svg(&self) -> Result<String, String> {
        self.renderer
            .render(self.session.layout())
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = "layoutJson")]
    pub fn layout_json(&self) -> Result<String, String> {
        serde_json::to_string(self.session.layout()).map_err(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = "tripsJson")]
    pub fn trips_json(&self) -> Result<String, String> {
        serde_json::to_string(self.session.trips()).map_err(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = "tripCount")]
    pub fn trip_count(&self) -> usize {
        self.session.trips().len()
    }

    /// Route keys of the logged trips, in submission order.
    #[wasm_bindgen(js_name = "routeLabels")]
    pub fn route_labels(&self) -> js_sys::Array {
        self.session
            .trips()
            .iter()
            .map(|t| JsValue::from_str(t.label()))
            .collect()
    }
}

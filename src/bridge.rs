// ============================================================================
// BRIDGE - Exports wasm_bindgen para el router y las vistas en JS
// ============================================================================
// `postJson` resuelve con el JSON de la respuesta ("" para 204) y rechaza con:
// - { kind: "auth", status }         -> no autenticado (401), ir a login
// - { kind: "failure", status }      -> el servidor rechazó la petición
// - { kind: "exception", exception } -> fallo de transporte o de serialización
// ============================================================================

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::services::{ApiClient, Payload, RequestError, TransportError};

#[wasm_bindgen(start)]
pub fn start() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 WID Timer UI ({}) -> {}", CONFIG.environment, CONFIG.backend_url());
}

/// Clave YYYYMMDD de hoy en hora local
#[wasm_bindgen(js_name = todayKey)]
pub fn today_key() -> String {
    crate::utils::day_key::resolve_today().to_string()
}

/// Redirección para `path` (solo la raíz redirige)
#[wasm_bindgen(js_name = rootRedirect)]
pub fn root_redirect(path: &str) -> Option<String> {
    crate::router::redirect_for(path)
}

/// Validez del formulario de login
#[wasm_bindgen(js_name = isLoginValid)]
pub fn is_login_valid(email: &str, password: &str) -> bool {
    crate::models::LoginParams::new(email, password).is_valid()
}

/// POST JSON al backend configurado
#[wasm_bindgen(js_name = postJson)]
pub async fn post_json(endpoint: String, payload: JsValue) -> Result<JsValue, JsValue> {
    let payload = match js_to_json(&payload) {
        Ok(value) => value,
        Err(e) => {
            log::error!("❌ [BRIDGE] Payload no serializable para {}: {}", endpoint, e);
            return Err(rejection(&RequestError::Exception(e)));
        }
    };

    match ApiClient::new().perform::<Value, Value>(&endpoint, &payload).await {
        Ok(Payload::Json(value)) => {
            json_to_js(&value).map_err(|e| rejection(&RequestError::Exception(e)))
        }
        Ok(Payload::NoContent) => Ok(JsValue::from_str("")),
        Err(e) => Err(rejection(&e)),
    }
}

fn js_to_json(value: &JsValue) -> Result<Value, TransportError> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let text: String = js_sys::JSON::stringify(value)
        .map_err(|e| TransportError::Build(format!("{:?}", e)))?
        .into();
    Ok(serde_json::from_str(&text)?)
}

fn json_to_js(value: &Value) -> Result<JsValue, TransportError> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(|e| TransportError::Body(format!("{:?}", e)))
}

fn rejection(error: &RequestError) -> JsValue {
    json_to_js(&error.rejection()).unwrap_or_else(|e| {
        log::warn!("⚠️ [BRIDGE] No se pudo construir el objeto de rechazo: {}", e);
        JsValue::from_str(&error.to_string())
    })
}

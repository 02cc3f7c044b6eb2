// ============================================================================
// WID TIMER UI - NÚCLEO DEL CLIENTE WEB (RUST + WASM)
// ============================================================================
// - Services: SOLO comunicación API (ApiClient::perform)
// - Router: tabla de rutas + redirección de "/" al día de hoy
// - Models: credenciales del formulario de login
// - State: estado reactivo con Rc<RefCell>
// - Bridge: exports wasm_bindgen (solo wasm32)
// Las vistas, iconos e i18n viven fuera de este crate.
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod bridge;

pub use models::LoginParams;
pub use router::{navigate, redirect_for, Navigation, Route};
pub use services::{ApiClient, Outcome, Payload, RequestError, TransportError};
pub use utils::day_key::{resolve_today, DayKey};

// ============================================================================
// ROUTER - Tabla de rutas + redirección de la raíz
// ============================================================================
// /                      -> redirige a /day/<hoy>
// /day/:dateKey?         -> vista de día
// /project               -> lista de proyectos
// /project/new           -> nuevo proyecto
// /project/:projectId    -> detalle de proyecto
// ============================================================================

use mockable::{Clock, DefaultClock};

use crate::utils::day_key::{resolve_today_with, DayKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Sin clave: la vista no elige fecha por sí misma
    Day(Option<DayKey>),
    Projects,
    NewProject,
    /// Construir con `Route::project`: "new" y los ids con '/' no son ids
    /// navegables (`/project/new` es `NewProject`)
    Project(String),
}

/// Resultado de entrar en una ruta
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Redirect(String),
    Render(Route),
}

const NEW_PROJECT_SEGMENT: &str = "new";

impl Route {
    /// Ruta de detalle de proyecto, si `id` cabe en un único segmento no reservado
    pub fn project(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() || id == NEW_PROJECT_SEGMENT || id.contains(['/', '?', '#']) {
            return None;
        }
        Some(Route::Project(id))
    }

    /// Ruta estática para `path`; la raíz no es una ruta sino una redirección
    pub fn recognize(path: &str) -> Option<Self> {
        let segments: Vec<&str> = normalize(path).split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["day"] => Some(Route::Day(None)),
            ["day", key] => DayKey::parse(key).ok().map(|key| Route::Day(Some(key))),
            ["project"] => Some(Route::Projects),
            ["project", segment] if *segment == NEW_PROJECT_SEGMENT => Some(Route::NewProject),
            ["project", id] => Route::project(*id),
            _ => None,
        }
    }

    /// Path canónico de la ruta
    pub fn path(&self) -> String {
        match self {
            Route::Day(None) => "/day".to_string(),
            Route::Day(Some(key)) => format!("/day/{}", key),
            Route::Projects => "/project".to_string(),
            Route::NewProject => "/project/new".to_string(),
            Route::Project(id) => format!("/project/{}", id),
        }
    }

    pub fn today() -> Self {
        Route::Day(Some(crate::utils::day_key::resolve_today()))
    }
}

// Sin query ni fragmento, sin barras finales; "" equivale a "/"
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Destino de la redirección para `path`, si la hay
pub fn redirect_for(path: &str) -> Option<String> {
    redirect_for_with(path, &DefaultClock)
}

/// Igual que `redirect_for`, con el reloj inyectado. La clave se recalcula
/// en cada llamada
pub fn redirect_for_with(path: &str, clock: &dyn Clock) -> Option<String> {
    if normalize(path) == "/" {
        let target = Route::Day(Some(resolve_today_with(clock))).path();
        log::debug!("↪️ [ROUTER] {} -> {}", path, target);
        Some(target)
    } else {
        None
    }
}

/// Qué hacer al entrar en `path`: redirigir, renderizar, o `None` si no existe
pub fn navigate(path: &str) -> Option<Navigation> {
    navigate_with(path, &DefaultClock)
}

pub fn navigate_with(path: &str, clock: &dyn Clock) -> Option<Navigation> {
    if let Some(target) = redirect_for_with(path, clock) {
        return Some(Navigation::Redirect(target));
    }
    let route = Route::recognize(path);
    if route.is_none() {
        log::warn!("⚠️ [ROUTER] Ruta desconocida: {}", path);
    }
    route.map(Navigation::Render)
}

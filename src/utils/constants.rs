/// URL base del backend de WID Timer
/// Configurada en tiempo de compilación:
/// - Por defecto: https://api.wid-timer.org/signin
/// - Otra instancia (o un stub local) via WID_SERVER_URL
pub const WID_SERVER_URL: &str = match option_env!("WID_SERVER_URL") {
    Some(url) => url,
    None => "https://api.wid-timer.org/signin",
};

/// Tipo de contenido que se envía y se acepta en todas las peticiones
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Formato de la clave canónica de día (YYYYMMDD)
pub const DAY_KEY_FORMAT: &str = "%Y%m%d";

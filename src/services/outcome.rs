// ============================================================================
// OUTCOME - Resultado uniforme de una petición al backend
// ============================================================================

use serde_json::{json, Value};

use crate::services::transport::TransportError;

/// Cuerpo de una respuesta exitosa
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// 204 No Content: no hay cuerpo que leer
    NoContent,
    Json(T),
}

impl<T> Payload<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Payload::NoContent => None,
            Payload::Json(value) => Some(value),
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, Payload::NoContent)
    }
}

/// Petición rechazada. Cada variante indica cómo debe reaccionar la vista
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Sesión no válida: redirigir a login, sin reintento
    #[error("not authenticated (HTTP {status})")]
    Unauthorized { status: u16 },
    /// El servidor rechazó la petición
    #[error("request failed (HTTP {status})")]
    Failed { status: u16 },
    /// No se pudo completar la petición
    #[error("request exception: {0}")]
    Exception(#[from] TransportError),
}

impl RequestError {
    /// Código HTTP, si hubo respuesta
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Unauthorized { status } | RequestError::Failed { status } => Some(*status),
            RequestError::Exception(_) => None,
        }
    }

    pub fn requires_reauth(&self) -> bool {
        matches!(self, RequestError::Unauthorized { .. })
    }

    /// Solo los fallos de transporte tiene sentido reintentarlos
    pub fn is_retryable(&self) -> bool {
        matches!(self, RequestError::Exception(_))
    }

    /// Objeto con el que se rechaza la promesa en JS; `kind` distingue cada caso
    pub fn rejection(&self) -> Value {
        match self {
            RequestError::Unauthorized { status } => json!({ "kind": "auth", "status": status }),
            RequestError::Failed { status } => json!({ "kind": "failure", "status": status }),
            RequestError::Exception(e) => json!({ "kind": "exception", "exception": e.to_string() }),
        }
    }
}

pub type Outcome<T> = Result<Payload<T>, RequestError>;

// ============================================================================
// API CLIENT - Núcleo único de peticiones al backend
// ============================================================================
// Todas las llamadas de red pasan por `perform`:
// - Serializa el payload a JSON y hace POST a <base_url><endpoint>
// - 401 -> Unauthorized (no se lee el cuerpo)
// - 204 -> Payload::NoContent (no se lee el cuerpo)
// - resto 2xx -> cuerpo JSON tipado
// - no 2xx -> Failed con el código
// - cualquier error de transporte/serialización -> Exception (se loguea)
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::services::outcome::{Outcome, Payload, RequestError};
use crate::services::transport::{
    DefaultTransport, OutgoingRequest, Transport, TransportError, TransportResponse,
};

const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_NO_CONTENT: u16 = 204;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient<T = DefaultTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient {
    /// Cliente contra el backend configurado, con el transporte de la plataforma
    pub fn new() -> Self {
        Self::with_transport(CONFIG.backend_url(), DefaultTransport::default())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// El endpoint se concatena tal cual a la URL base
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// POST JSON a `endpoint` y clasificación de la respuesta
    pub async fn perform<P, R>(&self, endpoint: &str, payload: &P) -> Outcome<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.exchange(endpoint, payload).await {
            Err(RequestError::Exception(e)) => {
                log::error!("❌ [API] POST {} falló: {}", endpoint, e);
                Err(RequestError::Exception(e))
            }
            outcome => outcome,
        }
    }

    async fn exchange<P, R>(&self, endpoint: &str, payload: &P) -> Outcome<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(payload).map_err(TransportError::from)?;
        let url = self.endpoint_url(endpoint);
        log::debug!("📤 [API] POST {}", url);

        let response = self.transport.post(OutgoingRequest::json_post(url, body)).await?;
        let status = response.status();

        if status == STATUS_UNAUTHORIZED {
            log::info!("🔒 [API] {} requiere autenticación", endpoint);
            return Err(RequestError::Unauthorized { status });
        }

        let ok = response.ok();
        if status == STATUS_NO_CONTENT {
            // 204 siempre es 2xx; el check de ok se mantiene igualmente
            return if ok {
                Ok(Payload::NoContent)
            } else {
                Err(RequestError::Failed { status })
            };
        }

        if !ok {
            return Err(RequestError::Failed { status });
        }

        let text = response.text().await?;
        let value = serde_json::from_str(&text).map_err(TransportError::from)?;
        Ok(Payload::Json(value))
    }
}

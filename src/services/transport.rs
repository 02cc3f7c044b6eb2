// ============================================================================
// TRANSPORT - Envío HTTP crudo (sin clasificar respuestas)
// ============================================================================
// - FetchTransport: navegador (gloo-net / fetch), solo wasm32
// - ReqwestTransport: nativo (reqwest + cookie store)
// La clasificación de estados vive en ApiClient, no aquí.
// ============================================================================

use async_trait::async_trait;

use crate::utils::constants::JSON_CONTENT_TYPE;

/// Error del transporte: la petición no pudo completarse
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request build error: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("body read error: {0}")]
    Body(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Modo fetch de la petición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Cors,
    SameOrigin,
}

/// Política de cookies de la petición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Include,
    SameOrigin,
    Omit,
}

/// Petición POST ya serializada, lista para el transporte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: String,
    pub mode: FetchMode,
    pub credentials: Credentials,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl OutgoingRequest {
    /// POST JSON cross-origin con cookies; `Accept` y `Content-Type` en application/json
    pub fn json_post(url: String, body: String) -> Self {
        Self {
            url,
            mode: FetchMode::Cors,
            credentials: Credentials::Include,
            headers: vec![
                ("Accept", JSON_CONTENT_TYPE),
                ("Content-Type", JSON_CONTENT_TYPE),
            ],
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

#[async_trait(?Send)]
pub trait TransportResponse {
    fn status(&self) -> u16;

    /// Rango 2xx
    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Lee el cuerpo completo como texto
    async fn text(self) -> Result<String, TransportError>;
}

/// Envía peticiones POST cross-origin con cookies incluidas
#[async_trait(?Send)]
pub trait Transport {
    type Response: TransportResponse;

    async fn post(&self, request: OutgoingRequest) -> Result<Self::Response, TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = FetchTransport;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use async_trait::async_trait;
    use gloo_net::http::{Request, Response};
    use web_sys::{RequestCredentials, RequestMode};

    use super::{Credentials, FetchMode, OutgoingRequest, Transport, TransportError, TransportResponse};

    /// Transporte del navegador basado en fetch
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FetchTransport;

    #[async_trait(?Send)]
    impl TransportResponse for Response {
        fn status(&self) -> u16 {
            Response::status(self)
        }

        fn ok(&self) -> bool {
            Response::ok(self)
        }

        async fn text(self) -> Result<String, TransportError> {
            Response::text(&self)
                .await
                .map_err(|e| TransportError::Body(e.to_string()))
        }
    }

    #[async_trait(?Send)]
    impl Transport for FetchTransport {
        type Response = Response;

        async fn post(&self, request: OutgoingRequest) -> Result<Response, TransportError> {
            let mode = match request.mode {
                FetchMode::Cors => RequestMode::Cors,
                FetchMode::SameOrigin => RequestMode::SameOrigin,
            };
            let credentials = match request.credentials {
                Credentials::Include => RequestCredentials::Include,
                Credentials::SameOrigin => RequestCredentials::SameOrigin,
                Credentials::Omit => RequestCredentials::Omit,
            };

            let mut builder = Request::post(&request.url)
                .mode(mode)
                .credentials(credentials);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            builder
                .body(request.body)
                .map_err(|e| TransportError::Build(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;

    use super::{OutgoingRequest, Transport, TransportError, TransportResponse};

    /// Transporte nativo; el cookie store hace de `credentials: include`
    #[derive(Clone, Debug)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Result<Self, TransportError> {
            let client = reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .map_err(|e| TransportError::Build(e.to_string()))?;
            Ok(Self { client })
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Default for ReqwestTransport {
        fn default() -> Self {
            Self::new().unwrap_or_else(|e| {
                log::warn!("⚠️ [TRANSPORT] Cookie store no disponible ({}), usando cliente por defecto", e);
                Self::with_client(reqwest::Client::new())
            })
        }
    }

    #[async_trait(?Send)]
    impl TransportResponse for reqwest::Response {
        fn status(&self) -> u16 {
            reqwest::Response::status(self).as_u16()
        }

        async fn text(self) -> Result<String, TransportError> {
            reqwest::Response::text(self)
                .await
                .map_err(|e| TransportError::Body(e.to_string()))
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        type Response = reqwest::Response;

        async fn post(&self, request: OutgoingRequest) -> Result<reqwest::Response, TransportError> {
            let mut builder = self.client.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, *value);
            }

            builder
                .body(request.body)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::state::ReactiveState;

/// Credenciales del formulario de login
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Envuelve las credenciales en un estado reactivo para el formulario
    pub fn new_reactive(email: impl Into<String>, password: impl Into<String>) -> ReactiveState<Self> {
        ReactiveState::new(Self::new(email, password))
    }

    /// Ambos campos rellenados. Se evalúa en cada llamada, sin cachear
    pub fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

// El password nunca debe acabar en los logs
impl std::fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

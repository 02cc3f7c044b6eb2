// ============================================================================
// DAY KEY - Clave canónica de día (YYYYMMDD, hora local)
// ============================================================================
// La clave se recalcula en cada navegación a "/". Nunca se cachea.
// ============================================================================

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};

use crate::utils::constants::DAY_KEY_FORMAT;

/// Día del calendario identificado por su clave `YYYYMMDD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayKeyError {
    #[error("day key must be 8 digits (YYYYMMDD), got {0:?}")]
    Malformed(String),
    #[error("day key {0:?} is not a calendar date")]
    InvalidDate(String),
}

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Interpreta un segmento de ruta como clave de día
    pub fn parse(raw: &str) -> Result<Self, DayKeyError> {
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DayKeyError::Malformed(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DayKeyError::InvalidDate(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Día siguiente (chevron derecho de la vista de día)
    pub fn next(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Día anterior (chevron izquierdo)
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

/// Clave del día actual según el reloj del sistema (zona horaria local)
pub fn resolve_today() -> DayKey {
    resolve_today_with(&DefaultClock)
}

/// Igual que `resolve_today`, con el reloj inyectado
pub fn resolve_today_with(clock: &dyn Clock) -> DayKey {
    DayKey(clock.local().date_naive())
}

//! Opaque identifiers and id generation.

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque string identifier of an entity.
///
/// Callers must not assume any structure: sequential ids look like `"42"`,
/// UUID ids like `"01890a5d-ac96-774b-bcce-b302099a8057"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap a raw identifier, rejecting empty or blank strings.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::invalid_id("identifier cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

/// How fresh identifiers are produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Monotonic counter rendered in decimal (`"1"`, `"2"`, ...).
    #[default]
    Sequential,
    /// Time-ordered UUIDv7 strings.
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            other => Err(DomainError::validation(format!(
                "unknown id strategy '{other}' (expected: sequential, uuid)"
            ))),
        }
    }
}

/// Thread-safe source of candidate identifiers.
///
/// The generator never hands out the same value twice, but it cannot know
/// about ids created elsewhere (e.g. seeded records). Owners must still check
/// candidates against their store and ask again on collision.
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: AtomicU64::new(1),
        }
    }

    /// Produce the next candidate identifier.
    pub fn next_id(&self) -> EntityId {
        match self.strategy {
            IdStrategy::Sequential => {
                let n = self.next.fetch_add(1, Ordering::Relaxed);
                EntityId(n.to_string())
            }
            IdStrategy::Uuid => EntityId(Uuid::now_v7().to_string()),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

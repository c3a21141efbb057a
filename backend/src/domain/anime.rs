//! Anime records and the validated values they are built from.

use std::fmt;

/// Properties a page of anime may be ordered by.
pub const ANIME_SORTABLE_PROPERTIES: &[&str] = &["id", "name"];

/// Validation errors returned by [`AnimeName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimeValidationError {
    EmptyName,
}

impl fmt::Display for AnimeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "The anime name cannot be empty"),
        }
    }
}

impl std::error::Error for AnimeValidationError {}

/// Store-assigned surrogate identifier.
///
/// Clients never choose one on create; replace and delete must name an
/// identifier the store already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimeId(i64);

impl AnimeId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title of an anime.
///
/// ## Invariants
/// - Not empty once trimmed of whitespace. The original text is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimeName(String);

impl AnimeName {
    /// Validate and construct a name.
    ///
    /// # Examples
    /// ```
    /// use anime_backend::domain::{AnimeName, AnimeValidationError};
    ///
    /// assert!(AnimeName::new("Angel Beats").is_ok());
    /// assert_eq!(AnimeName::new("  "), Err(AnimeValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, AnimeValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnimeValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for AnimeName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AnimeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AnimeName> for String {
    fn from(value: AnimeName) -> Self {
        value.0
    }
}

/// A persisted anime record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Anime {
    id: AnimeId,
    name: AnimeName,
}

impl Anime {
    pub fn new(id: AnimeId, name: AnimeName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> AnimeId {
        self.id
    }

    pub fn name(&self) -> &AnimeName {
        &self.name
    }

    /// Same record content under a different identifier.
    pub fn with_id(self, id: AnimeId) -> Self {
        Self { id, ..self }
    }
}

/// A record the store has not assigned an identifier to yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewAnime {
    name: AnimeName,
}

impl NewAnime {
    pub fn new(name: AnimeName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &AnimeName {
        &self.name
    }
}

/// Validated request to create an anime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeInsert {
    pub name: AnimeName,
}

/// Validated request to overwrite every field of an existing anime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeUpdate {
    pub id: AnimeId,
    pub name: AnimeName,
}

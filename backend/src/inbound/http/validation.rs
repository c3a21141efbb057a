//! Field-level validation for anime request bodies.
//!
//! Bodies are decoded with every field optional so a missing field and an
//! invalid one are both reported as violations instead of a decode failure.
//! Violations are collected in field declaration order (`id`, then `name`).

use pagination::{PageParams, PageRequest, PageRequestError};

use crate::domain::{
    ANIME_SORTABLE_PROPERTIES, AnimeId, AnimeInsert, AnimeName, AnimeUpdate, Error,
    FieldViolation,
};

pub const ID_REQUIRED: &str = "The anime id cannot be null";

fn check_name(raw: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<AnimeName> {
    match AnimeName::new(raw.unwrap_or_default()) {
        Ok(name) => Some(name),
        Err(err) => {
            violations.push(FieldViolation::new("name", err.to_string()));
            None
        }
    }
}

/// Validate a create body.
pub fn validate_insert(name: Option<&str>) -> Result<AnimeInsert, Error> {
    let mut violations = Vec::new();
    match check_name(name, &mut violations) {
        Some(name) => Ok(AnimeInsert { name }),
        None => Err(Error::validation(violations)),
    }
}

/// Validate a replace body.
pub fn validate_update(id: Option<i64>, name: Option<&str>) -> Result<AnimeUpdate, Error> {
    let mut violations = Vec::new();
    if id.is_none() {
        violations.push(FieldViolation::new("id", ID_REQUIRED));
    }
    let name = check_name(name, &mut violations);
    match (id, name) {
        (Some(id), Some(name)) => Ok(AnimeUpdate {
            id: AnimeId::new(id),
            name,
        }),
        _ => Err(Error::validation(violations)),
    }
}

/// Validate paging parameters against the configured ceiling.
pub fn validate_page(params: PageParams, max_page_size: u32) -> Result<PageRequest, Error> {
    params
        .into_request(max_page_size, ANIME_SORTABLE_PROPERTIES)
        .map_err(|err: PageRequestError| {
            Error::validation(vec![FieldViolation::new(err.field(), err.to_string())])
        })
}

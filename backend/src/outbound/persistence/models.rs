//! Diesel row structs. Internal to the persistence adapters.

use diesel::prelude::*;

use super::schema::{animes, users};

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = animes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnimeRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = animes)]
pub(crate) struct NewAnimeRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    #[allow(dead_code)]
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password: String,
    pub authorities: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub authorities: &'a str,
}

//! PostgreSQL-backed `CredentialRepository` over the `users` table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CredentialRepository, CredentialRepositoryError};
use crate::domain::{Authority, Credential};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the credential repository port.
#[derive(Clone)]
pub struct DieselCredentialRepository {
    pool: DbPool,
}

impl DieselCredentialRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CredentialRepositoryError {
    map_basic_pool_error(error, CredentialRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CredentialRepositoryError {
    map_basic_diesel_error(
        error,
        CredentialRepositoryError::query,
        CredentialRepositoryError::connection,
    )
}

fn row_to_credential(row: UserRow) -> Credential {
    Credential {
        name: row.name,
        username: row.username,
        password_hash: row.password,
        authorities: Authority::parse_list(&row.authorities),
    }
}

#[async_trait]
impl CredentialRepository for DieselCredentialRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, CredentialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_credential))
    }

    async fn save(&self, credential: &Credential) -> Result<(), CredentialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let authorities = Authority::join(&credential.authorities);
        diesel::insert_into(users::table)
            .values(&NewUserRow {
                name: &credential.name,
                username: &credential.username,
                password: &credential.password_hash,
                authorities: &authorities,
            })
            .on_conflict(users::username)
            .do_update()
            .set((
                users::name.eq(excluded(users::name)),
                users::password.eq(excluded(users::password)),
                users::authorities.eq(excluded(users::authorities)),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}

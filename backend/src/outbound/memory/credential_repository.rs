//! Process-local `CredentialRepository`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::Credential;
use crate::domain::ports::{CredentialRepository, CredentialRepositoryError};

/// Credentials keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    by_username: Mutex<HashMap<String, Credential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, CredentialRepositoryError> {
        let guard = self
            .by_username
            .lock()
            .map_err(|_| CredentialRepositoryError::query("credential store lock poisoned"))?;
        Ok(guard.get(username).cloned())
    }

    async fn save(&self, credential: &Credential) -> Result<(), CredentialRepositoryError> {
        let mut guard = self
            .by_username
            .lock()
            .map_err(|_| CredentialRepositoryError::query("credential store lock poisoned"))?;
        guard.insert(credential.username.clone(), credential.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::Authority;
    use rstest::rstest;

    fn credential(username: &str, hash: &str) -> Credential {
        Credential {
            name: username.to_owned(),
            username: username.to_owned(),
            password_hash: hash.to_owned(),
            authorities: BTreeSet::from([Authority::User]),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_by_username() {
        let repo = InMemoryCredentialRepository::new();
        repo.save(&credential("devdojo", "first")).await.expect("save");
        repo.save(&credential("devdojo", "second")).await.expect("save");

        let stored = repo
            .find_by_username("devdojo")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(stored.password_hash, "second");
        assert!(repo.find_by_username("DevDojo").await.expect("lookup").is_none());
    }
}

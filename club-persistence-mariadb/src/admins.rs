use club_server_domain::{ServiceResult, credentials::CredentialVerifier};

use crate::query::QueryHelper;

/// Matches the submitted username and password against the `admins` table
/// as stored, without hashing.
// TODO: store salted hashes in `admins.password` and verify them here.
pub struct PlaintextAdminVerifier {
    helper: QueryHelper,
}

impl PlaintextAdminVerifier {
    pub fn new(helper: QueryHelper) -> Self {
        Self { helper }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for PlaintextAdminVerifier {
    async fn verify(&self, username: &str, password: &str) -> ServiceResult<bool> {
        let rows = self
            .helper
            .fetch(
                "SELECT * FROM admins WHERE username = ? AND password = ?",
                vec![username.into(), password.into()],
            )
            .await?;
        Ok(!rows.is_empty())
    }
}

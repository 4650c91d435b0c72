use std::sync::Arc;

use crate::ServiceResult;

pub type ArcCredentialVerifier = Arc<Box<dyn CredentialVerifier + Send + Sync + 'static>>;

/// Checks admin credentials. Implementations decide how passwords are
/// stored; the login route only sees the boolean.
#[async_trait::async_trait]
pub trait CredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> ServiceResult<bool>;
}

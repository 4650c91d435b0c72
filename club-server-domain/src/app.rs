use crate::{
    contact::ArcContactRepository, credentials::ArcCredentialVerifier,
    player::ArcPlayerRepository, registration::ArcRegistrationRepository,
};

/// The ports every route handler can reach.
#[derive(Clone)]
pub struct Services {
    pub registration_repository: ArcRegistrationRepository,
    pub player_repository: ArcPlayerRepository,
    pub contact_repository: ArcContactRepository,
    pub credential_verifier: ArcCredentialVerifier,
}

impl Services {
    pub fn new(
        registration_repository: ArcRegistrationRepository,
        player_repository: ArcPlayerRepository,
        contact_repository: ArcContactRepository,
        credential_verifier: ArcCredentialVerifier,
    ) -> Self {
        Self {
            registration_repository,
            player_repository,
            contact_repository,
            credential_verifier,
        }
    }
}

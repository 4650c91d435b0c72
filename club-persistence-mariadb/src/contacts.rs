use club_server_domain::{
    ServiceResult,
    contact::{ContactRepository, NewContact},
};

use crate::query::QueryHelper;

pub struct MariaDbContactRepository {
    helper: QueryHelper,
}

impl MariaDbContactRepository {
    pub fn new(helper: QueryHelper) -> Self {
        Self { helper }
    }
}

#[async_trait::async_trait]
impl ContactRepository for MariaDbContactRepository {
    async fn create_contact(&self, contact: &NewContact) -> ServiceResult<()> {
        self.helper
            .modify(
                "INSERT INTO contacts (name, email, message) VALUES (?, ?, ?)",
                vec![
                    contact.name.clone().into(),
                    contact.email.clone().into(),
                    contact.message.clone().into(),
                ],
            )
            .await?;
        Ok(())
    }
}

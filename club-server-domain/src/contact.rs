use std::sync::Arc;

use crate::ServiceResult;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

pub type ArcContactRepository = Arc<Box<dyn ContactRepository + Send + Sync + 'static>>;

/// Contact messages are write-only from the site's point of view.
#[async_trait::async_trait]
pub trait ContactRepository {
    async fn create_contact(&self, contact: &NewContact) -> ServiceResult<()>;
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    ServiceResult,
    util::{non_blank, validate_form},
};

pub type RegistrationId = i64;

#[derive(Clone, Debug, PartialEq)]
pub struct StudentRegistration {
    pub id: RegistrationId,
    pub name: String,
    pub gender: Option<String>,
    pub sport: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

/// Raw registration fields as submitted by a visitor.
#[derive(Clone, Debug, Default)]
pub struct RegistrationSubmission {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub sport: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Validate)]
pub struct NewRegistration {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub gender: Option<String>,
    pub sport: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<RegistrationSubmission> for NewRegistration {
    type Error = crate::ServiceError;

    fn try_from(submission: RegistrationSubmission) -> ServiceResult<Self> {
        let registration = NewRegistration {
            name: non_blank(submission.name).unwrap_or_default(),
            gender: submission.gender,
            sport: submission.sport,
            department: submission.department,
            contact: submission.contact,
            email: submission.email,
        };
        validate_form(&registration)?;
        Ok(registration)
    }
}

pub type ArcRegistrationRepository = Arc<Box<dyn RegistrationRepository + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait RegistrationRepository {
    async fn create_registration(&self, registration: &NewRegistration) -> ServiceResult<()>;
    /// All registrations, highest id first.
    async fn get_registrations(&self) -> ServiceResult<Vec<StudentRegistration>>;
    /// Returns the number of deleted rows (0 or 1).
    async fn delete_registration(&self, id: RegistrationId) -> ServiceResult<u64>;
}

use club_server_domain::{
    ServiceResult,
    registration::{NewRegistration, RegistrationId, RegistrationRepository, StudentRegistration},
};

use crate::{
    DatabaseResult,
    query::QueryHelper,
    row::{Row, RowExt},
};

pub struct MariaDbRegistrationRepository {
    helper: QueryHelper,
}

impl MariaDbRegistrationRepository {
    pub fn new(helper: QueryHelper) -> Self {
        Self { helper }
    }

    fn registration_from_row(row: &Row) -> DatabaseResult<StudentRegistration> {
        Ok(StudentRegistration {
            id: row.int("id")?,
            name: row.opt_text("name")?.unwrap_or_default(),
            gender: row.opt_text("gender")?,
            sport: row.opt_text("sport")?,
            department: row.opt_text("department")?,
            contact: row.opt_text("contact")?,
            email: row.opt_text("email")?,
        })
    }
}

#[async_trait::async_trait]
impl RegistrationRepository for MariaDbRegistrationRepository {
    async fn create_registration(&self, registration: &NewRegistration) -> ServiceResult<()> {
        self.helper
            .modify(
                "INSERT INTO student_registrations (name, gender, sport, department, contact, email) VALUES (?, ?, ?, ?, ?, ?)",
                vec![
                    registration.name.clone().into(),
                    registration.gender.clone().into(),
                    registration.sport.clone().into(),
                    registration.department.clone().into(),
                    registration.contact.clone().into(),
                    registration.email.clone().into(),
                ],
            )
            .await?;
        Ok(())
    }

    async fn get_registrations(&self) -> ServiceResult<Vec<StudentRegistration>> {
        let rows = self
            .helper
            .fetch("SELECT * FROM student_registrations ORDER BY id DESC", Vec::new())
            .await?;
        let registrations = rows
            .iter()
            .map(Self::registration_from_row)
            .collect::<DatabaseResult<Vec<_>>>()?;
        Ok(registrations)
    }

    async fn delete_registration(&self, id: RegistrationId) -> ServiceResult<u64> {
        let deleted = self
            .helper
            .modify(
                "DELETE FROM student_registrations WHERE id = ?",
                vec![id.into()],
            )
            .await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use crate::row::SqlValue;

    use super::*;

    #[test]
    fn test_registration_from_row() {
        let row: Row = [
            ("id", SqlValue::Int(12)),
            ("name", SqlValue::Text("Meera".into())),
            ("gender", SqlValue::Text("F".into())),
            ("sport", SqlValue::Text("Badminton".into())),
            ("department", SqlValue::Null),
            ("contact", SqlValue::Int(9876543210)),
            ("email", SqlValue::Text("meera@example.com".into())),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let registration = MariaDbRegistrationRepository::registration_from_row(&row).unwrap();
        assert_eq!(registration.id, 12);
        assert_eq!(registration.name, "Meera");
        assert_eq!(registration.department, None);
        assert_eq!(registration.contact.as_deref(), Some("9876543210"));
    }
}

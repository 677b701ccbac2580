use diesel::prelude::*;
use crate::{
    error::RepositoryError,
    models::application_models::Application,
    schema::applications,
    DbPool,
};

pub struct ApplicationRepository {
    pool: DbPool,
}

impl ApplicationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Look up the application stored under a student id
    pub fn find(&self, student_id: &str) -> Result<Option<Application>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let application = applications::table
            .find(student_id)
            .select(Application::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(application)
    }

    /// Write an application under its student id, replacing any existing row.
    /// Duplicate rejection is the caller's job (existence check before write).
    pub fn upsert(&self, application: &Application) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get()?;
        diesel::replace_into(applications::table)
            .values(application)
            .execute(&mut conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    fn application(student_id: &str, name: &str) -> Application {
        Application {
            student_id: student_id.to_string(),
            name: name.to_string(),
            dept: "CS".to_string(),
            phone: "010-0000-0000".to_string(),
            interest: "AI".to_string(),
            message: "hi".to_string(),
            submitted_at: 1_700_000_000,
        }
    }

    #[test]
    fn find_returns_none_for_unknown_student() {
        let repo = ApplicationRepository::new(memory_pool());
        assert_eq!(repo.find("20231234").unwrap(), None);
    }

    #[test]
    fn upsert_then_find_returns_stored_row() {
        let repo = ApplicationRepository::new(memory_pool());
        let stored = application("20231234", "Kim");
        repo.upsert(&stored).unwrap();

        assert_eq!(repo.find("20231234").unwrap(), Some(stored));
        assert_eq!(repo.find("20239999").unwrap(), None);
    }

    #[test]
    fn upsert_replaces_row_with_same_key() {
        let repo = ApplicationRepository::new(memory_pool());
        repo.upsert(&application("20231234", "Kim")).unwrap();
        repo.upsert(&application("20231234", "Lee")).unwrap();

        let found = repo.find("20231234").unwrap().unwrap();
        assert_eq!(found.name, "Lee");
    }
}

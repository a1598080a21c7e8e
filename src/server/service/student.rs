//! Student lookup and creation.

use sea_orm::DatabaseConnection;

use crate::server::{data::student::StudentRepository, error::Error, model::db::StudentModel};

/// Service for looking up and creating students.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new instance of [`StudentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get or create a student by email
    ///
    /// Returns the existing student if the email is already registered, keeping the name
    /// stored at first registration. Otherwise a new student is created. If a concurrent
    /// registration inserts the same email first, the insert fails on the unique constraint
    /// and the winning row is returned instead.
    ///
    /// # Arguments
    /// - `name` - Trimmed, non-empty student name
    /// - `email` - Email already normalized by
    ///   [`normalize_email`](crate::server::util::validation::normalize_email)
    ///
    /// # Returns
    /// - `Ok(StudentModel)` - The found or created student
    /// - `Err(Error::DbErr)` - Storage failed
    pub async fn get_or_create_student(
        &self,
        name: &str,
        email: &str,
    ) -> Result<StudentModel, Error> {
        let student_repo = StudentRepository::new(self.db);

        if let Some(student) = student_repo.get_by_email(email).await? {
            return Ok(student);
        }

        match student_repo.create(name, email).await {
            Ok(student) => {
                tracing::debug!(student_id = %student.id, "Created student");

                Ok(student)
            }
            Err(err) => match student_repo.get_by_email(email).await? {
                Some(student) => Ok(student),
                None => Err(err.into()),
            },
        }
    }

    /// Gets a student by ID, `None` if not found
    pub async fn get_student(&self, student_id: i32) -> Result<Option<StudentModel>, Error> {
        let student_repo = StudentRepository::new(self.db);

        let student = student_repo.get_by_id(student_id).await?;

        Ok(student)
    }
}

//! Student persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Queries on the `student` table
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// Fails with a unique constraint violation if the email is already registered.
    pub async fn create(&self, name: &str, email: &str) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    /// Gets a student by ID
    pub async fn get_by_id(&self, student_id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Finds a student by exact email match
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

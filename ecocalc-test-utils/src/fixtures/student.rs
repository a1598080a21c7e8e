use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::StudentModel, TestContext};

impl TestContext {
    pub fn student<'a>(&'a self) -> StudentFixtures<'a> {
        StudentFixtures { setup: self }
    }
}

pub struct StudentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> StudentFixtures<'a> {
    /// Insert a student named "Test Student" with the provided email
    pub async fn insert_mock_student(&self, email: &str) -> Result<StudentModel, TestError> {
        self.insert_student("Test Student", email).await
    }

    pub async fn insert_student(&self, name: &str, email: &str) -> Result<StudentModel, TestError> {
        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

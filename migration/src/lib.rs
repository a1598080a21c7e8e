pub use sea_orm_migration::prelude::*;

mod m20261016_000001_student;
mod m20261016_000002_calculation;
mod m20261016_000003_email_report;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_student::Migration),
            Box::new(m20261016_000002_calculation::Migration),
            Box::new(m20261016_000003_email_report::Migration),
        ]
    }
}

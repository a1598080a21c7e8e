use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_student::Student;

static IDX_CALCULATION_STUDENT_ID: &str = "idx_calculation_student_id";
static FK_CALCULATION_STUDENT_ID: &str = "fk_calculation_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Calculation::Table)
                    .if_not_exists()
                    .col(pk_auto(Calculation::Id))
                    .col(integer_null(Calculation::StudentId))
                    .col(double(Calculation::Distance))
                    .col(string(Calculation::TransportMethod))
                    .col(string(Calculation::HydrationHabit))
                    .col(string(Calculation::PackagingHabit))
                    .col(double(Calculation::DailyEmissions))
                    .col(double(Calculation::WeeklyEmissions))
                    .col(double(Calculation::YearlyEmissions))
                    .col(timestamp(Calculation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CALCULATION_STUDENT_ID)
                    .table(Calculation::Table)
                    .col(Calculation::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CALCULATION_STUDENT_ID)
                    .from_tbl(Calculation::Table)
                    .from_col(Calculation::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CALCULATION_STUDENT_ID)
                    .table(Calculation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CALCULATION_STUDENT_ID)
                    .table(Calculation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Calculation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Calculation {
    Table,
    Id,
    StudentId,
    Distance,
    TransportMethod,
    HydrationHabit,
    PackagingHabit,
    DailyEmissions,
    WeeklyEmissions,
    YearlyEmissions,
    CreatedAt,
}

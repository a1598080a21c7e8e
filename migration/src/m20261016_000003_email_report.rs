use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261016_000001_student::Student, m20261016_000002_calculation::Calculation,
};

static IDX_EMAIL_REPORT_CALCULATION_ID: &str = "idx_email_report_calculation_id";
static FK_EMAIL_REPORT_STUDENT_ID: &str = "fk_email_report_student_id";
static FK_EMAIL_REPORT_CALCULATION_ID: &str = "fk_email_report_calculation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailReport::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailReport::Id))
                    .col(integer(EmailReport::StudentId))
                    .col(integer(EmailReport::CalculationId))
                    .col(timestamp(EmailReport::SentAt))
                    .col(json_binary(EmailReport::ReportData))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMAIL_REPORT_CALCULATION_ID)
                    .table(EmailReport::Table)
                    .col(EmailReport::CalculationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMAIL_REPORT_STUDENT_ID)
                    .from_tbl(EmailReport::Table)
                    .from_col(EmailReport::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMAIL_REPORT_CALCULATION_ID)
                    .from_tbl(EmailReport::Table)
                    .from_col(EmailReport::CalculationId)
                    .to_tbl(Calculation::Table)
                    .to_col(Calculation::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMAIL_REPORT_CALCULATION_ID)
                    .table(EmailReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMAIL_REPORT_STUDENT_ID)
                    .table(EmailReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMAIL_REPORT_CALCULATION_ID)
                    .table(EmailReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmailReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmailReport {
    Table,
    Id,
    StudentId,
    CalculationId,
    SentAt,
    ReportData,
}

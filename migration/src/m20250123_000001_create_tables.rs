use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学期表
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semesters::Year).integer().not_null())
                    .col(ColumnDef::new(Semesters::Season).integer().not_null())
                    .col(ColumnDef::new(Semesters::StartDate).date().not_null())
                    .col(ColumnDef::new(Semesters::EndDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教授表
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::FirstName).string().not_null())
                    .col(ColumnDef::new(Professors::LastName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Number).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Courses::OnDisplay)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程班级表
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sections::Number).string().not_null())
                    .col(ColumnDef::new(Sections::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Sections::SemesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sections::ProfessorId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建辅导员表
        manager
            .create_table(
                Table::create()
                    .table(Tutors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tutors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tutors::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tutors::FirstName).string().not_null())
                    .col(ColumnDef::new(Tutors::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Tutors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tutors::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建辅导员-课程关联表
        manager
            .create_table(
                Table::create()
                    .table(CanTutor::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CanTutor::TutorId).big_integer().not_null())
                    .col(ColumnDef::new(CanTutor::CourseId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(CanTutor::TutorId)
                            .col(CanTutor::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CanTutor::Table, CanTutor::TutorId)
                            .to(Tutors::Table, Tutors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CanTutor::Table, CanTutor::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建问题类型表
        manager
            .create_table(
                Table::create()
                    .table(ProblemTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProblemTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProblemTypes::Description)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建求助工单表
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::StudentEmail).string().not_null())
                    .col(ColumnDef::new(Tickets::StudentName).string().not_null())
                    .col(ColumnDef::new(Tickets::SectionId).big_integer().not_null())
                    .col(ColumnDef::new(Tickets::Assignment).string().not_null())
                    .col(ColumnDef::new(Tickets::Question).text().not_null())
                    .col(ColumnDef::new(Tickets::ProblemTypeId).big_integer().null())
                    .col(ColumnDef::new(Tickets::Status).string().null())
                    .col(ColumnDef::new(Tickets::TutorId).big_integer().null())
                    .col(
                        ColumnDef::new(Tickets::TimeCreated)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tickets::TimeClaimed).big_integer().null())
                    .col(ColumnDef::new(Tickets::TimeClosed).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tickets::Table, Tickets::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tickets::Table, Tickets::ProblemTypeId)
                            .to(ProblemTypes::Table, ProblemTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tickets::Table, Tickets::TutorId)
                            .to(Tutors::Table, Tutors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_course_id")
                    .table(Sections::Table)
                    .col(Sections::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_semester_id")
                    .table(Sections::Table)
                    .col(Sections::SemesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_section_id")
                    .table(Tickets::Table)
                    .col(Tickets::SectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_status")
                    .table(Tickets::Table)
                    .col(Tickets::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProblemTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CanTutor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tutors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Semesters {
    #[sea_orm(iden = "semesters")]
    Table,
    Id,
    Year,
    Season,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum Professors {
    #[sea_orm(iden = "professors")]
    Table,
    Id,
    FirstName,
    LastName,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Number,
    Name,
    OnDisplay,
}

#[derive(DeriveIden)]
enum Sections {
    #[sea_orm(iden = "sections")]
    Table,
    Id,
    Number,
    CourseId,
    SemesterId,
    ProfessorId,
}

#[derive(DeriveIden)]
enum Tutors {
    #[sea_orm(iden = "tutors")]
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    IsActive,
    IsSuperuser,
}

#[derive(DeriveIden)]
enum CanTutor {
    #[sea_orm(iden = "can_tutor")]
    Table,
    TutorId,
    CourseId,
}

#[derive(DeriveIden)]
enum ProblemTypes {
    #[sea_orm(iden = "problem_types")]
    Table,
    Id,
    Description,
}

#[derive(DeriveIden)]
enum Tickets {
    #[sea_orm(iden = "tickets")]
    Table,
    Id,
    StudentEmail,
    StudentName,
    SectionId,
    Assignment,
    Question,
    ProblemTypeId,
    Status,
    TutorId,
    TimeCreated,
    TimeClaimed,
    TimeClosed,
}

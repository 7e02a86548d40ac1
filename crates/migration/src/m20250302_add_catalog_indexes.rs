use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Every index created by this migration, for `down`
const INDEX_NAMES: [&str; 8] = [
    "uq_semesters_name",
    "uq_departments_name",
    "uq_categories_name",
    "uq_teachers_name",
    "uq_courses_code_main_teacher",
    "idx_teachers_pinyin",
    "idx_teachers_abbr_pinyin",
    "idx_course_teachers_teacher_id",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lookup keys used by the importer's get-or-create; the upserts
        // rely on these for ON CONFLICT targets
        manager
            .create_index(
                Index::create()
                    .name("uq_semesters_name")
                    .table(Semesters::Table)
                    .col(Semesters::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_departments_name")
                    .table(Departments::Table)
                    .col(Departments::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_categories_name")
                    .table(Categories::Table)
                    .col(Categories::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_teachers_name")
                    .table(Teachers::Table)
                    .col(Teachers::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // A course code is only unique per main teacher
        manager
            .create_index(
                Index::create()
                    .name("uq_courses_code_main_teacher")
                    .table(Courses::Table)
                    .col(Courses::Code)
                    .col(Courses::MainTeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Indexes on the phonetic keys for teacher search
        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_pinyin")
                    .table(Teachers::Table)
                    .col(Teachers::Pinyin)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_abbr_pinyin")
                    .table(Teachers::Table)
                    .col(Teachers::AbbrPinyin)
                    .to_owned(),
            )
            .await?;

        // The primary key covers lookups by course; this covers lookups by teacher
        manager
            .create_index(
                Index::create()
                    .name("idx_course_teachers_teacher_id")
                    .table(CourseTeachers::Table)
                    .col(CourseTeachers::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in INDEX_NAMES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Semesters {
    Table,
    Name,
}

#[derive(Iden)]
enum Departments {
    Table,
    Name,
}

#[derive(Iden)]
enum Categories {
    Table,
    Name,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Name,
    Pinyin,
    AbbrPinyin,
}

#[derive(Iden)]
enum Courses {
    Table,
    Code,
    MainTeacherId,
}

#[derive(Iden)]
enum CourseTeachers {
    Table,
    TeacherId,
}

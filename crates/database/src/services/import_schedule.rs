use crate::{
    entities::{courses, semesters},
    services::catalog::CatalogService,
};
use log::{error, info, warn};
use models::{
    phonetic::Transliterate,
    schedule::{ScheduleRow, SourceRow},
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

/// A row that was skipped, with enough context to fix the source file
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    pub line: u64,
    pub raw: String,
    pub message: String,
}

/// Outcome of importing one schedule file
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub created: usize,
    pub updated: usize,
    pub failures: Vec<RowFailure>,
}

impl ImportReport {
    /// `true` when no row was skipped
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, line: u64, raw: String, message: String) {
        error!("Failed to import line {line}: {raw}");
        error!("  Error: {message}");
        self.failures.push(RowFailure { line, raw, message });
    }
}

/// What a successfully imported row did to its course
enum RowOutcome {
    Created(courses::Model),
    Updated,
}

pub struct ScheduleImportService;

impl ScheduleImportService {
    /// Imports a parsed schedule file for one semester
    ///
    /// The whole file is written in one transaction that commits only
    /// after the last row. Each row runs in its own savepoint: a row that
    /// fails to parse or to save is rolled back, recorded in the report,
    /// and the import moves on to the next row.
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `semester_name` - Label of the semester being imported, created if new
    /// * `rows` - The file's data rows, in file order
    /// * `transliterator` - Produces phonetic keys for new teachers
    ///
    /// # Returns
    /// Counts of created and updated courses plus every skipped row.
    /// Only errors outside a row (opening or committing the transaction,
    /// resolving the semester) are returned as `Err`.
    pub async fn import(
        db: &DatabaseConnection,
        semester_name: &str,
        rows: Vec<SourceRow>,
        transliterator: &dyn Transliterate,
    ) -> Result<ImportReport, DbErr> {
        let txn = db.begin().await?;

        let semester = Self::resolve_semester(&txn, semester_name).await?;
        let mut report = ImportReport::default();

        info!("Importing {} rows into semester {semester_name}", rows.len());

        for source in rows {
            let raw = source.raw_line();
            let SourceRow { line, parsed, .. } = source;
            let row = match parsed {
                Ok(row) => row,
                Err(e) => {
                    report.record_failure(line, raw, e.to_string());
                    continue;
                }
            };

            let savepoint = txn.begin().await?;
            match Self::import_row(&savepoint, &row, semester.id, transliterator).await {
                Ok(outcome) => {
                    savepoint.commit().await?;
                    match outcome {
                        RowOutcome::Created(course) => {
                            report.created += 1;
                            info!("Created course: {} {}", course.code, course.name);
                        }
                        RowOutcome::Updated => report.updated += 1,
                    }
                }
                Err(e) => {
                    savepoint.rollback().await?;
                    report.record_failure(line, raw, e.to_string());
                }
            }
        }

        txn.commit().await?;

        if !report.is_clean() {
            warn!("Skipped {} rows", report.failures.len());
        }
        info!(
            "Import finished: {} courses created, {} courses updated",
            report.created, report.updated
        );

        Ok(report)
    }

    async fn resolve_semester<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<semesters::Model, DbErr> {
        let (semester, created) = CatalogService::get_or_create_semester(db, name).await?;
        if created {
            info!("Created semester: {name}");
        }

        Ok(semester)
    }

    /// Writes a single row: department, category, main teacher, course,
    /// then the category link and the whole teacher group
    async fn import_row<C: ConnectionTrait>(
        db: &C,
        row: &ScheduleRow,
        semester_id: Uuid,
        transliterator: &dyn Transliterate,
    ) -> Result<RowOutcome, DbErr> {
        let (department, _) = CatalogService::get_or_create_department(db, &row.department).await?;
        let (category, _) = CatalogService::get_or_create_category(db, &row.category).await?;

        let main_instructor = row
            .main_instructor()
            .ok_or_else(|| DbErr::Custom(format!("course {} has no instructor", row.code)))?;

        let main_teacher = CatalogService::resolve_teacher(
            db,
            main_instructor,
            department.id,
            semester_id,
            transliterator,
        )
        .await?;

        let (course, created) =
            CatalogService::upsert_course(db, row, main_teacher.id, department.id, semester_id)
                .await?;

        CatalogService::link_category(db, course.id, category.id).await?;
        CatalogService::link_teacher(db, course.id, main_teacher.id).await?;

        // The main teacher is already resolved and linked
        for name in row.instructors.iter().skip(1) {
            let teacher =
                CatalogService::resolve_teacher(db, name, department.id, semester_id, transliterator)
                    .await?;
            CatalogService::link_teacher(db, course.id, teacher.id).await?;
        }

        Ok(if created {
            RowOutcome::Created(course)
        } else {
            RowOutcome::Updated
        })
    }
}

use crate::entities::{
    categories, course_categories, course_teachers, courses, departments, semesters, teachers,
};
use chrono::Utc;
use log::debug;
use models::{
    phonetic::{PhoneticKeys, Transliterate},
    schedule::ScheduleRow,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, prelude::DateTime, sea_query::OnConflict,
};
use uuid::Uuid;

/// Get-or-create and upsert primitives for the course catalog
///
/// Every method accepts any connection, so callers decide the
/// transaction (or savepoint) the writes belong to.
pub struct CatalogService;

impl CatalogService {
    /// Looks up a semester by name, creating it as available if absent
    ///
    /// # Returns
    /// The semester and whether it was created by this call
    pub async fn get_or_create_semester<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<(semesters::Model, bool), DbErr> {
        let semester = semesters::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            available: Set(true),
            created_at: Set(now()),
        };

        find_or_insert(db, semesters::Column::Name, name, semester).await
    }

    pub async fn get_or_create_department<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<(departments::Model, bool), DbErr> {
        let department = departments::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            created_at: Set(now()),
        };

        find_or_insert(db, departments::Column::Name, name, department).await
    }

    pub async fn get_or_create_category<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<(categories::Model, bool), DbErr> {
        let category = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            created_at: Set(now()),
        };

        find_or_insert(db, categories::Column::Name, name, category).await
    }

    /// Resolves a teacher by name
    ///
    /// A new teacher gets the department, both phonetic keys and the
    /// semester. An existing teacher only has its last semester moved
    /// forward; its department and keys are left as they are.
    pub async fn resolve_teacher<C: ConnectionTrait>(
        db: &C,
        name: &str,
        department_id: Uuid,
        semester_id: Uuid,
        transliterator: &dyn Transliterate,
    ) -> Result<teachers::Model, DbErr> {
        let keys = PhoneticKeys::for_name(name, transliterator);
        let timestamp = now();
        let teacher = teachers::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            department_id: Set(Some(department_id)),
            pinyin: Set(keys.pinyin),
            abbr_pinyin: Set(keys.abbr_pinyin),
            last_semester_id: Set(Some(semester_id)),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        };

        let (teacher, created) = find_or_insert(db, teachers::Column::Name, name, teacher).await?;
        if created {
            debug!("Created teacher {name} ({})", teacher.pinyin);
            return Ok(teacher);
        }

        let mut teacher = teacher.into_active_model();
        teacher.last_semester_id = Set(Some(semester_id));
        teacher.updated_at = Set(timestamp);
        teacher.update(db).await
    }

    /// Creates or overwrites the course identified by `(row.code, main_teacher_id)`
    ///
    /// An existing course takes this row's name, English name, credit,
    /// department and semester.
    ///
    /// # Returns
    /// The stored course and whether it was created by this call
    pub async fn upsert_course<C: ConnectionTrait>(
        db: &C,
        row: &ScheduleRow,
        main_teacher_id: Uuid,
        department_id: Uuid,
        semester_id: Uuid,
    ) -> Result<(courses::Model, bool), DbErr> {
        let existing = courses::Entity::find()
            .filter(courses::Column::Code.eq(row.code.as_str()))
            .filter(courses::Column::MainTeacherId.eq(main_teacher_id))
            .one(db)
            .await?;
        let timestamp = now();

        match existing {
            Some(course) => {
                let mut course = course.into_active_model();
                course.name = Set(row.name.clone());
                course.english_name = Set(row.english_name.clone());
                course.credit = Set(row.credit);
                course.department_id = Set(department_id);
                course.last_semester_id = Set(Some(semester_id));
                course.updated_at = Set(timestamp);

                Ok((course.update(db).await?, false))
            }
            None => {
                // The unique (code, main_teacher_id) index rejects a racing duplicate
                let course = courses::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    code: Set(row.code.clone()),
                    main_teacher_id: Set(main_teacher_id),
                    name: Set(row.name.clone()),
                    english_name: Set(row.english_name.clone()),
                    credit: Set(row.credit),
                    department_id: Set(department_id),
                    last_semester_id: Set(Some(semester_id)),
                    created_at: Set(timestamp),
                    updated_at: Set(timestamp),
                };

                Ok((course.insert(db).await?, true))
            }
        }
    }

    /// Adds a category to a course's category set
    ///
    /// # Returns
    /// `true` if the link did not exist before
    pub async fn link_category<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
        category_id: Uuid,
    ) -> Result<bool, DbErr> {
        let link = course_categories::ActiveModel {
            course_id: Set(course_id),
            category_id: Set(category_id),
        };

        let inserted = course_categories::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    course_categories::Column::CourseId,
                    course_categories::Column::CategoryId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(inserted > 0)
    }

    /// Adds a teacher to a course's teacher group
    ///
    /// # Returns
    /// `true` if the link did not exist before
    pub async fn link_teacher<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<bool, DbErr> {
        let link = course_teachers::ActiveModel {
            course_id: Set(course_id),
            teacher_id: Set(teacher_id),
        };

        let inserted = course_teachers::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    course_teachers::Column::CourseId,
                    course_teachers::Column::TeacherId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(inserted > 0)
    }
}

fn now() -> DateTime {
    Utc::now().naive_utc()
}

/// Selects the row whose `key` column equals `value`, inserting `model` if there is none
///
/// The insert skips on a unique-key conflict and the row is selected
/// again, so a concurrent writer creating the same key is not an error.
async fn find_or_insert<C, E, A>(
    db: &C,
    key: E::Column,
    value: &str,
    model: A,
) -> Result<(E::Model, bool), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E>,
    E::Model: IntoActiveModel<A>,
{
    if let Some(existing) = E::find().filter(key.eq(value)).one(db).await? {
        return Ok((existing, false));
    }

    let inserted = E::insert(model)
        .on_conflict(OnConflict::column(key).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    let stored = E::find()
        .filter(key.eq(value))
        .one(db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!("{} '{value}' after insert", E::default().table_name()))
        })?;

    Ok((stored, inserted > 0))
}

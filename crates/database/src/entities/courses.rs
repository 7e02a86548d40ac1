use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A course offering, identified by `(code, main_teacher_id)`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub main_teacher_id: Uuid,
    pub name: String,
    pub english_name: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub credit: f64,
    pub department_id: Uuid,
    pub last_semester_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::MainTeacherId",
        to = "super::teachers::Column::Id"
    )]
    MainTeacher,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::LastSemesterId",
        to = "super::semesters::Column::Id"
    )]
    LastSemester,
    #[sea_orm(has_many = "super::course_categories::Entity")]
    CourseCategories,
    #[sea_orm(has_many = "super::course_teachers::Entity")]
    CourseTeachers,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LastSemester.def()
    }
}

impl Related<super::course_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseCategories.def()
    }
}

impl Related<super::course_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseTeachers.def()
    }
}

// Many-to-many relationship with categories
impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_categories::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_categories::Relation::Course.def().rev())
    }
}

// Many-to-many relationship with the teacher group; the main teacher is
// reached through `Relation::MainTeacher`
impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_teachers::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_teachers::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Course nature, e.g. compulsory or elective
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_categories::Entity")]
    CourseCategories,
}

impl Related<super::course_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseCategories.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_categories::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_categories::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! 项目报告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_username: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentUsername",
        to = "super::users::Column::Username"
    )]
    Student,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_project(self) -> crate::models::projects::Project {
        use crate::models::projects::{Project, ProjectStatus};

        Project {
            id: self.id,
            student_username: self.student_username,
            title: self.title,
            description: self.description,
            status: self
                .status
                .parse::<ProjectStatus>()
                .unwrap_or(ProjectStatus::Draft),
            created_at: super::from_millis(self.created_at),
            updated_at: super::from_millis(self.updated_at),
        }
    }
}

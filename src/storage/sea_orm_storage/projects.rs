use super::SeaOrmStorage;
use crate::entity::projects::{ActiveModel, Column, Entity as Projects};
use crate::errors::{Result, TeknofestError};
use crate::models::projects::{
    Project, ProjectStatus,
    requests::{CreateProjectRequest, UpdateProjectRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建项目
    pub async fn create_project_impl(&self, req: CreateProjectRequest) -> Result<Project> {
        let now = chrono::Utc::now().timestamp_millis();

        let model = ActiveModel {
            student_username: Set(req.student_username),
            title: Set(req.title),
            description: Set(req.description),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("创建项目失败: {e}")))?;

        Ok(result.into_project())
    }

    /// 通过 ID 获取项目
    pub async fn get_project_by_id_impl(&self, id: i64) -> Result<Option<Project>> {
        let result = Projects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询项目失败: {e}")))?;

        Ok(result.map(|m| m.into_project()))
    }

    /// 更新项目标题、内容与状态
    pub async fn update_project_impl(
        &self,
        id: i64,
        update: UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        if self.get_project_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            title: Set(update.title),
            description: Set(update.description),
            status: Set(update.status.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp_millis()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("更新项目失败: {e}")))?;

        Ok(Some(result.into_project()))
    }

    /// 删除项目
    pub async fn delete_project_impl(&self, id: i64) -> Result<bool> {
        let result = Projects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("删除项目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生的全部项目（最近更新在前）
    pub async fn list_projects_by_student_impl(
        &self,
        student_username: &str,
    ) -> Result<Vec<Project>> {
        let projects = Projects::find()
            .filter(Column::StudentUsername.eq(student_username))
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询项目列表失败: {e}")))?;

        Ok(projects.into_iter().map(|m| m.into_project()).collect())
    }

    /// 一组学生已提交的项目
    pub async fn list_submitted_projects_impl(
        &self,
        student_usernames: &[String],
    ) -> Result<Vec<Project>> {
        if student_usernames.is_empty() {
            return Ok(Vec::new());
        }

        let projects = Projects::find()
            .filter(Column::StudentUsername.is_in(student_usernames.iter().cloned()))
            .filter(Column::Status.eq(ProjectStatus::SUBMITTED))
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                TeknofestError::database_operation(format!("查询已提交项目失败: {e}"))
            })?;

        Ok(projects.into_iter().map(|m| m.into_project()).collect())
    }
}

use super::SeaOrmStorage;
use crate::entity::prelude::{ChatHistory, Messages, Projects};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::entity::{chat_history, messages, projects};
use crate::errors::{Result, TeknofestError};
use crate::models::{
    PaginationInfo,
    users::{
        User, UserRole,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp_millis();

        let model = ActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password_hash),
            role: Set(req.role.to_string()),
            advisor_username: Set(req.advisor_username),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                TeknofestError::validation("Bu kullanıcı adı alınmış.")
            } else {
                TeknofestError::database_operation(format!("创建用户失败: {e}"))
            }
        })?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Users::find();

        // 搜索条件：用户名或指导教师
        if let Some(ref search) = query.search {
            select = select.filter(
                Condition::any()
                    .add(Column::Username.contains(search))
                    .add(Column::AdvisorUsername.contains(search)),
            );
        }

        // 角色筛选
        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TeknofestError::database_operation(format!("查询用户总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TeknofestError::database_operation(format!("查询用户页数失败: {e}"))
        })?;

        let users = paginator.fetch_page(page - 1).await.map_err(|e| {
            TeknofestError::database_operation(format!("查询用户列表失败: {e}"))
        })?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出指定教师指导的学生
    pub async fn list_students_by_advisor_impl(&self, advisor_username: &str) -> Result<Vec<User>> {
        let students = Users::find()
            .filter(Column::AdvisorUsername.eq(advisor_username))
            .filter(Column::Role.eq(UserRole::STUDENT))
            .order_by_asc(Column::Username)
            .all(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_user()).collect())
    }

    /// 统计某角色的用户数量
    pub async fn count_users_by_role_impl(&self, role: UserRole) -> Result<u64> {
        Users::find()
            .filter(Column::Role.eq(role.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("统计用户数量失败: {e}")))
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp_millis();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TeknofestError::database_operation(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        if self.get_user_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp_millis()),
            ..Default::default()
        };

        if let Some(password_hash) = update.password_hash {
            model.password_hash = Set(password_hash);
        }

        if let Some(advisor_username) = update.advisor_username {
            model.advisor_username = Set(advisor_username);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("更新用户失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户，同一事务内清理其项目、对话记录和留言
    pub async fn delete_user_impl(&self, username: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TeknofestError::database_operation(format!("开启事务失败: {e}")))?;

        ChatHistory::delete_many()
            .filter(chat_history::Column::Username.eq(username))
            .exec(&txn)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("删除对话记录失败: {e}")))?;

        Messages::delete_many()
            .filter(
                Condition::any()
                    .add(messages::Column::FromUsername.eq(username))
                    .add(messages::Column::ToUsername.eq(username)),
            )
            .exec(&txn)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("删除留言失败: {e}")))?;

        Projects::delete_many()
            .filter(projects::Column::StudentUsername.eq(username))
            .exec(&txn)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("删除项目失败: {e}")))?;

        let result = Users::delete_many()
            .filter(Column::Username.eq(username))
            .exec(&txn)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("删除用户失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TeknofestError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

use crate::infrastructure::db::DbPool;
use crate::{
    domain::resource::{RelatedData, Resource},
    error::{AppError, AppResult},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ResourceRepository {
    pool: Arc<DbPool>,
}

impl ResourceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get all resources, newest first
    pub async fn find_all(&self) -> AppResult<Vec<Resource>> {
        let pool = self.pool.as_ref();
        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM resources
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(resources)
    }

    /// Get a resource by ID
    pub async fn find_by_id(&self, resource_id: Uuid) -> AppResult<Option<Resource>> {
        let pool = self.pool.as_ref();
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(resource_id)
        .fetch_optional(pool)
        .await?;

        Ok(resource)
    }

    /// Create a new resource
    pub async fn create(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Resource> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let resource = Resource {
            id,
            name: name.to_string(),
            description: description.map(|s| s.to_string()),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO resources (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(resource.id)
        .bind(&resource.name)
        .bind(&resource.description)
        .bind(resource.created_at)
        .bind(resource.updated_at)
        .execute(pool)
        .await?;

        Ok(resource)
    }

    /// Update a resource (name, description, updated_at)
    pub async fn update(&self, resource: &Resource) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            UPDATE resources
            SET name = $1, description = $2, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(&resource.name)
        .bind(&resource.description)
        .bind(resource.updated_at)
        .bind(resource.id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a resource, returns whether a row was removed
    pub async fn delete(&self, resource_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM resources
            WHERE id = $1
            "#,
        )
        .bind(resource_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert a resource and its related row inside one transaction.
    ///
    /// `info` is bound as-is so a null value hits the NOT NULL constraint,
    /// which aborts the transaction and rolls back the resource insert too.
    pub async fn create_with_related(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        related_id: Uuid,
        info: Option<&str>,
    ) -> AppResult<(Resource, RelatedData)> {
        let now = chrono::Utc::now();

        let resource = Resource {
            id,
            name: name.to_string(),
            description: description.map(|s| s.to_string()),
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO resources (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(resource.id)
        .bind(&resource.name)
        .bind(&resource.description)
        .bind(resource.created_at)
        .bind(resource.updated_at)
        .execute(&mut *tx)
        .await?;

        let related = sqlx::query_as::<_, RelatedData>(
            r#"
            INSERT INTO related_data (id, resource_id, info, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, resource_id, info, created_at
            "#,
        )
        .bind(related_id)
        .bind(resource.id)
        .bind(info)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if matches!(db_err.kind(), sqlx::error::ErrorKind::NotNullViolation) {
                    return AppError::BadRequest("related_data.info must not be null".to_string());
                }
            }
            AppError::Database(e)
        })?;

        tx.commit().await?;

        Ok((resource, related))
    }
}

// db/db.rs
use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

/// Collection names, mirroring the hosted document store this service fronts.
pub mod collections {
    pub const JOBS: &str = "jobs";
    pub const QUESTIONS: &str = "questions";
    pub const APPLICATIONS: &str = "applications";
    pub const USERS: &str = "users";
    pub const PROFILES: &str = "profiles";
    pub const PROFILE_IMAGES: &str = "profileImages";
    pub const PROFILE_IMAGE_SET_AS: &str = "profileImageSetAs";
    pub const EDUCATIONS: &str = "educations";
    pub const WORK_EXPERIENCES: &str = "workExperiences";
    pub const BUSINESS_PROFILES: &str = "businessProfiles";
    pub const PRODUCTS: &str = "products";
    pub const COLOR_VARIANTS: &str = "colorVariants";
    pub const SIZE_VARIANTS: &str = "sizeVariants";
    pub const VARIANTS: &str = "variants";
    pub const SUB_IMAGES: &str = "subImages";
    pub const OWNERSHIP: &str = "ownership";
    pub const COMMUNITY_MEMBERS: &str = "communityMembers";
    pub const COMMUNITY_POSTS: &str = "communityVariantDetails";
    pub const COMMUNITY_POST_MEDIA: &str = "communityVariantDetailsSummary";
}

/// Thin client over the document store. Every entity is a schemaless JSON
/// document inside a named collection, queried by equality filters on
/// serialized field paths. Durability and query evaluation live here; the
/// domain layer (`JobExt`, `UserExt`, ...) never sees SQL.
#[derive(Clone)]
pub struct DBClient {
    pub pool: Pool<Sqlite>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("pool", &"Pool<Sqlite>")
            .finish()
    }
}

pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

fn decode<T: DeserializeOwned>(data: String) -> Result<T, sqlx::Error> {
    serde_json::from_str::<T>(&data).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn encode<T: Serialize>(doc: &T) -> Result<String, sqlx::Error> {
    serde_json::to_string(doc).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl DBClient {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        DBClient { pool }
    }

    /// Create the backing table on first use. There is no schema beyond
    /// this; documents carry their own shape.
    pub async fn init_collections(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id         TEXT NOT NULL,
                data       TEXT NOT NULL,
                created_at TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_collection_created_at
            ON documents (collection, created_at)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn insert_document<T: Serialize + Sync>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> Result<(), sqlx::Error> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(encode(doc)?)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_document<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT data FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(decode(row.get::<String, _>("data"))?)),
            None => Ok(None),
        }
    }

    /// Last writer wins: the full document body is overwritten, no version
    /// check.
    pub async fn update_document<T: Serialize + Sync>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE documents SET data = ?
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(encode(doc)?)
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }

    /// Deleting a missing document is a no-op, matching the store's SDK.
    pub async fn delete_document(&self, collection: &str, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Equality-filtered find. `filters` pairs a serialized field path
    /// (e.g. `basic_info.userId`) with the expected string value.
    /// `newest_first` orders by creation time descending.
    pub async fn find_documents<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
        newest_first: bool,
    ) -> Result<Vec<T>, sqlx::Error> {
        let mut sql = String::from("SELECT data FROM documents WHERE collection = ?");
        for (path, _) in filters {
            sql.push_str(&format!(" AND json_extract(data, '$.{}') = ?", path));
        }
        if newest_first {
            sql.push_str(" ORDER BY created_at DESC");
        }

        let mut query = sqlx::query(&sql).bind(collection);
        for (_, value) in filters {
            query = query.bind(*value);
        }

        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| decode(row.get::<String, _>("data")))
            .collect()
    }

    /// Set-membership find, the batched-join primitive: all documents whose
    /// field is one of `values`, fetched in a single query.
    pub async fn find_documents_in<T: DeserializeOwned>(
        &self,
        collection: &str,
        field_path: &str,
        values: &[String],
    ) -> Result<Vec<T>, sqlx::Error> {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; values.len()].join(", ");
        let sql = format!(
            "SELECT data FROM documents WHERE collection = ? \
             AND json_extract(data, '$.{}') IN ({})",
            field_path, placeholders
        );

        let mut query = sqlx::query(&sql).bind(collection);
        for value in values {
            query = query.bind(value);
        }

        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| decode(row.get::<String, _>("data")))
            .collect()
    }

    pub async fn count_documents(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
    ) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) AS cnt FROM documents WHERE collection = ?");
        for (path, _) in filters {
            sql.push_str(&format!(" AND json_extract(data, '$.{}') = ?", path));
        }

        let mut query = sqlx::query(&sql).bind(collection);
        for (_, value) in filters {
            query = query.bind(*value);
        }

        let row = query.fetch_one(&self.pool).await?;
        Ok(row.get::<i64, _>("cnt"))
    }
}

//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use roster_core::{Member, MemberQuery, MemberRepository, MemberRole, NewMember, RepoResult, RoleFilter};

use crate::mappers::MemberWrite;
use crate::models::MemberModel;

use super::error::{map_db_error, member_not_found};

const MEMBER_COLUMNS: &str = "id, firstname, lastname, imageurl, role, sociallinks, priority";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the filtered listing query
    fn listing_query(query: &MemberQuery) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {MEMBER_COLUMNS} FROM members WHERE TRUE"));

        match query.role {
            RoleFilter::Any => {}
            // Rows without a recognized role count as regular members
            RoleFilter::Only(MemberRole::Member) => {
                builder.push(" AND (role IS NULL OR role NOT IN (");
                builder.push_bind(MemberRole::FOUNDER);
                builder.push(", ");
                builder.push_bind(MemberRole::LEADER);
                builder.push("))");
            }
            RoleFilter::Only(role) => {
                builder.push(" AND role = ");
                builder.push_bind(role.as_str());
            }
        }

        if let Some(lastname) = &query.lastname {
            builder.push(" AND lastname = ");
            builder.push_bind(lastname.as_str());
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like(search));
            builder.push(" AND (firstname ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR lastname ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY lastname ASC NULLS LAST, id ASC");
        builder
    }
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find(&self, query: &MemberQuery) -> RepoResult<Vec<Member>> {
        let rows = Self::listing_query(query)
            .build_query_as::<MemberModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberModel>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, firstname: &str, lastname: Option<&str>) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(&format!(
            r#"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE lower(firstname) = lower($1)
              AND lower(coalesce(lastname, '')) = lower(coalesce($2, ''))
            ORDER BY id
            "#
        ))
        .bind(firstname)
        .bind(lastname)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self, member), fields(firstname = %member.firstname))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let write = MemberWrite::new(member);

        let row = sqlx::query_as::<_, MemberModel>(&format!(
            r#"
            INSERT INTO members (firstname, lastname, imageurl, role, sociallinks, priority)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(write.firstname)
        .bind(write.lastname)
        .bind(write.imageurl)
        .bind(write.role)
        .bind(write.sociallinks)
        .bind(write.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Member::from(row))
    }

    #[instrument(skip(self, member))]
    async fn update(&self, id: i64, member: &NewMember) -> RepoResult<Member> {
        let write = MemberWrite::new(member);

        let row = sqlx::query_as::<_, MemberModel>(&format!(
            r#"
            UPDATE members
            SET firstname = $2, lastname = $3, imageurl = $4, role = $5, sociallinks = $6, priority = $7
            WHERE id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(write.firstname)
        .bind(write.lastname)
        .bind(write.imageurl)
        .bind(write.role)
        .bind(write.sociallinks)
        .bind(write.priority)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Member::from).ok_or_else(|| member_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

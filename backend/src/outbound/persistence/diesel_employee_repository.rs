//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! Reads run outside a transaction. Mutations run inside one so any failure
//! between the statement and commit rolls back. Every call, including the
//! pool checkout, is bounded by the pool's query timeout.
//!
//! Reads skip stored rows whose name or role fails domain validation, so one
//! hand-edited row cannot turn `list` into a failure. Such rows are logged.

use std::future::Future;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::warn;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeFields, EmployeeRow, readable_employee};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        work: F,
    ) -> Result<T, EmployeeRepositoryError>
    where
        F: Future<Output = Result<T, EmployeeRepositoryError>>,
    {
        let limit = self.pool.query_timeout();
        tokio::time::timeout(limit, work).await.unwrap_or_else(|_| {
            warn!(
                %operation,
                timeout_ms = limit.as_millis(),
                "employee repository call timed out"
            );
            Err(EmployeeRepositoryError::timeout(operation))
        })
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        self.bounded("list", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let rows: Vec<EmployeeRow> = employees::table
                .order(employees::id.asc())
                .select(EmployeeRow::as_select())
                .load(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, "list"))?;

            Ok(rows.into_iter().filter_map(readable_employee).collect())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        self.bounded("find_by_id", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let row = employees::table
                .filter(employees::id.eq(id.get()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(&mut conn)
                .await
                .optional()
                .map_err(|err| map_diesel_error(err, "find_by_id"))?;

            Ok(row.and_then(readable_employee))
        })
        .await
    }

    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        self.bounded("insert", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let fields = EmployeeFields::from(draft);

            let row = conn
                .transaction(|conn| {
                    async move {
                        diesel::insert_into(employees::table)
                            .values(&fields)
                            .returning(EmployeeRow::as_returning())
                            .get_result::<EmployeeRow>(conn)
                            .await
                    }
                    .scope_boxed()
                })
                .await
                .map_err(|err| map_diesel_error(err, "insert"))?;

            Employee::try_from(row)
        })
        .await
    }

    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        self.bounded("update", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let fields = EmployeeFields::from(draft);

            let row = conn
                .transaction(|conn| {
                    async move {
                        diesel::update(employees::table.filter(employees::id.eq(id.get())))
                            .set(&fields)
                            .returning(EmployeeRow::as_returning())
                            .get_result::<EmployeeRow>(conn)
                            .await
                            .optional()
                    }
                    .scope_boxed()
                })
                .await
                .map_err(|err| map_diesel_error(err, "update"))?;

            row.map(Employee::try_from).transpose()
        })
        .await
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        self.bounded("delete", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let affected = conn
                .transaction(|conn| {
                    async move {
                        diesel::delete(employees::table.filter(employees::id.eq(id.get())))
                            .execute(conn)
                            .await
                    }
                    .scope_boxed()
                })
                .await
                .map_err(|err| map_diesel_error(err, "delete"))?;

            Ok(affected > 0)
        })
        .await
    }
}

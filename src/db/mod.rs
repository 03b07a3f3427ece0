pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeePage, NewEmployee};

pub use memory::MemoryEmployeeStore;
pub use postgres::PgEmployeeStore;

/// Persistence for employee records.
///
/// Every method is one unit of work: whatever it acquires is released before
/// it returns, and writes are only visible once the method succeeds.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, AppError>;

    /// `page` is 1-based; pages past the end come back with empty `data`.
    async fn list(&self, page: i64, page_size: i64) -> Result<EmployeePage, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Employee, AppError>;

    async fn get_by_department(&self, department: &str) -> Result<Vec<Employee>, AppError>;

    async fn update_department(&self, id: i64, department: &str) -> Result<Employee, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub(crate) fn employee_not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

pub(crate) fn check_page(page: i64, page_size: i64) -> Result<(), AppError> {
    if page < 1 {
        return Err(AppError::Validation("page must be greater than 0".to_string()));
    }
    if page_size < 1 {
        return Err(AppError::Validation("page_size must be greater than 0".to_string()));
    }
    Ok(())
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

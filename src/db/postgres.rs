use async_trait::async_trait;
use sqlx::PgPool;
use crate::db::{check_page, employee_not_found, EmployeeStore};
use crate::errors::AppError;
use crate::models::employee::{page_offset, Employee, EmployeePage, NewEmployee};

const EMPLOYEE_COLUMNS: &str =
    "id, employee_name, employee_email, employee_department, employee_role, employee_joining_date";

/// `employee_record` table in PostgreSQL.
///
/// Each operation runs in its own transaction. A transaction that is dropped
/// without `commit` rolls back, so early returns leave the table untouched.
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, AppError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO employee_record (employee_name, employee_email, employee_department, employee_role, employee_joining_date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        let created = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.employee_name)
            .bind(&employee.employee_email)
            .bind(&employee.employee_department)
            .bind(&employee.employee_role)
            .bind(employee.employee_joining_date)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<EmployeePage, AppError> {
        check_page(page, page_size)?;
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "SELECT {} FROM employee_record ORDER BY id LIMIT $1 OFFSET $2",
            EMPLOYEE_COLUMNS
        );
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(&mut *tx)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee_record")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(EmployeePage::new(page, page_size, total, employees))
    }

    async fn get_by_id(&self, id: i64) -> Result<Employee, AppError> {
        let sql = format!("SELECT {} FROM employee_record WHERE id = $1", EMPLOYEE_COLUMNS);
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(employee_not_found)
    }

    async fn get_by_department(&self, department: &str) -> Result<Vec<Employee>, AppError> {
        let sql = format!(
            "SELECT {} FROM employee_record WHERE employee_department = $1 ORDER BY id",
            EMPLOYEE_COLUMNS
        );
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(department)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn update_department(&self, id: i64, department: &str) -> Result<Employee, AppError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "UPDATE employee_record SET employee_department = $1 WHERE id = $2 RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        let updated = sqlx::query_as::<_, Employee>(&sql)
            .bind(department)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(employee_not_found)?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM employee_record WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(employee_not_found());
        }

        tx.commit().await?;
        Ok(())
    }
}

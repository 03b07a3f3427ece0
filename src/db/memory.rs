use std::collections::BTreeMap;
use async_trait::async_trait;
use parking_lot::Mutex;
use crate::db::{check_page, employee_not_found, EmployeeStore};
use crate::errors::AppError;
use crate::models::employee::{page_offset, Employee, EmployeePage, NewEmployee};

/// In-process table, keyed by identity so iteration follows insertion order.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    table: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Employee>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, AppError> {
        let mut table = self.table.lock();

        if table.rows.values().any(|row| row.employee_email == employee.employee_email) {
            return Err(AppError::Constraint("employee_email already exists".to_string()));
        }

        table.last_id += 1;
        let created = employee.into_employee(table.last_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<EmployeePage, AppError> {
        check_page(page, page_size)?;
        let table = self.table.lock();

        let offset = usize::try_from(page_offset(page, page_size)).unwrap_or(usize::MAX);
        let limit = usize::try_from(page_size).unwrap_or(usize::MAX);
        let employees = table.rows.values().skip(offset).take(limit).cloned().collect();
        let total = table.rows.len() as i64;

        Ok(EmployeePage::new(page, page_size, total, employees))
    }

    async fn get_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.table.lock().rows.get(&id).cloned().ok_or_else(employee_not_found)
    }

    async fn get_by_department(&self, department: &str) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .table
            .lock()
            .rows
            .values()
            .filter(|row| row.employee_department.as_deref() == Some(department))
            .cloned()
            .collect())
    }

    async fn update_department(&self, id: i64, department: &str) -> Result<Employee, AppError> {
        let mut table = self.table.lock();
        let row = table.rows.get_mut(&id).ok_or_else(employee_not_found)?;
        row.employee_department = Some(department.to_string());
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.table
            .lock()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(employee_not_found)
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "Id")]
    pub id: i64,
    pub employee_name: String,
    pub employee_email: String,
    pub employee_department: Option<String>,
    pub employee_role: Option<String>,
    pub employee_joining_date: DateTime<Utc>,
}

/// A validated employee that has not been assigned an identity yet.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_name: String,
    pub employee_email: String,
    pub employee_department: Option<String>,
    pub employee_role: Option<String>,
    pub employee_joining_date: DateTime<Utc>,
}

impl NewEmployee {
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            employee_name: self.employee_name,
            employee_email: self.employee_email,
            employee_department: self.employee_department,
            employee_role: self.employee_role,
            employee_joining_date: self.employee_joining_date,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EmployeePage {
    pub page: i64,
    pub per_page: i64,
    pub total_employees: i64,
    pub total_pages: i64,
    pub data: Vec<Employee>,
}

impl EmployeePage {
    pub fn new(page: i64, per_page: i64, total_employees: i64, data: Vec<Employee>) -> Self {
        Self {
            page,
            per_page,
            total_employees,
            total_pages: total_pages(total_employees, per_page),
            data,
        }
    }
}

/// Offset of the first row on `page` (1-based).
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(per_page)
}

pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn page_offset_starts_at_zero() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(3, 10), 20);
        assert_eq!(page_offset(i64::MAX, 10), i64::MAX);
    }

    #[test]
    fn identity_serializes_as_capitalized_id() {
        let employee = NewEmployee {
            employee_name: "A".to_string(),
            employee_email: "a@x.com".to_string(),
            employee_department: None,
            employee_role: None,
            employee_joining_date: Utc::now(),
        }
        .into_employee(7);

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["Id"], 7);
        assert!(json["employee_department"].is_null());
        assert!(json.get("id").is_none());
    }
}

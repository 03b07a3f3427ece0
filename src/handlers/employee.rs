use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use log::info;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;
use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::NewEmployee;
use crate::utils::auth::Authenticated;
use crate::utils::datetime::deserialize_joining_date;
use crate::utils::validation::{validate_department, validate_id, validate_joining_date, validate_payload};

const PAGE_SIZE: i64 = 10;

#[derive(Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(length(min = 1))]
    employee_name: String,
    #[validate(email)]
    employee_email: String,
    #[validate(custom = "validate_department")]
    employee_department: Option<String>,
    employee_role: Option<String>,
    #[serde(deserialize_with = "deserialize_joining_date")]
    #[validate(custom = "validate_joining_date")]
    employee_joining_date: DateTime<Utc>,
}

impl From<CreateEmployee> for NewEmployee {
    fn from(payload: CreateEmployee) -> Self {
        NewEmployee {
            employee_name: payload.employee_name,
            employee_email: payload.employee_email,
            employee_department: payload.employee_department,
            employee_role: payload.employee_role,
            employee_joining_date: payload.employee_joining_date,
        }
    }
}

// Unlike creation, a blank department is accepted here.
#[derive(Deserialize)]
pub struct EmployeeUpdate {
    employee_department: String,
}

#[derive(Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1))]
    page: Option<i64>,
}

pub async fn create_employee(
    _auth: Authenticated,
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<CreateEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let employee = store.create(new_employee.into_inner().into()).await?;
    info!("Created employee {}", employee.id);

    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employees(
    _auth: Authenticated,
    store: web::Data<dyn EmployeeStore>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*query)?;

    let page = store.list(query.page.unwrap_or(1), PAGE_SIZE).await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = validate_id(id.into_inner())?;

    let employee = store.get_by_id(id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employees_by_department(
    store: web::Data<dyn EmployeeStore>,
    department: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employees = store.get_by_department(&department).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee_department(
    _auth: Authenticated,
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i64>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = validate_id(id.into_inner())?;

    let employee = store.update_department(id, &updates.employee_department).await?;
    info!("Moved employee {} to department {:?}", employee.id, updates.employee_department);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee department updated successfully",
        "employee": employee,
    })))
}

pub async fn delete_employee(
    _auth: Authenticated,
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = validate_id(id.into_inner())?;

    store.delete(id).await?;
    info!("Deleted employee {}", id);

    Ok(HttpResponse::NoContent().finish())
}

pub mod employee;

use actix_web::web;
use crate::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
        .app_data(web::PathConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
        .service(
            web::resource("/employee")
                .route(web::post().to(employee::create_employee))
                .route(web::get().to(employee::get_employees)),
        )
        .service(
            web::resource("/employee/department/{employee_department}")
                .route(web::get().to(employee::get_employees_by_department)),
        )
        .service(
            web::resource("/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee_department))
                .route(web::delete().to(employee::delete_employee)),
        );
}

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}

pub fn validate_joining_date(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value > Utc::now() {
        return Err(ValidationError::new("employee_joining_date cannot be in the future (IST)"));
    }
    Ok(())
}

pub fn validate_department(department: &str) -> Result<(), ValidationError> {
    if department.trim().is_empty() {
        return Err(ValidationError::new("employee_department cannot be empty"));
    }
    Ok(())
}

pub fn validate_id(id: i64) -> Result<i64, AppError> {
    if id <= 0 {
        return Err(AppError::Validation("id must be greater than 0".to_string()));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn joining_date_may_not_be_in_the_future() {
        assert!(validate_joining_date(&(Utc::now() - Duration::days(1))).is_ok());
        assert!(validate_joining_date(&(Utc::now() + Duration::minutes(5))).is_err());
    }

    #[test]
    fn blank_department_is_rejected() {
        assert!(validate_department("Engineering").is_ok());
        assert!(validate_department("").is_err());
        assert!(validate_department("   \t").is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(validate_id(3).unwrap(), 3);
        assert!(matches!(validate_id(0), Err(AppError::Validation(_))));
        assert!(matches!(validate_id(-1), Err(AppError::Validation(_))));
    }
}

use contracts::domain::a003_employee::aggregate::{Employee, EmployeeDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, api_url_with};
use crate::shared::http;

pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    http::get_json(&api_url("/employee/v1/getAllEmployees")).await
}

/// Create or update depending on whether the form carries an id
pub async fn save_employee(dto: &EmployeeDto) -> Result<(), ApiError> {
    let path = if dto.is_edit() {
        "/employee/v1/updateEmployee"
    } else {
        "/employee/v1/createEmployee"
    };
    http::post_unit(&api_url(path), dto).await
}

pub async fn delete_employee(id: i64) -> Result<(), ApiError> {
    http::delete(&api_url_with("/employee/v1/deleteEmployee", &id.to_string())).await
}

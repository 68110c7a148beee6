//! Types and pure logic shared by the dashboard frontend: record DTOs,
//! the list filter/paginate engine, API errors and session helpers.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

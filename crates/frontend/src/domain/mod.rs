pub mod a001_property;
pub mod a002_lead;
pub mod a003_employee;
pub mod a004_subscription;
pub mod a005_ad;
pub mod a006_career;
pub mod a007_static_page;
pub mod a008_user;

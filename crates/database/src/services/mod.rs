pub mod catalog;
pub mod import_schedule;

pub mod categories;
pub mod course_categories;
pub mod course_teachers;
pub mod courses;
pub mod departments;
pub mod semesters;
pub mod teachers;

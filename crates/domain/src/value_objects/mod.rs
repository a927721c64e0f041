//! Domain value objects

pub mod course_code;
pub mod professor_name;

pub use course_code::CourseCode;
pub use professor_name::ProfessorName;

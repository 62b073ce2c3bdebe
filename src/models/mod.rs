pub mod auth;
pub mod page;
pub mod timestamp;
pub mod student;
pub mod lecturer;
pub mod course;
pub mod assignment;
pub mod submission;
pub mod announcement;
pub mod quiz;
pub mod material;

pub use auth::{
    AuthResponse, AuthUser, LoginRequest, PasswordChange, ProfileForm, RegisterRequest, Role,
    SessionCredential,
};
pub use page::{Page, PageQuery};
pub use student::{Student, StudentForm};
pub use lecturer::{Lecturer, LecturerForm};
pub use course::{Course, CourseForm};
pub use assignment::{Assignment, AssignmentForm};
pub use submission::{GradeForm, Submission, SubmissionForm, SubmissionStatus};
pub use announcement::{Announcement, AnnouncementForm};
pub use quiz::{Quiz, QuizAttempt, QuizForm, QuizQuestion, QuizResult};
pub use material::{Material, MaterialForm, MaterialKind};

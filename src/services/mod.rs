pub mod error;
pub mod http;
pub mod api_client;
pub mod resource;
pub mod auth_service;
pub mod student_service;
pub mod lecturer_service;
pub mod course_service;
pub mod assignment_service;
pub mod submission_service;
pub mod announcement_service;
pub mod quiz_service;
pub mod material_service;

pub use error::{describe_error, parse_server_message, ApiError};
pub use http::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use api_client::ApiClient;
pub use resource::{Resource, ResourceService};
pub use auth_service::AuthService;
pub use student_service::StudentService;
pub use lecturer_service::LecturerService;
pub use course_service::CourseService;
pub use assignment_service::AssignmentService;
pub use submission_service::SubmissionService;
pub use announcement_service::AnnouncementService;
pub use quiz_service::QuizService;
pub use material_service::MaterialService;

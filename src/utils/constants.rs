/// Backend base URL when `BACKEND_URL` is not set at build time
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Route the host navigates to when the session expires
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// localStorage key holding the JSON-serialized session credential
pub const STORAGE_KEY_SESSION: &str = "lms_admin_session";

pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

// REST resource roots
pub const AUTH_PATH: &str = "/api/auth";
pub const STUDENTS_PATH: &str = "/api/students";
pub const LECTURERS_PATH: &str = "/api/lecturers";
pub const COURSES_PATH: &str = "/api/courses";
pub const ASSIGNMENTS_PATH: &str = "/api/assignments";
pub const SUBMISSIONS_PATH: &str = "/api/submissions";
pub const ANNOUNCEMENTS_PATH: &str = "/api/announcements";
pub const QUIZZES_PATH: &str = "/api/quizzes";
pub const MATERIALS_PATH: &str = "/api/materials";

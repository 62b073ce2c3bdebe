// ============================================================================
// APP SERVICES CONTEXT - Shares the API client and services with all views
// ============================================================================

use yew::prelude::*;

use crate::services::{
    AnnouncementService, ApiClient, AssignmentService, AuthService, CourseService,
    LecturerService, MaterialService, QuizService, StudentService, SubmissionService,
};
use crate::state::SessionStore;

/// Every service, built on one shared client and session store
#[derive(Clone, PartialEq)]
pub struct AppServices {
    pub api: ApiClient,
    pub session: SessionStore,
    pub auth: AuthService,
    pub students: StudentService,
    pub lecturers: LecturerService,
    pub courses: CourseService,
    pub assignments: AssignmentService,
    pub submissions: SubmissionService,
    pub announcements: AnnouncementService,
    pub quizzes: QuizService,
    pub materials: MaterialService,
}

impl AppServices {
    pub fn new(api: ApiClient) -> Self {
        Self {
            session: api.session().clone(),
            auth: AuthService::new(&api),
            students: StudentService::new(&api),
            lecturers: LecturerService::new(&api),
            courses: CourseService::new(&api),
            assignments: AssignmentService::new(&api),
            submissions: SubmissionService::new(&api),
            announcements: AnnouncementService::new(&api),
            quizzes: QuizService::new(&api),
            materials: MaterialService::new(&api),
            api,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: AppServices,
    pub children: Children,
}

/// Wraps the app so hooks can reach the services through `use_services()`
#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<AppServices> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<AppServices>>
    }
}

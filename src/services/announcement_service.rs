use crate::models::{Announcement, AnnouncementForm};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::ANNOUNCEMENTS_PATH;

impl Resource for Announcement {
    const PATH: &'static str = ANNOUNCEMENTS_PATH;
    type Form = AnnouncementForm;
}

pub type AnnouncementService = ResourceService<Announcement>;

impl ResourceService<Announcement> {
    pub async fn by_course(&self, course_id: i64) -> Result<Vec<Announcement>, ApiError> {
        self.list_at(&format!("/course/{}", course_id)).await
    }
}

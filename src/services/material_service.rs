use crate::models::{Material, MaterialForm};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::MATERIALS_PATH;

impl Resource for Material {
    const PATH: &'static str = MATERIALS_PATH;
    type Form = MaterialForm;
}

pub type MaterialService = ResourceService<Material>;

impl ResourceService<Material> {
    pub async fn by_course(&self, course_id: i64) -> Result<Vec<Material>, ApiError> {
        self.list_at(&format!("/course/{}", course_id)).await
    }
}

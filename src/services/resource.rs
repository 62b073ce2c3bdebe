// ============================================================================
// RESOURCE SERVICE - Generic CRUD over one REST collection
// ============================================================================

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Page, PageQuery};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// A backend collection: its root path and its create/update body
pub trait Resource: DeserializeOwned + Clone + 'static {
    const PATH: &'static str;
    type Form: Serialize;
}

pub struct ResourceService<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(api: &ApiClient) -> Self {
        Self {
            client: api.scoped(R::PATH),
            _resource: PhantomData,
        }
    }

    /// Client scoped to `R::PATH`, for resource-specific calls
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn list_page(&self, query: &PageQuery) -> Result<Page<R>, ApiError> {
        self.client.get("", &query.to_params()).await
    }

    pub async fn list_all(&self) -> Result<Vec<R>, ApiError> {
        self.client.get::<Vec<R>, &str, &str>("/all", &[]).await
    }

    pub async fn get(&self, id: i64) -> Result<R, ApiError> {
        self.client.get::<R, &str, &str>(&format!("/{}", id), &[]).await
    }

    pub async fn create(&self, form: &R::Form) -> Result<R, ApiError> {
        let created: R = self.client.post("", form).await?;
        log::info!("✅ Created in {}", R::PATH);
        Ok(created)
    }

    /// Saves `form`; a bodiless success (204) is followed by a `get(id)`
    pub async fn update(&self, id: i64, form: &R::Form) -> Result<R, ApiError> {
        let updated: Option<R> = self.client.put(&format!("/{}", id), form).await?;
        match updated {
            Some(updated) => Ok(updated),
            None => {
                log::debug!("[HTTP] Empty update response, reloading {}/{}", R::PATH, id);
                self.get(id).await
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/{}", id)).await?;
        log::info!("🗑️ Deleted {}/{}", R::PATH, id);
        Ok(())
    }

    /// `GET {PATH}/{segment}` decoding a list, used by the per-resource lookups
    pub(crate) async fn list_at<T: DeserializeOwned>(&self, segment: &str) -> Result<Vec<T>, ApiError> {
        self.client.get::<Vec<T>, &str, &str>(segment, &[]).await
    }
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> PartialEq for ResourceService<R> {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::mock::MockTransport;
    use crate::services::http::HttpMethod;
    use crate::state::SessionStore;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use serde::Deserialize;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Deserialize)]
    struct Widget {
        id: i64,
    }

    #[derive(Serialize)]
    struct WidgetForm {
        name: String,
    }

    impl Resource for Widget {
        const PATH: &'static str = "/api/widgets";
        type Form = WidgetForm;
    }

    fn service() -> (ResourceService<Widget>, Rc<MockTransport>) {
        let transport = Rc::new(MockTransport::new());
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        let api = ApiClient::with_transport("http://lms.test", transport.clone(), session);
        (ResourceService::new(&api), transport)
    }

    #[test]
    fn list_page_sends_pagination_params() {
        let (service, transport) = service();
        transport.respond(200, r#"{"content":[{"id":1},{"id":2}],"totalPages":3,"totalElements":25}"#);

        let page = block_on(service.list_page(&PageQuery::new(0, 10, "alice"))).unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 25);
        let request = transport.last_request();
        assert_eq!(request.url, "http://lms.test/api/widgets");
        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "0".to_string()),
                ("size".to_string(), "10".to_string()),
                ("search".to_string(), "alice".to_string()),
            ]
        );
    }

    #[test]
    fn crud_paths_and_verbs() {
        let (service, transport) = service();
        transport
            .respond(200, r#"[{"id":1}]"#)
            .respond(200, r#"{"id":4}"#)
            .respond(201, r#"{"id":5}"#)
            .respond(200, r#"{"id":5}"#)
            .respond(204, "");

        let form = WidgetForm { name: "w".into() };
        assert_eq!(block_on(service.list_all()).unwrap(), vec![Widget { id: 1 }]);
        assert_eq!(block_on(service.get(4)).unwrap(), Widget { id: 4 });
        assert_eq!(block_on(service.create(&form)).unwrap(), Widget { id: 5 });
        assert_eq!(block_on(service.update(5, &form)).unwrap(), Widget { id: 5 });
        block_on(service.delete(5)).unwrap();

        let sent: Vec<(HttpMethod, String)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            sent,
            vec![
                (HttpMethod::Get, "http://lms.test/api/widgets/all".to_string()),
                (HttpMethod::Get, "http://lms.test/api/widgets/4".to_string()),
                (HttpMethod::Post, "http://lms.test/api/widgets".to_string()),
                (HttpMethod::Put, "http://lms.test/api/widgets/5".to_string()),
                (HttpMethod::Delete, "http://lms.test/api/widgets/5".to_string()),
            ]
        );
    }

    #[test]
    fn update_without_body_reloads_entity() {
        let (service, transport) = service();
        transport.respond(204, "").respond(200, r#"{"id":7}"#);

        let updated = block_on(service.update(7, &WidgetForm { name: "w".into() })).unwrap();

        assert_eq!(updated, Widget { id: 7 });
        let sent: Vec<HttpMethod> = transport.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(sent, vec![HttpMethod::Put, HttpMethod::Get]);
        assert_eq!(transport.last_request().url, "http://lms.test/api/widgets/7");
    }
}

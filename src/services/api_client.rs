// ============================================================================
// API CLIENT - Authenticated HTTP wrapper bound to one base URL
// ============================================================================
// Adds the bearer token from the session store to each request and turns a
// 401 into SessionStore::expire(). Resource services are scoped clients on
// top of this; none of them handle auth themselves.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::services::error::{parse_server_message, ApiError};
use crate::services::http::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::state::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self::with_transport(base_url, Rc::new(GlooTransport), session)
    }

    pub fn with_transport(
        base_url: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    /// Client for a sub-path sharing this client's transport and session
    pub fn scoped(&self, prefix: &str) -> Self {
        Self {
            base_url: join_url(&self.base_url, prefix),
            transport: self.transport.clone(),
            session: self.session.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T, K, V>(&self, path: &str, query: &[(K, V)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = HttpRequest::new(HttpMethod::Get, join_url(&self.base_url, path));
        request.query = query
            .iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        let response = self.execute(request).await?;
        decode(&response)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.with_body(HttpMethod::Post, path, body)?;
        let response = self.execute(request).await?;
        decode(&response)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.with_body(HttpMethod::Put, path, body)?;
        let response = self.execute(request).await?;
        decode(&response)
    }

    /// Any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = HttpRequest::new(HttpMethod::Delete, join_url(&self.base_url, path));
        self.execute(request).await?;
        Ok(())
    }

    fn with_body<B>(&self, method: HttpMethod, path: &str, body: &B) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = HttpRequest::new(method, join_url(&self.base_url, path));
        request.body =
            Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(request)
    }

    async fn execute(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(token) = self.session.token() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let method = request.method;
        let url = request.url.clone();
        log::debug!("[HTTP] {} {}", method.as_str(), url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [HTTP] {} {} failed: {}", method.as_str(), url, e);
            e
        })?;

        if response.ok() {
            return Ok(response);
        }

        let server_message = parse_server_message(&response.body);
        if response.status == 401 {
            log::warn!("🔐 [HTTP] 401 on {} {}, ending session", method.as_str(), url);
            self.session.expire();
            return Err(ApiError::Unauthorized { server_message });
        }

        log::warn!("⚠️ [HTTP] {} {} -> {}", method.as_str(), url, response.status);
        Err(ApiError::Status {
            status: response.status,
            server_message,
        })
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.transport, &other.transport)
            && self.session == other.session
    }
}

/// Empty bodies decode as JSON `null`
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, SessionCredential};
    use crate::services::http::mock::MockTransport;
    use crate::state::SessionEvent;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use serde::Deserialize;
    use std::cell::Cell;

    const NO_QUERY: &[(&str, &str)] = &[];

    #[derive(Deserialize, Debug, PartialEq)]
    struct Course {
        id: i64,
        title: String,
    }

    fn setup() -> (ApiClient, Rc<MockTransport>, SessionStore) {
        let transport = Rc::new(MockTransport::new());
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        let client = ApiClient::with_transport("http://lms.test/", transport.clone(), session.clone());
        (client, transport, session)
    }

    fn sign_in(session: &SessionStore) {
        session
            .set(SessionCredential {
                id: 1,
                role: Role::Admin,
                full_name: "Admin".into(),
                email: None,
                token: "secret-token".into(),
            })
            .unwrap();
    }

    #[test]
    fn attaches_bearer_token_per_request() {
        let (client, transport, session) = setup();
        sign_in(&session);
        transport.respond(200, r#"{"id":1,"title":"Algorithms"}"#);

        let course: Course = block_on(client.get("/api/courses/1", NO_QUERY)).unwrap();

        assert_eq!(course, Course { id: 1, title: "Algorithms".into() });
        let request = transport.last_request();
        assert_eq!(request.url, "http://lms.test/api/courses/1");
        assert_eq!(request.header("Authorization"), Some("Bearer secret-token"));
    }

    #[test]
    fn no_session_means_no_authorization_header() {
        let (client, transport, _session) = setup();
        transport.respond(200, "[]");

        let _: Vec<Course> = block_on(client.get("/api/courses", &[("page", "0")])).unwrap();

        let request = transport.last_request();
        assert!(request.header("Authorization").is_none());
        assert_eq!(request.query, vec![("page".to_string(), "0".to_string())]);
    }

    #[test]
    fn unauthorized_clears_session_and_expires_once() {
        let (client, transport, session) = setup();
        sign_in(&session);
        let expired = Rc::new(Cell::new(0));
        let _sub = {
            let expired = expired.clone();
            session.subscribe(move |event| {
                if *event == SessionEvent::Expired {
                    expired.set(expired.get() + 1);
                }
            })
        };
        transport.respond(401, r#"{"message":"Token expired"}"#);

        let result: Result<Course, _> = block_on(client.get("/api/students/me", NO_QUERY));

        assert_eq!(
            result,
            Err(ApiError::Unauthorized { server_message: Some("Token expired".into()) })
        );
        assert!(session.get().is_none());
        assert_eq!(expired.get(), 1);
    }

    #[test]
    fn other_statuses_pass_through_with_server_message() {
        let (client, transport, session) = setup();
        sign_in(&session);
        transport.respond(404, r#"{"message":"Resource not found"}"#);

        let result: Result<Course, _> = block_on(client.get("/api/courses/99", NO_QUERY));

        assert_eq!(
            result,
            Err(ApiError::Status { status: 404, server_message: Some("Resource not found".into()) })
        );
        // session untouched
        assert!(session.is_authenticated());
    }

    #[test]
    fn post_and_put_send_json_bodies() {
        let (client, transport, _) = setup();
        transport
            .respond(201, r#"{"id":5,"title":"Databases"}"#)
            .respond(200, r#"{"id":5,"title":"Databases II"}"#);

        let created: Course = block_on(client.post("/api/courses", &serde_json::json!({"title": "Databases"}))).unwrap();
        let updated: Course = block_on(client.put("/api/courses/5", &serde_json::json!({"title": "Databases II"}))).unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(updated.title, "Databases II");
        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"title":"Databases"}"#));
        assert_eq!(requests[1].method, HttpMethod::Put);
    }

    #[test]
    fn delete_ignores_body_and_empty_body_decodes_as_unit() {
        let (client, transport, _) = setup();
        transport.respond(204, "").respond(200, "");

        block_on(client.delete("/api/courses/5")).unwrap();
        let unit: () = block_on(client.post("/api/courses/5/enroll/2", &())).unwrap();

        assert_eq!(unit, ());
        assert_eq!(transport.requests()[0].method, HttpMethod::Delete);
    }

    #[test]
    fn network_and_decode_errors_propagate() {
        let (client, transport, _) = setup();
        transport
            .fail(ApiError::Network("offline".into()))
            .respond(200, "<html>");

        let first: Result<Course, _> = block_on(client.get("/api/courses/1", NO_QUERY));
        let second: Result<Course, _> = block_on(client.get("/api/courses/1", NO_QUERY));

        assert_eq!(first, Err(ApiError::Network("offline".into())));
        assert!(matches!(second, Err(ApiError::Decode(_))));
    }

    #[test]
    fn scoped_client_joins_paths() {
        let (client, transport, _) = setup();
        let students = client.scoped("/api/students");
        assert_eq!(students.base_url(), "http://lms.test/api/students");

        transport.respond(200, "{}");
        let _: serde_json::Value = block_on(students.get("", NO_QUERY)).unwrap();
        assert_eq!(transport.last_request().url, "http://lms.test/api/students");

        assert_eq!(join_url("http://h/api/", "/x/1"), "http://h/api/x/1");
    }
}

use crate::models::{
    AuthResponse, AuthUser, LoginRequest, PasswordChange, ProfileForm, RegisterRequest,
    SessionCredential,
};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::state::SessionStore;
use crate::utils::AUTH_PATH;

/// Login, registration and profile calls; owns writes to the session store
#[derive(Clone, PartialEq)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(api: &ApiClient) -> Self {
        Self {
            client: api.scoped(AUTH_PATH),
        }
    }

    fn session(&self) -> &SessionStore {
        self.client.session()
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<SessionCredential, ApiError> {
        log::info!("🔐 [AUTH] Signing in {}", request.email);
        let response: AuthResponse = self.client.post("/login", request).await?;
        self.persist(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionCredential, ApiError> {
        log::info!("📝 [AUTH] Registering {}", request.email);
        let response: AuthResponse = self.client.post("/register", request).await?;
        self.persist(response)
    }

    /// Local only; the backend keeps no session to close
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.session().clear();
    }

    pub fn current_user(&self) -> Option<SessionCredential> {
        self.session().get()
    }

    /// Saves the profile and refreshes the stored identity, keeping the current
    /// token unless the backend issued a new one
    pub async fn update_profile(&self, form: &ProfileForm) -> Result<SessionCredential, ApiError> {
        let user: AuthUser = self.client.put("/profile", form).await?;
        let updated = self.session().update_user(|credential| {
            credential.id = user.id;
            credential.role = user.role;
            credential.full_name = user.full_name.clone();
            credential.email = user.email.clone();
            if let Some(token) = user.token.clone().filter(|t| !t.trim().is_empty()) {
                credential.token = token;
            }
        })?;
        updated.ok_or_else(|| ApiError::Other("No active session to update".to_string()))
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.client
            .put::<_, serde::de::IgnoredAny>("/password", change)
            .await?;
        log::info!("✅ [AUTH] Password changed");
        Ok(())
    }

    fn persist(&self, response: AuthResponse) -> Result<SessionCredential, ApiError> {
        let credential = response
            .user
            .into_credential()
            .ok_or_else(|| ApiError::Decode("authentication response carried no token".to_string()))?;
        self.session().set(credential.clone())?;
        log::info!("✅ [AUTH] Signed in as {} ({})", credential.full_name, credential.role.as_str());
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::http::mock::MockTransport;
    use crate::services::http::HttpMethod;
    use crate::state::SessionEvent;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (AuthService, Rc<MockTransport>, SessionStore) {
        let transport = Rc::new(MockTransport::new());
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        let api = ApiClient::with_transport("http://lms.test", transport.clone(), session.clone());
        (AuthService::new(&api), transport, session)
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            email: "alice@example.edu".into(),
            password: "hunter22".into(),
        }
    }

    #[test]
    fn login_persists_credential() {
        let (auth, transport, session) = setup();
        transport.respond(
            200,
            r#"{"user":{"id":12,"role":"STUDENT","fullName":"Alice Moreau","token":"jwt-abc"}}"#,
        );

        let credential = block_on(auth.login(&login_request())).unwrap();

        assert_eq!(credential.role, Role::Student);
        assert_eq!(session.token().as_deref(), Some("jwt-abc"));
        assert_eq!(auth.current_user(), Some(credential));
        let request = transport.last_request();
        assert_eq!(request.url, "http://lms.test/api/auth/login");
        assert!(request.header("Authorization").is_none());
    }

    #[test]
    fn login_without_token_is_rejected() {
        let (auth, transport, session) = setup();
        transport.respond(200, r#"{"user":{"id":12,"role":"STUDENT","fullName":"Alice"}}"#);

        let result = block_on(auth.login(&login_request()));

        assert!(matches!(result, Err(ApiError::Decode(_))));
        assert!(session.get().is_none());
    }

    #[test]
    fn bad_credentials_do_not_touch_session() {
        let (auth, transport, session) = setup();
        transport.respond(400, r#"{"message":"Invalid email or password"}"#);

        let error = block_on(auth.login(&login_request())).unwrap_err();

        assert_eq!(crate::services::describe_error(&error), "Invalid email or password");
        assert!(session.get().is_none());
    }

    #[test]
    fn update_profile_merges_identity_and_keeps_token() {
        let (auth, transport, session) = setup();
        transport
            .respond(200, r#"{"user":{"id":12,"role":"STUDENT","fullName":"Alice","token":"jwt-abc"}}"#)
            .respond(200, r#"{"id":12,"role":"STUDENT","fullName":"Alice Moreau","email":"a.moreau@example.edu"}"#);
        block_on(auth.login(&login_request())).unwrap();

        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = events.clone();
            session.subscribe(move |e| events.borrow_mut().push(e.clone()))
        };
        let form = ProfileForm {
            full_name: "Alice Moreau".into(),
            email: Some("a.moreau@example.edu".into()),
            phone: None,
        };
        let updated = block_on(auth.update_profile(&form)).unwrap();

        assert_eq!(updated.full_name, "Alice Moreau");
        assert_eq!(updated.token, "jwt-abc");
        assert_eq!(transport.last_request().header("Authorization"), Some("Bearer jwt-abc"));
        assert!(matches!(events.borrow()[0], SessionEvent::Updated(_)));
    }

    #[test]
    fn logout_clears_session() {
        let (auth, transport, session) = setup();
        transport.respond(200, r#"{"user":{"id":1,"role":"ADMIN","fullName":"Root","token":"t"}}"#);
        block_on(auth.login(&login_request())).unwrap();

        auth.logout();

        assert!(session.get().is_none());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn register_persists_new_account() {
        let (auth, transport, session) = setup();
        transport.respond(
            201,
            r#"{"user":{"id":30,"role":"LECTURER","fullName":"Bob Stone","email":"bob@example.edu","token":"jwt-new"}}"#,
        );
        let request = RegisterRequest {
            full_name: "Bob Stone".into(),
            email: "bob@example.edu".into(),
            password: "s3cret!".into(),
            role: Role::Lecturer,
        };

        let credential = block_on(auth.register(&request)).unwrap();

        assert_eq!(credential.id, 30);
        assert_eq!(session.token().as_deref(), Some("jwt-new"));
        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "http://lms.test/api/auth/register");
    }

    #[test]
    fn change_password_puts_with_bearer_and_ignores_body() {
        let (auth, transport, _session) = setup();
        transport
            .respond(200, r#"{"user":{"id":1,"role":"ADMIN","fullName":"Root","token":"t"}}"#)
            .respond(200, r#"{"message":"Password updated"}"#)
            .respond(204, "");
        block_on(auth.login(&login_request())).unwrap();
        let change = PasswordChange {
            current_password: "old".into(),
            new_password: "new-and-long".into(),
        };

        block_on(auth.change_password(&change)).unwrap();
        block_on(auth.change_password(&change)).unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.url, "http://lms.test/api/auth/password");
        assert_eq!(sent.header("Authorization"), Some("Bearer t"));
    }
}

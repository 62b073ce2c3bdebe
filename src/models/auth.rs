use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[serde(alias = "admin", alias = "Admin")]
    Admin,
    #[serde(alias = "lecturer", alias = "Lecturer")]
    Lecturer,
    #[serde(alias = "student", alias = "Student")]
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Lecturer => "LECTURER",
            Role::Student => "STUDENT",
        }
    }

    /// Admin and lecturer screens are management views
    pub fn can_manage(&self) -> bool {
        matches!(self, Role::Admin | Role::Lecturer)
    }
}

/// Persisted session: token plus the minimal identity views read back
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredential {
    pub id: i64,
    pub role: Role,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub token: String,
}

impl SessionCredential {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// `{user: {...}}` envelope returned by login and register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub user: AuthUser,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub role: Role,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthUser {
    /// Builds the credential to persist; `None` without a usable token
    pub fn into_credential(self) -> Option<SessionCredential> {
        let token = self.token.filter(|t| !t.trim().is_empty())?;
        Some(SessionCredential {
            id: self.id,
            role: self.role,
            full_name: self.full_name,
            email: self.email,
            token,
        })
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_decodes_camel_case_user() {
        let json = r#"{"user":{"id":7,"role":"STUDENT","fullName":"Alice Moreau","token":"abc","department":"CS"}}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.full_name, "Alice Moreau");
        assert_eq!(response.user.role, Role::Student);

        let credential = response.user.into_credential().unwrap();
        assert_eq!(credential.token, "abc");
        assert!(credential.has_token());
    }

    #[test]
    fn role_accepts_lowercase_aliases() {
        let role: Role = serde_json::from_str(r#""lecturer""#).unwrap();
        assert_eq!(role, Role::Lecturer);
        assert!(role.can_manage());
        assert!(!Role::Student.can_manage());
    }

    #[test]
    fn blank_token_yields_no_credential() {
        let user = AuthUser {
            id: 1,
            role: Role::Admin,
            full_name: "Root".into(),
            email: None,
            token: Some("  ".into()),
        };
        assert!(user.into_credential().is_none());
    }

    #[test]
    fn credential_serializes_without_missing_email() {
        let credential = SessionCredential {
            id: 3,
            role: Role::Admin,
            full_name: "Root".into(),
            email: None,
            token: "t".into(),
        };
        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, r#"{"id":3,"role":"ADMIN","fullName":"Root","token":"t"}"#);
    }
}

//! User Profile
//!
//! The per-user preferences document at `users/{uid}`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;
use crate::firebase::{self, USERS};
use crate::routes;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "string_or_number")]
    pub age: Option<String>,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub preferences_done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Ages written by older forms may be numbers
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }
    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(n) => n.to_string(),
    }))
}

/// Written with merge when the preferences form is submitted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub age: String,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub preferences_done: bool,
    pub updated_at: String,
}

/// First-login document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewProfile<'a> {
    email: Option<&'a str>,
    name: Option<&'a str>,
    preferences_done: bool,
}

impl UserProfile {
    pub fn genres_label(&self) -> String {
        if self.genres.is_empty() {
            "Not set".to_string()
        } else {
            self.genres.join(", ")
        }
    }

    pub fn frequency_label(&self) -> String {
        self.frequency
            .clone()
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| "Not set".to_string())
    }
}

/// Where a signed-in user belongs: the swipe screen once onboarding is
/// complete, otherwise the preferences form
pub fn landing_href(profile: Option<&UserProfile>, uid: &str) -> String {
    match profile {
        Some(p) if p.preferences_done => routes::swipe_href(uid),
        _ => routes::PREFERENCES.to_string(),
    }
}

pub async fn load_profile(uid: &str) -> Result<Option<UserProfile>, AppError> {
    firebase::get_document(USERS, uid).await
}

pub async fn create_profile(uid: &str, email: Option<&str>, name: Option<&str>) -> Result<(), AppError> {
    let doc = NewProfile { email, name, preferences_done: false };
    firebase::set_document(USERS, uid, &doc, false).await
}

pub async fn save_preferences(uid: &str, update: &PreferencesUpdate) -> Result<(), AppError> {
    firebase::set_document(USERS, uid, update, true).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_reads_camel_case_flags() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"email":"a@b.c","genres":["Fantasy"],"preferencesDone":true,"updatedAt":"2024-01-01T00:00:00Z"}"#,
        ).unwrap();
        assert!(profile.preferences_done);
        assert_eq!(profile.genres_label(), "Fantasy");
        assert_eq!(profile.frequency_label(), "Not set");
    }

    #[test]
    fn test_numeric_age_is_accepted() {
        let profile: UserProfile = serde_json::from_str(r#"{"age":27,"preferencesDone":false}"#).unwrap();
        assert_eq!(profile.age.as_deref(), Some("27"));
        let profile: UserProfile = serde_json::from_str(r#"{"age":"31"}"#).unwrap();
        assert_eq!(profile.age.as_deref(), Some("31"));
    }

    #[test]
    fn test_landing_href() {
        let done = UserProfile { preferences_done: true, ..Default::default() };
        let pending = UserProfile::default();
        assert_eq!(landing_href(Some(&done), "u1"), "/recommendation?user_id=u1");
        assert_eq!(landing_href(Some(&pending), "u1"), "/preferences");
        assert_eq!(landing_href(None, "u1"), "/preferences");
    }

    #[test]
    fn test_preferences_update_wire_format() {
        let update = PreferencesUpdate {
            age: "27".to_string(),
            genres: vec!["A".into(), "B".into(), "C".into()],
            frequency: Some("weekly".to_string()),
            preferences_done: true,
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["preferencesDone"], true);
        assert_eq!(json["updatedAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["genres"][2], "C");
    }

    #[test]
    fn test_missing_frequency_is_omitted() {
        let update = PreferencesUpdate {
            age: String::new(),
            genres: vec![],
            frequency: None,
            preferences_done: true,
            updated_at: String::new(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("frequency").is_none());
    }
}

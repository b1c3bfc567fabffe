//! Contact Entity
//!
//! A networking lead as returned by `GET /contacts/{userId}`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Urgency tag attached to a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Unknown values fall back to `Medium`
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Priority::High => "🔥",
            Priority::Medium => "⚡",
            Priority::Low => "💤",
        }
    }
}

/// Missing, null and unknown values all read as `Medium`
impl From<Option<String>> for Priority {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(Priority::from_str).unwrap_or_default()
    }
}

/// A CRM record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Opaque server-assigned identifier
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// ISO-8601 creation timestamp, kept verbatim
    pub created_at: String,
}

impl Contact {
    /// Calendar date the contact was added, if the timestamp parses.
    pub fn added_on(&self) -> Option<NaiveDate> {
        let raw = self.created_at.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
    }

    /// Display label for the "Added:" line
    pub fn added_label(&self) -> String {
        match self.added_on() {
            Some(date) => date.format("%-m/%-d/%Y").to_string(),
            None => self.created_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_contact(created_at: &str) -> Contact {
        Contact {
            id: "c1".to_string(),
            name: "Jane".to_string(),
            company: None,
            email: None,
            position: None,
            priority: Priority::High,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_contact_from_api_json() {
        let json = r#"{
            "id": "abc",
            "name": "John Doe",
            "company": "Base Protocol",
            "email": "john@base.org",
            "priority": "high",
            "createdAt": "2025-03-14T09:30:00.000Z"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name, "John Doe");
        assert_eq!(contact.company.as_deref(), Some("Base Protocol"));
        assert_eq!(contact.position, None);
        assert_eq!(contact.priority, Priority::High);
        assert_eq!(contact.added_on(), NaiveDate::from_ymd_opt(2025, 3, 14));
    }

    #[test]
    fn test_unknown_priority_is_medium() {
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
        assert_eq!(Priority::from_str(" LOW "), Priority::Low);
        let p: Priority = serde_json::from_str(r#""whatever""#).unwrap();
        assert_eq!(p, Priority::Medium);
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), r#""low""#);
    }

    #[test]
    fn test_null_priority_is_medium() {
        let json = r#"[
            {"id":"1","name":"Jane","priority":null,"createdAt":"2025-01-01"},
            {"id":"2","name":"Bob","createdAt":"2025-01-02"},
            {"id":"3","name":"Ada","priority":"low","createdAt":"2025-01-03"}
        ]"#;
        let contacts: Vec<Contact> = serde_json::from_str(json).unwrap();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].priority, Priority::Medium);
        assert_eq!(contacts[1].priority, Priority::Medium);
        assert_eq!(contacts[2].priority, Priority::Low);
    }

    #[test]
    fn test_added_label() {
        assert_eq!(make_contact("2024-12-01T00:00:00Z").added_label(), "12/1/2024");
        assert_eq!(make_contact("2024-07-04").added_label(), "7/4/2024");
        assert_eq!(make_contact("yesterday").added_label(), "yesterday");
    }
}

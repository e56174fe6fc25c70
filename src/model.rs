//! Domain models shared by the sign-up and concert-detail flows.

use serde::{Deserialize, Serialize};

/// Tokens and display name handed to the session store after a
/// successful sign-up. The flow forwards it and never retains a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub nickname: String,
}

/// One concert as rendered by the detail screen.
///
/// An immutable snapshot per fetch; a re-fetch replaces the whole record,
/// never merges into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertRecord {
    pub title: String,
    pub details: String,
    pub date: String,
    pub location: String,
    pub ticket: String,
    /// Image URL, or an asset path for the fallback record.
    pub image: String,
    pub singer: String,
    #[serde(default)]
    pub setlist: Vec<String>,
}

impl ConcertRecord {
    /// The fixed placeholder record shown when no identifier was supplied
    /// or the fetch failed.
    pub fn fallback() -> Self {
        Self {
            title: "Untitled concert".to_string(),
            details: "No further information is available for this concert.".to_string(),
            date: "2024/01/01".to_string(),
            location: "Unknown venue".to_string(),
            ticket: "No information".to_string(),
            image: "assets/images/sampleimg2.png".to_string(),
            singer: "Unknown artist".to_string(),
            setlist: (1..=5).map(|n| format!("Placeholder song {n}")).collect(),
        }
    }

    /// The singer, or `"Unknown Artist"` when the record carries none.
    /// Used when navigating to the artist and past-setlist screens.
    pub fn singer_or_unknown(&self) -> &str {
        if self.singer.is_empty() {
            "Unknown Artist"
        } else {
            &self.singer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_record_is_complete() {
        let record = ConcertRecord::fallback();
        assert!(!record.title.is_empty());
        assert!(!record.singer.is_empty());
        assert_eq!(record.setlist.len(), 5);
    }

    #[test]
    fn test_singer_or_unknown() {
        let mut record = ConcertRecord::fallback();
        record.singer = "IU".to_string();
        assert_eq!(record.singer_or_unknown(), "IU");
        record.singer.clear();
        assert_eq!(record.singer_or_unknown(), "Unknown Artist");
    }

    #[test]
    fn test_concert_record_decodes_camel_case_without_setlist() {
        let json = r#"{
            "title": "World Tour",
            "details": "Final night",
            "date": "2026/03/01",
            "location": "Seoul Olympic Stadium",
            "ticket": "Interpark",
            "image": "https://cdn.example.com/tour.png",
            "singer": "IU"
        }"#;
        let record: ConcertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "World Tour");
        assert!(record.setlist.is_empty());
    }

    #[test]
    fn test_session_wire_names_are_camel_case() {
        let session = Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            nickname: "nick".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("accessToken"));
        assert!(json.contains("refreshToken"));
    }
}

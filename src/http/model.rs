use serde::{Deserialize, Serialize};

/// Body of `POST /api/request-code`.
#[derive(Debug, Clone, Serialize)]
pub struct CodeRequest {
    pub email: String,
}

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub email: String,
    pub code: String,
    pub artist: String,
    pub title: String,
}

/// Generic reply to both POST endpoints. The server reports application
/// failures in the body; the HTTP status is not used for control flow.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub track: Option<TrackInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfo {
    pub artist: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Reply to `GET /api/stats`. Error bodies carry only a message, so the
/// counters default to zero.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Stats {
    pub success: bool,
    #[serde(default)]
    pub today_approved: u32,
    #[serde(default)]
    pub today_rejected: u32,
    #[serde(default)]
    pub today_total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_request_serializes_to_wire_shape() {
        let body = CodeRequest {
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "email": "a@b.com" })
        );
    }

    #[test]
    fn submission_serializes_all_four_fields() {
        let body = Submission {
            email: "a@b.com".to_string(),
            code: "123456".to_string(),
            artist: "Daft Punk".to_string(),
            title: "One More Time".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "email": "a@b.com",
                "code": "123456",
                "artist": "Daft Punk",
                "title": "One More Time",
            })
        );
    }

    #[test]
    fn submit_success_with_track_and_extra_fields() {
        let response: ApiResponse = serde_json::from_str(
            r#"{
                "success": true,
                "message": "✅ Piosenka została pomyślnie dodana do playlisty! 🎵",
                "track": {
                    "artist": "Daft Punk",
                    "title": "One More Time",
                    "url": "https://open.spotify.com/track/xyz",
                    "album_art": "https://i.scdn.co/image/abc",
                    "duration": 320000
                }
            }"#,
        )
        .unwrap();

        assert!(response.success);
        let track = response.track.unwrap();
        assert_eq!(track.artist, "Daft Punk");
        assert_eq!(track.title, "One More Time");
        assert_eq!(track.url.as_deref(), Some("https://open.spotify.com/track/xyz"));
    }

    #[test]
    fn failure_body_has_no_track() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid code"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "Invalid code");
        assert!(response.track.is_none());
    }

    #[test]
    fn stats_parse_counts() {
        let stats: Stats = serde_json::from_str(
            r#"{"success": true, "today_approved": 3, "today_rejected": 1, "today_total": 4}"#,
        )
        .unwrap();
        assert!(stats.success);
        assert_eq!(
            (stats.today_approved, stats.today_rejected, stats.today_total),
            (3, 1, 4)
        );
    }

    #[test]
    fn stats_error_body_defaults_counts_to_zero() {
        let stats: Stats = serde_json::from_str(
            r#"{"success": false, "message": "Błąd pobierania statystyk"}"#,
        )
        .unwrap();
        assert!(!stats.success);
        assert_eq!(stats.today_total, 0);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// UTC instant serialized as an ISO-8601 string, as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Human-readable date, e.g. `Mar 08, 2026`.
    #[must_use]
    pub fn format_date(&self) -> String {
        self.0.format("%b %d, %Y").to_string()
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.format_date() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamp_serialization() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 8, 14, 30, 0).unwrap();
        let serialized = serde_json::to_string(&Timestamp(dt)).unwrap();
        assert_eq!(serialized, "\"2026-03-08T14:30:00Z\"");
    }

    #[test]
    fn test_timestamp_deserialization() {
        let deserialized: Timestamp =
            serde_json::from_str("\"2026-03-08T14:30:00.000Z\"").unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 3, 8, 14, 30, 0).unwrap();
        assert_eq!(deserialized.0, expected);
    }

    #[test]
    fn test_date_formatting() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 8, 14, 30, 0).unwrap();
        assert_eq!(Timestamp(dt).format_date(), "Mar 08, 2026");
        assert_eq!(Timestamp(dt).to_html(), html! { "Mar 08, 2026" });
    }
}

use chrono::{DateTime, Utc};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

// Guides are refreshed on a fixed date; the countdown card counts toward it
// and clamps at zero once it passes.
pub const CONTENT_REFRESH_DEADLINE: &str = "2026-09-30T23:59:59Z";

pub const WHATSAPP_URL: &str = "https://wa.me/966500000000";

pub fn content_refresh_deadline() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(CONTENT_REFRESH_DEADLINE)
        .expect("content refresh deadline is valid RFC 3339")
        .with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_content_refresh_deadline_parses() {
        let deadline = content_refresh_deadline();
        assert_eq!(deadline.year(), 2026);
        assert_eq!(deadline.month(), 9);
        assert_eq!(deadline.day(), 30);
    }
}

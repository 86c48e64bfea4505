// Wire formats
pub static DATE_FORMAT: &str = "%Y-%m-%d";
pub static TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Sentinels used by the upstream for "no value"
pub static DATE_SENTINEL: &str = "0000-00-00";
pub static TIMESTAMP_SENTINEL: &str = "0000-00-00 00:00:00";

// Webhook content types
pub static CONTENT_TYPE_JSON: &str = "application/json";
pub static CONTENT_TYPE_TEXT: &str = "text/plain";

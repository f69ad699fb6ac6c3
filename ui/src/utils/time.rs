use jiff::civil::DateTime;
use payloads::requests::EVENT_TIME_FMT;

/// Format a civil datetime for a `datetime-local` input value.
/// Minute granularity; seconds are never shown or stored.
pub fn format_datetime_local(datetime: &DateTime) -> String {
    datetime.strftime(EVENT_TIME_FMT).to_string()
}

/// Parse the value of a `datetime-local` input. Returns None for an
/// empty or malformed value (the browser can hand back "" when the
/// field is cleared).
pub fn parse_datetime_local(value: &str) -> Option<DateTime> {
    DateTime::strptime(EVENT_TIME_FMT, value).ok()
}

/// Format an event time for display
pub fn format_event_time(datetime: &DateTime) -> String {
    datetime.strftime("%a, %d %b %Y %H:%M").to_string()
}

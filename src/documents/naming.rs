// Human-readable projections of document sync records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const UNKNOWN_DOCUMENT: &str = "Unknown Document";
pub const SPACE_OVERVIEW: &str = "Space Overview";
pub const NEVER_SYNCED: &str = "Never";
pub const INVALID_DATE: &str = "Invalid Date";

/// Best-effort display name for a document id.
///
/// Tuned for wiki page URLs of the form
/// `https://<host>/wiki/spaces/<KEY>/pages/<id>/<Title+With+Spaces>`:
/// the space prefix and the first `pages/<digits>/` segment are removed, and
/// `+` / `%20` become spaces. A bare `overview` becomes `Space Overview`; an
/// empty remainder becomes `Unknown Document`. Never panics.
pub fn display_name(doc_id: &str) -> String {
    let without_space = strip_first(doc_id, space_prefix_at);
    let without_page = strip_first(&without_space, page_segment_at);
    let name = without_page.replace('+', " ").replace("%20", " ");

    if name == "overview" {
        return SPACE_OVERVIEW.to_string();
    }
    if name.is_empty() {
        return UNKNOWN_DOCUMENT.to_string();
    }
    name
}

/// Date portion of a sync timestamp, `Never` when the document was never synced.
pub fn display_last_synced(last_synced: Option<&str>) -> String {
    match last_synced {
        None => NEVER_SYNCED.to_string(),
        Some(raw) => match parse_timestamp(raw) {
            Some(ts) => ts.format("%-m/%-d/%Y").to_string(),
            None => INVALID_DATE.to_string(),
        },
    }
}

/// Accepts RFC 3339 as well as the naive ISO forms the backend emits for
/// timezone-less columns; naive values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Remove the leftmost span reported by `matcher`, which returns the match
/// length when a match begins at the given byte offset.
fn strip_first(input: &str, matcher: fn(&str) -> Option<usize>) -> String {
    for (start, _) in input.char_indices() {
        if let Some(len) = matcher(&input[start..]) {
            let mut out = String::with_capacity(input.len() - len);
            out.push_str(&input[..start]);
            out.push_str(&input[start + len..]);
            return out;
        }
    }
    input.to_string()
}

/// `https://<host>/wiki/spaces/<key>/`
fn space_prefix_at(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("https://")?;
    let host_len = segment_len(rest)?;
    let rest = rest[host_len..].strip_prefix("/wiki/spaces/")?;
    let key_len = segment_len(rest)?;
    rest[key_len..].strip_prefix('/')?;
    Some(s.len() - rest.len() + key_len + 1)
}

/// `pages/<digits>/`
fn page_segment_at(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("pages/")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix('/')?;
    Some("pages/".len() + digits + 1)
}

/// Length of a non-empty run of characters up to the next `/`
fn segment_len(s: &str) -> Option<usize> {
    let len = s.find('/').unwrap_or(s.len());
    (len > 0).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_table() {
        let cases = [
            ("https://host/wiki/spaces/ENG/pages/123/overview", "Space Overview"),
            (
                "https://acme.atlassian.net/wiki/spaces/ENG/pages/98765/Release+Checklist",
                "Release Checklist",
            ),
            (
                "https://acme.atlassian.net/wiki/spaces/OPS/pages/42/On%20Call%20Guide",
                "On Call Guide",
            ),
            ("https://acme.atlassian.net/wiki/spaces/ENG/overview", "Space Overview"),
            ("https://acme.atlassian.net/wiki/spaces/ENG/", "Unknown Document"),
            ("https://host/wiki/spaces/ENG/pages/123/", "Unknown Document"),
            ("", "Unknown Document"),
            ("Plain+Title", "Plain Title"),
            ("https://example.com/docs/readme.md", "https://example.com/docs/readme.md"),
            ("pages/abc/Title", "pages/abc/Title"),
            ("https:///wiki/spaces/ENG/x", "https:///wiki/spaces/ENG/x"),
            ("https://host/wiki/spaces//x", "https://host/wiki/spaces//x"),
            ("Overview", "Overview"),
        ];

        for (input, expected) in cases {
            assert_eq!(display_name(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn display_name_strips_prefix_found_mid_string() {
        assert_eq!(
            display_name("id:https://host/wiki/spaces/ENG/pages/7/Runbook"),
            "id:Runbook"
        );
    }

    #[test]
    fn display_name_handles_multibyte_input() {
        assert_eq!(display_name("ドキュメント+一覧"), "ドキュメント 一覧");
        assert_eq!(
            display_name("https://ホスト/wiki/spaces/日本/pages/1/概要"),
            "概要"
        );
    }

    #[test]
    fn last_synced_never_when_absent() {
        assert_eq!(display_last_synced(None), "Never");
    }

    #[test]
    fn last_synced_formats_date() {
        assert_eq!(display_last_synced(Some("2024-03-07T10:15:00Z")), "3/7/2024");
        assert_eq!(display_last_synced(Some("2024-12-25T23:00:00+00:00")), "12/25/2024");
        assert_eq!(display_last_synced(Some("2024-01-02T03:04:05.123456")), "1/2/2024");
        assert_eq!(display_last_synced(Some("2024-01-02")), "1/2/2024");
    }

    #[test]
    fn last_synced_invalid_input() {
        assert_eq!(display_last_synced(Some("yesterday")), "Invalid Date");
    }
}

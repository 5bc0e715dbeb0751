use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use time::{Date, macros::format_description};

/// `(<token> 만료)` or `(expires <token>)`, with the surrounding whitespace.
pub(crate) static EXPIRY_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\((?:\s*expires\s+([^)]*?)|([^)]*?)\s*만료[^)]*?)\s*\)").unwrap()
});

/// An ingredient entry annotated with an expiry clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringItem {
    pub name: String,
    /// `None` when the token could not be read as a date.
    pub due: Option<Date>,
}

/// Finds every annotated entry in comma-separated ingredient text.
pub fn detect_expiring(text: &str, today: Date) -> Vec<ExpiringItem> {
    text.split(',').filter_map(|entry| parse_entry(entry, today)).collect()
}

fn parse_entry(entry: &str, today: Date) -> Option<ExpiringItem> {
    let captures = EXPIRY_ANNOTATION.captures(entry)?;
    let whole = captures.get(0)?;

    let name = entry[..whole.start()].trim();
    if name.is_empty() {
        return None;
    }

    let token = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    let due = resolve_due(token, today);
    if due.is_none() {
        tracing::debug!(entry, token, "ignoring unreadable expiry token");
    }

    Some(ExpiringItem {
        name: name.to_string(),
        due,
    })
}

/// Resolves a relative-day marker or an ISO date against `today`.
pub fn resolve_due(token: &str, today: Date) -> Option<Date> {
    match token.to_lowercase().as_str() {
        "오늘" | "today" => Some(today),
        "내일" | "tomorrow" => today.next_day(),
        other => {
            let date_part = other.split(['T', 't', ' ']).next().unwrap_or(other);
            Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2025 - 03 - 14);

    #[test]
    fn test_relative_tokens() {
        assert_eq!(resolve_due("오늘", TODAY), Some(TODAY));
        assert_eq!(resolve_due("Tomorrow", TODAY), Some(date!(2025 - 03 - 15)));
        assert_eq!(resolve_due("내일", date!(2024 - 12 - 31)), Some(date!(2025 - 01 - 01)));
    }

    #[test]
    fn test_iso_dates_with_and_without_time() {
        assert_eq!(resolve_due("2025-04-01", TODAY), Some(date!(2025 - 04 - 01)));
        assert_eq!(
            resolve_due("2025-04-01T09:30:00", TODAY),
            Some(date!(2025 - 04 - 01))
        );
    }

    #[test]
    fn test_malformed_token_has_no_due_date() {
        assert_eq!(resolve_due("다음주", TODAY), None);
        assert_eq!(resolve_due("2025-13-40", TODAY), None);
        assert_eq!(resolve_due("", TODAY), None);
    }

    #[test]
    fn test_detect_korean_and_english_annotations() {
        let found = detect_expiring(
            "두부(내일 만료), 대파, 우유(2025-03-20 만료), Egg(expires today)",
            TODAY,
        );

        assert_eq!(
            found,
            vec![
                ExpiringItem {
                    name: "두부".to_string(),
                    due: Some(date!(2025 - 03 - 15)),
                },
                ExpiringItem {
                    name: "우유".to_string(),
                    due: Some(date!(2025 - 03 - 20)),
                },
                ExpiringItem {
                    name: "Egg".to_string(),
                    due: Some(TODAY),
                },
            ]
        );
    }

    #[test]
    fn test_unreadable_token_is_still_reported() {
        let found = detect_expiring("김치(곧 만료)", TODAY);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "김치");
        assert_eq!(found[0].due, None);
    }

    #[test]
    fn test_plain_entries_are_not_expiring() {
        assert!(detect_expiring("두부, 대파 (국산)", TODAY).is_empty());
    }
}

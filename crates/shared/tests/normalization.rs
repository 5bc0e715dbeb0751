use fridgechef_shared::ingredient::{detect_expiring, matchable_set, normalize};
use time::macros::date;

const NAMES: &[&str] = &["두부", "대파", "김치", "계란", "sweet potato", "canned tuna"];
const ANNOTATIONS: &[&str] = &[
    "(오늘 만료)",
    "(내일 만료)",
    " (2025-05-01 만료)",
    "(곧 만료)",
    "(expires today)",
    "(Expires 2025-05-01)",
    " (expires soon)",
];

#[test]
fn test_every_annotation_strips_to_the_bare_name() {
    for name in NAMES {
        for annotation in ANNOTATIONS {
            let token = format!("{name}{annotation}");
            assert_eq!(
                normalize(&token),
                *name,
                "normalizing {token:?} should yield the bare name"
            );
        }
    }
}

#[test]
fn test_detected_names_match_normalized_entries() {
    let text = "두부(내일 만료), 대파, Kimchi(expires 2025-05-02)";
    let expiring = detect_expiring(text, date!(2025 - 05 - 01));

    let names: Vec<String> = expiring.iter().map(|item| normalize(&item.name)).collect();
    assert_eq!(names, vec!["두부".to_string(), "kimchi".to_string()]);

    let set = matchable_set(&["두부(내일 만료)", "Kimchi(expires 2025-05-02)"]);
    assert!(set.contains("두부") && set.contains("김치"));
}

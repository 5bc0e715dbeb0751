use fridgechef_shared::ingredient::split_entries;
use fridgechef_shared::{Allergen, AllergyFlags, Language, Mood};
use serde::Serialize;
use url::form_urlencoded;

/// The inputs a shared link carries: language, ingredient entries, allergy
/// switches and music mood.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShareQuery {
    pub language: Option<Language>,
    pub have: Vec<String>,
    pub allergies: AllergyFlags,
    pub mood: Option<Mood>,
}

impl ShareQuery {
    /// `?lang=ko&have=두부%2C대파&allergy=dairy&mood=chill`
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);

        if let Some(language) = self.language {
            serializer.append_pair("lang", language.code());
        }
        serializer.append_pair("have", &self.have.join(","));

        let allergy: Vec<String> = self.allergies.enabled().map(|a| a.to_string()).collect();
        serializer.append_pair("allergy", &allergy.join(","));

        if let Some(mood) = self.mood {
            serializer.append_pair("mood", mood.as_ref());
        }

        serializer.finish()
    }

    /// Reads a share link back. Accepts a full URL, a `?query` or a bare
    /// query string. Unknown keys and values are ignored.
    pub fn parse(link: &str) -> Self {
        let query = match link.split_once('?') {
            Some((_, query)) => query,
            None => link,
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "lang" => parsed.language = value.trim().parse().ok(),
                "have" => parsed.have = split_entries(&value),
                "allergy" => {
                    for name in value.split(',') {
                        match name.trim().parse::<Allergen>() {
                            Ok(allergen) => parsed.allergies.set(allergen, true),
                            Err(_) if name.trim().is_empty() => {}
                            Err(_) => tracing::debug!(name, "unknown allergy in share link"),
                        }
                    }
                }
                "mood" => parsed.mood = value.trim().parse().ok(),
                other => tracing::debug!(key = other, "unknown share link key"),
            }
        }

        parsed
    }
}

/// An encoded link together with the inputs it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareLink {
    pub link: String,
    pub query: ShareQuery,
}

impl From<ShareQuery> for ShareLink {
    fn from(query: ShareQuery) -> Self {
        Self {
            link: query.encode(),
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_form_encoding() {
        let query = ShareQuery {
            language: Some(Language::En),
            have: vec!["tofu".to_string(), "green onion".to_string()],
            allergies: AllergyFlags::from_allergens(&[Allergen::Dairy, Allergen::Nuts]),
            mood: Some(Mood::KPop),
        };

        assert_eq!(
            query.encode(),
            "?lang=en&have=tofu%2Cgreen+onion&allergy=dairy%2Cnuts&mood=k-pop"
        );
    }

    #[test]
    fn test_empty_inputs_still_emit_keys() {
        let query = ShareQuery {
            language: Some(Language::Ko),
            mood: Some(Mood::Chill),
            ..ShareQuery::default()
        };

        assert_eq!(query.encode(), "?lang=ko&have=&allergy=&mood=chill");
    }

    #[test]
    fn test_link_has_no_empty_leading_pair() {
        let link = ShareQuery {
            language: Some(Language::Ko),
            have: vec!["두부".to_string()],
            ..ShareQuery::default()
        }
        .encode();

        assert!(link.starts_with("?lang=ko&have="), "{link}");
        assert!(!link.contains("?&"));
    }

    #[test]
    fn test_parse_restores_korean_inputs() {
        let original = ShareQuery {
            language: Some(Language::Ko),
            have: vec!["두부(내일 만료)".to_string(), "대파".to_string()],
            allergies: AllergyFlags::from_allergens(&[Allergen::Shellfish]),
            mood: Some(Mood::Lofi),
        };
        let link = format!("https://fridgechef.local/{}", original.encode());

        assert_eq!(ShareQuery::parse(&link), original);
    }

    #[test]
    fn test_parse_ignores_unknown_values() {
        let parsed = ShareQuery::parse("lang=fr&allergy=gluten,pollen&mood=metal&theme=dark");

        assert_eq!(parsed.language, None);
        assert_eq!(parsed.mood, None);
        assert!(parsed.have.is_empty());
        assert_eq!(
            parsed.allergies.enabled().collect::<Vec<_>>(),
            vec![Allergen::Gluten]
        );
    }
}

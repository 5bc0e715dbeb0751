/// Canonical ingredient name followed by its alternate spellings.
pub(crate) const SYNONYMS: &[(&str, &[&str])] = &[
    ("고구마", &["스위트포테이토", "sweet potato"]),
    ("감자", &["potato", "알감자"]),
    ("두부", &["tofu"]),
    ("대파", &["파", "spring onion", "scallion", "green onion"]),
    ("양파", &["onion"]),
    ("돼지고기", &["pork"]),
    ("소고기", &["beef"]),
    ("닭고기", &["chicken"]),
    ("계란", &["달걀", "egg", "eggs"]),
    ("김치", &["kimchi"]),
    ("애호박", &["주키니", "zucchini"]),
    ("가지", &["eggplant", "aubergine"]),
    ("당근", &["carrot"]),
    ("참치캔", &["통조림참치", "canned tuna", "tuna"]),
    ("쌀", &["rice"]),
    ("밀가루", &["flour"]),
    ("빵가루", &["bread crumbs", "panko"]),
    ("버터", &["butter"]),
    ("우유", &["milk"]),
    ("치즈", &["cheese"]),
    ("요거트", &["yogurt"]),
    ("땅콩", &["peanut", "peanuts"]),
    ("호두", &["walnut", "walnuts"]),
    ("아몬드", &["almond", "almonds"]),
    ("대두", &["soy", "soybean", "soy beans"]),
    ("새우", &["shrimp"]),
    ("홍합", &["mussel", "mussels"]),
    ("게", &["crab"]),
    ("조개", &["clam", "clams"]),
];

pub(crate) const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("우유", &["두유", "오트밀크", "물+가루분유"]),
    ("버터", &["식용유", "올리브유", "마가린"]),
    ("밀가루", &["쌀가루", "아몬드가루", "옥수수가루"]),
    ("치즈", &["영양효모", "두부"]),
    ("계란", &["두부", "치아씨드젤", "아쿠아파바"]),
    ("대두", &["두유", "두부"]),
    ("새우", &["오징어", "닭가슴살"]),
];

/// Groups the token belongs to, as canonical key plus synonyms.
pub(crate) fn groups_containing(token: &str) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
    SYNONYMS.iter().copied().filter(move |(canonical, synonyms)| {
        token == canonical.to_lowercase() || synonyms.iter().any(|s| token == s.to_lowercase())
    })
}

//! English word forms: plurals, articles and ordinals

/// Irregular names whose plural is not built by suffix rules
const IRREGULAR: &[(&str, &str)] = &[
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("knife", "knives"),
    ("staff", "staves"),
    ("loaf", "loaves"),
    ("leaf", "leaves"),
    ("child", "children"),
];

/// Suffixes replaced wholesale, checked in order
const SUFFIXES: &[(&str, &str)] = &[
    ("kelman", "kelmen"),
    ("wordsman", "wordsmen"),
    ("oodsman", "oodsmen"),
    ("eastman", "eastmen"),
    ("izardman", "izardmen"),
    ("geist", "geister"),
    ("ouse", "ice"),
    ("ey", "eys"),
    ("ex", "ices"),
    ("lf", "lves"),
    ("us", "i"),
    ("y", "ies"),
];

/// Pluralize a monster or object name
///
/// Names of the form `X of Y` pluralize their head (`X`); money names ending
/// in `coins` become `piles of ... coins`.
pub fn pluralize(name: &str) -> String {
    if name.is_empty() || name == "Manes" {
        return name.to_string();
    }

    if let Some(idx) = name.find(" of ") {
        let (head, tail) = name.split_at(idx);
        return format!("{}{}", pluralize(head), tail);
    }

    if name.ends_with("coins") {
        return format!("piles of {name}");
    }

    for (singular, plural) in IRREGULAR {
        if let Some(stem) = strip_suffix_ignore_case(name, singular) {
            return format!("{stem}{plural}");
        }
    }

    for (suffix, replacement) in SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }

    if ["ch", "sh", "nx", "s", "o"]
        .iter()
        .any(|suffix| name.ends_with(suffix))
    {
        return format!("{name}es");
    }

    format!("{name}s")
}

/// `name` without an ASCII `suffix`, compared case-insensitively
fn strip_suffix_ignore_case<'n>(name: &'n str, suffix: &str) -> Option<&'n str> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) || !name[split..].eq_ignore_ascii_case(suffix) {
        return None;
    }
    Some(&name[..split])
}

/// Check if a word takes "an" rather than "a"
pub fn takes_an(word: &str) -> bool {
    let lower = word.trim_start().to_lowercase();
    let Some(first) = lower.chars().next() else {
        return false;
    };
    if !"aeiou".contains(first) {
        return false;
    }
    !(lower.starts_with("uni") || lower.starts_with("use") || lower.starts_with("one"))
}

/// Prefix a word with its indefinite article
pub fn with_article(word: &str) -> String {
    if takes_an(word) {
        format!("an {word}")
    } else {
        format!("a {word}")
    }
}

/// Ordinal suffix of a number ("st", "nd", "rd", "th")
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (n / 10) % 10 == 1 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Whether a spoken number starts with a vowel sound ("an 8th", "an 11th")
pub fn number_takes_an(n: u32) -> bool {
    matches!(n, 8 | 11 | 18 | 80..=89) || (800..900).contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_basic() {
        assert_eq!(pluralize("kobold"), "kobolds");
        assert_eq!(pluralize("jackal"), "jackals");
        assert_eq!(pluralize("fruit fly"), "fruit flies");
        assert_eq!(pluralize("harpy"), "harpies");
        assert_eq!(pluralize("monkey"), "monkeys");
    }

    #[test]
    fn test_pluralize_suffix_es() {
        assert_eq!(pluralize("witch"), "witches");
        assert_eq!(pluralize("lynx"), "lynxes");
        assert_eq!(pluralize("mummified orc"), "mummified orcs");
        assert_eq!(pluralize("golem torso"), "golem torsoes");
        assert_eq!(pluralize("abyss"), "abysses");
    }

    #[test]
    fn test_pluralize_monster_rules() {
        assert_eq!(pluralize("Easterling warrior"), "Easterling warriors");
        assert_eq!(pluralize("Black Easterling swordsman"), "Black Easterling swordsmen");
        assert_eq!(pluralize("lizardman"), "lizardmen");
        assert_eq!(pluralize("poltergeist"), "poltergeister");
        assert_eq!(pluralize("giant white mouse"), "giant white mice");
        assert_eq!(pluralize("incubus"), "incubi");
        assert_eq!(pluralize("vortex"), "vortices");
        assert_eq!(pluralize("werewolf"), "werewolves");
        assert_eq!(pluralize("Manes"), "Manes");
    }

    #[test]
    fn test_pluralize_irregular_any_case() {
        assert_eq!(pluralize("Great GOOSE"), "Great geese");
        assert_eq!(pluralize("ogre's tooth"), "ogre's teeth");
        // Kelvin sign lowercases to a one-byte 'k'
        assert_eq!(pluralize("\u{212A}nife"), "\u{212A}nifes");
        assert_eq!(pluralize("Ⱥfoot"), "Ⱥfeet");
    }

    #[test]
    fn test_pluralize_of_phrase() {
        assert_eq!(pluralize("Knight of Chaos"), "Knights of Chaos");
        assert_eq!(pluralize("pile of bones"), "piles of bones");
    }

    #[test]
    fn test_pluralize_coins() {
        assert_eq!(pluralize("creeping copper coins"), "piles of creeping copper coins");
    }

    #[test]
    fn test_articles() {
        assert_eq!(with_article("orc"), "an orc");
        assert_eq!(with_article("kobold"), "a kobold");
        assert_eq!(with_article("unicorn"), "a unicorn");
        assert_eq!(with_article(""), "a ");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(50), "th");
        assert!(number_takes_an(8));
        assert!(number_takes_an(11));
        assert!(number_takes_an(18));
        assert!(!number_takes_an(10));
        assert!(!number_takes_an(1));
    }
}

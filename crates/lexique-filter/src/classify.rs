// Per-word classification against lexicon metadata.
//
// Precedence for verbs and auxiliaries: infinitive, then present participle,
// then past participle, then any other conjugated form.

use lexique_core::{Category, Decision, KeepReason, LexiconEntry, RemovalReason};

/// Decide whether `word` stays in the filtered list.
///
/// `entry` is the word's lexicon metadata, or `None` if the word is not in
/// the lexicon. The result depends on nothing else.
pub fn classify(word: &str, entry: Option<&LexiconEntry>) -> Decision {
    let Some(entry) = entry else {
        return Decision::Keep(KeepReason::NotInLexicon);
    };
    let plural = entry.number.is_plural();

    match &entry.category {
        Category::Verb | Category::Auxiliary => {
            if word == entry.lemma || entry.inflection.is_infinitive() {
                Decision::Keep(KeepReason::Infinitive)
            } else if entry.inflection.has_present_participle() {
                Decision::Remove(RemovalReason::PresentParticiple)
            } else if entry.inflection.has_past_participle() {
                if plural {
                    Decision::Remove(RemovalReason::PluralParticiple)
                } else {
                    Decision::Keep(KeepReason::SingularParticiple)
                }
            } else {
                Decision::Remove(RemovalReason::Conjugated)
            }
        }
        Category::Noun if plural => Decision::Remove(RemovalReason::PluralNoun),
        Category::Noun => Decision::Keep(KeepReason::SingularNoun),
        Category::Adjective if plural => Decision::Remove(RemovalReason::PluralAdjective),
        Category::Adjective => Decision::Keep(KeepReason::SingularAdjective),
        Category::Other(_) => Decision::Keep(KeepReason::OtherCategory),
    }
}

#[cfg(test)]
mod tests {
    use lexique_core::Number;

    use super::*;

    fn entry(cgram: &str, lemme: &str, infover: &str, nombre: &str) -> LexiconEntry {
        LexiconEntry::from_tags(cgram, lemme, infover, nombre)
    }

    #[test]
    fn unknown_word_is_kept() {
        assert_eq!(classify("xyzzy", None), Decision::Keep(KeepReason::NotInLexicon));
    }

    #[test]
    fn singular_past_participle_is_kept() {
        let e = entry("VER", "manger", "par:pas;", "s");
        assert_eq!(classify("mangé", Some(&e)), Decision::Keep(KeepReason::SingularParticiple));
    }

    #[test]
    fn plural_past_participle_is_removed() {
        let e = entry("VER", "manger", "par:pas;", "p");
        assert_eq!(
            classify("mangés", Some(&e)),
            Decision::Remove(RemovalReason::PluralParticiple)
        );
    }

    #[test]
    fn past_participle_without_number_is_kept() {
        let e = entry("VER", "finir", "par:pas;", "");
        assert!(classify("fini", Some(&e)).is_kept());
    }

    #[test]
    fn infinitive_by_code() {
        let e = entry("VER", "manger", "inf;", "");
        assert_eq!(classify("manger", Some(&e)), Decision::Keep(KeepReason::Infinitive));
        let e = entry("AUX", "avoir", "inf;", "");
        assert_eq!(classify("eus", Some(&e)), Decision::Keep(KeepReason::Infinitive));
    }

    #[test]
    fn lemma_form_wins_over_any_code_or_number() {
        for infover in ["ind:pre:3s;", "par:pre;", "par:pas;", ""] {
            for nombre in ["s", "p", ""] {
                let e = entry("VER", "sortir", infover, nombre);
                assert_eq!(
                    classify("sortir", Some(&e)),
                    Decision::Keep(KeepReason::Infinitive),
                    "infover={infover:?} nombre={nombre:?}"
                );
            }
        }
    }

    #[test]
    fn present_participle_is_removed() {
        let e = entry("VER", "manger", "par:pre;", "");
        assert_eq!(
            classify("mangeant", Some(&e)),
            Decision::Remove(RemovalReason::PresentParticiple)
        );
    }

    #[test]
    fn present_participle_beats_past_participle() {
        let e = entry("VER", "x", "par:pre;par:pas;", "s");
        assert_eq!(classify("y", Some(&e)), Decision::Remove(RemovalReason::PresentParticiple));
    }

    #[test]
    fn conjugated_forms_are_removed() {
        let e = entry("VER", "manger", "ind:pre:1s;ind:pre:3s;sub:pre:1s;", "");
        assert_eq!(classify("mange", Some(&e)), Decision::Remove(RemovalReason::Conjugated));
        let e = entry("AUX", "être", "ind:pre:3s;", "");
        assert_eq!(classify("est", Some(&e)), Decision::Remove(RemovalReason::Conjugated));
    }

    #[test]
    fn nouns_by_number() {
        let plural = entry("NOM", "cheval", "", "p");
        let singular = entry("NOM", "cheval", "", "s");
        let unspecified = entry("NOM", "souris", "", "");
        assert_eq!(classify("chevaux", Some(&plural)), Decision::Remove(RemovalReason::PluralNoun));
        assert_eq!(classify("cheval", Some(&singular)), Decision::Keep(KeepReason::SingularNoun));
        assert_eq!(classify("souris", Some(&unspecified)), Decision::Keep(KeepReason::SingularNoun));
    }

    #[test]
    fn adjectives_by_number() {
        let plural = entry("ADJ", "grand", "", "p");
        let singular = entry("ADJ", "grand", "", "s");
        assert_eq!(
            classify("grands", Some(&plural)),
            Decision::Remove(RemovalReason::PluralAdjective)
        );
        assert_eq!(classify("grand", Some(&singular)), Decision::Keep(KeepReason::SingularAdjective));
    }

    #[test]
    fn other_categories_are_kept_even_when_plural() {
        let e = entry("ADJ:pos", "notre", "", "p");
        assert_eq!(e.number, Number::Plural);
        assert_eq!(classify("nos", Some(&e)), Decision::Keep(KeepReason::OtherCategory));
    }
}

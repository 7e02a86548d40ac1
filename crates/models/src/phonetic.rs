use pinyin::ToPinyin;

/// Turns a person's name into ordered phonetic tokens
///
/// Implementations must return one token per syllable, in reading order,
/// without tone marks.
pub trait Transliterate: Send + Sync {
    fn syllables(&self, name: &str) -> Vec<String>;
}

/// Search keys derived from a name's phonetic tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticKeys {
    /// All tokens concatenated, e.g. `zhangsan`
    pub pinyin: String,
    /// The first character of each token, e.g. `zs`
    pub abbr_pinyin: String,
}

impl PhoneticKeys {
    pub fn from_syllables<S: AsRef<str>>(syllables: &[S]) -> Self {
        let pinyin = syllables.iter().map(|s| s.as_ref()).collect();
        let abbr_pinyin = syllables
            .iter()
            .filter_map(|s| s.as_ref().chars().next())
            .collect();

        Self {
            pinyin,
            abbr_pinyin,
        }
    }

    /// Computes both keys for `name` using the given transliterator
    pub fn for_name(name: &str, transliterator: &dyn Transliterate) -> Self {
        Self::from_syllables(&transliterator.syllables(name))
    }
}

/// Mandarin transliteration backed by the `pinyin` crate
///
/// Han characters become their plain pinyin. Runs of any other
/// characters are passed through unchanged as a single token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTransliterator;

impl Transliterate for PinyinTransliterator {
    fn syllables(&self, name: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut passthrough = String::new();

        for c in name.chars() {
            match c.to_pinyin() {
                Some(pinyin) => {
                    if !passthrough.is_empty() {
                        tokens.push(std::mem::take(&mut passthrough));
                    }
                    tokens.push(pinyin.plain().to_string());
                }
                None => passthrough.push(c),
            }
        }

        if !passthrough.is_empty() {
            tokens.push(passthrough);
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_from_syllables() {
        let keys = PhoneticKeys::from_syllables(&["zhang", "san"]);

        assert_eq!(keys.pinyin, "zhangsan");
        assert_eq!(keys.abbr_pinyin, "zs");
    }

    #[test]
    fn empty_tokens_do_not_contribute_initials() {
        let keys = PhoneticKeys::from_syllables(&["li", "", "si"]);

        assert_eq!(keys.pinyin, "lisi");
        assert_eq!(keys.abbr_pinyin, "ls");
    }

    #[test]
    fn pinyin_for_han_names() {
        let translit = PinyinTransliterator;

        assert_eq!(translit.syllables("张三"), vec!["zhang", "san"]);
        assert_eq!(
            PhoneticKeys::for_name("李四", &translit),
            PhoneticKeys {
                pinyin: "lisi".into(),
                abbr_pinyin: "ls".into(),
            }
        );
    }

    #[test]
    fn non_han_runs_stay_together() {
        let translit = PinyinTransliterator;

        assert_eq!(translit.syllables("Tom张"), vec!["Tom", "zhang"]);
        assert_eq!(translit.syllables("A B"), vec!["A B"]);
        assert!(translit.syllables("").is_empty());
    }
}

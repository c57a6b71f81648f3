//! Sentence cleanup and keyword emphasis.
//!
//! ImmersionKit sentences occasionally carry decorative characters from
//! their subtitle sources (full-width spaces, a line-join arrow); those are
//! always stripped. On top of the cleanup, the keyword can be wrapped in
//! emphasis markup, either as plain text or together with its bracketed
//! reading annotation.
//!
//! # Example
//!
//! ```
//! use ikit_engine::highlight::emphasize;
//!
//! assert_eq!(emphasize("彼は食べる。", "食べる"), "彼は<b>食べる</b>。");
//! ```

use regex_lite::Regex;

/// Remove decorative characters from a sentence.
///
/// Strips the full-width space (`　`) and the arrow glyph (`→`); identity
/// on sentences without them.
pub fn strip_decorative(sentence: &str) -> String {
    let re = Regex::new(r"[　→]").unwrap();
    re.replace_all(sentence, "").into_owned()
}

/// Wrap every literal occurrence of the keyword in `<b>` markup.
///
/// The sentence is cleaned with [`strip_decorative`] first. The keyword is
/// escaped, so regex metacharacters in it match literally.
pub fn emphasize(sentence: &str, keyword: &str) -> String {
    let sentence = strip_decorative(sentence);
    if keyword.is_empty() {
        return sentence;
    }
    let re = Regex::new(&regex_lite::escape(keyword)).unwrap();
    re.replace_all(&sentence, "<b>${0}</b>").into_owned()
}

/// Wrap occurrences of the keyword together with a bracketed reading
/// annotation (`keyword[reading]`) in `<b>` markup.
///
/// The annotation is kept inside the markup. Occurrences without a
/// bracketed reading are left unmarked, matching the annotated-sentence
/// convention where every highlighted word carries its reading.
pub fn emphasize_reading(sentence: &str, keyword: &str) -> String {
    let sentence = strip_decorative(sentence);
    if keyword.is_empty() {
        return sentence;
    }
    let pattern = format!(r"{}\[[^\]]*\]", regex_lite::escape(keyword));
    let re = Regex::new(&pattern).unwrap();
    re.replace_all(&sentence, "<b>${0}</b>").into_owned()
}

/// Apply the configured emphasis to a sentence.
///
/// With `enabled` off the sentence is only cleaned; `furigana` selects
/// between [`emphasize`] and [`emphasize_reading`].
pub fn highlight(sentence: &str, keyword: &str, furigana: bool, enabled: bool) -> String {
    if !enabled {
        return strip_decorative(sentence);
    }
    if furigana {
        emphasize_reading(sentence, keyword)
    } else {
        emphasize(sentence, keyword)
    }
}

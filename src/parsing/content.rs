//! Content classifier for chat message payloads.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::ContentKind;

/// Face with tears of joy and rolling on the floor laughing.
const LAUGH_EMOJIS: [char; 2] = ['\u{1F602}', '\u{1F923}'];

// "ha", "haha", "ahahah", "hahah" and "lol", "looool", "lolol", "lolll",
// only as the opening word of the text.
static LAUGH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:a*(?:ha)+h?|(?:l+o+)+l+)\b").expect("laugh pattern is valid")
});

/// Returns `true` if `text` contains a laughing emoji or opens with a
/// written laugh.
pub fn is_laugh(text: &str) -> bool {
    text.contains(LAUGH_EMOJIS) || LAUGH_RE.is_match(text)
}

/// Returns the media kind whose omitted-placeholder appears in `text`.
///
/// Matching is case-insensitive and follows [`ContentKind::media`] order.
pub fn omitted_media(text: &str) -> Option<ContentKind> {
    let lower = text.to_lowercase();
    ContentKind::media().iter().copied().find(|kind| {
        kind.placeholder()
            .is_some_and(|placeholder| lower.contains(&placeholder.to_lowercase()))
    })
}

/// Classifies a chat message payload.
///
/// Omitted-media placeholders win over laughter, laughter wins over text.
///
/// # Example
///
/// ```
/// use chatrecon::parsing::classify_content;
/// use chatrecon::ContentKind;
///
/// assert_eq!(classify_content("image omitted"), ContentKind::Image);
/// assert_eq!(classify_content("hahaha"), ContentKind::Laugh);
/// assert_eq!(classify_content("see you"), ContentKind::Text);
/// ```
pub fn classify_content(payload: &str) -> ContentKind {
    if let Some(kind) = omitted_media(payload) {
        return kind;
    }
    if is_laugh(payload) {
        return ContentKind::Laugh;
    }
    ContentKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_placeholder() {
        assert_eq!(classify_content("image omitted"), ContentKind::Image);
        assert_eq!(classify_content("video omitted"), ContentKind::Video);
        assert_eq!(
            classify_content("Contact card omitted"),
            ContentKind::ContactCard
        );
        assert_eq!(classify_content("GIF omitted"), ContentKind::Gif);
        assert_eq!(classify_content("audio omitted"), ContentKind::Audio);
        assert_eq!(classify_content("document omitted"), ContentKind::Document);
    }

    #[test]
    fn test_placeholder_is_case_insensitive_substring() {
        assert_eq!(classify_content("IMAGE OMITTED"), ContentKind::Image);
        assert_eq!(classify_content("gif omitted"), ContentKind::Gif);
        assert_eq!(
            classify_content("report.pdf • 3 pages document omitted"),
            ContentKind::Document
        );
    }

    #[test]
    fn test_placeholder_order() {
        assert_eq!(
            classify_content("video omitted image omitted"),
            ContentKind::Image
        );
    }

    #[test]
    fn test_media_wins_over_laughter() {
        assert_eq!(classify_content("😂 image omitted"), ContentKind::Image);
        assert_eq!(classify_content("haha audio omitted"), ContentKind::Audio);
    }

    #[test]
    fn test_laugh_emojis() {
        assert_eq!(classify_content("😂"), ContentKind::Laugh);
        assert_eq!(classify_content("that's great 🤣🤣"), ContentKind::Laugh);
    }

    #[test]
    fn test_written_laughter() {
        for text in ["ha", "haha", "Hahaha", "hahah", "ahahaha", "lol", "LOL", "looool", "lolll", "lolol", "haha nice", "Ha, Alice was right"] {
            assert_eq!(classify_content(text), ContentKind::Laugh, "{text}");
        }
    }

    #[test]
    fn test_written_laughter_must_open_the_text() {
        for text in ["ok lol", "what a haha", "see you at the hahaha", " haha"] {
            assert_eq!(classify_content(text), ContentKind::Text, "{text}");
        }
        assert_eq!(classify_content("ok 😂"), ContentKind::Laugh);
    }

    #[test]
    fn test_words_containing_laugh_letters_are_text() {
        for text in ["what", "hat", "shah", "lollipop", "Hello", "lo", "hhh", "halo"] {
            assert_eq!(classify_content(text), ContentKind::Text, "{text}");
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify_content("Hello world"), ContentKind::Text);
        assert_eq!(classify_content(""), ContentKind::Text);
        assert_eq!(classify_content("omitted"), ContentKind::Text);
    }

    #[test]
    fn test_is_laugh() {
        assert!(is_laugh("😂 lol"));
        assert!(!is_laugh("😀"));
    }
}

//! Whole-word profanity filter.

/// Words censored from chirps, matched case-insensitively as whole tokens.
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a censored token.
const MASK: &str = "****";

/// Replaces every denylisted token in `text` with the censor mask.
///
/// Tokens are produced by splitting on single spaces. Matching is
/// case-insensitive but whole-token only: substrings inside longer words and
/// punctuation-adjacent variants (`kerfuffle!`) pass through untouched. Runs
/// of spaces collapse to a single space on rejoin.
pub fn censor(text: &str) -> String {
    let tokens: Vec<&str> = text
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let lowered = token.to_lowercase();
            if PROFANE_WORDS.contains(&lowered.as_str()) {
                MASK
            } else {
                token
            }
        })
        .collect();

    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_passes_through() {
        let text = "I had something interesting for breakfast";
        assert_eq!(censor(text), text);
    }

    #[test]
    fn replaces_denylisted_word() {
        assert_eq!(
            censor("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(
            censor("KERFUFFLE Sharbert and fOrNaX"),
            "**** **** and ****"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(censor("kerfuffle kerfuffle"), "**** ****");
    }

    #[test]
    fn substring_inside_longer_word_is_kept() {
        assert_eq!(censor("kerfuffles are loud"), "kerfuffles are loud");
    }

    #[test]
    fn trailing_punctuation_defeats_match() {
        assert_eq!(
            censor("Sharbert! I need to migrate"),
            "Sharbert! I need to migrate"
        );
    }

    #[test]
    fn space_separated_punctuation_does_not_shield() {
        assert_eq!(
            censor("go to bed sooner, Fornax !"),
            "go to bed sooner, **** !"
        );
    }

    #[test]
    fn runs_of_spaces_collapse() {
        assert_eq!(censor("hello   kerfuffle  world"), "hello **** world");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(censor(""), "");
    }
}

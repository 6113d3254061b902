//! Rule-based sentence boundary detection

/// Tokens ending in a period that do not close a sentence (lower-cased)
const ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "al.", "fig.", "figs.", "eq.", "eqs.", "dr.", "vs.", "cf.", "approx.",
    "ref.", "refs.", "resp.", "sec.",
];

/// Characters that may trail a terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];

/// Iterator over sentence byte ranges of a document
///
/// Boundaries are placed after `.`, `!` or `?` (plus trailing closers) when
/// followed by whitespace or the end of text, and at blank lines. Ranges
/// exclude surrounding whitespace; whitespace-only fragments are skipped.
pub struct SentenceSplitter<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> SentenceSplitter<'a> {
    /// Create a splitter over `text`
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Find where the sentence starting at `start` ends (exclusive)
    fn sentence_end(&self, start: usize) -> usize {
        let text = self.text;
        let mut chars = text[start..].char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            let i = start + offset;
            match c {
                '\n' if is_paragraph_break(&text[i + 1..]) => return i,
                '.' | '!' | '?' => {
                    let mut end = i + c.len_utf8();
                    while let Some(&(next_offset, next)) = chars.peek() {
                        if matches!(next, '.' | '!' | '?') || CLOSERS.contains(&next) {
                            end = start + next_offset + next.len_utf8();
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    let at_boundary = text[end..]
                        .chars()
                        .next()
                        .map_or(true, char::is_whitespace);
                    if at_boundary && !(c == '.' && is_abbreviation(&text[start..end], &text[end..])) {
                        return end;
                    }
                }
                _ => {}
            }
        }

        text.len()
    }
}

impl Iterator for SentenceSplitter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.text[self.pos..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                self.pos = self.text.len();
                return None;
            }

            let start = self.pos + (rest.len() - trimmed.len());
            let end = self.sentence_end(start);
            self.pos = end;

            let end = start + self.text[start..end].trim_end().len();
            if end > start {
                return Some((start, end));
            }
        }
    }
}

/// Split `text` into sentence byte ranges
pub fn split_sentences(text: &str) -> Vec<(usize, usize)> {
    SentenceSplitter::new(text).collect()
}

/// Whether the text after a newline begins with an empty line
fn is_paragraph_break(after_newline: &str) -> bool {
    after_newline
        .chars()
        .take_while(|c| c.is_whitespace())
        .any(|c| c == '\n')
}

/// Whether the last token of `sentence` is an abbreviation or an initial
///
/// A single capital followed by a period only counts as an initial inside a
/// name: it must open the sentence or follow a capitalized token, and the
/// text after it must start with a capital.
fn is_abbreviation(sentence: &str, following: &str) -> bool {
    let mut tokens = sentence.split_whitespace().rev().map(strip_openers);
    let token = tokens.next().unwrap_or("");

    if ABBREVIATIONS.contains(&token.to_lowercase().as_str()) {
        return true;
    }
    if !is_initial(token) {
        return false;
    }

    let in_name = tokens.next().map_or(true, starts_uppercase);
    in_name && starts_uppercase(following.trim_start())
}

fn strip_openers(token: &str) -> &str {
    token.trim_start_matches(|c: char| matches!(c, '(' | '[' | '"' | '\'' | '\u{201C}'))
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(initial), Some('.'), None) if initial.is_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        split_sentences(text)
            .into_iter()
            .map(|(start, end)| &text[start..end])
            .collect()
    }

    #[test]
    fn test_basic_split() {
        let text = "First claim here. Second one! Is it third?";
        assert_eq!(
            sentences(text),
            vec!["First claim here.", "Second one!", "Is it third?"]
        );
    }

    #[test]
    fn test_indented_multiline_input() {
        let text = "\n    The experiment demonstrates that X.\n    Results suggest Y.\n    ";
        assert_eq!(
            sentences(text),
            vec!["The experiment demonstrates that X.", "Results suggest Y."]
        );
    }

    #[test]
    fn test_offsets_exclude_whitespace() {
        let text = "  Alpha.   Beta.  ";
        assert_eq!(split_sentences(text), vec![(2, 8), (11, 16)]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let text = "Smith et al. show that e.g. mice respond. See Fig. 2 for details.";
        assert_eq!(
            sentences(text),
            vec![
                "Smith et al. show that e.g. mice respond.",
                "See Fig. 2 for details."
            ]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let text = "J. Doe reveals a trend. It holds.";
        assert_eq!(sentences(text), vec!["J. Doe reveals a trend.", "It holds."]);
    }

    #[test]
    fn test_middle_initial_does_not_split() {
        let text = "Work by John F. Kennedy shows this. Done.";
        assert_eq!(sentences(text), vec!["Work by John F. Kennedy shows this.", "Done."]);
    }

    #[test]
    fn test_trailing_capital_letter_ends_sentence() {
        let text = "The study shows deficits in group A. It might rain tomorrow.";
        assert_eq!(
            sentences(text),
            vec!["The study shows deficits in group A.", "It might rain tomorrow."]
        );

        let text = "Levels of vitamin D. Then X. fell";
        assert_eq!(sentences(text), vec!["Levels of vitamin D.", "Then X.", "fell"]);
    }

    #[test]
    fn test_decimals_do_not_split() {
        let text = "The rate rose 3.5 points. Then it fell.";
        assert_eq!(sentences(text), vec!["The rate rose 3.5 points.", "Then it fell."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let text = "He said \"it works.\" We agree.";
        assert_eq!(sentences(text), vec!["He said \"it works.\"", "We agree."]);
    }

    #[test]
    fn test_paragraph_break_ends_sentence() {
        let text = "A heading without a period\n\nBody text follows.";
        assert_eq!(
            sentences(text),
            vec!["A heading without a period", "Body text follows."]
        );
    }

    #[test]
    fn test_single_newline_does_not_split() {
        let text = "A sentence wrapped\nacross two lines.";
        assert_eq!(sentences(text), vec!["A sentence wrapped\nacross two lines."]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n\t \n").is_empty());
    }

    #[test]
    fn test_no_terminator() {
        assert_eq!(sentences("no terminator at all"), vec!["no terminator at all"]);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Die Studie zeigt Änderungen. Ça marche?";
        assert_eq!(sentences(text), vec!["Die Studie zeigt Änderungen.", "Ça marche?"]);
    }
}

//! Pattern-based entity recognizers
//!
//! Only entities with a recognizable surface format are extracted:
//! - Dates: ISO 8601, MM/DD/YYYY, "January 15, 2024"
//! - Money: $100, $1.5M, "50 dollars"
//! - Percentages: 15%, 3.5 %
//! - Cardinals: standalone numbers not covered by the above
//! - Organizations: runs of two or more capitalized words

use once_cell::sync::Lazy;
use regex::Regex;
use sciclaim_domain::EntityAnnotation;

static DATE_ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap());
static DATE_US: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap());
static DATE_WRITTEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b").unwrap()
});

static MONEY_DOLLAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d[\d,]*(?:\.\d+)?(?:\s*(?:billion|million|thousand|[BMK])\b)?").unwrap()
});
static MONEY_WRITTEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?\s*(?:dollars?|USD|EUR|GBP)\b").unwrap()
});

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\s*%").unwrap());

static CARDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*\b").unwrap());

static ORG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][A-Za-z&\-]+(?:\s+[A-Z][A-Za-z&\-]+)+\b").unwrap()
});

/// A single entity category the rule engine can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    /// Calendar dates
    Date,
    /// Monetary amounts
    Money,
    /// Percentages
    Percent,
    /// Plain numbers
    Cardinal,
    /// Multi-word capitalized names
    Org,
}

impl Recognizer {
    /// Entity label emitted by this recognizer
    pub fn label(&self) -> &'static str {
        match self {
            Recognizer::Date => "DATE",
            Recognizer::Money => "MONEY",
            Recognizer::Percent => "PERCENT",
            Recognizer::Cardinal => "CARDINAL",
            Recognizer::Org => "ORG",
        }
    }

    fn patterns(&self) -> Vec<&'static Regex> {
        match self {
            Recognizer::Date => vec![&*DATE_ISO, &*DATE_US, &*DATE_WRITTEN],
            Recognizer::Money => vec![&*MONEY_DOLLAR, &*MONEY_WRITTEN],
            Recognizer::Percent => vec![&*PERCENT],
            Recognizer::Cardinal => vec![&*CARDINAL],
            Recognizer::Org => vec![&*ORG],
        }
    }

    /// Find matches of this recognizer in `sentence`, skipping overlaps
    ///
    /// `base` is the byte offset of the sentence within the document.
    fn recognize(&self, sentence: &str, base: usize, found: &mut Vec<EntityAnnotation>) {
        for pattern in self.patterns() {
            for m in pattern.find_iter(sentence) {
                let (start, surface) = match self {
                    Recognizer::Org if m.start() == 0 => match drop_first_word(m.as_str()) {
                        Some((offset, rest)) => (offset, rest),
                        None => continue,
                    },
                    _ => (0, m.as_str()),
                };

                let start = base + m.start() + start;
                let end = start + surface.len();
                if !overlaps(found, start, end) {
                    found.push(EntityAnnotation::new(self.label(), surface, start));
                }
            }
        }
    }
}

/// Run `recognizers` in order over one sentence
///
/// Earlier recognizers win overlapping matches. The result is sorted by
/// position so that later entities in the list appear later in the text.
pub fn recognize_all(recognizers: &[Recognizer], sentence: &str, base: usize) -> Vec<EntityAnnotation> {
    let mut found = Vec::new();
    for recognizer in recognizers {
        recognizer.recognize(sentence, base, &mut found);
    }
    found.sort_by_key(|e| e.start);
    found
}

/// Check if a span overlaps with existing entities.
fn overlaps(entities: &[EntityAnnotation], start: usize, end: usize) -> bool {
    entities.iter().any(|e| !(end <= e.start || start >= e.end))
}

/// A capitalized run at the start of a sentence is usually led by an ordinary
/// sentence-initial word; keep the remainder only if it is still multi-word.
fn drop_first_word(run: &str) -> Option<(usize, &str)> {
    let first_end = run.find(char::is_whitespace)?;
    let rest = run[first_end..].trim_start();
    let offset = run.len() - rest.len();
    if rest.split_whitespace().count() >= 2 {
        Some((offset, rest))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled<'a>(entities: &'a [EntityAnnotation], label: &str) -> Vec<&'a str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_date_extraction() {
        let entities = recognize_all(
            &[Recognizer::Date],
            "Meeting on 2024-01-15 and January 20, 2024.",
            0,
        );
        assert_eq!(labelled(&entities, "DATE"), vec!["2024-01-15", "January 20, 2024"]);
    }

    #[test]
    fn test_money_extraction() {
        let entities = recognize_all(&[Recognizer::Money], "Cost is $100.50 or 50 dollars.", 0);
        assert_eq!(labelled(&entities, "MONEY"), vec!["$100.50", "50 dollars"]);
    }

    #[test]
    fn test_percent_extraction() {
        let entities = recognize_all(&[Recognizer::Percent], "Improved by 15% and 3.5 %.", 0);
        assert_eq!(labelled(&entities, "PERCENT"), vec!["15%", "3.5 %"]);
    }

    #[test]
    fn test_cardinal_skips_covered_numbers() {
        let entities = recognize_all(
            &[Recognizer::Percent, Recognizer::Cardinal],
            "Of 250 samples, 40% failed.",
            0,
        );
        assert_eq!(labelled(&entities, "PERCENT"), vec!["40%"]);
        assert_eq!(labelled(&entities, "CARDINAL"), vec!["250"]);
    }

    #[test]
    fn test_org_mid_sentence() {
        let entities = recognize_all(
            &[Recognizer::Org],
            "Data from the Max Planck Institute shows a shift.",
            0,
        );
        assert_eq!(labelled(&entities, "ORG"), vec!["Max Planck Institute"]);
    }

    #[test]
    fn test_org_at_sentence_start_drops_first_word() {
        let entities = recognize_all(&[Recognizer::Org], "The Acme Research Lab reports gains.", 0);
        assert_eq!(labelled(&entities, "ORG"), vec!["Acme Research Lab"]);
        assert_eq!(entities[0].start, 4);
    }

    #[test]
    fn test_single_capitalized_word_is_not_org() {
        let entities = recognize_all(&[Recognizer::Org], "Results suggest Boston is cold.", 0);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_offsets_are_document_relative() {
        let sentence = "Yield rose 12%.";
        let entities = recognize_all(&[Recognizer::Percent], sentence, 100);
        assert_eq!(entities[0].start, 111);
        assert_eq!(entities[0].end, 114);
    }

    #[test]
    fn test_sorted_by_position() {
        let entities = recognize_all(
            &[Recognizer::Percent, Recognizer::Money],
            "We spent $5M to gain 3%.",
            0,
        );
        assert_eq!(entities[0].label, "MONEY");
        assert_eq!(entities[1].label, "PERCENT");
    }
}

//! Sentence spans and the entity annotations attached to them

/// A named entity recognized inside a sentence
///
/// Offsets are byte offsets into the document the sentence was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityAnnotation {
    /// Category label (e.g. `PERCENT`, `ORG`)
    pub label: String,

    /// Surface text as it appears in the document
    pub text: String,

    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,
}

impl EntityAnnotation {
    /// Create a new annotation starting at `start`
    pub fn new(label: impl Into<String>, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            label: label.into(),
            text,
            start,
            end,
        }
    }
}

/// One sentence of a document, as produced by a linguistic engine
///
/// Spans are immutable once produced and carry their own entity annotations
/// in the order the engine recognized them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Start byte offset in the document (inclusive)
    pub start: usize,

    /// End byte offset in the document (exclusive)
    pub end: usize,

    /// Sentence text, exactly `document[start..end]`
    pub text: String,

    /// Entities recognized inside this sentence
    pub entities: Vec<EntityAnnotation>,
}

impl SentenceSpan {
    /// Create a span for `text` starting at byte offset `start`
    ///
    /// # Examples
    ///
    /// ```
    /// use sciclaim_domain::SentenceSpan;
    ///
    /// let span = SentenceSpan::new(4, "Growth rose by 12%.")
    ///     .with_entity("PERCENT", "12%");
    /// assert_eq!(span.end, 4 + span.text.len());
    /// assert_eq!(span.entities[0].start, 19);
    /// assert!(span.validate().is_ok());
    /// ```
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            start,
            end,
            text,
            entities: Vec::new(),
        }
    }

    /// Attach an entity, locating `surface` in the sentence text
    ///
    /// The search starts after the previously attached entity, so repeated
    /// surface forms get successive offsets. If `surface` does not occur the
    /// annotation is recorded with an empty range, which [`validate`] rejects.
    ///
    /// [`validate`]: SentenceSpan::validate
    pub fn with_entity(mut self, label: impl Into<String>, surface: impl Into<String>) -> Self {
        let surface = surface.into();
        let from = self
            .entities
            .last()
            .map(|e| e.end.saturating_sub(self.start))
            .unwrap_or(0)
            .min(self.text.len());

        let annotation = match self.text.get(from..).and_then(|rest| rest.find(&surface)) {
            Some(offset) => EntityAnnotation::new(label, surface, self.start + from + offset),
            None => EntityAnnotation {
                label: label.into(),
                text: surface,
                start: self.end,
                end: self.end,
            },
        };
        self.entities.push(annotation);
        self
    }

    /// Append an already-positioned annotation
    pub fn push_entity(&mut self, entity: EntityAnnotation) {
        self.entities.push(entity);
    }

    /// Number of bytes covered by the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check that offsets and annotations are internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.start > self.end {
            return Err(format!("span start {} > end {}", self.start, self.end));
        }
        if self.end - self.start != self.text.len() {
            return Err(format!(
                "span covers {} bytes but text has {}",
                self.end - self.start,
                self.text.len()
            ));
        }
        for (idx, entity) in self.entities.iter().enumerate() {
            if entity.label.trim().is_empty() {
                return Err(format!("entity {} has an empty label", idx));
            }
            if entity.text.is_empty() {
                return Err(format!("entity {} ({}) has empty text", idx, entity.label));
            }
            if entity.start < self.start || entity.end > self.end || entity.start > entity.end {
                return Err(format!(
                    "entity {} ({}) at {}..{} lies outside sentence {}..{}",
                    idx, entity.label, entity.start, entity.end, self.start, self.end
                ));
            }
            if entity.end - entity.start != entity.text.len() {
                return Err(format!(
                    "entity {} ({}) covers {} bytes but text has {}",
                    idx,
                    entity.label,
                    entity.end - entity.start,
                    entity.text.len()
                ));
            }
        }
        Ok(())
    }
}

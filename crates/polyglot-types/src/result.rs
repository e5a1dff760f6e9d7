/// Ordered label -> text mapping produced by one dispatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationResult {
    entries: Vec<(String, String)>,
}

impl TranslationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a label, keeping its first position
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        let label = label.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((label, text)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, text)| text.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, text)| (label.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_stay_unique_and_ordered() {
        let mut result = TranslationResult::new();
        result.insert("DeepL Ver.", "a");
        result.insert("GPT (gpt-4o) Ver.", "b");
        result.insert("DeepL Ver.", "c");

        assert_eq!(result.len(), 2);
        assert_eq!(
            result.labels().collect::<Vec<_>>(),
            vec!["DeepL Ver.", "GPT (gpt-4o) Ver."]
        );
        assert_eq!(result.get("DeepL Ver."), Some("c"));
    }
}

//! Unsaved product form state.

/// Local form state for a product that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProductDraft {
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Image URL.
    pub image: String,
}

impl NewProductDraft {
    /// Creates a draft from its three fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    /// Returns whether every required field is filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty() && !self.image.is_empty()
    }

    /// Resets all fields to empty strings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_completeness() {
        assert!(!NewProductDraft::default().is_complete());
        assert!(!NewProductDraft::new("A", "", "C").is_complete());
        assert!(NewProductDraft::new("A", "B", "C").is_complete());
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut draft = NewProductDraft::new("A", "B", "C");
        draft.clear();
        assert_eq!(draft, NewProductDraft::default());
    }
}

//! Form for creating a new product.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::domain::entities::NewProductDraft;
use crate::domain::ports::CatalogActions;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

/// Field of the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Product name.
    Name,
    /// Product description.
    Description,
    /// Image URL.
    Image,
}

impl DraftField {
    /// Fields in focus order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Description, Self::Image];
}

/// Result of submitting a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSubmit {
    /// Request dispatched.
    Sent,
    /// A required field is empty or out of bounds; nothing was sent.
    Incomplete,
}

/// Add-product form. Field values mirror the catalog draft.
pub struct AddProductForm {
    name: TextInput,
    description: TextInput,
    image: TextInput,
    actions: Arc<dyn CatalogActions>,
    theme: Theme,
}

impl AddProductForm {
    /// Creates an empty form that submits through `actions`.
    #[must_use]
    pub fn new(actions: Arc<dyn CatalogActions>, theme: Theme) -> Self {
        Self {
            name: TextInput::new("Name").required().accent(theme.accent),
            description: TextInput::new("Description")
                .required()
                .accent(theme.accent),
            image: TextInput::new("Image URL")
                .required()
                .placeholder("https://")
                .accent(theme.accent),
            actions,
            theme,
        }
    }

    /// Returns the current field values as a draft.
    #[must_use]
    pub fn draft(&self) -> NewProductDraft {
        NewProductDraft::new(self.name.value(), self.description.value(), self.image.value())
    }

    /// Overwrites the fields with the given draft.
    pub fn load_draft(&mut self, draft: &NewProductDraft) {
        self.name.set_value(draft.name.clone());
        self.description.set_value(draft.description.clone());
        self.image.set_value(draft.image.clone());
    }

    /// Moves focus to `field`, or clears focus with `None`.
    pub fn focus(&mut self, field: Option<DraftField>) {
        self.name.set_focused(field == Some(DraftField::Name));
        self.description
            .set_focused(field == Some(DraftField::Description));
        self.image.set_focused(field == Some(DraftField::Image));
    }

    /// Forwards an editing key to a field.
    pub fn handle_key(&mut self, field: DraftField, key: KeyEvent) -> bool {
        self.input_mut(field).handle_key(key)
    }

    /// Sends the draft if every field is filled in.
    ///
    /// The form is not cleared here; it is reset from the catalog draft once
    /// the server confirms creation.
    pub fn submit(&self) -> FormSubmit {
        let draft = self.draft();
        if !draft.is_complete() {
            return FormSubmit::Incomplete;
        }
        self.actions.add_product(draft);
        FormSubmit::Sent
    }

    fn input_mut(&mut self, field: DraftField) -> &mut TextInput {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Image => &mut self.image,
        }
    }
}

impl Widget for &AddProductForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.muted))
            .title(" Add a New Product ")
            .title_style(self.theme.title());
        let inner = block.inner(area);
        block.render(area, buf);

        let [name, description, image] = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .areas(inner);

        (&self.name).render(name, buf);
        (&self.description).render(description, buf);
        (&self.image).render(image, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{RecordedCall, RecordingActions};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_into(form: &mut AddProductForm, field: DraftField, text: &str) {
        for c in text.chars() {
            form.handle_key(field, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_submit_sends_draft() {
        let actions = Arc::new(RecordingActions::new());
        let mut form = AddProductForm::new(actions.clone(), Theme::default());
        type_into(&mut form, DraftField::Name, "A");
        type_into(&mut form, DraftField::Description, "B");
        type_into(&mut form, DraftField::Image, "C");

        assert_eq!(form.submit(), FormSubmit::Sent);
        assert_eq!(
            actions.calls(),
            vec![RecordedCall::AddProduct(NewProductDraft::new("A", "B", "C"))]
        );
        assert_eq!(form.draft(), NewProductDraft::new("A", "B", "C"));
    }

    #[test]
    fn test_incomplete_draft_is_not_sent() {
        let actions = Arc::new(RecordingActions::new());
        let mut form = AddProductForm::new(actions.clone(), Theme::default());
        type_into(&mut form, DraftField::Name, "A");

        assert_eq!(form.submit(), FormSubmit::Incomplete);
        assert!(actions.calls().is_empty());
    }

    #[test]
    fn test_load_draft_resets_fields() {
        let mut form = AddProductForm::new(Arc::new(RecordingActions::new()), Theme::default());
        type_into(&mut form, DraftField::Name, "Kettle");

        form.load_draft(&NewProductDraft::default());

        assert_eq!(form.draft(), NewProductDraft::default());
    }
}

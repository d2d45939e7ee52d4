//! Product card: one product, its reviews and a review form.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{MAX_RATING, MIN_RATING, Product, ProductId, Review};
use crate::domain::ports::CatalogActions;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FormSubmit, TextInput};

/// Field of the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    /// Reviewer name.
    User,
    /// Star rating.
    Rating,
    /// Review text.
    Comment,
}

impl ReviewField {
    /// Fields in focus order.
    pub const ALL: [Self; 3] = [Self::User, Self::Rating, Self::Comment];
}

/// Review form state for one product.
///
/// Holds only field values; the product itself is read from the catalog on
/// every render.
pub struct ProductCard {
    product_id: ProductId,
    user: TextInput,
    rating: TextInput,
    comment: TextInput,
    actions: Arc<dyn CatalogActions>,
}

impl ProductCard {
    /// Creates an empty review form for `product_id`.
    #[must_use]
    pub fn new(product_id: ProductId, actions: Arc<dyn CatalogActions>, theme: &Theme) -> Self {
        Self {
            product_id,
            user: TextInput::new("User").required().accent(theme.accent),
            rating: TextInput::new("Rating")
                .required()
                .numeric(MIN_RATING, MAX_RATING)
                .accent(theme.accent),
            comment: TextInput::new("Comment").required().accent(theme.accent),
            actions,
        }
    }

    /// Returns the product this card belongs to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Moves focus to `field`, or clears focus with `None`.
    pub fn focus(&mut self, field: Option<ReviewField>) {
        self.user.set_focused(field == Some(ReviewField::User));
        self.rating.set_focused(field == Some(ReviewField::Rating));
        self.comment.set_focused(field == Some(ReviewField::Comment));
    }

    /// Forwards an editing key to a field.
    pub fn handle_key(&mut self, field: ReviewField, key: KeyEvent) -> bool {
        self.input_mut(field).handle_key(key)
    }

    /// Forwards the review to the catalog if every field is filled in and the
    /// rating is in range. Field values are kept either way.
    pub fn submit(&self) -> FormSubmit {
        let Some(rating) = self.rating.numeric_value() else {
            return FormSubmit::Incomplete;
        };
        let review = Review::new(self.user.value(), rating, self.comment.value());
        if !review.is_complete() || !review.has_valid_rating() {
            return FormSubmit::Incomplete;
        }
        self.actions
            .submit_review(self.product_id.clone(), review);
        FormSubmit::Sent
    }

    /// Requests deletion of this card's product.
    pub fn delete(&self) {
        self.actions.delete_product(self.product_id.clone());
    }

    fn input_mut(&mut self, field: ReviewField) -> &mut TextInput {
        match field {
            ReviewField::User => &mut self.user,
            ReviewField::Rating => &mut self.rating,
            ReviewField::Comment => &mut self.comment,
        }
    }
}

/// Renders a product together with its card form.
pub struct ProductCardView<'a> {
    product: &'a Product,
    card: &'a ProductCard,
    theme: Theme,
    deletable: bool,
}

impl<'a> ProductCardView<'a> {
    /// Creates the view for a product and its card.
    #[must_use]
    pub const fn new(product: &'a Product, card: &'a ProductCard, theme: Theme) -> Self {
        Self {
            product,
            card,
            theme,
            deletable: false,
        }
    }

    /// Shows the delete hint in the card title.
    #[must_use]
    pub const fn deletable(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }

    fn details(&self) -> Vec<Line<'a>> {
        let product = self.product;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Image: ", self.theme.muted_text()),
                Span::raw(product.image()),
            ]),
            Line::from(product.description()),
            Line::default(),
            Line::from(Span::styled(
                "Reviews:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        if product.reviews().is_empty() {
            lines.push(Line::from(Span::styled(
                "  No reviews yet",
                self.theme.muted_text(),
            )));
        }
        for review in product.reviews() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    review.user().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}/5: {}", review.rating(), review.comment())),
            ]));
        }
        lines
    }
}

impl Widget for ProductCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = format!(" {} ", self.product.name());
        if let Some(avg) = self.product.average_rating() {
            title.push_str(&format!("★ {avg:.1} "));
        }
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(title)
            .title_style(self.theme.title());
        if self.deletable {
            block = block.title_bottom(Line::from(" Ctrl+D: Delete Product ").right_aligned());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let [details, label, fields, comment] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        Paragraph::new(self.details())
            .wrap(Wrap { trim: false })
            .render(details, buf);

        Paragraph::new(Line::from(Span::styled(
            "Add a Review:",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .render(label, buf);

        let [user, rating] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(fields);
        (&self.card.user).render(user, buf);
        (&self.card.rating).render(rating, buf);
        (&self.card.comment).render(comment, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{RecordedCall, RecordingActions};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn card(actions: &Arc<RecordingActions>) -> ProductCard {
        ProductCard::new(ProductId::new("p1"), actions.clone(), &Theme::default())
    }

    fn fill(card: &mut ProductCard, field: ReviewField, text: &str) {
        for c in text.chars() {
            card.handle_key(field, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_submit_forwards_review() {
        let actions = Arc::new(RecordingActions::new());
        let mut card = card(&actions);
        fill(&mut card, ReviewField::User, "ann");
        fill(&mut card, ReviewField::Rating, "4");
        fill(&mut card, ReviewField::Comment, "works well");

        assert_eq!(card.submit(), FormSubmit::Sent);
        assert_eq!(
            actions.calls(),
            vec![RecordedCall::SubmitReview(
                ProductId::new("p1"),
                Review::new("ann", 4, "works well")
            )]
        );
    }

    #[test]
    fn test_submit_keeps_form_values() {
        let actions = Arc::new(RecordingActions::new());
        let mut card = card(&actions);
        fill(&mut card, ReviewField::User, "ann");
        fill(&mut card, ReviewField::Rating, "4");
        fill(&mut card, ReviewField::Comment, "ok");

        card.submit();
        card.submit();

        assert_eq!(actions.calls().len(), 2);
    }

    #[test]
    fn test_out_of_range_rating_blocks_submit() {
        let actions = Arc::new(RecordingActions::new());
        let mut card = card(&actions);
        fill(&mut card, ReviewField::User, "ann");
        fill(&mut card, ReviewField::Rating, "9");
        fill(&mut card, ReviewField::Comment, "too good");

        assert_eq!(card.submit(), FormSubmit::Incomplete);
        assert!(actions.calls().is_empty());
    }

    #[test]
    fn test_missing_comment_blocks_submit() {
        let actions = Arc::new(RecordingActions::new());
        let mut card = card(&actions);
        fill(&mut card, ReviewField::User, "ann");
        fill(&mut card, ReviewField::Rating, "3");

        assert_eq!(card.submit(), FormSubmit::Incomplete);
        assert!(actions.calls().is_empty());
    }

    #[test]
    fn test_missing_rating_blocks_submit() {
        let actions = Arc::new(RecordingActions::new());
        let mut card = card(&actions);
        fill(&mut card, ReviewField::User, "ann");
        fill(&mut card, ReviewField::Comment, "no stars given");

        assert_eq!(card.submit(), FormSubmit::Incomplete);
        assert!(actions.calls().is_empty());
    }

    #[test]
    fn test_delete_forwards_id() {
        let actions = Arc::new(RecordingActions::new());
        card(&actions).delete();
        assert_eq!(
            actions.calls(),
            vec![RecordedCall::DeleteProduct(ProductId::new("p1"))]
        );
    }

    #[test]
    fn test_render_lists_reviews() {
        let actions = Arc::new(RecordingActions::new());
        let card = card(&actions);
        let product = Product::new("p1", "Lamp", "Warm light", "http://img/lamp.png")
            .with_reviews(vec![Review::new("kim", 5, "cozy")]);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        ProductCardView::new(&product, &card, Theme::default()).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Lamp"));
        assert!(text.contains("kim - 5/5: cozy"));
        assert!(text.contains("Add a Review:"));
    }
}

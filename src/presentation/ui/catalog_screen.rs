//! Catalog screen: add-product form, render gate and product cards.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};
use tracing::debug;

use crate::application::services::{CatalogState, CatalogView};
use crate::domain::entities::{NewProductDraft, Product};
use crate::domain::ports::CatalogActions;
use crate::presentation::events::{EventResult, KeyAction};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    AddProductForm, DraftField, FormSubmit, ProductCard, ProductCardView, ReviewField, StatusBar,
};

const APP_TITLE: &str = "Product Review Platform";

/// Which input currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A field of the add-product form.
    Draft(DraftField),
    /// A review field of the selected product card.
    Review(ReviewField),
}

impl Focus {
    const RING: [Self; 6] = [
        Self::Draft(DraftField::Name),
        Self::Draft(DraftField::Description),
        Self::Draft(DraftField::Image),
        Self::Review(ReviewField::User),
        Self::Review(ReviewField::Rating),
        Self::Review(ReviewField::Comment),
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// UI-only state of the catalog screen.
pub struct CatalogScreenState {
    add_form: AddProductForm,
    cards: Vec<ProductCard>,
    selected: usize,
    focus: Focus,
    actions: Arc<dyn CatalogActions>,
    theme: Theme,
    enable_delete: bool,
    show_help: bool,
    notice: Option<StatusBar>,
}

impl CatalogScreenState {
    /// Creates the screen with focus on the product name field.
    #[must_use]
    pub fn new(actions: Arc<dyn CatalogActions>, theme: Theme) -> Self {
        let mut state = Self {
            add_form: AddProductForm::new(Arc::clone(&actions), theme),
            cards: Vec::new(),
            selected: 0,
            focus: Focus::Draft(DraftField::Name),
            actions,
            theme,
            enable_delete: false,
            show_help: true,
            notice: None,
        };
        state.apply_focus();
        state
    }

    /// Enables the delete key on product cards.
    #[must_use]
    pub const fn with_delete(mut self, enabled: bool) -> Self {
        self.enable_delete = enabled;
        self
    }

    /// Shows or hides the key hint footer.
    #[must_use]
    pub const fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Returns the focused input.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the index of the selected product.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the transient form notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(StatusBar::message)
    }

    /// Resets the add-product form to the catalog draft.
    pub fn load_draft(&mut self, draft: &NewProductDraft) {
        self.add_form.load_draft(draft);
    }

    /// Rebuilds cards to match the product collection.
    ///
    /// Cards are matched by product id so typed review text survives
    /// reconciliation; the selection follows the selected product.
    pub fn sync(&mut self, products: &[Product]) {
        let selected_id = self
            .cards
            .get(self.selected)
            .map(|card| card.product_id().clone());

        let mut previous = std::mem::take(&mut self.cards);
        self.cards = products
            .iter()
            .map(|product| {
                match previous.iter().position(|c| c.product_id() == product.id()) {
                    Some(index) => previous.swap_remove(index),
                    None => ProductCard::new(
                        product.id().clone(),
                        Arc::clone(&self.actions),
                        &self.theme,
                    ),
                }
            })
            .collect();

        self.selected = selected_id
            .and_then(|id| self.cards.iter().position(|c| c.product_id() == &id))
            .unwrap_or_else(|| self.selected.min(self.cards.len().saturating_sub(1)));

        if self.cards.is_empty() && matches!(self.focus, Focus::Review(_)) {
            self.focus = Focus::Draft(DraftField::Name);
        }
        self.apply_focus();
    }

    /// Handles a key press against the current catalog state.
    pub fn handle_key(&mut self, key: KeyEvent, catalog: &CatalogState) -> EventResult {
        let cards_visible = self.cards_visible(catalog);
        if !cards_visible && matches!(self.focus, Focus::Review(_)) {
            self.focus = Focus::Draft(DraftField::Name);
            self.apply_focus();
        }

        match KeyAction::from_key(&key) {
            Some(KeyAction::Quit) => return EventResult::Exit,
            Some(KeyAction::NextField) => self.cycle_focus(true, cards_visible),
            Some(KeyAction::PrevField) => self.cycle_focus(false, cards_visible),
            Some(KeyAction::SelectNext) if cards_visible => {
                self.selected = (self.selected + 1) % self.cards.len();
                self.apply_focus();
            }
            Some(KeyAction::SelectPrev) if cards_visible => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.cards.len() - 1);
                self.apply_focus();
            }
            Some(KeyAction::Delete) if cards_visible && self.enable_delete => {
                if let Some(card) = self.cards.get(self.selected) {
                    debug!(product_id = %card.product_id(), "Delete requested");
                    card.delete();
                }
            }
            Some(KeyAction::Submit) => self.submit(),
            Some(_) => {}
            None => {
                let consumed = match self.focus {
                    Focus::Draft(field) => self.add_form.handle_key(field, key),
                    Focus::Review(field) => self
                        .cards
                        .get_mut(self.selected)
                        .is_some_and(|card| card.handle_key(field, key)),
                };
                if consumed {
                    self.notice = None;
                }
            }
        }
        EventResult::Continue
    }

    fn submit(&mut self) {
        let result = match self.focus {
            Focus::Draft(_) => self.add_form.submit(),
            Focus::Review(_) => match self.cards.get(self.selected) {
                Some(card) => card.submit(),
                None => return,
            },
        };
        self.notice = match (result, self.focus) {
            (FormSubmit::Sent, _) => None,
            (FormSubmit::Incomplete, Focus::Draft(_)) => Some(StatusBar::warning(
                "Please fill in name, description and image URL",
            )),
            (FormSubmit::Incomplete, Focus::Review(_)) => Some(StatusBar::warning(
                "A review needs a user, a rating from 1 to 5 and a comment",
            )),
        };
    }

    fn cards_visible(&self, catalog: &CatalogState) -> bool {
        matches!(catalog.view(), CatalogView::Content(products) if !products.is_empty())
            && !self.cards.is_empty()
    }

    fn cycle_focus(&mut self, forward: bool, cards_visible: bool) {
        let ring_len = if cards_visible {
            Focus::RING.len()
        } else {
            DraftField::ALL.len()
        };
        let current = self.focus.position() % ring_len;
        let next = if forward {
            (current + 1) % ring_len
        } else {
            (current + ring_len - 1) % ring_len
        };
        self.focus = Focus::RING[next];
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        let draft_field = match self.focus {
            Focus::Draft(field) => Some(field),
            Focus::Review(_) => None,
        };
        self.add_form.focus(draft_field);

        for (index, card) in self.cards.iter_mut().enumerate() {
            let field = match self.focus {
                Focus::Review(field) if index == self.selected => Some(field),
                _ => None,
            };
            card.focus(field);
        }
    }

    fn footer(&self) -> Option<StatusBar> {
        let mut hints = String::from("Tab: Next field | Enter: Submit | ↑/↓: Select");
        if self.enable_delete {
            hints.push_str(" | Ctrl+D: Delete");
        }
        hints.push_str(" | Ctrl+Q: Quit ");

        match (&self.notice, self.show_help) {
            (Some(notice), true) => Some(notice.clone().right(hints)),
            (Some(notice), false) => Some(notice.clone()),
            (None, true) => Some(StatusBar::new().right(hints)),
            (None, false) => None,
        }
    }
}

/// Catalog screen widget, rendered from the catalog state.
pub struct CatalogScreen<'a> {
    catalog: &'a CatalogState,
}

impl<'a> CatalogScreen<'a> {
    /// Creates the widget for the given catalog state.
    #[must_use]
    pub const fn new(catalog: &'a CatalogState) -> Self {
        Self { catalog }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [title, count] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(area);
        Paragraph::new(Line::from(Span::styled(format!(" {APP_TITLE}"), theme.title())))
            .render(title, buf);

        if !self.catalog.is_loading() {
            Paragraph::new(format!("{} products ", self.catalog.products().len()))
                .style(theme.muted_text())
                .alignment(Alignment::Right)
                .render(count, buf);
        }
    }

    fn render_products(
        products: &[Product],
        area: Rect,
        buf: &mut Buffer,
        state: &CatalogScreenState,
    ) {
        let theme = state.theme;
        if products.is_empty() || state.cards.is_empty() {
            Paragraph::new("No products yet. Add one above.")
                .style(theme.muted_text())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let [list_area, card_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(area);

        let items: Vec<ListItem> = products
            .iter()
            .map(|product| {
                let reviews = product.reviews().len();
                ListItem::new(Line::from(vec![
                    Span::raw(product.name()),
                    Span::styled(format!(" ({reviews})"), theme.muted_text()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.muted_text())
                    .title(" Products "),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(state.selected));
        StatefulWidget::render(list, list_area, buf, &mut list_state);

        let selected = state.cards.get(state.selected).and_then(|card| {
            products
                .iter()
                .find(|p| p.id() == card.product_id())
                .map(|product| (product, card))
        });
        if let Some((product, card)) = selected {
            ProductCardView::new(product, card, theme)
                .deletable(state.enable_delete)
                .render(card_area, buf);
        }
    }
}

impl StatefulWidget for CatalogScreen<'_> {
    type State = CatalogScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let footer = state.footer();
        let footer_height = u16::from(footer.is_some());
        let [header, form, body, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        self.render_header(header, buf, &state.theme);
        (&state.add_form).render(form, buf);

        match self.catalog.view() {
            CatalogView::Loading => {
                Paragraph::new("Loading...")
                    .alignment(Alignment::Center)
                    .style(state.theme.muted_text().add_modifier(Modifier::ITALIC))
                    .render(body, buf);
            }
            CatalogView::Error(message) => {
                Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .style(state.theme.error_text().add_modifier(Modifier::BOLD))
                    .wrap(Wrap { trim: true })
                    .render(body, buf);
            }
            CatalogView::Content(products) => {
                Self::render_products(products, body, buf, state);
            }
        }

        if let Some(footer) = footer {
            (&footer).render(footer_area, buf);
        }
    }
}

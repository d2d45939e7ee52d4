//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::dto::{CatalogCommand, CatalogOutcome};
use crate::application::services::CatalogCommandSender;
use crate::application::use_cases::CatalogController;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{CatalogScreen, CatalogScreenState};

/// Owns the catalog controller and the screen, and runs the event loop.
pub struct App {
    controller: CatalogController,
    screen: CatalogScreenState,
    command_rx: mpsc::UnboundedReceiver<CatalogCommand>,
    outcome_tx: mpsc::UnboundedSender<CatalogOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<CatalogOutcome>,
    exiting: bool,
}

impl App {
    /// Creates the app with a catalog screen configured from `config`.
    #[must_use]
    pub fn new(controller: CatalogController, config: &AppConfig) -> Self {
        let (sender, command_rx) = CatalogCommandSender::channel();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let screen = CatalogScreenState::new(Arc::new(sender), Theme::from_config(&config.ui))
            .with_delete(config.enable_delete)
            .with_help(config.ui.show_help);

        Self {
            controller,
            screen,
            command_rx,
            outcome_tx,
            outcome_rx,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.dispatch(CatalogCommand::Load);
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(outcome) = self.outcome_rx.recv() => {
                    self.handle_outcome(outcome);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(command) = self.command_rx.recv() => {
                    self.dispatch(command);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.exiting = true;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.screen.handle_key(key, self.controller.state()),
            _ => EventResult::Continue,
        }
    }

    /// Runs a command on a background task; its outcome comes back through
    /// the outcome channel.
    fn dispatch(&mut self, command: CatalogCommand) {
        let Some(command) = self.controller.prepare(command) else {
            return;
        };

        let port = self.controller.port();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = CatalogController::perform(port.as_ref(), command).await;
            if tx.send(outcome).is_err() {
                debug!("Application closed before the catalog response arrived");
            }
        });
    }

    fn handle_outcome(&mut self, outcome: CatalogOutcome) {
        let added = matches!(outcome, CatalogOutcome::Added(Ok(_)));
        self.controller.apply(outcome);

        let state = self.controller.state();
        self.screen.sync(state.products());
        if added {
            self.screen.load_draft(state.draft());
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(
            CatalogScreen::new(self.controller.state()),
            frame.area(),
            &mut self.screen,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::CatalogView;
    use crate::domain::entities::{NewProductDraft, Product};
    use crate::domain::ports::mocks::MockCatalogPort;

    fn app_with(port: MockCatalogPort) -> (App, Arc<MockCatalogPort>) {
        let port = Arc::new(port);
        let controller = CatalogController::new(port.clone());
        (App::new(controller, &AppConfig::default()), port)
    }

    async fn settle(app: &mut App) {
        if let Some(outcome) = app.outcome_rx.recv().await {
            app.handle_outcome(outcome);
        }
    }

    #[tokio::test]
    async fn test_load_fills_catalog() {
        let (mut app, _) = app_with(MockCatalogPort::with_products(vec![Product::new(
            "p1", "Kettle", "Boils", "http://img",
        )]));
        assert!(app.controller.state().is_loading());

        app.dispatch(CatalogCommand::Load);
        settle(&mut app).await;

        assert!(matches!(
            app.controller.state().view(),
            CatalogView::Content(products) if products.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_second_load_is_not_sent() {
        let (mut app, port) = app_with(MockCatalogPort::with_products(vec![]));

        app.dispatch(CatalogCommand::Load);
        settle(&mut app).await;
        app.dispatch(CatalogCommand::Load);

        assert!(app.outcome_rx.try_recv().is_err());
        assert_eq!(port.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_added_product_resets_form_from_draft() {
        let (mut app, _) = app_with(MockCatalogPort::with_products(vec![]));
        app.dispatch(CatalogCommand::Load);
        settle(&mut app).await;

        app.dispatch(CatalogCommand::AddProduct(NewProductDraft::new(
            "Lamp", "Warm", "http://img",
        )));
        settle(&mut app).await;

        let state = app.controller.state();
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.draft(), &NewProductDraft::default());
    }

    #[tokio::test]
    async fn test_failed_load_sets_error() {
        let (mut app, _) = app_with(MockCatalogPort::failing());

        app.dispatch(CatalogCommand::Load);
        settle(&mut app).await;

        assert_eq!(
            app.controller.state().view(),
            CatalogView::Error("Failed to fetch products")
        );
    }
}

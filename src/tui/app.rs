use crate::config::Config;
use crate::core::{
    additional_column_options, layout_metadata, row_labels, Dataset, MetadataLayout,
    SelectionState,
};
use crate::error::DashboardError;
use crate::services::{fetch_image, DatasetLoader, ImageResolver, ObjectFetcher, UrlSigner};
use crate::tui::components::{
    ColumnPicker, DataPreview, HelpOverlay, ImagePanel, ImageState, MetadataPanels, RowSelector,
};
use crate::tui::{Action, Component, Focusable, KeyBindings, Theme};
use color_eyre::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, info, warn};

pub const APP_TITLE: &str = "S3 Image Viewer with Metadata";

const SIDEBAR_WIDTH: u16 = 42;

/// Whether a dataset has been loaded yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Unloaded,
    Loaded,
}

/// Widget receiving navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Columns,
    Rows,
    Preview,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Columns => Focus::Rows,
            Focus::Rows => Focus::Preview,
            Focus::Preview => Focus::Columns,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Columns => Focus::Preview,
            Focus::Rows => Focus::Columns,
            Focus::Preview => Focus::Rows,
        }
    }
}

/// Loaded table plus what the user picked in the sidebar
#[derive(Default)]
struct Session {
    dataset: Option<Dataset>,
    labels: Vec<String>,
    selection: SelectionState,
    current_row: Option<usize>,
}

/// Dashboard shell
///
/// Owns the session and the widgets. Every selection change triggers a full
/// re-render pass: labels, row resolution, image signing and download, metadata.
pub struct App {
    signer: Box<dyn UrlSigner>,
    fetcher: Box<dyn ObjectFetcher>,
    loader: DatasetLoader,
    image_resolver: ImageResolver,

    session: Session,

    column_picker: ColumnPicker,
    row_selector: RowSelector,
    data_preview: Option<DataPreview>,
    image_panel: ImagePanel,
    metadata_panels: MetadataPanels,
    help: HelpOverlay,

    focus: Focus,
    /// Last failure, shown until dismissed or the next successful pass
    banner: Option<DashboardError>,
    show_help: bool,

    keybindings: KeyBindings,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        signer: Box<dyn UrlSigner>,
        fetcher: Box<dyn ObjectFetcher>,
    ) -> Self {
        let keybindings = KeyBindings::default();
        let mut app = Self {
            signer,
            fetcher,
            loader: DatasetLoader::new(&config.storage),
            image_resolver: ImageResolver::new(&config.storage),
            session: Session::default(),
            column_picker: ColumnPicker::new(),
            row_selector: RowSelector::new(),
            data_preview: None,
            image_panel: ImagePanel::new(config.ui.image_width_px, config.ui.image_max_columns),
            metadata_panels: MetadataPanels::new(),
            help: HelpOverlay::new(&keybindings),
            focus: Focus::Rows,
            banner: None,
            show_help: false,
            keybindings,
            theme: Theme::default(),
            should_quit: false,
        };
        app.apply_focus();
        app
    }

    /// Replace the default keybindings
    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        for warning in keybindings.validate() {
            warn!("Keybinding: {warning}");
        }
        self.help = HelpOverlay::new(&keybindings);
        self.keybindings = keybindings;
        self
    }

    pub fn state(&self) -> ShellState {
        if self.session.dataset.is_some() {
            ShellState::Loaded
        } else {
            ShellState::Unloaded
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn banner(&self) -> Option<&DashboardError> {
        self.banner.as_ref()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.session.dataset.as_ref()
    }

    pub fn labels(&self) -> &[String] {
        &self.session.labels
    }

    pub fn selection(&self) -> &SelectionState {
        &self.session.selection
    }

    /// Row index the current pass resolved to
    pub fn current_row(&self) -> Option<usize> {
        self.session.current_row
    }

    pub fn image_state(&self) -> &ImageState {
        self.image_panel.state()
    }

    pub fn metadata(&self) -> Option<&MetadataLayout> {
        self.metadata_panels.layout()
    }

    pub fn is_help_shown(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch the dataset. On failure the current state is kept and the error shown.
    pub fn load(&mut self) {
        match self.loader.load(self.signer.as_ref(), self.fetcher.as_ref()) {
            Ok(dataset) => self.install_dataset(dataset),
            Err(e) => {
                warn!(state = ?self.state(), "Keeping current state after failed load");
                self.banner = Some(e);
            }
        }
    }

    fn install_dataset(&mut self, dataset: Dataset) {
        info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "Dataset installed"
        );
        self.session.selection.retain_valid(&dataset);
        self.session.labels = row_labels(&dataset);

        self.column_picker
            .set_options(additional_column_options(&dataset));
        self.column_picker
            .set_checked(&self.session.selection.extra_columns);
        self.row_selector.set_labels(self.session.labels.clone());
        self.data_preview = Some(DataPreview::new(dataset.clone()));
        self.session.dataset = Some(dataset);

        self.apply_focus();
        self.rerender_selection();
        self.row_selector.reset_cursor();
    }

    /// Recompute everything that depends on the selection
    fn rerender_selection(&mut self) {
        self.banner = None;
        let Some(dataset) = &self.session.dataset else {
            return;
        };

        self.session.labels = row_labels(dataset);
        let index = self.session.selection.resolve_row(&self.session.labels);
        self.session.current_row = index;
        if let Some(i) = index {
            self.row_selector.set_chosen(i);
        }

        let Some(row) = index.and_then(|i| dataset.row(i)) else {
            debug!("No row to show");
            self.image_panel.set_state(ImageState::Empty);
            self.metadata_panels.set_layout(None);
            return;
        };

        let id = row.file_attachment_id();
        let class = row.assign_class();
        debug!(row = row.index(), id = %id, class = %class, "Rendering selection");

        self.metadata_panels.set_layout(Some(layout_metadata(
            &row,
            &self.session.selection.extra_columns,
        )));

        let caption = format!("{class} - {id}");
        let image_state =
            match self
                .image_resolver
                .resolve_image(self.signer.as_ref(), &id, &class)
            {
                Ok(url) => match fetch_image(self.fetcher.as_ref(), &url) {
                    Ok(image) => ImageState::Ready { image, caption },
                    Err(reason) => {
                        warn!(id = %id, "Broken image: {reason}");
                        ImageState::Broken { caption, reason }
                    }
                },
                Err(e) => {
                    let reason = e.to_string();
                    self.banner = Some(e);
                    ImageState::Unavailable { reason }
                }
            };
        self.image_panel.set_state(image_state);
    }

    fn apply_focus(&mut self) {
        self.column_picker.set_focused(self.focus == Focus::Columns);
        self.row_selector.set_focused(self.focus == Focus::Rows);
        if let Some(preview) = &mut self.data_preview {
            preview.set_focused(self.focus == Focus::Preview);
        }
    }

    /// Handle a key event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Only handle key press events, ignore release/repeat
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if let Some(action) = self.keybindings.get_action(&key) {
            self.handle_action(action)?;
        }
        Ok(())
    }

    /// Handle an action
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        // App-level actions
        match action {
            Action::Quit => {
                self.should_quit = true;
                return Ok(());
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                return Ok(());
            }
            Action::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.banner = None;
                }
                return Ok(());
            }
            Action::Refresh => {
                self.load();
                return Ok(());
            }
            _ => {}
        }

        if self.show_help {
            self.help.handle_action(action)?;
            return Ok(());
        }

        if self.state() == ShellState::Unloaded {
            return Ok(());
        }

        match action {
            Action::FocusNext => {
                self.focus = self.focus.next();
                self.apply_focus();
                return Ok(());
            }
            Action::FocusPrev => {
                self.focus = self.focus.prev();
                self.apply_focus();
                return Ok(());
            }
            _ => {}
        }

        // Route to focused component
        let handled = match (self.focus, action) {
            (Focus::Columns, Action::Toggle | Action::Confirm) => {
                if let Some(column) = self.column_picker.highlighted().map(str::to_string) {
                    let on = self.session.selection.toggle_column(&column);
                    debug!(column = %column, selected = on, "Toggled column");
                    self.column_picker
                        .set_checked(&self.session.selection.extra_columns);
                    self.rerender_selection();
                }
                true
            }
            (Focus::Columns, _) => self.column_picker.handle_action(action)?,
            (Focus::Rows, Action::Confirm) => {
                if let Some(label) = self.row_selector.choose_highlighted() {
                    debug!(label = %label, "Row chosen");
                    self.session.selection.select_label(label);
                    self.rerender_selection();
                }
                true
            }
            (Focus::Rows, _) => self.row_selector.handle_action(action)?,
            (Focus::Preview, _) => match &mut self.data_preview {
                Some(preview) => preview.handle_action(action)?,
                None => false,
            },
        };

        // Unhandled paging scrolls the metadata panels
        if !handled {
            self.metadata_panels.handle_action(action)?;
        }
        Ok(())
    }

    /// Render the app
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::styled(APP_TITLE, self.theme.title_style()).centered()),
            chunks[0],
        );
        self.render_footer(frame, chunks[2]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body[0]);
        self.column_picker.render(frame, sidebar[0]);
        self.row_selector.render(frame, sidebar[1]);

        let main = if self.banner.is_some() {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(0)])
                .split(body[1]);
            self.render_banner(frame, split[0]);
            split[1]
        } else {
            body[1]
        };

        match &mut self.data_preview {
            Some(preview) => {
                let split = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(35), Constraint::Min(0)])
                    .split(main);
                preview.render(frame, split[0]);

                let lower = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Length(self.image_panel.preferred_width()),
                        Constraint::Min(0),
                    ])
                    .split(split[1]);
                self.image_panel.render(frame, lower[0]);
                self.metadata_panels.render(frame, lower[1]);
            }
            None => {
                let message = Paragraph::new(vec![
                    Line::from("No dataset loaded."),
                    Line::from(format!(
                        "Source: s3://{}/{}",
                        self.loader.bucket(),
                        self.loader.key()
                    )),
                    Line::default(),
                    Line::from("Press r to retry, q to quit."),
                ])
                .style(self.theme.muted_style())
                .block(Block::default().borders(Borders::ALL))
                .centered();
                frame.render_widget(message, main);
            }
        }

        if self.show_help {
            self.help.render(frame, Self::centered_rect(60, 70, area));
        }
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let Some(err) = &self.banner else {
            return;
        };
        let paragraph = Paragraph::new(Span::styled(err.to_string(), self.theme.error_style()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} error (Esc to dismiss)", err.kind()))
                    .border_style(self.theme.error_style()),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = |action: Action, label: &str| -> Option<String> {
            let keys = self.keybindings.get_keys_for_action(action);
            keys.first().map(|k| format!("{k} {label}"))
        };
        let hints: Vec<String> = [
            hint(Action::FocusNext, "focus"),
            hint(Action::Toggle, "toggle"),
            hint(Action::Confirm, "choose"),
            hint(Action::Refresh, "reload"),
            hint(Action::ToggleHelp, "help"),
            hint(Action::Quit, "quit"),
        ]
        .into_iter()
        .flatten()
        .collect();
        frame.render_widget(
            Paragraph::new(Line::styled(hints.join("  |  "), self.theme.muted_style())),
            area,
        );
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_w: u16, percent_h: u16, area: Rect) -> Rect {
        let width = (area.width as u32 * percent_w as u32 / 100) as u16;
        let height = (area.height as u32 * percent_h as u32 / 100) as u16;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::{Cell, RefCell};
    use std::io::Cursor;
    use std::rc::Rc;
    use std::time::Duration;
    use url::Url;

    const CSV: &str = "file_attachment_id,assign_class,prediction,ddx,notes\n\
                       A1,nevus,benign,naevus,first\n\
                       B2,melanoma,malignant,melanoma,second\n";

    /// Signs everything unless told to refuse dataset or image keys
    #[derive(Default)]
    struct FakeSigner {
        deny_all: Rc<Cell<bool>>,
        deny_images: bool,
    }

    impl UrlSigner for FakeSigner {
        fn sign(&self, bucket: &str, key: &str, _ttl: Duration) -> Result<Url, DashboardError> {
            if self.deny_all.get() || (self.deny_images && key.ends_with(".jpg")) {
                return Err(DashboardError::Credentials("no keys".into()));
            }
            Ok(Url::parse(&format!("https://fake.test/{bucket}/{key}?sig=x")).unwrap())
        }
    }

    struct FakeFetcher {
        csv: Rc<RefCell<String>>,
        image_ok: bool,
    }

    impl ObjectFetcher for FakeFetcher {
        fn fetch(&self, url: &Url) -> Result<Vec<u8>, DashboardError> {
            if url.path().ends_with(".csv") {
                return Ok(self.csv.borrow().clone().into_bytes());
            }
            if !self.image_ok {
                return Err(DashboardError::Fetch {
                    url: url.path().to_string(),
                    reason: "404 Not Found".into(),
                });
            }
            let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 200, 10]));
            let mut bytes = Vec::new();
            img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
                .unwrap();
            Ok(bytes)
        }
    }

    fn app_with(signer: FakeSigner, csv: &str, image_ok: bool) -> App {
        app_with_source(signer, Rc::new(RefCell::new(csv.to_string())), image_ok)
    }

    /// The shared CSV handle lets a test change the object between loads
    fn app_with_source(signer: FakeSigner, csv: Rc<RefCell<String>>, image_ok: bool) -> App {
        let fetcher = FakeFetcher { csv, image_ok };
        App::new(&Config::default(), Box::new(signer), Box::new(fetcher))
    }

    fn loaded_app() -> App {
        let mut app = app_with(FakeSigner::default(), CSV, true);
        app.load();
        app
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_starts_unloaded() {
        let mut app = app_with(FakeSigner::default(), CSV, true);
        assert_eq!(app.state(), ShellState::Unloaded);
        assert!(screen(&mut app).contains("Press r to retry"));
    }

    #[test]
    fn test_load_selects_first_row() {
        let app = loaded_app();
        assert_eq!(app.state(), ShellState::Loaded);
        assert_eq!(app.labels(), ["A1 - nevus", "B2 - melanoma"]);
        assert_eq!(app.current_row(), Some(0));
        assert!(app.banner().is_none());
        assert!(matches!(
            app.image_state(),
            ImageState::Ready { caption, .. } if caption == "nevus - A1"
        ));
        let meta = app.metadata().unwrap();
        assert_eq!(meta.model_prediction.entries[0].value, "benign");
        assert!(meta.additional.is_none());
    }

    #[test]
    fn test_failed_first_load_stays_unloaded() {
        let signer = FakeSigner::default();
        signer.deny_all.set(true);
        let mut app = app_with(signer, CSV, true);
        app.load();

        assert_eq!(app.state(), ShellState::Unloaded);
        assert!(matches!(app.banner(), Some(DashboardError::Credentials(_))));
        let text = screen(&mut app);
        assert!(text.contains("No AWS credentials found"));
    }

    #[test]
    fn test_validation_error_names_required_columns() {
        let mut app = app_with(FakeSigner::default(), "file_attachment_id,x\nA1,1\n", true);
        app.load();
        assert_eq!(app.state(), ShellState::Unloaded);
        assert!(matches!(app.banner(), Some(DashboardError::Validation { .. })));
    }

    #[test]
    fn test_failed_reload_keeps_dataset() {
        let deny = Rc::new(Cell::new(false));
        let signer = FakeSigner {
            deny_all: deny.clone(),
            deny_images: false,
        };
        let mut app = app_with(signer, CSV, true);
        app.load();
        assert_eq!(app.state(), ShellState::Loaded);

        deny.set(true);
        app.handle_action(Action::Refresh).unwrap();
        assert_eq!(app.state(), ShellState::Loaded);
        assert_eq!(app.dataset().unwrap().row_count(), 2);
        assert!(app.banner().is_some());

        app.handle_action(Action::Cancel).unwrap();
        assert!(app.banner().is_none());
    }

    #[test]
    fn test_choosing_row_rerenders() {
        let mut app = loaded_app();
        assert_eq!(app.focus(), Focus::Rows);

        app.handle_action(Action::MoveDown).unwrap();
        assert_eq!(app.current_row(), Some(0));
        app.handle_action(Action::Confirm).unwrap();

        assert_eq!(app.current_row(), Some(1));
        assert_eq!(app.selection().row_label.as_deref(), Some("B2 - melanoma"));
        assert!(matches!(
            app.image_state(),
            ImageState::Ready { caption, .. } if caption == "melanoma - B2"
        ));
    }

    #[test]
    fn test_reload_moves_marker_with_chosen_row() {
        let csv = Rc::new(RefCell::new(CSV.to_string()));
        let mut app = app_with_source(FakeSigner::default(), csv.clone(), true);
        app.load();
        app.handle_action(Action::MoveDown).unwrap();
        app.handle_action(Action::Confirm).unwrap();
        assert_eq!(app.row_selector.chosen_position(), 1);

        *csv.borrow_mut() = "file_attachment_id,assign_class,prediction,ddx,notes\n\
                             B2,melanoma,malignant,melanoma,second\n\
                             A1,nevus,benign,naevus,first\n"
            .to_string();
        app.handle_action(Action::Refresh).unwrap();

        assert_eq!(app.current_row(), Some(0));
        assert_eq!(app.row_selector.chosen_position(), 0);
        assert_eq!(app.row_selector.highlighted(), Some("B2 - melanoma"));
    }

    #[test]
    fn test_reload_without_chosen_row_resets_marker() {
        let csv = Rc::new(RefCell::new(CSV.to_string()));
        let mut app = app_with_source(FakeSigner::default(), csv.clone(), true);
        app.load();
        app.handle_action(Action::MoveDown).unwrap();
        app.handle_action(Action::Confirm).unwrap();

        *csv.borrow_mut() = "file_attachment_id,assign_class\nC3,acne\nD4,rosacea\n".to_string();
        app.handle_action(Action::Refresh).unwrap();

        assert_eq!(app.current_row(), Some(0));
        assert_eq!(app.row_selector.chosen_position(), 0);
        assert_eq!(app.row_selector.highlighted(), Some("C3 - acne"));
    }

    #[test]
    fn test_duplicate_label_marker_follows_shown_row() {
        let mut app = app_with(
            FakeSigner::default(),
            "file_attachment_id,assign_class,prediction\nA1,nevus,first\nA1,nevus,second\n",
            true,
        );
        app.load();
        app.handle_action(Action::MoveDown).unwrap();
        app.handle_action(Action::Confirm).unwrap();

        assert_eq!(app.current_row(), Some(0));
        assert_eq!(app.row_selector.chosen_position(), 0);
        assert_eq!(app.metadata().unwrap().model_prediction.entries[0].value, "first");
    }

    #[test]
    fn test_centered_rect_on_wide_terminal() {
        let area = Rect::new(0, 0, 2000, 1000);
        let rect = App::centered_rect(60, 70, area);
        assert_eq!((rect.width, rect.height), (1200, 700));
        assert_eq!((rect.x, rect.y), (400, 150));
    }

    #[test]
    fn test_toggle_extra_column() {
        let mut app = loaded_app();
        app.handle_action(Action::FocusPrev).unwrap();
        assert_eq!(app.focus(), Focus::Columns);

        app.handle_action(Action::Toggle).unwrap();
        assert_eq!(app.selection().extra_columns, ["notes"]);
        let additional = app.metadata().unwrap().additional.as_ref().unwrap();
        assert_eq!(additional.entries[0].label, "notes");
        assert_eq!(additional.entries[0].value, "first");

        app.handle_action(Action::Confirm).unwrap();
        assert!(app.selection().extra_columns.is_empty());
        assert!(app.metadata().unwrap().additional.is_none());
    }

    #[test]
    fn test_image_signing_failure_shows_banner_and_metadata() {
        let signer = FakeSigner {
            deny_images: true,
            ..Default::default()
        };
        let mut app = app_with(signer, CSV, true);
        app.load();

        assert_eq!(app.state(), ShellState::Loaded);
        assert!(matches!(app.banner(), Some(DashboardError::Credentials(_))));
        assert!(matches!(app.image_state(), ImageState::Unavailable { .. }));
        assert!(app.metadata().is_some());
    }

    #[test]
    fn test_missing_image_is_broken_not_an_error() {
        let mut app = app_with(FakeSigner::default(), CSV, false);
        app.load();
        assert!(app.banner().is_none());
        assert!(matches!(app.image_state(), ImageState::Broken { caption, .. } if caption == "nevus - A1"));
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = loaded_app();
        app.handle_action(Action::FocusNext).unwrap();
        assert_eq!(app.focus(), Focus::Preview);
        app.handle_action(Action::FocusNext).unwrap();
        assert_eq!(app.focus(), Focus::Columns);
        app.handle_action(Action::FocusPrev).unwrap();
        assert_eq!(app.focus(), Focus::Preview);
    }

    #[test]
    fn test_help_and_quit_keys() {
        let mut app = loaded_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT))
            .unwrap();
        assert!(app.is_help_shown());
        assert!(screen(&mut app).contains("Help (? to close)"));

        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert!(!app.is_help_shown());

        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
            .unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_loaded_screen_shows_headings() {
        let mut app = loaded_app();
        let text = screen(&mut app);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("Select Additional Columns to Display"));
        assert!(text.contains("Select Row"));
        assert!(text.contains("Data Preview"));
        assert!(text.contains("MODEL PREDICTION"));
        assert!(text.contains("GROUND TRUTH"));
    }
}

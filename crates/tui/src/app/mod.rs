mod pages;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyEvent};

use api_types::transaction::TransactionKind;
use client::{
    ApiClient, ClientError, FileTokenStore, Navigator, Route, Session, SessionState, TokenStore,
    forms::FieldErrors,
    pages::{Dashboard, TransactionDetail, TransactionEditor, TransactionList},
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use pages::{FilterEditor, FilterField, FormPage, ListPage, LoginPage, Page, SignupPage};

const SIGNUP_FLASH: &str = "Account created successfully! Please login.";
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

impl ToastState {
    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }
}

/// Everything the renderer reads.
#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    pub page: Page,
    pub session: SessionState,
    pub toast: Option<ToastState>,
    pub base_url: String,
}

pub struct App {
    api: ApiClient,
    session: Session,
    navigator: Navigator,
    pub state: AppState,
    /// Page size carried from one list to the next.
    page_size: u32,
    /// Notice for the next login page.
    flash: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.token_path.as_str()));
        let navigator = Navigator::new(Route::Landing);
        let api = ApiClient::new(&config.base_url, tokens.clone(), navigator.clone())?;

        let mut session = Session::new(api.auth(), tokens);
        session.restore();
        if session.is_authenticated() {
            navigator.replace(Route::Dashboard);
        }

        let state = AppState {
            route: Route::Landing,
            page: Page::Landing,
            session: session.state().clone(),
            toast: None,
            base_url: config.base_url.clone(),
        };

        Ok(Self {
            api,
            session,
            navigator,
            state,
            page_size: config.page_size,
            flash: None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);
        self.sync_route().await;

        while !self.should_quit {
            self.expire_toast();
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key).await;
                self.sync_route().await;
            }
        }

        Ok(())
    }

    fn expire_toast(&mut self) {
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() >= TOAST_TTL)
        {
            self.state.toast = None;
        }
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.state.toast = Some(ToastState::new(level, message));
    }

    fn sync_session(&mut self) {
        self.state.session = self.session.state().clone();
    }

    /// Guarded navigation.
    fn go(&self, route: Route) {
        self.navigator.navigate(route, self.api.tokens().as_ref());
    }

    /// Mounts whatever the navigator points at. Mounting can navigate again
    /// (a 401 while loading), so this runs until the route settles.
    async fn sync_route(&mut self) {
        loop {
            let requested = self.navigator.current();
            if requested == self.state.route {
                break;
            }
            let target = self.navigator.navigate(requested, self.api.tokens().as_ref());
            self.mount(target).await;
        }
    }

    async fn mount(&mut self, route: Route) {
        tracing::debug!("mounting {route}");
        if let Page::List(page) = &self.state.page {
            self.page_size = page.list.page.page_size();
        }
        self.state.route = route;

        let (page, res) = match route {
            Route::Landing => (Page::Landing, Ok(())),
            Route::Login => {
                self.session.clear_error();
                (Page::Login(LoginPage::new(self.flash.take())), Ok(()))
            }
            Route::Signup => {
                self.session.clear_error();
                (Page::Signup(SignupPage::new()), Ok(()))
            }
            Route::Dashboard => {
                let mut dashboard = Dashboard::new(self.api.clone());
                let res = dashboard.load().await;
                (Page::Dashboard(dashboard), res)
            }
            Route::List(kind) => {
                let mut list = TransactionList::new(self.api.transactions(kind), self.page_size);
                let res = list.fetch().await;
                (Page::List(ListPage { list, filter: None }), res)
            }
            Route::Detail(kind, id) => {
                let mut detail = TransactionDetail::new(self.api.transactions(kind), id);
                let res = detail.load().await;
                (Page::Detail(detail), res)
            }
            Route::New(kind) => {
                let editor = TransactionEditor::create(self.api.transactions(kind));
                (Page::Form(FormPage::new(editor)), Ok(()))
            }
            Route::Edit(kind, id) => {
                let mut editor = TransactionEditor::edit(self.api.transactions(kind), id);
                let res = editor.load().await;
                (Page::Form(FormPage::new(editor)), res)
            }
        };

        self.state.page = page;
        self.sync_session();
        self.report(res);
    }

    fn report(&mut self, res: client::Result<()>) {
        if let Err(err) = res {
            self.on_client_error(err);
        }
    }

    /// Central handler for API failures that reach the UI.
    fn on_client_error(&mut self, err: ClientError) {
        if err.is_session_expired() {
            self.session.expire();
            self.sync_session();
        }
        self.toast(ToastLevel::Error, err.to_string());
    }

    fn logout(&mut self) {
        self.session.logout();
        self.sync_session();
        self.navigator.replace(Route::Login);
        self.toast(ToastLevel::Info, "Logged out");
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key, self.state.page.is_typing());
        match action {
            AppAction::None => return,
            AppAction::Quit => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.state.route.is_protected()
            && !self.state.page.is_typing()
            && self.handle_shell_key(action)
        {
            return;
        }

        match self.state.page {
            Page::Landing => self.on_landing(action),
            Page::Login(_) => self.on_login(action).await,
            Page::Signup(_) => self.on_signup(action).await,
            Page::Dashboard(_) => self.on_dashboard(action).await,
            Page::List(_) => self.on_list(action).await,
            Page::Detail(_) => self.on_detail(action).await,
            Page::Form(_) => self.on_form(action).await,
        }
    }

    /// Tabs and logout, available on every authenticated screen.
    fn handle_shell_key(&mut self, action: AppAction) -> bool {
        let AppAction::Input(ch) = action else {
            return false;
        };
        let route = match ch {
            '1' => Route::Dashboard,
            '2' => Route::List(TransactionKind::Expense),
            '3' => Route::List(TransactionKind::Income),
            'L' => {
                self.logout();
                return true;
            }
            _ => return false,
        };
        self.go(route);
        true
    }

    fn on_landing(&mut self, action: AppAction) {
        match action {
            AppAction::Input('l') => self.go(Route::Login),
            AppAction::Input('s') => self.go(Route::Signup),
            _ => {}
        }
    }

    async fn on_login(&mut self, action: AppAction) {
        let Page::Login(page) = &mut self.state.page else {
            return;
        };
        match action {
            AppAction::NextField => page.focus.next(),
            AppAction::PrevField => page.focus.prev(),
            AppAction::Backspace => {
                page.input_mut().pop();
            }
            AppAction::Input(ch) => page.input_mut().push(ch),
            AppAction::Cancel => self.go(Route::Landing),
            AppAction::Submit => self.submit_login().await,
            _ => {}
        }
    }

    async fn submit_login(&mut self) {
        if self.session.is_loading() {
            return;
        }
        let Page::Login(page) = &mut self.state.page else {
            return;
        };
        let credentials = match page.form.validate() {
            Ok(credentials) => credentials,
            Err(errors) => {
                page.errors = errors;
                return;
            }
        };
        page.errors = FieldErrors::default();
        page.flash = None;

        let res = self.session.login(&credentials).await;
        self.sync_session();
        match res {
            Ok(()) => self.navigator.replace(Route::Dashboard),
            Err(err) if err.is_session_expired() => self.on_client_error(err),
            // Shown as the banner from session state.
            Err(_) => {}
        }
    }

    async fn on_signup(&mut self, action: AppAction) {
        let Page::Signup(page) = &mut self.state.page else {
            return;
        };
        match action {
            AppAction::NextField => page.focus.next(),
            AppAction::PrevField => page.focus.prev(),
            AppAction::Backspace => {
                page.input_mut().pop();
            }
            AppAction::Input(ch) => page.input_mut().push(ch),
            AppAction::Cancel => self.go(Route::Landing),
            AppAction::Submit => self.submit_signup().await,
            _ => {}
        }
    }

    async fn submit_signup(&mut self) {
        if self.session.is_loading() {
            return;
        }
        let Page::Signup(page) = &mut self.state.page else {
            return;
        };
        let data = match page.form.validate() {
            Ok(data) => data,
            Err(errors) => {
                page.errors = errors;
                return;
            }
        };
        page.errors = FieldErrors::default();

        let res = self.session.signup(&data).await;
        self.sync_session();
        match res {
            Ok(()) => {
                self.flash = Some(SIGNUP_FLASH.to_string());
                self.navigator.replace(Route::Login);
            }
            Err(err) if err.is_session_expired() => self.on_client_error(err),
            Err(_) => {}
        }
    }

    async fn on_dashboard(&mut self, action: AppAction) {
        let Page::Dashboard(dashboard) = &mut self.state.page else {
            return;
        };
        if action == AppAction::Input('r') {
            let res = dashboard.load().await;
            self.report(res);
        }
    }

    async fn on_list(&mut self, action: AppAction) {
        let Page::List(page) = &mut self.state.page else {
            return;
        };

        if let Some(editor) = page.filter.as_mut() {
            match action {
                AppAction::NextField | AppAction::PrevField => editor.toggle_focus(),
                AppAction::Backspace => {
                    editor.input_mut().pop();
                }
                AppAction::Input(ch) => editor.input_mut().push(ch),
                AppAction::Cancel => page.filter = None,
                AppAction::Submit => match editor.parse() {
                    Ok(range) => {
                        page.filter = None;
                        let res = page.list.apply_filter(range).await;
                        self.report(res);
                    }
                    Err(message) => editor.error = Some(message),
                },
                _ => {}
            }
            return;
        }

        if page.list.pending_delete.is_some() {
            match action {
                AppAction::Input('y') | AppAction::Submit => {
                    let label = page.list.kind().label();
                    let res = page.list.confirm_delete().await;
                    if res.is_ok() {
                        self.toast(ToastLevel::Success, format!("{label} deleted"));
                    }
                    self.report(res);
                }
                AppAction::Input('n') | AppAction::Cancel => page.list.cancel_delete(),
                _ => {}
            }
            return;
        }

        let kind = page.list.kind();
        let selected = page.list.selected_item().map(|tx| tx.id);
        let res = match action {
            AppAction::Up => {
                page.list.select_prev();
                Ok(())
            }
            AppAction::Down => {
                page.list.select_next();
                Ok(())
            }
            AppAction::Left => page.list.prev_page().await,
            AppAction::Right => page.list.next_page().await,
            AppAction::Input('+') => page.list.cycle_page_size(true).await,
            AppAction::Input('-') => page.list.cycle_page_size(false).await,
            AppAction::Input('r') => page.list.fetch().await,
            AppAction::Input('c') => page.list.reset_filter().await,
            AppAction::Input('/') => {
                page.filter = Some(FilterEditor::from_range(&page.list.filter));
                Ok(())
            }
            AppAction::Input('d') => {
                page.list.request_delete_selected();
                Ok(())
            }
            AppAction::Input('n') => {
                self.go(Route::New(kind));
                Ok(())
            }
            AppAction::Submit => {
                if let Some(id) = selected {
                    self.go(Route::Detail(kind, id));
                }
                Ok(())
            }
            AppAction::Input('e') => {
                if let Some(id) = selected {
                    self.go(Route::Edit(kind, id));
                }
                Ok(())
            }
            _ => Ok(()),
        };
        self.report(res);
    }

    async fn on_detail(&mut self, action: AppAction) {
        let Page::Detail(detail) = &mut self.state.page else {
            return;
        };
        let kind = detail.kind();
        let id = detail.id;

        if detail.confirm_delete {
            match action {
                AppAction::Input('y') | AppAction::Submit => {
                    let res = detail.confirm_delete().await;
                    if res.is_ok() {
                        self.toast(ToastLevel::Success, format!("{} deleted", kind.label()));
                    }
                    self.report(res);
                }
                AppAction::Input('n') | AppAction::Cancel => detail.cancel_delete(),
                _ => {}
            }
            return;
        }

        match action {
            AppAction::Input('e') => self.go(Route::Edit(kind, id)),
            AppAction::Input('d') => detail.request_delete(),
            AppAction::Input('r') => {
                let res = detail.load().await;
                self.report(res);
            }
            AppAction::Input('b') | AppAction::Cancel => self.go(Route::List(kind)),
            _ => {}
        }
    }

    async fn on_form(&mut self, action: AppAction) {
        let Page::Form(page) = &mut self.state.page else {
            return;
        };
        match action {
            AppAction::NextField => page.focus.next(),
            AppAction::PrevField => page.focus.prev(),
            AppAction::Backspace => {
                page.input_mut().pop();
            }
            AppAction::Input(ch) => page.input_mut().push(ch),
            AppAction::Cancel => {
                let kind = page.editor.kind();
                self.go(Route::List(kind));
            }
            AppAction::Submit => {
                if page.editor.is_loading || page.editor.is_loading_data {
                    return;
                }
                let label = page.editor.kind().label();
                match page.editor.submit().await {
                    Ok(true) => self.toast(ToastLevel::Success, format!("{label} saved")),
                    Ok(false) => {}
                    Err(err) => self.on_client_error(err),
                }
            }
            _ => {}
        }
    }
}

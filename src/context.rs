//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use console_logger::ConsoleLogger;
use leptos::prelude::*;
use wardrobe_core::{NavButton, NavCommand, Navigator, Screen, ScreenAction, ScreenHooks, WardrobeConfig};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active screen - read
    pub screen: ReadSignal<Screen>,
    /// Active screen - write
    set_screen: WriteSignal<Screen>,
    /// Highlighted nav button - read
    pub highlight: ReadSignal<Option<NavButton>>,
    /// Highlighted nav button - write
    set_highlight: WriteSignal<Option<NavButton>>,
    /// Trigger to reload the wardrobe from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the wardrobe from storage - write
    set_reload_trigger: WriteSignal<u32>,
    /// Trigger to clear the upload screen - read
    pub upload_reset: ReadSignal<u32>,
    /// Trigger to clear the upload screen - write
    set_upload_reset: WriteSignal<u32>,
    navigator: StoredValue<Navigator>,
}

impl AppContext {
    pub fn new() -> Self {
        let navigator = Navigator::new();
        let (screen, set_screen) = signal(navigator.current());
        let (highlight, set_highlight) = signal(navigator.current().nav_button());
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (upload_reset, set_upload_reset) = signal(0u32);
        Self {
            screen,
            set_screen,
            highlight,
            set_highlight,
            reload_trigger,
            set_reload_trigger,
            upload_reset,
            set_upload_reset,
            navigator: StoredValue::new(navigator),
        }
    }

    /// Switch screens, running the exit and enter hooks
    pub fn go_to(&self, screen: Screen) {
        let mut hooks = *self;
        let transition = self
            .navigator
            .try_update_value(|nav| nav.dispatch(NavCommand::GoTo(screen), &mut hooks));
        if let Some(transition) = transition {
            self.set_screen.set(transition.to);
            self.set_highlight.set(transition.highlight);
        }
    }

    /// Trigger a reload of the wardrobe grid
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Clear form, preview and pending image
    pub fn reset_upload(&self) {
        self.set_upload_reset.update(|v| *v += 1);
    }

    fn run(&self, action: ScreenAction) {
        match action {
            ScreenAction::ResetUpload => self.reset_upload(),
            ScreenAction::ReloadWardrobe => self.reload(),
            ScreenAction::Nothing => {}
        }
    }
}

impl ScreenHooks for AppContext {
    fn on_exit(&mut self, screen: Screen) {
        self.run(screen.exit_action());
    }

    fn on_enter(&mut self, screen: Screen) {
        self.run(screen.enter_action());
    }
}

/// Installed logger, if `main` managed to install one
#[derive(Clone, Copy)]
pub struct LogHistory(pub Option<&'static ConsoleLogger>);

impl LogHistory {
    /// Recent log lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.0.map(ConsoleLogger::recent).unwrap_or_default()
    }
}

pub fn use_log_history() -> LogHistory {
    use_context::<LogHistory>().unwrap_or(LogHistory(None))
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn use_config() -> WardrobeConfig {
    use_context::<WardrobeConfig>().expect("WardrobeConfig should be provided")
}

//! Screen Navigation
//!
//! Exactly one of three screens is active at a time. Navigation requests
//! arrive as [`NavCommand`]s and the UI reacts through [`ScreenHooks`].

/// Top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Upload,
    Wardrobe,
}

impl Screen {
    /// Id of the screen's container element
    pub fn dom_id(&self) -> &'static str {
        match self {
            Screen::Home => "home-screen",
            Screen::Upload => "upload-screen",
            Screen::Wardrobe => "wardrobe-screen",
        }
    }

    /// Nav button lit while this screen is active
    pub fn nav_button(&self) -> Option<NavButton> {
        match self {
            Screen::Home => Some(NavButton::Home),
            Screen::Upload => None,
            Screen::Wardrobe => Some(NavButton::Wardrobe),
        }
    }

    /// Work to do every time the screen is entered
    pub fn enter_action(&self) -> ScreenAction {
        match self {
            Screen::Home => ScreenAction::Nothing,
            Screen::Upload => ScreenAction::ResetUpload,
            Screen::Wardrobe => ScreenAction::ReloadWardrobe,
        }
    }

    /// Work to do when leaving the screen
    ///
    /// Leaving Upload abandons reads still in flight, so a slow read can't
    /// repopulate the preview behind another screen.
    pub fn exit_action(&self) -> ScreenAction {
        match self {
            Screen::Upload => ScreenAction::ResetUpload,
            Screen::Home | Screen::Wardrobe => ScreenAction::Nothing,
        }
    }
}

/// Buttons in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavButton {
    Home,
    Wardrobe,
}

impl NavButton {
    pub fn dom_id(&self) -> &'static str {
        match self {
            NavButton::Home => "home-nav-btn",
            NavButton::Wardrobe => "wardrobe-nav-btn",
        }
    }

    pub fn target(&self) -> Screen {
        match self {
            NavButton::Home => Screen::Home,
            NavButton::Wardrobe => Screen::Wardrobe,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Nothing,
    /// Clear form fields, preview, file input and pending image
    ResetUpload,
    /// Re-read the collection and redraw the grid
    ReloadWardrobe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    GoTo(Screen),
}

/// Lifecycle callbacks run on every transition
pub trait ScreenHooks {
    fn on_exit(&mut self, _screen: Screen) {}

    fn on_enter(&mut self, screen: Screen);
}

/// Result of one dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub highlight: Option<NavButton>,
}

/// Tracks the active screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply a command. Re-entering the active screen still runs its hooks,
    /// so clicking "Wardrobe" again reloads the grid.
    pub fn dispatch<H: ScreenHooks + ?Sized>(&mut self, command: NavCommand, hooks: &mut H) -> Transition {
        let NavCommand::GoTo(to) = command;
        let from = self.current;
        log::debug!("[NAV] {:?} -> {:?}", from, to);

        hooks.on_exit(from);
        self.current = to;
        hooks.on_enter(to);

        Transition {
            from,
            to,
            highlight: to.nav_button(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        resets: usize,
        reloads: usize,
    }

    impl Recorder {
        fn run(&mut self, action: ScreenAction) {
            match action {
                ScreenAction::ResetUpload => self.resets += 1,
                ScreenAction::ReloadWardrobe => self.reloads += 1,
                ScreenAction::Nothing => {}
            }
        }
    }

    impl ScreenHooks for Recorder {
        fn on_exit(&mut self, screen: Screen) {
            self.events.push(format!("exit {:?}", screen));
            self.run(screen.exit_action());
        }

        fn on_enter(&mut self, screen: Screen) {
            self.events.push(format!("enter {:?}", screen));
            self.run(screen.enter_action());
        }
    }

    #[test]
    fn test_starts_on_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn test_dispatch_runs_exit_then_enter() {
        let mut nav = Navigator::new();
        let mut hooks = Recorder::default();
        let t = nav.dispatch(NavCommand::GoTo(Screen::Upload), &mut hooks);

        assert_eq!(t.from, Screen::Home);
        assert_eq!(t.to, Screen::Upload);
        assert_eq!(nav.current(), Screen::Upload);
        assert_eq!(hooks.events, vec!["exit Home", "enter Upload"]);
        assert_eq!(hooks.resets, 1);
    }

    #[test]
    fn test_highlight_follows_screen() {
        let mut nav = Navigator::new();
        let mut hooks = Recorder::default();
        assert_eq!(nav.dispatch(NavCommand::GoTo(Screen::Home), &mut hooks).highlight, Some(NavButton::Home));
        assert_eq!(nav.dispatch(NavCommand::GoTo(Screen::Upload), &mut hooks).highlight, None);
        assert_eq!(
            nav.dispatch(NavCommand::GoTo(Screen::Wardrobe), &mut hooks).highlight,
            Some(NavButton::Wardrobe)
        );
    }

    #[test]
    fn test_reentering_wardrobe_reloads_each_time() {
        let mut nav = Navigator::new();
        let mut hooks = Recorder::default();
        nav.dispatch(NavCommand::GoTo(Screen::Wardrobe), &mut hooks);
        nav.dispatch(NavCommand::GoTo(Screen::Wardrobe), &mut hooks);
        assert_eq!(hooks.reloads, 2);
    }

    #[test]
    fn test_leaving_upload_resets_it() {
        let mut nav = Navigator::new();
        let mut hooks = Recorder::default();
        nav.dispatch(NavCommand::GoTo(Screen::Upload), &mut hooks);
        nav.dispatch(NavCommand::GoTo(Screen::Home), &mut hooks);

        assert_eq!(hooks.events, vec!["exit Home", "enter Upload", "exit Upload", "enter Home"]);
        // once on entry, once on exit
        assert_eq!(hooks.resets, 2);
        assert_eq!(Screen::Wardrobe.exit_action(), ScreenAction::Nothing);
    }

    #[test]
    fn test_dom_ids() {
        let ids: Vec<_> = [Screen::Home, Screen::Upload, Screen::Wardrobe]
            .iter()
            .map(Screen::dom_id)
            .collect();
        assert_eq!(ids, vec!["home-screen", "upload-screen", "wardrobe-screen"]);
        assert_eq!(NavButton::Wardrobe.dom_id(), "wardrobe-nav-btn");
        assert_eq!(NavButton::Home.target(), Screen::Home);
    }
}

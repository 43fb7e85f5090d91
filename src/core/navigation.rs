use crate::core::event::NavAction;
use crate::core::router::{Route, Router, StaticRouter, View};

pub struct NavState {
    pub router: StaticRouter,
    pub link_focus: usize,
    pub should_exit: bool,
}

impl NavState {
    pub fn new(start_path: impl Into<String>) -> Self {
        let mut state = Self {
            router: StaticRouter::new(start_path),
            link_focus: 0,
            should_exit: false,
        };
        state.follow_route();
        state
    }

    pub fn view(&self) -> View {
        self.router.current_view()
    }

    pub fn focused_link(&self) -> Route {
        Route::ALL[self.link_focus.min(Route::ALL.len() - 1)]
    }

    /// The link matching the current path, if any.
    pub fn active_route(&self) -> Option<Route> {
        self.router.resolve(self.router.current_path())
    }

    fn follow_route(&mut self) {
        if let Some(route) = self.active_route() {
            if let Some(idx) = Route::ALL.iter().position(|r| *r == route) {
                self.link_focus = idx;
            }
        }
    }

    /// Applies a navigation action; returns whether anything visible changed.
    pub fn reduce(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Exit => {
                self.should_exit = true;
                true
            }
            NavAction::Go(route) => self.navigate(route.path()),
            NavAction::Navigate(path) => self.navigate(&path),
            NavAction::NextLink => self.step_link(1),
            NavAction::PrevLink => self.step_link(-1),
            NavAction::ActivateLink => {
                let path = self.focused_link().path();
                self.navigate(path)
            }
            NavAction::Back => {
                let moved = self.router.back();
                if moved {
                    self.follow_route();
                }
                moved
            }
        }
    }

    fn navigate(&mut self, path: &str) -> bool {
        let moved = self.router.navigate(path);
        if moved {
            tracing::info!(path, "route changed");
            self.follow_route();
        }
        moved
    }

    fn step_link(&mut self, delta: isize) -> bool {
        let len = Route::ALL.len() as isize;
        self.link_focus = ((self.link_focus as isize + delta).rem_euclid(len)) as usize;
        true
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

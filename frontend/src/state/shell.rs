use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config;

/// The page section currently shown inside the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Projects,
    Contact,
}

impl View {
    /// Navigation order used by the desktop nav and the mobile menu.
    pub const ALL: [View; 3] = [View::Home, View::Projects, View::Contact];

    pub fn key(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Projects => "projects",
            View::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Projects => "Portfolio",
            View::Contact => "Consult",
        }
    }
}

pub fn is_compact(scroll_offset: f64) -> bool {
    scroll_offset > config::COMPACT_SCROLL_THRESHOLD
}

/// Everything the shell owns. Children get copies of the fields and
/// request changes through callbacks that dispatch a [`ShellAction`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellState {
    pub view: View,
    pub compact: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellAction {
    Navigate(View),
    ToggleMenu,
    Scrolled(f64),
}

impl ShellState {
    /// Returns the next state, or `None` when the action changes nothing.
    pub fn apply(&self, action: ShellAction) -> Option<ShellState> {
        let next = match action {
            ShellAction::Navigate(view) => ShellState {
                view,
                menu_open: false,
                ..self.clone()
            },
            ShellAction::ToggleMenu => {
                debug!("mobile menu {}", if self.menu_open { "closed" } else { "opened" });
                ShellState {
                    menu_open: !self.menu_open,
                    ..self.clone()
                }
            }
            ShellAction::Scrolled(offset) => ShellState {
                compact: is_compact(offset),
                ..self.clone()
            },
        };

        if next == *self {
            return None;
        }
        if next.compact != self.compact {
            debug!("compact navigation: {}", next.compact);
        }
        Some(next)
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

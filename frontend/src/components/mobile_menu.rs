use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::state::shell::View;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_navigate: Callback<View>,
}

/// Tracks whether the overlay is mounted. After `open` drops, the overlay
/// stays up, inert, until its closing generation is finished.
#[derive(Debug, Default, PartialEq)]
struct Overlay {
    open: bool,
    closing: Option<u64>,
    closes: u64,
}

impl Overlay {
    fn new(open: bool) -> Self {
        Self { open, ..Self::default() }
    }

    fn sync(&mut self, open: bool) {
        if open {
            self.closing = None;
        } else if self.open {
            self.closes += 1;
            self.closing = Some(self.closes);
        }
        self.open = open;
    }

    fn finish_close(&mut self, generation: u64) -> bool {
        if self.closing != Some(generation) {
            return false;
        }
        self.closing = None;
        true
    }

    fn mounted(&self) -> bool {
        self.open || self.closing.is_some()
    }
}

/// Full-screen overlay with the same targets as the desktop nav. Closing
/// happens in the shell as part of the navigation itself; the overlay only
/// lingers for its exit animation.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let overlay = use_mut_ref(|| Overlay::new(props.open));
    let closes_finished = use_state(|| 0u64);

    overlay.borrow_mut().sync(props.open);
    let closing = overlay.borrow().closing;

    {
        let overlay = overlay.clone();
        let closes_finished = closes_finished.setter();
        use_effect_with_deps(
            move |closing: &Option<u64>| {
                let timeout = closing.map(|generation| {
                    Timeout::new(config::MENU_EXIT_MS, move || {
                        if overlay.borrow_mut().finish_close(generation) {
                            closes_finished.set(generation);
                        }
                    })
                });
                move || drop(timeout)
            },
            closing,
        );
    }

    if !overlay.borrow().mounted() {
        return html! {};
    }

    html! {
        <div class={classes!("mobile-menu", closing.is_some().then(|| "mobile-menu--closing"))}>
            <style>
                {format!(r#"
                    .mobile-menu {{
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        background: #050505;
                        padding: 8rem 2.5rem 0;
                        border-left: 1px solid rgba(255, 230, 0, 0.2);
                        animation: menuIn {exit}ms ease-out both;
                    }}
                    .mobile-menu--closing {{
                        pointer-events: none;
                        animation: menuOut {exit}ms ease-in both;
                    }}
                    .mobile-menu__links {{
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 2rem;
                    }}
                    .mobile-menu__link {{
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2.25rem;
                        font-weight: 900;
                        font-style: italic;
                        letter-spacing: -0.05em;
                        cursor: pointer;
                    }}
                    @keyframes menuIn {{
                        from {{ opacity: 0; transform: translateX(50px); }}
                        to {{ opacity: 1; transform: translateX(0); }}
                    }}
                    @keyframes menuOut {{
                        from {{ opacity: 1; transform: translateX(0); }}
                        to {{ opacity: 0; transform: translateX(50px); }}
                    }}
                "#, exit = config::MENU_EXIT_MS)}
            </style>
            <div class="mobile-menu__links">
                {
                    for View::ALL.iter().map(|target| {
                        let target = *target;
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                class="mobile-menu__link"
                                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(target))}
                            >
                                { target.nav_label() }
                            </button>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_at_mount_stays_unmounted() {
        let mut overlay = Overlay::new(false);
        overlay.sync(false);
        assert!(!overlay.mounted());
        assert_eq!(overlay.closing, None);
    }

    #[test]
    fn closing_lingers_until_finished() {
        let mut overlay = Overlay::new(false);
        overlay.sync(true);
        assert!(overlay.mounted());

        overlay.sync(false);
        let generation = overlay.closing.unwrap();
        assert!(overlay.mounted());

        // Re-renders while closing keep the same exit.
        overlay.sync(false);
        assert_eq!(overlay.closing, Some(generation));

        assert!(overlay.finish_close(generation));
        assert!(!overlay.mounted());
    }

    #[test]
    fn reopening_cancels_the_close() {
        let mut overlay = Overlay::new(true);
        overlay.sync(false);
        let first = overlay.closing.unwrap();

        overlay.sync(true);
        assert_eq!(overlay.closing, None);
        assert!(!overlay.finish_close(first));
        assert!(overlay.mounted());

        overlay.sync(false);
        assert_ne!(overlay.closing, Some(first));
    }
}

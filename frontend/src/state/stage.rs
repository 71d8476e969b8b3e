use log::info;

use super::shell::View;

/// One mounted view inside the transition region. The generation makes
/// every entry a fresh mount, so a view never keeps state across a
/// switch-away/switch-back cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub view: View,
    pub generation: u64,
}

impl Slot {
    pub fn key(&self) -> String {
        format!("{}-{}", self.view.key(), self.generation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Leaving,
}

impl Phase {
    pub fn class(self) -> &'static str {
        match self {
            Phase::Entering => "view-enter",
            Phase::Leaving => "view-exit",
        }
    }
}

/// The current view plus, while its exit animation runs, the one before it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewStage {
    current: Slot,
    leaving: Option<Slot>,
}

impl ViewStage {
    pub fn new(view: View) -> Self {
        Self {
            current: Slot { view, generation: 0 },
            leaving: None,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> &Slot {
        &self.current
    }

    pub fn leaving(&self) -> Option<&Slot> {
        self.leaving.as_ref()
    }

    /// Makes `view` current. Selecting the view already shown keeps it
    /// mounted. Returns whether a switch happened.
    pub fn show(&mut self, view: View) -> bool {
        if view == self.current.view {
            return false;
        }
        info!("switching view {} -> {}", self.current.view.key(), view.key());
        let next = Slot {
            view,
            generation: self.current.generation + 1,
        };
        // An exit still in flight is cut short by the newer one.
        self.leaving = Some(std::mem::replace(&mut self.current, next));
        true
    }

    /// Ends the exit of the slot with `generation`. Stale timers from an
    /// exit that was already replaced are ignored.
    pub fn finish_exit(&mut self, generation: u64) -> bool {
        match &self.leaving {
            Some(slot) if slot.generation == generation => {
                self.leaving = None;
                true
            }
            _ => false,
        }
    }

    /// Render order: the leaving slot first so it sits under the entering one.
    pub fn slots(&self) -> impl Iterator<Item = (&Slot, Phase)> {
        self.leaving
            .iter()
            .map(|slot| (slot, Phase::Leaving))
            .chain(std::iter::once((&self.current, Phase::Entering)))
    }
}

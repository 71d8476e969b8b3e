use std::rc::Rc;

use yew::Reducible;

use super::stage::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Gaming,
    Cinematic,
    Commercial,
    Music,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Gaming => "Gaming",
            Category::Cinematic => "Cinematic",
            Category::Commercial => "Commercial",
            Category::Music => "Music",
        }
    }
}

/// Gallery selection: everything, or a single category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Button order in the gallery header.
    pub const CHOICES: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Gaming),
        Filter::Only(Category::Cinematic),
        Filter::Only(Category::Commercial),
        Filter::Only(Category::Music),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project { title: "YouTube Style Videos", category: Category::Gaming, image: "cyberpunk.png" },
    Project { title: "Tutorial Video", category: Category::Cinematic, image: "urban.png" },
    Project { title: "PR/UGC Videos", category: Category::Commercial, image: "streetwear.png" },
    Project { title: "Facecam Videos", category: Category::Music, image: "nightfall.png" },
    Project { title: "Product Videos", category: Category::Commercial, image: "tech.png" },
    Project { title: "Screecasting Videos", category: Category::Cinematic, image: "tokyo.png" },
];

/// Projects admitted by `filter`, in list order.
pub fn visible(filter: Filter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| filter.admits(project)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Outgoing {
    filter: Filter,
    generation: u64,
}

/// The chosen filter plus, while their exit runs, the cards the previous
/// filter showed and this one drops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    filter: Filter,
    outgoing: Option<Outgoing>,
    generation: u64,
}

impl Selection {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns false when `filter` is already chosen. A newer choice
    /// replaces any exit still running.
    pub fn choose(&mut self, filter: Filter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.generation += 1;
        self.outgoing = Some(Outgoing { filter: self.filter, generation: self.generation });
        self.filter = filter;
        true
    }

    /// Generation of the exit in progress, if any.
    pub fn exiting(&self) -> Option<u64> {
        self.outgoing.map(|outgoing| outgoing.generation)
    }

    /// Drops the leaving cards, unless a newer choice already replaced them.
    pub fn finish_exit(&mut self, generation: u64) -> bool {
        if self.exiting() != Some(generation) {
            return false;
        }
        self.outgoing = None;
        true
    }

    /// Cards to render, in list order. Only `Phase::Entering` cards belong
    /// to the current filter.
    pub fn cards(&self) -> Vec<(&'static Project, Phase)> {
        PROJECTS
            .iter()
            .filter_map(|project| {
                if self.filter.admits(project) {
                    Some((project, Phase::Entering))
                } else if self.outgoing.map_or(false, |outgoing| outgoing.filter.admits(project)) {
                    Some((project, Phase::Leaving))
                } else {
                    None
                }
            })
            .collect()
    }
}

pub enum SelectionAction {
    Choose(Filter),
    FinishExit(u64),
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            SelectionAction::Choose(filter) => next.choose(filter),
            SelectionAction::FinishExit(generation) => next.finish_exit(generation),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

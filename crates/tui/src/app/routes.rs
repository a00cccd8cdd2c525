#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Components,
    Hooks,
}

pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

const ROUTES: &[Route] = &[Route::Home, Route::Components, Route::Hooks];

impl Route {
    pub fn all() -> &'static [Route] {
        ROUTES
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Components => "/components",
            Self::Hooks => "/hooks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Components => "Components",
            Self::Hooks => "Hooks",
        }
    }

    pub fn metadata(self) -> PageMetadata {
        match self {
            Self::Home => PageMetadata {
                title: "Template App Root Layout",
                description: "Application template with modal and confirmation dialogs",
            },
            Self::Components => PageMetadata {
                title: "Components",
                description: "Dialog and button primitives",
            },
            Self::Hooks => PageMetadata {
                title: "Hooks",
                description: "Modal controller and confirmation helper demos",
            },
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let normalized = if normalized.is_empty() { "/" } else { normalized };
        ROUTES
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
    }

    pub fn index(self) -> usize {
        ROUTES.iter().position(|route| *route == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Route> {
        ROUTES.get(index).copied()
    }

    pub fn next(self) -> Route {
        ROUTES[(self.index() + 1) % ROUTES.len()]
    }
}

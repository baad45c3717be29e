use crate::common::RouteError;

/// Logical pages reachable through the URL fragment.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Services,
    Gallery,
    Contact,
    Privacy,
    Terms,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Gallery,
        Self::Contact,
        Self::Privacy,
        Self::Terms,
    ];

    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Gallery => "/gallery",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
        }
    }

    /// In-page link target, e.g. `#/about`.
    pub fn href(&self) -> String {
        format!("#{}", self.as_path())
    }

    /// Maps a normalized path to a route. Anything outside the known set is Home.
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or_default()
    }

    /// Normalizes a raw fragment and resolves it in one step.
    pub fn from_fragment(fragment: &str) -> Self {
        Self::resolve(&normalize_fragment(fragment))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

impl PartialEq<&str> for Route {
    fn eq(&self, other: &&str) -> bool {
        self.as_path() == *other
    }
}

impl std::str::FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.as_path() == s)
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

/// Turns `location.hash` into a path: drops the `#`, defaults to `/`,
/// and guarantees a leading slash. Does not check the path is known.
pub fn normalize_fragment(fragment: &str) -> String {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

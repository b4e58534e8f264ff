//! Route table for path-based navigation.
//!
//! Every route names the view that renders it and carries [`RouteMeta`].
//! Views are resolved lazily by the router component; this module only
//! knows their identities.

use crate::config::{APP_NAME, HOME_PATH, LOGIN_PATH};

/// Screens of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Home,
    Notes,
    Chat,
    Discover,
    Profile,
    QuestionDetail,
    CreateQuestion,
    NoteDetail,
    CreateNote,
    ChatDetail,
    VillageDetail,
    UserProfile,
    Settings,
    NotFound,
}

/// Per-route metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Page title, also used for the document title.
    pub title: Option<&'static str>,
    /// Reachable without a session.
    pub public: bool,
    /// View state survives navigating away (main tabs).
    pub keep_alive: bool,
}

impl RouteMeta {
    const PUBLIC: Self = Self {
        title: None,
        public: true,
        keep_alive: false,
    };

    const fn titled(title: &'static str) -> Self {
        Self {
            title: Some(title),
            public: false,
            keep_alive: false,
        }
    }

    const fn tab(title: &'static str) -> Self {
        Self {
            title: Some(title),
            public: false,
            keep_alive: true,
        }
    }
}

/// A declared route. Segments starting with `:` capture a parameter.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

const fn route(path: &'static str, name: &'static str, view: View, meta: RouteMeta) -> RouteDef {
    RouteDef {
        path,
        name,
        view,
        meta,
    }
}

/// Paths that permanently forward to another path.
pub const REDIRECTS: &[(&str, &str)] = &[("/", HOME_PATH)];

pub static ROUTES: [RouteDef; 15] = [
    route(LOGIN_PATH, "Login", View::Login, RouteMeta::PUBLIC),
    route("/register", "Register", View::Register, RouteMeta::PUBLIC),
    // Main layout tabs
    route(HOME_PATH, "Home", View::Home, RouteMeta::tab("首页")),
    route("/notes", "Notes", View::Notes, RouteMeta::tab("笔记")),
    route("/chat", "Chat", View::Chat, RouteMeta::tab("聊天")),
    route("/discover", "Discover", View::Discover, RouteMeta::tab("发现")),
    route("/profile", "Profile", View::Profile, RouteMeta::tab("我的")),
    // Detail pages
    route(
        "/question/:id",
        "QuestionDetail",
        View::QuestionDetail,
        RouteMeta::titled("问题详情"),
    ),
    route(
        "/question/create",
        "CreateQuestion",
        View::CreateQuestion,
        RouteMeta::titled("发布问题"),
    ),
    route("/note/:id", "NoteDetail", View::NoteDetail, RouteMeta::titled("笔记详情")),
    route("/note/create", "CreateNote", View::CreateNote, RouteMeta::titled("创建笔记")),
    route("/chat/:id", "ChatDetail", View::ChatDetail, RouteMeta::titled("聊天")),
    route(
        "/village/:id",
        "VillageDetail",
        View::VillageDetail,
        RouteMeta::titled("村落详情"),
    ),
    route("/user/:id", "UserProfile", View::UserProfile, RouteMeta::titled("用户主页")),
    route("/settings", "Settings", View::Settings, RouteMeta::titled("设置")),
];

/// Fallback for paths no route matches. Private like every undeclared route.
pub static NOT_FOUND: RouteDef = route("*", "NotFound", View::NotFound, RouteMeta {
    title: None,
    public: false,
    keep_alive: false,
});

/// A path resolved against [`ROUTES`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppRoute {
    /// Normalized path after redirects.
    pub path: String,
    /// Query string and fragment as requested, e.g. `?tab=hot#top`.
    pub query: String,
    pub def: &'static RouteDef,
    pub params: Vec<(&'static str, String)>,
}

impl AppRoute {
    /// Resolve a browser location. Query and fragment take no part in
    /// matching but are kept in [`AppRoute::query`].
    ///
    /// Redirects apply first. When several routes match, the one with more
    /// literal segments wins, so `/question/create` beats `/question/:id`.
    pub fn resolve(location: &str) -> Self {
        let query = location
            .find(['?', '#'])
            .map(|at| location[at..].to_string())
            .unwrap_or_default();
        let mut path = normalize(location);
        if let Some((_, to)) = REDIRECTS.iter().find(|(from, _)| *from == path) {
            path = (*to).to_string();
        }

        let mut best: Option<(&'static RouteDef, Vec<(&'static str, String)>, usize)> = None;
        for def in ROUTES.iter() {
            if let Some((params, literals)) = match_pattern(def.path, &path)
                && best.as_ref().is_none_or(|(_, _, current)| literals > *current)
            {
                best = Some((def, params, literals));
            }
        }

        match best {
            Some((def, params, _)) => Self {
                path,
                query,
                def,
                params,
            },
            None => Self {
                path,
                query,
                def: &NOT_FOUND,
                params: Vec::new(),
            },
        }
    }

    /// Location to write into the address bar.
    pub fn href(&self) -> String {
        format!("{}{}", self.path, self.query)
    }

    pub fn view(&self) -> View {
        self.def.view
    }

    pub fn meta(&self) -> RouteMeta {
        self.def.meta
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn is_public(&self) -> bool {
        self.def.meta.public
    }

    /// Captured path parameter, e.g. `id` for `/note/:id`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Numeric `id` parameter, when present and well-formed.
    pub fn id(&self) -> Option<u64> {
        self.param("id")?.parse().ok()
    }

    /// Document title for this route.
    pub fn document_title(&self) -> String {
        match self.def.meta.title {
            Some(title) => format!("{} - {}", title, APP_NAME),
            None => APP_NAME.to_string(),
        }
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Match `path` against `pattern`, returning captured params and the number
/// of literal segments that matched.
fn match_pattern(
    pattern: &'static str,
    path: &str,
) -> Option<(Vec<(&'static str, String)>, usize)> {
    let pattern_segments: Vec<&'static str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    let mut literals = 0;
    for (pat, seg) in pattern_segments.into_iter().zip(path_segments) {
        if let Some(name) = pat.strip_prefix(':') {
            params.push((name, seg.to_string()));
        } else if pat == seg {
            literals += 1;
        } else {
            return None;
        }
    }
    Some((params, literals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_home() {
        let route = AppRoute::resolve("/");
        assert_eq!(route.path, HOME_PATH);
        assert_eq!(route.view(), View::Home);
        assert!(route.meta().keep_alive);

        assert_eq!(AppRoute::resolve("").view(), View::Home);
    }

    #[test]
    fn test_static_segment_wins() {
        assert_eq!(AppRoute::resolve("/question/create").view(), View::CreateQuestion);
        assert_eq!(AppRoute::resolve("/note/create").view(), View::CreateNote);

        let detail = AppRoute::resolve("/question/42");
        assert_eq!(detail.view(), View::QuestionDetail);
        assert_eq!(detail.param("id"), Some("42"));
        assert_eq!(detail.id(), Some(42));
    }

    #[test]
    fn test_normalization() {
        let route = AppRoute::resolve("/note/7/?from=search#top");
        assert_eq!(route.path, "/note/7");
        assert_eq!(route.view(), View::NoteDetail);
        assert_eq!(route.id(), Some(7));

        assert_eq!(AppRoute::resolve("chat").view(), View::Chat);
    }

    #[test]
    fn test_public_routes() {
        assert!(AppRoute::resolve("/login").is_public());
        assert!(AppRoute::resolve("/register").is_public());
        assert!(!AppRoute::resolve("/settings").is_public());
        assert!(!AppRoute::resolve("/village/3").is_public());
    }

    #[test]
    fn test_unknown_path() {
        let route = AppRoute::resolve("/nowhere/at/all");
        assert_eq!(route.view(), View::NotFound);
        assert!(!route.is_public());
        assert_eq!(route.id(), None);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(
            AppRoute::resolve("/settings").document_title(),
            format!("设置 - {}", APP_NAME)
        );
        assert_eq!(AppRoute::resolve("/login").document_title(), APP_NAME);
    }

    #[test]
    fn test_route_names_unique() {
        let mut names: Vec<_> = ROUTES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn test_query_survives_resolution() {
        let route = AppRoute::resolve("/question/42?from=search#answers");
        assert_eq!(route.path, "/question/42");
        assert_eq!(route.id(), Some(42));
        assert_eq!(route.query, "?from=search#answers");
        assert_eq!(route.href(), "/question/42?from=search#answers");

        let redirected = AppRoute::resolve("/?tab=hot");
        assert_eq!(redirected.href(), "/home?tab=hot");

        assert_eq!(AppRoute::resolve("/notes").href(), "/notes");
    }
}

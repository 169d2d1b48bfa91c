//! Post-login dashboard state: section selection and the welcome post.

/// Section shown when the dashboard mounts.
pub const DEFAULT_SECTION: &str = "comunidad";

const COMMUNITY_SUBTITLE: &str = "Espacio para discusiones generales y anuncios de la plataforma.";

/// Initial like count of the welcome post.
pub const WELCOME_POST_LIKES: u32 = 245;

/// Primary sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub id: &'static str,
}

pub const SIDEBAR_ITEMS: [SidebarItem; 5] = [
    SidebarItem {
        icon: "dashboard",
        label: "Mi panel",
        id: "panel",
    },
    SidebarItem {
        icon: "groups",
        label: "Comunidad",
        id: "comunidad",
    },
    SidebarItem {
        icon: "chat",
        label: "Mensajes directos",
        id: "mensajes",
    },
    SidebarItem {
        icon: "home",
        label: "Inicio",
        id: "inicio",
    },
    SidebarItem {
        icon: "event",
        label: "Eventos",
        id: "eventos",
    },
];

/// "Mi Espacio" entries. Their ids come from [`space_item_id`].
pub const SPACE_ITEMS: [&str; 7] = [
    "General",
    "Casos de éxito",
    "Aprender a programar",
    "AI Tools",
    "Inversiones Inteligentes",
    "Venture Capital & Scouting",
    "Análisis de Sentimiento",
];

/// Feed filter tabs. Only the highlighted one is styled as active.
pub const FEED_TABS: [&str; 3] = ["Recientes", "Destacados", "Siguiendo"];
pub const HIGHLIGHTED_FEED_TAB: &str = "Destacados";

/// Section id for a "Mi Espacio" label: lower-cased, spaces to underscores.
pub fn space_item_id(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Which dashboard section is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    section: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn select(&mut self, section: impl Into<String>) {
        self.section = section.into();
    }

    pub fn is_selected(&self, section: &str) -> bool {
        self.section == section
    }

    /// Only the community section has a feed; everything else is a placeholder.
    pub fn shows_feed(&self) -> bool {
        self.section == DEFAULT_SECTION
    }

    /// Header title: the sidebar label, or "Mi Espacio" for space items.
    pub fn title(&self) -> &'static str {
        if self.shows_feed() {
            return "Comunidad";
        }
        SIDEBAR_ITEMS
            .iter()
            .find(|item| item.id == self.section)
            .map(|item| item.label)
            .unwrap_or("Mi Espacio")
    }

    pub fn subtitle(&self) -> String {
        if self.shows_feed() {
            COMMUNITY_SUBTITLE.to_string()
        } else {
            format!("Gestión y visualización de {}", self.section.replace('_', " "))
        }
    }

    /// Body text of the "En Construcción" placeholder.
    pub fn placeholder_text(&self) -> String {
        format!("La sección de {} estará disponible pronto.", self.section)
    }
}

/// Like toggle of the welcome post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u32,
}

impl Default for LikeState {
    fn default() -> Self {
        Self {
            liked: false,
            count: WELCOME_POST_LIKES,
        }
    }
}

impl LikeState {
    pub fn toggle(&mut self) {
        if self.liked {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count += 1;
        }
        self.liked = !self.liked;
    }
}

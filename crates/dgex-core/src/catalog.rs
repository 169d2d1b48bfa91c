//! Static content rendered by the informational pages.

use crate::page::Page;

// =============================================================================
// Home
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link_text: &'static str,
    pub target: Page,
    /// Accent colour class suffix ("primary" or "secondary")
    pub accent: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "school",
        title: "Formación Especializada",
        description: "Un ecosistema de aprendizaje donde la banca de inversión converge con la Inteligencia Artificial. Accede a prácticas, laboratorios de IA y módulos estratégicos diseñados para dominar el futuro de las finanzas.",
        link_text: "Explorar formación",
        target: Page::Training,
        accent: "primary",
    },
    Feature {
        icon: "hub",
        title: "Comunidad",
        description: "Conecta con otros profesionales y estudiantes apasionados por el futuro de las finanzas en nuestro ecosistema digital.",
        link_text: "Unirse ahora",
        target: Page::Community,
        accent: "secondary",
    },
    Feature {
        icon: "auto_stories",
        title: "Recursos Premium",
        description: "Accede a reportes de mercado, libros, audios, análisis y contenido exclusivo para mantenerte en la vanguardia del sector mediante IA.",
        link_text: "+ Conocimiento",
        target: Page::Investment,
        accent: "primary",
    },
];

// =============================================================================
// Training
// =============================================================================

/// Tabs of the training page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainingTab {
    #[default]
    MarketData,
    Programs,
}

impl TrainingTab {
    pub fn label(self) -> &'static str {
        match self {
            TrainingTab::MarketData => "Datos del Mercado",
            TrainingTab::Programs => "Programas Especializados",
        }
    }
}

/// Animated statistic callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub end: u64,
    pub suffix: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Crecimiento de GitHub Copilot",
        end: 13_534,
        suffix: "%",
        description: "(Trece mil porciento 🤯)...La habilidad de más rápido crecimiento en el sector tecnológico.",
    },
    Stat {
        label: "Eficiencia como Objetivo",
        end: 72,
        suffix: "%",
        description: "7 de cada 10 ejecutivos priorizan la productividad sobre la reducción de costos.",
    },
    Stat {
        label: "Brecha de Liderazgo",
        end: 48,
        suffix: "%",
        description: "Solo la mitad de los líderes están preparados para liderar la transición a la IA.",
    },
    Stat {
        label: "Inscripciones Globales",
        end: 11,
        suffix: "M+",
        description: "Personas formándose en IA Generativa hoy.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub skills: [&'static str; 3],
}

pub const TRACKS: [Track; 5] = [
    Track {
        title: "Finanzas Corporativas",
        icon: "account_balance",
        description: "Domina la automatización de reportes financieros y optimización de flujos de caja con agentes de IA.",
        skills: ["Automatización", "Forecasting", "Eficiencia"],
    },
    Track {
        title: "Inversiones Inteligentes",
        icon: "trending_up",
        description: "Implementa modelos predictivos para identificar oportunidades de mercado antes que la competencia.",
        skills: ["Predictive AI", "Market Analysis", "Data Mining"],
    },
    Track {
        title: "Venture Capital & Scouting",
        icon: "rocket_launch",
        description: "Utiliza IA para el due diligence masivo y la identificación temprana de unicornios tecnológicos.",
        skills: ["Scouting", "Due Diligence", "Pattern Matching"],
    },
    Track {
        title: "Análisis de Sentimiento",
        icon: "psychology",
        description: "Decodifica la percepción de marca y tendencias de consumo en tiempo real usando NLP avanzado.",
        skills: ["NLP", "Brand Equity", "Real-time Data"],
    },
    Track {
        title: "Políticas Públicas de Inversión",
        icon: "policy",
        description: "Simula el impacto macroeconómico de políticas de inversión mediante gemelos digitales.",
        skills: ["Simulación", "Macroeconomía", "Gobernanza"],
    },
];

pub const TRENDING_SKILLS: [&str; 7] = [
    "ChatGPT",
    "IA Generativa",
    "Microsoft Copilot",
    "Agentes de IA",
    "Prompt Engineering",
    "Ética de IA",
    "Google Gemini",
];

pub const SKILLS_SOURCE: &str = "Fuente: Datos Globales de Aprendizaje 2026";

// =============================================================================
// Books
// =============================================================================

pub const PODCAST_URL: &str =
    "https://open.spotify.com/show/1P45qYGiz87jkoOcSEDkoR?si=kSVHSXqoSaOhhY5LqGRCxw";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub embed_src: &'static str,
    /// Video episode spanning the full grid width
    pub large: bool,
}

pub const BOOKS: [Book; 7] = [
    Book {
        title: "La Psicología del Dinero",
        author: "Morgan Housel",
        embed_src: "https://open.spotify.com/embed/episode/7nmZyBUYhG5MhbKfBWp3EZ?utm_source=generator",
        large: false,
    },
    Book {
        title: "Warren y Charlie",
        author: "Javier Caballero",
        embed_src: "https://open.spotify.com/embed/episode/32pHKcwNIwKEdF5SXBdMQw?utm_source=generator",
        large: false,
    },
    Book {
        title: "Solo una cosa",
        author: "Gary Keller",
        embed_src: "https://open.spotify.com/embed/episode/6T200nkxRixTtTPkBYcZn0/video?utm_source=generator",
        large: true,
    },
    Book {
        title: "Crossing the Chasm",
        author: "Geoffrey Moore",
        embed_src: "https://open.spotify.com/embed/episode/5bWIt17tbEaNWHbdGz6Scj?utm_source=generator",
        large: false,
    },
    Book {
        title: "De Cero a Uno",
        author: "Peter Thiel",
        embed_src: "https://open.spotify.com/embed/episode/5XU6hWtia5CsF8Xd4V1ABl?utm_source=generator",
        large: false,
    },
    Book {
        title: "El Elemento",
        author: "Ken Robinson",
        embed_src: "https://open.spotify.com/embed/episode/1VrTA15QguPtSuxJurKQJX?utm_source=generator",
        large: false,
    },
    Book {
        title: "El Arte de la Guerra",
        author: "Sun Tzu",
        embed_src: "https://open.spotify.com/embed/episode/3p25S15GrAFVamQTZ5Pqm1?utm_source=generator",
        large: false,
    },
];

// =============================================================================
// Investment
// =============================================================================

pub const CHARITY_URL: &str = "https://grajales-camilo.github.io/Fundacion_AG/";
pub const PAYPAL_URL: &str = "https://www.paypal.com/ncp/payment/UBFGNX72CJUHE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
    pub highlight: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        title: "Free",
        description: "Para quienes prefieren dedicarse a una cosa a la vez.",
        price: "USD 0",
        period: "",
        features: &[
            "Acceso a la comunidad",
            "Recursos gratuitos de calidad",
            "Actualización semanal sobre sus temas de interés",
        ],
        button_text: "Elegir Free",
        highlight: false,
    },
    Plan {
        title: "Pro",
        description: "Para quienes buscan aumentar significativamente sus habilidades fintech",
        price: "USD 15,00",
        period: "/mes",
        features: &[
            "Todo lo de Free",
            "Acceso a todos los cursos",
            "Acceso ilimitado a recursos exclusivos: LabIA, Talleres, Webinars",
            "Material adicional para mejorar el aprendizaje",
            "Comunidad privada",
            "Soporte personalizado",
        ],
        button_text: "Elegir Pro",
        highlight: true,
    },
    Plan {
        title: "Pro Unique",
        description: "Compra cada curso de manera individual",
        price: "USD 120,00",
        period: "/pago único",
        features: &[
            "Accede de por vida a los cursos exclusivos y al material de apoyo",
            "Test de validación de conocimientos",
            "Un mes de acceso a la comunidad privada",
            "*Por cada curso que compres, USD 20 van a nuestros programas de alfabetización digital rural",
        ],
        button_text: "Comprar cursos",
        highlight: false,
    },
];

/// How a plan feature line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanLine<'a> {
    Included(&'a str),
    Excluded(&'a str),
    /// "*"-prefixed line linking to the charity program (prefix stripped)
    Charity(&'a str),
}

pub fn plan_line(feature: &str) -> PlanLine<'_> {
    if let Some(text) = feature.strip_prefix('*') {
        PlanLine::Charity(text)
    } else if feature.starts_with("No incluye") {
        PlanLine::Excluded(feature)
    } else {
        PlanLine::Included(feature)
    }
}

// =============================================================================
// Footer
// =============================================================================

/// Footer link: either an in-site page or an external URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterTarget {
    Page(Page),
    External(&'static str),
    /// Announced but not available yet
    Soon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: FooterTarget,
}

pub const PLATFORM_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Formación", target: FooterTarget::Page(Page::Training) },
    FooterLink { label: "Contenido libre", target: FooterTarget::Page(Page::Books) },
    FooterLink { label: "Comunidad Ex", target: FooterTarget::Page(Page::Community) },
    FooterLink { label: "Mentorías 1:1 (Pronto)", target: FooterTarget::Soon },
];

pub const COMPANY_LINKS: [FooterLink; 4] = [
    FooterLink {
        label: "Quiénes somos",
        target: FooterTarget::External("https://www.dgcapital.co/quienes-somos"),
    },
    FooterLink {
        label: "Qué hacemos",
        target: FooterTarget::External("https://www.dgcapital.co/que-hacemos/inversion"),
    },
    FooterLink { label: "Contacto", target: FooterTarget::External("#") },
    FooterLink {
        label: "Sostenibilidad",
        target: FooterTarget::External("https://www.dgcapital.co/responsabilidad-social"),
    },
];

pub const CONTACT_ADDRESS: [&str; 2] = ["Cra. 43 A Nº 1-50 Torre Piso 6,", "Medellín"];
pub const CONTACT_PHONE: &str = "(+57) 323 4761648";
pub const CONTACT_EMAIL: &str = "ex@dgcapital.co";
pub const POWERED_BY_URL: &str = "https://grajales-camilo.github.io/Jaguar_House/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_target_distinct_pages() {
        let targets: Vec<Page> = FEATURES.iter().map(|f| f.target).collect();
        assert_eq!(targets, vec![Page::Training, Page::Community, Page::Investment]);
    }

    #[test]
    fn test_only_pro_is_highlighted() {
        let highlighted: Vec<&str> = PLANS.iter().filter(|p| p.highlight).map(|p| p.title).collect();
        assert_eq!(highlighted, vec!["Pro"]);
    }

    #[test]
    fn test_charity_line_strips_marker() {
        let last = PLANS[2].features[3];
        assert_eq!(
            plan_line(last),
            PlanLine::Charity("Por cada curso que compres, USD 20 van a nuestros programas de alfabetización digital rural")
        );
        assert_eq!(plan_line("Comunidad privada"), PlanLine::Included("Comunidad privada"));
        assert_eq!(plan_line("No incluye cursos"), PlanLine::Excluded("No incluye cursos"));
    }

    #[test]
    fn test_single_large_book() {
        assert_eq!(BOOKS.iter().filter(|b| b.large).count(), 1);
        assert!(BOOKS.iter().all(|b| b.embed_src.starts_with("https://open.spotify.com/embed/")));
    }
}

//! Static page content.

/// Brand shown in the nav bar, the about plate and the footer.
pub const BRAND: &str = "% SDF >..";

/// Text of the block-letter hero logo.
pub const LOGO_TEXT: &str = "SDF";

pub const STATUS_LABEL: &str = "SYSTEM STATUS:";
pub const STATUS_VALUE: &str = "OPTIMIZED";

/// Log-like strip scrolling under the hero headline.
pub const COMMAND_STRIP: &str = " [SYSTEM]: RUNNING EXECUTABLE... [PORT]: 8080 OPEN... \
[SHELL]: BASH INITIALIZED... [USER]: % SDF >.. LOGGED IN... [STATUS]: SHIELD ACTIVE... \
[KERNEL]: COMPILING ASSETS... [BOT]: SOVEREIGN READY... [LOG]: INCOMING REQUESTS STABLE... ";

pub const YOUTUBE_URL: &str = "https://youtube.com/@s4daf.d3v?si=YQ5Eij4Hcya2ceXr";

pub const ABOUT_TITLE: &str = "profile_v3.0";
pub const ABOUT_IDENTITY: &str = "~/Identity";

/// Label/value facts in the about plate's left column.
pub const ABOUT_FACTS: [(&str, &str); 2] = [
    ("CORE ROLE", "Backend Architect"),
    ("DOMAIN", "Discord Automation"),
];

pub const ABOUT_LEAD: &str = "Expert in streamlining complex digital environments through \
enterprise-grade Java backends and scalable Discord integrations.";

pub const ABOUT_BODY: &str = "I translate intricate logic into efficient, low-latency systems. \
My philosophy is rooted in pure performance and architectural elegance.";

pub const ABOUT_LINK: &str = "▶ LIVE ON YOUTUBE";

pub const SKILLS_TITLE: &str = "System_Arsenal";
pub const PROJECTS_TITLE: &str = "Execution_History";
pub const PROJECTS_SUBTITLE: &str = "REACTIVE MODULAR UNITS";

/// A skill plate.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        name: "Java Core",
        icon: "▣",
        desc: "Developing multi-threaded high-performance system backends.",
    },
    Skill {
        name: "Python",
        icon: "</>",
        desc: "Automated script clusters and advanced data processing.",
    },
    Skill {
        name: "Discord Engine",
        icon: "◉",
        desc: "Architecting complex bots with Discord.js & JDA framework.",
    },
    Skill {
        name: "Cloud Infra",
        icon: "≣",
        desc: "Managing containerized scalable system deployments.",
    },
];

/// A project plate.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
    pub desc: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Sovereign_Bot",
        tech: "Java / Redis / JDA",
        desc: "A military-grade Discord moderation suite used by 100k+ users for security and automation.",
    },
    Project {
        title: "Atlas_OS",
        tech: "Python / React",
        desc: "A custom terminal-inspired dashboard for managing cloud server clusters via mobile.",
    },
    Project {
        title: "Vertex_API",
        tech: "C++ / PostgreSQL",
        desc: "High-performance data engine for real-time order matching in financial systems.",
    },
    Project {
        title: "Nexus_Dashboard",
        tech: "TS / Tailwind",
        desc: "Visual data lake for monitoring bot health metrics across 4 different global regions.",
    },
];

pub const PROJECT_TAGS: [&str; 2] = ["READ_ONLY", "AES_256"];

pub const EDITION: &str = "TERMINAL_EDITION v3.5.0 // CORE_STABLE";
pub const FOOTER_LINK: &str = "▶ YOUTUBE";
pub const FOOTER_REBOOT: &str = "REBOOT_SYSTEM";

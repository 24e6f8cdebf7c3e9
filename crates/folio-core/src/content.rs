//! Static content tables rendered by the page sections.
//!
//! All records are `'static` literals; nothing here is mutated at runtime.

/// A page section reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionId {
    /// DOM id of the section element.
    pub fn dom_id(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#about`.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "#home",
            SectionId::About => "#about",
            SectionId::Projects => "#projects",
            SectionId::Contact => "#contact",
        }
    }

    /// Sections in page order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Hero,
            SectionId::About,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }

    /// Position of the section in page order.
    pub fn index(&self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Contact => 3,
        }
    }
}

/// A skill card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Font Awesome icon class.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A project card in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Relative screenshot path, resolved by the webview asset handler.
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
}

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

/// A navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

pub const PROFILE_IMAGE: &str = "assets/profile.jpg";

/// Lead paragraph of the about section.
pub const ABOUT_LEAD: &str = "I'm a passionate Full Stack Developer with a strong foundation in both \
frontend and backend technologies. I love creating elegant solutions to complex problems and \
building applications that make a difference.";

/// Invitation shown beside the contact form.
pub const CONTACT_BLURB: &str = "I'm always interested in hearing about new projects and \
opportunities. Whether you have a question or just want to say hi, feel free to reach out!";

pub const SKILLS: &[Skill] = &[
    Skill {
        icon: "fa-code",
        title: "Frontend",
        description: "html, css, js ,React ,TypeScript",
    },
    Skill {
        icon: "fa-server",
        title: "Backend",
        description: ".net c#, Python, Java",
    },
    Skill {
        icon: "fa-database",
        title: "Database",
        description: "SQL",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Learning Management System",
        description: "An interactive learning platform that helps students and teachers connect, manage courses, assignments, and track progress in real-time.",
        image: "assets/learning-project.png",
        tech: &["HTML", "css", "javascript"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Music Streaming App",
        description: "A modern music streaming application with a sleek interface, playlist management, and personalized music recommendations.",
        image: "assets/music-project.png",
        tech: &["HTML", "css", "javascript"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website showcasing my projects and skills, built with Rust and featuring smooth animations.",
        image: "assets/portfolio.png",
        tech: &["HTML", "css", "javascript"],
        live_url: "#",
        source_url: "#",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "fab fa-github",
        href: "https://github.com/Omar-Ref3y",
        label: "GitHub",
    },
    SocialLink {
        icon: "fab fa-linkedin",
        href: "https://www.linkedin.com/in/omar-refay-b20081253",
        label: "LinkedIn",
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        section: SectionId::About,
    },
    NavLink {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavLink {
        label: "Contact",
        section: SectionId::Contact,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Database,
    Globe,
    Mail,
    Phone,
    MapPin,
    Github,
    ExternalLink,
    Star,
    Award,
    Briefcase,
    Calendar,
    Users,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Database => "⛁",
            Icon::Globe => "🌐",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
            Icon::Github => "⌥",
            Icon::ExternalLink => "↗",
            Icon::Star => "★",
            Icon::Award => "🏆",
            Icon::Briefcase => "💼",
            Icon::Calendar => "📅",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

pub static PROFILE: Profile = Profile {
    name: "B Sharan Goutham",
    initials: "SG",
    headline: "Full Stack Developer & Innovation Engineer crafting digital experiences that bridge creativity with cutting-edge technology",
    location: "Nalgonda, Telangana",
    phone: "+91 7013123744",
    email: "sharan1114411@gmail.com",
};

#[derive(Debug, Clone)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { id: "home", label: "Home" },
    NavLink { id: "skills", label: "Skills" },
    NavLink { id: "projects", label: "Projects" },
    NavLink { id: "achievements", label: "Achievements" },
    NavLink { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: Icon,
    pub color: &'static str,
}

pub static SKILLS: [Skill; 6] = [
    Skill { name: "React", level: 95, icon: Icon::Code, color: "bg-blue-500" },
    Skill { name: "Node.js", level: 90, icon: Icon::Database, color: "bg-green-500" },
    Skill { name: "TypeScript", level: 88, icon: Icon::Code, color: "bg-blue-600" },
    Skill { name: "Python", level: 85, icon: Icon::Code, color: "bg-yellow-500" },
    Skill { name: "MongoDB", level: 82, icon: Icon::Database, color: "bg-green-600" },
    Skill { name: "AWS", level: 80, icon: Icon::Globe, color: "bg-orange-500" },
];

/// CSS width for a skill bar; levels above 100 are capped.
pub fn skill_bar_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub featured: bool,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and MongoDB",
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        github: "#",
        live: "#",
        featured: true,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management with real-time updates",
        image: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "Socket.io", "Express", "PostgreSQL"],
        github: "#",
        live: "#",
        featured: true,
    },
    Project {
        title: "Weather Dashboard",
        description: "Real-time weather tracking with beautiful visualizations",
        image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Vue.js", "Chart.js", "OpenWeather API"],
        github: "#",
        live: "#",
        featured: false,
    },
    Project {
        title: "Social Media Analytics",
        description: "Analytics dashboard for social media performance tracking",
        image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "D3.js", "Python", "FastAPI"],
        github: "#",
        live: "#",
        featured: false,
    },
];

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Featured projects first, each group in listed order.
pub fn projects_featured_first() -> impl Iterator<Item = &'static Project> {
    featured_projects().chain(PROJECTS.iter().filter(|p| !p.featured))
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub title: &'static str,
    pub year: &'static str,
    pub organization: &'static str,
}

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { title: "Best Innovation Award", year: "2023", organization: "Tech Conference" },
    Achievement { title: "Full Stack Certification", year: "2022", organization: "FreeCodeCamp" },
    Achievement { title: "Hackathon Winner", year: "2022", organization: "Local Dev Community" },
    Achievement { title: "AWS Certified", year: "2021", organization: "Amazon Web Services" },
];

#[derive(Debug, Clone)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub static STATS: [Stat; 4] = [
    Stat { number: "50+", label: "Projects Completed", icon: Icon::Briefcase },
    Stat { number: "3+", label: "Years Experience", icon: Icon::Calendar },
    Stat { number: "25+", label: "Happy Clients", icon: Icon::Users },
    Stat { number: "15+", label: "Technologies", icon: Icon::Zap },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardStyle {
    ClassicOrnate,
    ArtDeco,
    Victorian,
    RetroTypography,
    ClassicMonogram,
    LuxuryGold,
}

/// Tailwind classes for one business card design.
#[derive(Debug, Clone)]
pub struct CardPalette {
    pub surface: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub rule: &'static str,
}

#[derive(Debug, Clone)]
pub struct CardDesign {
    pub style: CardStyle,
    pub emblem: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub details: [&'static str; 3],
    pub palette: CardPalette,
}

pub static CARD_DESIGNS: [CardDesign; 6] = [
    CardDesign {
        style: CardStyle::ClassicOrnate,
        emblem: "SG",
        name: "SHARAN GOUTHAM",
        title: "FULL STACK DEVELOPER",
        details: ["📧 sharan1114411@gmail.com", "📱 +91 7013123744", "📍 Nalgonda, Telangana"],
        palette: CardPalette {
            surface: "bg-gradient-to-br from-amber-100 to-orange-100 border-4 border-amber-800",
            name: "text-xl font-bold text-amber-900 font-serif",
            title: "text-sm text-amber-800 font-semibold tracking-wider",
            details: "text-xs text-amber-700",
            rule: "bg-amber-700",
        },
    },
    CardDesign {
        style: CardStyle::ArtDeco,
        emblem: "B",
        name: "B SHARAN GOUTHAM",
        title: "INNOVATION ENGINEER",
        details: ["✉ sharan1114411@gmail.com", "☎ +91 7013123744", "⌘ Full Stack Development"],
        palette: CardPalette {
            surface: "bg-gradient-to-br from-slate-800 via-slate-700 to-slate-900 border-2 border-yellow-600",
            name: "text-lg font-bold text-yellow-400 tracking-widest font-sans",
            title: "text-xs text-yellow-300 font-semibold tracking-widest",
            details: "text-xs text-yellow-200",
            rule: "bg-yellow-500",
        },
    },
    CardDesign {
        style: CardStyle::Victorian,
        emblem: "SG",
        name: "Sharan Goutham B",
        title: "Technology Artisan",
        details: ["✉ sharan1114411@gmail.com", "☎ +91 7013123744", "⚡ Innovation & Development"],
        palette: CardPalette {
            surface: "bg-gradient-to-br from-emerald-50 via-teal-50 to-cyan-50 border-4 border-emerald-800",
            name: "text-lg font-bold text-emerald-900 font-serif",
            title: "text-sm text-emerald-800 font-semibold italic",
            details: "text-xs text-emerald-700",
            rule: "bg-emerald-700",
        },
    },
    CardDesign {
        style: CardStyle::RetroTypography,
        emblem: "TECH",
        name: "B.SHARAN.GOUTHAM",
        title: "DEVELOPER",
        details: ["@ sharan1114411@gmail.com", "# +91 7013123744", "$ Full Stack Solutions"],
        palette: CardPalette {
            surface: "bg-gradient-to-br from-orange-100 via-red-50 to-pink-100 border-[3px] border-red-800",
            name: "text-xl font-bold text-red-900 font-mono tracking-tight",
            title: "text-sm text-red-800 font-bold tracking-widest",
            details: "text-xs text-red-700 font-mono",
            rule: "bg-red-700",
        },
    },
    CardDesign {
        style: CardStyle::ClassicMonogram,
        emblem: "SG",
        name: "Sharan Goutham",
        title: "Software Engineer",
        details: ["✉ sharan1114411@gmail.com", "☎ +91 7013123744", "⚡ Innovation & Excellence"],
        palette: CardPalette {
            surface: "bg-gradient-to-br from-indigo-50 via-purple-50 to-pink-50 border-4 border-indigo-800",
            name: "text-lg font-bold text-indigo-900 font-serif",
            title: "text-sm text-indigo-800 font-semibold",
            details: "text-xs text-indigo-700",
            rule: "bg-indigo-700",
        },
    },
    CardDesign {
        style: CardStyle::LuxuryGold,
        emblem: "♛",
        name: "B SHARAN GOUTHAM",
        title: "TECH ARCHITECT",
        details: ["✉ sharan1114411@gmail.com", "☎ +91 7013123744", "⚡ Premium Solutions"],
        palette: CardPalette {
            surface: "bg-gradient-to-br from-gray-900 via-gray-800 to-black border-4 border-yellow-500",
            name: "text-lg font-bold text-yellow-400 font-serif tracking-wide",
            title: "text-sm text-yellow-300 font-semibold tracking-widest",
            details: "text-xs text-yellow-200",
            rule: "bg-yellow-500",
        },
    },
];

#[derive(Debug, Clone)]
pub struct DesignSpec {
    pub icon: &'static str,
    pub heading: &'static str,
    pub lines: [&'static str; 2],
}

pub static DESIGN_SPECS: [DesignSpec; 3] = [
    DesignSpec {
        icon: "📏",
        heading: "Standard Dimensions",
        lines: ["3.5\" × 2\" (89mm × 51mm)", "Professional business card size"],
    },
    DesignSpec {
        icon: "🎨",
        heading: "Vintage Aesthetics",
        lines: ["Ornate borders, classic typography,", "timeless color palettes"],
    },
    DesignSpec {
        icon: "✨",
        heading: "Premium Details",
        lines: ["Embossed effects, foil accents,", "sophisticated patterns"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollConfig;
    use std::collections::HashSet;

    #[test]
    fn test_nav_links_match_tracked_sections() {
        let ids: Vec<String> = NAV_LINKS.iter().map(|l| l.id.to_string()).collect();
        assert_eq!(ids, ScrollConfig::default().sections);
    }

    #[test]
    fn test_skill_levels_in_range() {
        for skill in SKILLS.iter() {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
        assert_eq!(skill_bar_width(95), "95%");
        assert_eq!(skill_bar_width(250), "100%");
    }

    #[test]
    fn test_featured_projects() {
        let featured: Vec<&str> = featured_projects().map(|p| p.title).collect();
        assert_eq!(featured, vec!["E-Commerce Platform", "Task Management App"]);
    }

    #[test]
    fn test_projects_featured_first() {
        let ordered: Vec<&Project> = projects_featured_first().collect();
        assert_eq!(ordered.len(), PROJECTS.len());
        let first_plain = ordered.iter().position(|p| !p.featured).unwrap_or(ordered.len());
        assert!(ordered[first_plain..].iter().all(|p| !p.featured));
        assert_eq!(ordered[first_plain].title, "Weather Dashboard");
    }

    #[test]
    fn test_card_designs_are_distinct() {
        let styles: HashSet<_> = CARD_DESIGNS.iter().map(|c| c.style).collect();
        assert_eq!(styles.len(), CARD_DESIGNS.len());
        assert!(CARD_DESIGNS
            .iter()
            .all(|c| c.details.iter().any(|d| d.contains(PROFILE.email))));
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:sharan1114411@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:+917013123744");
    }
}

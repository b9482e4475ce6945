//! Copy for the page. Kept out of the components so the markup stays readable.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    VirtualAssistant,
    GraphicDesign,
    ExecutiveSupport,
}

pub struct Service {
    pub kind: ServiceKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub highlights: [&'static str; 4],
    pub button_label: &'static str,
    pub dialog_title: &'static str,
    pub dialog_description: &'static str,
    pub offerings_heading: &'static str,
    pub offerings: [&'static str; 5],
    pub audience_heading: &'static str,
    pub audience: &'static str,
    pub call_to_action: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        kind: ServiceKind::VirtualAssistant,
        icon: "📄",
        title: "Virtual Assistant",
        tagline: "Your Digital Life, Organized! 📧",
        highlights: [
            "Email taming & inbox zen",
            "Calendar wizardry",
            "Meeting prep magic",
            "Document creation",
        ],
        button_label: "Learn More",
        dialog_title: "Virtual Assistant Services",
        dialog_description: "Let me handle the digital chaos so you can focus on what you do best! 🎯",
        offerings_heading: "What I'll Do For You:",
        offerings: [
            "Transform your chaotic inbox into an organized masterpiece",
            "Schedule meetings without the back-and-forth email dance",
            "Create documents that actually make sense (revolutionary, I know!)",
            "Keep your CRM updated so you never lose track of important contacts",
            "Handle travel coordination like a pro travel agent",
        ],
        audience_heading: "Perfect For:",
        audience: "Entrepreneurs, consultants, and busy professionals who need reliable support without the overhead of a full-time employee.",
        call_to_action: "Let's Get Started! 🚀",
    },
    Service {
        kind: ServiceKind::GraphicDesign,
        icon: "🎨",
        title: "Graphic Design",
        tagline: "Pretty Things That Work! 🎨",
        highlights: [
            "Social media that pops",
            "Flyers people actually read",
            "Packaging perfection",
            "Canva + personal flair",
        ],
        button_label: "See Portfolio",
        dialog_title: "Graphic Design Services",
        dialog_description: "Making your brand look as amazing as it actually is! ✨",
        offerings_heading: "Design Magic I Create:",
        offerings: [
            "Social media graphics that stop the scroll",
            "Flyers and brochures people actually want to keep",
            "Product packaging that makes customers go \"ooh!\"",
            "Presentations that don't put people to sleep",
            "Brand identity that tells your story perfectly",
        ],
        audience_heading: "My Design Philosophy:",
        audience: "Beautiful designs that actually work. No pretty pictures that don't convert - every design has a purpose and gets results!",
        call_to_action: "Let's Create Something Beautiful! 🎨",
    },
    Service {
        kind: ServiceKind::ExecutiveSupport,
        icon: "👥",
        title: "Executive Support",
        tagline: "Your Secret Weapon! 🦸‍♀️",
        highlights: [
            "Marie Kondo-level organization",
            "Deep research & reports",
            "Confidential communications",
            "Workflow optimization",
        ],
        button_label: "Get Started",
        dialog_title: "Executive Support Services",
        dialog_description: "Your strategic partner for high-level success! 🎯",
        offerings_heading: "Executive-Level Support:",
        offerings: [
            "Strategic calendar management and priority optimization",
            "Comprehensive research and detailed reporting",
            "Confidential communication handling with discretion",
            "Workflow analysis and process improvement",
            "Project coordination and stakeholder management",
        ],
        audience_heading: "Ideal For:",
        audience: "C-suite executives, founders, and senior leaders who need strategic support to maximize their impact and efficiency.",
        call_to_action: "Let's Elevate Your Success! 🚀",
    },
];

pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        title: "Brand Identity Design",
        category: "Graphic Design",
        description: "Complete rebrand for a tech startup including logo, colors, and style guide.",
    },
    PortfolioItem {
        title: "Social Media Campaign",
        category: "Virtual Assistant",
        description: "Managed and created content for 3-month social media campaign.",
    },
    PortfolioItem {
        title: "Executive Dashboard",
        category: "Executive Support",
        description: "Created comprehensive reporting system for C-suite executives.",
    },
    PortfolioItem {
        title: "Product Packaging",
        category: "Graphic Design",
        description: "Designed packaging that increased product sales by 40%.",
    },
    PortfolioItem {
        title: "Email Marketing System",
        category: "Virtual Assistant",
        description: "Automated email sequences that boosted engagement by 60%.",
    },
    PortfolioItem {
        title: "Presentation Design",
        category: "Executive Support",
        description: "Investor pitch deck that helped secure $2M in funding.",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat { value: "3+", label: "Languages" },
    Stat { value: "24h", label: "Response Time" },
    Stat { value: "100%", label: "Satisfaction" },
];

pub static DIFFERENTIATORS: [&str; 4] = [
    "I speak three languages (organizing chaos is universal!)",
    "Creative meets corporate - I get both worlds",
    "Deadlines are my love language 💕",
    "Professional but never boring (life's too short!)",
];

pub struct CoreValue {
    pub letter: char,
    pub value: &'static str,
    pub emoji: &'static str,
}

pub static VALUES: [CoreValue; 6] = [
    CoreValue { letter: 'M', value: "Mastery", emoji: "🎯" },
    CoreValue { letter: 'A', value: "Accountability", emoji: "✅" },
    CoreValue { letter: 'R', value: "Respect", emoji: "🤝" },
    CoreValue { letter: 'I', value: "Innovation", emoji: "💡" },
    CoreValue { letter: 'A', value: "Authenticity", emoji: "💯" },
    CoreValue { letter: 'M', value: "Momentum", emoji: "🚀" },
];

pub struct FaqEntry {
    pub icon: &'static str,
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

pub static FAQ: [FaqEntry; 6] = [
    FaqEntry {
        icon: "📅",
        question: "How do we get started?",
        answer: &["Just shoot me an email! I'll reply within 24-48 hours to schedule our discovery call. We'll chat about your needs and find the perfect fit! ☕"],
    },
    FaqEntry {
        icon: "⏰",
        question: "What's your turnaround time?",
        answer: &[
            "• Designs: 2-3 business days",
            "• Admin tasks: 24-hour response",
            "• Executive support: Flexible scheduling",
            "• Rush jobs: Just ask! 🚀",
        ],
    },
    FaqEntry {
        icon: "👥",
        question: "What tools do you use?",
        answer: &["Google Workspace, Canva, Trello, Zoom, and more! I'm super flexible and adapt to your preferred tools. Tech-savvy is my middle name! 💻"],
    },
    FaqEntry {
        icon: "📄",
        question: "What services do you offer?",
        answer: &["Virtual assistance, graphic design, and executive support! One-off projects or ongoing partnerships - whatever works for you! ✨"],
    },
    FaqEntry {
        icon: "💳",
        question: "How do payments work?",
        answer: &["Bank transfers work best! Some projects need a deposit upfront, with the balance due on delivery. Simple and straightforward! 💳"],
    },
    FaqEntry {
        icon: "👁",
        question: "Can I see your work?",
        answer: &["Email me and I'll send over my portfolio. I also share updates on LinkedIn and Instagram! 📸"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn values_spell_the_name() {
        let letters: String = VALUES.iter().map(|v| v.letter).collect();
        assert_eq!(letters, "MARIAM");
        assert!(VALUES.iter().all(|v| v.value.starts_with(v.letter)));
    }

    #[test]
    fn each_service_has_its_own_dialog() {
        let kinds: HashSet<_> = SERVICES.iter().map(|s| s.kind).collect();
        assert_eq!(kinds.len(), SERVICES.len());
    }

    #[test]
    fn portfolio_items_use_service_categories() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert!(PORTFOLIO.iter().all(|item| titles.contains(&item.category)));
    }

    #[test]
    fn every_faq_has_an_answer() {
        assert!(FAQ.iter().all(|entry| !entry.answer.is_empty()));
    }
}

//! Authored site content
//!
//! The one place the actual portfolio lives: profile, projects,
//! certifications, portfolio documents, and skills. Everything else in the
//! workspace treats this as an opaque, validated [`Catalog`].

use folio_core::catalog::{
    Catalog, CertificationEntry, ContentFragment, ExternalLink, PortfolioDocItem, Profile,
    ProjectEntry, ProjectStatus, Skill, SkillCategory, SkillLevel,
};
use folio_core::Result;

const GITHUB_URL: &str = "https://github.com/gitgitgitgitgitgitgitgitgitgitgitgit";

/// Build the full site catalog.
///
/// Fails only on a duplicate id, which is an authoring bug worth dying for
/// at startup.
pub fn site_catalog() -> Result<Catalog> {
    Catalog::new(profile(), projects(), docs(), certifications(), skills())
}

fn profile() -> Profile {
    Profile {
        name: "Mischa Nelson".to_string(),
        bio: vec![
            "I'm an 18-year-old high school student from Colorado, homeschooled with a mix of \
             independent study and in-person programs. I'm passionate about creative \
             problem-solving with a focus on cybersecurity, manufacturing automation, and \
             electronics. I enjoy exploring how systems work and building smart, efficient \
             solutions using both hardware and software."
                .to_string(),
            "Outside of tech and school, I enjoy playing bass, swimming, reading, and performing \
             in musicals."
                .to_string(),
        ],
        links: vec![
            ExternalLink::new(
                "LinkedIn",
                "https://www.linkedin.com/in/mischa-nelson-4a60842a7",
            ),
            ExternalLink::new("GitHub", GITHUB_URL),
            ExternalLink::new("Email", "mailto:contact@mischanelson.dev"),
        ],
    }
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        // ─────────────────────────────────────────────────────────
        // Completed
        // ─────────────────────────────────────────────────────────
        ProjectEntry::new(
            "telegram_door_alert",
            "Telegram Door Alert System",
            ProjectStatus::Completed,
            "A Python project that uses two micro:bits and a computer to send a Telegram \
             message when a door is opened or closed.",
        )
        .with_detail(ContentFragment::subheading("Overview"))
        .with_detail(ContentFragment::text(
            "One micro:bit sits on the door frame with a magnet sensor, the second acts as a \
             radio bridge to a computer, and a small Python daemon relays open/close events to \
             a Telegram chat.",
        ))
        .with_detail(ContentFragment::bullets([
            "micro:bit radio link between sensor and bridge",
            "Python + python-telegram-bot on the receiving end",
            "Runs unattended on a spare laptop",
        ]))
        .with_link("Go to project", format!("{GITHUB_URL}/Micro-bit_door_alarm")),
        ProjectEntry::new(
            "personal_website",
            "Personal Website",
            ProjectStatus::Completed,
            "This site itself: originally built in Python with Streamlit, rebuilt in Rust with \
             a terminal renderer.",
        )
        .with_detail(ContentFragment::subheading("Overview"))
        .with_detail(ContentFragment::text(
            "Started as a Streamlit app to showcase my projects and provide information about \
             me. The current version keeps the same sections and content but renders them \
             through a terminal UI.",
        ))
        .with_link("Go to project", format!("{GITHUB_URL}/Personal_website"))
        .featured(),
        ProjectEntry::new(
            "cyberdeck",
            "Cyberdeck (Kali Linux on Raspberry Pi 4)",
            ProjectStatus::Completed,
            "A portable Kali Linux machine for pentesting and other cybersecurity tasks.",
        )
        .with_detail(ContentFragment::subheading("Overview"))
        .with_detail(ContentFragment::text(
            "A Raspberry Pi 4 in a rugged case with a built-in screen and keyboard, running \
             Kali Linux. Battery powered, so it works as a fully self-contained field kit.",
        ))
        .with_detail(ContentFragment::bullets([
            "Raspberry Pi 4, 8 GB",
            "Kali Linux ARM image",
            "7\" touchscreen and mechanical mini keyboard",
        ]))
        .with_image("kali closed.jpg")
        .with_image("kali open.jpg")
        .with_image("kali on.jpg"),
        ProjectEntry::new(
            "esp8266_desk_gadget",
            "ESP8266 Desk Gadget",
            ProjectStatus::Completed,
            "An ESP8266 gadget with a screen and buttons to display time, weather, network \
             speed, and a Pomodoro timer.",
        )
        .with_detail(ContentFragment::text(
            "A small desk companion on an ESP8266 dev board: OLED screen, three buttons, and \
             firmware that cycles between clock, weather, network speed, and a Pomodoro timer.",
        ))
        .with_image("esp8266.jpg"),
        // ─────────────────────────────────────────────────────────
        // In progress
        // ─────────────────────────────────────────────────────────
        ProjectEntry::new(
            "cipherless_relay",
            "Cipherless Relay",
            ProjectStatus::InProgress,
            "A messaging system that maps text to positions on a shared seed instead of using \
             traditional encryption.",
        )
        .with_detail(ContentFragment::subheading("Overview"))
        .with_detail(ContentFragment::text(
            "Both ends hold the same large random seed; messages are sent as position \
             references into it rather than ciphertext, so there is nothing to decrypt in \
             transit.",
        )),
        ProjectEntry::new(
            "tridentos",
            "TridentOS (Custom Debian Distro)",
            ProjectStatus::InProgress,
            "A custom Debian-based Linux distribution tailored to my specific needs.",
        )
        .with_image("linux usbs.jpg"),
        ProjectEntry::new(
            "wsl_automation_toolkit",
            "WSL Automation Toolkit",
            ProjectStatus::InProgress,
            "A collection of scripts and tools to automate tasks within Windows Subsystem for \
             Linux.",
        ),
        ProjectEntry::new(
            "esp8266_hacker_toolkit",
            "ESP8266 Hacker Toolkit",
            ProjectStatus::InProgress,
            "An ESP8266-based toolkit for various Wi-Fi and network-related experiments.",
        )
        .with_image("badusb.jpg"),
        ProjectEntry::new(
            "kali_nethunter_phone",
            "Kali NetHunter Phone",
            ProjectStatus::InProgress,
            "Kali NetHunter on a compatible Android device for mobile penetration testing.",
        )
        .with_image("nethunter.jpg"),
        ProjectEntry::new(
            "custom_pcb",
            "Custom PCB Project",
            ProjectStatus::InProgress,
            "Designing and fabricating a custom Printed Circuit Board for one of my \
             electronics projects.",
        ),
        // ─────────────────────────────────────────────────────────
        // Planned
        // ─────────────────────────────────────────────────────────
        ProjectEntry::new(
            "telegram_weather_bot",
            "Telegram Weather Alert Bot",
            ProjectStatus::Planned,
            "A Telegram bot that sends weather alerts to a user based on their set location.",
        ),
        ProjectEntry::new(
            "spotify_playback_switcher",
            "Spotify Playback Switcher",
            ProjectStatus::Planned,
            "A tool to easily switch Spotify playback between different devices.",
        ),
        ProjectEntry::new(
            "wazuh_siem_server",
            "Wazuh SIEM Server",
            ProjectStatus::Planned,
            "Setting up and configuring a Wazuh SIEM server for security monitoring.",
        ),
    ]
}

fn certifications() -> Vec<CertificationEntry> {
    vec![
        CertificationEntry::completed(
            "pmi",
            "PMI Project Management Ready",
            "PMI Project Management Ready.pdf",
            "PMI_Project_Management_Ready.pdf",
        )
        .with_covers([
            "project life cycle & phases",
            "stakeholder analysis",
            "scope, schedule & cost management",
            "basic risk & quality management",
            "project documentation",
        ]),
        CertificationEntry::completed(
            "autodesk_fusion",
            "Autodesk Certified User: Fusion 360\u{ae}",
            "Autodesk Certified User Fusion 360.pdf",
            "Autodesk_Certified_User_Fusion_360.pdf",
        )
        .with_covers([
            "parametric modeling",
            "sketching & constraints",
            "assembly design",
            "technical drawings",
            "basic CAM toolpaths",
            "rendering basics",
        ]),
        CertificationEntry::completed(
            "google_cybersecurity",
            "Google Cybersecurity Professional Certificate",
            "GoogleCybersecurityProfessionalCertificateV2_Badge20250504-27-davnwp.pdf",
            "GoogleCybersecurityProfessionalCertificate.pdf",
        )
        .with_covers([
            "cybersecurity fundamentals",
            "system administration basics",
            "network defense & threat detection",
            "identity & access management",
            "incident response",
            "compliance & governance",
        ]),
        CertificationEntry::completed(
            "saca_basic_ops",
            "SACA Certified Industry 4.0 Associate - Basic Operations",
            "SACA_Cert_MischaNelson_20250504.pdf",
            "SACA_Certified_I4.0_Associate_Basic_Operations.pdf",
        )
        .with_covers([
            "certifies skills for operators in an Industry 4.0 environment",
            "Silver level: awarded for passing the written knowledge exam",
        ]),
        CertificationEntry::in_progress(
            "ccst_networking",
            "Cisco Certified Support Technician (CCST): Networking",
        )
        .with_covers([
            "OSI & TCP/IP models",
            "CLI navigation",
            "LAN/WAN configuration",
            "IPv4 & IPv6 subnetting",
            "network security controls",
            "risk assessment",
        ]),
    ]
}

fn docs() -> Vec<PortfolioDocItem> {
    // Source filenames keep their authored quirks (stray '#', double dots,
    // trailing spaces); display filenames are the cleaned variants offered
    // on save.
    vec![
        PortfolioDocItem::new(
            "professional_statement",
            "Professional Statement",
            "My goals and interests in the cybersecurity field.",
            "1# Proffessional Statment..pdf",
            "1 Proffessional Statment.pdf",
        ),
        PortfolioDocItem::new(
            "nist_framework",
            "NIST Framework Application",
            "Applying the NIST Cybersecurity Framework to respond to a security incident.",
            "2# Use the NIST cybersecurity frameworks to respond..pdf",
            "2 Use the NIST cybersecurity frameworks to respond.pdf",
        ),
        PortfolioDocItem::new(
            "security_audit",
            "Security Audit Report",
            "Conducting a security audit and documenting findings.",
            "3# Security audit..pdf",
            "3 Security audit.pdf",
        ),
        PortfolioDocItem::new(
            "sql_filtering",
            "SQL Query Filtering",
            "Using SQL to filter and analyze security log data.",
            "4# Apply filters to SQL queries.pdf",
            "4 Apply filters to SQL queries.pdf",
        ),
        PortfolioDocItem::new(
            "vulnerability_analysis",
            "Vulnerability Analysis",
            "Analyzing system vulnerabilities for a small business scenario.",
            "5# Analyze a vulnerable system for a small business .pdf",
            "5 Analyze a vulnerable system for a small business .pdf",
        ),
        PortfolioDocItem::new(
            "python_file_updates",
            "Python Algorithm for File Updates",
            "Using Python to automate the process of updating security-related files.",
            "6# Update a file with a python algorithm .pdf",
            "6 Update a file with a python algorithm .pdf",
        ),
        PortfolioDocItem::new(
            "incident_journal",
            "Incident Handler's Journal",
            "Documenting the steps taken during a simulated security incident response.",
            "#7 Incident handler's journal .pdf",
            "7 Incident handler's journal .pdf",
        ),
        PortfolioDocItem::new(
            "resume",
            "Resume",
            "My professional resume detailing skills and experience.",
            "#8 Resume.pdf",
            "Resume.pdf",
        ),
    ]
}

fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory::new(
            "Programming Languages",
            [
                Skill::new("Python", SkillLevel::Beginner),
                Skill::new("SQL", SkillLevel::Beginner),
                Skill::new("C++ (Arduino)", SkillLevel::Beginner),
                Skill::new("Ladder Logic", SkillLevel::Beginner),
                Skill::new("Rust", SkillLevel::Beginner),
                Skill::new("Java", SkillLevel::Beginner),
            ],
        ),
        SkillCategory::new(
            "Cybersecurity & Networking",
            [
                Skill::new("NIST CSF", SkillLevel::Beginner),
                Skill::new("CIA Triad", SkillLevel::Beginner),
                Skill::new("Wireshark", SkillLevel::Beginner),
                Skill::new("Linux Hardening", SkillLevel::Beginner),
                Skill::new("Threat Modeling", SkillLevel::Beginner),
                Skill::new("Incident Response", SkillLevel::Beginner),
            ],
        ),
        SkillCategory::new(
            "CAD/CAM & Manufacturing",
            [
                Skill::new("Fusion 360", SkillLevel::Intermediate),
                Skill::new("LightBurn", SkillLevel::Beginner),
                Skill::new("CAM & CNC (5-axis mill, lathe, plasma)", SkillLevel::Beginner),
                Skill::new("PCB Design", SkillLevel::Beginner),
            ],
        ),
        SkillCategory::new(
            "Electronics & Hardware",
            [
                Skill::new("PLC Automation", SkillLevel::Intermediate),
                Skill::new("Fanuc iRVision", SkillLevel::Beginner),
                Skill::new("Robotics", SkillLevel::Beginner),
                Skill::new("Hardware Troubleshooting", SkillLevel::Beginner),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RESUME_DOC_ID;

    #[test]
    fn test_site_catalog_builds() {
        let catalog = site_catalog().unwrap();
        assert_eq!(catalog.projects().len(), 13);
        assert_eq!(catalog.docs().len(), 8);
        assert_eq!(catalog.certifications().len(), 5);
        assert_eq!(catalog.skills().len(), 4);
    }

    #[test]
    fn test_cipherless_relay_is_in_progress() {
        let catalog = site_catalog().unwrap();
        let entry = catalog.lookup_project("cipherless_relay").unwrap();
        assert_eq!(entry.status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_resume_doc_id_matches_router_constant() {
        let catalog = site_catalog().unwrap();
        let resume = catalog.lookup_doc(RESUME_DOC_ID).unwrap();
        assert_eq!(resume.source_filename, "#8 Resume.pdf");
        assert_eq!(resume.display_filename, "Resume.pdf");
    }

    #[test]
    fn test_exactly_one_featured_project() {
        let catalog = site_catalog().unwrap();
        let featured: Vec<_> = catalog.projects().iter().filter(|p| p.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "personal_website");
    }

    #[test]
    fn test_status_group_counts_match_authored_layout() {
        let catalog = site_catalog().unwrap();
        assert_eq!(
            catalog.projects_with_status(ProjectStatus::Completed).count(),
            4
        );
        assert_eq!(
            catalog
                .projects_with_status(ProjectStatus::InProgress)
                .count(),
            6
        );
        assert_eq!(
            catalog.projects_with_status(ProjectStatus::Planned).count(),
            3
        );
    }

    #[test]
    fn test_cyberdeck_images_are_the_hosted_set() {
        let catalog = site_catalog().unwrap();
        let entry = catalog.lookup_project("cyberdeck").unwrap();
        assert_eq!(
            entry.image_refs,
            vec!["kali closed.jpg", "kali open.jpg", "kali on.jpg"]
        );
    }

    #[test]
    fn test_in_progress_certifications_have_no_document() {
        let catalog = site_catalog().unwrap();
        let ccst = catalog.lookup_certification("ccst_networking").unwrap();
        assert!(ccst.source_filename.is_none());
        assert!(ccst.display_filename.is_none());
    }
}

//! Sample community seeded at startup.
//!
//! Everything goes through the public `Directory` API: profiles are built
//! with merge-updates, and the pre-existing feedback and swap requests are
//! driven through short login sessions, so the seeded state obeys every
//! validation rule the platform enforces.

use swapwise_types::account::{ProfileUpdate, Visibility};
use swapwise_types::request::SwapDecision;

use crate::state::PlatformDirectory;

/// Shared secret for every seeded member account.
pub const MEMBER_SECRET: &str = "password123";

struct SeedProfile {
    name: &'static str,
    email: &'static str,
    location: &'static str,
    avatar_url: Option<&'static str>,
    offered: &'static [&'static str],
    wanted: &'static [&'static str],
    availability: &'static str,
    visibility: Visibility,
}

const PROFILES: &[SeedProfile] = &[
    SeedProfile {
        name: "Sakshi",
        email: "sakshi@swapwise.dev",
        location: "Mumbai, Maharashtra",
        avatar_url: Some("https://images.swapwise.dev/avatars/sakshi.jpeg"),
        offered: &[
            "Python",
            "Machine Learning",
            "Django",
            "PostgreSQL",
            "Docker",
            "TensorFlow",
        ],
        wanted: &["Kubernetes", "Go", "Rust", "GraphQL"],
        availability: "Weekends, Evenings",
        visibility: Visibility::Public,
    },
    SeedProfile {
        name: "Yashpal",
        email: "yashpal@swapwise.dev",
        location: "Bangalore, Karnataka",
        avatar_url: Some("https://images.swapwise.dev/avatars/yashpal.jpeg"),
        offered: &[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "GraphQL",
            "MongoDB",
            "Kubernetes",
        ],
        wanted: &["Python", "Machine Learning", "Rust", "Blockchain Development"],
        availability: "Weekdays, Mornings",
        visibility: Visibility::Public,
    },
    SeedProfile {
        name: "Ayan",
        email: "ayan@swapwise.dev",
        location: "Delhi, NCR",
        avatar_url: None,
        offered: &[
            "UI/UX Design",
            "Figma",
            "Prototyping",
            "User Research",
            "Design Systems",
            "CSS3",
        ],
        wanted: &["React", "Vue.js", "JavaScript", "Next.js"],
        availability: "Weekends, Afternoons",
        visibility: Visibility::Public,
    },
    SeedProfile {
        name: "Akshay",
        email: "akshay@swapwise.dev",
        location: "Hyderabad, Telangana",
        avatar_url: None,
        offered: &[
            "Java",
            "Spring Boot",
            "Microservices",
            "Apache Kafka",
            "Redis",
            "MySQL",
            "Jenkins",
        ],
        wanted: &["Go", "Rust", "Kubernetes", "Prometheus"],
        availability: "Weekdays, Evenings",
        visibility: Visibility::Private,
    },
    SeedProfile {
        name: "Tina",
        email: "tina@swapwise.dev",
        location: "Pune, Maharashtra",
        avatar_url: None,
        offered: &[
            "Cybersecurity",
            "Penetration Testing",
            "Network Security",
            "Incident Response",
            "SIEM",
            "Ethical Hacking",
        ],
        wanted: &["Cloud Security", "Mobile Security", "Blockchain Development"],
        availability: "Weekends, Mornings",
        visibility: Visibility::Public,
    },
    SeedProfile {
        name: "Shobhita",
        email: "shobhita@swapwise.dev",
        location: "Chennai, Tamil Nadu",
        avatar_url: None,
        offered: &[
            "Unity",
            "C#",
            "Game Development",
            "3D Modeling",
            "Animation",
            "Level Design",
        ],
        wanted: &["Shader Programming", "Godot", "Blender"],
        availability: "Weekends, All Day",
        visibility: Visibility::Public,
    },
    SeedProfile {
        name: "Lakshya",
        email: "lakshya@swapwise.dev",
        location: "Gurgaon, Haryana",
        avatar_url: None,
        offered: &[
            "Data Science",
            "Python",
            "R",
            "Statistical Analysis",
            "Pandas",
            "NumPy",
            "SQL",
            "Tableau",
        ],
        wanted: &["Deep Learning", "Apache Airflow", "Kubernetes", "Apache Spark"],
        availability: "Weekdays, Afternoons",
        visibility: Visibility::Public,
    },
];

/// Register the sample members and replay their history: feedback already
/// exchanged, one accepted swap, and two pending ones.
pub fn populate(dir: &mut PlatformDirectory) -> anyhow::Result<()> {
    for profile in PROFILES {
        let id = dir.register(profile.name, profile.email, MEMBER_SECRET)?;
        dir.update_profile(
            &id,
            ProfileUpdate {
                location: Some(profile.location.to_string()),
                avatar_url: profile.avatar_url.map(str::to_string),
                skills_offered: Some(profile.offered.iter().map(|s| s.to_string()).collect()),
                skills_wanted: Some(profile.wanted.iter().map(|s| s.to_string()).collect()),
                availability: Some(profile.availability.to_string()),
                visibility: Some(profile.visibility),
            },
        )?;
    }

    // Sakshi proposes the swap that is already accepted, and rates the
    // mentors she has worked with.
    let sakshi = dir.login("sakshi@swapwise.dev", MEMBER_SECRET)?;
    let accepted = dir.create_request(
        &sakshi,
        "yashpal@swapwise.dev",
        "Python",
        "JavaScript",
        "Hi Yashpal! I'd love to learn modern JavaScript from you. I can teach you Python and ML in return!",
    )?;
    dir.submit_feedback(
        &sakshi,
        "yashpal@swapwise.dev",
        5,
        "Amazing React and TypeScript guidance, very thorough!",
    )?;
    dir.submit_feedback(
        &sakshi,
        "ayan@swapwise.dev",
        4,
        "Great design-system walkthrough, our dashboards look much cleaner now.",
    )?;

    let yashpal = dir.login("yashpal@swapwise.dev", MEMBER_SECRET)?;
    dir.respond(&yashpal, &accepted, SwapDecision::Accept)?;
    dir.submit_feedback(
        &yashpal,
        "sakshi@swapwise.dev",
        5,
        "Excellent Python and ML mentor! Helped me understand TensorFlow deeply.",
    )?;

    let ayan = dir.login("ayan@swapwise.dev", MEMBER_SECRET)?;
    dir.create_request(
        &ayan,
        "sakshi@swapwise.dev",
        "UI/UX Design",
        "Machine Learning",
        "Hello Sakshi! Would you be interested in learning UI/UX design? I need help understanding ML concepts.",
    )?;
    dir.submit_feedback(
        &ayan,
        "sakshi@swapwise.dev",
        4,
        "Helpful with PostgreSQL optimization, improved our app performance!",
    )?;

    let tina = dir.login("tina@swapwise.dev", MEMBER_SECRET)?;
    dir.create_request(
        &tina,
        "yashpal@swapwise.dev",
        "Cybersecurity",
        "Node.js",
        "Hi Yashpal! I can teach you security best practices. Could you help me with Node.js backend development?",
    )?;
    dir.submit_feedback(
        &tina,
        "sakshi@swapwise.dev",
        5,
        "Solid secure-coding advice alongside the ML sessions!",
    )?;

    dir.logout();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapwise_core::service::Directory;
    use swapwise_infra::memory::{MemoryAccountStore, MemoryRequestStore};
    use swapwise_types::request::RequestStatus;

    fn seeded() -> PlatformDirectory {
        let mut dir = Directory::new(MemoryAccountStore::new(), MemoryRequestStore::new());
        populate(&mut dir).unwrap();
        dir
    }

    #[test]
    fn test_populate_registers_all_members() {
        let dir = seeded();
        for profile in PROFILES {
            assert!(dir.account(profile.email).is_some(), "{}", profile.email);
        }
    }

    #[test]
    fn test_populate_leaves_no_session() {
        let dir = seeded();
        assert!(dir.current_session().is_none());
    }

    #[test]
    fn test_seeded_history() {
        let dir = seeded();

        let sakshi = dir.account("sakshi@swapwise.dev").unwrap();
        assert_eq!(sakshi.feedback.len(), 3);

        let (incoming, outgoing) = dir.requests_for(&sakshi.id);
        assert_eq!(incoming.len(), 1);
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].status, RequestStatus::Accepted);
        assert_eq!(incoming[0].status, RequestStatus::Pending);
    }

    #[test]
    fn test_private_member_hidden_from_listings() {
        let dir = seeded();
        let listed = dir.list_public_profiles(1, 50);
        assert!(listed.iter().all(|a| a.email != "akshay@swapwise.dev"));
        assert_eq!(listed.len(), PROFILES.len() - 1);
    }
}

//! Static skill taxonomy, consumed as a search corpus.
//!
//! The catalog is an external data collaborator: account skill lists are
//! free-form strings validated against the account's own lists, never
//! against this taxonomy. The catalog only backs `search` and the grouped
//! listing in the CLI.

/// Skill categories and their member skills.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "Python",
            "JavaScript",
            "TypeScript",
            "Java",
            "C++",
            "C#",
            "Go",
            "Rust",
            "Swift",
            "Kotlin",
            "Ruby",
            "R",
            "SQL",
        ],
    ),
    (
        "Web Development",
        &[
            "HTML5",
            "CSS3",
            "React",
            "Vue.js",
            "Angular",
            "Svelte",
            "Next.js",
            "Node.js",
            "Express.js",
            "Django",
            "Flask",
            "Spring Boot",
            "GraphQL",
        ],
    ),
    (
        "Mobile Development",
        &[
            "React Native",
            "Flutter",
            "iOS Development",
            "Android Development",
            "SwiftUI",
            "Jetpack Compose",
        ],
    ),
    (
        "Databases",
        &[
            "MySQL",
            "PostgreSQL",
            "SQLite",
            "MongoDB",
            "Redis",
            "Elasticsearch",
            "Cassandra",
            "Neo4j",
        ],
    ),
    (
        "Cloud Platforms",
        &[
            "Amazon Web Services (AWS)",
            "Microsoft Azure",
            "Google Cloud Platform",
            "Heroku",
            "Vercel",
            "Cloudflare Workers",
        ],
    ),
    (
        "DevOps & Infrastructure",
        &[
            "Docker",
            "Kubernetes",
            "Jenkins",
            "GitHub Actions",
            "GitLab CI/CD",
            "Terraform",
            "Ansible",
            "Prometheus",
            "Grafana",
            "Microservices",
            "Apache Kafka",
        ],
    ),
    (
        "Data Science & Analytics",
        &[
            "Machine Learning",
            "Deep Learning",
            "Data Science",
            "Data Analysis",
            "Statistical Analysis",
            "TensorFlow",
            "PyTorch",
            "Pandas",
            "NumPy",
            "Apache Spark",
            "Tableau",
            "Power BI",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "Cybersecurity",
            "Penetration Testing",
            "Network Security",
            "Cloud Security",
            "Incident Response",
            "Digital Forensics",
            "Cryptography",
            "SIEM",
            "Ethical Hacking",
            "Vulnerability Assessment",
        ],
    ),
    (
        "Blockchain & Web3",
        &[
            "Blockchain Development",
            "Smart Contracts",
            "Solidity",
            "Ethereum",
            "DeFi",
            "IPFS",
        ],
    ),
    (
        "Game Development",
        &[
            "Unity",
            "Unreal Engine",
            "Godot",
            "Game Development",
            "Game Design",
            "3D Modeling",
            "Animation",
            "Shader Programming",
            "Level Design",
        ],
    ),
    (
        "Design & UX",
        &[
            "UI/UX Design",
            "Figma",
            "Prototyping",
            "User Research",
            "Design Systems",
            "Accessibility Design",
        ],
    ),
];

/// All catalog skills as a flat, deduplicated, sorted list.
pub fn all() -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = CATEGORIES
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
        .collect();
    skills.sort_unstable();
    skills.dedup();
    skills
}

/// Catalog skills whose name contains `query`, case-insensitively.
pub fn search(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    all()
        .into_iter()
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .collect()
}

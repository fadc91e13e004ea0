//! Publications, certifications and skills.

use crate::models::{
    Certification, CertificationCategory as Cat, CertificationLevel as Level, Impact, Publication,
    PublicationStatus, PublicationType, Skill, SkillCategory, SkillGroup,
};

pub static PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Decentralized Funding Solutions: A Blockchain Approach to Crowdfunding",
        link_text: "View Paper",
        link_url: "https://www.irjmets.com/uploadedfiles/paper//issue_1_january_2025/66020/final/fin_irjmets1736786511.pdf",
        source: "International Research Journal of Modernization in Engineering Technology and Science",
        date: "January 2025",
        description: "The paper explores how blockchain can address issues in traditional crowdfunding, proposing decentralized platforms and smart contracts to reduce fees, increase transparency, and enhance security and efficiency.",
        kind: PublicationType::Journal,
        status: PublicationStatus::Published,
        impact: Some(Impact::Medium),
        citations: Some(0),
        doi: Some("https://www.doi.org/10.56726/IRJMETS79409"),
        keywords: &["Blockchain", "Crowdfunding", "Smart Contracts", "Decentralization"],
    },
    Publication {
        title: "CROWDFUNDING USING BLOCKCHAIN TECHNOLOGY: A DECENTRALIZED APPROACH",
        link_text: "View Paper",
        link_url: "https://www.irjmets.com/upload_newfiles/irjmets70600103632/paper_file/irjmets70600103632.pdf",
        source: "International Research Journal of Modernization in Engineering Technology and Science",
        date: "June 2025",
        description: "This paper investigates Decentralized crowdfunding system leveraging blockchain and smart contracts to enhance transparency, security, and trust in online fundraising",
        kind: PublicationType::Journal,
        status: PublicationStatus::Published,
        impact: Some(Impact::High),
        citations: Some(0),
        doi: Some("https://www.doi.org/10.56726/IRJMETS66020"),
        keywords: &["CrowdFunding", "Fintech", "Block Chain"],
    },
];

const fn cert(
    name: &'static str,
    provider: &'static str,
    category: Cat,
    level: Level,
    year: &'static str,
    credential_id: Option<&'static str>,
) -> Certification {
    Certification {
        name,
        provider,
        category,
        level,
        year: Some(year),
        verified: true,
        credential_id,
    }
}

pub static CERTIFICATIONS: &[Certification] = &[
    cert("Introduction to Machine Learning", "NPTEL", Cat::Technical, Level::Intermediate, "2024", Some("NPTEL-ML-2024")),
    cert("Python for Data Science", "NPTEL", Cat::Technical, Level::Intermediate, "2024", Some("NPTEL-PY-2024")),
    cert("Data Analytics Using Power BI", "TechA", Cat::Analytics, Level::Advanced, "2024", None),
    cert("C/C++ Programming", "Programming Institute", Cat::Technical, Level::Intermediate, "2023", None),
    cert("Git and Github Bootcamp", "Development Academy", Cat::Technical, Level::Beginner, "2023", None),
    cert("Human Resource Management - HR Metrics", "HR Institute", Cat::Management, Level::Intermediate, "2024", None),
    cert("Business Analyst and Project Manager Collaboration", "Business Academy", Cat::Management, Level::Advanced, "2024", None),
    cert("Introduction to Soft Skills", "TCS Ion", Cat::SoftSkills, Level::Beginner, "2023", None),
    cert("Basics of Customer Services", "TCS Ion", Cat::SoftSkills, Level::Beginner, "2023", None),
    cert("Microsoft Excel and Advanced Excel", "Microsoft", Cat::Analytics, Level::Advanced, "2023", None),
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        group: SkillGroup::ProgrammingLanguages,
        skills: &[
            Skill::certified("Python"),
            Skill::new("Java (Core)"),
            Skill::certified("C/C++"),
            Skill::new("SQL"),
            Skill::new("HTML/CSS"),
            Skill::new("Django"),
            Skill::new("OOP"),
        ],
    },
    SkillCategory {
        group: SkillGroup::FrameworksLibraries,
        skills: &[
            Skill::new("Django"),
            Skill::new("HTML/CSS"),
            Skill::new("Bootstrap"),
            Skill::certified("Pandas"),
            Skill::certified("NumPy"),
            Skill::new("Streamlit"),
        ],
    },
    SkillCategory {
        group: SkillGroup::Tools,
        skills: &[
            Skill::new("MS-Office"),
            Skill::new("VS Code"),
            Skill::new("Eclipse"),
            Skill::new("Pycharm"),
            Skill::certified("Git"),
            Skill::certified("GitHub"),
            Skill::new("Bootstrap"),
            Skill::new("PIP"),
            Skill::new("CMD"),
            Skill::new("Linux"),
            Skill::new("Windows"),
            Skill::new("SDLC"),
            Skill::new("Agile"),
            Skill::new("Versioning"),
            Skill::new("Version Controlling"),
            Skill::certified("Excel"),
            Skill::new("Power Query"),
            Skill::new("Power Pivot"),
            Skill::certified("Power BI"),
        ],
    },
    SkillCategory {
        group: SkillGroup::SoftSkills,
        skills: &[
            Skill::new("Professionalism"),
            Skill::new("Problem Solving"),
            Skill::certified("Communication"),
            Skill::certified("Presentation"),
            Skill::new("Team Collaboration"),
            Skill::new("Adaptability"),
            Skill::new("Time Management"),
            Skill::new("Social Media Management"),
            Skill::new("Project Management"),
            Skill::new("Tech Support"),
            Skill::new("IT Support"),
            Skill::new("Consulting"),
            Skill::certified("Data Analysis"),
            Skill::new("Dashboard Creation"),
            Skill::new("Management"),
            Skill::new("Talent Acquisition"),
            Skill::new("Technical Recruitment"),
            Skill::new("Data Entry"),
            Skill::new("Data Management"),
            Skill::certified("Customer Service"),
            Skill::new("Client Support"),
            Skill::new("Document Preparation"),
            Skill::new("Editing"),
            Skill::new("Presentations"),
        ],
    },
    SkillCategory {
        group: SkillGroup::Languages,
        skills: &[
            Skill::new("English (Fluent)"),
            Skill::new("Hindi (Fluent)"),
            Skill::new("Marathi (Fluent)"),
            Skill::new("Kannada (Fluent)"),
            Skill::new("German (Basic)"),
        ],
    },
];

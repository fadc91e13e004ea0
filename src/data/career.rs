//! Education, experience and projects.

use crate::models::{
    EducationEntry, EducationLevel, Experience, ExperienceType, Project, ProjectCategory,
    ProjectStatus,
};

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "RMD Sinhgad Technical Institute Campus",
        location: "Pune, Maharashtra",
        details: "BE in Computer Science",
        degree: "Bachelor of Engineering",
        score: "CGPA: 8.06",
        year: "2021 - 2025",
        level: EducationLevel::Undergraduate,
        distinction: Some("Graduated with first Class and Distinction in Computer Science"),
    },
    EducationEntry {
        institution: "Nirmal Bethany Jr College",
        location: "Pune, Maharashtra",
        details: "Higher Secondary Certificate",
        degree: "HSC",
        score: "87.33%",
        year: "2021",
        level: EducationLevel::Secondary,
        distinction: None,
    },
    EducationEntry {
        institution: "Sanjeevan Public School",
        location: "Kolhapur, Maharashtra",
        details: "Secondary School Certificate",
        degree: "SSC",
        score: "86.80%",
        year: "2019",
        level: EducationLevel::Primary,
        distinction: None,
    },
];

/// Label and value shown next to the highest qualification.
pub static EDUCATION_HIGHLIGHT: (&str, &str) = ("Academic Excellence", "Consistent 85%+ Performance");

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Web Developer Intern Python-Django",
        company: "Elite Softwares",
        location: "Pune, Maharashtra",
        duration: "Dec 2023 – Jan 2024",
        kind: ExperienceType::Internship,
        skills: &["Python", "Django", "Web Development", "Performance Optimization"],
        description: "Developed Django web apps, optimizing performance and delivering impactful solutions. Collaborated with senior developers to enhance teamwork and launch successful websites.",
    },
    Experience {
        title: "Data Visualization Intern",
        company: "Infosys",
        location: "Pune, Maharashtra",
        duration: "Feb 2025 - Mar 2025",
        kind: ExperienceType::Internship,
        skills: &["Data Analysis", "Visualization", "AQI", "Springboard"],
        description: "Successfully completed a project-based internship at Infosys Springboard on Air Quality Index (AQI) Visualization, involving data analysis, visualization techniques, and interpretation of AQI trends.",
    },
];

/// Career summary row: (label, value).
pub static EXPERIENCE_HIGHLIGHTS: &[(&str, &str)] = &[
    ("Total Experience", "2+ Months"),
    ("Career Growth", "Rapid Learning"),
    ("Specialization", "Python & Data"),
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Django Employee Database",
        description: "Developed a Django-based Employee Management System to streamline and manage employee data within an organization, improving efficiency and data accessibility.",
        technologies: &["Django", "Python", "HTML/CSS"],
        category: ProjectCategory::Web,
        status: ProjectStatus::Completed,
        github_url: Some("https://github.com/username/django-employee-db"),
        live_url: None,
        featured: true,
    },
    Project {
        title: "Blinkit Sales Analysis Power BI Dashboard",
        description: "Developed a Power BI dashboard to analyze sales data for Blinkit, enhancing decision-making by providing insightful visualizations and reports.",
        technologies: &["Power BI", "DAX", "Data Analysis", "SQL"],
        category: ProjectCategory::Data,
        status: ProjectStatus::Completed,
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        title: "Portfolio Website",
        description: "Developed a responsive portfolio website with HTML, CSS, and JavaScript, featuring smooth navigation, interactive project sections, and seamless performance across devices.",
        technologies: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        category: ProjectCategory::Web,
        status: ProjectStatus::Completed,
        github_url: None,
        live_url: Some("https://sujalkamanna.interns-es2.in/"),
        featured: false,
    },
];

//! Skill groups.

use serde::Serialize;

use super::Category;

/// Heading a skill is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillGroup {
    ProgrammingLanguages,
    FrameworksLibraries,
    Tools,
    SoftSkills,
    Languages,
}

impl Category for SkillGroup {
    const ALL: &'static [Self] = &[
        Self::ProgrammingLanguages,
        Self::FrameworksLibraries,
        Self::Tools,
        Self::SoftSkills,
        Self::Languages,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::ProgrammingLanguages => "programming-languages",
            Self::FrameworksLibraries => "frameworks-libraries",
            Self::Tools => "tools",
            Self::SoftSkills => "soft-skills",
            Self::Languages => "languages",
        }
    }

    fn label(&self) -> String {
        match self {
            Self::ProgrammingLanguages => "Programming Languages",
            Self::FrameworksLibraries => "Frameworks & Libraries",
            Self::Tools => "Tools",
            Self::SoftSkills => "Soft Skills",
            Self::Languages => "Languages",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub certified: bool,
}

impl Skill {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            certified: false,
        }
    }

    pub const fn certified(name: &'static str) -> Self {
        Self {
            name,
            certified: true,
        }
    }
}

/// A group heading and the skills under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub group: SkillGroup,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    pub fn certified_count(&self) -> usize {
        self.skills.iter().filter(|s| s.certified).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_label_overrides_key() {
        assert_eq!(SkillGroup::FrameworksLibraries.label(), "Frameworks & Libraries");
        assert_eq!(SkillGroup::parse("tools"), Some(SkillGroup::Tools));
    }

    #[test]
    fn test_certified_count() {
        const SKILLS: &[Skill] = &[Skill::certified("Git"), Skill::new("Vim"), Skill::certified("SQL")];
        let category = SkillCategory {
            group: SkillGroup::Tools,
            skills: SKILLS,
        };
        assert_eq!(category.certified_count(), 2);
    }
}

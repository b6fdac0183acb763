use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Backend,
    Automation,
    Fullstack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Core,
    Testing,
    Database,
    Tools,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub outcome: String,
    pub context: String,
    pub contributions: Vec<String>,
    pub challenges: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub category: ProjectCategory,
    pub case_study: CaseStudy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 1 – 100
    pub level: u8,
    pub category: SkillCategory,
}

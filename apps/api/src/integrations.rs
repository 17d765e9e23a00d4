//! External profile integrations. The `api` feature is a canned integration
//! rather than a generation tool: the LinkedIn connector returns a fixed
//! sample payload with no network call, which is why it does not appear in
//! the tool registry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub status: String,
    pub message: String,
    pub data: ProfileData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub skills: ProfileSkills,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub career_goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSkills {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The sample profile returned by the LinkedIn connector.
pub fn sample_linkedin_profile() -> LinkedInProfile {
    LinkedInProfile {
        status: "success".to_string(),
        message: "LinkedIn profile successfully fetched and formatted.".to_string(),
        data: ProfileData {
            skills: ProfileSkills {
                hard_skills: strings(&[
                    "Product Management",
                    "Agile Methodologies",
                    "Roadmapping",
                    "Market Analysis",
                ]),
                soft_skills: strings(&[
                    "Leadership",
                    "Communication",
                    "Strategic Thinking",
                    "Cross-functional Collaboration",
                ]),
                tools: strings(&["Jira", "Confluence", "Looker", "Figma"]),
                certifications: strings(&["Certified Scrum Product Owner (CSPO)"]),
            },
            experience: vec![
                ExperienceEntry {
                    title: "Senior Product Manager".to_string(),
                    company: "Innovate Inc.".to_string(),
                    location: "New York, NY".to_string(),
                    dates: "Jan 2020 – Present".to_string(),
                    achievements: strings(&[
                        "Led the development and launch of a new mobile application, resulting in a 30% increase in user engagement.",
                        "Defined the product roadmap and strategy for the company's flagship SaaS product, aligning with business goals and customer needs.",
                    ]),
                },
                ExperienceEntry {
                    title: "Product Manager".to_string(),
                    company: "Tech Solutions LLC".to_string(),
                    location: "New York, NY".to_string(),
                    dates: "Jun 2017 – Dec 2019".to_string(),
                    achievements: strings(&[
                        "Managed the entire product lifecycle from concept to launch for three major features.",
                        "Conducted user research and data analysis to inform product decisions, leading to a 15% improvement in user satisfaction.",
                    ]),
                },
            ],
            education: vec![EducationEntry {
                degree: "Bachelor of Science in Computer Science".to_string(),
                institution: "State University".to_string(),
                year: "2017".to_string(),
            }],
            career_goals: strings(&[
                "Transition into a Director of Product role within the next 3-5 years.",
                "Specialize in AI-powered enterprise software.",
                "Mentor aspiring product managers.",
            ]),
        },
    }
}

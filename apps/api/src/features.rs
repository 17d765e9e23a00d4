//! Global feature registry — the immutable configuration table that drives
//! navigation. Loaded once at startup; there is no mutable global state.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "assessment",
        title: "AI Career Assessment",
        description: "Discover your strengths and ideal career paths with our intelligent assessment.",
    },
    Feature {
        id: "resume",
        title: "Resume Generator",
        description: "Build a professional, tailored resume in minutes with AI assistance.",
    },
    Feature {
        id: "job-matching",
        title: "Job Matching",
        description: "Get matched with job opportunities that align perfectly with your profile.",
    },
    Feature {
        id: "interviews",
        title: "Video Interview Analyzer",
        description: "Practice interviews and get AI-driven feedback on your performance.",
    },
    Feature {
        id: "salary",
        title: "Salary Prediction",
        description: "Estimate your market value and negotiate your salary with confidence.",
    },
    Feature {
        id: "upskilling",
        title: "Personalized Upskilling",
        description: "Receive custom learning paths to close your skill gaps and get ahead.",
    },
    Feature {
        id: "enterprise",
        title: "Enterprise Dashboard",
        description: "Manage your team's career growth and skills development from one place.",
    },
    Feature {
        id: "analytics",
        title: "Skills Analytics",
        description: "Gain insights into your organization's skills landscape and talent pool.",
    },
    Feature {
        id: "mobility",
        title: "Talent Mobility Engine",
        description: "Facilitate internal career moves and retain top talent within your company.",
    },
    Feature {
        id: "marketplace",
        title: "Career Marketplace",
        description: "Connect with mentors, coaches, and training providers to boost your career.",
    },
    Feature {
        id: "api",
        title: "API Integrations",
        description: "Connect our platform with your existing HR tools for a seamless workflow.",
    },
];

pub fn find(id: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.id == id)
}

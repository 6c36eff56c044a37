//! Portfolio content records
//!
//! Everything the page renders is plain data: a profile blurb, a skill
//! grid, an ordered project list and a work-experience timeline. Records
//! load from a TOML file or from the built-in sample. Order is meaningful
//! and duplicates are preserved; the reveal layer assigns per-index
//! parameters off the positions as given.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content loading errors
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file cannot be read
    #[error("Content read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid TOML or misses required fields
    #[error("Content parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Hero blurb
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
}

/// One tile in the skill grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

/// One full-screen project section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub code_link: String,
    pub image_url: String,
}

/// One entry in the work-experience timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub date_range: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

/// The whole site's content, in page order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Portfolio {
    /// Parse portfolio content from a TOML document
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load portfolio content from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// The built-in sample content
    pub fn sample() -> Self {
        sample_portfolio()
    }
}

fn skill(name: &str, icon: &str) -> Skill {
    Skill {
        name: name.to_owned(),
        icon: icon.to_owned(),
    }
}

fn sample_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Waleed".to_owned(),
            tagline: "I'm a recent software engineering graduate with a variety of skills."
                .to_owned(),
        },
        skills: vec![
            skill("python", "python-original"),
            skill("java", "java-original"),
            skill("javascript", "javascript-original"),
            skill("c", "c-original"),
            skill("cplusplus", "cplusplus-original"),
            skill("typescript", "typescript-original"),
            skill("html5", "html5-original"),
            skill("css3", "css3-original"),
            skill("nodejs", "nodejs-original"),
            skill("angularjs", "angularjs-original"),
            skill("react", "react-original"),
            skill("spring", "spring-original"),
            skill("mysql", "mysql-original"),
            skill("docker", "docker-original"),
            skill("kubernetes", "kubernetes-plain"),
            skill("googlecloud", "googlecloud-original"),
            skill("git", "git-original"),
            skill("github", "github-original"),
            skill("linux", "linux-original"),
            skill("bash", "bash-original"),
            skill("ubuntu", "ubuntu-plain"),
        ],
        projects: vec![
            Project {
                title: "Password Enforcement Tool".to_owned(),
                description: "A security tool built in Python to validate password strength \
                              with real-time feedback and admin audit logs."
                    .to_owned(),
                tech: vec!["Python".to_owned()],
                code_link: "https://github.com/wmajbour/password-tool".to_owned(),
                image_url: "https://placehold.co/1200x800?text=Password+Tool".to_owned(),
            },
            Project {
                title: "Survey Web App".to_owned(),
                description: "A full-stack survey platform built with cloud hosting, \
                              optimized for reliability and usability."
                    .to_owned(),
                tech: vec!["React".to_owned(), "Azure".to_owned(), "Node.js".to_owned()],
                code_link: "https://github.com/wmajbour/survey-app".to_owned(),
                image_url: "https://placehold.co/1200x800?text=Survey+App".to_owned(),
            },
            // The embedded project appears twice in the supplied content.
            // Content is an ordered list; duplicates stay as given.
            Project {
                title: "Embedded TI MSP System".to_owned(),
                description: "Developed embedded applications using MSP430 microcontrollers \
                              with real-time control."
                    .to_owned(),
                tech: vec!["C".to_owned(), "TI MSP430".to_owned(), "RTOS".to_owned()],
                code_link: "https://github.com/wmajbour/embedded-ti".to_owned(),
                image_url: "https://placehold.co/1200x800?text=Embedded+System".to_owned(),
            },
            Project {
                title: "Embedded TI MSP System".to_owned(),
                description: "Developed embedded applications using MSP430 microcontrollers \
                              with real-time control."
                    .to_owned(),
                tech: vec!["C".to_owned(), "TI MSP430".to_owned(), "RTOS".to_owned()],
                code_link: "https://github.com/wmajbour/embedded-ti".to_owned(),
                image_url: "https://placehold.co/1200x800?text=Embedded+System".to_owned(),
            },
        ],
        experience: vec![
            Experience {
                title: "Software Engineering Intern".to_owned(),
                date_range: "May 2024 - Aug 2024".to_owned(),
                bullet_points: vec![
                    "Built internal dashboards for fleet telemetry data".to_owned(),
                    "Cut report generation time by batching database queries".to_owned(),
                ],
            },
            Experience {
                title: "Teaching Assistant, Data Structures".to_owned(),
                date_range: "Sep 2023 - Apr 2024".to_owned(),
                bullet_points: vec![
                    "Ran weekly labs for 60 students".to_owned(),
                    "Wrote autograder checks for assignment submissions".to_owned(),
                ],
            },
            Experience {
                title: "IT Support Specialist".to_owned(),
                date_range: "Jun 2022 - Aug 2023".to_owned(),
                bullet_points: vec![
                    "Maintained lab imaging and deployment scripts".to_owned(),
                    "Automated device enrollment for 200+ machines".to_owned(),
                ],
            },
        ],
    }
}

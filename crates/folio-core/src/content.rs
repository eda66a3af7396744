//! Static portfolio content and the small views derived from it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// International number without `+`, as used by wa.me links.
    pub whatsapp: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Technical,
    Tools,
    Office,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Tools,
        SkillCategory::Office,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Tools => "Tools",
            SkillCategory::Office => "Office",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
    pub status: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Python,
    AiData,
    Web,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Python,
        ProjectCategory::AiData,
        ProjectCategory::Web,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Python => "Python",
            ProjectCategory::AiData => "AI/Data",
            ProjectCategory::Web => "Web",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub tech: &'static [&'static str],
    pub category: ProjectCategory,
    pub upcoming: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Internship {
    pub company: &'static str,
    pub role: &'static str,
    pub domain: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub description: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Khizra Rashid",
    role: "Python Developer | AI & Data Science Student",
    about: "I'm Khizra Rashid, a Python developer and an AI & Data Science student, learning to build smart, data-driven applications. I am passionate about leveraging technology to solve real-world problems.",
    email: "rashidkhanhome@gmail.com",
    github: "https://github.com/M-Muneebcoding",
    linkedin: "https://www.linkedin.com/in/khizra-rashid-082787395/",
    whatsapp: "923133258330",
};

pub const HERO_ROLES: [&str; 3] = ["Python Developer", "AI Enthusiast", "Data Scientist"];

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Tic-Tac-Toe Game",
        description: "Developed a Tic-Tac-Toe game using Python where the user plays against the computer. The game implements basic game logic to handle player moves, computer moves, and win or draw conditions.",
        link: "https://github.com/M-Muneebcoding/Khizra-Tic-Tac-Toe-Game/tree/main",
        tech: &["Python", "Game Logic", "CLI"],
        category: ProjectCategory::Python,
        upcoming: false,
    },
    Project {
        title: "Next Gen AI Projects",
        description: "Currently researching and developing advanced projects in Machine Learning and Computer Vision. Check back soon for neural networks and predictive models!",
        link: "#",
        tech: &["Python", "TensorFlow", "Pandas"],
        category: ProjectCategory::AiData,
        upcoming: true,
    },
];

pub static INTERNSHIPS: [Internship; 2] = [
    Internship {
        company: "Hex Software",
        role: "Python Programming Intern",
        domain: "Python Programming",
        image: "hex1.jpeg",
    },
    Internship {
        company: "Arch Technology",
        role: "Web Development Intern",
        domain: "Web Development",
        image: "arch1.jpeg",
    },
];

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
        status: None,
    }
}

const fn skill_with_status(
    name: &'static str,
    level: u8,
    category: SkillCategory,
    status: &'static str,
) -> Skill {
    Skill {
        name,
        level,
        category,
        status: Some(status),
    }
}

pub static SKILLS: [Skill; 14] = [
    skill("Python Programming", 85, SkillCategory::Technical),
    skill_with_status("Artificial Intelligence (AI)", 60, SkillCategory::Technical, "In Progress"),
    skill_with_status("Data Science", 60, SkillCategory::Technical, "In Progress"),
    skill("Data Analysis", 75, SkillCategory::Technical),
    skill_with_status("JavaScript", 40, SkillCategory::Technical, "Basic"),
    skill_with_status("CSS", 45, SkillCategory::Technical, "Basic"),
    skill_with_status("Web Development", 50, SkillCategory::Technical, "Basic"),
    skill("Google Colab", 90, SkillCategory::Tools),
    skill("Jupyter Notebook", 90, SkillCategory::Tools),
    skill("Kaggle", 80, SkillCategory::Tools),
    skill("VS Code", 85, SkillCategory::Tools),
    skill("Microsoft Word", 95, SkillCategory::Office),
    skill("Microsoft PowerPoint", 90, SkillCategory::Office),
    skill("Microsoft Excel", 85, SkillCategory::Office),
];

pub static EDUCATION: [Education; 2] = [
    Education {
        institution: "SMIT",
        degree: "AI & Data Science",
        description: "Specialized training in Artificial Intelligence and Data Science.",
    },
    Education {
        institution: "F.G School",
        degree: "Class 8th",
        description: "Currently studying.",
    },
];

const fn cert(title: &'static str, issuer: &'static str, image: &'static str) -> Certification {
    Certification {
        title,
        issuer,
        image,
    }
}

pub static CERTIFICATIONS: [Certification; 12] = [
    cert("Oracle Foundations Associate", "Oracle", "ora1.jpeg"),
    cert("Digital Safety and Security Awareness", "Cisco", "cisco1.jpeg"),
    cert("Introduction to Modern AI", "Cisco", "cisco2.jpeg"),
    cert("JavaScript Essentials 1", "Cisco", "cisco3.jpeg"),
    cert("JavaScript Essentials 2", "Cisco", "cisco4.jpeg"),
    cert("Python Essentials 1", "Cisco", "cisco5.jpeg"),
    cert("Python Essentials 2", "Cisco", "cisco6.jpeg"),
    cert("Data Visualization", "Kaggle", "kg1.jpeg"),
    cert("Introduction to Machine Learning", "Kaggle", "kg2.jpeg"),
    cert("Introduction to Programming", "Kaggle", "kg3.jpeg"),
    cert("Pandas", "Kaggle", "kg4.jpeg"),
    cert("Python", "Kaggle", "kg5.jpeg"),
];

/// Read-only view over every content table.
#[derive(Clone, Copy, Debug)]
pub struct Portfolio {
    pub info: &'static PersonalInfo,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub certifications: &'static [Certification],
    pub internships: &'static [Internship],
    pub education: &'static [Education],
}

impl Portfolio {
    pub fn builtin() -> Self {
        Self {
            info: &PERSONAL_INFO,
            skills: &SKILLS,
            projects: &PROJECTS,
            certifications: &CERTIFICATIONS,
            internships: &INTERNSHIPS,
            education: &EDUCATION,
        }
    }

    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Python,
    AiData,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [ProjectFilter::All, ProjectFilter::Python, ProjectFilter::AiData];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Python => "Python",
            ProjectFilter::AiData => "AI/Data",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    pub fn matches(self, project: &Project) -> bool {
        self.matches_category(project.category)
    }

    pub fn matches_category(self, category: ProjectCategory) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Python => category == ProjectCategory::Python,
            ProjectFilter::AiData => category == ProjectCategory::AiData,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

// ---------------- Images ----------------

pub fn placeholder_image_url(title: &str) -> String {
    let seed: String = title.chars().filter(|c| !c.is_whitespace()).collect();
    format!("https://picsum.photos/seed/{seed}/400/300")
}

/// What an `<img>` should show after `failures` failed loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Original,
    Placeholder(String),
    /// Give up on images and show the icon fallback.
    Icon,
}

pub fn image_source_after_failures(title: &str, failures: u32) -> ImageSource {
    match failures {
        0 => ImageSource::Original,
        1 => ImageSource::Placeholder(placeholder_image_url(title)),
        _ => ImageSource::Icon,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKind {
    Internship,
    Certification,
}

impl ViewerKind {
    pub fn label(self) -> &'static str {
        match self {
            ViewerKind::Internship => "Internship",
            ViewerKind::Certification => "Certification",
        }
    }
}

/// Content of the full-screen image viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerData {
    pub src: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: ViewerKind,
    pub tags: Vec<&'static str>,
    pub description: String,
}

impl From<&Internship> for ViewerData {
    fn from(item: &Internship) -> Self {
        Self {
            src: item.image,
            title: item.company,
            subtitle: item.role,
            kind: ViewerKind::Internship,
            tags: vec![item.domain],
            description: format!(
                "Completed a professional internship as a {} at {}. Gained comprehensive experience in {}.",
                item.role, item.company, item.domain
            ),
        }
    }
}

impl From<&Certification> for ViewerData {
    fn from(item: &Certification) -> Self {
        Self {
            src: item.image,
            title: item.title,
            subtitle: item.issuer,
            kind: ViewerKind::Certification,
            tags: vec![item.issuer],
            description: format!(
                "Professional certification issued by {}. Validates expertise in {}.",
                item.issuer, item.title
            ),
        }
    }
}

impl ViewerData {
    /// Look up by kind label and table index, as stored in `data-viewer-*` attributes.
    pub fn lookup(kind: &str, index: usize) -> Option<Self> {
        match kind {
            "internship" => INTERNSHIPS.get(index).map(ViewerData::from),
            "certification" => CERTIFICATIONS.get(index).map(ViewerData::from),
            _ => None,
        }
    }
}

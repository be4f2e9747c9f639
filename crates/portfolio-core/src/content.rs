//! Hard-coded portfolio content.

#[derive(Clone, Copy, Debug)]
pub struct Hero {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    /// Name of the icon drawn in the card header.
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub profile_url: &'static str,
    pub profile_label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
}

pub const HERO: Hero = Hero {
    first_name: "Stephane",
    last_name: "Niyonizigiye",
    tagline: "Software & Geospatial Developer | AI/ML Enthusiast",
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Experience" },
    NavItem { label: "Projects" },
    NavItem { label: "Skills" },
    NavItem { label: "Contact" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Computer Engineering graduate with a growing passion for Artificial Intelligence, Machine \
     Learning, and cutting-edge retrieval systems like Retrieval-Augmented Generation (RAG). At \
     the University of Ottawa, I've contributed to real-world solutions by developing \
     intelligent, accessible web applications using React, Flask, and OpenLayers, and working \
     with geospatial data via PostGIS and Geoserver.",
    "Driven by a deep curiosity for how intelligent systems can enhance decision-making and \
     human interaction, I've begun integrating machine learning techniques into my projects and \
     exploring how RAG can power next-generation AI applications. My multidisciplinary \
     experience, from cloud systems to frontend development, gives me a unique edge in building \
     practical, end-to-end ML-powered systems.",
    "Currently seeking opportunities to grow as an AI/ML Engineer or Applied Researcher, where I \
     can apply my technical foundations, creative problem-solving, and eagerness to learn to \
     meaningful, data-driven innovation.",
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Web Developer",
        company: "University of Ottawa",
        period: "January 2025 - Present",
        description: "Developing Python Flask APIs, working with PostGIS databases, and building \
                      accessible React components with OpenLayers for geospatial data \
                      visualization.",
        tags: &["Python", "Flask", "React", "OpenLayers", "PostGIS", "Geoserver"],
    },
    Experience {
        title: "System Analyst",
        company: "University of Ottawa",
        period: "May 2024 - September 2024",
        description: "Enhanced IT operations by managing SCCM deployments, scaled Azure \
                      environments, and automated processes with batch scripts while \
                      maintaining Windows servers.",
        tags: &["Azure", "SCCM", "Windows", "Batch", "IT Operations"],
    },
    Experience {
        title: "Component Engineer",
        company: "Curtiss-Wright Corporation",
        period: "January 2024 - May 2024",
        description: "Managed electronic components in SAP, analyzed technical specifications, \
                      conducted environmental compliance checks, and optimized database \
                      management in Oracle Agile.",
        tags: &["SAP", "Accuris", "Oracle Agile", "Technical Analysis"],
    },
    Experience {
        title: "IT Specialist",
        company: "University of Ottawa",
        period: "February 2023 - January 2024",
        description: "Managed SQL databases, deployed Windows systems, designed network \
                      solutions, and oversaw equipment/software management with tools like \
                      TopDesk and Snipe-IT.",
        tags: &["SQL", "Windows AD", "SCCM", "TopDesk", "Snipe-IT"],
    },
    Experience {
        title: "Process Assistant",
        company: "Amazon Fulfillment Centre",
        period: "October 2020 - November 2021",
        description: "Analyzed operational data for weekly reports, automated administrative \
                      tasks, led team meetings, and contributed to continuous improvement \
                      initiatives.",
        tags: &[
            "Data Analysis",
            "Excel",
            "Team Leadership",
            "Process Optimization",
        ],
    },
    Experience {
        title: "Web Administrator",
        company: "Wavetec",
        period: "February 2019 - August 2020",
        description: "Revamped website performance, upgraded SQL databases, implemented IoT \
                      systems with TCP/IP protocols, and integrated secure payment APIs.",
        tags: &["Web Development", "SQL", "IoT", "TCP/IP", "Payment APIs"],
    },
];

pub const EDUCATION: Education = Education {
    school: "University of Ottawa",
    degree: "Bachelor of Computer Engineering",
    years: "2021-2025",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Geospatial Data Visualization Platform",
        description: "Interactive web application using React, OpenLayers, and PostGIS to \
                      visualize and analyze complex geospatial datasets with custom filtering \
                      capabilities.",
        tags: &["React", "OpenLayers", "PostGIS", "GeoServer", "Flask"],
    },
    Project {
        title: "RAG-Enhanced Document Search System",
        description: "Developed a Retrieval-Augmented Generation system to improve document \
                      search accuracy using vector embeddings and large language models.",
        tags: &["Python", "RAG", "Vector Databases", "LLMs", "NLP"],
    },
    Project {
        title: "Computer Vision Object Detection",
        description: "Implementation of YOLOv8 models for real-time object detection in video \
                      streams with custom training for specific use cases.",
        tags: &["Computer Vision", "YOLOv8", "Python", "PyTorch", "OpenCV"],
    },
    Project {
        title: "Multilingual Web Application",
        description: "Accessible and internationalized web platform built with React and Flask, \
                      supporting both English and French interfaces with screen reader \
                      compatibility.",
        tags: &["React", "Accessibility", "i18n", "Flask", "UX Design"],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Cloud & Infrastructure",
        icon: "cloud-cog",
        skills: &["Azure", "Windows Server", "SCCM", "IoT Systems"],
    },
    SkillCategory {
        title: "Programming",
        icon: "code",
        skills: &["Python", "JavaScript/TypeScript", "SQL", "Batch"],
    },
    SkillCategory {
        title: "Web Development",
        icon: "globe",
        skills: &["React", "Flask", "REST APIs", "Accessibility"],
    },
    SkillCategory {
        title: "Databases",
        icon: "database",
        skills: &["SQL", "PostgreSQL", "PostGIS", "Oracle Agile"],
    },
    SkillCategory {
        title: "AI & Machine Learning",
        icon: "brain-circuit",
        skills: &["Computer Vision", "RAG", "ML", "NLP"],
    },
    SkillCategory {
        title: "GIS & Spatial",
        icon: "map-pin",
        skills: &["OpenLayers", "GeoServer", "PostGIS", "Spatial Analysis"],
    },
    SkillCategory {
        title: "Tools & Practices",
        icon: "rocket",
        skills: &["Git", "Agile/Kanban", "SAP", "TopDesk"],
    },
    SkillCategory {
        title: "Languages",
        icon: "languages",
        skills: &["French (Native)", "English (Professional)"],
    },
];

pub const CONTACT: Contact = Contact {
    heading: "Get In Touch",
    blurb: "Currently seeking opportunities in AI/ML Engineering. Feel free to reach out to \
            discuss potential collaborations.",
    email: "stephaneniyonizigiye@gmail.com",
    profile_url: "https://www.linkedin.com/in/stephane-n-101b231b7",
    profile_label: "LinkedIn Profile",
};

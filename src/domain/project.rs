use crate::domain::catalog::{category_label, list_categories, CatalogItem};
use serde::Serialize;
use std::collections::HashSet;

/// A portfolio project shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

impl CatalogItem for Project {
    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        self.category
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Dashboard",
        description: "A comprehensive admin dashboard for managing e-commerce operations with real-time analytics, inventory management, and order tracking. Built with modern React patterns and responsive design.",
        image: "/api/placeholder/400/250",
        category: "react",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Chart.js", "Redux Toolkit"],
        live_url: "https://ecommerce-dashboard-demo.netlify.app",
        github_url: "https://github.com/yourusername/ecommerce-dashboard",
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "A full-stack productivity application with drag-and-drop functionality, team collaboration features, and real-time updates. Includes user authentication and project management tools.",
        image: "/api/placeholder/400/250",
        category: "fullstack",
        technologies: &["React", "Node.js", "Express", "MongoDB", "Socket.io", "JWT"],
        live_url: "https://taskflow-manager.herokuapp.com",
        github_url: "https://github.com/yourusername/task-management-app",
    },
    Project {
        id: 3,
        title: "Weather Forecast Widget",
        description: "An interactive weather application with location-based forecasts, beautiful animations, and detailed weather information. Features geolocation API and responsive design for all devices.",
        image: "/api/placeholder/400/250",
        category: "javascript",
        technologies: &["Vanilla JavaScript", "CSS3", "Weather API", "Geolocation API", "Chart.js"],
        live_url: "https://weather-widget-pro.vercel.app",
        github_url: "https://github.com/yourusername/weather-forecast-widget",
    },
    Project {
        id: 4,
        title: "Social Media Platform",
        description: "A modern social networking platform with real-time messaging, post sharing, user profiles, and advanced privacy settings. Built with scalable architecture and modern UI/UX principles.",
        image: "/api/placeholder/400/250",
        category: "fullstack",
        technologies: &["React", "Next.js", "PostgreSQL", "Prisma", "NextAuth", "Tailwind CSS"],
        live_url: "https://social-connect-platform.vercel.app",
        github_url: "https://github.com/yourusername/social-media-platform",
    },
    Project {
        id: 5,
        title: "Portfolio Website Builder",
        description: "A drag-and-drop website builder specifically designed for creating professional portfolios. Features customizable templates, real-time preview, and one-click deployment options.",
        image: "/api/placeholder/400/250",
        category: "react",
        technologies: &["React", "React DnD", "Styled Components", "Firebase", "Netlify API"],
        live_url: "https://portfolio-builder-pro.netlify.app",
        github_url: "https://github.com/yourusername/portfolio-website-builder",
    },
    Project {
        id: 6,
        title: "Interactive Data Visualizer",
        description: "A powerful data visualization tool that transforms complex datasets into interactive charts and graphs. Supports multiple data formats and provides real-time filtering and analysis capabilities.",
        image: "/api/placeholder/400/250",
        category: "javascript",
        technologies: &["D3.js", "JavaScript", "CSS3", "Papa Parse", "Canvas API"],
        live_url: "https://data-viz-interactive.github.io",
        github_url: "https://github.com/yourusername/interactive-data-visualizer",
    },
    Project {
        id: 7,
        title: "Recipe Sharing Community",
        description: "A full-stack web application where users can share, discover, and rate recipes. Features include user authentication, recipe search, meal planning, and social interactions with cooking enthusiasts.",
        image: "/api/placeholder/400/250",
        category: "fullstack",
        technologies: &["React", "Node.js", "Express", "MySQL", "Cloudinary", "JWT", "Stripe API"],
        live_url: "https://recipe-community-hub.herokuapp.com",
        github_url: "https://github.com/yourusername/recipe-sharing-community",
    },
    Project {
        id: 8,
        title: "Cryptocurrency Tracker",
        description: "A real-time cryptocurrency tracking application with portfolio management, price alerts, and market analysis tools. Features beautiful charts and comprehensive market data visualization.",
        image: "/api/placeholder/400/250",
        category: "react",
        technologies: &["React", "Redux", "CoinGecko API", "Chart.js", "Material-UI", "LocalStorage"],
        live_url: "https://crypto-tracker-pro.netlify.app",
        github_url: "https://github.com/yourusername/cryptocurrency-tracker",
    },
];

/// Filter keys for the project gallery, `"all"` first
pub fn project_categories() -> Vec<String> {
    list_categories(PROJECTS)
}

/// Gallery label for a project category key
pub fn project_category_label(category: &str) -> String {
    category_label(category, "All Projects")
}

/// Every technology used across the projects, in order of first appearance
pub fn project_technologies() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    PROJECTS
        .iter()
        .flat_map(|project| project.technologies.iter().copied())
        .filter(|tech| seen.insert(*tech))
        .collect()
}

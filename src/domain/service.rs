use crate::domain::catalog::{category_counts, category_label, get_by_id, CatalogItem};
use serde::Serialize;
use std::collections::BTreeSet;

/// A service offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub icon: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub starting_price: u32,
    pub delivery_time: &'static str,
    pub category: &'static str,
}

impl CatalogItem for Service {
    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        self.category
    }
}

/// A pricing package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub duration: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub category: &'static str,
}

impl CatalogItem for PricingTier {
    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        self.category
    }
}

/// A service filter control: key, label and number of matching services
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub count: usize,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Frontend Development",
        description: "Create stunning, responsive user interfaces with modern frameworks and cutting-edge design principles.",
        long_description: "Build beautiful, interactive web applications using the latest frontend technologies. From responsive layouts to complex user interactions, I create engaging experiences that work seamlessly across all devices.",
        icon: "frontend",
        technologies: &["React", "Vue.js", "TypeScript", "Tailwind CSS", "SASS", "JavaScript ES6+"],
        features: &[
            "Responsive Web Design",
            "Single Page Applications (SPA)",
            "Progressive Web Apps (PWA)",
            "Cross-browser Compatibility",
            "Performance Optimization",
            "Accessibility (WCAG 2.1)",
        ],
        starting_price: 1500,
        delivery_time: "2-4 weeks",
        category: "development",
    },
    Service {
        id: 2,
        title: "Backend Development",
        description: "Build robust, scalable server-side applications with secure APIs and efficient database management.",
        long_description: "Develop powerful backend systems that handle your business logic, data processing, and API integrations. From RESTful APIs to real-time applications, I ensure your backend is secure, scalable, and performant.",
        icon: "backend",
        technologies: &["Node.js", "Python", "Express.js", "MongoDB", "PostgreSQL", "Redis"],
        features: &[
            "RESTful API Development",
            "Database Design & Optimization",
            "Authentication & Authorization",
            "Real-time Applications",
            "Third-party Integrations",
            "Cloud Deployment",
        ],
        starting_price: 2000,
        delivery_time: "3-5 weeks",
        category: "development",
    },
    Service {
        id: 3,
        title: "Full Stack Applications",
        description: "Complete web applications from concept to deployment, handling both frontend and backend development.",
        long_description: "End-to-end web application development covering everything from user interface design to server architecture. Perfect for businesses looking for a complete digital solution.",
        icon: "fullstack",
        technologies: &["React", "Node.js", "MongoDB", "Express.js", "TypeScript", "AWS"],
        features: &[
            "Complete Web Applications",
            "User Authentication Systems",
            "Admin Dashboards",
            "Payment Integration",
            "Email Notifications",
            "Analytics Integration",
        ],
        starting_price: 3500,
        delivery_time: "6-10 weeks",
        category: "development",
    },
    Service {
        id: 4,
        title: "Website Optimization",
        description: "Improve your existing website's performance, SEO, and user experience for better results.",
        long_description: "Analyze and optimize your current website for better performance, search engine rankings, and user engagement. Includes technical SEO, speed optimization, and UX improvements.",
        icon: "optimization",
        technologies: &["Google Analytics", "PageSpeed Insights", "SEO Tools", "Lighthouse", "GTM"],
        features: &[
            "Performance Auditing",
            "SEO Optimization",
            "Core Web Vitals Improvement",
            "Mobile Optimization",
            "Conversion Rate Optimization",
            "Analytics Setup",
        ],
        starting_price: 800,
        delivery_time: "1-2 weeks",
        category: "optimization",
    },
    Service {
        id: 5,
        title: "E-commerce Solutions",
        description: "Build powerful online stores with secure payment processing and inventory management.",
        long_description: "Create comprehensive e-commerce platforms that drive sales and provide excellent shopping experiences. From product catalogs to payment processing, everything you need to sell online.",
        icon: "ecommerce",
        technologies: &["React", "Stripe", "PayPal", "Node.js", "MongoDB", "Redis"],
        features: &[
            "Product Catalog Management",
            "Shopping Cart & Checkout",
            "Payment Gateway Integration",
            "Order Management System",
            "Inventory Tracking",
            "Customer Accounts",
        ],
        starting_price: 4000,
        delivery_time: "8-12 weeks",
        category: "development",
    },
    Service {
        id: 6,
        title: "API Development",
        description: "Design and build robust APIs for mobile apps, third-party integrations, and microservices.",
        long_description: "Develop scalable and secure APIs that power your applications and enable seamless integrations. Perfect for mobile apps, third-party services, and microservice architectures.",
        icon: "api",
        technologies: &["Node.js", "Express.js", "GraphQL", "REST", "JWT", "Swagger"],
        features: &[
            "RESTful API Design",
            "GraphQL Implementation",
            "API Documentation",
            "Rate Limiting & Security",
            "Version Management",
            "Testing & Monitoring",
        ],
        starting_price: 1800,
        delivery_time: "3-6 weeks",
        category: "development",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        id: 1,
        name: "Starter",
        description: "Perfect for small businesses and personal projects",
        price: 1500,
        duration: "per project",
        features: &[
            "Responsive Design",
            "Up to 5 Pages",
            "Basic SEO Setup",
            "Contact Form",
            "30 Days Support",
            "Mobile Optimization",
        ],
        popular: false,
        category: "basic",
    },
    PricingTier {
        id: 2,
        name: "Professional",
        description: "Ideal for growing businesses and advanced features",
        price: 3500,
        duration: "per project",
        features: &[
            "Everything in Starter",
            "Custom Functionality",
            "Database Integration",
            "User Authentication",
            "Admin Dashboard",
            "90 Days Support",
            "Performance Optimization",
            "Analytics Integration",
        ],
        popular: true,
        category: "professional",
    },
    PricingTier {
        id: 3,
        name: "Enterprise",
        description: "Complete solutions for large-scale applications",
        price: 6500,
        duration: "per project",
        features: &[
            "Everything in Professional",
            "Scalable Architecture",
            "Third-party Integrations",
            "Advanced Security",
            "Load Balancing",
            "6 Months Support",
            "Deployment & DevOps",
            "Training & Documentation",
        ],
        popular: false,
        category: "enterprise",
    },
];

/// Filter controls for the services page, with per-category counts
pub fn service_categories() -> Vec<ServiceCategory> {
    category_counts(SERVICES)
        .into_iter()
        .map(|(id, count)| ServiceCategory {
            name: service_category_label(&id),
            id,
            count,
        })
        .collect()
}

pub fn service_category_label(category: &str) -> String {
    category_label(category, "All Services")
}

pub fn service_by_id(id: u32) -> Option<&'static Service> {
    get_by_id(SERVICES, id)
}

pub fn pricing_tier_by_id(id: u32) -> Option<&'static PricingTier> {
    get_by_id(PRICING_TIERS, id)
}

/// The first three services, featured on the home page
pub fn popular_services() -> &'static [Service] {
    &SERVICES[..SERVICES.len().min(3)]
}

/// Every technology offered across services, sorted and de-duplicated
pub fn service_technologies() -> Vec<&'static str> {
    SERVICES
        .iter()
        .flat_map(|service| service.technologies.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Mean starting price, rounded to the nearest whole unit
pub fn average_price() -> u32 {
    if SERVICES.is_empty() {
        return 0;
    }
    let total: u32 = SERVICES.iter().map(|service| service.starting_price).sum();
    (f64::from(total) / SERVICES.len() as f64).round() as u32
}

/// Services whose starting price lies within `[min_price, max_price]`
pub fn services_by_price_range(min_price: u32, max_price: u32) -> Vec<&'static Service> {
    SERVICES
        .iter()
        .filter(|service| (min_price..=max_price).contains(&service.starting_price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::filter_by_category;

    #[test]
    fn test_service_categories_with_counts() {
        let categories = service_categories();
        assert_eq!(
            categories,
            vec![
                ServiceCategory {
                    id: "all".to_string(),
                    name: "All Services".to_string(),
                    count: 6,
                },
                ServiceCategory {
                    id: "development".to_string(),
                    name: "Development".to_string(),
                    count: 5,
                },
                ServiceCategory {
                    id: "optimization".to_string(),
                    name: "Optimization".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_filter_services() {
        let optimization = filter_by_category(SERVICES, "optimization");
        assert_eq!(optimization.len(), 1);
        assert_eq!(optimization[0].title, "Website Optimization");
    }

    #[test]
    fn test_lookups() {
        assert_eq!(service_by_id(6).map(|s| s.title), Some("API Development"));
        assert!(service_by_id(7).is_none());
        assert_eq!(pricing_tier_by_id(2).map(|t| t.popular), Some(true));
        assert!(pricing_tier_by_id(4).is_none());
    }

    #[test]
    fn test_popular_services() {
        let ids: Vec<u32> = popular_services().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_service_technologies_sorted_and_unique() {
        let techs = service_technologies();
        let mut sorted = techs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(techs, sorted);
        assert_eq!(techs.iter().filter(|t| **t == "React").count(), 1);
    }

    #[test]
    fn test_average_price() {
        // (1500 + 2000 + 3500 + 800 + 4000 + 1800) / 6 = 2266.67
        assert_eq!(average_price(), 2267);
    }

    #[test]
    fn test_services_by_price_range_is_inclusive() {
        let ids: Vec<u32> = services_by_price_range(1500, 2000)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 6]);
        assert!(services_by_price_range(5000, 9000).is_empty());
    }
}

use crate::{
    domain::{CategoryFilter, Project, Service, PROJECTS, SERVICES},
    error::PortfolioError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Top-level navigation section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Services,
    Contact,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Services => "services",
            Self::Contact => "contact",
        }
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "projects" => Ok(Self::Projects),
            "services" => Ok(Self::Services),
            "contact" => Ok(Self::Contact),
            _ => Err(PortfolioError::InvalidSection(s.to_string())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteAction {
    ToggleTheme,
    SetActiveSection(Section),
    SelectProjectCategory(CategoryFilter),
    SelectServiceCategory(CategoryFilter),
}

/// Page-level UI state shared across sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteState {
    pub theme: Theme,
    pub active_section: Section,
    pub project_filter: CategoryFilter,
    pub service_filter: CategoryFilter,
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the resulting state
    pub fn reduce(mut self, action: SiteAction) -> Self {
        match action {
            SiteAction::ToggleTheme => {
                self.theme = self.theme.toggled();
            }
            SiteAction::SetActiveSection(section) => {
                self.active_section = section;
            }
            SiteAction::SelectProjectCategory(filter) => {
                tracing::debug!(category = %filter, "project filter selected");
                self.project_filter = filter;
            }
            SiteAction::SelectServiceCategory(filter) => {
                tracing::debug!(category = %filter, "service filter selected");
                self.service_filter = filter;
            }
        }
        self
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.project_filter.apply(PROJECTS)
    }

    pub fn visible_services(&self) -> Vec<&'static Service> {
        self.service_filter.apply(SERVICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SiteState::new();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.active_section, Section::Home);
        assert!(state.project_filter.is_all());
        assert!(state.service_filter.is_all());
        assert_eq!(state.visible_projects().len(), PROJECTS.len());
        assert_eq!(state.visible_services().len(), SERVICES.len());
    }

    #[test]
    fn test_toggle_theme() {
        let state = SiteState::new().reduce(SiteAction::ToggleTheme);
        assert!(state.is_dark_mode());

        let state = state.reduce(SiteAction::ToggleTheme);
        assert!(!state.is_dark_mode());
    }

    #[test]
    fn test_set_active_section() {
        let state = SiteState::new().reduce(SiteAction::SetActiveSection(Section::Projects));
        assert_eq!(state.active_section, Section::Projects);
    }

    #[test]
    fn test_project_filter_selection() {
        let state = SiteState::new()
            .reduce(SiteAction::SelectProjectCategory(CategoryFilter::from("javascript")));
        let ids: Vec<u32> = state.visible_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 6]);

        // The service filter is independent
        assert_eq!(state.visible_services().len(), SERVICES.len());
    }

    #[test]
    fn test_unknown_category_shows_nothing() {
        let state = SiteState::new()
            .reduce(SiteAction::SelectServiceCategory(CategoryFilter::from("design")));
        assert!(state.visible_services().is_empty());
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!(Section::from_str("about").unwrap(), Section::About);
        assert_eq!(Section::from_str("Contact").unwrap(), Section::Contact);
        assert!(matches!(
            Section::from_str("blog"),
            Err(PortfolioError::InvalidSection(_))
        ));
    }

    #[test]
    fn test_site_state_serialization() {
        let state = SiteState::new().reduce(SiteAction::ToggleTheme);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["active_section"], "home");
        assert_eq!(json["project_filter"], "all");

        let restored: SiteState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }
}

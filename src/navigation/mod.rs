//! Admin sidebar composition.
//!
//! The menu is a pure function of the viewer's role, the deployment's
//! capability flags and the workspace settings. Nothing here performs I/O, so
//! it is safe to call on every render.

mod rules;

use serde::Serialize;

use crate::types::{FeatureFlags, Role, WorkspaceSettings};

use rules::{ItemRule, SectionRule, SECTIONS};

/// Icon identifier handed to the sidebar renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Notebook,
    Connector,
    DocumentSet,
    ZoomIn,
    ThumbsUp,
    Assistants,
    Slack,
    Tool,
    Clipboard,
    Groups,
    Cpu,
    Search,
    Document,
    Brain,
    Users,
    Key,
    Shield,
    Activity,
    Database,
    BarChart,
    Settings,
    Painting,
    CreditCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub link: &'static str,
    pub icon: NavIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

impl NavItem {
    /// True when the item should be highlighted as needing attention
    pub fn has_error(&self) -> bool {
        self.error.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub name: &'static str,
    pub items: Vec<NavItem>,
}

impl NavSection {
    pub fn labels(&self) -> Vec<&'static str> {
        self.items.iter().map(|item| item.label).collect()
    }

    pub fn item(&self, label: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.label == label)
    }
}

/// Everything the guards may look at
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    pub role: Role,
    pub flags: FeatureFlags,
    pub settings: Option<&'a WorkspaceSettings>,
}

impl<'a> NavContext<'a> {
    pub fn new(role: Role, flags: FeatureFlags, settings: Option<&'a WorkspaceSettings>) -> Self {
        Self { role, flags, settings }
    }

    pub fn compose(&self) -> Vec<NavSection> {
        SECTIONS
            .iter()
            .filter(|section| (section.when)(self))
            .map(|section| self.build_section(section))
            .collect()
    }

    fn build_section(&self, rule: &SectionRule) -> NavSection {
        NavSection {
            name: rule.name,
            items: rule
                .items
                .iter()
                .filter(|item| (item.when)(self))
                .map(|item| self.build_item(item))
                .collect(),
        }
    }

    fn build_item(&self, rule: &ItemRule) -> NavItem {
        NavItem {
            label: rule.label,
            link: rule.link,
            icon: rule.icon,
            error: rule.error.map(|flagged| flagged(self)),
        }
    }
}

/// Build the admin menu for a viewer.
///
/// Missing settings or an unresolved knowledge-graph flag count as "off".
pub fn compose(
    role: Role,
    enterprise_enabled: bool,
    cloud_enabled: bool,
    settings: Option<&WorkspaceSettings>,
    kg_exposed: Option<bool>,
) -> Vec<NavSection> {
    let flags = FeatureFlags {
        enterprise_enabled,
        cloud_enabled,
        kg_exposed,
    };
    NavContext::new(role, flags, settings).compose()
}

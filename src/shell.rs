//! Admin layout resolution.
//!
//! The shell waits for the knowledge-graph flag before composing the sidebar
//! so the menu never renders without it. Some admin subpages own the whole
//! screen and are served without the sidebar.

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, FeatureFlagSource};
use crate::config::FeatureConfig;
use crate::navigation::{NavContext, NavSection};
use crate::types::{FeatureFlags, Role, WorkspaceSettings};

/// Admin subpages rendered without the sidebar
pub const PASSTHROUGH_PREFIXES: &[&str] = &["/admin/connectors", "/admin/embeddings"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagState {
    Pending,
    Resolved(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub action_label: &'static str,
    pub link: &'static str,
}

pub const PAYMENT_REMINDER: Banner = Banner {
    message: "Your trial ends in less than 5 days and no payment method has been added.",
    action_label: "Update Billing Information",
    link: "/admin/billing",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ShellView {
    /// Flag still loading: render nothing
    Pending,
    /// Render the page alone, without sidebar or banner
    Passthrough,
    Full {
        #[serde(skip_serializing_if = "Option::is_none")]
        banner: Option<Banner>,
        sections: Vec<NavSection>,
    },
}

/// What a frontend sends to resolve its layout
#[derive(Debug, Clone, Deserialize)]
pub struct ShellRequest {
    pub role: Role,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub settings: Option<WorkspaceSettings>,
}

#[derive(Debug, Clone)]
pub struct AdminShell {
    role: Role,
    features: FeatureConfig,
    settings: Option<WorkspaceSettings>,
    kg: FlagState,
}

impl AdminShell {
    pub fn new(role: Role, features: FeatureConfig, settings: Option<WorkspaceSettings>) -> Self {
        Self {
            role,
            features,
            settings,
            kg: FlagState::Pending,
        }
    }

    pub fn kg_state(&self) -> FlagState {
        self.kg
    }

    /// Record the flag fetch outcome. A failed fetch hides the knowledge graph
    /// rather than holding the menu back.
    pub fn resolve_kg(&mut self, result: Result<bool, ClientError>) {
        let exposed = match result {
            Ok(exposed) => exposed,
            Err(err) => {
                tracing::warn!(error = %err, "knowledge graph flag unavailable, hiding entry");
                false
            }
        };
        self.kg = FlagState::Resolved(exposed);
    }

    pub async fn load_flags<S>(&mut self, source: &S)
    where
        S: FeatureFlagSource + ?Sized,
    {
        let result = source.kg_exposed().await;
        self.resolve_kg(result);
    }

    pub fn view(&self, path: Option<&str>) -> ShellView {
        let kg_exposed = match self.kg {
            FlagState::Pending => return ShellView::Pending,
            FlagState::Resolved(exposed) => exposed,
        };

        if path.is_some_and(is_passthrough) {
            return ShellView::Passthrough;
        }

        let flags = FeatureFlags {
            enterprise_enabled: self.features.enterprise_enabled,
            cloud_enabled: self.features.cloud_enabled,
            kg_exposed: Some(kg_exposed),
        };
        let sections = NavContext::new(self.role, flags, self.settings.as_ref()).compose();
        let banner = self
            .settings
            .as_ref()
            .filter(|s| s.payment_reminder_due())
            .map(|_| PAYMENT_REMINDER);

        ShellView::Full { banner, sections }
    }
}

fn is_passthrough(path: &str) -> bool {
    PASSTHROUGH_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Fetch the flag and resolve the layout for one request
pub async fn resolve<S>(source: &S, features: FeatureConfig, request: ShellRequest) -> ShellView
where
    S: FeatureFlagSource + ?Sized,
{
    let mut shell = AdminShell::new(request.role, features, request.settings);
    shell.load_flags(source).await;
    shell.view(request.path.as_deref())
}

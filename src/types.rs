/// Shared types describing who is looking at the admin shell and how the
/// workspace is configured. These arrive from collaborators (session, settings
/// provider) and are only ever read here.

use serde::{Deserialize, Serialize};

/// User roles known to the backend.
/// Only the curator split matters for the admin menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Limited,
    Basic,
    Admin,
    Curator,
    GlobalCurator,
    SlackUser,
    ExtPermUser,
}

impl Role {
    /// Curators only see the connector, document and assistant areas plus groups
    pub fn is_curator(self) -> bool {
        matches!(self, Role::Curator | Role::GlobalCurator)
    }

    pub fn is_admin_equivalent(self) -> bool {
        !self.is_curator()
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "limited" => Ok(Role::Limited),
            "basic" => Ok(Role::Basic),
            "admin" => Ok(Role::Admin),
            "curator" => Ok(Role::Curator),
            "global_curator" => Ok(Role::GlobalCurator),
            "slack_user" => Ok(Role::SlackUser),
            "ext_perm_user" => Ok(Role::ExtPermUser),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Active,
    PaymentReminder,
    GatedAccess,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryHistoryMode {
    Normal,
    Anonymized,
    Disabled,
    #[serde(other)]
    Unknown,
}

impl std::str::FromStr for QueryHistoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(QueryHistoryMode::Normal),
            "anonymized" => Ok(QueryHistoryMode::Anonymized),
            "disabled" => Ok(QueryHistoryMode::Disabled),
            other => Err(format!("unknown query history mode '{}'", other)),
        }
    }
}

/// Workspace settings relevant to menu filtering.
/// Every field is optional; a missing field means the feature is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub application_status: Option<ApplicationStatus>,
    #[serde(alias = "query_history_type")]
    pub query_history_mode: Option<QueryHistoryMode>,
    pub needs_reindexing: Option<bool>,
}

impl WorkspaceSettings {
    pub fn needs_reindexing(&self) -> bool {
        self.needs_reindexing.unwrap_or(false)
    }

    /// Query history is exposed only when a mode is known and it is not disabled
    pub fn query_history_enabled(&self) -> bool {
        matches!(
            self.query_history_mode,
            Some(mode) if mode != QueryHistoryMode::Disabled
        )
    }

    pub fn payment_reminder_due(&self) -> bool {
        self.application_status == Some(ApplicationStatus::PaymentReminder)
    }
}

/// Capability switches gating menu visibility.
/// `kg_exposed` is resolved asynchronously; `None` means unresolved or unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub enterprise_enabled: bool,
    pub cloud_enabled: bool,
    pub kg_exposed: Option<bool>,
}

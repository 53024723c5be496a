// Admin menu table. Sections and items are listed in render order; each
// carries a guard and is emitted when its guard holds for the context.

use super::{NavContext, NavIcon};

pub(super) type Guard = fn(&NavContext<'_>) -> bool;

pub(super) struct ItemRule {
    pub when: Guard,
    pub label: &'static str,
    pub link: &'static str,
    pub icon: NavIcon,
    /// Present only on items that can be flagged as needing attention
    pub error: Option<Guard>,
}

pub(super) struct SectionRule {
    pub when: Guard,
    pub name: &'static str,
    pub items: &'static [ItemRule],
}

fn always(_: &NavContext<'_>) -> bool {
    true
}

fn not_curator(ctx: &NavContext<'_>) -> bool {
    !ctx.role.is_curator()
}

fn curator(ctx: &NavContext<'_>) -> bool {
    ctx.role.is_curator()
}

fn enterprise(ctx: &NavContext<'_>) -> bool {
    ctx.flags.enterprise_enabled
}

fn cloud(ctx: &NavContext<'_>) -> bool {
    ctx.flags.cloud_enabled
}

fn not_cloud(ctx: &NavContext<'_>) -> bool {
    !ctx.flags.cloud_enabled
}

fn admin_enterprise(ctx: &NavContext<'_>) -> bool {
    not_curator(ctx) && enterprise(ctx)
}

fn kg_exposed(ctx: &NavContext<'_>) -> bool {
    ctx.flags.kg_exposed.unwrap_or(false)
}

fn query_history_enabled(ctx: &NavContext<'_>) -> bool {
    ctx.settings.is_some_and(|s| s.query_history_enabled())
}

fn needs_reindexing(ctx: &NavContext<'_>) -> bool {
    ctx.settings.is_some_and(|s| s.needs_reindexing())
}

pub(super) static SECTIONS: &[SectionRule] = &[
    SectionRule {
        when: always,
        name: "Connectors",
        items: &[
            ItemRule {
                when: always,
                label: "Existing Connectors",
                link: "/admin/indexing/status",
                icon: NavIcon::Notebook,
                error: None,
            },
            ItemRule {
                when: always,
                label: "Add Connector",
                link: "/admin/add-connector",
                icon: NavIcon::Connector,
                error: None,
            },
        ],
    },
    SectionRule {
        when: always,
        name: "Document Management",
        items: &[
            ItemRule {
                when: always,
                label: "Document Sets",
                link: "/admin/documents/sets",
                icon: NavIcon::DocumentSet,
                error: None,
            },
            ItemRule {
                when: always,
                label: "Explorer",
                link: "/admin/documents/explorer",
                icon: NavIcon::ZoomIn,
                error: None,
            },
            ItemRule {
                when: always,
                label: "Feedback",
                link: "/admin/documents/feedback",
                icon: NavIcon::ThumbsUp,
                error: None,
            },
        ],
    },
    SectionRule {
        when: always,
        name: "Custom Assistants",
        items: &[
            ItemRule {
                when: always,
                label: "Assistants",
                link: "/admin/assistants",
                icon: NavIcon::Assistants,
                error: None,
            },
            ItemRule {
                when: not_curator,
                label: "Slack Bots",
                link: "/admin/bots",
                icon: NavIcon::Slack,
                error: None,
            },
            ItemRule {
                when: not_curator,
                label: "Actions",
                link: "/admin/actions",
                icon: NavIcon::Tool,
                error: None,
            },
            ItemRule {
                when: enterprise,
                label: "Standard Answers",
                link: "/admin/standard-answer",
                icon: NavIcon::Clipboard,
                error: None,
            },
        ],
    },
    // Curators stop here: groups only, no configuration or settings
    SectionRule {
        when: curator,
        name: "User Management",
        items: &[ItemRule {
            when: always,
            label: "Groups",
            link: "/admin/groups",
            icon: NavIcon::Groups,
            error: None,
        }],
    },
    SectionRule {
        when: not_curator,
        name: "Configuration",
        items: &[
            ItemRule {
                when: always,
                label: "LLM",
                link: "/admin/configuration/llm",
                icon: NavIcon::Cpu,
                error: None,
            },
            ItemRule {
                when: always,
                label: "Search Settings",
                link: "/admin/configuration/search",
                icon: NavIcon::Search,
                error: Some(needs_reindexing as Guard),
            },
            ItemRule {
                when: always,
                label: "Document Processing",
                link: "/admin/configuration/document-processing",
                icon: NavIcon::Document,
                error: None,
            },
            ItemRule {
                when: kg_exposed,
                label: "Knowledge Graph",
                link: "/admin/kg",
                icon: NavIcon::Brain,
                error: None,
            },
        ],
    },
    SectionRule {
        when: not_curator,
        name: "User Management",
        items: &[
            ItemRule {
                when: always,
                label: "Users",
                link: "/admin/users",
                icon: NavIcon::Users,
                error: None,
            },
            ItemRule {
                when: enterprise,
                label: "Groups",
                link: "/admin/groups",
                icon: NavIcon::Groups,
                error: None,
            },
            ItemRule {
                when: always,
                label: "API Keys",
                link: "/admin/api-key",
                icon: NavIcon::Key,
                error: None,
            },
            ItemRule {
                when: always,
                label: "Token Rate Limits",
                link: "/admin/token-rate-limits",
                icon: NavIcon::Shield,
                error: None,
            },
        ],
    },
    SectionRule {
        when: admin_enterprise,
        name: "Performance",
        items: &[
            ItemRule {
                when: always,
                label: "Usage Statistics",
                link: "/admin/performance/usage",
                icon: NavIcon::Activity,
                error: None,
            },
            ItemRule {
                when: query_history_enabled,
                label: "Query History",
                link: "/admin/performance/query-history",
                icon: NavIcon::Database,
                error: None,
            },
            // Cloud deployments do not offer self-serve analytics
            ItemRule {
                when: not_cloud,
                label: "Custom Analytics",
                link: "/admin/performance/custom-analytics",
                icon: NavIcon::BarChart,
                error: None,
            },
        ],
    },
    SectionRule {
        when: not_curator,
        name: "Settings",
        items: &[
            ItemRule {
                when: always,
                label: "Workspace Settings",
                link: "/admin/settings",
                icon: NavIcon::Settings,
                error: None,
            },
            ItemRule {
                when: enterprise,
                label: "Whitelabeling",
                link: "/admin/whitelabeling",
                icon: NavIcon::Painting,
                error: None,
            },
            ItemRule {
                when: cloud,
                label: "Billing",
                link: "/admin/billing",
                icon: NavIcon::CreditCard,
                error: None,
            },
        ],
    },
];

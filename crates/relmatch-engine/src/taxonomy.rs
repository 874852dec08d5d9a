//! Coarse service taxonomy used to reject cross-category false positives.
//!
//! Resource types are classified by prefix against an ordered table, and the
//! first matching row wins, so more specific prefixes (managed disks under
//! storage) must be declared before the broader ones that would also match
//! (the rest of `microsoft.compute`). Release categories are classified by
//! keyword containment against the same rows.

use relmatch_kb::normalize_resource_type;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Storage,
    Containers,
    Compute,
    Database,
    Network,
    Web,
    Integration,
    Analytics,
    Ai,
    Security,
    Identity,
    Monitoring,
    Iot,
    Management,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Storage => "storage",
            Category::Containers => "containers",
            Category::Compute => "compute",
            Category::Database => "database",
            Category::Network => "network",
            Category::Web => "web",
            Category::Integration => "integration",
            Category::Analytics => "analytics",
            Category::Ai => "ai",
            Category::Security => "security",
            Category::Identity => "identity",
            Category::Monitoring => "monitoring",
            Category::Iot => "iot",
            Category::Management => "management",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct TaxonomyRow {
    category: Category,
    prefixes: &'static [&'static str],
    keywords: &'static [&'static str],
}

static TAXONOMY: &[TaxonomyRow] = &[
    TaxonomyRow {
        category: Category::Storage,
        prefixes: &[
            "microsoft.storage",
            "microsoft.compute/disks",
            "microsoft.compute/snapshots",
            "microsoft.compute/diskencryptionsets",
            "microsoft.netapp",
            "microsoft.recoveryservices",
            "microsoft.dataprotection",
            "microsoft.elasticsan",
        ],
        keywords: &["storage", "disk", "blob", "backup", "site recovery", "netapp", "file sync", "data lake"],
    },
    TaxonomyRow {
        category: Category::Containers,
        prefixes: &[
            "microsoft.containerservice",
            "microsoft.containerregistry",
            "microsoft.containerinstance",
            "microsoft.app/",
            "microsoft.redhatopenshift",
            "microsoft.kubernetes",
        ],
        keywords: &["container", "kubernetes", "openshift"],
    },
    TaxonomyRow {
        category: Category::Compute,
        prefixes: &[
            "microsoft.compute",
            "microsoft.batch",
            "microsoft.classiccompute",
            "microsoft.avs",
            "microsoft.desktopvirtualization",
            "microsoft.hybridcompute",
            "microsoft.servicefabric",
        ],
        keywords: &["compute", "virtual machine", "batch", "vmware", "virtual desktop", "scale set", "service fabric"],
    },
    TaxonomyRow {
        category: Category::Database,
        prefixes: &["microsoft.sql", "microsoft.documentdb", "microsoft.dbfor", "microsoft.cache", "microsoft.azurearcdata"],
        keywords: &["database", "sql", "cosmos", "postgres", "mysql", "mariadb", "redis"],
    },
    TaxonomyRow {
        category: Category::Network,
        prefixes: &["microsoft.network", "microsoft.cdn", "microsoft.classicnetwork"],
        keywords: &[
            "network",
            "vpn",
            "dns",
            "load balanc",
            "gateway",
            "expressroute",
            "front door",
            "cdn",
            "firewall",
            "private link",
            "bastion",
            "traffic manager",
        ],
    },
    TaxonomyRow {
        category: Category::Web,
        prefixes: &["microsoft.web", "microsoft.signalrservice", "microsoft.appplatform"],
        keywords: &["app service", "functions", "web app", "static web", "signalr", "spring apps"],
    },
    TaxonomyRow {
        category: Category::Integration,
        prefixes: &[
            "microsoft.logic",
            "microsoft.servicebus",
            "microsoft.eventhub",
            "microsoft.eventgrid",
            "microsoft.apimanagement",
            "microsoft.relay",
            "microsoft.notificationhubs",
        ],
        keywords: &["logic apps", "service bus", "event hub", "event grid", "api management", "integration", "messaging"],
    },
    TaxonomyRow {
        category: Category::Analytics,
        prefixes: &[
            "microsoft.synapse",
            "microsoft.datafactory",
            "microsoft.databricks",
            "microsoft.kusto",
            "microsoft.hdinsight",
            "microsoft.streamanalytics",
            "microsoft.purview",
            "microsoft.powerbi",
            "microsoft.analysisservices",
            "microsoft.fabric",
        ],
        keywords: &["analytics", "synapse", "data factory", "databricks", "data explorer", "hdinsight", "purview", "power bi", "fabric"],
    },
    TaxonomyRow {
        category: Category::Ai,
        prefixes: &["microsoft.cognitiveservices", "microsoft.machinelearningservices", "microsoft.search", "microsoft.botservice"],
        keywords: &["machine learning", "openai", "cognitive", "ai services", "ai search", "ai foundry", "bot service"],
    },
    TaxonomyRow {
        category: Category::Security,
        prefixes: &["microsoft.keyvault", "microsoft.security", "microsoft.securityinsights", "microsoft.attestation"],
        keywords: &["security", "key vault", "defender", "sentinel", "compliance"],
    },
    TaxonomyRow {
        category: Category::Identity,
        prefixes: &["microsoft.aad", "microsoft.azureactivedirectory", "microsoft.managedidentity", "microsoft.authorization"],
        keywords: &["identity", "entra", "active directory", "rbac"],
    },
    TaxonomyRow {
        category: Category::Monitoring,
        prefixes: &[
            "microsoft.insights",
            "microsoft.operationalinsights",
            "microsoft.operationsmanagement",
            "microsoft.alertsmanagement",
            "microsoft.monitor",
            "microsoft.dashboard",
        ],
        keywords: &["monitor", "log analytics", "application insights", "observability", "alert"],
    },
    TaxonomyRow {
        category: Category::Iot,
        prefixes: &["microsoft.devices", "microsoft.iotcentral", "microsoft.digitaltwins", "microsoft.timeseriesinsights"],
        keywords: &["iot", "digital twins"],
    },
    TaxonomyRow {
        category: Category::Management,
        prefixes: &[
            "microsoft.resources",
            "microsoft.management",
            "microsoft.automation",
            "microsoft.policyinsights",
            "microsoft.costmanagement",
            "microsoft.migrate",
            "microsoft.devtestlab",
            "microsoft.advisor",
        ],
        keywords: &["governance", "policy", "automation", "cost management", "resource manager", "azure arc", "migrate", "advisor"],
    },
];

/// Coarse category of a resource type, by first matching prefix.
pub fn category_of(resource_type: &str) -> Option<Category> {
    let normalized = normalize_resource_type(resource_type);
    TAXONOMY
        .iter()
        .find(|row| row.prefixes.iter().any(|p| normalized.starts_with(p)))
        .map(|row| row.category)
}

/// True when the release's categories point somewhere else entirely: the
/// resource type is classified, no release category mentions one of its
/// keywords, and at least one release category mentions another row's
/// keyword. Unclassified releases never conflict.
pub fn category_conflicts(resource_type: &str, item_categories: &[String]) -> bool {
    let Some(own) = category_of(resource_type) else {
        return false;
    };
    let lowered: Vec<String> = item_categories.iter().map(|c| c.to_lowercase()).collect();
    conflicts_lowered(own, &lowered)
}

/// [`category_conflicts`] for callers that already hold the classification
/// and lowercase categories.
pub(crate) fn conflicts_lowered(own: Category, lowered_categories: &[String]) -> bool {
    let mentions = |cat: Category| {
        keywords(cat).iter().any(|k| lowered_categories.iter().any(|c| c.contains(k)))
    };
    if mentions(own) {
        return false;
    }
    TAXONOMY.iter().filter(|row| row.category != own).any(|row| mentions(row.category))
}

fn keywords(category: Category) -> &'static [&'static str] {
    TAXONOMY.iter().find(|row| row.category == category).map(|row| row.keywords).unwrap_or(&[])
}

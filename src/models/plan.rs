use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Resource bundle and pricing of a plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanDetail {
    pub name: &'static str,
    /// Disk in GB
    pub storage: u32,
    pub bandwidth: &'static str,
    /// RAM in MB
    pub memory: u32,
    /// vCPU count
    pub cpu: u32,
    pub monthly_cost: &'static str,
    pub hourly_rate: &'static str,
}

const STARTER: PlanDetail = PlanDetail {
    name: "Starter",
    storage: 10,
    bandwidth: "10 GB",
    memory: 1024,
    cpu: 1,
    monthly_cost: "$0",
    hourly_rate: "$0",
};

const PRO: PlanDetail = PlanDetail {
    name: "Pro",
    storage: 100,
    bandwidth: "100 GB",
    memory: 4096,
    cpu: 2,
    monthly_cost: "$99",
    hourly_rate: "$0.15",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Starter,
    Pro,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown plan tier: {0}")]
pub struct UnknownPlanTier(pub String);

impl PlanTier {
    pub const ALL: [PlanTier; 2] = [PlanTier::Starter, PlanTier::Pro];

    /// Wire identifier, as sent in `plan_type`.
    pub fn id(self) -> &'static str {
        match self {
            PlanTier::Starter => "starter",
            PlanTier::Pro => "pro",
        }
    }

    pub fn detail(self) -> &'static PlanDetail {
        match self {
            PlanTier::Starter => &STARTER,
            PlanTier::Pro => &PRO,
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PlanTier {
    type Err = UnknownPlanTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(PlanTier::Starter),
            "pro" => Ok(PlanTier::Pro),
            other => Err(UnknownPlanTier(other.to_string())),
        }
    }
}

/// The static plan table handed from the selection step to the
/// configuration step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanCatalog;

impl PlanCatalog {
    pub fn tiers(&self) -> impl Iterator<Item = (PlanTier, &'static PlanDetail)> {
        PlanTier::ALL.into_iter().map(|tier| (tier, tier.detail()))
    }

    pub fn detail(&self, tier: PlanTier) -> &'static PlanDetail {
        tier.detail()
    }
}

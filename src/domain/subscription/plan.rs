//! Subscription plan reference data.
//!
//! Plans are immutable catalog entries fetched from the platform backend.
//! Identity is the plan id; pricing drives every comparison decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId};

/// A subscription tier offered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier.
    pub id: PlanId,

    /// Display name shown to users.
    pub name: String,

    /// Price per billing period, in agorot.
    pub price: Money,
}

impl Plan {
    /// Creates a plan.
    pub fn new(id: PlanId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Returns true for the free plan.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Returns true for a paid plan.
    pub fn is_paid(&self) -> bool {
        self.price.is_positive()
    }
}

/// In-memory view of the plan catalog, fetched once per interaction.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Creates a catalog from fetched plans.
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// Looks up a plan by id.
    pub fn find(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|p| &p.id == id)
    }

    /// Returns the free plan, if the catalog has one.
    pub fn free_plan(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.is_free())
    }

    /// Returns all plans.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }
}

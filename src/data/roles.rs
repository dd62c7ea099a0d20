//! Canonical role registry.
//!
//! Every other dataset keys into roles by slug. This is the dimension the
//! role × city page enumeration iterates first.

use crate::query::{Keyed, find_by_key};
use crate::types::Industry;
use serde::Serialize;
use std::sync::LazyLock;

/// A role the site covers, in editorial priority order.
#[derive(Debug, Clone, Serialize)]
pub struct Role {
    /// URL slug, unique within this dataset (e.g., "bartender").
    pub slug: &'static str,
    /// Human-readable role title.
    pub title: &'static str,
    /// Industry classification, used by filter accessors elsewhere.
    pub industry: Industry,
}

impl Keyed for Role {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static ROLES: LazyLock<Vec<Role>> = LazyLock::new(|| {
    vec![
        Role { slug: "bartender", title: "Bartender", industry: Industry::Hospitality },
        Role { slug: "server", title: "Server", industry: Industry::Hospitality },
        Role { slug: "line-cook", title: "Line Cook", industry: Industry::Hospitality },
        Role { slug: "electrician", title: "Electrician", industry: Industry::Trades },
        Role { slug: "plumber", title: "Plumber", industry: Industry::Trades },
        Role { slug: "hvac-technician", title: "HVAC Technician", industry: Industry::Trades },
        Role { slug: "welder", title: "Welder", industry: Industry::Trades },
        Role { slug: "registered-nurse", title: "Registered Nurse", industry: Industry::Healthcare },
        Role { slug: "dental-assistant", title: "Dental Assistant", industry: Industry::Healthcare },
        Role { slug: "pharmacy-technician", title: "Pharmacy Technician", industry: Industry::Healthcare },
        Role { slug: "software-developer", title: "Software Developer", industry: Industry::Technology },
        Role { slug: "data-analyst", title: "Data Analyst", industry: Industry::Technology },
        Role { slug: "retail-manager", title: "Retail Manager", industry: Industry::Retail },
        Role { slug: "truck-driver", title: "Truck Driver", industry: Industry::Logistics },
        Role { slug: "warehouse-associate", title: "Warehouse Associate", industry: Industry::Logistics },
    ]
});

/// All roles in editorial order.
pub fn all_roles() -> &'static [Role] {
    &ROLES
}

/// Point lookup by slug. `None` when the role is not covered.
pub fn get_role_by_slug(slug: &str) -> Option<&'static Role> {
    find_by_key(&ROLES, slug)
}

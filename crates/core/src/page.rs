//! Page catalogue.
//!
//! Every content page on the site has a stable key, a public route on the
//! frontend and an endpoint on the content API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identity of a content page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    About,
    AcRepair,
    WashingMachineRepair,
    RefrigeratorRepair,
    MicrowaveOvenRepair,
}

/// The appliance a service page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    AirConditioner,
    WashingMachine,
    Refrigerator,
    MicrowaveOven,
}

impl PageKey {
    /// All pages, in navigation order.
    pub const ALL: [PageKey; 5] = [
        PageKey::About,
        PageKey::AcRepair,
        PageKey::WashingMachineRepair,
        PageKey::RefrigeratorRepair,
        PageKey::MicrowaveOvenRepair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::About => "about",
            PageKey::AcRepair => "ac-repair",
            PageKey::WashingMachineRepair => "washing-machine-repair",
            PageKey::RefrigeratorRepair => "refrigerator-repair",
            PageKey::MicrowaveOvenRepair => "microwave-oven-repair",
        }
    }

    /// Path of the page on the public site.
    pub fn route(&self) -> &'static str {
        match self {
            PageKey::About => "/#about",
            PageKey::AcRepair => "/services/ac-repair",
            PageKey::WashingMachineRepair => "/services/washing-machine-repair",
            PageKey::RefrigeratorRepair => "/services/refrigerator-repair",
            PageKey::MicrowaveOvenRepair => "/services/microwave-oven-repair",
        }
    }

    /// Path segment of the page's content API endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            PageKey::About => "about-section",
            PageKey::AcRepair => "ac-repair-service",
            PageKey::WashingMachineRepair => "washing-machine-repair-service",
            PageKey::RefrigeratorRepair => "refrigerator-repair-service",
            PageKey::MicrowaveOvenRepair => "microwave-oven-repair-service",
        }
    }

    /// The appliance for service pages, `None` for the About page.
    pub fn service(&self) -> Option<ServiceKind> {
        match self {
            PageKey::About => None,
            PageKey::AcRepair => Some(ServiceKind::AirConditioner),
            PageKey::WashingMachineRepair => Some(ServiceKind::WashingMachine),
            PageKey::RefrigeratorRepair => Some(ServiceKind::Refrigerator),
            PageKey::MicrowaveOvenRepair => Some(ServiceKind::MicrowaveOven),
        }
    }
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::AirConditioner,
        ServiceKind::WashingMachine,
        ServiceKind::Refrigerator,
        ServiceKind::MicrowaveOven,
    ];

    pub fn page(&self) -> PageKey {
        match self {
            ServiceKind::AirConditioner => PageKey::AcRepair,
            ServiceKind::WashingMachine => PageKey::WashingMachineRepair,
            ServiceKind::Refrigerator => PageKey::RefrigeratorRepair,
            ServiceKind::MicrowaveOven => PageKey::MicrowaveOvenRepair,
        }
    }

    /// Display name used in service menus and default titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::AirConditioner => "AC Repair Service",
            ServiceKind::WashingMachine => "Washing Machine Repair Service",
            ServiceKind::Refrigerator => "Refrigerator Repair Service",
            ServiceKind::MicrowaveOven => "Microwave Oven Repair Service",
        }
    }

    /// Identity of the hero section shown at the top of the page.
    pub fn hero_section(&self) -> &'static str {
        match self {
            ServiceKind::AirConditioner => "AcRepair",
            ServiceKind::WashingMachine => "WashingMachineRepair",
            ServiceKind::Refrigerator => "RefrigeratorRepair",
            ServiceKind::MicrowaveOven => "MicrowaveOvenRepair",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Page",
                key: s.to_string(),
            })
    }
}

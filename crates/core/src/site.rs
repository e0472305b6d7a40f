//! Shared site shell: navigation, footer, WhatsApp popup and call button.
//!
//! This is static composition. It is served as data so the presentation
//! layer renders the same links and contact details on every page.

use serde::Serialize;

use crate::page::{PageKey, ServiceKind};

// ---------------------------------------------------------------------------
// Business constants
// ---------------------------------------------------------------------------

pub const BUSINESS_NAME: &str = "Deccan Services";

pub const DEFAULT_PHONE: &str = "+91 9766242424";

pub const DEFAULT_EMAIL: &str = "info@vaishnaviacrepairandservice.co.in";

pub const DEFAULT_ADDRESS: &str = "Flat No. 7, Building No. 2, Datar Society, Mumbai - Agra Hwy, near Tractor House, Tigraniya Corner, Dwarka, Nashik, Maharashtra 422001";

/// Second branch address. Always shown; the content API has no field for it.
pub const SECONDARY_ADDRESS: &str = "Janta Sheri Fatehgunj, Navyug High School Road, Village: Vadodara (M Corp+oG) Taluka: Vadodara, Dist.: Vadodara";

pub const WHATSAPP_MESSAGE: &str =
    "Hello Deccan Services, I would like to book an appliance repair.";

// ---------------------------------------------------------------------------
// Contact links
// ---------------------------------------------------------------------------

/// `tel:` href for a display phone number. Whitespace is stripped.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// `wa.me` chat link. WhatsApp expects the number as bare digits.
pub fn whatsapp_href(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}

// ---------------------------------------------------------------------------
// Shell types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Entry in the "Our Services" menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceLink {
    pub key: PageKey,
    pub name: &'static str,
    pub route: &'static str,
    /// True when this entry is the page currently displayed.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub business_name: &'static str,
    pub phone: ContactLink,
    pub email: ContactLink,
    pub addresses: Vec<&'static str>,
    pub services: Vec<ServiceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhatsAppPopup {
    pub phone: &'static str,
    pub message: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallButton {
    pub label: &'static str,
    pub href: String,
}

/// Everything the layout renders around a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteShell {
    pub navbar: Vec<NavLink>,
    pub footer: Footer,
    pub whatsapp: WhatsAppPopup,
    pub call_button: CallButton,
}

/// The four service links, marking `current` as active.
pub fn service_links(current: Option<PageKey>) -> Vec<ServiceLink> {
    ServiceKind::ALL
        .into_iter()
        .map(|kind| {
            let key = kind.page();
            ServiceLink {
                key,
                name: kind.display_name(),
                route: key.route(),
                active: current == Some(key),
            }
        })
        .collect()
}

impl SiteShell {
    pub fn build() -> Self {
        Self {
            navbar: vec![
                NavLink { label: "Home", href: "/" },
                NavLink { label: "About", href: PageKey::About.route() },
                NavLink { label: "Services", href: "/#services" },
                NavLink { label: "Contact", href: "/#contact" },
            ],
            footer: Footer {
                business_name: BUSINESS_NAME,
                phone: ContactLink {
                    label: DEFAULT_PHONE.to_string(),
                    href: tel_href(DEFAULT_PHONE),
                },
                email: ContactLink {
                    label: DEFAULT_EMAIL.to_string(),
                    href: mailto_href(DEFAULT_EMAIL),
                },
                addresses: vec![DEFAULT_ADDRESS, SECONDARY_ADDRESS],
                services: service_links(None),
            },
            whatsapp: WhatsAppPopup {
                phone: DEFAULT_PHONE,
                message: WHATSAPP_MESSAGE,
                href: whatsapp_href(DEFAULT_PHONE, WHATSAPP_MESSAGE),
            },
            call_button: CallButton {
                label: "Call Now",
                href: tel_href(DEFAULT_PHONE),
            },
        }
    }
}

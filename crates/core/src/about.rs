//! About section content and view model.

use serde::{Deserialize, Deserializer, Serialize};

use crate::media::MediaResolver;
use crate::text::TextList;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Content record for the About section (`about-section` endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutDocument {
    pub section_title: String,
    /// Substring of `section_title` rendered with emphasis.
    pub highlighted_text: String,
    pub description: TextList,
    pub image_url: String,
    pub features: Vec<Feature>,
}

/// A feature card. Fields the content API leaves out or sends as `null`
/// default to empty text and the `check` icon, so one incomplete card
/// never invalidates the rest of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(
        rename = "iconName",
        default = "default_icon_name",
        deserialize_with = "icon_name_or_default"
    )]
    pub icon_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
}

fn default_icon_name() -> String {
    "check".into()
}

fn icon_name_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_icon_name))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for AboutDocument {
    fn default() -> Self {
        Self {
            section_title: "About Deccan Services".into(),
            highlighted_text: "Deccan Services".into(),
            description: TextList::new([
                "Deccan Services has been serving the Nashik community for over 10 years, providing reliable appliance repair services you can trust. We take pride in our work and treat every customer's appliance as if it were our own.",
                "Our mission is to deliver exceptional service with honesty and integrity, ensuring your appliances are repaired quickly and correctly the first time.",
            ]),
            image_url: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80".into(),
            features: vec![
                Feature::new(
                    "check",
                    "Quality Service",
                    "We use only genuine parts and provide the highest quality repairs.",
                ),
                Feature::new(
                    "shield",
                    "Warranty",
                    "All our repairs come with a 90-day service warranty.",
                ),
                Feature::new(
                    "users",
                    "Expert Technicians",
                    "Our team consists of certified and experienced professionals.",
                ),
                Feature::new(
                    "clock",
                    "Quick Response",
                    "We provide same-day service for most repair requests.",
                ),
            ],
        }
    }
}

impl Feature {
    pub fn new(icon_name: &str, title: &str, description: &str) -> Self {
        Self {
            icon_name: icon_name.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Icons available to feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Check,
    Shield,
    Users,
    Clock,
}

impl Icon {
    /// Look up an icon by name, falling back to [`Icon::Check`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "shield" => Icon::Shield,
            "users" => Icon::Users,
            "clock" => Icon::Clock,
            _ => Icon::Check,
        }
    }
}

/// A run of the section title, emphasised or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSegment {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureView {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub title: Vec<TitleSegment>,
    pub paragraphs: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
    pub features: Vec<FeatureView>,
}

/// Split `title` around every occurrence of `highlight`.
///
/// Empty plain runs are dropped. An empty `highlight` yields the whole
/// title as a single plain segment.
pub fn split_title(title: &str, highlight: &str) -> Vec<TitleSegment> {
    if highlight.is_empty() {
        return vec![TitleSegment {
            text: title.to_string(),
            highlighted: false,
        }];
    }

    let mut segments = Vec::new();
    let mut parts = title.split(highlight).peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            segments.push(TitleSegment {
                text: part.to_string(),
                highlighted: false,
            });
        }
        if parts.peek().is_some() {
            segments.push(TitleSegment {
                text: highlight.to_string(),
                highlighted: true,
            });
        }
    }
    segments
}

impl AboutDocument {
    pub fn view(&self, media: &MediaResolver) -> AboutView {
        AboutView {
            title: split_title(&self.section_title, &self.highlighted_text),
            paragraphs: self.description.as_slice().to_vec(),
            image_url: media.resolve(&self.image_url),
            image_alt: format!("About {}", self.highlighted_text),
            features: self
                .features
                .iter()
                .map(|f| FeatureView {
                    icon: Icon::from_name(&f.icon_name),
                    title: f.title.clone(),
                    description: f.description.clone(),
                })
                .collect(),
        }
    }
}

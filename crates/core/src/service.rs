//! Service page content and view model.
//!
//! All four service pages share one schema. Each has its own bundled
//! default copy, built by [`ServicePageDocument::defaults_for`].

use serde::{Deserialize, Serialize};

use crate::media::MediaResolver;
use crate::page::{PageKey, ServiceKind};
use crate::site::{self, ServiceLink};
use crate::text::TextList;

/// Gallery images shown under the description.
pub const GALLERY_LIMIT: usize = 2;

/// Gallery images shown above the call to action.
pub const FINAL_GALLERY_LIMIT: usize = 3;

const HERO_IMAGE: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR3OU4jGTp7T66JU41HXy_9DvBuPJUGZJvEag&s";
const TECHNICIAN_IMAGE: &str =
    "https://t4.ftcdn.net/jpg/03/29/70/47/360_F_329704740_i0FpAgThkRmqLwCnWXxspFiade7i86Kg.jpg";
const SERVICE_IMAGE: &str =
    "https://callrandazzo.com/wp-content/uploads/2024/12/air-conditioning-services.webp";

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Content record for a service page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePageDocument {
    /// Hero section identity.
    pub page: String,
    pub title: String,
    pub video_title: String,
    pub uploaded_video_path: Option<String>,
    pub background_image: String,
    pub service_description: ServiceDescription,
    pub gallery_images: Vec<String>,
    pub repair_process: RepairProcess,
    pub final_gallery_images: Vec<String>,
    pub cta_section: CtaSection,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub description: TextList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairProcess {
    pub title: String,
    pub description: String,
    pub steps: TextList,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaSection {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
    pub email: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: site::DEFAULT_PHONE.into(),
            address: site::DEFAULT_ADDRESS.into(),
            email: site::DEFAULT_EMAIL.into(),
        }
    }
}

struct ServiceCopy {
    paragraphs: [&'static str; 3],
    process_title: &'static str,
    process_intro: &'static str,
    steps: [&'static str; 5],
    note: &'static str,
    cta: &'static str,
}

fn copy_for(kind: ServiceKind) -> ServiceCopy {
    match kind {
        ServiceKind::MicrowaveOven => ServiceCopy {
            paragraphs: [
                "Enjoy hassle-free microwave oven repair services designed to get your appliance back in top working condition. Our expert technicians specialize in diagnosing and fixing all types of microwave oven issues to ensure efficient and long-lasting results.",
                "Whether it's heating issues, unusual noises, sparking, or door malfunctions, we have the skills and tools to handle it all. We service all major microwave brands and models, providing reliable repairs at competitive prices.",
                "Customer satisfaction is our top priority. We offer quick turnarounds, transparent pricing, and expert care to ensure your microwave oven operates like new again. Count on us to keep your kitchen running smoothly.",
            ],
            process_title: "Our Microwave Oven Repair Process",
            process_intro: "We follow a comprehensive approach to diagnose and resolve microwave oven problems:",
            steps: [
                "Diagnosing heating and power issues",
                "Repairing or replacing faulty magnetrons",
                "Fixing door switches and latches",
                "Addressing electrical wiring issues",
                "Ensuring safety and optimal performance",
            ],
            note: "Regular maintenance of your microwave oven can prevent breakdowns and extend its lifespan. Our services include cleaning, part inspections, and performance checks to ensure reliable operation.",
            cta: "Trust our certified technicians to deliver high-quality microwave oven repair services tailored to your needs. Contact us today to schedule your repair or maintenance service and enjoy uninterrupted convenience in your kitchen.",
        },
        ServiceKind::AirConditioner => ServiceCopy {
            paragraphs: [
                "Beat the heat with fast and dependable AC repair services. Our trained technicians repair split, window and inverter air conditioners so your home stays cool all season.",
                "From poor cooling and gas leaks to water dripping and strange noises, we find the root cause and fix it properly. We work on all major AC brands with genuine spare parts.",
                "We keep our pricing transparent and our visits on time. Book a service and enjoy a quiet, efficient air conditioner again.",
            ],
            process_title: "Our AC Repair Process",
            process_intro: "We follow a thorough process to restore cooling performance:",
            steps: [
                "Inspecting cooling, airflow and thermostat settings",
                "Detecting and repairing refrigerant gas leaks",
                "Cleaning filters, coils and drain lines",
                "Repairing compressors, fans and PCBs",
                "Testing the unit for efficient operation",
            ],
            note: "Scheduled servicing before summer keeps your AC efficient, lowers electricity bills and prevents sudden breakdowns.",
            cta: "Trust our certified technicians for reliable AC repair and maintenance. Contact us today to schedule a visit and stay comfortable all year round.",
        },
        ServiceKind::WashingMachine => ServiceCopy {
            paragraphs: [
                "Get your laundry routine back on track with expert washing machine repair. We repair front load, top load, fully automatic and semi automatic machines.",
                "Whether your machine is not spinning, not draining, leaking or showing error codes, our technicians diagnose the fault and repair it on the spot whenever possible.",
                "We use genuine parts, quote prices upfront and stand behind every repair with a service warranty.",
            ],
            process_title: "Our Washing Machine Repair Process",
            process_intro: "We follow a step-by-step approach to fix washing machine problems:",
            steps: [
                "Diagnosing drum, motor and drive belt faults",
                "Clearing drain pumps and inlet valves",
                "Repairing door locks and seals",
                "Fixing control boards and error codes",
                "Running a full wash cycle test",
            ],
            note: "Cleaning the filter and drum regularly helps avoid odours, leaks and drainage problems.",
            cta: "Trust our certified technicians for quick washing machine repairs. Contact us today to book a service at a time that suits you.",
        },
        ServiceKind::Refrigerator => ServiceCopy {
            paragraphs: [
                "Keep your food fresh with professional refrigerator repair services. We repair single door, double door, side-by-side and frost free refrigerators.",
                "From cooling problems and ice build-up to noisy compressors and water leakage, our technicians restore your refrigerator to proper working order.",
                "We offer same-day visits for most requests, honest pricing and genuine spare parts for every major brand.",
            ],
            process_title: "Our Refrigerator Repair Process",
            process_intro: "We follow a careful process to restore reliable cooling:",
            steps: [
                "Checking compressor, relay and thermostat",
                "Repairing gas leaks and recharging refrigerant",
                "Fixing defrost systems and ice build-up",
                "Replacing door gaskets and fans",
                "Verifying stable temperatures after repair",
            ],
            note: "Keeping the condenser coils clean and the door seals tight reduces power use and extends your refrigerator's life.",
            cta: "Trust our certified technicians for dependable refrigerator repairs. Contact us today to schedule a visit and protect your groceries.",
        },
    }
}

impl ServicePageDocument {
    /// Bundled default document for a service page.
    pub fn defaults_for(kind: ServiceKind) -> Self {
        let copy = copy_for(kind);
        Self {
            page: kind.hero_section().into(),
            title: kind.display_name().into(),
            video_title: format!("{} Video", kind.display_name().trim_end_matches(" Service")),
            uploaded_video_path: None,
            background_image: HERO_IMAGE.into(),
            service_description: ServiceDescription {
                description: TextList::new(copy.paragraphs),
            },
            gallery_images: vec![HERO_IMAGE.into(), TECHNICIAN_IMAGE.into()],
            repair_process: RepairProcess {
                title: copy.process_title.into(),
                description: copy.process_intro.into(),
                steps: TextList::new(copy.steps),
                note: copy.note.into(),
            },
            final_gallery_images: vec![SERVICE_IMAGE.to_string(); FINAL_GALLERY_LIMIT],
            cta_section: CtaSection {
                text: copy.cta.into(),
            },
            contact_info: ContactInfo::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// The media slot at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeroMedia {
    Video { src: String, title: String },
    Image { src: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairProcessView {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub email_href: String,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceView {
    pub hero_section: String,
    pub hero: HeroMedia,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub gallery: Vec<GalleryImage>,
    pub repair_process: RepairProcessView,
    pub final_gallery: Vec<GalleryImage>,
    pub cta: String,
    pub services: Vec<ServiceLink>,
    pub contact: ContactView,
}

fn gallery(
    media: &MediaResolver,
    images: &[String],
    limit: usize,
    alt: impl Fn(usize) -> String,
) -> Vec<GalleryImage> {
    images
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, src)| GalleryImage {
            src: media.resolve(src),
            alt: alt(i + 1),
        })
        .collect()
}

impl ServicePageDocument {
    /// Build the render-ready view for `page`.
    pub fn view(&self, page: PageKey, media: &MediaResolver) -> ServiceView {
        let hero = match self.uploaded_video_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => HeroMedia::Video {
                src: media.resolve(path),
                title: self.video_title.clone(),
            },
            _ => HeroMedia::Image {
                src: media.resolve(&self.background_image),
                alt: self.title.clone(),
            },
        };

        let subject = self.title.trim_end_matches(" Service").to_string();

        ServiceView {
            hero_section: self.page.clone(),
            hero,
            title: self.title.clone(),
            paragraphs: self.service_description.description.as_slice().to_vec(),
            gallery: gallery(media, &self.gallery_images, GALLERY_LIMIT, |n| {
                format!("{subject} Gallery {n}")
            }),
            repair_process: RepairProcessView {
                title: self.repair_process.title.clone(),
                description: self.repair_process.description.clone(),
                steps: self.repair_process.steps.as_slice().to_vec(),
                note: self.repair_process.note.clone(),
            },
            final_gallery: gallery(media, &self.final_gallery_images, FINAL_GALLERY_LIMIT, |n| {
                format!("Final Gallery {n}")
            }),
            cta: self.cta_section.text.clone(),
            services: site::service_links(Some(page)),
            contact: ContactView {
                phone: self.contact_info.phone.clone(),
                phone_href: site::tel_href(&self.contact_info.phone),
                email: self.contact_info.email.clone(),
                email_href: site::mailto_href(&self.contact_info.email),
                addresses: vec![
                    self.contact_info.address.clone(),
                    site::SECONDARY_ADDRESS.to_string(),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://deccanservices.demovoting.com/uploads";

    fn microwave() -> ServicePageDocument {
        ServicePageDocument::defaults_for(ServiceKind::MicrowaveOven)
    }

    #[test]
    fn microwave_defaults_match_published_copy() {
        let doc = microwave();
        assert_eq!(doc.title, "Microwave Oven Repair Service");
        assert_eq!(doc.page, "MicrowaveOvenRepair");
        assert_eq!(doc.video_title, "Microwave Oven Repair Video");
        assert_eq!(doc.service_description.description.len(), 3);
        assert_eq!(doc.repair_process.steps.len(), 5);
        assert_eq!(doc.contact_info.phone, "+91 9766242424");
    }

    #[test]
    fn every_service_has_distinct_defaults() {
        let titles: Vec<_> = ServiceKind::ALL
            .into_iter()
            .map(|k| ServicePageDocument::defaults_for(k).title)
            .collect();
        assert_eq!(titles.len(), 4);
        for (i, t) in titles.iter().enumerate() {
            assert!(!titles[i + 1..].contains(t));
        }
    }

    #[test]
    fn hero_is_image_without_video() {
        let view = microwave().view(PageKey::MicrowaveOvenRepair, &MediaResolver::new(BASE));
        assert_eq!(
            view.hero,
            HeroMedia::Image {
                src: HERO_IMAGE.into(),
                alt: "Microwave Oven Repair Service".into()
            }
        );
    }

    #[test]
    fn uploaded_video_becomes_hero() {
        let doc = ServicePageDocument {
            uploaded_video_path: Some("videos/oven.mp4".into()),
            ..microwave()
        };
        let view = doc.view(PageKey::MicrowaveOvenRepair, &MediaResolver::new(BASE));
        assert_eq!(
            view.hero,
            HeroMedia::Video {
                src: format!("{BASE}/videos/oven.mp4"),
                title: "Microwave Oven Repair Video".into()
            }
        );
    }

    #[test]
    fn galleries_are_truncated_and_resolved() {
        let doc = ServicePageDocument {
            gallery_images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
            final_gallery_images: (1..=5).map(|i| format!("f{i}.jpg")).collect(),
            ..microwave()
        };
        let view = doc.view(PageKey::MicrowaveOvenRepair, &MediaResolver::new(BASE));
        assert_eq!(view.gallery.len(), GALLERY_LIMIT);
        assert_eq!(view.gallery[1].src, format!("{BASE}/b.jpg"));
        assert_eq!(view.gallery[0].alt, "Microwave Oven Repair Gallery 1");
        assert_eq!(view.final_gallery.len(), FINAL_GALLERY_LIMIT);
        assert_eq!(view.final_gallery[2].alt, "Final Gallery 3");
    }

    #[test]
    fn contact_view_has_links_and_both_addresses() {
        let view = microwave().view(PageKey::MicrowaveOvenRepair, &MediaResolver::new(BASE));
        assert_eq!(view.contact.phone_href, "tel:+919766242424");
        assert_eq!(
            view.contact.email_href,
            "mailto:info@vaishnaviacrepairandservice.co.in"
        );
        assert_eq!(view.contact.addresses.len(), 2);
        assert_eq!(view.contact.addresses[1], site::SECONDARY_ADDRESS);
    }

    #[test]
    fn current_service_is_active_in_menu() {
        let view = microwave().view(PageKey::MicrowaveOvenRepair, &MediaResolver::new(BASE));
        let active: Vec<_> = view.services.iter().filter(|s| s.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, PageKey::MicrowaveOvenRepair);
    }
}

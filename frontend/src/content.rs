use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

static SITE: Lazy<SiteContent> = Lazy::new(|| match SiteContent::from_json(SITE_JSON) {
    Ok(content) => content,
    Err(err) => {
        error!("{}", err);
        SiteContent::default()
    }
});

/// Everything the sections display. Parsed once from the embedded catalogue.
pub fn site() -> &'static SiteContent {
    &SITE
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Star,
    Users,
    Download,
    Clock,
    MapPin,
    Utensils,
    ShoppingCart,
    Coffee,
    Cake,
    Award,
    Shield,
    Zap,
    Heart,
    Truck,
    CheckCircle,
    TrendingUp,
    Store,
    Handshake,
    Phone,
    Mail,
    Instagram,
    Twitter,
    Facebook,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Star => "★",
            Icon::Users => "👥",
            Icon::Download => "⤓",
            Icon::Clock => "◷",
            Icon::MapPin => "⌖",
            Icon::Utensils => "🍴",
            Icon::ShoppingCart => "🛒",
            Icon::Coffee => "☕",
            Icon::Cake => "🍰",
            Icon::Award => "🏅",
            Icon::Shield => "🛡",
            Icon::Zap => "⚡",
            Icon::Heart => "♥",
            Icon::Truck => "🚚",
            Icon::CheckCircle => "✔",
            Icon::TrendingUp => "📈",
            Icon::Store => "🏪",
            Icon::Handshake => "🤝",
            Icon::Phone => "☎",
            Icon::Mail => "✉",
            Icon::Instagram => "IG",
            Icon::Twitter => "X",
            Icon::Facebook => "f",
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub hero_stats: Vec<Metric>,
    pub vendors: Vec<Vendor>,
    pub services: Vec<Offering>,
    pub process_steps: Vec<ProcessStep>,
    pub about: About,
    pub highlights: Vec<Highlight>,
    pub reasons: Vec<Offering>,
    pub achievements: Vec<Metric>,
    pub reviews: Reviews,
    pub stats: Vec<Stat>,
    pub milestones: Vec<Milestone>,
    pub app: AppLinks,
    pub partnership: Partnership,
    pub contact_channels: Vec<ContactChannel>,
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Brand {
    pub primary: String,
    pub secondary: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub email: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metric {
    pub icon: Icon,
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Vendor {
    pub name: String,
    pub category: String,
    pub rating: f32,
    pub delivery_time: String,
    pub image: String,
    pub speciality: String,
}

/// A service or a reason-to-choose card: icon, copy and bullet features.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Offering {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProcessStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub badges: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Reviews {
    pub rating: String,
    pub basis: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub comment: String,
    pub avatar: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Stat {
    pub icon: Icon,
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Milestone {
    pub year: String,
    pub event: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppFeature {
    pub icon: Icon,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppLinks {
    pub features: Vec<AppFeature>,
    pub app_store_url: String,
    pub play_store_url: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PartnerType {
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Partnership {
    pub benefits: Vec<Highlight>,
    pub partner_types: Vec<PartnerType>,
    pub success_story: Quote,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: String,
    pub details: Vec<String>,
    pub action: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogue_parses() {
        let site = SiteContent::from_json(SITE_JSON).expect("site.json should parse");
        assert_eq!(site.nav.len(), 5);
        assert_eq!(site.hero_stats.len(), 3);
        assert_eq!(site.vendors.len(), 6);
        assert_eq!(site.services.len(), 4);
        assert_eq!(site.process_steps.len(), 3);
        assert_eq!(site.highlights.len(), 4);
        assert_eq!(site.reasons.len(), 4);
        assert_eq!(site.achievements.len(), 4);
        assert_eq!(site.reviews.testimonials.len(), 4);
        assert_eq!(site.stats.len(), 4);
        assert_eq!(site.milestones.len(), 4);
        assert_eq!(site.app.features.len(), 3);
        assert_eq!(site.partnership.benefits.len(), 4);
        assert_eq!(site.partnership.partner_types.len(), 4);
        assert_eq!(site.contact_channels.len(), 4);
        assert_eq!(site.socials.len(), 3);
        assert_eq!(
            site.contact_channels[1].href.as_deref(),
            Some("tel:+971501387766")
        );
        assert_eq!(site.contact_channels[0].href, None);
        assert_eq!(site.brand.phone, "+971-50-1387-766");
        assert_eq!(site.services[1].icon, Icon::ShoppingCart);
        assert!(site.reviews.testimonials.iter().all(|t| t.rating <= 5));
        assert!(site.app.app_store_url.starts_with("https://apps.apple.com/"));
    }

    #[test]
    fn nav_targets_are_anchors() {
        assert!(site().nav.iter().all(|item| item.href.starts_with('#')));
    }

    #[test]
    fn malformed_catalogue_is_an_error() {
        let err = SiteContent::from_json("{\"brand\": 1}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(SiteContent::from_json("{}").is_err());
    }
}

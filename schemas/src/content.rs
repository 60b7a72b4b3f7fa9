//! CMS content globals and the `{ "data": … }` read envelope.

use serde::{Deserialize, Serialize};

/// Wrapper shape for global read endpoints: `{ "data": <CMS object> }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// The singleton CMS globals the portal exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalKind {
    Faq,
    Navbar,
    Onboarding,
    LocationBubble,
}

impl GlobalKind {
    /// All globals, in route-listing order.
    pub const ALL: [Self; 4] = [Self::Faq, Self::Navbar, Self::Onboarding, Self::LocationBubble];

    /// CMS slug as it appears in the URL path.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::Navbar => "navbar",
            Self::Onboarding => "onboarding",
            Self::LocationBubble => "locationBubble",
        }
    }

    /// Parse a URL path segment into a known global.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// One FAQ entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// The `faq` global.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

/// One navigation link in the `navbar` global.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// The `navbar` global.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Navbar {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// The `onboarding` global: copy shown to fresh sign-ins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Onboarding {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// The `locationBubble` global: where and when the club plays.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationBubble {
    #[serde(default)]
    pub venue: String,
    #[serde(default, alias = "mapUrl")]
    pub map_url: String,
    #[serde(default)]
    pub blurb: String,
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::system::session::AuthorStamp;

/// Editable static content pages of the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticPageKind {
    Terms,
    Privacy,
}

impl StaticPageKind {
    pub fn slug(&self) -> &'static str {
        match self {
            StaticPageKind::Terms => "terms",
            StaticPageKind::Privacy => "privacy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StaticPageKind::Terms => "Terms & Conditions",
            StaticPageKind::Privacy => "Privacy Policy",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "terms" => Some(StaticPageKind::Terms),
            "privacy" => Some(StaticPageKind::Privacy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticPage {
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStaticPageDto {
    pub slug: String,
    pub content: String,
    #[serde(flatten)]
    pub author: AuthorStamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for kind in [StaticPageKind::Terms, StaticPageKind::Privacy] {
            assert_eq!(StaticPageKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(StaticPageKind::from_slug("careers"), None);
    }
}

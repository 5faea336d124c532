/// Static content of the marketing site footer

use serde::Serialize;

use crate::contact::SUPPORT_WHATSAPP_NUMBER;
use crate::navigation::{
    ABOUT_ROUTE, CONTACT_ROUTE, HOME_ROUTE, LOGIN_ROUTE, PRICING_ROUTE, SERVICES_ROUTE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    /// In-app route handled by the router
    Route(&'static str),
    /// Inert `#` anchor, no destination wired yet
    Placeholder,
}

impl LinkTarget {
    pub fn href(&self) -> &'static str {
        match self {
            LinkTarget::Route(path) => path,
            LinkTarget::Placeholder => "#",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FooterSection {
    Brand,
    QuickLinks,
    Legal,
    Copyright,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "Home", target: LinkTarget::Route(HOME_ROUTE) },
    FooterLink { label: "About Us", target: LinkTarget::Route(ABOUT_ROUTE) },
    FooterLink { label: "Services", target: LinkTarget::Route(SERVICES_ROUTE) },
    FooterLink { label: "Pricing", target: LinkTarget::Route(PRICING_ROUTE) },
    FooterLink { label: "Contact", target: LinkTarget::Route(CONTACT_ROUTE) },
    FooterLink { label: "Login", target: LinkTarget::Route(LOGIN_ROUTE) },
];

pub const LEGAL_LINKS: &[FooterLink] = &[
    FooterLink { label: "Privacy Policy", target: LinkTarget::Placeholder },
    FooterLink { label: "Terms of Service", target: LinkTarget::Placeholder },
    FooterLink { label: "Refund Policy", target: LinkTarget::Placeholder },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterContent {
    pub brand: BrandInfo,
    pub quick_links: &'static [FooterLink],
    pub legal_links: &'static [FooterLink],
    pub copyright: String,
}

impl FooterContent {
    pub fn standard() -> Self {
        Self {
            brand: BrandInfo {
                name: "Tunecast",
                tagline: "Distribute your music to Spotify, Apple Music, JioSaavn and 150+ stores worldwide. Keep your rights, collect your royalties.",
                email: "support@tunecast.in",
                phone: SUPPORT_WHATSAPP_NUMBER,
            },
            quick_links: QUICK_LINKS,
            legal_links: LEGAL_LINKS,
            copyright: "© 2024 Tunecast. All rights reserved.".to_string(),
        }
    }

    pub fn sections(&self) -> [FooterSection; 4] {
        [
            FooterSection::Brand,
            FooterSection::QuickLinks,
            FooterSection::Legal,
            FooterSection::Copyright,
        ]
    }

    /// Link list rendered in a section; empty for brand and copyright.
    pub fn links(&self, section: FooterSection) -> &'static [FooterLink] {
        match section {
            FooterSection::QuickLinks => self.quick_links,
            FooterSection::Legal => self.legal_links,
            FooterSection::Brand | FooterSection::Copyright => &[],
        }
    }

    /// `mailto:` link for the brand email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.brand.email)
    }

    /// `tel:` link for the brand phone number.
    pub fn tel(&self) -> String {
        format!("tel:{}", self.brand.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_sections_in_order() {
        let footer = FooterContent::standard();
        assert_eq!(
            footer.sections(),
            [
                FooterSection::Brand,
                FooterSection::QuickLinks,
                FooterSection::Legal,
                FooterSection::Copyright,
            ]
        );
    }

    #[test]
    fn test_quick_links_point_at_served_routes() {
        // Every route the app registers outside the customer area
        let served = [HOME_ROUTE, ABOUT_ROUTE, SERVICES_ROUTE, PRICING_ROUTE, CONTACT_ROUTE, LOGIN_ROUTE];
        let unserved: Vec<_> = QUICK_LINKS
            .iter()
            .filter(|link| match link.target {
                LinkTarget::Route(path) => !served.contains(&path),
                LinkTarget::Placeholder => true,
            })
            .map(|link| link.target.href())
            .collect();
        assert!(unserved.is_empty(), "quick links without a page: {:?}", unserved);
    }

    #[test]
    fn test_only_link_sections_carry_links() {
        let footer = FooterContent::standard();
        let with_links: Vec<_> = footer
            .sections()
            .into_iter()
            .filter(|section| !footer.links(*section).is_empty())
            .collect();
        assert_eq!(with_links, vec![FooterSection::QuickLinks, FooterSection::Legal]);
        assert_eq!(footer.links(FooterSection::QuickLinks), QUICK_LINKS);
        assert_eq!(footer.links(FooterSection::Legal), LEGAL_LINKS);
    }

    #[test]
    fn test_legal_links_are_placeholders() {
        assert_eq!(LEGAL_LINKS.len(), 3);
        for link in LEGAL_LINKS {
            assert_eq!(link.target, LinkTarget::Placeholder);
            assert_eq!(link.target.href(), "#");
        }
    }

    #[test]
    fn test_contact_hrefs() {
        let footer = FooterContent::standard();
        assert_eq!(footer.mailto(), "mailto:support@tunecast.in");
        assert_eq!(footer.tel(), "tel:+917742789827");
    }

    #[test]
    fn test_standard_is_idempotent() {
        assert_eq!(FooterContent::standard(), FooterContent::standard());
    }
}

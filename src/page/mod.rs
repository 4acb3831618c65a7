//! Page model
//!
//! Every field stands for one target on the portfolio page (an element id, a
//! class shared by several elements, or a document attribute). Loading content
//! fills targets in; anything left unset keeps the layout's own markup, except
//! the hero and about targets which fall back to placeholder copy.

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::{Collection, SiteContent};
use crate::render::collections::render_entry;

pub mod apply;

pub const DEFAULT_HOME_NAME: &str = "Your Name";
pub const DEFAULT_HOME_TITLE: &str = "Your Professional Title";
pub const DEFAULT_HOME_TAGLINE: &str = "Your professional tagline here";
pub const DEFAULT_ABOUT_HTML: &str = "<p>Welcome to my portfolio! Please use the admin panel to add your personal information and content.</p>";

/// Link target with both its href and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// `<title>`
    pub title: Option<String>,
    /// `data-theme` on the root element
    pub theme: Option<String>,
    /// `<meta name="description">`
    pub meta_description: Option<String>,
    /// Every `.site-title` element
    pub site_title: Option<String>,

    /// `#navName`
    pub nav_name: Option<String>,
    /// `#footerName`
    pub footer_name: Option<String>,
    /// Every `mailto:` link
    pub email_link: Option<Link>,
    /// `#contactEmail`
    pub contact_email: Option<String>,
    /// `.profile-image` / `#profileImage` src
    pub profile_image: Option<String>,
    /// Every LinkedIn link href
    pub linkedin_url: Option<String>,
    /// Every GitHub link href
    pub github_url: Option<String>,

    /// `#homeName`
    pub home_name: Option<String>,
    /// `#homeTitle`
    pub home_title: Option<String>,
    /// `#homeTagline`
    pub home_tagline: Option<String>,
    /// `.hero-subtitle`
    pub hero_subtitle: Option<String>,
    /// `.hero-button`
    pub hero_button: Option<Link>,

    /// Inner HTML of `.about-text` / `#aboutDescription`
    pub about_html: Option<String>,

    /// Rendered fragments per enabled collection container, in append order
    pub containers: BTreeMap<Collection, Vec<String>>,
}

impl Page {
    /// Build a page from freshly loaded content
    ///
    /// Every build starts from an empty page; nothing carries over between loads.
    pub fn build(site: &SiteContent, collections: &[Collection]) -> Self {
        let mut page = Page::default();

        if let Some(fields) = &site.personal {
            apply::personal(&mut page, fields);
        }
        if let Some(fields) = &site.hero {
            apply::hero(&mut page, fields);
        }
        if let Some(fields) = &site.about {
            apply::about(&mut page, fields);
        }
        if let Some(fields) = &site.settings {
            apply::settings(&mut page, fields);
        }

        for &collection in collections {
            let fragments = site
                .entries(collection)
                .iter()
                .map(|entry| {
                    if entry.fields.get(collection.title_key()).is_none() {
                        warn!(
                            "{} has no '{}', using the default heading",
                            collection.entry_path(&entry.file),
                            collection.title_key()
                        );
                    }
                    render_entry(collection, &entry.fields)
                })
                .collect();
            page.containers.insert(collection, fragments);
        }

        page.apply_defaults();
        page
    }

    /// Fill hero and about targets that no content reached
    pub fn apply_defaults(&mut self) {
        self.home_name
            .get_or_insert_with(|| DEFAULT_HOME_NAME.to_string());
        self.home_title
            .get_or_insert_with(|| DEFAULT_HOME_TITLE.to_string());
        self.home_tagline
            .get_or_insert_with(|| DEFAULT_HOME_TAGLINE.to_string());
        self.about_html
            .get_or_insert_with(|| DEFAULT_ABOUT_HTML.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::frontmatter;

    #[test]
    fn test_empty_content_gets_defaults() {
        let page = Page::build(&SiteContent::default(), &Collection::ALL);
        assert_eq!(page.home_name.as_deref(), Some(DEFAULT_HOME_NAME));
        assert_eq!(page.home_title.as_deref(), Some(DEFAULT_HOME_TITLE));
        assert_eq!(page.home_tagline.as_deref(), Some(DEFAULT_HOME_TAGLINE));
        assert_eq!(page.about_html.as_deref(), Some(DEFAULT_ABOUT_HTML));
        assert!(page.nav_name.is_none());
        assert_eq!(page.containers.len(), 7);
        assert!(page.containers.values().all(Vec::is_empty));
    }

    #[test]
    fn test_defaults_do_not_override_content() {
        let site = SiteContent {
            hero: Some(frontmatter::parse("---\nheroName: Ada\n---\n")),
            ..SiteContent::default()
        };
        let page = Page::build(&site, &Collection::ALL);
        assert_eq!(page.home_name.as_deref(), Some("Ada"));
        assert_eq!(page.home_title.as_deref(), Some(DEFAULT_HOME_TITLE));
    }

    #[test]
    fn test_entries_rendered_in_order() {
        let mut site = SiteContent::default();
        site.collections.insert(
            Collection::Skills,
            vec![
                Entry {
                    file: "rust.md".to_string(),
                    fields: frontmatter::parse("---\nname: Rust\n---\n"),
                },
                Entry {
                    file: "go.md".to_string(),
                    fields: frontmatter::parse("---\nname: Go\n---\n"),
                },
            ],
        );

        let page = Page::build(&site, &[Collection::Skills]);
        let fragments = &page.containers[&Collection::Skills];
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].contains("<h3>Rust</h3>"));
        assert!(fragments[1].contains("<h3>Go</h3>"));
        assert!(!page.containers.contains_key(&Collection::Awards));
    }
}

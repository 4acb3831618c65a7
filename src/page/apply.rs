//! Map parsed fields onto page targets
//!
//! Fields that are absent or empty leave their targets untouched.

use super::{Link, Page};
use crate::frontmatter::Frontmatter;
use crate::render::markup::inline_markdown;

/// Apply `personal.md`
pub fn personal(page: &mut Page, fields: &Frontmatter) {
    if let Some(name) = fields.get("fullName") {
        page.nav_name = Some(name.to_string());
        page.footer_name = Some(name.to_string());
    }

    if let Some(email) = fields.get("email") {
        page.email_link = Some(Link {
            href: format!("mailto:{}", email),
            text: email.to_string(),
        });
        page.contact_email = Some(email.to_string());
    }

    if let Some(image) = fields.get("profileImage") {
        page.profile_image = Some(image.to_string());
    }

    if let Some(url) = fields.get("linkedin") {
        page.linkedin_url = Some(url.to_string());
    }

    if let Some(url) = fields.get("github") {
        page.github_url = Some(url.to_string());
    }
}

/// Apply `hero.md`
pub fn hero(page: &mut Page, fields: &Frontmatter) {
    if let Some(name) = fields.get("heroName") {
        page.home_name = Some(name.to_string());
    }
    if let Some(title) = fields.get("heroTitle") {
        page.home_title = Some(title.to_string());
    }
    if let Some(tagline) = fields.get("heroTagline") {
        page.home_tagline = Some(tagline.to_string());
    }
    if let Some(subtitle) = fields.get("heroSubtitle") {
        page.hero_subtitle = Some(subtitle.to_string());
    }

    // A button needs both its label and its target.
    if let (Some(text), Some(href)) = (fields.get("heroButtonText"), fields.get("heroButtonUrl")) {
        page.hero_button = Some(Link {
            href: href.to_string(),
            text: text.to_string(),
        });
    }
}

/// Apply `about.md`
pub fn about(page: &mut Page, fields: &Frontmatter) {
    if let Some(text) = fields.get("aboutText") {
        page.about_html = Some(inline_markdown(text));
    }
}

/// Apply `settings.md`
pub fn settings(page: &mut Page, fields: &Frontmatter) {
    if let Some(title) = fields.get("siteTitle") {
        page.title = Some(title.to_string());
        page.site_title = Some(title.to_string());
    }
    if let Some(scheme) = fields.get("colorScheme") {
        page.theme = Some(scheme.to_string());
    }
    if let Some(description) = fields.get("metaDescription") {
        page.meta_description = Some(description.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parse;

    #[test]
    fn test_personal_fills_every_target() {
        let mut page = Page::default();
        personal(
            &mut page,
            &parse(
                "---\nfullName: Ada Lovelace\nemail: ada@example.com\nprofileImage: /img/ada.png\nlinkedin: https://linkedin.com/in/ada\ngithub: https://github.com/ada\n---\n",
            ),
        );

        assert_eq!(page.nav_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(page.footer_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            page.email_link,
            Some(Link {
                href: "mailto:ada@example.com".to_string(),
                text: "ada@example.com".to_string(),
            })
        );
        assert_eq!(page.contact_email.as_deref(), Some("ada@example.com"));
        assert_eq!(page.profile_image.as_deref(), Some("/img/ada.png"));
        assert_eq!(
            page.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/ada")
        );
        assert_eq!(page.github_url.as_deref(), Some("https://github.com/ada"));
    }

    #[test]
    fn test_absent_fields_leave_targets_untouched() {
        let mut page = Page {
            nav_name: Some("Existing".to_string()),
            ..Page::default()
        };
        personal(&mut page, &parse("---\nfullName:\n---\n"));
        assert_eq!(page.nav_name.as_deref(), Some("Existing"));
        assert!(page.email_link.is_none());
    }

    #[test]
    fn test_hero_button_needs_text_and_url() {
        let mut page = Page::default();
        hero(&mut page, &parse("---\nheroButtonText: Contact me\n---\n"));
        assert!(page.hero_button.is_none());

        hero(
            &mut page,
            &parse("---\nheroButtonText: Contact me\nheroButtonUrl: '#contact'\n---\n"),
        );
        assert_eq!(
            page.hero_button,
            Some(Link {
                href: "#contact".to_string(),
                text: "Contact me".to_string(),
            })
        );
    }

    #[test]
    fn test_hero_text_targets() {
        let mut page = Page::default();
        hero(
            &mut page,
            &parse("---\nheroName: Ada\nheroTitle: Analyst\nheroTagline: Numbers first\nheroSubtitle: Since 1843\n---\n"),
        );
        assert_eq!(page.home_name.as_deref(), Some("Ada"));
        assert_eq!(page.home_title.as_deref(), Some("Analyst"));
        assert_eq!(page.home_tagline.as_deref(), Some("Numbers first"));
        assert_eq!(page.hero_subtitle.as_deref(), Some("Since 1843"));
    }

    #[test]
    fn test_about_converts_inline_markdown() {
        let mut page = Page::default();
        about(
            &mut page,
            &parse("---\naboutText: |\n  I write **Rust**.\n\n  Mostly *parsers*.\n---\n"),
        );
        assert_eq!(
            page.about_html.as_deref(),
            Some("<p>I write <strong>Rust</strong>.</p><p>Mostly <em>parsers</em>.</p>")
        );
    }

    #[test]
    fn test_settings_targets() {
        let mut page = Page::default();
        settings(
            &mut page,
            &parse("---\nsiteTitle: Ada's Portfolio\ncolorScheme: dark\nmetaDescription: Analyst and writer\n---\n"),
        );
        assert_eq!(page.title.as_deref(), Some("Ada's Portfolio"));
        assert_eq!(page.site_title.as_deref(), Some("Ada's Portfolio"));
        assert_eq!(page.theme.as_deref(), Some("dark"));
        assert_eq!(page.meta_description.as_deref(), Some("Analyst and writer"));
    }
}

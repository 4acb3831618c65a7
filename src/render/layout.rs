//! Page document layout
//!
//! Renders the full portfolio document from a [`Page`]. Element ids and classes
//! match the targets the content applier fills in, so a stylesheet written for
//! the hand-maintained page keeps working.

use super::markup::escape_html;
use crate::domain::Collection;
use crate::page::{Link, Page};

const DEFAULT_TITLE: &str = "Portfolio";
const STYLESHEET: &str = "styles.css";

/// Render the complete HTML document
pub fn render_document(page: &Page) -> String {
    let title = escape_html(page.title.as_deref().unwrap_or(DEFAULT_TITLE));
    let theme = attr("data-theme", page.theme.as_deref());
    let meta_description = page.meta_description.as_deref().map_or_else(String::new, |d| {
        format!(
            "\n    <meta name=\"description\" content=\"{}\">",
            escape_html(d)
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en"{theme}>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">{meta_description}
    <title>{title}</title>
    <link rel="stylesheet" href="{STYLESHEET}">
</head>
<body>
{nav}
{home}
{about}
{sections}
{contact}
{footer}
</body>
</html>
"#,
        nav = nav(page),
        home = home(page),
        about = about(page),
        sections = collection_sections(page),
        contact = contact(page),
        footer = footer(page),
    )
}

/// ` name="value"` when set
fn attr(name: &str, value: Option<&str>) -> String {
    value.map_or_else(String::new, |v| format!(r#" {}="{}""#, name, escape_html(v)))
}

fn nav(page: &Page) -> String {
    let brand = page
        .nav_name
        .as_deref()
        .or(page.site_title.as_deref())
        .unwrap_or(DEFAULT_TITLE);
    let site_title = page.site_title.as_deref().map_or_else(String::new, |t| {
        format!(
            "\n        <span class=\"site-title\">{}</span>",
            escape_html(t)
        )
    });
    let links: String = page
        .containers
        .keys()
        .map(|c| {
            format!(
                "\n            <li><a href=\"#{}\">{}</a></li>",
                c.as_str(),
                c.heading()
            )
        })
        .collect();

    format!(
        r##"<nav class="navbar">
    <div class="nav-container">
        <a href="#home" class="nav-logo" id="navName">{brand}</a>{site_title}
        <ul class="nav-menu">
            <li><a href="#home">Home</a></li>
            <li><a href="#about">About</a></li>{links}
            <li><a href="#contact">Contact</a></li>
        </ul>
    </div>
</nav>"##,
        brand = escape_html(brand),
    )
}

fn home(page: &Page) -> String {
    let image = page.profile_image.as_deref().map_or_else(String::new, |src| {
        format!(
            "\n        <img id=\"profileImage\" class=\"profile-image\" src=\"{}\" alt=\"Profile photo\">",
            escape_html(src)
        )
    });
    let subtitle = optional_element("p", "hero-subtitle", page.hero_subtitle.as_deref());
    let button = page
        .hero_button
        .as_ref()
        .map_or_else(String::new, |link| {
            format!("\n        {}", anchor(link, "hero-button btn btn-primary"))
        });

    format!(
        r#"<section id="home" class="hero">
    <div class="hero-content">{image}
        <h1 id="homeName">{name}</h1>
        <h2 id="homeTitle">{title}</h2>
        <p id="homeTagline">{tagline}</p>{subtitle}{button}
    </div>
</section>"#,
        name = escape_html(page.home_name.as_deref().unwrap_or_default()),
        title = escape_html(page.home_title.as_deref().unwrap_or_default()),
        tagline = escape_html(page.home_tagline.as_deref().unwrap_or_default()),
    )
}

fn about(page: &Page) -> String {
    // Already HTML: produced by the inline markdown conversion.
    let html = page.about_html.as_deref().unwrap_or_default();
    format!(
        r#"<section id="about" class="about">
    <h2 class="section-title">About</h2>
    <div class="about-text" id="aboutDescription">{html}</div>
</section>"#
    )
}

fn collection_sections(page: &Page) -> String {
    page.containers
        .iter()
        .map(|(collection, fragments)| section(*collection, fragments))
        .collect::<Vec<_>>()
        .join("\n")
}

fn section(collection: Collection, fragments: &[String]) -> String {
    let items: String = fragments
        .iter()
        .map(|fragment| format!("\n{}", indent(fragment, 8)))
        .collect();
    format!(
        r#"<section id="{id}" class="section">
    <h2 class="section-title">{heading}</h2>
    <div id="{container}" class="{id}-list">{items}
    </div>
</section>"#,
        id = collection.as_str(),
        heading = collection.heading(),
        container = collection.container_id(),
    )
}

fn contact(page: &Page) -> String {
    let mut lines = Vec::new();
    if let Some(link) = &page.email_link {
        lines.push(anchor(link, "contact-link"));
    }
    if let Some(email) = &page.contact_email {
        lines.push(format!(
            r#"<span id="contactEmail">{}</span>"#,
            escape_html(email)
        ));
    }
    if let Some(url) = &page.linkedin_url {
        lines.push(format!(
            r#"<a href="{}" target="_blank" class="social-link">LinkedIn</a>"#,
            escape_html(url)
        ));
    }
    if let Some(url) = &page.github_url {
        lines.push(format!(
            r#"<a href="{}" target="_blank" class="social-link">GitHub</a>"#,
            escape_html(url)
        ));
    }

    let body: String = lines.iter().map(|l| format!("\n        {}", l)).collect();
    format!(
        r#"<section id="contact" class="contact">
    <h2 class="section-title">Contact</h2>
    <div class="contact-info">{body}
    </div>
</section>"#
    )
}

fn footer(page: &Page) -> String {
    let name = page.footer_name.as_deref().unwrap_or_default();
    format!(
        r#"<footer class="footer">
    <p>&copy; <span id="footerName">{}</span></p>
</footer>"#,
        escape_html(name)
    )
}

fn optional_element(tag: &str, class: &str, text: Option<&str>) -> String {
    text.map_or_else(String::new, |t| {
        format!(
            "\n        <{tag} class=\"{class}\">{}</{tag}>",
            escape_html(t)
        )
    })
}

fn anchor(link: &Link, class: &str) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        escape_html(&link.href),
        class,
        escape_html(&link.text)
    )
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Per-collection entry templates
//!
//! Each template renders one entry into the fragment appended to its
//! collection's container. Missing fields render as empty text, except the
//! heading which falls back to the collection's generic label.

use super::date::year;
use super::markup::escape_html;
use crate::domain::Collection;
use crate::frontmatter::Frontmatter;

/// Render one entry of `collection`
pub fn render_entry(collection: Collection, fields: &Frontmatter) -> String {
    match collection {
        Collection::Education => education(fields),
        Collection::Skills => skill(fields),
        Collection::Projects => project(fields),
        Collection::Publications => publication(fields),
        Collection::Podcasts => podcast(fields),
        Collection::Videos => video(fields),
        Collection::Awards => award(fields),
    }
}

/// Escaped field value, or `default` when unset
fn text(fields: &Frontmatter, key: &str, default: &str) -> String {
    escape_html(fields.get(key).unwrap_or(default))
}

/// Escaped year of a date field, or `default` when unset
fn year_of(fields: &Frontmatter, key: &str, default: &str) -> String {
    fields
        .get(key)
        .map_or_else(|| escape_html(default), |v| escape_html(&year(v)))
}

/// Button link when `key` is set
fn button(fields: &Frontmatter, key: &str, label: &str) -> String {
    fields.get(key).map_or_else(String::new, |url| {
        format!(
            r#"<a href="{}" target="_blank" class="btn btn-small">{}</a>"#,
            escape_html(url),
            label
        )
    })
}

fn education(fields: &Frontmatter) -> String {
    format!(
        r#"<div class="education-item">
    <div class="education-date">{start} - {end}</div>
    <div class="education-content">
        <h3>{degree}</h3>
        <h4>{institution}</h4>
        <p>{description}</p>
    </div>
</div>"#,
        start = year_of(fields, "startDate", ""),
        end = year_of(fields, "endDate", "Present"),
        degree = text(fields, "degree", "Degree"),
        institution = text(fields, "institution", "Institution"),
        description = text(fields, "description", ""),
    )
}

fn skill(fields: &Frontmatter) -> String {
    format!(
        r#"<div class="skill-item">
    <div class="skill-info">
        <h3>{name}</h3>
        <span class="skill-category">{category}</span>
        <div class="skill-level">{proficiency}</div>
    </div>
</div>"#,
        name = text(fields, "name", "Skill"),
        category = text(fields, "category", ""),
        proficiency = text(fields, "proficiency", ""),
    )
}

fn project(fields: &Frontmatter) -> String {
    let technologies = escape_html(&fields.list("technologies").join(", "));
    format!(
        r#"<div class="project-card">
    <div class="project-content">
        <h3>{title}</h3>
        <div class="project-description">{description}</div>
        <div class="project-tech">{technologies}</div>
        <div class="project-links">
            {url}
            {github}
        </div>
    </div>
</div>"#,
        title = text(fields, "title", "Project"),
        description = text(fields, "description", ""),
        url = button(fields, "url", "View Project"),
        github = button(fields, "github", "GitHub"),
    )
}

fn publication(fields: &Frontmatter) -> String {
    format!(
        r#"<div class="publication-item">
    <div class="publication-content">
        <h3>{title}</h3>
        <div class="publication-journal">{journal}</div>
        <div class="publication-authors">{authors}</div>
        <div class="publication-date">{date}</div>
        <div class="publication-abstract">{abstract_}</div>
        {link}
    </div>
</div>"#,
        title = text(fields, "title", "Publication"),
        journal = text(fields, "journal", ""),
        authors = text(fields, "authors", ""),
        date = year_of(fields, "date", ""),
        abstract_ = text(fields, "abstract", ""),
        link = button(fields, "url", "Read Publication"),
    )
}

fn podcast(fields: &Frontmatter) -> String {
    format!(
        r#"<div class="podcast-item">
    <div class="podcast-content">
        <h3>{title}</h3>
        <div class="podcast-show">{show}</div>
        <div class="podcast-date">{date}</div>
        <div class="podcast-description">{description}</div>
        {link}
    </div>
</div>"#,
        title = text(fields, "title", "Podcast"),
        show = text(fields, "show", ""),
        date = year_of(fields, "date", ""),
        description = text(fields, "description", ""),
        link = button(fields, "url", "Listen"),
    )
}

fn video(fields: &Frontmatter) -> String {
    format!(
        r#"<div class="video-item">
    <div class="video-content">
        <h3>{title}</h3>
        <div class="video-platform">{platform}</div>
        <div class="video-date">{date}</div>
        <div class="video-description">{description}</div>
        {link}
    </div>
</div>"#,
        title = text(fields, "title", "Video"),
        platform = text(fields, "platform", ""),
        date = year_of(fields, "date", ""),
        description = text(fields, "description", ""),
        link = button(fields, "url", "Watch"),
    )
}

fn award(fields: &Frontmatter) -> String {
    format!(
        r#"<div class="award-item">
    <div class="award-content">
        <h3>{title}</h3>
        <div class="award-organization">{organization}</div>
        <div class="award-date">{date}</div>
        <div class="award-category">{category}</div>
        <div class="award-description">{description}</div>
    </div>
</div>"#,
        title = text(fields, "title", "Award"),
        organization = text(fields, "organization", ""),
        date = year_of(fields, "date", ""),
        category = text(fields, "category", ""),
        description = text(fields, "description", ""),
    )
}

//! Template view models built from domain entities.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Blog, Domain, ProjectWithReviews, Review, Settings};

pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

pub struct SettingsView {
    pub site_name: String,
    pub tagline: String,
    pub mission_statement: String,
    pub contact_email: String,
    pub social: Vec<SocialLink>,
}

impl From<Settings> for SettingsView {
    fn from(s: Settings) -> Self {
        let social = [
            ("Twitter", s.social_media.twitter),
            ("LinkedIn", s.social_media.linkedin),
            ("GitHub", s.social_media.github),
            ("Facebook", s.social_media.facebook),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| SocialLink { label, url }))
        .collect();

        Self {
            site_name: s.site_name,
            tagline: s.tagline,
            mission_statement: s.mission_statement,
            contact_email: s.contact_email,
            social,
        }
    }
}

pub struct DomainCard {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub has_active_projects: bool,
}

impl From<Domain> for DomainCard {
    fn from(d: Domain) -> Self {
        Self {
            name: d.name,
            description: d.description,
            icon: d.icon,
            has_active_projects: d.has_active_projects,
        }
    }
}

pub struct ReviewCard {
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub rating: i16,
    pub stars: String,
    pub text: String,
}

impl From<Review> for ReviewCard {
    fn from(r: Review) -> Self {
        Self {
            stars: stars(r.rating),
            name: r.name,
            role: r.role,
            company: r.company,
            rating: r.rating,
            text: r.review,
        }
    }
}

pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub reviews: Vec<ReviewCard>,
}

impl From<ProjectWithReviews> for ProjectCard {
    fn from(p: ProjectWithReviews) -> Self {
        let ProjectWithReviews { project, reviews } = p;
        Self {
            title: project.title,
            description: project.description,
            technologies: project.technologies,
            image_url: project.image_url,
            github_url: project.github_url,
            live_url: project.live_url,
            featured: project.featured,
            reviews: reviews.into_iter().map(ReviewCard::from).collect(),
        }
    }
}

pub struct PostView {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published_on: Option<String>,
    /// Content split on blank lines; each entry becomes one escaped `<p>`.
    pub paragraphs: Vec<String>,
}

impl From<Blog> for PostView {
    fn from(b: Blog) -> Self {
        Self {
            paragraphs: paragraphs(&b.content),
            published_on: b.published_at.map(format_date),
            title: b.title,
            slug: b.slug,
            excerpt: b.excerpt,
            author: b.author,
            cover_image: b.cover_image,
            tags: b.tags,
        }
    }
}

/// Five-star bar, e.g. `★★★★☆` for 4.
pub fn stars(rating: i16) -> String {
    let filled = rating.clamp(0, 5) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

fn paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

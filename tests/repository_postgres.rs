//! PostgreSQL repository tests. Need `DATABASE_URL`; run with `cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;

use yggrasoft_site::domain::entities::{
    ContactStatus, NewBlog, NewContact, NewDomain, NewProject, NewReview, NewSettings,
    SocialMedia,
};
use yggrasoft_site::domain::repositories::{
    BlogRepository, ContactRepository, DomainRepository, NewsletterRepository, ProjectRepository,
    ReviewRepository, SettingsRepository,
};
use yggrasoft_site::error::AppError;
use yggrasoft_site::infrastructure::persistence::{
    PgBlogRepository, PgContactRepository, PgDomainRepository, PgNewsletterRepository,
    PgProjectRepository, PgReviewRepository, PgSettingsRepository,
};

fn new_domain(slug: &str, order: i32, is_active: bool) -> NewDomain {
    NewDomain {
        name: slug.to_uppercase(),
        slug: slug.to_string(),
        description: "d".repeat(60),
        icon: "FaLeaf".to_string(),
        has_active_projects: false,
        order,
        is_active,
    }
}

fn new_blog(slug: &str, published: bool) -> NewBlog {
    NewBlog {
        title: slug.to_string(),
        slug: slug.to_string(),
        excerpt: "Excerpt".to_string(),
        content: "Content".to_string(),
        cover_image: None,
        author: "Yggrasoft Labs".to_string(),
        tags: vec!["rust".to_string()],
        is_published: published,
        published_at: published.then(chrono::Utc::now),
    }
}

// ─── DOMAINS ─────────────────────────────────────────────────────────────────

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_domain_list_filters_and_orders(pool: PgPool) {
    let repo = PgDomainRepository::new(Arc::new(pool));

    repo.create(new_domain("b", 2, true)).await.unwrap();
    repo.create(new_domain("a", 1, true)).await.unwrap();
    repo.create(new_domain("off", 0, false)).await.unwrap();

    let active: Vec<String> = repo
        .list(true)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.slug)
        .collect();
    assert_eq!(active, ["a", "b"]);
    assert_eq!(repo.list(false).await.unwrap().len(), 3);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_domain_duplicate_slug_conflicts(pool: PgPool) {
    let repo = PgDomainRepository::new(Arc::new(pool));

    repo.create(new_domain("tech", 1, true)).await.unwrap();
    let err = repo.create(new_domain("tech", 2, true)).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_domain_replace_all(pool: PgPool) {
    let repo = PgDomainRepository::new(Arc::new(pool));

    repo.create(new_domain("old", 1, true)).await.unwrap();
    let created = repo
        .replace_all(vec![new_domain("x", 1, true), new_domain("y", 2, true)])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    let slugs: Vec<String> = repo
        .list(false)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.slug)
        .collect();
    assert_eq!(slugs, ["x", "y"]);
}

// ─── SETTINGS ────────────────────────────────────────────────────────────────

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_settings_upsert_keeps_single_row(pool: PgPool) {
    let repo = PgSettingsRepository::new(Arc::new(pool.clone()));
    assert!(repo.get().await.unwrap().is_none());

    for name in ["First", "Second"] {
        repo.upsert(NewSettings {
            site_name: name.to_string(),
            tagline: "Tagline".to_string(),
            mission_statement: "Mission".to_string(),
            contact_email: "contact@yggrasoft.com".to_string(),
            social_media: SocialMedia {
                github: Some("https://github.com/yggrasoft".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    }

    let stored = repo.get().await.unwrap().unwrap();
    assert_eq!(stored.site_name, "Second");
    assert_eq!(
        stored.social_media.github.as_deref(),
        Some("https://github.com/yggrasoft")
    );

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

// ─── CONTACTS / NEWSLETTER ───────────────────────────────────────────────────

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_contact_status_update(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let contact = repo
        .create(NewContact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: None,
            message: "Hello there, long enough.".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(contact.status, ContactStatus::New);

    let updated = repo
        .update_status(contact.id, ContactStatus::Archived)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ContactStatus::Archived);

    assert!(repo.update_status(9999, ContactStatus::Read).await.unwrap().is_none());
    assert!(repo.delete(contact.id).await.unwrap());
    assert!(!repo.delete(contact.id).await.unwrap());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_newsletter_email_unique(pool: PgPool) {
    let repo = PgNewsletterRepository::new(Arc::new(pool));

    let mut subscriber = repo.create("reader@example.com").await.unwrap();
    let err = repo.create("reader@example.com").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    subscriber.deactivate(chrono::Utc::now());
    let saved = repo.update(&subscriber).await.unwrap();
    assert!(!saved.is_active);
    assert!(saved.unsubscribed_at.is_some());

    let found = repo.find_by_email("reader@example.com").await.unwrap().unwrap();
    assert!(!found.is_active);
}

// ─── BLOGS ───────────────────────────────────────────────────────────────────

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_blog_published_filter_and_slug_lookup(pool: PgPool) {
    let repo = PgBlogRepository::new(Arc::new(pool));

    repo.create(new_blog("live", true)).await.unwrap();
    repo.create(new_blog("draft", false)).await.unwrap();

    assert_eq!(repo.list(true).await.unwrap().len(), 1);
    assert_eq!(repo.list(false).await.unwrap().len(), 2);

    let draft = repo.find_by_slug("draft").await.unwrap().unwrap();
    assert!(!draft.is_published);
    assert_eq!(draft.tags, ["rust"]);

    let err = repo.create(new_blog("live", true)).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

// ─── PROJECTS / REVIEWS ──────────────────────────────────────────────────────

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_reviews_for_projects_active_only(pool: PgPool) {
    let pool = Arc::new(pool);
    let projects = PgProjectRepository::new(pool.clone());
    let reviews = PgReviewRepository::new(pool);

    let project = projects
        .create(NewProject {
            title: "Field Sense".to_string(),
            description: "Irrigation sensors".to_string(),
            technologies: vec!["Rust".to_string()],
            image_url: None,
            github_url: None,
            live_url: None,
            featured: true,
            order: 0,
            is_active: true,
        })
        .await
        .unwrap();

    for is_active in [true, false] {
        reviews
            .create(NewReview {
                name: "Grace".to_string(),
                role: "CTO".to_string(),
                company: None,
                rating: 5,
                review: "Great".to_string(),
                avatar: None,
                project_id: Some(project.id),
                order: 0,
                is_active,
            })
            .await
            .unwrap();
    }

    let attached = reviews.list_active_for_projects(&[project.id]).await.unwrap();
    assert_eq!(attached.len(), 1);
    assert!(attached[0].is_active);

    assert!(projects.delete(project.id).await.unwrap());
    let orphaned = reviews.list(false).await.unwrap();
    assert_eq!(orphaned.len(), 2);
    assert!(orphaned.iter().all(|r| r.project_id == Some(project.id)));
}

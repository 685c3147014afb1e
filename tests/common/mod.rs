#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use yggrasoft_site::domain::entities::{
    Blog, Contact, ContactStatus, Domain, NewBlog, NewContact, NewDomain, NewProject, NewReview,
    NewSettings, Project, Review, Settings, Subscriber,
};
use yggrasoft_site::domain::repositories::{
    BlogRepository, ContactRepository, DomainRepository, NewsletterRepository, ProjectRepository,
    ReviewRepository, SettingsRepository,
};
use yggrasoft_site::error::AppError;
use yggrasoft_site::infrastructure::mail::{MailError, Mailer, OutgoingEmail};
use yggrasoft_site::routes::app_router;
use yggrasoft_site::state::{AppState, Repositories, StateOptions};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse";

/// Rows plus the next id, like a table with a `BIGSERIAL` key.
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn conflict_slug() -> AppError {
    AppError::conflict("Slug is already in use")
}

// ─── Domains ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryDomains(Mutex<Table<Domain>>);

#[async_trait]
impl DomainRepository for MemoryDomains {
    async fn create(&self, new_domain: NewDomain) -> Result<Domain, AppError> {
        let mut table = self.0.lock().unwrap();
        if table.rows.iter().any(|d| d.slug == new_domain.slug) {
            return Err(conflict_slug());
        }
        let now = Utc::now();
        let domain = Domain {
            id: table.next_id(),
            name: new_domain.name,
            slug: new_domain.slug,
            description: new_domain.description,
            icon: new_domain.icon,
            has_active_projects: new_domain.has_active_projects,
            order: new_domain.order,
            is_active: new_domain.is_active,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(domain.clone());
        Ok(domain)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Domain>, AppError> {
        Ok(self.0.lock().unwrap().rows.iter().find(|d| d.id == id).cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Domain>, AppError> {
        let mut domains: Vec<Domain> = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|d| !only_active || d.is_active)
            .cloned()
            .collect();
        domains.sort_by_key(|d| (d.order, d.id));
        Ok(domains)
    }

    async fn update(&self, domain: &Domain) -> Result<Domain, AppError> {
        let mut table = self.0.lock().unwrap();
        if table
            .rows
            .iter()
            .any(|d| d.id != domain.id && d.slug == domain.slug)
        {
            return Err(conflict_slug());
        }
        let row = table
            .rows
            .iter_mut()
            .find(|d| d.id == domain.id)
            .ok_or_else(|| AppError::not_found("Domain not found"))?;
        *row = Domain {
            updated_at: Utc::now(),
            ..domain.clone()
        };
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.0.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|d| d.id != id);
        Ok(table.rows.len() != before)
    }

    async fn replace_all(&self, domains: Vec<NewDomain>) -> Result<Vec<Domain>, AppError> {
        self.0.lock().unwrap().rows.clear();
        let mut created = Vec::with_capacity(domains.len());
        for domain in domains {
            created.push(self.create(domain).await?);
        }
        Ok(created)
    }
}

// ─── Settings ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemorySettings(Mutex<Option<Settings>>);

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn get(&self) -> Result<Option<Settings>, AppError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn upsert(&self, settings: NewSettings) -> Result<Settings, AppError> {
        let stored = Settings {
            site_name: settings.site_name,
            tagline: settings.tagline,
            mission_statement: settings.mission_statement,
            contact_email: settings.contact_email,
            social_media: settings.social_media,
            updated_at: Some(Utc::now()),
        };
        *self.0.lock().unwrap() = Some(stored.clone());
        Ok(stored)
    }
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryContacts(Mutex<Table<Contact>>);

impl MemoryContacts {
    pub fn count(&self) -> usize {
        self.0.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ContactRepository for MemoryContacts {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let mut table = self.0.lock().unwrap();
        let now = Utc::now();
        let contact = Contact {
            id: table.next_id(),
            name: new_contact.name,
            email: new_contact.email,
            subject: new_contact.subject,
            message: new_contact.message,
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(self.0.lock().unwrap().rows.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let mut contacts = self.0.lock().unwrap().rows.clone();
        contacts.reverse();
        Ok(contacts)
    }

    async fn update_status(
        &self,
        id: i64,
        status: ContactStatus,
    ) -> Result<Option<Contact>, AppError> {
        let mut table = self.0.lock().unwrap();
        Ok(table.rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.status = status;
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.0.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        Ok(table.rows.len() != before)
    }
}

// ─── Newsletter ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryNewsletter(Mutex<Table<Subscriber>>);

impl MemoryNewsletter {
    pub fn find(&self, email: &str) -> Option<Subscriber> {
        self.0
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|s| s.email == email)
            .cloned()
    }
}

#[async_trait]
impl NewsletterRepository for MemoryNewsletter {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError> {
        Ok(self.find(email))
    }

    async fn create(&self, email: &str) -> Result<Subscriber, AppError> {
        let mut table = self.0.lock().unwrap();
        if table.rows.iter().any(|s| s.email == email) {
            return Err(AppError::conflict("Email is already registered"));
        }
        let now = Utc::now();
        let subscriber = Subscriber {
            id: table.next_id(),
            email: email.to_string(),
            is_active: true,
            subscribed_at: now,
            unsubscribed_at: None,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn update(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        let mut table = self.0.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|s| s.id == subscriber.id)
            .ok_or_else(|| AppError::not_found("Subscriber not found"))?;
        *row = subscriber.clone();
        Ok(row.clone())
    }

    async fn list(&self) -> Result<Vec<Subscriber>, AppError> {
        Ok(self.0.lock().unwrap().rows.clone())
    }
}

// ─── Blogs ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryBlogs(Mutex<Table<Blog>>);

#[async_trait]
impl BlogRepository for MemoryBlogs {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let mut table = self.0.lock().unwrap();
        if table.rows.iter().any(|b| b.slug == new_blog.slug) {
            return Err(conflict_slug());
        }
        let now = Utc::now();
        let blog = Blog {
            id: table.next_id(),
            title: new_blog.title,
            slug: new_blog.slug,
            excerpt: new_blog.excerpt,
            content: new_blog.content,
            cover_image: new_blog.cover_image,
            author: new_blog.author,
            tags: new_blog.tags,
            is_published: new_blog.is_published,
            published_at: new_blog.published_at,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(blog.clone());
        Ok(blog)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        Ok(self.0.lock().unwrap().rows.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, AppError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|b| b.slug == slug)
            .cloned())
    }

    async fn list(&self, published_only: bool) -> Result<Vec<Blog>, AppError> {
        let mut blogs: Vec<Blog> = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|b| !published_only || b.is_published)
            .cloned()
            .collect();
        blogs.reverse();
        Ok(blogs)
    }

    async fn update(&self, blog: &Blog) -> Result<Blog, AppError> {
        let mut table = self.0.lock().unwrap();
        if table
            .rows
            .iter()
            .any(|b| b.id != blog.id && b.slug == blog.slug)
        {
            return Err(conflict_slug());
        }
        let row = table
            .rows
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or_else(|| AppError::not_found("Blog not found"))?;
        *row = blog.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.0.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|b| b.id != id);
        Ok(table.rows.len() != before)
    }
}

// ─── Projects ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryProjects(Mutex<Table<Project>>);

#[async_trait]
impl ProjectRepository for MemoryProjects {
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError> {
        let mut table = self.0.lock().unwrap();
        let now = Utc::now();
        let project = Project {
            id: table.next_id(),
            title: new_project.title,
            description: new_project.description,
            technologies: new_project.technologies,
            image_url: new_project.image_url,
            github_url: new_project.github_url,
            live_url: new_project.live_url,
            featured: new_project.featured,
            order: new_project.order,
            is_active: new_project.is_active,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        Ok(self.0.lock().unwrap().rows.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| !only_active || p.is_active)
            .cloned()
            .collect();
        projects.sort_by_key(|p| (p.order, p.id));
        Ok(projects)
    }

    async fn update(&self, project: &Project) -> Result<Project, AppError> {
        let mut table = self.0.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| AppError::not_found("Project not found"))?;
        *row = project.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.0.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok(table.rows.len() != before)
    }
}

// ─── Reviews ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryReviews(Mutex<Table<Review>>);

#[async_trait]
impl ReviewRepository for MemoryReviews {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let mut table = self.0.lock().unwrap();
        let now = Utc::now();
        let review = Review {
            id: table.next_id(),
            name: new_review.name,
            role: new_review.role,
            company: new_review.company,
            rating: new_review.rating,
            review: new_review.review,
            avatar: new_review.avatar,
            project_id: new_review.project_id,
            order: new_review.order,
            is_active: new_review.is_active,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        Ok(self.0.lock().unwrap().rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Review>, AppError> {
        let mut reviews: Vec<Review> = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|r| !only_active || r.is_active)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| (r.order, r.id));
        Ok(reviews)
    }

    async fn list_active_for_projects(
        &self,
        project_ids: &[i64],
    ) -> Result<Vec<Review>, AppError> {
        let mut reviews: Vec<Review> = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|r| r.is_active && r.project_id.is_some_and(|id| project_ids.contains(&id)))
            .cloned()
            .collect();
        reviews.sort_by_key(|r| (r.order, r.id));
        Ok(reviews)
    }

    async fn update(&self, review: &Review) -> Result<Review, AppError> {
        let mut table = self.0.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.id == review.id)
            .ok_or_else(|| AppError::not_found("Review not found"))?;
        *row = review.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.0.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() != before)
    }
}

// ─── Mail ────────────────────────────────────────────────────────────────────

/// Records every email; with `failing` set, every send errors after recording.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub failing: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.failing {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

// ─── App ─────────────────────────────────────────────────────────────────────

/// A test server over in-memory storage, with handles to inspect it.
pub struct TestApp {
    pub server: TestServer,
    pub domains: Arc<MemoryDomains>,
    pub settings: Arc<MemorySettings>,
    pub contacts: Arc<MemoryContacts>,
    pub newsletter: Arc<MemoryNewsletter>,
    pub blogs: Arc<MemoryBlogs>,
    pub projects: Arc<MemoryProjects>,
    pub reviews: Arc<MemoryReviews>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn test_options() -> StateOptions {
    StateOptions {
        admin_username: ADMIN_USERNAME.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        token_signing_secret: "test-signing-secret-with-enough-length".to_string(),
        token_ttl: chrono::Duration::hours(24),
        contact_email: "contact@yggrasoft.com".to_string(),
        base_url: "http://localhost:5000".to_string(),
        mail_timeout: Duration::from_secs(1),
        rate_limit_window: Duration::from_secs(15 * 60),
        rate_limit_max_requests: 1000,
        behind_proxy: false,
        expose_error_detail: false,
    }
}

pub fn test_app() -> TestApp {
    test_app_with(RecordingMailer::default(), test_options())
}

pub fn test_app_with(mailer: RecordingMailer, options: StateOptions) -> TestApp {
    let domains = Arc::new(MemoryDomains::default());
    let settings = Arc::new(MemorySettings::default());
    let contacts = Arc::new(MemoryContacts::default());
    let newsletter = Arc::new(MemoryNewsletter::default());
    let blogs = Arc::new(MemoryBlogs::default());
    let projects = Arc::new(MemoryProjects::default());
    let reviews = Arc::new(MemoryReviews::default());
    let mailer = Arc::new(mailer);

    let repos = Repositories {
        domains: domains.clone(),
        settings: settings.clone(),
        contacts: contacts.clone(),
        newsletter: newsletter.clone(),
        blogs: blogs.clone(),
        projects: projects.clone(),
        reviews: reviews.clone(),
    };

    let state = AppState::new(repos, mailer.clone(), options);
    let server = TestServer::new(app_router(state)).unwrap();

    TestApp {
        server,
        domains,
        settings,
        contacts,
        newsletter,
        blogs,
        projects,
        reviews,
        mailer,
    }
}

impl TestApp {
    /// Logs in as the admin and returns the bearer token.
    pub async fn admin_token(&self) -> String {
        let response = self
            .server
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD,
            }))
            .await;
        response.assert_status_ok();
        response.json::<Value>()["token"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

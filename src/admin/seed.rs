//! Stock content installed by `admin seed`.

use crate::domain::entities::{NewDomain, NewSettings, SocialMedia};

fn domain(
    name: &str,
    slug: &str,
    description: &str,
    icon: &str,
    has_active_projects: bool,
    order: i32,
) -> NewDomain {
    NewDomain {
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        has_active_projects,
        order,
        is_active: true,
    }
}

/// The six realms shown on a fresh site, in display order.
pub fn stock_domains() -> Vec<NewDomain> {
    vec![
        domain(
            "Technology",
            "technology",
            "Pioneering innovative software solutions and digital platforms that transform how \
             businesses operate. From AI-powered applications to blockchain implementations, we \
             develop cutting-edge technology that solves real-world problems and drives digital \
             transformation across industries.",
            "FaLaptopCode",
            true,
            1,
        ),
        domain(
            "Agriculture",
            "agriculture",
            "Revolutionizing farming through smart agriculture solutions and sustainable \
             practices. We combine IoT sensors, data analytics, and modern farming techniques to \
             increase crop yields, optimize resource usage, and promote environmentally friendly \
             agricultural methods that feed communities.",
            "FaSeedling",
            true,
            2,
        ),
        domain(
            "Education",
            "education",
            "Empowering learners through accessible, innovative educational platforms and \
             programs. We create digital learning environments, develop curriculum, and provide \
             resources that make quality education available to everyone, bridging gaps and \
             fostering lifelong learning opportunities.",
            "FaGraduationCap",
            false,
            3,
        ),
        domain(
            "Stock Markets",
            "stock-markets",
            "Developing intelligent trading platforms and financial analysis tools that \
             democratize investment opportunities. Our solutions provide real-time market \
             insights, algorithmic trading capabilities, and risk management tools that help \
             investors make informed decisions in dynamic markets.",
            "FaChartLine",
            true,
            4,
        ),
        domain(
            "Job Markets",
            "job-markets",
            "Connecting talent with opportunity through innovative recruitment and career \
             development platforms. We build systems that match skills with needs, provide career \
             guidance, and create pathways for professional growth, helping individuals and \
             organizations thrive together.",
            "FaBriefcase",
            false,
            5,
        ),
        domain(
            "Healthcare",
            "healthcare",
            "Advancing medical care through digital health solutions and telemedicine platforms. \
             We develop patient management systems, health monitoring applications, and medical \
             data analytics tools that improve healthcare delivery, enhance patient outcomes, and \
             make quality care more accessible.",
            "FaHeartbeat",
            true,
            6,
        ),
    ]
}

pub fn stock_settings() -> NewSettings {
    NewSettings {
        site_name: "Yggrasoft Labs".to_string(),
        tagline: "Connecting Realms of Innovation".to_string(),
        mission_statement: "At Yggrasoft Labs, we are dedicated to developing, funding, and \
             deploying real-world solutions across multiple domains. Inspired by Yggdrasil, the \
             World Tree from Norse mythology, we connect different realms of innovation to create \
             sustainable impact in technology, agriculture, education, finance, employment, and \
             healthcare."
            .to_string(),
        contact_email: "contact@yggrasoft.com".to_string(),
        social_media: SocialMedia {
            twitter: Some("https://twitter.com/yggrasoftlabs".to_string()),
            linkedin: Some("https://linkedin.com/company/yggrasoft-labs".to_string()),
            github: Some("https://github.com/yggrasoft-labs".to_string()),
            facebook: None,
        },
    }
}

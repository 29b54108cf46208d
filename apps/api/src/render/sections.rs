//! One renderer per part of the portfolio page.
//!
//! Optional sections return `None` when their data is absent or empty so the
//! document leaves no trace of them.

use crate::models::portfolio::{
    non_empty, present, Education, Experience, PortfolioData, Project, Skill,
};
use crate::render::escape::{
    escape_html, escape_image_url, escape_url, map_search_href, mailto_href, tel_href,
};
use crate::render::styles::PORTFOLIO_CSS;

const DEFAULT_NAME: &str = "Your Name";
const DEFAULT_TITLE: &str = "Professional Title";
const DEFAULT_PAGE_NAME: &str = "Portfolio";
const DEFAULT_PROFILE_IMAGE: &str = "https://via.placeholder.com/180x180?text=Profile";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";
const OPEN_END_DATE: &str = "Present";

/// `<head>` with page title, icon font and the embedded stylesheet.
pub fn render_head(data: &PortfolioData) -> String {
    let page_name = present(&data.name).unwrap_or(DEFAULT_PAGE_NAME);
    let mut html = String::from("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <title>{} - Portfolio</title>\n",
        escape_html(page_name)
    ));
    html.push_str(&format!(
        "    <link href=\"{FONT_AWESOME_CSS}\" rel=\"stylesheet\">\n"
    ));
    html.push_str("    <style>\n");
    html.push_str(PORTFOLIO_CSS);
    html.push_str("\n    </style>\n");
    html.push_str("</head>\n");
    html
}

/// Header block: avatar, name, title and contact links. Always rendered.
pub fn render_header(data: &PortfolioData) -> String {
    let image = present(&data.profile_image);
    let header_class = if image.is_some() {
        "header"
    } else {
        "header no-image"
    };

    let mut html = format!("<div class=\"{header_class}\" id=\"portfolioHeader\">\n");
    html.push_str("<div class=\"header-content\">\n");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"Profile\" class=\"profile-img\">\n",
        image.map_or_else(|| DEFAULT_PROFILE_IMAGE.to_string(), escape_image_url)
    ));
    html.push_str(&format!(
        "<h1 class=\"name\">{}</h1>\n",
        escape_html(present(&data.name).unwrap_or(DEFAULT_NAME))
    ));
    html.push_str(&format!(
        "<p class=\"title\">{}</p>\n",
        escape_html(present(&data.title).unwrap_or(DEFAULT_TITLE))
    ));
    html.push_str("<div class=\"contact-info\">\n");
    html.push_str(&render_contact_links(data));
    html.push_str("</div>\n");
    html.push_str("</div>\n");
    html.push_str("</div>\n");
    html
}

fn render_contact_links(data: &PortfolioData) -> String {
    let mut html = String::new();
    if let Some(phone) = present(&data.phone) {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"contact-item phone\" title=\"Click to call\"><i class=\"fas fa-phone\"></i> {}</a>\n",
            tel_href(phone),
            escape_html(phone)
        ));
    }
    if let Some(email) = present(&data.email) {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"contact-item email\" title=\"Click to send email\"><i class=\"fas fa-envelope\"></i> {}</a>\n",
            mailto_href(email),
            escape_html(email)
        ));
    }
    if let Some(location) = present(&data.location) {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"contact-item location\" title=\"Click to view on Google Maps\"><i class=\"fas fa-map-marker-alt\"></i> {}</a>\n",
            map_search_href(location),
            escape_html(location)
        ));
    }
    html
}

fn section(title: &str, body: &str) -> String {
    format!(
        "<div class=\"section\">\n<h2 class=\"section-title\">{title}</h2>\n{body}</div>\n"
    )
}

fn text(field: &Option<String>) -> String {
    field.as_deref().map(escape_html).unwrap_or_default()
}

fn date_range(start: &Option<String>, end: &Option<String>) -> String {
    format!(
        "{} - {}",
        text(start),
        escape_html(present(end).unwrap_or(OPEN_END_DATE))
    )
}

pub fn render_about(data: &PortfolioData) -> Option<String> {
    let about = present(&data.about)?;
    Some(section(
        "About Me",
        &format!("<p class=\"about-text\">{}</p>\n", escape_html(about)),
    ))
}

pub fn render_skills(data: &PortfolioData) -> Option<String> {
    let skills = non_empty(&data.skills)?;
    let mut body = String::from("<div class=\"skills-grid\">\n");
    for skill in skills {
        body.push_str(&render_skill(skill));
    }
    body.push_str("</div>\n");
    Some(section("Skills", &body))
}

fn render_skill(skill: &Skill) -> String {
    format!(
        "<div class=\"skill-item\">\n<div class=\"skill-name\">{}</div>\n<div class=\"skill-level\">{}</div>\n</div>\n",
        text(&skill.name),
        text(&skill.level)
    )
}

pub fn render_projects(data: &PortfolioData) -> Option<String> {
    let projects = non_empty(&data.projects)?;
    let mut body = String::from("<div class=\"projects-grid\">\n");
    for project in projects {
        body.push_str(&render_project(project));
    }
    body.push_str("</div>\n");
    Some(section("Projects", &body))
}

fn render_project(project: &Project) -> String {
    let mut html = String::from("<div class=\"project-card\">\n");
    html.push_str(&format!(
        "<h3 class=\"project-title\">{}</h3>\n",
        text(&project.title)
    ));
    html.push_str(&format!(
        "<p class=\"project-description\">{}</p>\n",
        text(&project.description)
    ));
    if let Some(technologies) = non_empty(&project.technologies) {
        html.push_str("<div class=\"project-tech\">\n");
        for tech in technologies {
            html.push_str(&format!(
                "<span class=\"tech-tag\">{}</span>\n",
                escape_html(tech)
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

pub fn render_experience(data: &PortfolioData) -> Option<String> {
    let experience = non_empty(&data.experience)?;
    let body: String = experience.iter().map(render_experience_item).collect();
    Some(section("Experience", &body))
}

fn render_experience_item(exp: &Experience) -> String {
    timeline_item(
        &text(&exp.title),
        &text(&exp.company),
        &date_range(&exp.start_date, &exp.end_date),
        &text(&exp.description),
    )
}

pub fn render_education(data: &PortfolioData) -> Option<String> {
    let education = non_empty(&data.education)?;
    let body: String = education.iter().map(render_education_item).collect();
    Some(section("Education", &body))
}

fn render_education_item(edu: &Education) -> String {
    timeline_item(
        &text(&edu.degree),
        &text(&edu.institution),
        &date_range(&edu.start_date, &edu.end_date),
        &text(&edu.description),
    )
}

// Experience and education share the timeline markup.
fn timeline_item(heading: &str, organisation: &str, dates: &str, description: &str) -> String {
    format!(
        "<div class=\"experience-item\">\n\
         <h3 class=\"experience-title\">{heading}</h3>\n\
         <p class=\"experience-company\">{organisation}</p>\n\
         <p class=\"experience-date\">{dates}</p>\n\
         <p class=\"experience-description\">{description}</p>\n\
         </div>\n"
    )
}

pub fn render_social_links(data: &PortfolioData) -> Option<String> {
    let links = [
        (&data.github, "fab fa-github"),
        (&data.linkedin, "fab fa-linkedin"),
        (&data.twitter, "fab fa-twitter"),
        (&data.website, "fas fa-globe"),
    ];

    let mut body = String::new();
    for (field, icon) in links {
        if let Some(url) = present(field) {
            body.push_str(&format!(
                "<a href=\"{}\" class=\"social-link\" target=\"_blank\"><i class=\"{icon}\"></i></a>\n",
                escape_url(url)
            ));
        }
    }
    if body.is_empty() {
        return None;
    }

    Some(section(
        "Connect With Me",
        &format!("<div class=\"social-links\">\n{body}</div>\n"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with_name(name: &str) -> PortfolioData {
        PortfolioData {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_head_uses_name_in_title() {
        let head = render_head(&data_with_name("Ava"));
        assert!(head.contains("<title>Ava - Portfolio</title>"));
        assert!(head.contains("font-awesome"));
    }

    #[test]
    fn test_head_default_title() {
        let head = render_head(&PortfolioData::default());
        assert!(head.contains("<title>Portfolio - Portfolio</title>"));
    }

    #[test]
    fn test_header_defaults() {
        let header = render_header(&PortfolioData::default());
        assert!(header.contains("Your Name"));
        assert!(header.contains("Professional Title"));
        assert!(header.contains(DEFAULT_PROFILE_IMAGE));
        assert!(header.contains("class=\"header no-image\""));
        assert!(!header.contains("contact-item"));
    }

    #[test]
    fn test_header_with_image_drops_no_image_class() {
        let data = PortfolioData {
            profile_image: Some("https://img.example/a.png".to_string()),
            ..Default::default()
        };
        let header = render_header(&data);
        assert!(header.contains("src=\"https://img.example/a.png\""));
        assert!(header.contains("<div class=\"header\" id=\"portfolioHeader\">"));
    }

    #[test]
    fn test_header_keeps_inline_avatar() {
        let avatar = "data:image/png;base64,iVBORw0KGgo=";
        let data = PortfolioData {
            profile_image: Some(avatar.to_string()),
            ..Default::default()
        };
        let header = render_header(&data);
        assert!(header.contains(&format!("src=\"{avatar}\"")));
    }

    #[test]
    fn test_header_drops_script_avatar() {
        let data = PortfolioData {
            profile_image: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };
        let header = render_header(&data);
        assert!(header.contains("src=\"#\""));
        assert!(!header.contains("javascript:"));
    }

    #[test]
    fn test_empty_name_falls_back_to_default() {
        let header = render_header(&data_with_name(""));
        assert!(header.contains("<h1 class=\"name\">Your Name</h1>"));
    }

    #[test]
    fn test_contact_links() {
        let data = PortfolioData {
            phone: Some("+1 555 0100".to_string()),
            email: Some("ava@example.com".to_string()),
            location: Some("Oslo, Norway".to_string()),
            ..Default::default()
        };
        let header = render_header(&data);
        assert!(header.contains("href=\"tel:+15550100\""));
        assert!(header.contains("</i> +1 555 0100</a>"));
        assert!(header.contains("href=\"mailto:ava@example.com\""));
        assert!(header.contains("https://www.google.com/maps/search/Oslo%2C%20Norway"));
        assert!(header.contains("</i> Oslo, Norway</a>"));
    }

    #[test]
    fn test_about_omitted_when_absent_or_empty() {
        assert!(render_about(&PortfolioData::default()).is_none());
        let data = PortfolioData {
            about: Some(String::new()),
            ..Default::default()
        };
        assert!(render_about(&data).is_none());
    }

    #[test]
    fn test_about_escapes_text() {
        let data = PortfolioData {
            about: Some("I <3 Rust & Go".to_string()),
            ..Default::default()
        };
        let html = render_about(&data).unwrap();
        assert!(html.contains("About Me"));
        assert!(html.contains("I &lt;3 Rust &amp; Go"));
    }

    #[test]
    fn test_skills_rendered_in_order() {
        let data = PortfolioData {
            skills: Some(vec![
                Skill {
                    name: Some("Rust".to_string()),
                    level: Some("Expert".to_string()),
                },
                Skill {
                    name: Some("Go".to_string()),
                    level: Some("Advanced".to_string()),
                },
            ]),
            ..Default::default()
        };
        let html = render_skills(&data).unwrap();
        let rust = html.find("Rust").unwrap();
        let go = html.find("Go").unwrap();
        assert!(rust < go);
        assert!(html.contains("<div class=\"skill-level\">Expert</div>"));
    }

    #[test]
    fn test_skills_omitted_when_empty() {
        let data = PortfolioData {
            skills: Some(vec![]),
            ..Default::default()
        };
        assert!(render_skills(&data).is_none());
    }

    #[test]
    fn test_project_without_technologies_has_no_tag_row() {
        let data = PortfolioData {
            projects: Some(vec![Project {
                title: Some("Crate".to_string()),
                description: Some("A crate".to_string()),
                technologies: Some(vec![]),
            }]),
            ..Default::default()
        };
        let html = render_projects(&data).unwrap();
        assert!(html.contains("<h3 class=\"project-title\">Crate</h3>"));
        assert!(!html.contains("project-tech"));
    }

    #[test]
    fn test_project_technologies_become_tags() {
        let data = PortfolioData {
            projects: Some(vec![Project {
                title: Some("Crate".to_string()),
                description: None,
                technologies: Some(vec!["Rust".to_string(), "Tokio".to_string()]),
            }]),
            ..Default::default()
        };
        let html = render_projects(&data).unwrap();
        assert!(html.contains("<span class=\"tech-tag\">Rust</span>"));
        assert!(html.contains("<span class=\"tech-tag\">Tokio</span>"));
        assert!(html.contains("<p class=\"project-description\"></p>"));
    }

    #[test]
    fn test_experience_open_end_date_is_present() {
        let data = PortfolioData {
            experience: Some(vec![Experience {
                title: Some("Engineer".to_string()),
                company: Some("Acme".to_string()),
                start_date: Some("2021-03".to_string()),
                end_date: None,
                description: Some("Built things".to_string()),
            }]),
            ..Default::default()
        };
        let html = render_experience(&data).unwrap();
        assert!(html.contains("<h2 class=\"section-title\">Experience</h2>"));
        assert!(html.contains("2021-03 - Present"));
        assert!(html.contains("<p class=\"experience-company\">Acme</p>"));
    }

    #[test]
    fn test_education_with_end_date() {
        let data = PortfolioData {
            education: Some(vec![Education {
                degree: Some("BSc".to_string()),
                institution: Some("MIT".to_string()),
                start_date: Some("2015".to_string()),
                end_date: Some("2019".to_string()),
                description: None,
            }]),
            ..Default::default()
        };
        let html = render_education(&data).unwrap();
        assert!(html.contains("<h2 class=\"section-title\">Education</h2>"));
        assert!(html.contains("2015 - 2019"));
        assert!(html.contains("<p class=\"experience-description\"></p>"));
    }

    #[test]
    fn test_social_links_only_present_ones() {
        let data = PortfolioData {
            github: Some("https://github.com/ava".to_string()),
            website: Some("https://ava.dev".to_string()),
            ..Default::default()
        };
        let html = render_social_links(&data).unwrap();
        assert!(html.contains("Connect With Me"));
        assert!(html.contains("fa-github"));
        assert!(html.contains("fa-globe"));
        assert!(!html.contains("fa-linkedin"));
        assert!(!html.contains("fa-twitter"));
    }

    #[test]
    fn test_social_links_omitted_when_none() {
        assert!(render_social_links(&PortfolioData::default()).is_none());
    }

    #[test]
    fn test_social_link_javascript_neutralised() {
        let data = PortfolioData {
            twitter: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };
        let html = render_social_links(&data).unwrap();
        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("javascript:"));
    }
}

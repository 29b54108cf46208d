// Portfolio page renderer.
// Pure: the same PortfolioData always yields the same document, no I/O.

pub mod escape;
pub mod sections;
pub mod styles;

use crate::models::portfolio::PortfolioData;
use sections::{
    render_about, render_education, render_experience, render_head, render_header,
    render_projects, render_skills, render_social_links,
};

/// Renders a complete standalone HTML document for a portfolio.
pub fn render_portfolio(data: &PortfolioData) -> String {
    let optional_sections = [
        render_about(data),
        render_skills(data),
        render_projects(data),
        render_experience(data),
        render_education(data),
        render_social_links(data),
    ];

    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n");
    html.push_str(&render_head(data));
    html.push_str("<body>\n<div class=\"container\">\n<div class=\"portfolio\">\n");
    html.push_str(&render_header(data));
    for section in optional_sections.into_iter().flatten() {
        html.push_str(&section);
    }
    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

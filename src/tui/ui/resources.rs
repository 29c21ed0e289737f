//! Educational resource links.
//!
//! Pure static data; the terminal cannot open a browser, so the URLs are
//! displayed for the user to follow.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::ClinicalTheme;

pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
}

pub const RESOURCE_LINKS: [ResourceLink; 3] = [
    ResourceLink {
        title: "What is Diabetes?",
        url: "https://www.youtube.com/watch?v=wmOW091P2ew",
    },
    ResourceLink {
        title: "How to Prevent Diabetes",
        url: "https://www.mayoclinic.org/diseases-conditions/type-2-diabetes/in-depth/diabetes-prevention/art-20047639",
    },
    ResourceLink {
        title: "Diabetes Management",
        url: "https://www.mayoclinic.org/diseases-conditions/diabetes/in-depth/diabetes-management/art-20047963",
    },
];

/// Render the "Learn More" link list.
pub fn render_resources(f: &mut Frame, area: Rect) {
    let mut lines = Vec::with_capacity(RESOURCE_LINKS.len());
    for link in &RESOURCE_LINKS {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", link.title), ClinicalTheme::text()),
            Span::styled(link.url, ClinicalTheme::text_muted()),
        ]));
    }

    let block = Block::default()
        .title(Span::styled(" Learn More ", ClinicalTheme::text_secondary()))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border());

    f.render_widget(Paragraph::new(lines).block(block), area);
}

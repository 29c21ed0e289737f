//! Risk assessment result panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::Assessment;
use crate::tui::styles::ClinicalTheme;

/// Render the risk assessment column.
pub fn render_result(f: &mut Frame, area: Rect, assessment: Option<&Assessment>, busy: bool) {
    let block = Block::default()
        .title(Span::styled(" Risk Assessment ", ClinicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match assessment {
        Some(assessment) => render_assessment(f, inner, assessment),
        None if busy => render_placeholder(f, inner, "Analyzing..."),
        None => render_placeholder(f, inner, "Fill out the form to see your risk assessment"),
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("♥", ClinicalTheme::text_muted())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), ClinicalTheme::text_secondary())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(content, area);
}

fn render_assessment(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tier badge
            Constraint::Length(3), // No-diabetes bar
            Constraint::Length(3), // Diabetes bar
            Constraint::Length(6), // Recommendation
            Constraint::Min(0),    // Timestamp
        ])
        .margin(1)
        .split(area);

    let tier = assessment.tier;
    let tier_style = ClinicalTheme::risk_tier(tier);

    // Headline echoes the service's label verbatim; the tier only drives
    // color, icon, and recommendation copy.
    let badge = Paragraph::new(vec![Line::from(Span::styled(
        format!("{} {} Risk", tier.icon(), assessment.result.risk_level),
        tier_style.add_modifier(ratatui::style::Modifier::BOLD),
    ))])
    .alignment(Alignment::Center);
    f.render_widget(badge, chunks[0]);

    // The two probability bars are independent, never normalized against
    // each other.
    render_probability_bar(
        f,
        chunks[1],
        "No Diabetes",
        assessment.result.probability.no_diabetes,
    );
    render_probability_bar(
        f,
        chunks[2],
        "Diabetes Risk",
        assessment.result.probability.diabetes,
    );

    if let Some(recommendation) = tier.recommendation() {
        let text = Paragraph::new(vec![
            Line::from(Span::styled(recommendation.title, tier_style)),
            Line::from(Span::styled(
                recommendation.body,
                ClinicalTheme::text_secondary(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(tier_style),
        );
        f.render_widget(text, chunks[3]);
    }

    let assessed = Paragraph::new(Line::from(Span::styled(
        format!(
            "Assessed at {}",
            assessment.assessed_at.format("%Y-%m-%d %H:%M UTC")
        ),
        ClinicalTheme::text_muted(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(assessed, chunks[4]);
}

fn render_probability_bar(f: &mut Frame, area: Rect, label: &str, probability: f64) {
    let percent = (probability * 100.0).clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {label} "),
                    ClinicalTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        )
        .gauge_style(ClinicalTheme::text_secondary())
        .percent(percent as u16)
        .label(format!("{percent:.1}%"));

    f.render_widget(gauge, area);
}

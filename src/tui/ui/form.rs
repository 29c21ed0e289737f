//! Health information intake form.
//!
//! Selects cycle with Left/Right, sliders step with Left/Right, age is
//! typed. Every edit flows through the workflow so the displayed result
//! can never go stale against the inputs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{bmi_category, AssessmentInput};
use crate::tui::styles::ClinicalTheme;

/// Fields of the intake form, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Gender,
    Age,
    Hypertension,
    HeartDisease,
    SmokingHistory,
    Bmi,
    HbA1c,
    BloodGlucose,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Gender,
        FormField::Age,
        FormField::Hypertension,
        FormField::HeartDisease,
        FormField::SmokingHistory,
        FormField::Bmi,
        FormField::HbA1c,
        FormField::BloodGlucose,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gender => "Gender *",
            Self::Age => "Age",
            Self::Hypertension => "Hypertension *",
            Self::HeartDisease => "Heart Disease *",
            Self::SmokingHistory => "Smoking History *",
            Self::Bmi => "BMI",
            Self::HbA1c => "HbA1c Level",
            Self::BloodGlucose => "Blood Glucose",
        }
    }

    /// Placeholder/tooltip copy shown when the field is unset or focused.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Gender => "Select gender",
            Self::Age => "years (1-120)",
            Self::Hypertension => "High blood pressure (>140/90 mmHg)",
            Self::HeartDisease => "Any diagnosed cardiovascular disease",
            Self::SmokingHistory => "Select smoking history",
            Self::Bmi => "15-50",
            Self::HbA1c => "Average blood sugar over 2-3 months. Normal: <5.7%",
            Self::BloodGlucose => "Fasting glucose. Normal: 70-100 mg/dL",
        }
    }
}

/// Transient form navigation state.
///
/// The field values themselves live in the workflow's input record; this
/// only tracks which field is focused and the age text buffer.
pub struct FormState {
    pub selected: usize,
    pub age_text: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            selected: 0,
            // Mirrors the input record's default age.
            age_text: "30".to_string(),
        }
    }
}

impl FormState {
    #[must_use]
    pub fn selected_field(&self) -> FormField {
        FormField::ALL[self.selected]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = FormField::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }
}

/// Coerce the age text buffer to a number.
///
/// Non-parseable text becomes 0 rather than being rejected; the 0 then
/// fails range validation on submit. Deliberately permissive, matching
/// the documented form behavior.
#[must_use]
pub fn coerce_age(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// Cycle through a fixed option list, starting from the first option
/// when nothing is selected yet.
#[must_use]
pub fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> T {
    let len = options.len();
    match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None => options[0],
        Some(i) if forward => options[(i + 1) % len],
        Some(i) => options[(i + len - 1) % len],
    }
}

/// Render the health information form column.
pub fn render_form(
    f: &mut Frame,
    area: Rect,
    input: &AssessmentInput,
    state: &FormState,
    error: Option<&str>,
    busy: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                               // Header
            Constraint::Length(FormField::ALL.len() as u16 * 3), // Fields
            Constraint::Length(3),                               // Submit
            Constraint::Min(0),                                  // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], input, state);
    render_submit(f, chunks[2], busy);
    render_form_footer(f, chunks[3], error);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Health Information", ClinicalTheme::title()),
        Span::styled(" │ * required", ClinicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn field_value_line(input: &AssessmentInput, state: &FormState, field: FormField) -> Line<'static> {
    let set = |text: String| Span::styled(text, ClinicalTheme::text());
    let unset = |text: &'static str| Span::styled(text, ClinicalTheme::text_muted());

    let value = match field {
        FormField::Gender => input
            .gender
            .map_or(unset(field.hint()), |g| set(g.label().to_string())),
        FormField::Age => set(state.age_text.clone()),
        FormField::Hypertension => input
            .hypertension
            .map_or(unset("Do you have hypertension?"), |v| {
                set(v.label().to_string())
            }),
        FormField::HeartDisease => input
            .heart_disease
            .map_or(unset("Do you have heart disease?"), |v| {
                set(v.label().to_string())
            }),
        FormField::SmokingHistory => input
            .smoking_history
            .map_or(unset(field.hint()), |v| set(v.label().to_string())),
        FormField::Bmi => Span::styled(
            format!("{:.1}  [{}]", input.bmi, bmi_category(input.bmi)),
            ClinicalTheme::text(),
        ),
        FormField::HbA1c => set(format!("{:.1}%", input.hba1c_level)),
        FormField::BloodGlucose => set(format!("{} mg/dL", input.blood_glucose_level)),
    };

    Line::from(vec![Span::raw(" "), value])
}

fn render_form_fields(f: &mut Frame, area: Rect, input: &AssessmentInput, state: &FormState) {
    let constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in FormField::ALL.iter().enumerate() {
        let is_selected = i == state.selected;
        let border_style = if is_selected {
            ClinicalTheme::border_focused()
        } else {
            ClinicalTheme::border()
        };
        let title_style = if is_selected {
            ClinicalTheme::focused()
        } else {
            ClinicalTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label()), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = Paragraph::new(field_value_line(input, state, *field)).block(block);
        f.render_widget(content, chunks[i]);
    }
}

fn render_submit(f: &mut Frame, area: Rect, busy: bool) {
    let label = if busy {
        Span::styled("Analyzing...", ClinicalTheme::text_muted())
    } else {
        Span::styled("[Enter] Assess Diabetes Risk", ClinicalTheme::subtitle())
    };

    let button = Paragraph::new(Line::from(label))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if busy {
                    ClinicalTheme::border()
                } else {
                    ClinicalTheme::border_focused()
                }),
        );

    f.render_widget(button, area);
}

fn render_form_footer(f: &mut Frame, area: Rect, error: Option<&str>) {
    let content = if let Some(err) = error {
        Line::from(vec![
            Span::styled("! ", ClinicalTheme::danger()),
            Span::styled(err.to_string(), ClinicalTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", ClinicalTheme::key_hint()),
            Span::styled("Navigate ", ClinicalTheme::key_desc()),
            Span::styled("[←→] ", ClinicalTheme::key_hint()),
            Span::styled("Adjust ", ClinicalTheme::key_desc()),
            Span::styled("[Enter] ", ClinicalTheme::key_hint()),
            Span::styled("Submit ", ClinicalTheme::key_desc()),
            Span::styled("[Esc] ", ClinicalTheme::key_hint()),
            Span::styled("Quit", ClinicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, SmokingHistory};

    #[test]
    fn test_coerce_age_falls_back_to_zero() {
        assert_eq!(coerce_age("45"), 45);
        assert_eq!(coerce_age(""), 0);
        assert_eq!(coerce_age("abc"), 0);
        assert_eq!(coerce_age("4.5"), 0);
    }

    #[test]
    fn test_cycle_option_starts_at_first_when_unset() {
        assert_eq!(cycle_option(&Gender::ALL, None, true), Gender::Male);
        assert_eq!(cycle_option(&Gender::ALL, None, false), Gender::Male);
    }

    #[test]
    fn test_cycle_option_wraps_both_directions() {
        assert_eq!(
            cycle_option(&Gender::ALL, Some(Gender::Female), true),
            Gender::Male
        );
        assert_eq!(
            cycle_option(&Gender::ALL, Some(Gender::Male), false),
            Gender::Female
        );
        assert_eq!(
            cycle_option(&SmokingHistory::ALL, Some(SmokingHistory::NoInfo), true),
            SmokingHistory::Never
        );
        assert_eq!(
            cycle_option(&SmokingHistory::ALL, Some(SmokingHistory::Never), false),
            SmokingHistory::NoInfo
        );
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut state = FormState::default();
        assert_eq!(state.selected_field(), FormField::Gender);
        state.prev_field();
        assert_eq!(state.selected_field(), FormField::BloodGlucose);
        state.next_field();
        assert_eq!(state.selected_field(), FormField::Gender);
    }
}

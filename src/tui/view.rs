//! Render functions: wizard state in, frame out.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::tui::theme::Theme;
use crate::tui::widgets::{SelectState, TextInputState};
use crate::tui::wizard::{
    Focus, Notice, NoticeKind, Panel, QUESTIONS, SPINNER_FRAMES, WizardState,
};

pub fn draw(frame: &mut Frame, state: &WizardState, theme: &Theme) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, state, theme, header_area);

    match state.panel {
        Panel::Personal => draw_personal(frame, state, theme, body_area),
        Panel::Questions => draw_questions(frame, state, theme, body_area),
        Panel::Feedback => draw_feedback(frame, state, theme, body_area),
    }

    draw_footer(frame, theme, footer_area);

    if let Some(notice) = &state.notice {
        draw_notice(frame, notice, theme, frame.area());
    }
}

fn draw_header(frame: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let step = match state.panel {
        Panel::Personal => "Step 1 of 3",
        Panel::Questions => "Step 2 of 3",
        Panel::Feedback => "Step 3 of 3",
    };

    let block = Block::bordered()
        .title(" Interview Wizard ")
        .border_style(Style::default().fg(theme.surface));
    let line = Line::from(vec![
        Span::styled(
            state.panel.title(),
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(step, Style::default().fg(theme.overlay)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Border for the active panel card. Lit while the entrance highlight is
/// decaying, which is the terminal stand-in for a fade-in.
fn card_block(state: &WizardState, theme: &Theme) -> Block<'static> {
    let border = if state.entrance > 0 {
        theme.lavender
    } else {
        theme.overlay
    };
    Block::bordered()
        .title(format!(" {} ", state.panel.title()))
        .border_style(Style::default().fg(border))
}

fn draw_personal(frame: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let block = card_block(state, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, qualification_area, skills_area, role_area, button_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

    draw_input(
        frame,
        theme,
        name_area,
        "Full Name",
        &state.name,
        state.focus == Focus::Name,
    );
    draw_input(
        frame,
        theme,
        qualification_area,
        "Qualification",
        &state.qualification,
        state.focus == Focus::Qualification,
    );
    draw_input(
        frame,
        theme,
        skills_area,
        "Skills",
        &state.skills,
        state.focus == Focus::Skills,
    );
    draw_select(
        frame,
        theme,
        role_area,
        "Job Role",
        &state.job_role,
        state.focus == Focus::JobRole,
    );
    draw_button(
        frame,
        theme,
        button_area,
        "[ Start Interview ]",
        state.focus == Focus::Start,
    );
}

fn draw_questions(frame: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let block = card_block(state, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [q1_prompt, q1_input, q2_prompt, q2_input, q3_prompt, q3_input, button_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

    let prompt_areas = [q1_prompt, q2_prompt, q3_prompt];
    let input_areas = [q1_input, q2_input, q3_input];
    for (index, question) in QUESTIONS.iter().enumerate() {
        let prompt = Line::from(Span::styled(
            format!("{}. {}", index + 1, question.prompt),
            Style::default().fg(theme.subtext),
        ));
        frame.render_widget(Paragraph::new(prompt), prompt_areas[index]);
        draw_input(
            frame,
            theme,
            input_areas[index],
            "Answer",
            &state.answers[index],
            state.focus == Focus::Answer(index),
        );
    }

    let [back_area, finish_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(button_area);

    draw_button(
        frame,
        theme,
        back_area,
        "[ Back ]",
        state.focus == Focus::Back,
    );

    if state.submitting {
        let label = format!("{} Processing…", SPINNER_FRAMES[state.spinner_frame]);
        let line = Line::from(Span::styled(label, Style::default().fg(theme.peach)));
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            finish_area,
        );
    } else {
        draw_button(
            frame,
            theme,
            finish_area,
            "[ Finish Interview ]",
            state.focus == Focus::Finish,
        );
    }
}

fn draw_feedback(frame: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let block = card_block(state, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = &state.feedback else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No feedback yet.",
                Style::default().fg(theme.overlay),
            )),
            inner,
        );
        return;
    };

    let [details_area, feedback_area, button_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(3),
    ])
    .areas(inner);

    let label_style = Style::default().fg(theme.blue);
    let value_style = Style::default().fg(theme.text);

    let details_rows = vec![
        labeled_row("Full Name", &view.profile.name, label_style, value_style),
        labeled_row(
            "Qualification",
            &view.profile.qualification,
            label_style,
            value_style,
        ),
        labeled_row("Skills", &view.profile.skills, label_style, value_style),
        labeled_row(
            "Job Role Applied",
            &view.profile.job_role,
            label_style,
            value_style,
        ),
    ];
    let details = Table::new(
        details_rows,
        [Constraint::Length(22), Constraint::Min(0)],
    )
    .block(
        Block::bordered()
            .title(" Candidate Details ")
            .border_style(Style::default().fg(theme.surface)),
    );
    frame.render_widget(details, details_area);

    let feedback_rows = vec![
        labeled_row(
            "Technical Strengths",
            &view.feedback.technical_strengths,
            label_style,
            value_style,
        ),
        labeled_row(
            "Weaknesses",
            &view.feedback.weaknesses,
            label_style,
            value_style,
        ),
        labeled_row(
            "Communication",
            &view.feedback.communication,
            label_style,
            value_style,
        ),
        labeled_row(
            "Recommendation",
            &view.feedback.recommendation,
            label_style,
            value_style,
        ),
        labeled_row(
            "Final Decision",
            &view.feedback.decision,
            label_style,
            value_style.add_modifier(Modifier::BOLD),
        ),
    ];
    let feedback = Table::new(
        feedback_rows,
        [Constraint::Length(22), Constraint::Min(0)],
    )
    .block(
        Block::bordered()
            .title(" Interview Feedback ")
            .border_style(Style::default().fg(theme.surface)),
    );
    frame.render_widget(feedback, feedback_area);

    draw_button(
        frame,
        theme,
        button_area,
        "[ Reset ]",
        state.focus == Focus::Reset,
    );
}

fn labeled_row<'a>(
    label: &'a str,
    value: &'a str,
    label_style: Style,
    value_style: Style,
) -> Row<'a> {
    Row::new(vec![
        Cell::from(Span::styled(label, label_style)),
        Cell::from(Span::styled(value, value_style)),
    ])
}

fn draw_input(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    label: &'static str,
    input: &TextInputState,
    focused: bool,
) {
    let border = if focused { theme.lavender } else { theme.overlay };
    let block = Block::bordered()
        .title(label)
        .border_style(Style::default().fg(border));
    frame.render_widget(
        Paragraph::new(input_line(input, focused, theme))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Value line with a reversed cell standing in for the cursor. Candidate
/// text is rendered as plain spans, there is no markup to inject into.
fn input_line(input: &TextInputState, focused: bool, theme: &Theme) -> Line<'static> {
    let text_style = Style::default().fg(theme.text);
    if !focused {
        return Line::from(Span::styled(input.value().to_string(), text_style));
    }

    let chars: Vec<char> = input.value().chars().collect();
    let cursor = input.cursor().min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let at: String = chars
        .get(cursor)
        .map(char::to_string)
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars[(cursor + 1).min(chars.len())..].iter().collect();

    Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(at, text_style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, text_style),
    ])
}

fn draw_select(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    label: &'static str,
    select: &SelectState,
    focused: bool,
) {
    let border = if focused { theme.lavender } else { theme.overlay };
    let block = Block::bordered()
        .title(label)
        .border_style(Style::default().fg(border));

    let line = match select.value() {
        Some(value) => Line::from(vec![
            Span::styled("◂ ", Style::default().fg(theme.overlay)),
            Span::styled(value, Style::default().fg(theme.text)),
            Span::styled(" ▸", Style::default().fg(theme.overlay)),
        ]),
        None => Line::from(Span::styled(
            "Select a role (←/→)",
            Style::default().fg(theme.overlay),
        )),
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_button(frame: &mut Frame, theme: &Theme, area: Rect, label: &'static str, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(theme.lavender)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.subtext)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
        area,
    );
}

fn draw_notice(frame: &mut Frame, notice: &Notice, theme: &Theme, area: Rect) {
    let width = area.width.saturating_sub(4).clamp(20, 60);
    let popup = centered_rect(width, 5, area);

    let (title, border) = match notice.kind {
        NoticeKind::Error => (" Error ", theme.red),
        NoticeKind::Info => (" Notice ", theme.blue),
    };

    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(border));
    let lines = vec![
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key to continue",
            Style::default().fg(theme.overlay),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        popup,
    );
}

fn draw_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let hints = Line::from(Span::styled(
        " Tab/↓ next · Shift-Tab/↑ previous · Enter select · Esc quit",
        Style::default().fg(theme.overlay),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

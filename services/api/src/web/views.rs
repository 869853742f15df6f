//! services/api/src/web/views.rs
//!
//! Server-rendered HTML for the page routes. Views are plain string builders
//! around a shared layout; user-provided text is escaped before it reaches
//! the page.

use focusdeck_core::{
    GoalDraft, GoalRecord, GoalSnapshot, SessionDraft, SessionRecord, SessionSummary,
    ValidationErrors,
};
use std::fmt::Write;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/focus", "Focus Sessions"),
    ("/insights", "Progress Insights"),
    ("/about", "About"),
];

const FEATURE_CARDS: &[(&str, &str)] = &[
    (
        "Balanced Sessions",
        "Structure focused work and mindful breaks with preset Pomodoro blocks.",
    ),
    (
        "Routine Builder",
        "Plan your study sprints ahead of time with customizable daily templates.",
    ),
    (
        "Momentum Tracking",
        "Reflect on streaks, completion rates, and energy levels at a glance.",
    ),
];

const WORKFLOW_STEPS: &[(&str, &str)] = &[
    (
        "Plan",
        "Drag a few study blocks onto your schedule and set an intention for the day.",
    ),
    (
        "Focus",
        "Start the timer, stay present, and log quick notes between intervals.",
    ),
    ("Reflect", "Review completed sessions to adjust workload"),
];

const FOCUS_PRESETS: &[(&str, u32, u32, u32)] = &[
    ("Classic", 25, 5, 4),
    ("Deep Work", 50, 10, 2),
    ("Lightning", 15, 3, 3),
];

const REFLECTION_PROMPTS: &[&str] = &[
    "What helped you stay on task today?",
    "Where did you lose momentum and why?",
    "Which small win are you most proud of?",
];

const TEAM_MEMBERS: &[&str] = &["Ab Emmanuel", "Dasha Coates"];

/// Derived labels rendered on the insights page.
pub struct Insights {
    pub streak_days: usize,
    pub total_focus_label: String,
    pub latest_mood: String,
}

/// Escapes text for safe interpolation into HTML body or attribute positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, current_path: &str, body: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        let class = if *href == current_path {
            " class=\"active\""
        } else {
            ""
        };
        let _ = write!(nav, "<a href=\"{href}\"{class}>{label}</a>");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} · FocusDeck</title>\n</head>\n<body>\n\
         <header><nav>{nav}</nav></header>\n<main>\n{body}</main>\n\
         <footer><p>FocusDeck · plan, focus, reflect.</p></footer>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn field_error(errors: &ValidationErrors, field: &str) -> String {
    match errors.get(field) {
        Some(message) => format!("<p class=\"field-error\">{}</p>", escape(message)),
        None => String::new(),
    }
}

fn value_of(value: &Option<String>) -> String {
    escape(value.as_deref().unwrap_or(""))
}

pub fn home_page() -> String {
    let mut body = String::from("<h1>Make every study block count</h1>\n<section class=\"features\">\n");
    for (title, description) in FEATURE_CARDS {
        let _ = write!(
            body,
            "<article><h2>{title}</h2><p>{description}</p></article>\n"
        );
    }
    body.push_str("</section>\n<section class=\"workflow\"><h2>How it works</h2><ol>\n");
    for (label, details) in WORKFLOW_STEPS {
        let _ = write!(body, "<li><strong>{label}</strong>: {details}</li>\n");
    }
    body.push_str("</ol></section>\n");
    layout("Home", "/", &body)
}

pub fn about_page() -> String {
    let mut body = String::from(
        "<h1>About FocusDeck</h1>\n<p>A small server-rendered companion for \
         Pomodoro-style study routines.</p>\n<h2>Team</h2>\n<ul>\n",
    );
    for name in TEAM_MEMBERS {
        let _ = write!(body, "<li>{name}</li>\n");
    }
    body.push_str("</ul>\n");
    layout("About", "/about", &body)
}

pub fn focus_page(
    sessions: &[SessionRecord],
    summary: &SessionSummary,
    values: &SessionDraft,
    errors: &ValidationErrors,
) -> String {
    let mut body = String::from("<h1>Focus Sessions</h1>\n");

    body.push_str("<section class=\"presets\"><h2>Presets</h2><ul>\n");
    for (label, focus, brk, cycles) in FOCUS_PRESETS {
        let _ = write!(
            body,
            "<li data-focus=\"{focus}\" data-break=\"{brk}\" data-cycles=\"{cycles}\">\
             {label}: {focus} min focus / {brk} min break × {cycles}</li>\n"
        );
    }
    body.push_str("</ul></section>\n");

    let _ = write!(
        body,
        "<section class=\"summary\"><h2>Totals</h2>\
         <p>{} focus minutes · {} cycles · {} min average block</p></section>\n",
        summary.total_focus_minutes, summary.total_cycles, summary.average_focus_block
    );

    if !errors.is_empty() {
        body.push_str("<p class=\"flash flash-error\">Please fix the highlighted fields.</p>\n");
    }

    let _ = write!(
        body,
        "<section class=\"queue-form\"><h2>Queue a session</h2>\n\
         <form method=\"post\" action=\"/focus/sessions\">\n\
         <label for=\"title\">Session name</label>\n\
         <input id=\"title\" name=\"title\" value=\"{title}\" required>\n{title_err}\
         <label for=\"focusMinutes\">Focus minutes</label>\n\
         <input id=\"focusMinutes\" name=\"focusMinutes\" value=\"{focus}\" required>\n{focus_err}\
         <label for=\"breakMinutes\">Break minutes</label>\n\
         <input id=\"breakMinutes\" name=\"breakMinutes\" value=\"{brk}\" required>\n{brk_err}\
         <label for=\"cycles\">Cycles</label>\n\
         <input id=\"cycles\" name=\"cycles\" value=\"{cycles}\" required>\n{cycles_err}\
         <label for=\"mood\">Mood</label>\n\
         <input id=\"mood\" name=\"mood\" value=\"{mood}\">\n\
         <button type=\"submit\">Add to queue</button>\n</form></section>\n",
        title = value_of(&values.title),
        title_err = field_error(errors, "title"),
        focus = value_of(&values.focus_minutes),
        focus_err = field_error(errors, "focusMinutes"),
        brk = value_of(&values.break_minutes),
        brk_err = field_error(errors, "breakMinutes"),
        cycles = value_of(&values.cycles),
        cycles_err = field_error(errors, "cycles"),
        mood = value_of(&values.mood),
    );

    body.push_str("<section class=\"session-list\"><h2>Queued sessions</h2>\n");
    if sessions.is_empty() {
        body.push_str("<p>No sessions yet. Queue one above to get started.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for session in sessions {
            let _ = write!(
                body,
                "<li data-session-id=\"{id}\"><strong>{title}</strong> · \
                 {focus} min focus / {brk} min break × {cycles} · {mood} \
                 <time datetime=\"{created}\">{created}</time></li>\n",
                id = session.id,
                title = escape(&session.title),
                focus = session.focus_minutes,
                brk = session.break_minutes,
                cycles = session.cycles,
                mood = escape(&session.mood),
                created = escape(&session.created_at),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");

    layout("Focus Sessions", "/focus", &body)
}

#[allow(clippy::too_many_arguments)]
pub fn insights_page(
    summary: &SessionSummary,
    recent_sessions: &[SessionRecord],
    insights: &Insights,
    goals: &[GoalRecord],
    snapshot: &GoalSnapshot,
    goal_values: &GoalDraft,
    goal_errors: &ValidationErrors,
) -> String {
    let mut body = String::from("<h1>Progress Insights</h1>\n");

    let _ = write!(
        body,
        "<section class=\"stats\"><h2>At a glance</h2><ul>\
         <li>Streak: {streak} day(s)</li>\
         <li>Total focus: {total}</li>\
         <li>Latest mood: {mood}</li>\
         <li>Average block: {avg} min over {cycles} cycles</li>\
         </ul></section>\n",
        streak = insights.streak_days,
        total = escape(&insights.total_focus_label),
        mood = escape(&insights.latest_mood),
        avg = summary.average_focus_block,
        cycles = summary.total_cycles,
    );

    body.push_str("<section class=\"recent\"><h2>Recent sessions</h2>\n");
    if recent_sessions.is_empty() {
        body.push_str("<p>Nothing logged yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for session in recent_sessions {
            let _ = write!(
                body,
                "<li>{title} · {focus} min × {cycles} · {mood}</li>\n",
                title = escape(&session.title),
                focus = session.focus_minutes,
                cycles = session.cycles,
                mood = escape(&session.mood),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");

    let _ = write!(
        body,
        "<section class=\"goal-snapshot\"><h2>Goals</h2>\
         <p>{total} goal(s) · {high} high priority</p><p>{label}</p></section>\n",
        total = snapshot.total,
        high = snapshot.high_priority,
        label = escape(&snapshot.next_due_label),
    );

    if !goal_errors.is_empty() {
        body.push_str("<p class=\"flash flash-error\">Please fix the highlighted fields.</p>\n");
    }

    let _ = write!(
        body,
        "<section class=\"goal-form\"><h2>Plan a goal</h2>\n\
         <form method=\"post\" action=\"/focus/goals\">\n\
         <label for=\"goal-title\">Goal</label>\n\
         <input id=\"goal-title\" name=\"title\" value=\"{title}\" required>\n{title_err}\
         <label for=\"targetFocusMinutes\">Target focus minutes</label>\n\
         <input id=\"targetFocusMinutes\" name=\"targetFocusMinutes\" value=\"{target}\" required>\n{target_err}\
         <label for=\"priority\">Priority</label>\n\
         <select id=\"priority\" name=\"priority\">\
         <option>High</option><option>Medium</option><option>Low</option></select>\n{priority_err}\
         <label for=\"dueDate\">Due date</label>\n\
         <input id=\"dueDate\" name=\"dueDate\" type=\"date\" value=\"{due}\" required>\n{due_err}\
         <label for=\"setReminder\">Remind me</label>\n\
         <input id=\"setReminder\" name=\"setReminder\" type=\"checkbox\">\n\
         <label for=\"notes\">Notes</label>\n\
         <textarea id=\"notes\" name=\"notes\">{notes}</textarea>\n{notes_err}\
         <button type=\"submit\">Save goal</button>\n</form></section>\n",
        title = value_of(&goal_values.title),
        title_err = field_error(goal_errors, "title"),
        target = value_of(&goal_values.target_focus_minutes),
        target_err = field_error(goal_errors, "targetFocusMinutes"),
        priority_err = field_error(goal_errors, "priority"),
        due = value_of(&goal_values.due_date),
        due_err = field_error(goal_errors, "dueDate"),
        notes = value_of(&goal_values.notes),
        notes_err = field_error(goal_errors, "notes"),
    );

    body.push_str("<section class=\"goal-list\"><h2>Upcoming deadlines</h2>\n");
    if goals.is_empty() {
        body.push_str("<p>No goals scheduled.</p>\n");
    } else {
        body.push_str("<ol>\n");
        for goal in goals {
            let _ = write!(
                body,
                "<li>{title} · {priority} · {target} min · due {due}</li>\n",
                title = escape(&goal.title),
                priority = goal.priority,
                target = goal.target_focus_minutes,
                due = escape(&goal.due_date),
            );
        }
        body.push_str("</ol>\n");
    }
    body.push_str("</section>\n");

    let mut prompts = String::from("<section class=\"prompts\"><h2>Reflection prompts</h2><ul>\n");
    for prompt in REFLECTION_PROMPTS {
        let _ = write!(prompts, "<li>{prompt}</li>\n");
    }
    prompts.push_str("</ul></section>\n");
    body.push_str(&prompts);

    layout("Progress Insights", "/insights", &body)
}

pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to home</a></p>\n",
        escape(title),
        escape(message)
    );
    layout(title, "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>\"hi\" & 'bye'</script>"),
            "&lt;script&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn focus_page_preserves_submitted_values_and_errors() {
        let values = SessionDraft {
            title: Some("<b>Sprint</b>".to_string()),
            focus_minutes: Some("999".to_string()),
            ..SessionDraft::default()
        };
        let mut errors = ValidationErrors::new();
        errors.insert(
            "focusMinutes".to_string(),
            "Focus minutes should be between 10 and 90.".to_string(),
        );

        let html = focus_page(&[], &empty_summary(), &values, &errors);
        assert!(html.contains("&lt;b&gt;Sprint&lt;/b&gt;"));
        assert!(html.contains("value=\"999\""));
        assert!(html.contains("Focus minutes should be between 10 and 90."));
        assert!(html.contains("Please fix the highlighted fields."));
    }

    fn empty_summary() -> SessionSummary {
        SessionSummary {
            total_focus_minutes: 0,
            total_cycles: 0,
            average_focus_block: 0,
        }
    }
}

//! Standalone HTML rendering of a [`Dashboard`].
//!
//! The page embeds the SVG fragments inline and carries its own stylesheet,
//! so it can be opened straight from disk.

use std::fmt::Write;

use super::state::Dashboard;
use crate::config::DashboardConfig;
use crate::types::UserProfile;
use crate::utils::format_integer;

const STYLESHEET: &str = "\
body { background: #0f172a; color: #e2e8f0; font-family: sans-serif; margin: 2rem; }
section { background: #111827; border-radius: 12px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
h1, h2 { margin: 0 0 0.75rem 0; }
h2 { font-size: 1.1rem; color: #94a3b8; }
dl { display: grid; grid-template-columns: max-content auto; gap: 0.25rem 1rem; }
dt { color: #64748b; }
.ratio { font-size: 2rem; font-weight: bold; }
.no-data { color: #64748b; }
";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn render_profile(out: &mut String, profile: &UserProfile) -> std::fmt::Result {
    writeln!(out, "<section id=\"profile\">")?;
    writeln!(out, "<h2>Profile</h2>\n<dl>")?;
    for (term, value) in [
        ("Login", profile.login.as_str()),
        ("Name", profile.full_name().as_str()),
        ("Email", profile.email.as_str()),
        ("CPR number", profile.cpr_number.as_str()),
    ] {
        writeln!(out, "<dt>{term}</dt><dd>{}</dd>", escape_html(value))?;
    }
    writeln!(out, "</dl>\n</section>")
}

fn render_body(
    out: &mut String,
    dashboard: &Dashboard,
    profile: Option<&UserProfile>,
) -> std::fmt::Result {
    if let Some(profile) = profile {
        render_profile(out, profile)?;
    }

    if let Some(audit) = &dashboard.audit {
        writeln!(out, "<section id=\"audit\">\n<h2>Audit ratio</h2>")?;
        writeln!(out, "<p class=\"ratio\">{}</p>", escape_html(&audit.ratio_text))?;
        writeln!(out, "<div class=\"audit-done\">Done\n{}</div>", audit.done_bar)?;
        writeln!(
            out,
            "<div class=\"audit-received\">Received\n{}</div>",
            audit.received_bar
        )?;
        writeln!(out, "</section>")?;
    }

    writeln!(out, "<section id=\"xp\">")?;
    writeln!(
        out,
        "<h2>XP over time ({} XP total)</h2>",
        format_integer(dashboard.total_xp)
    )?;
    writeln!(out, "{}\n</section>", dashboard.xp_chart)?;

    for view in &dashboard.categories {
        writeln!(out, "<section id=\"projects-{}\">", view.category)?;
        writeln!(out, "<h2>Projects: {}</h2>", view.category)?;
        writeln!(out, "{}\n</section>", view.chart)?;
    }
    Ok(())
}

/// Render the dashboard as a complete HTML document.
pub fn render_page(
    dashboard: &Dashboard,
    profile: Option<&UserProfile>,
    config: &DashboardConfig,
) -> String {
    let title = escape_html(&config.title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n<style>\n{STYLESHEET}</style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    // Writing into a String cannot fail.
    let _ = render_body(&mut out, dashboard, profile);
    out.push_str("</body>\n</html>\n");
    out
}

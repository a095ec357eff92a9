use super::color::hue_for_index;
use super::config::ProjectEntry;

/// Legend markup: one `<li>` per project with a dot matching its satellite hue.
pub fn project_list_html(projects: &[ProjectEntry]) -> String {
    let count = projects.len();
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "<li><span class=\"dot\" style=\"background: hsl({}, 100%, 50%);\"></span> {}</li>",
                hue_for_index(i, count) * 360.0,
                escape_html(p.name)
            )
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

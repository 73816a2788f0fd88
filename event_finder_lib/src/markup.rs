//! HTML snippets handed to the map library as marker icons and plain popups.

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Rounded image tile with a small pointer underneath.
pub fn event_icon_html(image: &str, title: &str) -> String {
    format!(
        "<div class=\"event-pin\"><div class=\"event-pin-tile\"><img src=\"{}\" alt=\"{}\"/></div><div class=\"event-pin-pointer\"></div></div>",
        escape_html(image),
        escape_html(title)
    )
}

pub fn viewer_icon_html() -> &'static str {
    "<div class=\"viewer-pin\"><div class=\"viewer-pin-pulse\"></div><div class=\"viewer-pin-dot\"></div></div>"
}

pub fn route_failure_html() -> &'static str {
    "<b>Route unavailable</b><br>The route could not be computed. Please try again."
}

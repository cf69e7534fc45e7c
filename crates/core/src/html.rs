//! HTML renderer: converts `RenderCommand` lists into markup.

use showcase_protocol::{RenderCommand, Role, TextStyle, ThemeToken};

use crate::shell::Document;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    pub theme: ThemeMode,
    /// Embed the page stylesheet in `<head>`.
    pub include_styles: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            include_styles: true,
        }
    }
}

/// Render a complete document: doctype, `<head>` metadata, and body.
pub fn render_document(document: &Document, options: &HtmlOptions) -> String {
    let body = render_body(&document.body);
    let mut html = String::with_capacity(body.len() + 2048);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        r#"<html lang="{}">"#,
        escape_html(document.meta.lang)
    ));
    html.push_str("<head>");
    html.push_str(r#"<meta charset="utf-8">"#);
    html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    html.push_str(&format!(
        "<title>{}</title>",
        escape_html(document.meta.title)
    ));
    html.push_str(&format!(
        r#"<meta name="description" content="{}">"#,
        escape_html(document.meta.description)
    ));
    if options.include_styles {
        html.push_str("<style>");
        html.push_str(&stylesheet(options.theme));
        html.push_str("</style>");
    }
    html.push_str("</head><body>");
    html.push_str(&body);
    html.push_str("</body></html>\n");
    html
}

/// Render commands as an HTML fragment.
///
/// Unbalanced `End*` commands are skipped; regions left open at the end are
/// closed so the fragment is always well formed.
pub fn render_body(commands: &[RenderCommand]) -> String {
    let mut html = String::with_capacity(commands.len() * 96);
    let mut open: Vec<&'static str> = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::BeginRegion { class, role, label } => {
                let (tag, aria_role) = region_tag(*role);
                html.push_str(&format!(r#"<{tag} class="{}""#, escape_html(class)));
                if let Some(aria_role) = aria_role {
                    html.push_str(&format!(r#" role="{aria_role}""#));
                }
                if let Some(label) = label {
                    html.push_str(&format!(r#" aria-label="{}""#, escape_html(label)));
                }
                html.push('>');
                open.push(tag);
            }
            RenderCommand::BeginList { class, label } => {
                html.push_str(&format!(r#"<ul class="{}""#, escape_html(class)));
                if let Some(label) = label {
                    html.push_str(&format!(r#" aria-label="{}""#, escape_html(label)));
                }
                html.push('>');
                open.push("ul");
            }
            RenderCommand::EndRegion | RenderCommand::EndList => match open.pop() {
                Some(tag) => html.push_str(&format!("</{tag}>")),
                None => tracing::warn!(?cmd, "close without matching open; skipped"),
            },
            RenderCommand::Text {
                text, style, class, ..
            } => {
                let tag = text_tag(*style);
                html.push('<');
                html.push_str(tag);
                if let Some(class) = class {
                    html.push_str(&format!(r#" class="{}""#, escape_html(class)));
                }
                html.push_str(&format!(">{}</{tag}>", escape_html(text)));
            }
            RenderCommand::Code { text, language } => {
                html.push_str("<pre><code");
                if let Some(language) = language {
                    html.push_str(&format!(r#" class="language-{}""#, escape_html(language)));
                }
                html.push_str(&format!(">{}</code></pre>", escape_html(text)));
            }
            RenderCommand::Tab {
                index,
                label,
                selected,
                gradient,
            } => {
                let class = if *selected { "tab tab--active" } else { "tab" };
                html.push_str(&format!(
                    r#"<button type="button" role="tab" aria-selected="{selected}" class="{class}" data-phase="{index}" style="background: {}"><span>{}</span></button>"#,
                    escape_html(&gradient.to_css()),
                    escape_html(label),
                ));
            }
            RenderCommand::ListItem { text } => {
                html.push_str(&format!("<li>{}</li>", escape_html(text)));
            }
        }
    }

    while let Some(tag) = open.pop() {
        html.push_str(&format!("</{tag}>"));
    }
    html
}

fn region_tag(role: Role) -> (&'static str, Option<&'static str>) {
    match role {
        Role::Section => ("section", None),
        Role::Banner => ("header", None),
        Role::Article => ("article", None),
        Role::Group => ("div", None),
        Role::TabList => ("div", Some("tablist")),
        Role::TabPanel => ("div", Some("tabpanel")),
    }
}

fn text_tag(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Eyebrow => "span",
        TextStyle::Heading => "h1",
        TextStyle::Body => "p",
        TextStyle::Label => "div",
    }
}

fn stylesheet(theme: ThemeMode) -> String {
    let mut css = String::from(":root{");
    for token in ThemeToken::ALL {
        css.push_str(&format!("--{}:{};", token.css_name(), theme.resolve(token)));
    }
    css.push('}');
    css.push_str(concat!(
        "body{margin:0;background:var(--background);color:var(--text-primary);",
        "font-family:system-ui,-apple-system,sans-serif}",
        ".showcase{max-width:1100px;margin:0 auto;padding:4rem 1.5rem}",
        ".hero h1{font-size:2.5rem;margin:.5rem 0 1rem}",
        ".hero p{color:var(--text-secondary);max-width:48rem;line-height:1.6}",
        ".eyebrow{color:var(--accent);text-transform:uppercase;letter-spacing:.12em;font-size:.8rem}",
        ".grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:1.5rem;margin-top:3rem}",
        ".snippet,.timeline{background:var(--surface);border:1px solid var(--border);border-radius:12px;padding:1.5rem}",
        ".snippet__label{color:var(--text-muted);font-size:.8rem;margin-bottom:.75rem}",
        "pre{margin:0;overflow-x:auto;background:var(--code-background);color:var(--code-text);",
        "padding:1rem;border-radius:8px;font-family:ui-monospace,SFMono-Regular,Menlo,monospace;font-size:.8rem}",
        ".timeline__tabs{display:flex;gap:.5rem;flex-wrap:wrap}",
        ".tab{border:1px solid var(--tab-idle);border-radius:999px;padding:.5rem 1rem;color:var(--text-primary);cursor:pointer}",
        ".tab--active{border-color:var(--tab-active)}",
        ".timeline__panel{margin-top:1.25rem}",
        ".timeline__tech{display:flex;gap:.5rem;flex-wrap:wrap;list-style:none;padding:0}",
        ".timeline__tech li{border:1px solid var(--border);border-radius:6px;padding:.25rem .6rem;font-size:.8rem}",
        ".timeline__highlight{color:var(--highlight)}",
    ));
    css
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Showcase;

    #[test]
    fn document_head_carries_metadata() {
        let html = render_document(&Document::new(Vec::new()), &HtmlOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>C# Skills Showcase</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Interactive overview of C# expertise delivered by an autonomous AI developer.">"#
        ));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn styles_are_optional() {
        let doc = Document::new(Vec::new());
        let with = render_document(&doc, &HtmlOptions::default());
        let without = render_document(
            &doc,
            &HtmlOptions {
                include_styles: false,
                ..HtmlOptions::default()
            },
        );
        assert!(with.contains("<style>"));
        assert!(!without.contains("<style>"));
    }

    #[test]
    fn light_theme_changes_palette() {
        let doc = Document::new(Vec::new());
        let light = render_document(
            &doc,
            &HtmlOptions {
                theme: ThemeMode::Light,
                include_styles: true,
            },
        );
        assert!(light.contains("--background:#f8fafc;"));
    }

    #[test]
    fn escapes_content() {
        let html = render_body(&Showcase::new().render());
        assert!(html.contains("Tooling &amp; DX"));
        assert!(html.contains("msg =&gt; msg.StatusCode"));
        assert!(html.contains("AddHttpClient(&quot;external&quot;)"));
    }

    #[test]
    fn tabs_expose_aria_state() {
        let html = render_body(&Showcase::new().render());
        assert!(html.contains(r#"role="tablist""#));
        assert!(html.contains(r#"role="tabpanel""#));
        assert_eq!(html.matches(r#"role="tab" "#).count(), 3);
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-selected="false""#).count(), 2);
        assert!(html.contains(
            r#"aria-selected="true" class="tab tab--active" data-phase="0""#
        ));
    }

    #[test]
    fn closes_unterminated_regions() {
        let html = render_body(&[
            RenderCommand::region("a", Role::Section),
            RenderCommand::BeginList {
                class: "b".into(),
                label: None,
            },
        ]);
        assert_eq!(html, r#"<section class="a"><ul class="b"></ul></section>"#);
    }

    #[test]
    fn skips_stray_close() {
        let html = render_body(&[RenderCommand::EndRegion, RenderCommand::ListItem {
            text: "x".into(),
        }]);
        assert_eq!(html, "<li>x</li>");
    }

    #[test]
    fn code_keeps_whitespace() {
        let html = render_body(&[RenderCommand::Code {
            text: "a\n    b".into(),
            language: None,
        }]);
        assert_eq!(html, "<pre><code>a\n    b</code></pre>");
    }
}

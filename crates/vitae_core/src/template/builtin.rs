//! Built-in resume templates.
//!
//! Three visual treatments over the same document shape. All output is
//! self-contained HTML with inline styles, so a snapshot of the markup is
//! enough to reproduce the page.

use crate::model::document::{Document, EducationEntry, WorkEntry};
use once_cell::sync::Lazy;
use regex::Regex;

static SKILL_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n]+").expect("valid skill split regex"));

/// Escapes text for HTML element and attribute positions.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Splits the free-text `skills` field into displayable chips.
pub fn skill_chips(skills: &str) -> Vec<String> {
    SKILL_SPLIT_RE
        .split(skills)
        .map(str::trim)
        .filter(|chip| !chip.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn contact_line(document: &Document) -> String {
    [
        document.email.as_str(),
        document.phone.as_str(),
        document.location.as_str(),
        document.website.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .map(|part| escape_html(part))
    .collect::<Vec<_>>()
    .join(" &middot; ")
}

// Entry and chip helpers take the accent pre-escaped by their caller, so
// one escape pass covers both element and attribute positions.
fn work_block(entry: &WorkEntry, accent: &str) -> String {
    format!(
        concat!(
            "<div class=\"job\">",
            "<div class=\"job-head\"><strong>{title}</strong>",
            "<span class=\"dates\">{start} &ndash; {end}</span></div>",
            "<div class=\"company\" style=\"color:{accent}\">{company}</div>",
            "<p>{description}</p>",
            "</div>"
        ),
        title = escape_html(&entry.title),
        start = escape_html(&entry.start_date),
        end = escape_html(&entry.end_date),
        accent = accent,
        company = escape_html(&entry.company),
        description = escape_html(&entry.description),
    )
}

fn education_block(entry: &EducationEntry) -> String {
    format!(
        concat!(
            "<div class=\"edu\">",
            "<div class=\"edu-head\"><strong>{school}</strong>",
            "<span class=\"dates\">{grad}</span></div>",
            "<div>{degree}</div>",
            "</div>"
        ),
        school = escape_html(&entry.school),
        grad = escape_html(&entry.grad_date),
        degree = escape_html(&entry.degree),
    )
}

fn chips_block(document: &Document, accent: &str) -> String {
    skill_chips(&document.skills)
        .iter()
        .map(|chip| {
            format!(
                "<span class=\"chip\" style=\"border-color:{accent}\">{}</span>",
                escape_html(chip)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Accent-forward single-column layout. The default template.
pub fn modern(document: &Document, accent: &str) -> String {
    let accent = escape_html(accent);
    let mut out = String::new();
    out.push_str("<div class=\"resume resume-modern\">");
    out.push_str(&format!(
        "<header><h1 style=\"color:{accent}\">{}</h1><h2>{}</h2><div class=\"contact\">{}</div></header>",
        escape_html(&document.full_name),
        escape_html(&document.job_title),
        contact_line(document),
    ));
    out.push_str(&format!(
        "<section><h3 style=\"border-color:{accent}\">Summary</h3><p>{}</p></section>",
        escape_html(&document.summary)
    ));
    out.push_str(&format!(
        "<section><h3 style=\"border-color:{accent}\">Experience</h3>{}</section>",
        document
            .work
            .iter()
            .map(|entry| work_block(entry, &accent))
            .collect::<String>()
    ));
    out.push_str(&format!(
        "<section><h3 style=\"border-color:{accent}\">Education</h3>{}</section>",
        document
            .education
            .iter()
            .map(education_block)
            .collect::<String>()
    ));
    out.push_str(&format!(
        "<section><h3 style=\"border-color:{accent}\">Skills</h3><div class=\"chips\">{}</div></section>",
        chips_block(document, &accent)
    ));
    out.push_str("</div>");
    out
}

/// Centered serif layout with understated section rules.
pub fn classic(document: &Document, accent: &str) -> String {
    let accent = escape_html(accent);
    let mut out = String::new();
    out.push_str("<div class=\"resume resume-classic\" style=\"font-family:Georgia,serif\">");
    out.push_str(&format!(
        "<header style=\"text-align:center\"><h1>{}</h1><h2 style=\"color:{accent}\">{}</h2><div class=\"contact\">{}</div></header>",
        escape_html(&document.full_name),
        escape_html(&document.job_title),
        contact_line(document),
    ));
    for (title, body) in [
        ("Profile", format!("<p>{}</p>", escape_html(&document.summary))),
        (
            "Experience",
            document
                .work
                .iter()
                .map(|entry| work_block(entry, &accent))
                .collect::<String>(),
        ),
        (
            "Education",
            document
                .education
                .iter()
                .map(education_block)
                .collect::<String>(),
        ),
        (
            "Skills",
            format!("<div class=\"chips\">{}</div>", chips_block(document, &accent)),
        ),
    ] {
        out.push_str(&format!(
            "<section><h3 style=\"text-transform:uppercase;border-bottom:1px solid {accent}\">{title}</h3>{body}</section>"
        ));
    }
    out.push_str("</div>");
    out
}

/// Sparse monochrome layout; the accent only marks the name.
pub fn minimal(document: &Document, accent: &str) -> String {
    let accent = escape_html(accent);
    let mut out = String::new();
    out.push_str("<div class=\"resume resume-minimal\">");
    out.push_str(&format!(
        "<header><h1><span style=\"color:{accent}\">{}</span></h1><div>{}</div><div class=\"contact\">{}</div></header>",
        escape_html(&document.full_name),
        escape_html(&document.job_title),
        contact_line(document),
    ));
    out.push_str(&format!("<p>{}</p>", escape_html(&document.summary)));
    out.push_str(&format!(
        "<section><h3>Experience</h3>{}</section>",
        document
            .work
            .iter()
            .map(|entry| work_block(entry, &accent))
            .collect::<String>()
    ));
    out.push_str(&format!(
        "<section><h3>Education</h3>{}</section>",
        document
            .education
            .iter()
            .map(education_block)
            .collect::<String>()
    ));
    out.push_str(&format!(
        "<section><h3>Skills</h3>{}</section>",
        skill_chips(&document.skills)
            .iter()
            .map(|chip| escape_html(chip))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_html, skill_chips};

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html("<b>\"R&D\" 'lead'</b>"),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;lead&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn skill_chips_split_and_trim() {
        assert_eq!(
            skill_chips("Rust, SQL;  Testing\n\n"),
            vec!["Rust", "SQL", "Testing"]
        );
        assert!(skill_chips("").is_empty());
    }
}

use report_core::{Cell, Document, Element, SessionBlock, Tone};

const STYLE: &str = "\
main { max-width: 960px; margin: 40px auto; padding: 20px; \
font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; }
.error { color: crimson; }
.session { border: 1px solid #ddd; border-radius: 8px; padding: 16px; margin-top: 16px; }
table { width: 100%; border-collapse: collapse; }
th { text-align: left; border-bottom: 1px solid #eee; padding: 8px 4px; }
td { padding: 6px 4px; border-bottom: 1px solid #f3f3f3; }
td.truncate { max-width: 320px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.tone-error { color: #a33; }
.tone-success { color: #2a7; }
.loading { color: #777; }";

pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&doc.title)));
    out.push_str(&format!("<style>\n{STYLE}\n</style>\n"));
    out.push_str("</head>\n<body>\n<main>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape(&doc.title)));

    for element in &doc.body {
        match element {
            Element::Loading { text } => {
                out.push_str(&format!("<p class=\"loading\">{}</p>\n", escape(text)));
            }
            Element::Error { text } => {
                out.push_str(&format!("<p class=\"error\">{}</p>\n", escape(text)));
            }
            Element::Field { label, value, tone } => {
                out.push_str(&format!(
                    "<p><strong>{}:</strong> <span{}>{}</span></p>\n",
                    escape(label),
                    class_attr(&tone_class(*tone)),
                    escape(value)
                ));
            }
            Element::Session(block) => write_session(&mut out, block),
        }
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn write_session(out: &mut String, block: &SessionBlock) {
    out.push_str(&format!(
        "<section class=\"session\" data-key=\"{}\">\n<h3>Session {} <span{}>{}</span></h3>\n",
        escape(&block.key),
        escape(&block.label),
        class_attr(&tone_class(block.tone)),
        escape(&block.marker)
    ));
    out.push_str("<table>\n<thead>\n<tr>");
    for header in &block.headers {
        out.push_str(&format!("<th>{}</th>", escape(header)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &block.rows {
        out.push_str(&format!("<tr data-key=\"{}\">", row.key));
        for cell in &row.cells {
            write_cell(out, cell);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</section>\n");
}

fn write_cell(out: &mut String, cell: &Cell) {
    let mut classes = Vec::new();
    if cell.truncate {
        classes.push("truncate");
    }
    classes.extend(tone_class(cell.tone));
    let title = cell
        .title
        .as_deref()
        .map(|title| format!(" title=\"{}\"", escape(title)))
        .unwrap_or_default();
    out.push_str(&format!(
        "<td{}{}>{}</td>",
        class_attr(&classes),
        title,
        escape(&cell.text)
    ));
}

fn tone_class(tone: Tone) -> Vec<&'static str> {
    match tone {
        Tone::Normal => Vec::new(),
        Tone::Success => vec!["tone-success"],
        Tone::Error => vec!["tone-error"],
    }
}

fn class_attr(classes: &[&str]) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classes.join(" "))
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

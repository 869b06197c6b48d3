//! Server-side views.
//!
//! Handlers describe a page as a view name plus a JSON data object; a
//! [`ViewRenderer`] turns that into markup. [`HtmlViews`] is the built-in
//! renderer. Every interpolated value is HTML-escaped and every contact name
//! placed in a URL is percent-encoded.

use crate::error::{RenderError, RenderResult};
use serde_json::Value;
use std::fmt::Write;

pub const MAIN_LAYOUT: &str = "layouts/main";
pub const ERROR_LAYOUT: &str = "layouts/error";

/// Renders a named view with a data payload.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, data: &Value) -> RenderResult<String>;
}

/// The application's HTML pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlViews;

impl ViewRenderer for HtmlViews {
    fn render(&self, view: &str, data: &Value) -> RenderResult<String> {
        let body = match view {
            "index" => index(data),
            "about" => about(),
            "contact" => contact_list(data),
            "contact-add" => contact_add(data),
            "contact-edit" => contact_edit(data),
            "contact-detail" => contact_detail(data),
            "404" => not_found(),
            other => return Err(RenderError::UnknownView(other.to_string())),
        };

        let title = str_field(data, "title");
        match data.get("layout").and_then(Value::as_str).unwrap_or(MAIN_LAYOUT) {
            MAIN_LAYOUT => Ok(main_layout(&title, &body)),
            ERROR_LAYOUT => Ok(error_layout(&title, &body)),
            other => Err(RenderError::InvalidData {
                view: view.to_string(),
                reason: format!("unknown layout: {}", other),
            }),
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// String field of `data`, escaped; missing or non-string values are empty.
fn str_field(data: &Value, key: &str) -> String {
    escape_html(data.get(key).and_then(Value::as_str).unwrap_or_default())
}

fn contact_path(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, urlencoding::encode(name))
}

fn main_layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="stylesheet" href="/css/style.css">
<title>{title}</title>
</head>
<body>
<nav class="navbar">
<a class="brand" href="/">Contact App</a>
<a href="/">Home</a>
<a href="/about">About</a>
<a href="/contact">Contact</a>
</nav>
<main class="container">
{body}
</main>
</body>
</html>
"#
    )
}

fn error_layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="id">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body class="error">
{body}
</body>
</html>
"#
    )
}

fn index(data: &Value) -> String {
    let mut html = format!("<h1>Halo, {}!</h1>\n<ul class=\"students\">\n", str_field(data, "nama"));
    for student in data
        .get("mahasiswa")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        let _ = writeln!(
            html,
            "<li>{} &lt;{}&gt;</li>",
            str_field(student, "nama"),
            str_field(student, "email")
        );
    }
    html.push_str("</ul>\n");
    html
}

fn about() -> String {
    "<h1>About</h1>\n<p>Simple contact manager.</p>\n".to_string()
}

fn not_found() -> String {
    "<h1>404</h1>\n<p>Page not found.</p>\n<a href=\"/\">Back to home</a>\n".to_string()
}

fn contact_list(data: &Value) -> String {
    let mut html = String::from("<h1>Daftar Contact</h1>\n");

    for msg in data.get("msg").and_then(Value::as_array).into_iter().flatten() {
        if let Some(msg) = msg.as_str() {
            let _ = writeln!(
                html,
                "<div class=\"alert alert-success\" role=\"alert\">{}</div>",
                escape_html(msg)
            );
        }
    }

    html.push_str("<a class=\"button\" href=\"/contact/add\">Tambah Data Contact</a>\n");

    let contacts: Vec<&Value> = data
        .get("contacts")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .collect();

    if contacts.is_empty() {
        html.push_str("<div class=\"alert alert-danger\">Data contact masih kosong!</div>\n");
        return html;
    }

    html.push_str("<table class=\"contacts\">\n<thead><tr><th>#</th><th>Nama</th><th></th></tr></thead>\n<tbody>\n");
    for (i, contact) in contacts.iter().enumerate() {
        let name = contact.get("name").and_then(Value::as_str).unwrap_or_default();
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td><a href=\"{}\">detail</a></td></tr>",
            i + 1,
            escape_html(name),
            escape_html(&contact_path("/contact/", name))
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Summary list of validation messages, empty when there are none.
fn error_summary(data: &Value) -> String {
    let errors: Vec<&Value> = data
        .get("errors")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .collect();
    if errors.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"alert alert-danger\" role=\"alert\">\n<ul>\n");
    for err in errors {
        let _ = writeln!(
            html,
            "<li data-field=\"{}\">{}</li>",
            str_field(err, "field"),
            str_field(err, "message")
        );
    }
    html.push_str("</ul>\n</div>\n");
    html
}

/// Message attached to `field`, if validation flagged it.
fn field_error<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get("errors")?
        .as_array()?
        .iter()
        .find(|e| e.get("field").and_then(Value::as_str) == Some(field))?
        .get("message")?
        .as_str()
}

fn input(data: &Value, contact: &Value, field: &str, label: &str, kind: &str) -> String {
    let value = str_field(contact, field);
    match field_error(data, field) {
        Some(msg) => format!(
            "<label for=\"{field}\">{label}</label>\n<input type=\"{kind}\" id=\"{field}\" name=\"{field}\" value=\"{value}\" class=\"is-invalid\" required>\n<div class=\"invalid-feedback\">{}</div>\n",
            escape_html(msg)
        ),
        None => format!(
            "<label for=\"{field}\">{label}</label>\n<input type=\"{kind}\" id=\"{field}\" name=\"{field}\" value=\"{value}\" required>\n"
        ),
    }
}

fn contact_fields(data: &Value, contact: &Value) -> String {
    let mut html = input(data, contact, "name", "Nama", "text");
    html.push_str(&input(data, contact, "email", "Email", "email"));
    html.push_str(&input(data, contact, "phone", "No HP", "text"));
    html
}

fn contact_add(data: &Value) -> String {
    let contact = data.get("contact").unwrap_or(&Value::Null);
    format!(
        "<h1>Form Tambah Data Contact</h1>\n{}<form method=\"post\" action=\"/contact\">\n{}<button type=\"submit\">Tambah Data</button>\n</form>\n",
        error_summary(data),
        contact_fields(data, contact)
    )
}

fn contact_edit(data: &Value) -> String {
    let contact = match data.get("contact") {
        Some(c) if c.is_object() => c,
        _ => {
            return "<h1>Form Ubah Data Contact</h1>\n<div class=\"alert alert-danger\">Contact tidak ditemukan.</div>\n<a href=\"/contact\">Kembali</a>\n".to_string();
        }
    };

    // Freshly loaded contacts carry only `name`; re-rendered submissions carry `oldName`.
    let old_name = contact
        .get("oldName")
        .or_else(|| contact.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    format!(
        "<h1>Form Ubah Data Contact</h1>\n{}<form method=\"post\" action=\"/contact?_method=PUT\">\n<input type=\"hidden\" name=\"_id\" value=\"{}\">\n<input type=\"hidden\" name=\"oldName\" value=\"{}\">\n{}<button type=\"submit\">Ubah Data</button>\n</form>\n",
        error_summary(data),
        str_field(contact, "id"),
        escape_html(old_name),
        contact_fields(data, contact)
    )
}

fn contact_detail(data: &Value) -> String {
    let contact = match data.get("contact") {
        Some(c) if c.is_object() => c,
        _ => {
            return "<h1>Detail Contact</h1>\n<div class=\"alert alert-danger\">Contact tidak ditemukan.</div>\n<a href=\"/contact\">Kembali ke daftar contact</a>\n".to_string();
        }
    };

    let name = contact.get("name").and_then(Value::as_str).unwrap_or_default();
    format!(
        r#"<h1>Detail Contact</h1>
<div class="card">
<h2>{}</h2>
<p class="phone">{}</p>
<p class="email">{}</p>
<a class="button" href="{}">edit</a>
<form method="post" action="/contact?_method=DELETE" class="inline">
<input type="hidden" name="name" value="{}">
<button type="submit" onclick="return confirm('yakin?');">delete</button>
</form>
<a href="/contact">Kembali ke daftar contact</a>
</div>
"#,
        escape_html(name),
        str_field(contact, "phone"),
        str_field(contact, "email"),
        escape_html(&contact_path("/contact/edit/", name)),
        escape_html(name)
    )
}

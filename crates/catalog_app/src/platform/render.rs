use std::fmt::Write;

use catalog_core::{CatalogViewModel, ItemCardView, PreviewView};

/// Renders the view model as plain text, one block per section.
pub fn render(view: &CatalogViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);

    let buttons: Vec<String> = view
        .categories
        .iter()
        .map(|button| {
            if button.selected {
                format!("[{}]", button.label)
            } else {
                button.label.clone()
            }
        })
        .collect();
    if !buttons.is_empty() {
        let _ = writeln!(out, "{}", buttons.join(" | "));
    }

    if view.items.is_empty() {
        let _ = writeln!(out, "  (no items)");
    }
    for card in &view.items {
        render_card(&mut out, card);
    }

    if view.shows_pagination() {
        let pages: Vec<String> = view
            .pages
            .iter()
            .map(|page| {
                if page.current {
                    format!("[{}]", page.number)
                } else {
                    page.number.to_string()
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "{} {} {}",
            if view.has_previous { "<" } else { " " },
            pages.join(" "),
            if view.has_next { ">" } else { " " },
        );
    }
    let _ = writeln!(
        out,
        "page {}/{}, {} items",
        view.current_page, view.total_pages, view.filtered_count
    );

    if let Some(preview) = &view.preview {
        render_preview(&mut out, preview);
    }
    out
}

fn render_card(out: &mut String, card: &ItemCardView) {
    let date = card.date_label.as_deref().unwrap_or("undated");
    let _ = writeln!(out, "  - {} ({}) {} [{}]", card.title, card.id, date, card.category);
    if card.expanded {
        if let Some(issuer) = &card.issuer {
            let _ = writeln!(out, "      issuer: {}", issuer);
        }
        if !card.tech_stack.is_empty() {
            let _ = writeln!(out, "      stack: {}", card.tech_stack.join(", "));
        }
        let _ = writeln!(out, "      image: {}", card.image);
    }
}

fn render_preview(out: &mut String, preview: &PreviewView) {
    let _ = writeln!(out, "+-- preview: {} ({})", preview.title, preview.id);
    let _ = writeln!(out, "|   image: {}", preview.image);
    if let Some(description) = &preview.description {
        let _ = writeln!(out, "|   {}", description);
    }
    for link in &preview.links {
        let _ = writeln!(out, "|   {}: {}", link.label, link.url);
    }
    let _ = writeln!(out, "+--");
}

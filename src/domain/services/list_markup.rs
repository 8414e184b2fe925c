//! HTML fragments for rendered item lists

use crate::domain::value_objects::ItemToken;

pub const LIST_CLASS: &str = "better-journal-list";
pub const LIST_ITEM_CLASS: &str = "better-journal-list-item";

/// Render tokens as the list element appended after the narrative
/// text, one list item per token in extraction order.
///
/// Resolved tokens become anchors carrying the item identifier so the
/// game client opens the item page for them.
pub fn render_list(tokens: &[ItemToken], item_page_url: &str) -> String {
    let mut html = format!("<ul class=\"{LIST_CLASS}\">");
    for token in tokens {
        html.push_str(&format!("<li class=\"{LIST_ITEM_CLASS}\">"));
        match &token.item_id {
            Some(item_id) => {
                html.push_str(&format!(
                    "<a class=\"loot\" href=\"{item_page_url}?item_type={item_id}\">{}</a>",
                    token.text
                ));
            }
            None => html.push_str(&token.text),
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Tag a list already embedded in entry markup with the journal list
/// classes, for entries that ship their own list and only need styling.
///
/// Only bare `<ul>`/`<li>` tags are rewritten; returns `None` when the
/// markup has no such list.
pub fn tag_existing_list(html: &str) -> Option<String> {
    if !html.contains("<ul>") {
        return None;
    }
    Some(
        html.replacen("<ul>", &format!("<ul class=\"{LIST_CLASS}\">"), 1)
            .replace("<li>", &format!("<li class=\"{LIST_ITEM_CLASS}\">")),
    )
}

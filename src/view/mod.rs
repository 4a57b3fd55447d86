//! Server side rendered pages.
//!
//! Every page is a dioxus component taking the shared [`LayoutDto`](crate::model::guild::LayoutDto)
//! plus the page's own data, rendered to a string once per request with `dioxus-ssr`. Nothing is
//! hydrated on the client, forms are plain HTML posts.

pub mod assign_loot;
pub mod audit_log;
pub mod components;
pub mod error;
pub mod item_detail;
pub mod item_edit;
pub mod item_list;
pub mod member;
pub mod recipe_list;

use axum::response::Html;
use dioxus::prelude::*;

/// Renders a page component with its props into a complete HTML document.
///
/// Page components render `head` & `body`, the document element is added here.
pub fn render_page<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Html<String> {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();

    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    ))
}

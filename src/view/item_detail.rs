use dioxus::prelude::*;

use crate::{
    model::{
        guild::{LayoutDto, RaidDto},
        item::{CharacterLootDto, ItemDetailDto},
    },
    server::model::assignment::MAX_NOTE_LENGTH,
    view::components::{CharacterLootList, Layout},
};

#[derive(Props, Clone, PartialEq)]
pub struct ItemDetailPageProps {
    pub layout: LayoutDto,
    pub item: ItemDetailDto,
}

pub fn ItemDetailPage(props: ItemDetailPageProps) -> Element {
    let note_action = format!("{}/item/note", props.layout.guild_url());
    let item = props.item;
    let sources = item.sources.join(", ");

    rsx! {
        Layout {
            layout: props.layout,
            title: item.name.clone(),
            div {
                class: "flex flex-wrap gap-6",
                div {
                    class: "flex flex-col gap-2 max-w-96",
                    if let Some(tooltip) = &item.tooltip {
                        div { class: "tooltip-html", dangerous_inner_html: "{tooltip}" }
                    } else {
                        p { class: "q{item.quality} text-lg", "{item.name}" }
                    }
                    if !sources.is_empty() {
                        p { class: "text-sm opacity-70", "Drops from {sources}" }
                    }
                    if item.can_edit_items {
                        NoteForm {
                            action: note_action,
                            item_id: item.item_id,
                            note: item.guild_note.clone().unwrap_or_default(),
                            priority: item.guild_priority.clone().unwrap_or_default(),
                        }
                    } else {
                        dl {
                            dt { class: "font-semibold", "Note" }
                            dd { {item.guild_note.clone().unwrap_or_else(|| "-".to_string())} }
                            dt { class: "font-semibold", "Priority" }
                            dd { {item.guild_priority.clone().unwrap_or_else(|| "-".to_string())} }
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4 grow",
                    if let Some(prio) = &item.prio_characters {
                        ListCard { title: "Prio".to_string(), characters: prio.clone(), raids: item.raids.clone(), show_order: true }
                    }
                    if let Some(wishlist) = &item.wishlist_characters {
                        ListCard { title: "Wishlist".to_string(), characters: wishlist.clone(), raids: item.raids.clone(), show_order: false }
                    }
                    ListCard { title: "Received".to_string(), characters: item.received_characters.clone(), raids: item.raids.clone(), show_order: false }
                    ListCard { title: "Has recipe".to_string(), characters: item.recipe_characters.clone(), raids: item.raids.clone(), show_order: false }
                }
            }
        }
    }
}

#[component]
fn ListCard(
    title: String,
    characters: Vec<CharacterLootDto>,
    raids: Vec<RaidDto>,
    show_order: bool,
) -> Element {
    rsx! {
        div {
            class: "card shadow-sm",
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                CharacterLootList { characters: characters, raids: raids, show_order: show_order }
            }
        }
    }
}

#[component]
fn NoteForm(action: String, item_id: i32, note: String, priority: String) -> Element {
    rsx! {
        form {
            class: "flex flex-col gap-2",
            method: "post",
            action: "{action}",
            input { r#type: "hidden", name: "id", value: "{item_id}" }
            label {
                class: "label",
                "Note"
                input { class: "input input-sm w-full", r#type: "text", name: "note", maxlength: "{MAX_NOTE_LENGTH}", value: "{note}" }
            }
            label {
                class: "label",
                "Priority"
                input { class: "input input-sm w-full", r#type: "text", name: "priority", maxlength: "{MAX_NOTE_LENGTH}", value: "{priority}" }
            }
            button { class: "btn btn-primary btn-sm", r#type: "submit", "Save note" }
        }
    }
}

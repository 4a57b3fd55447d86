use dioxus::prelude::*;

use crate::{
    model::{
        guild::{LayoutDto, RaidDto},
        item::{ItemListDto, ItemListEntryDto},
    },
    view::components::{item_url, CharacterLootList, Layout},
};

#[derive(Props, Clone, PartialEq)]
pub struct ItemListPageProps {
    pub layout: LayoutDto,
    pub list: ItemListDto,
}

pub fn ItemListPage(props: ItemListPageProps) -> Element {
    let guild_url = props.layout.guild_url();
    let list = props.list;
    let edit_url = format!("{}/items/{}/edit", guild_url, list.instance.slug);
    let show_prios = list.items.iter().any(|i| i.prio_characters.is_some());
    let show_wishlist = list.items.iter().any(|i| i.wishlist_characters.is_some());

    rsx! {
        Layout {
            layout: props.layout,
            title: list.instance.name.clone(),
            if list.can_edit_items {
                a { class: "btn btn-sm btn-outline mb-4", href: "{edit_url}", "Edit notes" }
            }
            if list.items.is_empty() {
                p { "No items found for this instance." }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "Source" }
                                th { "Item" }
                                if show_prios {
                                    th { "Prio" }
                                }
                                if show_wishlist {
                                    th { "Wishlist" }
                                }
                                th { "Note" }
                                th { "Priority" }
                            }
                        }
                        tbody {
                            for entry in list.items.iter() {
                                ItemRow {
                                    guild_url: guild_url.clone(),
                                    entry: entry.clone(),
                                    raids: list.raids.clone(),
                                    show_prios: show_prios,
                                    show_wishlist: show_wishlist,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ItemRow(
    guild_url: String,
    entry: ItemListEntryDto,
    raids: Vec<RaidDto>,
    show_prios: bool,
    show_wishlist: bool,
) -> Element {
    let href = item_url(&guild_url, entry.item_id, &entry.name);

    rsx! {
        tr {
            td { class: "text-sm", "{entry.source_name}" }
            td {
                a { class: "q{entry.quality} link", href: "{href}", "{entry.name}" }
            }
            if show_prios {
                td {
                    CharacterLootList {
                        characters: entry.prio_characters.clone().unwrap_or_default(),
                        raids: raids.clone(),
                        show_order: true,
                    }
                }
            }
            if show_wishlist {
                td {
                    CharacterLootList {
                        characters: entry.wishlist_characters.clone().unwrap_or_default(),
                        raids: raids.clone(),
                        show_order: false,
                    }
                }
            }
            td { class: "text-sm", {entry.guild_note.clone().unwrap_or_default()} }
            td { class: "text-sm", {entry.guild_priority.clone().unwrap_or_default()} }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    model::{guild::LayoutDto, item::ItemListDto},
    server::model::assignment::MAX_NOTE_LENGTH,
    view::components::Layout,
};

#[derive(Props, Clone, PartialEq)]
pub struct ItemEditPageProps {
    pub layout: LayoutDto,
    pub list: ItemListDto,
}

/// Bulk editor posting `items[i][id|note|priority]` rows back to the same URL
pub fn ItemEditPage(props: ItemEditPageProps) -> Element {
    let guild_url = props.layout.guild_url();
    let list = props.list;
    let action = format!("{}/items/{}/edit", guild_url, list.instance.slug);
    let cancel_url = format!("{}/items/{}", guild_url, list.instance.slug);
    let title = format!("Edit {} notes", list.instance.name);

    rsx! {
        Layout {
            layout: props.layout,
            title: title,
            form {
                method: "post",
                action: "{action}",
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-sm",
                        thead {
                            tr {
                                th { "Source" }
                                th { "Item" }
                                th { "Note" }
                                th { "Priority" }
                            }
                        }
                        tbody {
                            for (i, entry) in list.items.iter().enumerate() {
                                tr {
                                    td { class: "text-sm", "{entry.source_name}" }
                                    td {
                                        input { r#type: "hidden", name: "items[{i}][id]", value: "{entry.item_id}" }
                                        span { class: "q{entry.quality}", "{entry.name}" }
                                    }
                                    td {
                                        input {
                                            class: "input input-sm w-full",
                                            r#type: "text",
                                            name: "items[{i}][note]",
                                            maxlength: "{MAX_NOTE_LENGTH}",
                                            value: entry.guild_note.clone().unwrap_or_default(),
                                        }
                                    }
                                    td {
                                        input {
                                            class: "input input-sm w-full",
                                            r#type: "text",
                                            name: "items[{i}][priority]",
                                            maxlength: "{MAX_NOTE_LENGTH}",
                                            value: entry.guild_priority.clone().unwrap_or_default(),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "flex gap-2 mt-4",
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    a { class: "btn btn-ghost", href: "{cancel_url}", "Cancel" }
                }
            }
        }
    }
}

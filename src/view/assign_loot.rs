use dioxus::prelude::*;

use crate::{
    model::{
        guild::LayoutDto,
        item::{AssignFormDto, CharacterOptionDto},
    },
    server::model::assignment::{MAX_BATCH_NAME_LENGTH, MAX_IMPORT_ID_LENGTH, MAX_NOTE_LENGTH},
    view::components::Layout,
};

#[derive(Props, Clone, PartialEq)]
pub struct AssignLootPageProps {
    pub layout: LayoutDto,
    pub form: AssignFormDto,
}

/// Mass input form, one `item[i][...]` row per potential drop
pub fn AssignLootPage(props: AssignLootPageProps) -> Element {
    let action = format!("{}/assign-loot", props.layout.guild_url());
    let form = props.form;

    rsx! {
        Layout {
            layout: props.layout,
            title: "Assign Loot".to_string(),
            form {
                method: "post",
                action: "{action}",
                div {
                    class: "flex flex-wrap gap-4 items-end mb-4",
                    label {
                        class: "label flex-col items-start",
                        "Raid"
                        select {
                            class: "select select-sm",
                            name: "raid_id",
                            option { value: "", "No raid" }
                            for raid in form.raids.iter() {
                                option { value: "{raid.id}", "{raid.name}" }
                            }
                        }
                    }
                    label {
                        class: "label flex-col items-start",
                        "Batch name"
                        input {
                            class: "input input-sm",
                            r#type: "text",
                            name: "name",
                            maxlength: "{MAX_BATCH_NAME_LENGTH}",
                        }
                    }
                    Toggle { name: "delete_wishlist_items".to_string(), label: "Delete wishlist items instead of flagging them".to_string() }
                    Toggle { name: "delete_prio_items".to_string(), label: "Delete prio items instead of flagging them".to_string() }
                    Toggle { name: "skip_missing_characters".to_string(), label: "Skip rows without a character".to_string() }
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-xs",
                        thead {
                            tr {
                                th { "Item ID" }
                                th { "Item name" }
                                th { "Character" }
                                th { "OS" }
                                th { "Note" }
                                th { "Officer note" }
                                th { "Received" }
                                th { "Import ID" }
                            }
                        }
                        tbody {
                            for index in 0..form.max_entries {
                                EntryRow {
                                    index: index,
                                    characters: form.characters.clone(),
                                    today: form.today.clone(),
                                }
                            }
                        }
                    }
                }
                button { class: "btn btn-primary mt-4", r#type: "submit", "Assign" }
            }
        }
    }
}

#[component]
fn Toggle(name: String, label: String) -> Element {
    rsx! {
        label {
            class: "label gap-2",
            input { class: "checkbox checkbox-sm", r#type: "checkbox", name: "{name}", value: "1" }
            "{label}"
        }
    }
}

#[component]
fn EntryRow(index: usize, characters: Vec<CharacterOptionDto>, today: String) -> Element {
    rsx! {
        tr {
            td {
                input { class: "input input-xs w-24", r#type: "number", min: "1", name: "item[{index}][id]" }
            }
            td {
                input { class: "input input-xs", r#type: "text", name: "item[{index}][label]" }
            }
            td {
                select {
                    class: "select select-xs",
                    name: "item[{index}][character_id]",
                    option { value: "", "" }
                    for character in characters.iter() {
                        option {
                            value: "{character.id}",
                            if character.is_alt {
                                "{character.name} (alt)"
                            } else {
                                "{character.name}"
                            }
                        }
                    }
                }
            }
            td {
                input { class: "checkbox checkbox-xs", r#type: "checkbox", name: "item[{index}][is_offspec]", value: "1" }
            }
            td {
                input { class: "input input-xs", r#type: "text", name: "item[{index}][note]", maxlength: "{MAX_NOTE_LENGTH}" }
            }
            td {
                input { class: "input input-xs", r#type: "text", name: "item[{index}][officer_note]", maxlength: "{MAX_NOTE_LENGTH}" }
            }
            td {
                input { class: "input input-xs", r#type: "date", name: "item[{index}][received_at]", max: "{today}" }
            }
            td {
                input { class: "input input-xs w-24", r#type: "text", name: "item[{index}][import_id]", maxlength: "{MAX_IMPORT_ID_LENGTH}" }
            }
        }
    }
}

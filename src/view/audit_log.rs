use dioxus::prelude::*;

use crate::{
    model::{
        audit::{AuditLogEntryDto, AuditLogPageDto},
        guild::LayoutDto,
    },
    view::components::{item_url, Layout},
};

#[derive(Props, Clone, PartialEq)]
pub struct AuditLogPageProps {
    pub layout: LayoutDto,
    pub page: AuditLogPageDto,
}

pub fn AuditLogPage(props: AuditLogPageProps) -> Element {
    let guild_url = props.layout.guild_url();
    let audit_log_url = format!("{}/audit-log", guild_url);
    let page = props.page;
    let is_filtered = page.batch.is_some() || page.character_id.is_some();

    rsx! {
        Layout {
            layout: props.layout,
            title: "Audit Log".to_string(),
            if let Some(batch) = &page.batch {
                div {
                    class: "card shadow-sm mb-4",
                    div {
                        class: "card-body",
                        h2 {
                            class: "card-title",
                            {batch.name.clone().unwrap_or_else(|| format!("Batch {}", batch.id))}
                        }
                        p { "{batch.note}" }
                        p { class: "text-xs opacity-70", {batch.created_at.format("%Y-%m-%d %H:%M").to_string()} }
                    }
                }
            }
            if is_filtered {
                a { class: "btn btn-sm btn-ghost mb-2", href: "{audit_log_url}", "Show all" }
            }
            if page.entries.is_empty() {
                p { "Nothing has been logged yet." }
            } else {
                table {
                    class: "table table-sm",
                    thead {
                        tr {
                            th { "When" }
                            th { "Type" }
                            th { "Description" }
                            th { "Character" }
                            th { "Item" }
                            th { "Raid" }
                        }
                    }
                    tbody {
                        for entry in page.entries.iter() {
                            EntryRow {
                                guild_url: guild_url.clone(),
                                audit_log_url: audit_log_url.clone(),
                                entry: entry.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EntryRow(guild_url: String, audit_log_url: String, entry: AuditLogEntryDto) -> Element {
    let created_at = entry.created_at.format("%Y-%m-%d %H:%M").to_string();
    let item_href = entry
        .item_id
        .map(|id| item_url(&guild_url, id, entry.item_name.as_deref().unwrap_or_default()));

    rsx! {
        tr {
            td { class: "text-xs whitespace-nowrap", "{created_at}" }
            td { class: "text-xs", {entry.log_type.clone().unwrap_or_default()} }
            td {
                "{entry.description}"
                if let Some(batch_id) = entry.batch_id {
                    a { class: "link text-xs ml-1", href: "{audit_log_url}?batch_id={batch_id}", "batch" }
                }
            }
            td {
                if let (Some(character_id), Some(name)) = (entry.character_id, &entry.character_name) {
                    a { class: "link", href: "{audit_log_url}?character_id={character_id}", "{name}" }
                }
            }
            td {
                if let (Some(href), Some(name)) = (&item_href, &entry.item_name) {
                    a { class: "link", href: "{href}", "{name}" }
                }
            }
            td { {entry.raid_name.clone().unwrap_or_default()} }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    model::{
        guild::{LayoutDto, RaidDto},
        item::CharacterLootDto,
    },
    server::util::slug::slugify,
};

pub const STYLESHEET_URL: &str = "https://cdn.jsdelivr.net/npm/daisyui@5/daisyui.css";

/// Canonical item URL below the guild, the slug is derived from the item name
pub fn item_url(guild_url: &str, item_id: i32, item_name: &str) -> String {
    format!("{}/item/{}/{}", guild_url, item_id, slugify(item_name))
}

/// Document shell with the guild navbar & any pending flash message
#[component]
pub fn Layout(layout: LayoutDto, title: String, children: Element) -> Element {
    let guild_url = layout.guild_url();
    let recipes_url = format!("{}/recipes", guild_url);
    let assign_url = format!("{}/assign-loot", guild_url);
    let audit_log_url = format!("{}/audit-log", guild_url);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | {layout.guild.name}" }
            link { rel: "stylesheet", href: STYLESHEET_URL }
        }
        body {
            div {
                class: "navbar bg-base-200 flex-wrap gap-2",
                div {
                    class: "navbar-start",
                    a { class: "text-xl", href: "{layout.member_url}", "{layout.guild.name}" }
                }
                div {
                    class: "flex flex-wrap gap-1",
                    for instance in layout.instances.iter() {
                        a {
                            class: "btn btn-ghost btn-sm",
                            href: "{guild_url}/items/{instance.slug}",
                            "{instance.name}"
                        }
                    }
                    a { class: "btn btn-ghost btn-sm", href: "{recipes_url}", "Recipes" }
                    a { class: "btn btn-ghost btn-sm", href: "{assign_url}", "Assign Loot" }
                    a { class: "btn btn-ghost btn-sm", href: "{audit_log_url}", "Audit Log" }
                }
                div {
                    class: "navbar-end",
                    a { class: "btn btn-outline btn-sm", href: "{layout.member_url}", "{layout.member_name}" }
                }
            }
            if let Some(flash) = &layout.flash {
                div {
                    class: "alert alert-info m-4",
                    role: "alert",
                    "{flash}"
                }
            }
            div {
                class: "min-h-screen p-4",
                h1 { class: "text-2xl font-semibold mb-4", "{title}" }
                {children}
            }
        }
    }
}

/// Characters attached to an item, e.g. its prio or wishlist
#[component]
pub fn CharacterLootList(
    characters: Vec<CharacterLootDto>,
    raids: Vec<RaidDto>,
    show_order: bool,
) -> Element {
    if characters.is_empty() {
        return rsx! {
            span { class: "text-base-content/50", "-" }
        };
    }

    rsx! {
        ul {
            class: "flex flex-col gap-1",
            for (character, raid) in characters.into_iter().map(|c| {
                let raid = c.raid_id.and_then(|id| raids.iter().find(|r| r.id == id).cloned());
                (c, raid)
            }) {
                CharacterLootRow {
                    raid_name: raid.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
                    raid_color: raid.and_then(|r| r.color).unwrap_or_default(),
                    character: character,
                    show_order: show_order,
                }
            }
        }
    }
}

#[component]
fn CharacterLootRow(
    character: CharacterLootDto,
    raid_name: String,
    raid_color: String,
    show_order: bool,
) -> Element {
    let mut class = String::from("text-sm");
    if character.is_inactive {
        class.push_str(" line-through opacity-60");
    }
    let received_at = character
        .received_at
        .map(|at| at.format("%Y-%m-%d").to_string());

    rsx! {
        li {
            class: "{class}",
            if show_order {
                span { class: "font-mono mr-1", "{character.order}." }
            }
            span {
                class: "font-medium",
                title: character.class.clone().unwrap_or_default(),
                "{character.name}"
            }
            if character.is_alt {
                span { class: "badge badge-ghost badge-xs ml-1", "alt" }
            }
            if character.is_offspec {
                span { class: "badge badge-warning badge-xs ml-1", "OS" }
            }
            if !raid_name.is_empty() {
                span {
                    class: "badge badge-outline badge-xs ml-1",
                    style: "border-color: #{raid_color}",
                    "{raid_name}"
                }
            }
            if let Some(received_at) = received_at {
                span { class: "text-xs ml-1 opacity-70", "{received_at}" }
            }
            if let Some(note) = &character.note {
                div { class: "text-xs italic", "{note}" }
            }
            if let Some(officer_note) = &character.officer_note {
                div { class: "text-xs text-warning", "Officer: {officer_note}" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    model::{guild::LayoutDto, member::MemberPageDto},
    view::components::Layout,
};

#[derive(Props, Clone, PartialEq)]
pub struct MemberPageProps {
    pub layout: LayoutDto,
    pub member: MemberPageDto,
}

pub fn MemberPage(props: MemberPageProps) -> Element {
    let member = props.member;

    rsx! {
        Layout {
            layout: props.layout,
            title: member.username.clone(),
            if member.characters.is_empty() {
                p { "{member.username} has no characters in this guild." }
            } else {
                table {
                    class: "table table-md",
                    thead {
                        tr {
                            th { "Character" }
                            th { "Class" }
                            th { "Raid" }
                            th { "Note" }
                        }
                    }
                    tbody {
                        for character in member.characters.iter() {
                            tr {
                                class: if character.is_inactive { "opacity-60" } else { "" },
                                td {
                                    span { class: "font-medium", "{character.name}" }
                                    if character.is_alt {
                                        span { class: "badge badge-ghost badge-xs ml-1", "alt" }
                                    }
                                    if character.is_inactive {
                                        span { class: "badge badge-error badge-xs ml-1", "inactive" }
                                    }
                                }
                                td {
                                    {[character.level.map(|l| l.to_string()), character.race.clone(), character.spec.clone(), character.class.clone()]
                                        .into_iter()
                                        .flatten()
                                        .collect::<Vec<_>>()
                                        .join(" ")}
                                }
                                td { {character.raid_name.clone().unwrap_or_default()} }
                                td {
                                    if let Some(note) = &character.public_note {
                                        div { class: "text-sm", "{note}" }
                                    }
                                    if let Some(officer_note) = &character.officer_note {
                                        div { class: "text-sm text-warning", "Officer: {officer_note}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

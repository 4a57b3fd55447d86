use dioxus::prelude::*;

use crate::{
    model::{guild::LayoutDto, item::RecipeEntryDto},
    view::components::{item_url, CharacterLootList, Layout},
};

#[derive(Props, Clone, PartialEq)]
pub struct RecipeListPageProps {
    pub layout: LayoutDto,
    pub recipes: Vec<RecipeEntryDto>,
}

pub fn RecipeListPage(props: RecipeListPageProps) -> Element {
    let guild_url = props.layout.guild_url();

    rsx! {
        Layout {
            layout: props.layout,
            title: "Recipes".to_string(),
            if props.recipes.is_empty() {
                p { "Nobody in the guild has a recipe listed yet." }
            } else {
                table {
                    class: "table table-md",
                    thead {
                        tr {
                            th { "Recipe" }
                            th { "Characters" }
                        }
                    }
                    tbody {
                        for recipe in props.recipes.iter() {
                            tr {
                                td {
                                    a {
                                        class: "q{recipe.quality} link",
                                        href: item_url(&guild_url, recipe.item_id, &recipe.name),
                                        "{recipe.name}"
                                    }
                                }
                                td {
                                    CharacterLootList {
                                        characters: recipe.characters.clone(),
                                        raids: Vec::new(),
                                        show_order: false,
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

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::view::{components::STYLESHEET_URL, render_page};

#[derive(Props, Clone, PartialEq)]
pub struct ErrorPageProps {
    pub status: u16,
    pub title: String,
    pub messages: Vec<String>,
}

/// Standalone error document, rendered without the guild layout since the guild may be unknown
pub fn ErrorPage(props: ErrorPageProps) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{props.title}" }
            link { rel: "stylesheet", href: STYLESHEET_URL }
        }
        body {
            div {
                class: "min-h-screen p-4 flex justify-center",
                div {
                    class: "card shadow-sm w-full max-w-196",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "{props.status} {props.title}" }
                        ul {
                            class: "list-disc ml-4",
                            for message in props.messages.iter() {
                                li { "{message}" }
                            }
                        }
                        a { class: "btn btn-outline mt-4", href: "/", "Back" }
                    }
                }
            }
        }
    }
}

pub fn render_error_page(status: StatusCode, title: &str, messages: Vec<String>) -> Response {
    (
        status,
        render_page(
            ErrorPage,
            ErrorPageProps {
                status: status.as_u16(),
                title: title.to_string(),
                messages,
            },
        ),
    )
        .into_response()
}

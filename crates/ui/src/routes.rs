use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{LookupView, NounQuizView, SentenceQuizView, VerbQuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LookupView)] Lookup {},
        #[route("/nouns", NounQuizView)] Nouns {},
        #[route("/sentences", SentenceQuizView)] Sentences {},
        #[route("/verbs", VerbQuizView)] Verbs {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "German Quiz" }
            ul {
                li { Link { to: Route::Lookup {}, "Lookup" } }
                li { Link { to: Route::Nouns {}, "Articles" } }
                li { Link { to: Route::Sentences {}, "Sentences" } }
                li { Link { to: Route::Verbs {}, "Verbs" } }
            }
        }
    }
}

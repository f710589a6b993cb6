use dioxus::prelude::*;
use services::LookupError;

use crate::context::AppContext;
use crate::vm::{ExampleVm, LookupVm, map_examples, map_lookup};

#[derive(Clone, Debug, PartialEq)]
enum LookupState {
    Idle,
    Loading,
    Found(Box<LookupVm>),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
enum GeneratedState {
    Idle,
    Loading,
    Ready(Vec<ExampleVm>),
    Failed(String),
}

fn failure_text(err: &LookupError) -> String {
    match err {
        LookupError::EmptyWord | LookupError::NotFound(_) => err.to_string(),
        LookupError::Generation(_) => "Could not generate examples.".to_string(),
        _ => "Lookup failed. Please try again.".to_string(),
    }
}

#[component]
pub fn LookupView() -> Element {
    let ctx = use_context::<AppContext>();
    let lookup = ctx.lookup();
    let mut word = use_signal(String::new);
    let state = use_signal(|| LookupState::Idle);
    let generated = use_signal(|| GeneratedState::Idle);

    let generator = lookup.clone();
    let generate = use_callback(move |query: String| {
        let lookup = generator.clone();
        let mut generated = generated;
        generated.set(GeneratedState::Loading);
        spawn(async move {
            let next = match lookup.examples(&query).await {
                Ok(pairs) => GeneratedState::Ready(map_examples(&pairs)),
                Err(err) => GeneratedState::Failed(failure_text(&err)),
            };
            generated.set(next);
        });
    });

    let submit = use_callback(move |()| {
        let lookup = lookup.clone();
        let mut state = state;
        let mut generated = generated;
        let query = word();
        state.set(LookupState::Loading);
        generated.set(GeneratedState::Idle);
        spawn(async move {
            let next = match lookup.lookup(&query).await {
                Ok(result) => {
                    let translations = lookup.translations(&query).await;
                    LookupState::Found(Box::new(map_lookup(&result, translations)))
                }
                Err(err) => LookupState::Failed(failure_text(&err)),
            };
            state.set(next);
        });
    });

    rsx! {
        div { class: "page lookup-page",
            h2 { "Word lookup" }
            div { class: "lookup-form",
                input {
                    id: "lookup-word",
                    r#type: "text",
                    placeholder: "Enter a German word",
                    value: "{word}",
                    oninput: move |evt| word.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            submit.call(());
                        }
                    },
                }
                button { r#type: "button", onclick: move |_| submit.call(()), "Look up" }
            }
            match state() {
                LookupState::Idle => rsx! {},
                LookupState::Loading => rsx! { p { class: "loading", "Looking up..." } },
                LookupState::Failed(message) => rsx! { p { class: "error", "{message}" } },
                LookupState::Found(vm) => rsx! {
                    LookupResultView { vm: *vm.clone() }
                    GeneratedExamples { word: vm.word.clone(), state: generated(), on_generate: generate }
                },
            }
        }
    }
}

#[component]
fn LookupResultView(vm: LookupVm) -> Element {
    rsx! {
        section { class: "lookup-result",
            h3 {
                if let Some(article) = vm.article.clone() {
                    span { class: "article", "{article} " }
                }
                "{vm.word}"
            }
            if let Some(translation) = vm.translation.clone() {
                p { class: "translation", "{translation}" }
            }
            if !vm.translations.is_empty() {
                ul { class: "translations",
                    for (index, pair) in vm.translations.iter().enumerate() {
                        li { key: "{index}", "{pair.source} → {pair.target}" }
                    }
                }
            }
            if let Some(note) = vm.dictionary_note.clone() {
                p { class: "dictionary-note", "{note}" }
            }
            if let Some(url) = vm.image_url.clone() {
                img { class: "verb-image", src: "{url}", alt: "{vm.word}" }
            }
            if !vm.examples.is_empty() {
                ul { class: "examples",
                    for (index, example) in vm.examples.iter().enumerate() {
                        li { key: "{index}",
                            span { class: "de", "{example.de}" }
                            span { class: "en", " ({example.en})" }
                        }
                    }
                }
            }
            div { class: "verbformen", dangerous_inner_html: "{vm.verbformen_html}" }
            pre { class: "pons", "{vm.pons}" }
        }
    }
}

#[component]
fn GeneratedExamples(word: String, state: GeneratedState, on_generate: Callback<String>) -> Element {
    rsx! {
        section { class: "generated-examples",
            button {
                id: "generate-examples",
                r#type: "button",
                disabled: state == GeneratedState::Loading,
                onclick: move |_| on_generate.call(word.clone()),
                "Generate examples"
            }
            match state {
                GeneratedState::Idle => rsx! {},
                GeneratedState::Loading => rsx! { p { class: "loading", "Generating..." } },
                GeneratedState::Failed(message) => rsx! { p { class: "error", "{message}" } },
                GeneratedState::Ready(examples) => rsx! {
                    ul { class: "examples generated",
                        for (index, example) in examples.iter().enumerate() {
                            li { key: "{index}",
                                span { class: "de", "{example.de}" }
                                span { class: "en", " ({example.en})" }
                            }
                        }
                    }
                },
            }
        }
    }
}

use dioxus::prelude::*;
use quiz_core::quiz::{NounRound, QuizMode};
use services::{ArticleNounController, NounIntent};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ArticleButtonVm, NounQuizVm, map_noun_quiz};

#[component]
pub fn NounQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.noun_quiz();
    let controller = use_signal(|| None::<ArticleNounController>);
    let input = use_signal(String::new);

    let resource = use_resource(move || {
        let service = service.clone();
        let mut controller = controller;
        async move {
            let started = service.start(QuizMode::Article).await;
            controller.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = use_callback(move |intent: NounIntent| {
        let mut controller = controller;
        let mut input = input;
        let mut guard = controller.write();
        let Some(quiz) = guard.as_mut() else {
            return;
        };
        let new_round = match &intent {
            NounIntent::Next | NounIntent::SwitchMode(_) => true,
            NounIntent::Confirm(_) => quiz.round().is_some_and(NounRound::is_submitted),
            _ => false,
        };
        quiz.dispatch(intent);
        if new_round {
            input.set(String::new());
        }
    });

    let vm = controller.read().as_ref().map(map_noun_quiz);

    rsx! {
        div { class: "page quiz-page", id: "noun-quiz",
            h2 { "Der, die, das?" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "error", "{ViewError::message()}" }
                },
                ViewState::Ready(()) => match vm {
                    Some(vm) => rsx! { NounBoard { vm, input, on_intent: dispatch } },
                    None => rsx! {},
                },
            }
        }
    }
}

#[component]
fn NounBoard(vm: NounQuizVm, input: Signal<String>, on_intent: Callback<NounIntent>) -> Element {
    let mode_class = |mode: QuizMode| {
        if vm.mode == mode {
            "mode-btn active"
        } else {
            "mode-btn"
        }
    };

    rsx! {
        div { class: "mode-switch",
            button {
                class: mode_class(QuizMode::Article),
                onclick: move |_| on_intent.call(NounIntent::SwitchMode(QuizMode::Article)),
                "Article"
            }
            button {
                class: mode_class(QuizMode::Type),
                onclick: move |_| on_intent.call(NounIntent::SwitchMode(QuizMode::Type)),
                "Type"
            }
        }
        if !vm.has_round {
            p { class: "prompt", "No nouns available" }
        } else {
            match vm.mode {
                QuizMode::Article => rsx! { ArticlePanel { vm: vm.clone(), on_intent } },
                QuizMode::Type => rsx! { TypePanel { vm: vm.clone(), answer: input, on_intent } },
            }
            if vm.hint_visible {
                button {
                    class: "hint-btn",
                    onclick: move |_| on_intent.call(NounIntent::ShowHint),
                    "{vm.hint_label}"
                }
            }
            if let Some(reveal) = vm.reveal.clone() {
                div { class: if vm.celebrate { "noun-result celebrate" } else { "noun-result" },
                    p { "Full word: {reveal.full_word}" }
                    if let Some(plural) = reveal.plural {
                        p { "Plural: {plural}" }
                    }
                    if let Some(example) = reveal.example {
                        p { "Example: {example}" }
                    }
                }
            }
            button {
                class: vm.next_class,
                onclick: move |_| on_intent.call(NounIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn ArticlePanel(vm: NounQuizVm, on_intent: Callback<NounIntent>) -> Element {
    rsx! {
        div { class: "article-mode",
            p { class: "noun-display", "{vm.prompt}" }
            p { class: "meaning", "{vm.meaning}" }
            div { class: "article-buttons",
                for ArticleButtonVm { article, class } in vm.buttons.iter().cloned() {
                    button {
                        key: "{article}",
                        class,
                        disabled: vm.buttons_disabled,
                        onclick: move |_| on_intent.call(NounIntent::PickArticle(article)),
                        "{article}"
                    }
                }
            }
        }
    }
}

#[component]
fn TypePanel(vm: NounQuizVm, answer: Signal<String>, on_intent: Callback<NounIntent>) -> Element {
    let mut answer = answer;
    rsx! {
        div { class: "type-mode",
            p { class: "meaning", "{vm.meaning}" }
            if vm.input_visible {
                input {
                    class: vm.input_class,
                    r#type: "text",
                    placeholder: "der/die/das + noun",
                    value: "{answer}",
                    oninput: move |evt| answer.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            on_intent.call(NounIntent::Confirm(answer()));
                        }
                    },
                }
            } else {
                div {
                    tabindex: "0",
                    class: "confirm-next",
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            on_intent.call(NounIntent::Confirm(String::new()));
                        }
                    },
                    "Press Enter for the next word"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use services::{VerbIntent, VerbQuizController};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ConjugationRowVm, VerbQuizVm, map_verb_quiz};

#[component]
pub fn VerbQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.verb_quiz();
    let controller = use_signal(VerbQuizController::new);

    let first = service.clone();
    let resource = use_resource(move || {
        let service = first.clone();
        let mut controller = controller;
        async move {
            let fetched = service.next_challenge().await;
            controller.write().load(fetched);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = use_callback(move |intent: VerbIntent| {
        let mut controller = controller;
        let effect = controller.write().apply(intent);
        if effect.next_requested {
            let service = service.clone();
            spawn(async move {
                let fetched = service.next_challenge().await;
                controller.write().load(fetched);
            });
        }
    });

    let vm = map_verb_quiz(&controller.read());

    rsx! {
        div { class: "page quiz-page", id: "verb-quiz",
            h2 { "Fill in the verb" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "error", "{ViewError::message()}" }
                },
                ViewState::Ready(()) => rsx! { VerbBoard { vm, on_intent: dispatch } },
            }
        }
    }
}

#[component]
fn VerbBoard(vm: VerbQuizVm, on_intent: Callback<VerbIntent>) -> Element {
    if let Some(status) = vm.status {
        return rsx! { p { class: "prompt", "{status}" } };
    }

    let answer = vm.answer.clone();

    rsx! {
        div { class: "verb-card",
            h3 { class: "infinitive", "{vm.infinitive}" }
            p { class: "meaning", "{vm.meaning}" }
            if let Some(perfect) = vm.perfect.clone() {
                p { class: "perfect", "Perfekt: {perfect}" }
            }
            if !vm.conjugation.is_empty() {
                table { class: "conjugation",
                    for ConjugationRowVm { person, form } in vm.conjugation.iter().cloned() {
                        tr { key: "{person}",
                            td { class: "person", "{person}" }
                            td { class: "form", "{form}" }
                        }
                    }
                }
            }
        }
        match vm.sentence.clone() {
            Some(sentence) => rsx! {
                div { class: "verb-sentence",
                    if let Some(english) = vm.english.clone() {
                        p { class: "english", "{english}" }
                    }
                    p { class: "blanked", "{sentence}" }
                    input {
                        id: "verb-answer",
                        class: vm.input_class,
                        r#type: "text",
                        placeholder: "Type the missing form",
                        disabled: vm.input_disabled,
                        value: "{vm.answer}",
                        oninput: move |evt| on_intent.call(VerbIntent::Fill(evt.value())),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.data.key() == Key::Enter {
                                evt.prevent_default();
                                on_intent.call(VerbIntent::Confirm(answer.clone()));
                            }
                        },
                    }
                    if let Some(revealed) = vm.revealed.clone() {
                        p { class: "revealed", "{revealed}" }
                    }
                }
            },
            None => rsx! {
                p { class: "no-sentence", "No example sentence uses this verb yet." }
            },
        }
        div { class: "controls",
            button { id: "verb-check", onclick: move |_| on_intent.call(VerbIntent::Check), "Check" }
            button { id: "verb-reveal", onclick: move |_| on_intent.call(VerbIntent::Reveal), "Show answer" }
            button { id: "verb-next", onclick: move |_| on_intent.call(VerbIntent::Next), "Next" }
        }
        p { class: "score", "Solved: {vm.solved}" }
    }
}

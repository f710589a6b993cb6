use dioxus::prelude::*;
use quiz_core::quiz::SentenceRound;
use services::sentence_quiz::ERROR_FLASH;
use services::{SentenceIntent, SentenceOrderController};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SentenceQuizVm, map_sentence_quiz};

#[component]
pub fn SentenceQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.sentence_quiz();
    let controller = use_signal(|| None::<SentenceOrderController>);

    let resource = use_resource(move || {
        let service = service.clone();
        let mut controller = controller;
        async move {
            let started = service.start().await;
            controller.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = use_callback(move |intent: SentenceIntent| {
        let mut controller = controller;
        let (sync, flash) = {
            let mut guard = controller.write();
            let Some(value) = guard.as_mut() else {
                return;
            };
            let effect = value.apply(intent);
            let flash = value.round().is_some_and(SentenceRound::error_flash);
            (effect.sync, flash)
        };

        if let Some(sync) = sync {
            spawn(async move {
                let result = sync.run().await;
                if let Some(value) = controller.write().as_mut() {
                    value.finish_sync(result);
                }
            });
        }

        if flash && matches!(intent, SentenceIntent::Check | SentenceIntent::Advance) {
            spawn(async move {
                tokio::time::sleep(ERROR_FLASH).await;
                if let Some(value) = controller.write().as_mut() {
                    value.clear_error_flash();
                }
            });
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SentenceTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| match evt.data.key() {
        Key::Tab => {
            evt.prevent_default();
            if evt.data.modifiers().contains(Modifiers::SHIFT) {
                dispatch.call(SentenceIntent::FocusPrev);
            } else {
                dispatch.call(SentenceIntent::FocusNext);
            }
        }
        Key::Enter => {
            let focused = controller
                .read()
                .as_ref()
                .and_then(SentenceOrderController::round)
                .and_then(SentenceRound::focus)
                .is_some();
            if focused {
                evt.prevent_default();
                dispatch.call(SentenceIntent::Activate);
            }
        }
        _ => {}
    });

    let vm = controller.read().as_ref().map(map_sentence_quiz);

    rsx! {
        div { class: "page quiz-page", id: "sentence-quiz", tabindex: "0", onkeydown: on_key,
            h2 { "Build the sentence" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "error", "{ViewError::message()}" }
                },
                ViewState::Ready(()) => match vm {
                    Some(vm) => rsx! { SentenceBoard { vm, on_intent: dispatch } },
                    None => rsx! {},
                },
            }
        }
    }
}

#[component]
fn SentenceBoard(vm: SentenceQuizVm, on_intent: Callback<SentenceIntent>) -> Element {
    rsx! {
        div { class: "progress",
            span { "Correct: " span { id: "correct-count", "{vm.correct_count}" } }
            span { " / Total: " span { id: "total-count", "{vm.total_count}" } }
            if !vm.last_day.is_empty() {
                div { id: "last-day-result", class: "last-day", "{vm.last_day}" }
            }
        }
        p { id: "english-translation", class: "prompt", "{vm.prompt}" }
        if let Some(sentence) = vm.correct_sentence.clone() {
            div { class: "correct-sentence", "{sentence}" }
        }
        if vm.has_round {
            div { id: "sentence-builder", class: vm.builder_class,
                for (index, token) in vm.builder.iter().enumerate() {
                    div {
                        key: "builder-{index}",
                        class: "{token.class}",
                        onclick: move |_| on_intent.call(SentenceIntent::Unselect(index)),
                        "{token.text}"
                    }
                }
            }
            div { id: "word-bank", class: "word-bank",
                for (index, token) in vm.bank.iter().enumerate() {
                    div {
                        key: "bank-{index}-{token.text}",
                        class: "{token.class}",
                        onclick: move |_| on_intent.call(SentenceIntent::Select(index)),
                        "{token.text}"
                    }
                }
            }
            if let Some(hint) = vm.hint_text.clone() {
                div { class: "hint-text", "{hint}" }
            }
            div { class: "controls",
                button { id: "check-btn", onclick: move |_| on_intent.call(SentenceIntent::Check), "Check" }
                button { id: "hint-btn", onclick: move |_| on_intent.call(SentenceIntent::Hint), "Hint" }
                button { id: "next-btn", onclick: move |_| on_intent.call(SentenceIntent::Advance), "Next" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SentenceTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<SentenceIntent>>>>,
}

#[cfg(test)]
impl SentenceTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SentenceIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<SentenceIntent> {
        (*self.dispatch.borrow()).expect("sentence dispatch registered")
    }
}

use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::{
    AppServices, LookupService, NounQuizService, SentenceIntent, SentenceQuizService,
    VerbQuizService,
};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::sentence_quiz::SentenceTestHandles;
use crate::views::{LookupView, NounQuizView, SentenceQuizView, VerbQuizView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn sentence_quiz(&self) -> Arc<SentenceQuizService> {
        self.services.sentence_quiz()
    }

    fn noun_quiz(&self) -> Arc<NounQuizService> {
        self.services.noun_quiz()
    }

    fn verb_quiz(&self) -> Arc<VerbQuizService> {
        self.services.verb_quiz()
    }

    fn lookup(&self) -> Arc<LookupService> {
        self.services.lookup()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Lookup,
    Nouns,
    Sentences,
    Verbs,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    sentence_handles: SentenceTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.sentence_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Lookup => rsx! { LookupView {} },
        ViewKind::Nouns => rsx! { NounQuizView {} },
        ViewKind::Sentences => rsx! { SentenceQuizView {} },
        ViewKind::Verbs => rsx! { VerbQuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sentence_handles: SentenceTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let pending resources resolve, then re-render.
    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Send an intent through the sentence view's own dispatch callback.
    pub fn dispatch_sentence(&mut self, intent: SentenceIntent) {
        let dispatch = self.sentence_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, repo: InMemoryRepository) -> ViewHarness {
    let storage = Storage::from_in_memory(repo);
    setup_view_harness_with_storage(view, &storage)
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let services = AppServices::from_storage(storage, fixed_clock(), Some(7));
    let app = Arc::new(TestApp { services });
    let sentence_handles = SentenceTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            sentence_handles: sentence_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        sentence_handles,
    }
}

use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::Catalog;
use services::{
    AppServices, HighlightConfig, PROGRESS_STORAGE_KEY, ProgressStore, QuestionBankService,
};
use storage::repository::{KeyValueRepository, Storage};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::progress::use_progress_provider;
use crate::views::{HomeView, NotFoundView, TopicView, TopicsView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBankService> {
        self.services.question_bank()
    }

    fn progress_store(&self) -> Arc<ProgressStore> {
        self.services.progress_store()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Topics,
    Topic(String),
    NotFound(Vec<String>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
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
    use_context_provider(|| props.view.clone());
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
    let ctx = use_context::<AppContext>();
    use_progress_provider(ctx.progress_store());
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Topic(slug) => rsx! { TopicView { slug } },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    /// Mount without polling any task, leaving the pre-hydration frame.
    pub fn rebuild_first_frame(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_progress(view, None).await
}

/// `saved_progress` is written under the progress key before the view mounts.
pub async fn setup_view_harness_with_progress(
    view: ViewKind,
    saved_progress: Option<&str>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    if let Some(blob) = saved_progress {
        storage
            .local
            .put_value(PROGRESS_STORAGE_KEY, blob)
            .await
            .expect("seed progress");
    }

    let services = AppServices::with_parts(
        Catalog::builtin().expect("builtin catalog"),
        HighlightConfig::default(),
        ProgressStore::new(Arc::clone(&storage.local)),
    );
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}

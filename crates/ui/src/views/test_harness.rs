use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use memtest_core::model::{CountdownId, PHASE_SECS, Symbol, SymbolPool};
use memtest_core::time::fixed_clock;
use services::{Clock, QuizSnapshot};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

pub const TEST_SYMBOLS: [&str; 10] = [
    "sym-a", "sym-b", "sym-c", "sym-d", "sym-e", "sym-f", "sym-g", "sym-h", "sym-i", "sym-j",
];

struct TestApp {
    seed: u64,
}

impl UiApp for TestApp {
    fn symbol_pool(&self) -> SymbolPool {
        SymbolPool::new(TEST_SYMBOLS).expect("test pool")
    }

    fn shuffle_seed(&self) -> Option<u64> {
        Some(self.seed)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarnessRoot(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
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

    /// Let the ticker run for `span` of (paused) tokio time.
    pub async fn advance(&mut self, span: std::time::Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    /// Whether a countdown task is currently held by the view.
    pub fn ticking(&self) -> bool {
        let ticker = self.handles.ticker();
        self.dom.in_runtime(|| ticker.read().is_some())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().snapshot())
    }

    pub fn target(&self) -> Vec<Symbol> {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().target().to_vec())
    }

    /// Deliver a full phase worth of ticks for the current countdown.
    pub fn expire_phase(&mut self) {
        let id: CountdownId = self.snapshot().countdown;
        for _ in 0..PHASE_SECS {
            self.dispatch(QuizIntent::Tick(id));
        }
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(seed: u64) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarnessRoot,
        QuizHarnessProps {
            app: Arc::new(TestApp { seed }),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}

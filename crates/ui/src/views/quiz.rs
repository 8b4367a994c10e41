use dioxus::core::Task;
use dioxus::prelude::*;

use memtest_core::model::{Phase, Transition};
use services::TICK_PERIOD;

use super::{MemorizeScreen, RecallScreen, ResultsScreen, WelcomeScreen};
use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || QuizVm::new(ctx.new_quiz()));
    let mut ticker = use_signal(|| None::<Task>);

    // Re-runs only when the countdown changes, which happens exactly once per
    // phase change. The previous ticker must never outlive its phase.
    let countdown_key = use_memo(move || vm.read().countdown_key());
    use_effect(move || {
        let key = countdown_key();
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        let Some(id) = key else {
            return;
        };
        let task = spawn(async move {
            let mut vm = vm;
            loop {
                tokio::time::sleep(TICK_PERIOD).await;
                if vm.write().dispatch(QuizIntent::Tick(id)) != Transition::Updated {
                    break;
                }
            }
        });
        ticker.set(Some(task));
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        vm.write().dispatch(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm, ticker);
            }
        }
    }

    let snapshot = vm.read().snapshot();
    let phase = snapshot.phase;
    let screen = match phase {
        Phase::Welcome => rsx! { WelcomeScreen { on_intent: dispatch_intent } },
        Phase::Memorize => rsx! { MemorizeScreen { snapshot } },
        Phase::Recall => rsx! { RecallScreen { snapshot, on_intent: dispatch_intent } },
        Phase::Results => match snapshot.result {
            Some(result) => rsx! { ResultsScreen { result, on_intent: dispatch_intent } },
            None => rsx! {},
        },
    };

    rsx! {
        main { class: "quiz-shell", "data-phase": "{phase}",
            {screen}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
    ticker: Rc<RefCell<Option<Signal<Option<Task>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<QuizVm>,
        ticker: Signal<Option<Task>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.ticker.borrow_mut() = Some(ticker);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    pub(crate) fn ticker(&self) -> Signal<Option<Task>> {
        (*self.ticker.borrow()).expect("quiz ticker registered")
    }
}

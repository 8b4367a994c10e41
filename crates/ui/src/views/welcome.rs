use dioxus::prelude::*;

use memtest_core::model::{PHASE_SECS, SEQUENCE_LEN};

use crate::vm::QuizIntent;

#[component]
pub fn WelcomeScreen(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-card quiz-card--welcome",
            header { class: "quiz-card__header",
                h1 { class: "quiz-card__title", "StudyMate" }
                p { class: "quiz-card__subtitle", "Memory & Focus Test" }
            }
            section { class: "quiz-steps",
                h2 { "How it works:" }
                ol {
                    li { strong { "Memorize" } " {SEQUENCE_LEN} emojis in {PHASE_SECS} seconds" }
                    li { strong { "Recall" } " them in order in the next {PHASE_SECS} seconds" }
                    li { strong { "Discover" } " your unique study pattern!" }
                }
            }
            button {
                class: "quiz-cta",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Your Brain Journey 🚀"
            }
        }
    }
}

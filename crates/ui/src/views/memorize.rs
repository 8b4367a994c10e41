use dioxus::prelude::*;

use services::QuizSnapshot;

use crate::vm::format_countdown;

#[component]
pub fn MemorizeScreen(snapshot: QuizSnapshot) -> Element {
    let timer = format_countdown(snapshot.remaining_secs);

    rsx! {
        div { class: "quiz-card quiz-card--memorize",
            header { class: "quiz-card__header",
                h2 { class: "quiz-card__title", "Memorize These!" }
                p { class: "quiz-timer", id: "quiz-timer", "{timer}" }
            }
            div { class: "quiz-grid",
                for (index, symbol) in snapshot.target.iter().enumerate() {
                    div { key: "{index}", class: "quiz-symbol", "{symbol}" }
                }
            }
            p { class: "quiz-card__hint", "Remember the order! You'll need to recall them next 🧠" }
        }
    }
}

use dioxus::prelude::*;

use services::{PaletteEntry, QuizSnapshot};

use crate::vm::{QuizIntent, format_countdown, progress_label};

#[component]
pub fn RecallScreen(snapshot: QuizSnapshot, on_intent: EventHandler<QuizIntent>) -> Element {
    let timer = format_countdown(snapshot.remaining_secs);
    let progress = progress_label(snapshot.picks.len());

    rsx! {
        div { class: "quiz-card quiz-card--recall",
            header { class: "quiz-card__header",
                h2 { class: "quiz-card__title", "Tap in Order!" }
                p { class: "quiz-timer", id: "quiz-timer", "{timer}" }
            }
            section { class: "quiz-order",
                p { class: "quiz-order__label", "{progress}" }
                div { class: "quiz-order__slots",
                    for (index, symbol) in snapshot.picks.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "quiz-symbol quiz-symbol--picked",
                            r#type: "button",
                            title: "Remove",
                            onclick: move |_| on_intent.call(QuizIntent::Unpick(index)),
                            "{symbol}"
                        }
                    }
                }
            }
            div { class: "quiz-grid",
                for entry in snapshot.palette.iter() {
                    PaletteButton { key: "{entry.symbol}", entry: entry.clone(), on_intent }
                }
            }
            if snapshot.can_submit {
                button {
                    class: "quiz-cta",
                    id: "quiz-submit",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Submit),
                    "Submit & See Results! ✨"
                }
            }
        }
    }
}

#[component]
fn PaletteButton(entry: PaletteEntry, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if entry.picked {
        "quiz-symbol quiz-symbol--used"
    } else {
        "quiz-symbol quiz-symbol--open"
    };
    let symbol = entry.symbol.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: entry.picked,
            onclick: move |_| on_intent.call(QuizIntent::Pick(symbol.clone())),
            "{entry.symbol}"
        }
    }
}

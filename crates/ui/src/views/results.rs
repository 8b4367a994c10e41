use dioxus::prelude::*;

use memtest_core::model::Profile;
use services::QuizResult;

use crate::vm::{QuizIntent, format_elapsed};

#[component]
pub fn ResultsScreen(result: QuizResult, on_intent: EventHandler<QuizIntent>) -> Element {
    let profile: &'static Profile = result.profile;
    let gradient = format!(
        "background: linear-gradient(135deg, {}, {});",
        profile.theme.start, profile.theme.end
    );
    let score = result.score;
    let elapsed = format_elapsed(result.elapsed().num_seconds());
    let details = [
        ("⏱️", "Perfect Study Duration", profile.duration),
        ("☕", "Break Time", profile.break_time),
        ("📚", "Best Method", profile.method),
        ("🎯", "Study Style", profile.style),
        ("🌟", "Ideal Time", profile.ideal_time),
    ];

    rsx! {
        div { class: "quiz-card quiz-card--results",
            section { class: "quiz-score",
                p { class: "quiz-score__label", "Your Memory Score" }
                p { class: "quiz-score__value", id: "quiz-score", "{score}%" }
                p { class: "quiz-score__meta", "{result.correct} correct in {elapsed}" }
            }
            section { class: "quiz-profile", style: "{gradient}",
                span { class: "quiz-profile__icon", "{profile.icon}" }
                h2 { class: "quiz-profile__name", id: "quiz-profile", "{profile.name}" }
                p { class: "quiz-profile__description", "{profile.description}" }
            }
            dl { class: "quiz-details",
                for (icon, label, value) in details {
                    div { key: "{label}", class: "quiz-details__row",
                        dt { "{icon} {label}" }
                        dd { "{value}" }
                    }
                }
            }
            section { class: "quiz-tips",
                h3 { "Your Personalized Study Tips" }
                ul {
                    for tip in profile.tips.iter() {
                        li { key: "{tip}", "{tip}" }
                    }
                }
            }
            button {
                class: "quiz-cta",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Try Again 🔄"
            }
        }
    }
}

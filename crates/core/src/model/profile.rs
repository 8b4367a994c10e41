use serde::Serialize;
use std::fmt;

/// Lowest score (inclusive) that maps to [`ProfileKind::DeepThinker`].
pub const DEEP_THINKER_MIN: u8 = 70;

/// Lowest score (inclusive) that maps to [`ProfileKind::BalancedLearner`].
pub const BALANCED_LEARNER_MIN: u8 = 40;

/// The three learner profiles a score can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    DeepThinker,
    BalancedLearner,
    FastThinker,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

impl ProfileKind {
    /// Static reference record for this kind.
    #[must_use]
    pub fn profile(self) -> &'static Profile {
        match self {
            ProfileKind::DeepThinker => &DEEP_THINKER,
            ProfileKind::BalancedLearner => &BALANCED_LEARNER,
            ProfileKind::FastThinker => &FAST_THINKER,
        }
    }
}

/// Two-stop gradient used when presenting a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    pub start: &'static str,
    pub end: &'static str,
}

/// Pre-authored study recommendation shown on the results screen.
///
/// Exactly three instances exist; see [`ProfileKind::profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub kind: ProfileKind,
    pub name: &'static str,
    pub icon: &'static str,
    pub theme: ColorTheme,
    pub description: &'static str,
    pub duration: &'static str,
    pub break_time: &'static str,
    pub method: &'static str,
    pub style: &'static str,
    pub ideal_time: &'static str,
    pub tips: &'static [&'static str],
}

pub static DEEP_THINKER: Profile = Profile {
    kind: ProfileKind::DeepThinker,
    name: "Deep Thinker",
    icon: "🧠",
    theme: ColorTheme {
        start: "#a855f7",
        end: "#ec4899",
    },
    description: "Your brain is built for intense focus and deep understanding!",
    duration: "40-50 minutes",
    break_time: "10-15 minutes",
    method: "Deep Reading + Problem Solving",
    style: "Theory-heavy subjects with comprehensive summaries",
    ideal_time: "Morning or whenever you feel most alert",
    tips: &[
        "Tackle complex topics head-on - your brain loves the challenge",
        "Take comprehensive notes and create mind maps",
        "Perfect for mathematics, philosophy, and detailed analysis",
    ],
};

pub static BALANCED_LEARNER: Profile = Profile {
    kind: ProfileKind::BalancedLearner,
    name: "Balanced Learner",
    icon: "⚡",
    theme: ColorTheme {
        start: "#3b82f6",
        end: "#14b8a6",
    },
    description: "You have a beautifully balanced brain that thrives with rhythm and routine!",
    duration: "25-30 minutes",
    break_time: "5-7 minutes",
    method: "Active Recall + Practice",
    style: "Mix of theory and practice with regular revision",
    ideal_time: "Flexible - you adapt well to different times",
    tips: &[
        "Use the classic Pomodoro technique - it's made for you",
        "Review yesterday's learning before starting new topics",
        "Mix subjects to keep your brain engaged and fresh",
    ],
};

pub static FAST_THINKER: Profile = Profile {
    kind: ProfileKind::FastThinker,
    name: "Fast Thinker",
    icon: "⚡",
    theme: ColorTheme {
        start: "#f97316",
        end: "#ef4444",
    },
    description: "Your brain is lightning-fast and loves variety and visual excitement!",
    duration: "15-20 minutes",
    break_time: "3-5 minutes",
    method: "Flashcards + Visual Learning",
    style: "Short bursts with lots of variety and visuals",
    ideal_time: "Evening or in multiple mini-sessions throughout the day",
    tips: &[
        "Embrace your speed! Short, frequent sessions are your superpower",
        "Use colorful notes, diagrams, and videos",
        "Switch subjects often to keep your brilliant brain engaged",
        "Quiz yourself constantly - make it a game!",
    ],
};

/// Map a percentage score to its profile. Bands are closed on the lower bound.
#[must_use]
pub fn select_profile(percent: u8) -> &'static Profile {
    let kind = if percent >= DEEP_THINKER_MIN {
        ProfileKind::DeepThinker
    } else if percent >= BALANCED_LEARNER_MIN {
        ProfileKind::BalancedLearner
    } else {
        ProfileKind::FastThinker
    };
    kind.profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_on_lower_bound() {
        assert_eq!(select_profile(70).kind, ProfileKind::DeepThinker);
        assert_eq!(select_profile(69).kind, ProfileKind::BalancedLearner);
        assert_eq!(select_profile(40).kind, ProfileKind::BalancedLearner);
        assert_eq!(select_profile(39).kind, ProfileKind::FastThinker);
    }

    #[test]
    fn every_percentage_has_exactly_one_profile() {
        for percent in 0..=100_u8 {
            let profile = select_profile(percent);
            let expected = match percent {
                70..=100 => "Deep Thinker",
                40..=69 => "Balanced Learner",
                _ => "Fast Thinker",
            };
            assert_eq!(profile.name, expected, "percent {percent}");
        }
    }

    #[test]
    fn kind_round_trips_to_its_record() {
        for kind in [
            ProfileKind::DeepThinker,
            ProfileKind::BalancedLearner,
            ProfileKind::FastThinker,
        ] {
            assert_eq!(kind.profile().kind, kind);
        }
        assert_eq!(ProfileKind::FastThinker.to_string(), "Fast Thinker");
    }

    #[test]
    fn fast_thinker_has_four_tips() {
        assert_eq!(FAST_THINKER.tips.len(), 4);
        assert_eq!(DEEP_THINKER.tips.len(), 3);
    }
}

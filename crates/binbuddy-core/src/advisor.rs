// Category decision table - what to ask or tell the user per predicted class

/// Title for question dialogs.
pub const QUESTION_TITLE: &str = "Condition Check";
/// Title for straight-to-advice dialogs.
pub const TERMINAL_TITLE: &str = "Result";

const GLASS_QUESTION: &str = "Is the glass broken?";

const BATTERY_NOTICE: &str =
    "Batteries need special handling. Please drop them off at designated battery recycling centers.";
const UNRECOGNIZED: &str = "Item not recognized. Please try again with a different description.";

const DEFAULT_POSITIVE: &str = "Great! This item is suitable for recycling.";
const DEFAULT_NEGATIVE: &str = "Thanks for checking! This item is not suitable for recycling.";

/// What to present after a category comes back from the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Needs a Yes/No answer before the final advice.
    Question {
        text: &'static str,
        on_yes: &'static str,
        on_no: &'static str,
    },
    /// Advice with no question attached.
    Terminal { text: &'static str },
}

impl Prompt {
    /// The text presented first: the question, or the advice itself.
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::Question { text, .. } => text,
            Prompt::Terminal { text } => text,
        }
    }

    /// Resolve a Yes/No answer to its outcome text. Terminal prompts take no
    /// answer and return their own text.
    pub fn answer(&self, yes: bool) -> &'static str {
        match self {
            Prompt::Question { on_yes, on_no, .. } => {
                if yes {
                    on_yes
                } else {
                    on_no
                }
            }
            Prompt::Terminal { text } => text,
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Prompt::Question { .. })
    }

    /// Dialog title for this prompt.
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::Question { .. } => QUESTION_TITLE,
            Prompt::Terminal { .. } => TERMINAL_TITLE,
        }
    }
}

/// Dialog title for an answered question.
pub fn outcome_title(yes: bool) -> &'static str {
    if yes {
        "Great!"
    } else {
        "Thanks for checking!"
    }
}

enum Rule {
    /// Ask this before giving advice.
    Ask(&'static str),
    /// Skip the question and give this advice directly.
    Tell(&'static str),
}

/// One row per category label the model can produce. The three glass colors
/// share a rule.
const RULES: &[(&str, Rule)] = &[
    ("shoes", Rule::Ask("Are the shoes in good condition?")),
    ("clothes", Rule::Ask("Are the clothes in good condition?")),
    ("brown-glass", Rule::Ask(GLASS_QUESTION)),
    ("green-glass", Rule::Ask(GLASS_QUESTION)),
    ("white-glass", Rule::Ask(GLASS_QUESTION)),
    ("battery", Rule::Tell(BATTERY_NOTICE)),
    ("biological", Rule::Ask("Is it fresh and untampered?")),
    ("cardboard", Rule::Ask("Is it flattened and clean?")),
    ("metal", Rule::Ask("Is this a can?")),
    ("plastic", Rule::Ask("Is it a bottle or carton?")),
    ("paper", Rule::Ask("Is it paper packaging or a box?")),
];

/// Look up the prompt for a predicted category.
///
/// Unknown categories fall through to a terminal "not recognized" notice, so
/// the caller always has something to show. Pure, no I/O.
pub fn lookup(category: &str) -> Prompt {
    match RULES.iter().find(|(name, _)| *name == category) {
        Some((_, Rule::Ask(text))) => Prompt::Question {
            text,
            on_yes: positive_outcome(category),
            on_no: negative_outcome(category),
        },
        Some((_, Rule::Tell(text))) => Prompt::Terminal { text },
        None => Prompt::Terminal { text: UNRECOGNIZED },
    }
}

/// Advice when the condition check is answered Yes.
///
/// A Yes always routes here, even for the glass question where the wording
/// reads inverted. That matches the app this replaces.
pub fn positive_outcome(category: &str) -> &'static str {
    match category {
        "shoes" => {
            "Great! You confirmed that the shoes are in good condition and suitable for donation."
        }
        "clothes" => "Great! The clothes are in good condition and can be donated.",
        "brown-glass" | "green-glass" | "white-glass" => {
            "Great! The glass is intact and can be recycled."
        }
        "biological" => "Great! The biological waste is fresh and can be composted.",
        "cardboard" => "Great! The cardboard is clean and can be recycled.",
        "metal" => "Great! This metal can be recycled.",
        "plastic" => "Great! This plastic is recyclable.",
        "paper" => "Great! This paper is suitable for recycling.",
        _ => DEFAULT_POSITIVE,
    }
}

/// Advice when the condition check is answered No.
pub fn negative_outcome(category: &str) -> &'static str {
    match category {
        "shoes" => "Thanks for checking! The shoes are not suitable for donation.",
        "clothes" => "Thanks for checking! The clothes are not suitable for donation.",
        "brown-glass" | "green-glass" | "white-glass" => {
            "Thanks for checking! The glass is broken and cannot be recycled."
        }
        "biological" => "Thanks for checking! The biological waste should not be composted.",
        "cardboard" => "Thanks for checking! The cardboard is not clean and cannot be recycled.",
        "metal" => "Thanks for checking! This metal can’t be recycled as it is not a can.",
        "plastic" => "Thanks for checking! This plastic is not recyclable.",
        "paper" => "Thanks for checking! This paper packaging is not recyclable.",
        _ => DEFAULT_NEGATIVE,
    }
}

/// Every category the table knows about, in table order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metal_asks_about_cans_and_yes_recycles() {
        let prompt = lookup("metal");
        assert_eq!(prompt.text(), "Is this a can?");
        assert_eq!(prompt.answer(true), "Great! This metal can be recycled.");
    }

    #[test]
    fn plastic_answered_no_is_not_recyclable() {
        let prompt = lookup("plastic");
        assert_eq!(
            prompt.answer(false),
            "Thanks for checking! This plastic is not recyclable."
        );
    }

    #[test]
    fn battery_goes_straight_to_advice() {
        let prompt = lookup("battery");
        assert!(!prompt.is_question());
        assert_eq!(prompt.text(), BATTERY_NOTICE);
    }

    #[test]
    fn unknown_category_is_not_recognized() {
        let prompt = lookup("flux-capacitor");
        assert_eq!(prompt, Prompt::Terminal { text: UNRECOGNIZED });
    }

    #[test]
    fn every_known_category_has_a_non_empty_prompt() {
        for category in known_categories() {
            let prompt = lookup(category);
            assert!(!prompt.text().is_empty(), "empty prompt for {}", category);
        }
        assert_eq!(known_categories().count(), 11);
    }

    #[test]
    fn glass_yes_reports_intact_regardless_of_wording() {
        for color in ["brown-glass", "green-glass", "white-glass"] {
            let prompt = lookup(color);
            assert_eq!(prompt.text(), "Is the glass broken?");
            assert_eq!(
                prompt.answer(true),
                "Great! The glass is intact and can be recycled."
            );
            assert_eq!(
                prompt.answer(false),
                "Thanks for checking! The glass is broken and cannot be recycled."
            );
        }
    }

    #[test]
    fn outcome_defaults_cover_unknown_categories() {
        assert_eq!(positive_outcome("mystery"), DEFAULT_POSITIVE);
        assert_eq!(negative_outcome("mystery"), DEFAULT_NEGATIVE);
    }

    #[test]
    fn titles_match_the_dialog_kind() {
        assert_eq!(lookup("metal").title(), "Condition Check");
        assert_eq!(lookup("battery").title(), "Result");
        assert_eq!(outcome_title(true), "Great!");
        assert_eq!(outcome_title(false), "Thanks for checking!");
    }

    #[test]
    fn terminal_prompts_answer_with_their_own_text() {
        let prompt = lookup("battery");
        assert_eq!(prompt.answer(true), prompt.text());
        assert_eq!(prompt.answer(false), prompt.text());
    }
}

use quiz_core::quiz::{FocusTarget, RoundState};
use services::SentenceOrderController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenVm {
    pub text: String,
    pub class: String,
}

/// Render-ready snapshot of the reorder quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceQuizVm {
    pub prompt: String,
    pub has_round: bool,
    pub bank: Vec<TokenVm>,
    pub builder: Vec<TokenVm>,
    pub builder_class: &'static str,
    pub correct_sentence: Option<String>,
    pub hint_text: Option<String>,
    pub correct_count: u32,
    pub total_count: u32,
    pub last_day: String,
}

fn token_class(base: &str, focused: bool, correct: bool) -> String {
    let mut class = base.to_string();
    if correct {
        class.push_str(" correct");
    }
    if focused {
        class.push_str(" focused");
    }
    class
}

#[must_use]
pub fn map_sentence_quiz(controller: &SentenceOrderController) -> SentenceQuizVm {
    let counts = controller.progress().counts();
    let mut vm = SentenceQuizVm {
        prompt: controller
            .load_message()
            .or_else(|| controller.prompt())
            .unwrap_or_default()
            .to_string(),
        has_round: false,
        bank: Vec::new(),
        builder: Vec::new(),
        builder_class: "sentence-builder",
        correct_sentence: None,
        hint_text: None,
        correct_count: counts.correct,
        total_count: counts.total,
        last_day: controller.progress().last_day_label(),
    };

    let Some(round) = controller.round() else {
        return vm;
    };
    let focus = round.focus();
    let solved = round.state() == RoundState::CheckedCorrect;

    vm.has_round = true;
    vm.bank = round
        .bank()
        .into_iter()
        .enumerate()
        .map(|(index, token)| TokenVm {
            text: token.text,
            class: token_class("word", focus == Some(FocusTarget::Bank(index)), false),
        })
        .collect();
    vm.builder = round
        .selected()
        .iter()
        .enumerate()
        .map(|(index, text)| TokenVm {
            text: text.clone(),
            class: token_class(
                "word selected",
                focus == Some(FocusTarget::Builder(index)),
                solved,
            ),
        })
        .collect();
    if round.error_flash() {
        vm.builder_class = "sentence-builder incorrect";
    }
    vm.correct_sentence = round.correct_sentence().map(ToString::to_string);
    vm.hint_text = round.hint_text().map(ToString::to_string);
    vm
}

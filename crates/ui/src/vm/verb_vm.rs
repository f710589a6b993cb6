use quiz_core::quiz::VerbRound;
use services::VerbQuizController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugationRowVm {
    pub person: &'static str,
    pub form: String,
}

/// Render-ready snapshot of the verb quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbQuizVm {
    pub status: Option<&'static str>,
    pub infinitive: String,
    pub meaning: String,
    pub perfect: Option<String>,
    pub conjugation: Vec<ConjugationRowVm>,
    pub english: Option<String>,
    pub sentence: Option<String>,
    pub answer: String,
    pub input_class: &'static str,
    pub input_disabled: bool,
    pub revealed: Option<String>,
    pub solved: u32,
}

#[must_use]
pub fn map_verb_quiz(controller: &VerbQuizController) -> VerbQuizVm {
    let Some(round) = controller.round() else {
        return VerbQuizVm {
            status: controller.status_message(),
            infinitive: String::new(),
            meaning: String::new(),
            perfect: None,
            conjugation: Vec::new(),
            english: None,
            sentence: None,
            answer: String::new(),
            input_class: "verb-input",
            input_disabled: true,
            revealed: None,
            solved: controller.solved(),
        };
    };

    let challenge = round.challenge();
    let verb = &challenge.verb;
    VerbQuizVm {
        status: None,
        infinitive: verb.infinitive.clone(),
        meaning: verb.meaning.clone(),
        perfect: (challenge.has_perfect_form && !verb.perfect.is_empty())
            .then(|| verb.perfect.clone()),
        conjugation: verb
            .conjugation()
            .into_iter()
            .map(|(person, form)| ConjugationRowVm {
                person,
                form: form.to_string(),
            })
            .collect(),
        english: challenge.sentence.as_ref().map(|s| s.english.clone()),
        sentence: round.display_sentence(),
        answer: round.answer().to_string(),
        input_class: match round.result() {
            Some(true) => "verb-input correct",
            Some(false) => "verb-input incorrect",
            None => "verb-input",
        },
        input_disabled: round.is_solved() || challenge.sentence.is_none(),
        revealed: revealed_text(round),
        solved: controller.solved(),
    }
}

fn revealed_text(round: &VerbRound) -> Option<String> {
    if round.is_solved() {
        return None;
    }
    round.revealed_form().map(|form| format!("Answer: {form}"))
}

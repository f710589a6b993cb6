use quiz_core::model::Article;
use quiz_core::quiz::{ArticleMark, NounReveal, QuizMode};
use services::ArticleNounController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleButtonVm {
    pub article: Article,
    pub class: &'static str,
}

/// Render-ready snapshot of the noun quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NounQuizVm {
    pub mode: QuizMode,
    pub has_round: bool,
    pub prompt: String,
    pub meaning: String,
    pub buttons: Vec<ArticleButtonVm>,
    pub buttons_disabled: bool,
    pub input_visible: bool,
    pub input_class: &'static str,
    pub hint_visible: bool,
    pub hint_label: String,
    pub next_class: &'static str,
    pub celebrate: bool,
    pub reveal: Option<NounReveal>,
}

#[must_use]
pub fn map_noun_quiz(controller: &ArticleNounController) -> NounQuizVm {
    let mode = controller.mode();
    let Some(round) = controller.round() else {
        return NounQuizVm {
            mode,
            has_round: false,
            prompt: String::new(),
            meaning: String::new(),
            buttons: Vec::new(),
            buttons_disabled: true,
            input_visible: false,
            input_class: "noun-input",
            hint_visible: false,
            hint_label: String::new(),
            next_class: "next-btn",
            celebrate: false,
            reveal: None,
        };
    };

    let buttons = Article::ALL
        .into_iter()
        .map(|article| ArticleButtonVm {
            article,
            class: match round.mark(article) {
                Some(ArticleMark::Correct) => "article-btn correct",
                Some(ArticleMark::Incorrect) => "article-btn incorrect",
                None => "article-btn",
            },
        })
        .collect();

    NounQuizVm {
        mode,
        has_round: true,
        prompt: round.prompt().unwrap_or_default().to_string(),
        meaning: round.meaning().to_string(),
        buttons,
        buttons_disabled: round.buttons_disabled(),
        input_visible: round.input_visible(),
        input_class: if round.input_error() {
            "noun-input error"
        } else {
            "noun-input"
        },
        hint_visible: round.hint_available(),
        hint_label: round.hint_label(),
        next_class: if round.next_armed() {
            "next-btn correct"
        } else {
            "next-btn"
        },
        celebrate: round.celebrate(),
        reveal: round.reveal(),
    }
}

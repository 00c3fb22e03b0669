use crate::formula::format_formula;
use crate::model::{Question, Quiz};
use crate::view::QuizView;
use crate::view_models::{OptionEntry, OptionLabel, OptionMarks, QuestionGroup};

fn option_label(question: &Question, text: &str) -> OptionLabel {
    // Solo estas preguntas reciben marcado; el resto va como texto plano.
    if question.asks_for_chemical_formula() {
        OptionLabel::Markup(format_formula(text))
    } else {
        OptionLabel::Plain(text.to_owned())
    }
}

pub fn question_groups(quiz: &Quiz) -> Vec<QuestionGroup> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(qi, question)| QuestionGroup {
            question_id: question.id.clone(),
            legend: format!("{}. {}", qi + 1, question.text),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(oi, text)| OptionEntry {
                    input_id: format!("{}-{}-option-{}", quiz.id, question.id, oi),
                    value: oi,
                    label: option_label(question, text),
                    marks: OptionMarks::default(),
                })
                .collect(),
            selected: None,
            incomplete: false,
        })
        .collect()
}

pub fn render_questions<V: QuizView + ?Sized>(view: &mut V, quiz: &Quiz) {
    view.render_questions(question_groups(quiz));
}

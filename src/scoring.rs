use crate::model::Quiz;
use crate::view::QuizView;
use crate::view_models::OptionMarks;

pub const INCOMPLETE_PROMPT: &str = "Please answer all questions before submitting.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// round(correct / total * 100), redondeando .5 hacia arriba. Un quiz vacío da 0.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn summary(&self) -> String {
        format!(
            "You scored {} out of {} ({}%)",
            self.correct,
            self.total,
            self.percentage()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Ids de las preguntas sin respuesta.
    Incomplete(Vec<String>),
    Scored(Score),
}

/// Comprueba respuestas, marca opciones y escribe el resumen en la vista.
pub fn evaluate<V: QuizView + ?Sized>(view: &mut V, quiz: &Quiz) -> Outcome {
    let mut missing = Vec::new();
    for question in &quiz.questions {
        let answered = view.selected_option(&question.id).is_some();
        view.set_incomplete(&question.id, !answered);
        if !answered {
            missing.push(question.id.clone());
        }
    }

    if !missing.is_empty() {
        view.set_result_text(INCOMPLETE_PROMPT);
        return Outcome::Incomplete(missing);
    }

    let mut correct = 0;
    for question in &quiz.questions {
        let Some(selected) = view.selected_option(&question.id) else {
            continue;
        };
        if selected == question.correct_index {
            correct += 1;
        }

        for index in 0..question.options.len() {
            let marks = OptionMarks {
                correct: index == question.correct_index,
                incorrect: index == selected && selected != question.correct_index,
            };
            view.mark_option(&question.id, index, marks);
        }
    }

    let score = Score {
        correct,
        total: quiz.questions.len(),
    };
    view.set_result_text(&score.summary());
    Outcome::Scored(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use crate::render::render_questions;
    use crate::view::HeadlessView;

    fn quiz(correct: &[usize]) -> Quiz {
        Quiz {
            id: "letters".into(),
            title: "Letters".into(),
            description: String::new(),
            questions: correct
                .iter()
                .enumerate()
                .map(|(i, &c)| Question {
                    id: format!("q{i}"),
                    text: format!("Question {i}"),
                    options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    correct_index: c,
                })
                .collect(),
        }
    }

    fn rendered(quiz: &Quiz) -> HeadlessView {
        let mut view = HeadlessView::new();
        render_questions(&mut view, quiz);
        view
    }

    #[test]
    fn unanswered_quiz_gets_prompt_and_no_percentage() {
        let quiz = quiz(&[0, 1, 2]);
        let mut view = rendered(&quiz);

        let outcome = evaluate(&mut view, &quiz);
        assert_eq!(
            outcome,
            Outcome::Incomplete(vec!["q0".into(), "q1".into(), "q2".into()])
        );
        assert_eq!(view.result_text(), INCOMPLETE_PROMPT);
        assert!(!view.result_text().contains('%'));
        assert!(view.is_incomplete("q0"));
    }

    #[test]
    fn partial_answers_flag_only_missing_questions() {
        let quiz = quiz(&[0, 1]);
        let mut view = rendered(&quiz);
        view.select("q0", 0);

        evaluate(&mut view, &quiz);
        assert!(!view.is_incomplete("q0"));
        assert!(view.is_incomplete("q1"));
        // sin puntuación, sin marcas
        assert_eq!(view.marks("q0", 0), Some(OptionMarks::default()));

        view.select("q1", 3);
        evaluate(&mut view, &quiz);
        assert!(!view.is_incomplete("q1"));
        assert_eq!(view.result_text(), "You scored 1 out of 2 (50%)");
    }

    #[test]
    fn correct_selection_marks_only_correct() {
        let quiz = quiz(&[2]);
        let mut view = rendered(&quiz);
        view.select("q0", 2);

        evaluate(&mut view, &quiz);
        assert_eq!(
            view.marks("q0", 2),
            Some(OptionMarks { correct: true, incorrect: false })
        );
        for i in [0, 1, 3] {
            assert_eq!(view.marks("q0", i), Some(OptionMarks::default()));
        }
    }

    #[test]
    fn wrong_selection_marks_correct_and_incorrect() {
        let quiz = quiz(&[2]);
        let mut view = rendered(&quiz);
        view.select("q0", 0);

        evaluate(&mut view, &quiz);
        assert_eq!(
            view.marks("q0", 2),
            Some(OptionMarks { correct: true, incorrect: false })
        );
        assert_eq!(
            view.marks("q0", 0),
            Some(OptionMarks { correct: false, incorrect: true })
        );
    }

    #[test]
    fn re_evaluating_clears_stale_marks() {
        let quiz = quiz(&[2]);
        let mut view = rendered(&quiz);
        view.select("q0", 0);
        evaluate(&mut view, &quiz);
        view.select("q0", 2);
        evaluate(&mut view, &quiz);
        assert_eq!(view.marks("q0", 0), Some(OptionMarks::default()));
    }

    #[test]
    fn summary_rounds_half_up() {
        let quiz = quiz(&[0, 0, 0, 0, 0, 0, 0, 0]);
        let mut view = rendered(&quiz);
        for (i, q) in quiz.questions.iter().enumerate() {
            view.select(&q.id, if i == 0 { 0 } else { 1 });
        }
        assert_eq!(
            evaluate(&mut view, &quiz),
            Outcome::Scored(Score { correct: 1, total: 8 })
        );
        assert_eq!(view.result_text(), "You scored 1 out of 8 (13%)");
    }

    #[test]
    fn percentages_match_rounding() {
        assert_eq!(Score { correct: 2, total: 3 }.percentage(), 67);
        assert_eq!(Score { correct: 1, total: 3 }.percentage(), 33);
        assert_eq!(Score { correct: 3, total: 3 }.percentage(), 100);
        assert_eq!(Score { correct: 0, total: 0 }.percentage(), 0);
    }
}

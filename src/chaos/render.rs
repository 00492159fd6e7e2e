use rand::Rng;
use teloxide::utils::html;

use super::effects::random_effect;
use super::ChaosLevel;
use crate::quiz::session::QuizSession;
use crate::quiz::{QuestionRecord, UNANSWERED};

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Telegram HTML for one question card.
pub fn render_question<R: Rng>(
    rng: &mut R,
    question: &QuestionRecord,
    number: usize,
    total: usize,
    progress: f64,
) -> String {
    let level = ChaosLevel::for_question(number);
    let effect = random_effect(level, rng);
    let border = level.border();

    let mut text = String::new();
    text.push_str(&level.floating_shapes(rng));
    text.push('\n');
    text.push_str(&border);
    text.push_str(&format!(
        "\n<b>Question {}/{}</b> {}\n\n",
        number,
        total,
        level.question_style().banner()
    ));
    text.push_str(&effect.apply(question.prompt, level, rng));
    text.push_str("\n\n");
    for (index, option) in question.options.iter().enumerate() {
        text.push_str(&format!(
            "{} <b>{}</b> {}\n",
            level.option_marker(index),
            LETTERS[index],
            html::escape(option)
        ));
    }
    text.push_str(&border);
    text.push_str(&format!("\n{} {:.0}%", level.progress_bar(progress), progress));
    text
}

/// Reply-keyboard labels. Each label starts with the answer letter so the reply
/// can be mapped back with [`parse_answer_letter`].
pub fn option_buttons(question: &QuestionRecord, number: usize) -> Vec<String> {
    let marker = ChaosLevel::for_question(number).button_marker();
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            format!("{} · {} {}", LETTERS[index], option, marker)
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Maps "B", "b" or "B · ..." to 1. A word that merely starts with a letter is not an answer.
pub fn parse_answer_letter(reply: &str) -> Option<usize> {
    let mut chars = reply.trim_start().chars();
    let first = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some_and(char::is_alphanumeric) {
        return None;
    }
    LETTERS.iter().position(|l| *l == first)
}

/// Telegram rejects messages longer than this, counted in UTF-16 units.
pub const MESSAGE_LIMIT: usize = 4096;

fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Final scoreboard with a per-question review and the share code, split into
/// messages that each fit in [`MESSAGE_LIMIT`]. The share code is always in the last one.
pub fn render_results(session: &QuizSession) -> Vec<String> {
    let questions = session.questions();
    let mut lines = Vec::with_capacity(questions.len() + 2);
    lines.push(format!(
        "🏁 <b>Quiz finished!</b>\nYou got <b>{}</b> of <b>{}</b> right ({}%)\n",
        session.score(),
        questions.len(),
        session.percentage()
    ));

    for (index, question) in questions.iter().enumerate() {
        let answer = session.answer_at(index);
        let mark = if answer == UNANSWERED {
            "⏭"
        } else if question.is_correct(answer) {
            "✅"
        } else {
            "❌"
        };
        let mut line = format!("{} {}. {}", mark, index + 1, html::escape(question.prompt));
        if !question.is_correct(answer) {
            line.push_str(&format!(
                "\n    answer: {}",
                html::escape(question.correct_option())
            ));
        }
        lines.push(line);
    }

    lines.push(format!(
        "\nReplay or share: <code>/replay {}</code>",
        html::escape(&session.params().to_string())
    ));

    // Raw HTML is never shorter than what Telegram counts, so measuring it is safe.
    let mut pages: Vec<String> = Vec::new();
    let mut page = String::new();
    for line in lines {
        if !page.is_empty() && message_len(&page) + 1 + message_len(&line) > MESSAGE_LIMIT {
            pages.push(std::mem::take(&mut page));
        }
        if !page.is_empty() {
            page.push('\n');
        }
        page.push_str(&line);
    }
    pages.push(page);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn question_card_lists_every_option() {
        let mut rng = StdRng::seed_from_u64(5);
        let question = bank::find(8).unwrap();
        let card = render_question(&mut rng, question, 1, 10, 10.0);
        assert!(card.contains("<b>Question 1/10</b>"));
        for option in question.options {
            assert!(card.contains(&html::escape(option)), "missing {option}");
        }
        assert!(card.ends_with("10%"));
    }

    #[test]
    fn buttons_round_trip_through_letters() {
        let question = bank::find(1).unwrap();
        for number in [1, 5, 10] {
            let buttons = option_buttons(question, number);
            assert_eq!(buttons.len(), 4);
            for (index, label) in buttons.iter().enumerate() {
                assert_eq!(parse_answer_letter(label), Some(index));
            }
        }
        assert_eq!(option_buttons(question, 1)[0], format!("A · {}", question.options[0]));
    }

    #[test]
    fn letters_are_forgiving() {
        assert_eq!(parse_answer_letter(" c"), Some(2));
        assert_eq!(parse_answer_letter("D · whatever"), Some(3));
        assert_eq!(parse_answer_letter("E"), None);
        assert_eq!(parse_answer_letter("cheese"), None);
        assert_eq!(parse_answer_letter(""), None);
    }

    #[test]
    fn results_show_score_and_share_code() {
        let mut session = QuizSession::default();
        session.initialize(Some(12345), Some(5), Vec::new());
        let correct = session.questions()[0].correct_option_index as i32;
        session.load_answers(vec![correct, UNANSWERED]);

        let pages = render_results(&session);
        assert_eq!(pages.len(), 1);
        let results = &pages[0];
        assert!(results.contains("<b>1</b> of <b>5</b>"));
        assert!(results.contains("(20%)"));
        assert!(results.contains("✅ 1."));
        assert!(results.contains("⏭ 2."));
        assert!(results.contains("/replay 12345:5::["));
    }

    fn strip_tags(html_text: &str) -> String {
        let mut visible = String::new();
        let mut in_tag = false;
        for c in html_text.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => visible.push(c),
                _ => {}
            }
        }
        visible
    }

    #[test]
    fn long_all_wrong_results_are_split_to_fit_telegram() {
        let mut session = QuizSession::default();
        session.initialize(Some(12345), Some(50), Vec::new());
        let wrong: Vec<i32> = session
            .questions()
            .iter()
            .map(|q| ((q.correct_option_index + 1) % 4) as i32)
            .collect();
        session.load_answers(wrong);
        assert_eq!(session.score(), 0);

        let pages = render_results(&session);
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(!page.is_empty());
            assert!(strip_tags(page).encode_utf16().count() <= MESSAGE_LIMIT);
            assert!(page.encode_utf16().count() <= MESSAGE_LIMIT);
        }
        assert!(pages[0].contains("<b>0</b> of <b>50</b>"));
        assert!(pages.last().unwrap().contains("<code>/replay 12345:50::["));

        let review = pages.join("\n");
        for number in 1..=50 {
            assert!(review.contains(&format!("❌ {number}. ")), "question {number} missing");
        }
    }
}

use chaos_quiz_bot::chaos::render::{
    option_buttons, parse_answer_letter, render_question, render_results,
};
use chaos_quiz_bot::config::Config;
use chaos_quiz_bot::quiz::params::QuizParams;
use chaos_quiz_bot::quiz::session::{clamp_count, QuizSession};
use chaos_quiz_bot::quiz::Category;
use dotenv::dotenv;
use log::{debug, info};
use teloxide::{
    dispatching::{
        dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
        UpdateHandler,
    },
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup, KeyboardRemove, ParseMode},
    utils::command::BotCommands,
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerError = Box<dyn std::error::Error + Send + Sync>;
type HandlerResult = Result<(), HandlerError>;
type QuizStorage = std::sync::Arc<ErasedStorage<State>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveQuestionCount,
    ReceiveCategories {
        count: usize,
        categories: Vec<Category>,
    },
    InQuiz {
        session: QuizSession,
    },
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
enum Command {
    #[command(description = "start a new chaos quiz")]
    Start,
    #[command(description = "show this text")]
    Help,
    #[command(description = "replay a shared quiz code, e.g. /replay 12345:10:Science,Space")]
    Replay(String),
    #[command(description = "abandon the current quiz")]
    Cancel,
}

#[tokio::main]
async fn main() -> Result<(), HandlerError> {
    dotenv().ok();
    pretty_env_logger::init();
    info!("Starting chaos quiz bot...");

    let config = Config::from_env()?;
    let bot = Bot::from_env();

    info!("Opening dialogue storage at {}", config.db_path);
    let storage: QuizStorage = SqliteStorage::open(&config.db_path, Json).await?.erase();

    bot.set_my_commands(Command::bot_commands()).await?;

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![storage, config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    Ok(())
}

fn schema() -> UpdateHandler<HandlerError> {
    let commands = teloxide::filter_command::<Command, _>().endpoint(handle_command);

    Update::filter_message()
        .enter_dialogue::<Message, ErasedStorage<State>, State>()
        .branch(commands)
        .branch(dptree::case![State::Start].endpoint(start))
        .branch(dptree::case![State::ReceiveQuestionCount].endpoint(receive_question_count))
        .branch(
            dptree::case![State::ReceiveCategories { count, categories }]
                .endpoint(receive_categories),
        )
        .branch(dptree::case![State::InQuiz { session }].endpoint(receive_answer))
}

const GREETING_TEXT: &str = "Welcome to the chaos quiz! 🌀\nEvery question gets a little more unhinged than the last.\n\nHow many questions can you handle?";
const ALL_CATEGORIES: &str = "🎲 Everything";
const DONE_CHOOSING: &str = "✅ Done";

async fn handle_command(
    bot: Bot,
    dialogue: QuizDialogue,
    msg: Message,
    cmd: Command,
    config: Config,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            ask_question_count(&bot, &dialogue, &msg, &config, GREETING_TEXT).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Cancel => {
            bot.send_message(msg.chat.id, "Quiz abandoned. Send /start whenever you're ready for more chaos.")
                .reply_markup(KeyboardRemove::new())
                .await?;
            dialogue.exit().await?;
        }
        Command::Replay(code) => {
            if code.trim().is_empty() {
                bot.send_message(msg.chat.id, "Usage: /replay <seed>:<count>:<categories>:<answers>")
                    .await?;
                return Ok(());
            }
            let params = match code.parse::<QuizParams>() {
                Ok(params) => params,
                Err(err) => {
                    bot.send_message(msg.chat.id, format!("That share code doesn't work: {}", err))
                        .await?;
                    return Ok(());
                }
            };

            let mut session = QuizSession::default();
            session.load_from_params(&params);
            if !session.has_questions() {
                bot.send_message(msg.chat.id, "That code doesn't produce any questions.")
                    .await?;
                return Ok(());
            }

            if session.is_completed() {
                dialogue.exit().await?;
                send_results(&bot, msg.chat.id, &session).await?;
                return Ok(());
            }

            bot.send_message(msg.chat.id, format!("Replaying quiz #{} 🔁", session.seed()))
                .await?;
            send_current_question(&bot, msg.chat.id, &session).await?;
            dialogue.update(State::InQuiz { session }).await?;
        }
    }
    Ok(())
}

async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message, config: Config) -> HandlerResult {
    ask_question_count(&bot, &dialogue, &msg, &config, GREETING_TEXT).await
}

async fn ask_question_count(
    bot: &Bot,
    dialogue: &QuizDialogue,
    msg: &Message,
    config: &Config,
    text: &str,
) -> HandlerResult {
    let mut counts = vec![5, 10, 25, 50];
    if !counts.contains(&config.default_count) {
        counts.push(config.default_count);
        counts.sort_unstable();
    }
    let keyboard = KeyboardMarkup::new(vec![counts
        .iter()
        .map(|c| KeyboardButton::new(c.to_string()))
        .collect::<Vec<_>>()]);

    bot.send_message(msg.chat.id, text)
        .reply_markup(keyboard)
        .await?;
    dialogue.update(State::ReceiveQuestionCount).await?;
    Ok(())
}

async fn receive_question_count(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let amount = match msg.text().map(|t| t.trim().parse::<usize>()) {
        Some(Ok(amount)) => amount,
        _ => {
            bot.send_message(msg.chat.id, "Please send a number").await?;
            return Ok(());
        }
    };
    if amount == 0 {
        bot.send_message(msg.chat.id, "Zero questions is too little chaos, pick at least 1")
            .await?;
        return Ok(());
    }
    let count = clamp_count(Some(amount));

    bot.send_message(
        msg.chat.id,
        "Pick one or more categories, then press Done. Or just take everything.",
    )
    .reply_markup(categories_keyboard())
    .await?;

    dialogue
        .update(State::ReceiveCategories {
            count,
            categories: Vec::new(),
        })
        .await?;
    Ok(())
}

fn categories_keyboard() -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = Category::ALL
        .chunks(2)
        .map(|pair| pair.iter().map(|c| KeyboardButton::new(c.label())).collect())
        .collect();
    rows.push(vec![
        KeyboardButton::new(ALL_CATEGORIES),
        KeyboardButton::new(DONE_CHOOSING),
    ]);
    KeyboardMarkup::new(rows)
}

async fn receive_categories(
    bot: Bot,
    dialogue: QuizDialogue,
    (count, mut categories): (usize, Vec<Category>),
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(ALL_CATEGORIES) => {
            start_quiz(&bot, &dialogue, msg.chat.id, count, Vec::new()).await
        }
        Some(DONE_CHOOSING) => start_quiz(&bot, &dialogue, msg.chat.id, count, categories).await,
        Some(text) => {
            let Some(category) = Category::from_label(text) else {
                bot.send_message(msg.chat.id, "Please choose one of the categories")
                    .await?;
                return Ok(());
            };
            if !categories.contains(&category) {
                categories.push(category);
            }
            let chosen = categories
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ");
            bot.send_message(msg.chat.id, format!("So far: {}. Add more or press Done.", chosen))
                .await?;
            dialogue
                .update(State::ReceiveCategories { count, categories })
                .await?;
            Ok(())
        }
        None => {
            bot.send_message(msg.chat.id, "Please choose one of the categories")
                .await?;
            Ok(())
        }
    }
}

async fn start_quiz(
    bot: &Bot,
    dialogue: &QuizDialogue,
    chat_id: ChatId,
    count: usize,
    categories: Vec<Category>,
) -> HandlerResult {
    let mut session = QuizSession::default();
    session.initialize(None, Some(count), categories);

    bot.send_message(
        chat_id,
        format!(
            "Quiz #{} with {} questions. Brace yourself! 🎢",
            session.seed(),
            session.questions().len()
        ),
    )
    .await?;
    send_current_question(bot, chat_id, &session).await?;

    dialogue.update(State::InQuiz { session }).await?;
    Ok(())
}

async fn send_current_question(bot: &Bot, chat_id: ChatId, session: &QuizSession) -> HandlerResult {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    let number = session.current_index() + 1;

    // ThreadRng is not Send, so it must be gone before the next await.
    let text = {
        let mut rng = rand::thread_rng();
        render_question(
            &mut rng,
            question,
            number,
            session.questions().len(),
            session.progress(),
        )
    };
    let keyboard = KeyboardMarkup::new(
        option_buttons(question, number)
            .into_iter()
            .map(|label| vec![KeyboardButton::new(label)])
            .collect::<Vec<_>>(),
    );

    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

// The dialogue is already closed when this runs, so a failed send can't trap the chat.
async fn send_results(bot: &Bot, chat_id: ChatId, session: &QuizSession) -> HandlerResult {
    for (index, page) in render_results(session).into_iter().enumerate() {
        let request = bot.send_message(chat_id, page).parse_mode(ParseMode::Html);
        if index == 0 {
            request.reply_markup(KeyboardRemove::new()).await?;
        } else {
            request.await?;
        }
    }
    Ok(())
}

async fn receive_answer(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: QuizSession,
    msg: Message,
) -> HandlerResult {
    let Some(question) = session.current_question() else {
        dialogue.exit().await?;
        return Ok(());
    };
    let Some(answer) = msg.text().and_then(parse_answer_letter) else {
        bot.send_message(msg.chat.id, "Pick A, B, C or D from the keyboard")
            .await?;
        return Ok(());
    };
    debug!(
        "chat {} answered {} to question {}",
        msg.chat.id, answer, question.id
    );

    session.select_answer(answer);
    session.submit_answer();

    let verdict = if question.correct_option_index == answer {
        "✅ Correct!".to_string()
    } else {
        format!("❌ Nope! It was: {}", question.correct_option())
    };
    bot.send_message(msg.chat.id, verdict).await?;

    if session.next_question() {
        session.validate_answers_length();
        info!(
            "chat {} finished quiz #{} with {}/{}",
            msg.chat.id,
            session.seed(),
            session.score(),
            session.questions().len()
        );
        dialogue.exit().await?;
        send_results(&bot, msg.chat.id, &session).await?;
        return Ok(());
    }

    send_current_question(&bot, msg.chat.id, &session).await?;
    dialogue.update(State::InQuiz { session }).await?;
    Ok(())
}

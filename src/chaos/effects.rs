use rand::seq::SliceRandom;
use rand::Rng;
use teloxide::utils::html;

use super::ChaosLevel;

/// Text treatments for question prompts. Each one returns Telegram HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEffect {
    Italic,
    Bold,
    Wobble,
    Shake,
    Spaced,
    Spin,
    Glitch,
    Strobe,
    MatrixRain,
    UpsideDown,
}

const EFFECTS_BY_LEVEL: [&[TextEffect]; 10] = [
    &[TextEffect::Italic],
    &[TextEffect::Italic, TextEffect::Bold],
    &[TextEffect::Wobble, TextEffect::Shake],
    &[TextEffect::Shake, TextEffect::Bold, TextEffect::Spaced],
    &[TextEffect::Spin, TextEffect::Shake, TextEffect::Glitch],
    &[TextEffect::Spin, TextEffect::Shake, TextEffect::Strobe],
    &[TextEffect::Wobble, TextEffect::Bold, TextEffect::MatrixRain],
    &[TextEffect::Spin, TextEffect::Strobe, TextEffect::Spaced],
    &[TextEffect::Glitch, TextEffect::Strobe, TextEffect::MatrixRain],
    &[TextEffect::Glitch, TextEffect::UpsideDown, TextEffect::MatrixRain],
];

pub fn effects_for(level: ChaosLevel) -> &'static [TextEffect] {
    EFFECTS_BY_LEVEL[(level.value() - 1) as usize]
}

/// Picks one of the effects available at `level`.
pub fn random_effect<R: Rng>(level: ChaosLevel, rng: &mut R) -> TextEffect {
    effects_for(level)
        .choose(rng)
        .copied()
        .unwrap_or(TextEffect::Italic)
}

impl TextEffect {
    pub fn apply<R: Rng>(&self, text: &str, level: ChaosLevel, rng: &mut R) -> String {
        let intensity = level.intensity();
        match self {
            TextEffect::Italic => format!("<i>{}</i>", html::escape(text)),
            TextEffect::Bold => format!("<b>{}</b>", html::escape(text)),
            TextEffect::Wobble => {
                let wobbled: String = text
                    .chars()
                    .enumerate()
                    .map(|(i, c)| {
                        if i % 2 == 0 {
                            c.to_uppercase().collect::<String>()
                        } else {
                            c.to_lowercase().collect::<String>()
                        }
                    })
                    .collect();
                html::escape(&wobbled)
            }
            TextEffect::Shake => {
                let odds = (intensity.shake / 5.0).clamp(0.0, 1.0);
                let shaken: String = text
                    .chars()
                    .map(|c| {
                        if rng.gen_bool(odds) {
                            c.to_uppercase().collect::<String>()
                        } else {
                            c.to_string()
                        }
                    })
                    .collect();
                html::escape(&shaken)
            }
            TextEffect::Spaced => {
                let spaced = text
                    .chars()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                html::escape(&spaced)
            }
            TextEffect::Spin => {
                let swirl = "🌀".repeat((intensity.rotation / 8.0).ceil().max(1.0) as usize);
                format!("{swirl} {} {swirl}", html::escape(&spin_a_word(text, rng)))
            }
            TextEffect::Glitch => {
                let max_marks = (intensity.wobble / 3.0).round() as usize;
                html::escape(&glitch(text, max_marks, rng))
            }
            TextEffect::Strobe => text
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let tag = if i % 2 == 0 { "b" } else { "i" };
                    format!("<{tag}>{}</{tag}>", html::escape(word))
                })
                .collect::<Vec<_>>()
                .join(" "),
            TextEffect::MatrixRain => {
                const RAIN: [&str; 3] = ["░", "▒", "▓"];
                // Faster rain at higher levels; full speed drips on every word.
                let odds = (intensity.speed / 3.5).clamp(0.0, 1.0);
                text.split_whitespace()
                    .map(|word| {
                        let drop = if rng.gen_bool(odds) {
                            RAIN.choose(&mut *rng).copied().unwrap_or("░")
                        } else {
                            ""
                        };
                        format!("{}{}", html::escape(word), drop)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            TextEffect::UpsideDown => {
                let flipped: String = text.chars().rev().map(flip).collect();
                format!("🙃 {}", html::escape(&flipped))
            }
        }
    }
}

/// Reverses one randomly chosen word.
fn spin_a_word<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return String::new();
    }
    let pick = rng.gen_range(0..words.len());
    words[pick] = words[pick].chars().rev().collect();
    words.join(" ")
}

/// Sprinkles combining diacritics over letters, up to `max_marks` per letter.
fn glitch<R: Rng>(text: &str, max_marks: usize, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() * (max_marks + 1));
    for c in text.chars() {
        out.push(c);
        if !c.is_alphabetic() {
            continue;
        }
        for _ in 0..rng.gen_range(0..=max_marks) {
            if let Some(mark) = char::from_u32(rng.gen_range(0x0300..=0x036F)) {
                out.push(mark);
            }
        }
    }
    out
}

fn flip(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a' => 'ɐ',
        'b' => 'q',
        'c' => 'ɔ',
        'd' => 'p',
        'e' => 'ǝ',
        'f' => 'ɟ',
        'g' => 'ƃ',
        'h' => 'ɥ',
        'i' => 'ᴉ',
        'j' => 'ɾ',
        'k' => 'ʞ',
        'm' => 'ɯ',
        'n' => 'u',
        'p' => 'd',
        'q' => 'b',
        'r' => 'ɹ',
        't' => 'ʇ',
        'u' => 'n',
        'v' => 'ʌ',
        'w' => 'ʍ',
        'y' => 'ʎ',
        '?' => '¿',
        '!' => '¡',
        '.' => '˙',
        '\'' => ',',
        ',' => '\'',
        _ => c,
    }
}

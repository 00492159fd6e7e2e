//! Escalating cosmetic chaos. Everything here is derived from the question
//! number and never feeds back into quiz state.

pub mod effects;
pub mod render;

use rand::Rng;

pub const MAX_LEVEL: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChaosLevel(u8);

impl ChaosLevel {
    /// `question_number` is 1-based; the level tops out at 10.
    pub fn for_question(question_number: usize) -> Self {
        Self(question_number.clamp(1, MAX_LEVEL as usize) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn palette(&self) -> &'static Palette {
        &PALETTES[(self.0 - 1) as usize]
    }

    pub fn intensity(&self) -> AnimationIntensity {
        let level = self.0 as f64;
        AnimationIntensity {
            rotation: level * 2.0,
            scale: 1.0 + level * 0.1,
            speed: 0.5 + level * 0.3,
            shake: level * 0.5,
            wobble: level * 1.5,
            pulse: level * 0.2,
        }
    }

    pub fn question_style(&self) -> QuestionStyle {
        match self.0 {
            9.. => QuestionStyle::MaximumChaos,
            7..=8 => QuestionStyle::Insane,
            5..=6 => QuestionStyle::Manic,
            3..=4 => QuestionStyle::Wild,
            _ => QuestionStyle::Gentle,
        }
    }

    /// Decoration for answer number `index`, cycling every four answers.
    pub fn option_marker(&self, index: usize) -> &'static str {
        const BASE: [&str; 4] = ["▫️", "〰️", "⤴️", "🔄"];
        const CHAOS: [&str; 4] = ["👾", "⚡", "🎈", "📳"];
        const INSANE: [&str; 4] = ["🤯", "🌀", "💥", "🌌"];
        match self.0 {
            9.. => INSANE[index % INSANE.len()],
            6..=8 => CHAOS[index % CHAOS.len()],
            3..=5 => BASE[index % BASE.len()],
            _ => BASE[0],
        }
    }

    pub fn button_marker(&self) -> &'static str {
        const BUTTONS: [&str; 5] = ["", "〰️", "📳", "💓", "🔄"];
        BUTTONS[((self.0 / 2) as usize).min(BUTTONS.len() - 1)]
    }

    pub fn floating_shape_count(&self) -> usize {
        (self.0 as usize * 2).min(20)
    }

    /// A row of palette-coloured shapes; round once things get silly.
    pub fn floating_shapes<R: Rng>(&self, rng: &mut R) -> String {
        let palette = self.palette();
        (0..self.floating_shape_count())
            .map(|_| {
                let colour = if rng.gen_bool(0.5) {
                    palette.primary
                } else {
                    palette.secondary
                };
                if self.0 > 5 {
                    colour.circle()
                } else {
                    colour.square()
                }
            })
            .collect()
    }

    /// Frame line drawn above and below a question card.
    pub fn border(&self) -> String {
        let glyph = match self.0 {
            8.. => "╍",
            6..=7 => "┅",
            _ => "━",
        };
        glyph.repeat((10.0 * self.intensity().scale).round() as usize)
    }

    /// Fixed-width bar; `progress` is a percentage.
    pub fn progress_bar(&self, progress: f64) -> String {
        const WIDTH: usize = 10;
        let palette = self.palette();
        let filled = ((progress / 100.0 * WIDTH as f64).round() as usize).min(WIDTH);
        let mut bar = String::new();
        for i in 0..filled {
            let colour = if self.0 > 5 {
                [palette.primary, palette.secondary, palette.accent][i % 3]
            } else {
                palette.primary
            };
            bar.push_str(colour.square());
        }
        bar.push_str(&"▫️".repeat(WIDTH - filled));
        if self.intensity().pulse > 1.5 {
            bar.push_str("💓");
        }
        bar
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationIntensity {
    pub rotation: f64,
    pub scale: f64,
    pub speed: f64,
    pub shake: f64,
    pub wobble: f64,
    pub pulse: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStyle {
    Gentle,
    Wild,
    Manic,
    Insane,
    MaximumChaos,
}

impl QuestionStyle {
    pub fn banner(&self) -> &'static str {
        match self {
            QuestionStyle::Gentle => "🙂",
            QuestionStyle::Wild => "😜 getting wild",
            QuestionStyle::Manic => "🤪 MANIC",
            QuestionStyle::Insane => "😵‍💫 INSANE",
            QuestionStyle::MaximumChaos => "🔥🌈 MAXIMUM CHAOS 🌈🔥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Blue,
    Purple,
    Red,
    Orange,
    Yellow,
    Green,
}

impl Colour {
    pub fn square(&self) -> &'static str {
        match self {
            Colour::Blue => "🟦",
            Colour::Purple => "🟪",
            Colour::Red => "🟥",
            Colour::Orange => "🟧",
            Colour::Yellow => "🟨",
            Colour::Green => "🟩",
        }
    }

    pub fn circle(&self) -> &'static str {
        match self {
            Colour::Blue => "🔵",
            Colour::Purple => "🟣",
            Colour::Red => "🔴",
            Colour::Orange => "🟠",
            Colour::Yellow => "🟡",
            Colour::Green => "🟢",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
}

const fn palette(primary: Colour, secondary: Colour, accent: Colour) -> Palette {
    Palette {
        primary,
        secondary,
        accent,
    }
}

static PALETTES: [Palette; MAX_LEVEL as usize] = [
    palette(Colour::Blue, Colour::Purple, Colour::Red),
    palette(Colour::Purple, Colour::Red, Colour::Orange),
    palette(Colour::Red, Colour::Orange, Colour::Yellow),
    palette(Colour::Orange, Colour::Yellow, Colour::Green),
    palette(Colour::Green, Colour::Blue, Colour::Purple),
    palette(Colour::Blue, Colour::Green, Colour::Purple),
    palette(Colour::Blue, Colour::Purple, Colour::Red),
    palette(Colour::Red, Colour::Purple, Colour::Orange),
    palette(Colour::Purple, Colour::Red, Colour::Orange),
    palette(Colour::Red, Colour::Orange, Colour::Green),
];

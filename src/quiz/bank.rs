use super::Category::{
    Animals, Country, Film, Food, History, HumanBody, Nature, Science, Space, Sport,
};
use super::DifficultyTier::{Extreme, Medium, Mild};
use super::{Category, DifficultyTier, QuestionRecord};

pub const POOL_SIZE: usize = 50;

const fn question(
    id: u32,
    category: Category,
    tier: DifficultyTier,
    prompt: &'static str,
    options: [&'static str; 4],
    correct_option_index: usize,
) -> QuestionRecord {
    QuestionRecord {
        id,
        prompt,
        options,
        correct_option_index,
        tier,
        category,
    }
}

/// The whole compiled-in question bank.
pub fn all() -> &'static [QuestionRecord] {
    &QUESTIONS
}

pub fn find(id: u32) -> Option<&'static QuestionRecord> {
    QUESTIONS.iter().find(|q| q.id == id)
}

static QUESTIONS: [QuestionRecord; POOL_SIZE] = [
    // Science
    question(1, Science, Mild,
        "What happens when baking soda meets vinegar?",
        [
            "It fizzes as carbon dioxide is released",
            "It sets into a tiny brick",
            "It turns bright purple out of spite",
            "It hums the national anthem",
        ],
        0),
    question(2, Science, Medium,
        "Why does a metal spoon feel colder than a wooden one at room temperature?",
        [
            "The metal is secretly refrigerated",
            "Metal conducts heat away from your hand faster",
            "Wood is always warm because it used to be alive",
            "Spoons have feelings and metal ones are sad",
        ],
        1),
    question(3, Science, Extreme,
        "What deeply unsettling thing does quantum entanglement do?",
        [
            "Makes particles refuse to leave the house",
            "Lets particles text each other for free",
            "Correlates particle states no matter how far apart they are",
            "Unplugs the universe every Tuesday",
        ],
        2),
    question(4, Science, Mild,
        "What gas do plants take in to make their food?",
        ["Helium", "Oxygen", "Neon", "Carbon dioxide"],
        3),
    question(5, Science, Medium,
        "What is the only metal that is liquid at room temperature?",
        ["Mercury", "Aluminium", "Lead", "Liquid gold, obviously"],
        0),
    // History
    question(6, History, Extreme,
        "Which war did Australia famously fight against birds in 1932?",
        [
            "The Great Pigeon Standoff",
            "The Emu War, and the emus won",
            "The Seagull Skirmish",
            "Operation Cockatoo",
        ],
        1),
    question(7, History, Mild,
        "Which ancient civilisation built the pyramids of Giza?",
        ["The Vikings", "The Aztecs", "The Egyptians", "Time-travelling architects"],
        2),
    question(8, History, Medium,
        "What flooded the streets of Boston in 1919?",
        ["Maple syrup", "Custard", "Orange juice", "Molasses"],
        3),
    question(9, History, Extreme,
        "What did some ancient Romans reportedly use as mouthwash?",
        [
            "Urine, for the ammonia",
            "Olive oil mixed with gold flakes",
            "Gladiator sweat",
            "Wine from the emperor's bath",
        ],
        0),
    question(10, History, Mild,
        "Who was the first person to walk on the Moon?",
        ["Yuri Gagarin", "Neil Armstrong", "Buzz Lightyear", "Sally Ride"],
        1),
    // Nature
    question(11, Nature, Medium,
        "How do chameleons change colour?",
        [
            "They hold their breath very hard",
            "They borrow paint from nearby leaves",
            "They tune nanocrystals in their skin cells",
            "They simply decide to",
        ],
        2),
    question(12, Nature, Extreme,
        "Why are bananas mildly radioactive?",
        [
            "They grow near volcanoes",
            "They absorb phone signals",
            "Monkeys irradiate them for freshness",
            "They contain potassium-40",
        ],
        3),
    question(13, Nature, Mild,
        "What do bees collect from flowers to make honey?",
        ["Nectar", "Dew", "Pollen jam", "Tiny coins"],
        0),
    question(14, Nature, Medium,
        "What is the tallest type of grass in the world?",
        ["Wheat", "Bamboo", "Pampas grass", "Lawn that was left alone too long"],
        1),
    question(15, Nature, Extreme,
        "Which fungus-infected insect gets steered around like a zombie?",
        [
            "Garden snails",
            "Honey bees",
            "Carpenter ants",
            "Ladybirds on their day off",
        ],
        2),
    // Space
    question(16, Space, Mild,
        "Why do we have day and night?",
        [
            "The Sun takes a nap",
            "Clouds block the Sun every evening",
            "The Moon switches the Sun off",
            "Earth rotates so different sides face the Sun",
        ],
        3),
    question(17, Space, Medium,
        "Which planet has the most known moons?",
        ["Saturn", "Mars", "Venus", "Mercury"],
        0),
    question(18, Space, Extreme,
        "What happens to time close to a black hole?",
        [
            "It speeds up until it is tomorrow",
            "It slows down relative to distant observers",
            "It stops and waits for you",
            "It runs backwards for comic effect",
        ],
        1),
    question(19, Space, Mild,
        "What is the closest star to Earth?",
        ["Polaris", "Sirius", "The Sun", "Proxima Centauri"],
        2),
    question(20, Space, Medium,
        "Why do astronauts get a little taller in orbit?",
        [
            "Their boots are removed",
            "Space smells of vitamins",
            "Zero gravity makes bones grow",
            "Their spine decompresses without gravity",
        ],
        3),
    // Human Body
    question(21, HumanBody, Extreme,
        "Roughly how many times does a heart beat in an average lifetime?",
        ["About 2.5 billion", "About 25 million", "About 250 thousand", "Exactly once, but very slowly"],
        0),
    question(22, HumanBody, Mild,
        "What is the largest organ of the human body?",
        ["The liver", "The skin", "The brain", "The appendix, in its dreams"],
        1),
    question(23, HumanBody, Medium,
        "Which bone is the smallest in the human body?",
        ["The kneecap", "The little toe bone", "The stapes in the ear", "The funny bone"],
        2),
    question(24, HumanBody, Extreme,
        "What does your stomach do every few days to avoid digesting itself?",
        [
            "It asks politely",
            "It takes a holiday",
            "It wears a raincoat",
            "It renews its mucus lining",
        ],
        3),
    question(25, HumanBody, Mild,
        "How many teeth does a typical adult have?",
        ["32", "20", "48", "One very large one"],
        0),
    // Food
    question(26, Food, Medium,
        "Which country gave the world the croissant's ancestor, the kipferl?",
        ["France", "Austria", "Brazil", "Antarctica"],
        1),
    question(27, Food, Extreme,
        "What food never spoils if stored properly?",
        ["Bread", "Cheese", "Honey", "Leftover pizza, theoretically"],
        2),
    question(28, Food, Mild,
        "What is the main ingredient of guacamole?",
        ["Pea", "Cucumber", "Kiwi", "Avocado"],
        3),
    question(29, Food, Medium,
        "Which spice is the most expensive by weight?",
        ["Saffron", "Salt", "Pepper", "Cinnamon dust from a dragon"],
        0),
    question(30, Food, Extreme,
        "Botanically speaking, which of these is a berry?",
        ["Strawberry", "Banana", "Raspberry", "Blackberry"],
        1),
    // Sport
    question(31, Sport, Mild,
        "How many players does a football team have on the pitch?",
        ["Nine", "Twelve", "Eleven", "As many as can fit"],
        2),
    question(32, Sport, Medium,
        "In which sport would you perform a slam dunk?",
        ["Tennis", "Golf", "Rowing", "Basketball"],
        3),
    question(33, Sport, Extreme,
        "What did early golfers use before the modern golf ball?",
        [
            "Leather pouches stuffed with feathers",
            "Small round cheeses",
            "River stones wrapped in wool",
            "Unlucky walnuts",
        ],
        0),
    question(34, Sport, Mild,
        "How often are the Summer Olympic Games usually held?",
        ["Every year", "Every four years", "Every decade", "Whenever someone remembers"],
        1),
    question(35, Sport, Medium,
        "What is a perfect score in ten-pin bowling?",
        ["100", "200", "300", "Infinity pins"],
        2),
    // Film
    question(36, Film, Extreme,
        "Which film was the first full-length cel-animated feature?",
        ["Pinocchio", "Fantasia", "Bambi", "Snow White and the Seven Dwarfs"],
        3),
    question(37, Film, Mild,
        "What is the name of the wizarding school in the Harry Potter films?",
        ["Hogwarts", "Narnia", "Rivendell", "Wizard Community College"],
        0),
    question(38, Film, Medium,
        "In The Wizard of Oz, what colour are Dorothy's slippers in the film?",
        ["Silver", "Ruby red", "Emerald green", "Plaid"],
        1),
    question(39, Film, Extreme,
        "What were the Star Wars lightsaber sounds partly made from?",
        [
            "A vacuum cleaner and a kazoo",
            "A whale song played backwards",
            "A projector hum and TV interference",
            "Chewbacca humming",
        ],
        2),
    question(40, Film, Mild,
        "Which animal is Simba in The Lion King?",
        ["A tiger", "A meerkat", "A warthog", "A lion"],
        3),
    // Country
    question(41, Country, Medium,
        "Which country has the most islands?",
        ["Sweden", "Greece", "Japan", "Switzerland"],
        0),
    question(42, Country, Extreme,
        "Which country's national animal is the unicorn?",
        ["Ireland", "Scotland", "Norway", "Narnia"],
        1),
    question(43, Country, Mild,
        "What is the capital city of Japan?",
        ["Kyoto", "Osaka", "Tokyo", "Sapporo"],
        2),
    question(44, Country, Medium,
        "Which country is shaped a bit like a boot?",
        ["Spain", "Chile", "Portugal", "Italy"],
        3),
    question(45, Country, Extreme,
        "Which country has more pyramids than Egypt?",
        ["Sudan", "Mexico", "Peru", "Iceland"],
        0),
    // Animals
    question(46, Animals, Mild,
        "Why do cats purr?",
        [
            "To charge their batteries",
            "Often when content, and sometimes to self-soothe",
            "To hypnotise nearby dogs",
            "It's a tiny motorbike engine",
        ],
        1),
    question(47, Animals, Medium,
        "How many hearts does an octopus have?",
        ["One", "Two", "Three", "Eight, one per arm"],
        2),
    question(48, Animals, Extreme,
        "What makes the mantis shrimp's punch so ridiculous?",
        [
            "It can only punch on Fridays",
            "It punches with its tail",
            "It wears boxing gloves",
            "It is fast enough to boil the water around it",
        ],
        3),
    question(49, Animals, Mild,
        "What is a baby kangaroo called?",
        ["A joey", "A kit", "A cub", "A hopling"],
        0),
    question(50, Animals, Medium,
        "Which bird is known for copying almost any sound it hears?",
        ["Pigeon", "Lyrebird", "Penguin", "Ostrich"],
        1),
];

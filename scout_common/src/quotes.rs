//! Motivational quotes for the scouting sheet.
//!
//! `QUOTES` is hand-maintained; add entries at the end. Selection is uniform
//! and memoryless, so the same quote may come up twice in a row.
use rand::Rng;

/// Every quote the sheet can show.
pub static QUOTES: &[&str] = &[
    "Drink water.",
    "Slow down!",
    "Take a breather.",
    "Be nice to venue staff.",
    "Rithwik 2024",
    "Ask your local William Teskey about United States Presidents!",
    "Purdy is watching.",
    "Nerd.",
    "It is always funny to mess with Evan.",
    ":)",
    "I couldnt think of any more quotes",
    "No, I will not be telling you every quote I put in here.",
    "Are you cooked or are you cooking?",
    "Remind Aahill to do his webwork",
    "Remind Ethan to do his webwork",
    "Drew Cole 秃头书呆子",
    "Please refrain from bothering Tag about the app",
    "Should you be looking at this, or doing strategy?",
    "Luka Dončić is Devin Booker father",
    "Be like Usain Bolt wearing heelys.",
    "Do you know where Vihaan is? ",
    "Did you lose the plot, or could it just not keep up with you?",
    "\"feet\" -Elena",
    "Monster energy is not a substitute for sleeping.",
    "Getting a buzzcut is a good life choice.",
    "Lock in.",
    "Use the :toocool: emote on slack more.",
    "Peace and Love.",
    "What year was the Year Without a Summer?",
    "What year did the second bank of the United States obtain its charter?",
    "Ryan McGoff",
    "Deodorant is a good choice to make.",
    "The Sun is Sunny.",
    "Compartmentalization is healthy if you don't think about it.",
    "At least you're not in the duluth stands. Unless you are in which case tough I guess?",
    "Go Knicks!",
    "876 💙",
    "18! 16!",
    "How many times has Vihaan missed shop? 1816!",
    "Woolsey is wrong the halo show sucks",
    "Check out the newest project from Tag and Micheal: Currently unnamed study tool!",
    "Rithwik Barbados Barber",
    "No Celtics fans please",
    "Naz Reid.",
];

/// Picks a random quote using the thread-local RNG.
///
/// `anything` is never read. Sheets only re-run a custom function when one of
/// its arguments changes, so callers pass a frequently edited range here to get
/// a fresh quote on every edit.
pub fn motivational_quote<A>(anything: A) -> &'static str {
    motivational_quote_with(&mut rand::rng(), anything)
}

/// Same as [`motivational_quote`], drawing from `rng`.
pub fn motivational_quote_with<R: Rng, A>(rng: &mut R, _anything: A) -> &'static str {
    QUOTES[rng.random_range(0..QUOTES.len())]
}

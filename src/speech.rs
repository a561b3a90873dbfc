use crate::alexa::response::Speech;

pub const CARD_TITLE: &str = "QuoteCentral";

pub const WELCOME: &str =
    "Welcome to the Quote Central Skill! You can say, quote teller, tell me a quote, or give me quote.";
pub const HELP: &str =
    "You can say quote teller, tell me a quote or, quote teller, get me a quote!";
pub const GOODBYE: &str = "Thank you for trying the quote central skill, GoodBye.";
pub const FALLBACK: &str = "Sorry, I don't know that. You can say try saying help!";
pub const QUOTE_PREFIX: &str = "Here's your quote.";

pub fn welcome() -> Speech {
    Speech::plain(WELCOME)
}

pub fn help() -> Speech {
    Speech::plain(HELP)
}

pub fn goodbye() -> Speech {
    Speech::plain(GOODBYE)
}

pub fn fallback() -> Speech {
    Speech::plain(FALLBACK)
}

pub fn unhandled() -> Speech {
    Speech::plain("Sorry, I can't help with that.")
}

pub fn error() -> Speech {
    Speech::plain("Hmm. Something went wrong, please try again later.")
}

/// Prefix followed directly by the quote markup, no separator.
pub fn quote_text(quote: &str) -> String {
    format!("{}{}", QUOTE_PREFIX, quote)
}

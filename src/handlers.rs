use crate::{
    alexa::{
        request::{IntentType, ReqType},
        response::{Card, Speech},
        Request, Response,
    },
    quotes, speech,
};
use failure::Error;
use log::info;

/// Name of the skill defined intent asking for a quote.
pub const QUOTE_INTENT: &str = "QuoteCentralIntent";

/// A unit of request handling: a predicate deciding whether the handler
/// applies, and the function building the response when it does.
pub trait IntentHandler: Send + Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, request: &Request) -> bool;

    fn respond(&self, request: &Request) -> Result<Response, Error>;
}

fn is_intent(request: &Request, intent: &IntentType) -> bool {
    request.reqtype() == ReqType::IntentRequest && request.intent() == *intent
}

/// Speech plus a card carrying the same text.
fn with_card(should_end: bool, text: &str, output: Speech) -> Response {
    Response::new(should_end)
        .speech(output)
        .card(Card::simple(speech::CARD_TITLE, text))
}

fn open_with_reprompt(text: &str, output: Speech) -> Response {
    let reprompt = output.clone();
    with_card(false, text, output).reprompt(reprompt)
}

pub struct LaunchHandler;

impl IntentHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn matches(&self, request: &Request) -> bool {
        request.reqtype() == ReqType::LaunchRequest
    }

    fn respond(&self, _request: &Request) -> Result<Response, Error> {
        Ok(open_with_reprompt(speech::WELCOME, speech::welcome()))
    }
}

pub struct HelpHandler;

impl IntentHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn matches(&self, request: &Request) -> bool {
        is_intent(request, &IntentType::Help)
    }

    fn respond(&self, _request: &Request) -> Result<Response, Error> {
        Ok(open_with_reprompt(speech::HELP, speech::help()))
    }
}

/// Handles both `AMAZON.StopIntent` and `AMAZON.CancelIntent`.
pub struct CancelAndStopHandler;

impl IntentHandler for CancelAndStopHandler {
    fn name(&self) -> &'static str {
        "cancel-and-stop"
    }

    fn matches(&self, request: &Request) -> bool {
        is_intent(request, &IntentType::Stop) || is_intent(request, &IntentType::Cancel)
    }

    fn respond(&self, _request: &Request) -> Result<Response, Error> {
        Ok(with_card(true, speech::GOODBYE, speech::goodbye()))
    }
}

pub struct QuoteHandler;

impl IntentHandler for QuoteHandler {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn matches(&self, request: &Request) -> bool {
        is_intent(request, &IntentType::User(QUOTE_INTENT.to_owned()))
    }

    fn respond(&self, _request: &Request) -> Result<Response, Error> {
        let text = speech::quote_text(quotes::select_quote()?);
        Ok(with_card(true, &text, Speech::ssml(&text)))
    }
}

/// The platform allows no speech in reply to a session end.
pub struct SessionEndedHandler;

impl IntentHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session-ended"
    }

    fn matches(&self, request: &Request) -> bool {
        request.reqtype() == ReqType::SessionEndedRequest
    }

    fn respond(&self, request: &Request) -> Result<Response, Error> {
        if let Some(reason) = &request.body.reason {
            info!("Session ended: {}", reason);
        }
        Ok(Response::end())
    }
}

pub struct FallbackHandler;

impl IntentHandler for FallbackHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn matches(&self, request: &Request) -> bool {
        is_intent(request, &IntentType::Fallback)
    }

    fn respond(&self, _request: &Request) -> Result<Response, Error> {
        Ok(open_with_reprompt(speech::FALLBACK, speech::fallback()))
    }
}

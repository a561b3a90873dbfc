use crate::{
    alexa::{request::ReqType, Request, Response},
    handlers::{
        CancelAndStopHandler, FallbackHandler, HelpHandler, IntentHandler, LaunchHandler,
        QuoteHandler, SessionEndedHandler,
    },
    log_error, speech,
};
use failure::{Error, Fail};
use log::{debug, info, warn};

/// An ordered set of handlers bound to a skill id.
///
/// Requests are dispatched to the first handler whose predicate matches, so
/// registration order decides priority.
pub struct Skill {
    skill_id: Option<String>,
    handlers: Vec<Box<dyn IntentHandler>>,
}

#[derive(Default)]
pub struct SkillBuilder {
    skill_id: Option<String>,
    handlers: Vec<Box<dyn IntentHandler>>,
}

impl SkillBuilder {
    pub fn add_request_handler<H: IntentHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Only requests addressed to `skill_id` are accepted once set.
    pub fn with_skill_id(mut self, skill_id: &str) -> Self {
        self.skill_id = Some(skill_id.to_owned());
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            skill_id: self.skill_id,
            handlers: self.handlers,
        }
    }
}

/// The Quote Central skill with its handlers in their dispatch order.
pub fn quote_central(skill_id: Option<&str>) -> Skill {
    let builder = Skill::builder()
        .add_request_handler(CancelAndStopHandler)
        .add_request_handler(QuoteHandler)
        .add_request_handler(HelpHandler)
        .add_request_handler(LaunchHandler)
        .add_request_handler(SessionEndedHandler)
        .add_request_handler(FallbackHandler);

    let builder = match skill_id {
        Some(id) => builder.with_skill_id(id),
        None => builder,
    };
    builder.build()
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// Answers a request.
    ///
    /// Only a request for another skill is an error. A request nothing
    /// handles, or a handler failure, is logged and answered with a spoken
    /// apology.
    pub fn process_request(&self, request: &Request) -> Result<Response, Error> {
        let reqtype = request.reqtype();
        info!(
            "Request Type: {:?}, locale: {}",
            reqtype,
            request.locale().unwrap_or("unknown")
        );
        if reqtype == ReqType::IntentRequest {
            info!("Intent: {:?}", request.intent());
        }

        self.verify(request)?;

        match self.dispatch(request) {
            Ok(response) => Ok(response),
            Err(e) => {
                log_error(&e);
                match e.downcast::<SkillError>() {
                    Ok(SkillError::NoHandler { .. }) => Ok(end_unhandled()),
                    _ => Ok(end_error()),
                }
            }
        }
    }

    fn verify(&self, request: &Request) -> Result<(), Error> {
        let expected = match &self.skill_id {
            Some(id) => id,
            None => return Ok(()),
        };

        match request.application_id() {
            Some(actual) if actual == expected.as_str() => Ok(()),
            actual => {
                let actual = actual.unwrap_or("<none>").to_owned();
                warn!("Rejecting request for skill {}", actual);
                Err(Error::from(SkillError::SkillIdMismatch {
                    expected: expected.to_owned(),
                    actual,
                }))
            }
        }
    }

    fn dispatch(&self, request: &Request) -> Result<Response, Error> {
        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.matches(request))
            .ok_or_else(|| SkillError::NoHandler {
                reqtype: request.body.reqtype.clone(),
            })?;
        debug!("Dispatching to {} handler", handler.name());

        let response = handler.respond(request).map_err(|inner| {
            Error::from(SkillError::Handler {
                name: handler.name(),
                inner,
            })
        })?;
        debug!(
            "Speech: {:?}, reprompt: {:?}",
            response.speech_text(),
            response.reprompt_text()
        );
        Ok(response)
    }
}

fn end_unhandled() -> Response {
    Response::new(true).speech(speech::unhandled())
}

fn end_error() -> Response {
    Response::new(true).speech(speech::error())
}

#[derive(Fail, Debug)]
pub enum SkillError {
    #[fail(display = "Skill id mismatch: expected {}, got {}", expected, actual)]
    SkillIdMismatch { expected: String, actual: String },
    #[fail(display = "No handler for request of type {}", reqtype)]
    NoHandler { reqtype: String },
    #[fail(display = "Handler {} failed: {}", name, inner)]
    Handler { name: &'static str, inner: Error },
}

use serde::Serialize;

const VERSION: &str = "1.0";

/// Outgoing response envelope.
///
/// Built with the chained constructors below, e.g.
/// `Response::new(false).speech(Speech::plain("Hi")).reprompt(Speech::plain("Hi"))`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub version: String,
    #[serde(rename = "response")]
    pub body: ResBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<Speech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Speech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: Speech,
}

impl Speech {
    pub fn plain(s: &str) -> Speech {
        Speech::PlainText { text: s.to_owned() }
    }

    /// Wraps `s` in a `<speak>` element unless it already is one.
    pub fn ssml(s: &str) -> Speech {
        let ssml = if s.starts_with("<speak>") {
            s.to_owned()
        } else {
            format!("<speak>{}</speak>", s)
        };
        Speech::Ssml { ssml }
    }

    /// Raw text of the speech, with the outer `<speak>` element removed for SSML.
    pub fn text(&self) -> &str {
        match self {
            Speech::PlainText { text } => text.as_str(),
            Speech::Ssml { ssml } => ssml
                .trim_start_matches("<speak>")
                .trim_end_matches("</speak>"),
        }
    }
}

impl Card {
    pub fn simple(title: &str, content: &str) -> Card {
        Card::Simple {
            title: title.to_owned(),
            content: content.to_owned(),
        }
    }
}

impl Response {
    pub fn new(should_end: bool) -> Response {
        Response {
            version: VERSION.to_owned(),
            body: ResBody {
                output_speech: None,
                card: None,
                reprompt: None,
                should_end_session: should_end,
            },
        }
    }

    /// Empty response closing the session.
    pub fn end() -> Response {
        Response::new(true)
    }

    pub fn speech(mut self, speech: Speech) -> Self {
        self.body.output_speech = Some(speech);
        self
    }

    pub fn card(mut self, card: Card) -> Self {
        self.body.card = Some(card);
        self
    }

    pub fn reprompt(mut self, speech: Speech) -> Self {
        self.body.reprompt = Some(Reprompt {
            output_speech: speech,
        });
        self
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.body.output_speech.as_ref().map(Speech::text)
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.body
            .reprompt
            .as_ref()
            .map(|reprompt| reprompt.output_speech.text())
    }
}

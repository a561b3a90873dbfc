use serde::Deserialize;

/// Incoming request envelope, as posted by Alexa to the skill endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub session: Option<Session>,
    pub context: Option<Context>,
    #[serde(rename = "request")]
    pub body: ReqBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: Option<System>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct System {
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    #[serde(rename = "type")]
    pub reqtype: String,
    pub locale: Option<String>,
    pub intent: Option<Intent>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReqType {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
    Other(String),
}

impl<'a> From<&'a str> for ReqType {
    fn from(s: &'a str) -> ReqType {
        match s {
            "LaunchRequest" => ReqType::LaunchRequest,
            "IntentRequest" => ReqType::IntentRequest,
            "SessionEndedRequest" => ReqType::SessionEndedRequest,
            other => ReqType::Other(other.to_owned()),
        }
    }
}

/// Built-in Amazon intents are mapped to their own variants, anything else
/// is a skill defined intent.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentType {
    None,
    Help,
    Cancel,
    Stop,
    Fallback,
    User(String),
}

impl<'a> From<&'a str> for IntentType {
    fn from(s: &'a str) -> IntentType {
        match s {
            "AMAZON.HelpIntent" => IntentType::Help,
            "AMAZON.CancelIntent" => IntentType::Cancel,
            "AMAZON.StopIntent" => IntentType::Stop,
            "AMAZON.FallbackIntent" => IntentType::Fallback,
            other => IntentType::User(other.to_owned()),
        }
    }
}

impl Request {
    pub fn reqtype(&self) -> ReqType {
        ReqType::from(self.body.reqtype.as_str())
    }

    /// Intent carried by the request, `IntentType::None` for anything
    /// that isn't an intent request.
    pub fn intent(&self) -> IntentType {
        match &self.body.intent {
            Some(intent) => IntentType::from(intent.name.as_str()),
            None => IntentType::None,
        }
    }

    pub fn locale(&self) -> Option<&str> {
        self.body.locale.as_deref()
    }

    /// Application id of the skill this request was sent to.
    ///
    /// `context.System` is authoritative; `session` is only present on
    /// in-session requests and is used as a fallback.
    pub fn application_id(&self) -> Option<&str> {
        let from_context = self
            .context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.application.as_ref());
        let from_session = self.session.as_ref().and_then(|s| s.application.as_ref());

        from_context
            .or(from_session)
            .map(|app| app.application_id.as_str())
    }
}

use crate::{
    alexa::Request,
    config::Config,
    log_error,
    skill::{Skill, SkillError},
};
use failure::{format_err, Error};
use log::{debug, info, warn};
use rouille::{router, Response};

fn index(skill: &Skill, request: &rouille::Request) -> Response {
    info!("Request received...");
    let item: Request = match rouille::input::json_input(request) {
        Ok(item) => item,
        Err(e) => {
            warn!("Could not parse request body: {}", e);
            return Response::text("Invalid request body").with_status_code(400);
        }
    };
    debug!("{:?}", item);

    match skill.process_request(&item) {
        Ok(response) => {
            info!("Sending back response...");
            debug!("{:?}", response);
            Response::json(&response)
        }
        Err(e) => {
            log_error(&e);
            match e.downcast::<SkillError>() {
                Ok(SkillError::SkillIdMismatch { .. }) => {
                    Response::text("Request is not addressed to this skill").with_status_code(400)
                }
                _ => Response::text("Internal error").with_status_code(500),
            }
        }
    }
}

pub fn handle(skill: &Skill, request: &rouille::Request) -> Response {
    router!(request,
        (POST) (/) => { index(skill, request) },
        _ => Response::empty_404()
    )
}

pub fn run(config: &Config, skill: Skill) -> Result<(), Error> {
    let addr = config.addr();
    info!("Starting server on {}", addr);

    let server = rouille::Server::new(addr.as_str(), move |request| {
        let response = handle(&skill, request);
        debug!("{} {} -> {}", request.method(), request.url(), response.status_code);
        response
    })
    .map_err(|e| format_err!("Could not bind to {}: {}", addr, e))?;

    server.run();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alexa::request::fixtures::APP_ID, skill::quote_central, speech};
    use serde_json::{json, Value};
    use std::io::Read;

    fn post(skill: &Skill, url: &str, content_type: &str, body: &str) -> Response {
        let request = rouille::Request::fake_http(
            "POST",
            url,
            vec![("Content-Type".to_owned(), content_type.to_owned())],
            body.as_bytes().to_vec(),
        );
        handle(skill, &request)
    }

    fn body_of(response: Response) -> String {
        let (mut reader, _) = response.data.into_reader_and_size();
        let mut body = String::new();
        reader.read_to_string(&mut body).unwrap();
        body
    }

    fn launch_body(application_id: &str) -> String {
        json!({
            "version": "1.0",
            "context": { "System": { "application": { "applicationId": application_id } } },
            "request": { "type": "LaunchRequest", "requestId": "amzn1.echo-api.request.1" }
        })
        .to_string()
    }

    #[test]
    fn answers_launch_with_json() {
        let skill = quote_central(Some(APP_ID));
        let response = post(
            &skill,
            "/",
            "application/json; charset=utf-8",
            &launch_body(APP_ID),
        );
        assert_eq!(response.status_code, 200);

        let body: Value = serde_json::from_str(&body_of(response)).unwrap();
        assert_eq!(body["version"], "1.0");
        assert_eq!(body["response"]["outputSpeech"]["text"], speech::WELCOME);
        assert_eq!(body["response"]["card"]["title"], "QuoteCentral");
        assert_eq!(body["response"]["shouldEndSession"], false);
    }

    #[test]
    fn answers_quote_intent_with_ssml() {
        let skill = quote_central(None);
        let request = json!({
            "request": {
                "type": "IntentRequest",
                "intent": { "name": "QuoteCentralIntent" }
            }
        });
        let response = post(&skill, "/", "application/json", &request.to_string());
        assert_eq!(response.status_code, 200);

        let body: Value = serde_json::from_str(&body_of(response)).unwrap();
        assert_eq!(body["response"]["outputSpeech"]["type"], "SSML");
        let ssml = body["response"]["outputSpeech"]["ssml"].as_str().unwrap();
        assert!(ssml.starts_with("<speak>Here's your quote."));
        assert!(body["response"].get("reprompt").is_none());
    }

    #[test]
    fn rejects_other_skill() {
        let skill = quote_central(Some(APP_ID));
        let response = post(
            &skill,
            "/",
            "application/json",
            &launch_body("amzn1.ask.skill.other"),
        );
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn rejects_malformed_json() {
        let skill = quote_central(None);
        let response = post(&skill, "/", "application/json", "{ not json");
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn rejects_non_json_content_type() {
        let skill = quote_central(None);
        let response = post(&skill, "/", "text/plain", &launch_body(APP_ID));
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn unknown_route_is_not_found() {
        let skill = quote_central(None);
        let response = post(&skill, "/other", "application/json", &launch_body(APP_ID));
        assert_eq!(response.status_code, 404);

        let get = rouille::Request::fake_http("GET", "/", vec![], vec![]);
        assert_eq!(handle(&skill, &get).status_code, 404);
    }
}

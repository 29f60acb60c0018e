//! Resolving the answer to reveal from command line sources

use std::io::Read;
use std::path::Path;

use mediguide::{Error, Result};
use mediguide_core::{AskRequest, AskResponse};

/// Where the answer text comes from, in precedence order
#[derive(Debug, Default)]
pub struct InputSources<'a> {
    pub ask_json: Option<&'a Path>,
    pub response: Option<&'a str>,
    pub file: Option<&'a Path>,
    pub question: Option<&'a str>,
}

/// Read a whole file, `-` meaning stdin
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        read_stdin()
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Build the exchange to display.
///
/// An `ask` reply JSON wins over raw text. A question given explicitly must
/// not be blank.
pub fn resolve(sources: &InputSources<'_>) -> Result<AskResponse> {
    resolve_with(sources, read_stdin)
}

pub fn resolve_with<F>(sources: &InputSources<'_>, stdin: F) -> Result<AskResponse>
where
    F: FnOnce() -> Result<String>,
{
    let question = match sources.question {
        Some(q) => Some(AskRequest::new(q)?.question),
        None => None,
    };

    if let Some(path) = sources.ask_json {
        let raw = read_source(path)?;
        let mut reply: AskResponse = serde_json::from_str(&raw)?;
        if let Some(question) = question {
            reply.question = question;
        }
        return Ok(reply);
    }

    let response = match (sources.response, sources.file) {
        (Some(_), Some(_)) => {
            return Err(Error::Input(
                "--response and --file are mutually exclusive".to_string(),
            ))
        }
        (Some(text), None) => text.to_string(),
        (None, Some(path)) => read_source(path)?,
        (None, None) => stdin()?,
    };

    Ok(AskResponse {
        question: question.unwrap_or_default(),
        response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_stdin() -> Result<String> {
        panic!("stdin should not be read")
    }

    #[test]
    fn test_inline_response() {
        let sources = InputSources {
            response: Some("Rest."),
            question: Some("  cold?  "),
            ..Default::default()
        };
        let reply = resolve_with(&sources, no_stdin).unwrap();
        assert_eq!(reply.question, "cold?");
        assert_eq!(reply.response, "Rest.");
    }

    #[test]
    fn test_blank_question_rejected() {
        let sources = InputSources {
            response: Some("Rest."),
            question: Some("   "),
            ..Default::default()
        };
        let err = resolve_with(&sources, no_stdin).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: please enter a question");
    }

    #[test]
    fn test_stdin_fallback() {
        let reply =
            resolve_with(&InputSources::default(), || Ok("Drink water.".to_string())).unwrap();
        assert_eq!(reply.response, "Drink water.");
        assert_eq!(reply.question, "");
    }

    #[test]
    fn test_ask_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"question": "fever?", "response": "Take a fever tablet."}}"#
        )
        .unwrap();

        let sources = InputSources {
            ask_json: Some(file.path()),
            response: Some("ignored"),
            ..Default::default()
        };
        let reply = resolve_with(&sources, no_stdin).unwrap();
        assert_eq!(reply.question, "fever?");
        assert_eq!(reply.response, "Take a fever tablet.");
    }

    #[test]
    fn test_conflicting_sources() {
        let sources = InputSources {
            response: Some("a"),
            file: Some(Path::new("b.txt")),
            ..Default::default()
        };
        assert!(matches!(
            resolve_with(&sources, no_stdin),
            Err(Error::Input(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let sources = InputSources {
            ask_json: Some(file.path()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_with(&sources, no_stdin),
            Err(Error::Serialization(_))
        ));
    }
}

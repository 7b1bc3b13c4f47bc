use serde_json::error::Category;
use std::{error, fmt};

/// Sum type representing every way decoding a webhook payload can fail.
#[derive(Debug)]
pub enum ParseError {
    /// The raw request body is not syntactically valid JSON.
    MalformedJson(serde_json::Error),
    /// The input is valid JSON whose shape is incompatible with the declared
    /// schema, e.g. a scalar where an object or array is expected.
    SchemaMismatch(serde_json::Error),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => ParseError::SchemaMismatch(e),
            Category::Syntax | Category::Eof | Category::Io => ParseError::MalformedJson(e),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            ParseError::MalformedJson(e) => format!("Payload is not valid JSON: {}", e),
            ParseError::SchemaMismatch(e) => {
                format!("Payload does not match the webhook schema: {}", e)
            }
        };

        write!(f, "{}", x)
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::MalformedJson(e) | ParseError::SchemaMismatch(e) => Some(e),
        }
    }
}

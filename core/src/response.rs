//! Result of executing a `Command`.

use serde::{Deserialize, Serialize};


/// Outcome of `Sys::execute()`. Serialized with a `"status"` discriminant:
///
/// ```json
/// {"status": "ok", "output": "soldier"}
/// {"status": "error", "message": "not a namespace: 'soldier'"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}

impl Response {
    pub fn ok(output: impl Into<String>) -> Self {
        Response::Ok { output: output.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error { message: message.into() }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&Response::ok("soldier")).unwrap();
        assert_eq!(json, r#"{"status":"ok","output":"soldier"}"#);
        let json = serde_json::to_string(&Response::error("bad")).unwrap();
        assert_eq!(json, r#"{"status":"error","message":"bad"}"#);
    }

    #[test]
    fn parse_back() {
        let resp: Response = serde_json::from_str(r#"{"status":"error","message":"x"}"#).unwrap();
        assert_eq!(resp, Response::error("x"));
        assert!(!resp.is_ok());
    }
}

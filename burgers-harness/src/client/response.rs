use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{HarnessError, Result};

/// A completed call whose status and body can be asserted on.
///
/// Assertion methods panic with the request line and raw body on mismatch and
/// return `&Self`, so checks can be chained:
///
/// ```ignore
/// response
///     .assert_status(200)
///     .assert_body("success", true)
///     .assert_body_not_null("accessToken");
/// ```
#[derive(Debug, Clone)]
pub struct ValidatableResponse {
    method: Method,
    path: String,
    status: StatusCode,
    text: String,
    body: Option<Value>,
}

impl ValidatableResponse {
    pub fn new(method: Method, path: impl Into<String>, status: StatusCode, text: String) -> Self {
        let body = serde_json::from_str(&text).ok();
        Self {
            method,
            path: path.into(),
            status,
            text,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed body, `None` when the backend did not answer with JSON.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Value at a dotted path such as `user.email` or `orders[0].number`.
    pub fn body_value(&self, path: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| lookup(body, path))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.text).map_err(|source| HarnessError::Decode {
            path: self.path.clone(),
            status: self.status.as_u16(),
            source,
        })
    }

    #[track_caller]
    pub fn assert_status(&self, expected: u16) -> &Self {
        assert_eq!(
            self.status.as_u16(),
            expected,
            "{} {} returned unexpected status; body: {}",
            self.method,
            self.path,
            self.text
        );
        self
    }

    #[track_caller]
    pub fn assert_body(&self, path: &str, expected: impl Into<Value>) -> &Self {
        let expected = expected.into();
        let actual = self.require(path);
        assert_eq!(
            actual, &expected,
            "{} {}: body field '{}' mismatch; body: {}",
            self.method, self.path, path, self.text
        );
        self
    }

    #[track_caller]
    pub fn assert_body_not_null(&self, path: &str) -> &Self {
        let actual = self.require(path);
        assert!(
            !actual.is_null(),
            "{} {}: body field '{}' is null; body: {}",
            self.method,
            self.path,
            path,
            self.text
        );
        self
    }

    /// `success: true` with the given status.
    #[track_caller]
    pub fn assert_success(&self, status: u16) -> &Self {
        self.assert_body("success", true).assert_status(status)
    }

    /// `success: false`, the given message, and the given status.
    #[track_caller]
    pub fn assert_failure(&self, status: u16, message: &str) -> &Self {
        self.assert_body("success", false)
            .assert_body("message", message)
            .assert_status(status)
    }

    #[track_caller]
    fn require(&self, path: &str) -> &Value {
        let Some(body) = self.body.as_ref() else {
            panic!(
                "{} {} (status {}) did not return JSON, cannot read '{}'; body: {}",
                self.method, self.path, self.status, path, self.text
            );
        };
        match lookup(body, path) {
            Some(value) => value,
            None => panic!(
                "{} {}: body has no field '{}'; body: {}",
                self.method, self.path, path, self.text
            ),
        }
    }
}

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn segments(path: &str) -> Option<Vec<Segment<'_>>> {
    let mut out = Vec::new();
    for part in path.split('.') {
        let (key, mut rest) = match part.find('[') {
            Some(pos) => part.split_at(pos),
            None => (part, ""),
        };
        if !key.is_empty() {
            out.push(Segment::Key(key));
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let end = stripped.find(']')?;
            out.push(Segment::Index(stripped[..end].parse().ok()?));
            rest = &stripped[end + 1..];
        }
        if !rest.is_empty() {
            return None;
        }
    }
    Some(out)
}

/// Resolve `a.b[0].c` against a JSON value. Malformed paths resolve to `None`.
pub fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    segments(path)?
        .into_iter()
        .try_fold(value, |current, segment| match segment {
            Segment::Key(key) => current.get(key),
            Segment::Index(index) => current.get(index),
        })
}

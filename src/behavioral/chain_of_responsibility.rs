// Chain of Responsibility: each link appends its header and hands off to the next.

use std::rc::Rc;

use crate::error::{PatternError, Result};

pub trait HeadersChain {
    fn add_header(&self, input_header: &str) -> Result<String>;
}

/// Passes `own` to the next link, or returns it as-is at the end of the chain.
fn forward(next: &Option<Rc<dyn HeadersChain>>, own: String) -> Result<String> {
    match next {
        Some(next) => next.add_header(&own),
        None => Ok(own),
    }
}

pub struct AuthenticationHeader {
    token: Option<String>,
    next: Option<Rc<dyn HeadersChain>>,
}

impl AuthenticationHeader {
    pub fn new(token: Option<String>) -> Self {
        Self { token, next: None }
    }

    pub fn with_next(mut self, next: Rc<dyn HeadersChain>) -> Self {
        self.next = Some(next);
        self
    }
}

impl HeadersChain for AuthenticationHeader {
    fn add_header(&self, input_header: &str) -> Result<String> {
        let token = self.token.as_deref().ok_or(PatternError::MissingToken)?;
        let rest = forward(&self.next, format!("Authorization: Bearer {token}\n"))?;
        Ok(format!("{input_header}{rest}"))
    }
}

pub struct ContentTypeHeader {
    content_type: String,
    next: Option<Rc<dyn HeadersChain>>,
}

impl ContentTypeHeader {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            next: None,
        }
    }

    pub fn with_next(mut self, next: Rc<dyn HeadersChain>) -> Self {
        self.next = Some(next);
        self
    }
}

impl HeadersChain for ContentTypeHeader {
    fn add_header(&self, input_header: &str) -> Result<String> {
        let rest = forward(&self.next, format!("ContentType: {}\n", self.content_type))?;
        Ok(format!("{input_header}{rest}"))
    }
}

pub struct BodyPayload {
    body: String,
    next: Option<Rc<dyn HeadersChain>>,
}

impl BodyPayload {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            next: None,
        }
    }

    pub fn with_next(mut self, next: Rc<dyn HeadersChain>) -> Self {
        self.next = Some(next);
        self
    }
}

impl HeadersChain for BodyPayload {
    fn add_header(&self, input_header: &str) -> Result<String> {
        let rest = forward(&self.next, self.body.clone())?;
        Ok(format!("{input_header}{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BODY: &str = "Body:\n{\n\"username\"=\"dbacinski\"\n}";

    fn content_chain() -> Rc<dyn HeadersChain> {
        let body: Rc<dyn HeadersChain> = Rc::new(BodyPayload::new(BODY));
        Rc::new(ContentTypeHeader::new("json").with_next(body))
    }

    #[test]
    fn test_chain_with_authentication() {
        let content = content_chain();
        let auth = AuthenticationHeader::new(Some("123456".into())).with_next(content);

        let message = auth.add_header("Headers with Authentication:\n").unwrap();
        assert_eq!(
            message,
            "Headers with Authentication:\n\
             Authorization: Bearer 123456\n\
             ContentType: json\n\
             Body:\n\
             {\n\
             \"username\"=\"dbacinski\"\n\
             }"
        );
    }

    #[test]
    fn test_shared_link_starts_its_own_chain() {
        let content = content_chain();
        let _auth = AuthenticationHeader::new(Some("123456".into())).with_next(Rc::clone(&content));

        let message = content.add_header("Headers:\n").unwrap();
        assert_eq!(message, format!("Headers:\nContentType: json\n{BODY}"));
    }

    #[test]
    fn test_missing_token_breaks_chain() {
        let auth = AuthenticationHeader::new(None).with_next(content_chain());
        assert!(matches!(auth.add_header("Headers:\n"), Err(PatternError::MissingToken)));
    }

    proptest! {
        #[test]
        fn test_chain_wraps_body(prefix in "[a-zA-Z :]{0,20}", body in "[a-z{}=\" ]{0,30}") {
            let body_link: Rc<dyn HeadersChain> = Rc::new(BodyPayload::new(body.clone()));
            let chain = ContentTypeHeader::new("json").with_next(body_link);
            let message = chain.add_header(&prefix).unwrap();

            prop_assert!(message.starts_with(&prefix));
            prop_assert!(message.ends_with(&body));
        }
    }
}

// Shared test helpers: an in-memory TXT resolver.
//
// Integration tests drive the real checks through this table instead of the
// network so they are fast and deterministic.

use std::cell::RefCell;
use std::collections::HashMap;

use mail_auth_check::dns::TxtLookup;
use mail_auth_check::error_handling::LookupError;

/// Resolver answering from a fixed table. Unknown names have no records.
#[derive(Default)]
pub struct StaticResolver {
    answers: HashMap<String, Result<Vec<String>, LookupError>>,
    queried: RefCell<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn timeout(mut self, name: &str) -> Self {
        self.answers.insert(
            name.to_string(),
            Err(LookupError::Timeout {
                name: name.to_string(),
            }),
        );
        self
    }

    pub fn network_error(mut self, name: &str, reason: &str) -> Self {
        self.answers.insert(
            name.to_string(),
            Err(LookupError::Network {
                name: name.to_string(),
                reason: reason.to_string(),
            }),
        );
        self
    }

    /// Names queried so far, in order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl TxtLookup for StaticResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.queried.borrow_mut().push(name.to_string());
        self.answers
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[allow(dead_code)]
pub fn selectors(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

//! Adult-only queries.
//!
//! Children have no search: the children page lists and groups only.

use super::record_repo::{AdultRepository, RepoError, RepoResult};
use crate::model::adult::AdultRecord;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::time::Instant;

/// Search options for the adults page filter box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdultSearchQuery {
    /// Text matched against name, CPF and RG, as given (no trimming).
    ///
    /// Empty text matches every adult.
    pub text: String,
    /// Whether to compile `text` as a regular expression.
    ///
    /// Default is `false`: the text is matched literally so that partially
    /// typed input never fails to parse.
    pub raw_regex: bool,
}

impl AdultSearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw_regex: false,
        }
    }
}

impl AdultRepository<'_> {
    /// Case-insensitive match on name, CPF or RG, newest first.
    ///
    /// Every stored adult is hydrated before matching, so a malformed
    /// document fails the search whatever the query text.
    pub fn search(&self, query: &AdultSearchQuery) -> RepoResult<Vec<AdultRecord>> {
        let started_at = Instant::now();
        let matcher = build_matcher(query)?;

        let matches: Vec<AdultRecord> = self
            .select_all()?
            .into_iter()
            .filter(|adult| {
                [adult.name(), adult.cpf.as_str(), adult.rg.as_str()]
                    .iter()
                    .any(|value| matcher.is_match(value))
            })
            .collect();

        debug!(
            "event=adult_search module=repo status=ok raw_regex={} hits={} duration_ms={}",
            query.raw_regex,
            matches.len(),
            started_at.elapsed().as_millis()
        );
        Ok(matches)
    }
}

fn build_matcher(query: &AdultSearchQuery) -> RepoResult<Regex> {
    let pattern = if query.raw_regex {
        query.text.clone()
    } else {
        regex::escape(&query.text)
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|err| RepoError::InvalidQuery {
            query: query.text.clone(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{build_matcher, AdultSearchQuery};
    use crate::repo::record_repo::RepoError;

    #[test]
    fn literal_queries_escape_metacharacters() {
        let matcher = build_matcher(&AdultSearchQuery::new("123.456")).unwrap();
        assert!(matcher.is_match("123.456.789-00"));
        assert!(!matcher.is_match("123x456"));
    }

    #[test]
    fn matching_ignores_case() {
        let matcher = build_matcher(&AdultSearchQuery::new("SILVA")).unwrap();
        assert!(matcher.is_match("José da Silva"));
    }

    #[test]
    fn literal_queries_keep_surrounding_whitespace() {
        let matcher = build_matcher(&AdultSearchQuery::new("souza ")).unwrap();
        assert!(matcher.is_match("João Souza Lima"));
        assert!(!matcher.is_match("João Souza"));
    }

    #[test]
    fn raw_regex_reports_invalid_pattern() {
        let query = AdultSearchQuery {
            text: "(unclosed".to_string(),
            raw_regex: true,
        };
        let err = build_matcher(&query).unwrap_err();
        assert!(matches!(err, RepoError::InvalidQuery { .. }));
    }
}

//! Path construction from a token stream
//!
//! The builder is a single reducer: `step` takes the current state and one
//! significant token and returns the next state or an error. `finish` runs
//! the end-of-input checks and produces the `Path`.

use super::error::{PathError, PathResult};
use super::types::{Path, PathElement};
use crate::config::compile_time::path::*;
use crate::config::runtime::ParserPreferences;
use crate::logging::codes;
use crate::tokens::{strip_quotes, Delimiter, SpannedToken, Token, TokenStream, AND_KEYWORD};
use crate::utils::Span;
use crate::{log_debug, log_rejection, log_success};
use indexmap::IndexMap;

/// Key name waiting for its value
#[derive(Debug, Clone, PartialEq)]
struct PendingKey {
    name: String,
    span: Span,
    operator_seen: bool,
}

/// Everything the reducer threads from one token to the next
#[derive(Debug, Clone, Default, PartialEq)]
struct BuilderState {
    elements: Vec<PathElement>,
    current_name: String,
    current_keys: IndexMap<String, String>,
    in_filter: bool,
    filter_span: Span,
    just_completed_kv: bool,
    pending_key: Option<PendingKey>,
}

impl BuilderState {
    fn complete_element(&mut self) -> PathResult<()> {
        if self.elements.len() >= MAX_ELEMENTS {
            return Err(PathError::TooManyElements {
                limit: MAX_ELEMENTS,
            });
        }
        let name = std::mem::take(&mut self.current_name);
        let keys = std::mem::take(&mut self.current_keys);
        self.elements.push(PathElement::from_parts(name, keys));
        Ok(())
    }
}

/// Folds tokens into a `Path`
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    preferences: ParserPreferences,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            preferences: ParserPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: ParserPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &ParserPreferences {
        &self.preferences
    }

    /// Consume `tokens` and build a path carrying `origin` as given
    pub fn build(&self, tokens: TokenStream, origin: Option<&str>) -> PathResult<Path> {
        let token_count = tokens.significant_len();
        let mut state = BuilderState::default();

        for token in tokens.into_significant() {
            state = match self.step(state, token) {
                Ok(next) => next,
                Err(error) => return Err(self.fail(error)),
            };
        }

        let path = self.finish(state, origin).map_err(|error| self.fail(error))?;

        log_success!(codes::success::PATH_CONSTRUCTION_COMPLETE,
            "Path construction completed successfully",
            "elements" => path.len(),
            "keys" => path.elements().iter().map(|e| e.keys().len()).sum::<usize>(),
            "tokens" => token_count
        );

        Ok(path)
    }

    fn step(&self, mut state: BuilderState, token: SpannedToken) -> PathResult<BuilderState> {
        let SpannedToken { value, span } = token;

        if self.preferences.trace_transitions {
            log_debug!("Path builder transition",
                "token" => &value,
                "span" => span,
                "in_filter" => state.in_filter,
                "pending_key" => state.pending_key.as_ref().map(|k| k.name.as_str()).unwrap_or("-"),
                "just_completed_kv" => state.just_completed_kv
            );
        }

        let completed_kv = std::mem::replace(&mut state.just_completed_kv, false);

        match value {
            Token::Whitespace => {
                state.just_completed_kv = completed_kv;
            }

            Token::Delimiter(Delimiter::Slash) if !state.in_filter => {
                if state.current_name.is_empty() {
                    return Err(PathError::IncompleteElement { span });
                }
                if let Some(pending) = state.pending_key.take() {
                    return Err(PathError::HangingKeyFilter {
                        key: pending.name,
                        span: pending.span,
                    });
                }
                state.complete_element()?;
            }

            Token::Delimiter(Delimiter::OpenBracket) => {
                state.in_filter = true;
                state.filter_span = span;
            }

            Token::Delimiter(Delimiter::CloseBracket) => {
                state.in_filter = false;
            }

            Token::Text(text) if !state.in_filter => {
                if !state.current_name.is_empty() {
                    if self.preferences.strict_element_names {
                        return Err(PathError::AmbiguousElementName {
                            first: state.current_name,
                            second: text,
                            span,
                        });
                    }
                    log_debug!("Element name replaced before '/'",
                        "previous" => &state.current_name,
                        "name" => &text
                    );
                }
                state.current_name = text;
            }

            Token::Text(text) if completed_kv && text == AND_KEYWORD => {}

            Token::Text(text) if state.pending_key.is_none() => {
                state.pending_key = Some(PendingKey {
                    name: text,
                    span,
                    operator_seen: false,
                });
            }

            Token::Text(text) => {
                let Some(pending) = state.pending_key.take() else {
                    return Err(PathError::UnexpectedToken { token: text, span });
                };
                if state.current_keys.contains_key(&pending.name) {
                    return Err(PathError::DuplicateKey {
                        key: pending.name,
                        element: state.current_name,
                        span: pending.span.merge(span),
                    });
                }
                if state.current_keys.len() >= MAX_KEYS_PER_ELEMENT {
                    return Err(PathError::TooManyKeys {
                        element: state.current_name,
                        limit: MAX_KEYS_PER_ELEMENT,
                    });
                }
                state
                    .current_keys
                    .insert(pending.name, strip_quotes(&text).to_string());
                state.just_completed_kv = true;
            }

            Token::Delimiter(Delimiter::Equals) if state.in_filter => match state.pending_key.as_mut() {
                Some(pending) => pending.operator_seen = true,
                None => {
                    return Err(PathError::UnexpectedToken {
                        token: Delimiter::Equals.to_string(),
                        span,
                    })
                }
            },

            Token::Delimiter(operator) if operator.is_relational() && state.in_filter => {
                match state.pending_key.take() {
                    Some(pending) => {
                        return Err(PathError::UnsupportedOperator {
                            operator: operator.as_char(),
                            key: pending.name,
                            span,
                        })
                    }
                    None => {
                        return Err(PathError::UnexpectedToken {
                            token: operator.to_string(),
                            span,
                        })
                    }
                }
            }

            Token::Delimiter(delimiter) => {
                return Err(PathError::UnexpectedToken {
                    token: delimiter.to_string(),
                    span,
                });
            }
        }

        Ok(state)
    }

    fn finish(&self, mut state: BuilderState, origin: Option<&str>) -> PathResult<Path> {
        if let Some(pending) = state.pending_key.as_ref().filter(|p| p.operator_seen) {
            return Err(PathError::HangingKeyFilter {
                key: pending.name.clone(),
                span: pending.span,
            });
        }

        if state.in_filter {
            return Err(PathError::UnterminatedXPath {
                span: state.filter_span,
            });
        }

        if let Some(pending) = state.pending_key.take() {
            return Err(PathError::HangingKeyFilter {
                key: pending.name,
                span: pending.span,
            });
        }

        if !state.current_name.is_empty() {
            state.complete_element()?;
        } else if !state.current_keys.is_empty() {
            return Err(PathError::IncompleteElement {
                span: state.filter_span,
            });
        }

        Ok(Path::new(origin.map(str::to_string), state.elements))
    }

    fn fail(&self, error: PathError) -> PathError {
        match error.span() {
            Some(span) => {
                log_rejection!(error.error_code(), "Path construction failed",
                    span = span,
                    "error" => &error
                );
            }
            None => {
                log_rejection!(error.error_code(), "Path construction failed",
                    "error" => &error
                );
            }
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;
    use crate::path::ErrorKind;
    use assert_matches::assert_matches;

    fn build(xpath: &str) -> PathResult<Path> {
        PathBuilder::new().build(tokenize(xpath).unwrap(), None)
    }

    fn build_strict(xpath: &str) -> PathResult<Path> {
        let builder = PathBuilder::with_preferences(ParserPreferences {
            strict_element_names: true,
            trace_transitions: true,
        });
        builder.build(tokenize(xpath).unwrap(), None)
    }

    #[test]
    fn test_simple_names() {
        let path = build("a/b/c").unwrap();
        assert_eq!(path.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(path.elements().iter().all(|e| !e.has_keys()));
        assert_eq!(path.origin(), None);
    }

    #[test]
    fn test_keyed_element() {
        let path = build("interfaces/interface[name=eth0]/state").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.element(1).unwrap().key("name"), Some("eth0"));
        assert!(!path.element(0).unwrap().has_keys());
        assert!(!path.element(2).unwrap().has_keys());
    }

    #[test]
    fn test_and_junction_matches_separate_filters() {
        let joined = build("intf[a=1 and b=2]").unwrap();
        let separate = build("intf[a=1][b=2]").unwrap();
        assert_eq!(joined, separate);
        assert_eq!(joined.element(0).unwrap().keys().len(), 2);
    }

    #[test]
    fn test_and_is_a_key_name_without_completed_pair() {
        let path = build("intf[and=1]").unwrap();
        assert_eq!(path.element(0).unwrap().key("and"), Some("1"));
    }

    #[test]
    fn test_and_is_a_value_after_operator() {
        let path = build("intf[a=and]").unwrap();
        assert_eq!(path.element(0).unwrap().key("a"), Some("and"));

        let path = build("intf[a=1 and b=and]").unwrap();
        let element = path.element(0).unwrap();
        assert_eq!(element.key("a"), Some("1"));
        assert_eq!(element.key("b"), Some("and"));
    }

    #[test]
    fn test_whitespace_around_slash() {
        let path = build("a / b").unwrap();
        assert_eq!(path.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(path.elements().iter().all(|e| !e.has_keys()));
    }

    #[test]
    fn test_quotes_are_stripped() {
        let path = build("intf[name='eth0'][alias=\"up link\"]").unwrap();
        let element = path.element(0).unwrap();
        assert_eq!(element.key("name"), Some("eth0"));
        assert_eq!(element.key("alias"), Some("up link"));
    }

    #[test]
    fn test_whitespace_around_operator() {
        let path = build("intf[ name = eth0 and  mtu =1500 ]").unwrap();
        let element = path.element(0).unwrap();
        assert_eq!(element.key("name"), Some("eth0"));
        assert_eq!(element.key("mtu"), Some("1500"));
    }

    #[test]
    fn test_operator_is_optional() {
        let path = build("intf[name eth0]").unwrap();
        assert_eq!(path.element(0).unwrap().key("name"), Some("eth0"));
    }

    #[test]
    fn test_relational_operator_rejected() {
        assert_matches!(
            build("intf[rate>5]"),
            Err(PathError::UnsupportedOperator { operator: '>', ref key, .. }) if key == "rate"
        );
        assert_eq!(
            build("intf[rate<5]").unwrap_err().kind(),
            ErrorKind::UnsupportedOperator
        );
    }

    #[test]
    fn test_duplicate_key() {
        assert_matches!(
            build("intf[a=1][a=2]"),
            Err(PathError::DuplicateKey { ref key, ref element, .. }) if key == "a" && element == "intf"
        );
        assert_eq!(
            build("intf[a=1 and a=1]").unwrap_err().kind(),
            ErrorKind::DuplicateKey
        );
    }

    #[test]
    fn test_same_key_in_different_elements() {
        let path = build("a[k=1]/b[k=2]").unwrap();
        assert_eq!(path.element(0).unwrap().key("k"), Some("1"));
        assert_eq!(path.element(1).unwrap().key("k"), Some("2"));
    }

    #[test]
    fn test_unterminated_filter() {
        assert_matches!(build("intf[a"), Err(PathError::UnterminatedXPath { .. }));
        assert_matches!(build("intf[a=1"), Err(PathError::UnterminatedXPath { .. }));
        assert_matches!(build("intf["), Err(PathError::UnterminatedXPath { .. }));
    }

    #[test]
    fn test_hanging_key_filter() {
        assert_matches!(
            build("intf[a="),
            Err(PathError::HangingKeyFilter { ref key, .. }) if key == "a"
        );
        assert_matches!(build("intf[a]"), Err(PathError::HangingKeyFilter { .. }));
        assert_matches!(build("intf[a=]"), Err(PathError::HangingKeyFilter { .. }));
        assert_matches!(build("intf[a]/b"), Err(PathError::HangingKeyFilter { .. }));
    }

    #[test]
    fn test_incomplete_element() {
        assert_matches!(build("a//b"), Err(PathError::IncompleteElement { .. }));
        assert_matches!(build("[k=v]/b"), Err(PathError::IncompleteElement { .. }));
        assert_matches!(build("a/[k=v]"), Err(PathError::IncompleteElement { .. }));
    }

    #[test]
    fn test_unexpected_operator_position() {
        assert_matches!(build("a=b"), Err(PathError::UnexpectedToken { ref token, .. }) if token == "=");
        assert_matches!(build("a[=b]"), Err(PathError::UnexpectedToken { .. }));
        assert_matches!(build("a>b"), Err(PathError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_new_builder_is_lenient() {
        assert!(!PathBuilder::new().preferences().strict_element_names);
        assert!(!PathBuilder::default().preferences().strict_element_names);
    }

    #[test]
    fn test_last_name_wins_by_default() {
        let path = build("a b/c").unwrap();
        assert_eq!(path.names().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_strict_mode_rejects_second_name() {
        assert_matches!(
            build_strict("a b/c"),
            Err(PathError::AmbiguousElementName { ref first, ref second, .. })
                if first == "a" && second == "b"
        );
        assert!(build_strict("a/b[k=v]/c").is_ok());
    }

    #[test]
    fn test_empty_input() {
        let path = build("").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_origin_is_carried_unchanged() {
        let path = PathBuilder::new()
            .build(tokenize("a").unwrap(), Some("rfc7951"))
            .unwrap();
        assert_eq!(path.origin(), Some("rfc7951"));
    }

    #[test]
    fn test_error_spans_point_at_source() {
        let source = "intf[rate>5]";
        let err = build(source).unwrap_err();
        assert_eq!(err.span().unwrap().slice(source), ">");

        let source = "a[k=1][k=2]";
        let err = build(source).unwrap_err();
        assert_eq!(err.span().unwrap().slice(source), "k=2");
    }

    #[test]
    fn test_too_many_elements() {
        let xpath = vec!["a"; MAX_ELEMENTS + 1].join("/");
        assert_matches!(build(&xpath), Err(PathError::TooManyElements { .. }));
        let xpath = vec!["a"; MAX_ELEMENTS].join("/");
        assert_eq!(build(&xpath).unwrap().len(), MAX_ELEMENTS);
    }

    #[test]
    fn test_too_many_keys() {
        let filters: String = (0..=MAX_KEYS_PER_ELEMENT)
            .map(|i| format!("[k{}=v]", i))
            .collect();
        let xpath = format!("a{}", filters);
        assert_matches!(build(&xpath), Err(PathError::TooManyKeys { .. }));
    }
}

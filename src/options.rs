//! Normalizes an invocation's ordered option list into a lookup by name.
//!
//! Options are modeled with a transport-neutral [`OptionValue`] so the
//! handlers (and their tests) never touch serenity's option types directly;
//! [`ParsedOptions::parse`] is the thin adapter at that boundary.

use std::collections::HashMap;

use serenity::model::application::{CommandDataOption, CommandDataOptionValue};

use crate::error::HandlerError;

/// A single option value, tagged by the kinds our command schemas use.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Boolean(bool),
}

/// Invocation options keyed by option name. Built fresh per invocation;
/// the original ordering is not preserved.
#[derive(Debug, Default)]
pub struct ParsedOptions(HashMap<String, OptionValue>);

impl ParsedOptions {
    /// Adapts serenity's option list. Pure and infallible: an empty list is
    /// an empty map, and value kinds outside our schemas are skipped.
    /// Unknown or missing options are the handler's concern, not ours.
    pub fn parse(options: &[CommandDataOption]) -> Self {
        options
            .iter()
            .filter_map(|opt| {
                let value = match &opt.value {
                    CommandDataOptionValue::String(s) => OptionValue::String(s.clone()),
                    CommandDataOptionValue::Boolean(b) => OptionValue::Boolean(*b),
                    _ => return None,
                };
                Some((opt.name.clone(), value))
            })
            .collect()
    }

    /// Looks up a string option by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(OptionValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Looks up a boolean option by name.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.0.get(name) {
            Some(OptionValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Like [`get_str`](Self::get_str) but treats absence as a
    /// `MissingOption` error, for options the schema marks required.
    pub fn require_str(&self, name: &'static str) -> Result<&str, HandlerError> {
        self.get_str(name).ok_or(HandlerError::MissingOption(name))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, OptionValue)> for ParsedOptions {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

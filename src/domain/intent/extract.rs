//! Extraction of a JSON object from free-form model output

use serde::Deserialize;

use super::IntentConfig;
use crate::domain::workflow::{NodeKind, Variable, VariableType};

/// Slice from the first `{` to the last `}`, if both exist in that order.
///
/// Handles prose before or after the object and markdown code fences.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Why a reply could not be turned into an [`IntentConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum ParseFailure {
    /// Reply was empty or whitespace
    EmptyReply,
    /// No `{ ... }` region in the reply
    NoJsonObject,
    /// The `{ ... }` region did not decode as an intent config
    MalformedJson(String),
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReply => write!(f, "empty reply"),
            Self::NoJsonObject => write!(f, "no JSON object in reply"),
            Self::MalformedJson(e) => write!(f, "malformed JSON: {}", e),
        }
    }
}

/// Decode the first embedded JSON object of a model reply
pub fn parse_intent_config(text: &str) -> Result<IntentConfig, ParseFailure> {
    if text.trim().is_empty() {
        return Err(ParseFailure::EmptyReply);
    }

    let json_str = extract_json_object(text).ok_or(ParseFailure::NoJsonObject)?;

    let reply: ReplyConfig =
        serde_json::from_str(json_str).map_err(|e| ParseFailure::MalformedJson(e.to_string()))?;

    reply.into_config()
}

/// Model-side shape of an intent config. Variable entries are loosely typed
/// so that one odd entry does not discard the rest of the reply.
#[derive(Debug, Deserialize)]
struct ReplyConfig {
    #[serde(default)]
    workflow_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    node_types: Option<Vec<NodeKind>>,
    #[serde(default)]
    variables: Option<Vec<ReplyVariable>>,
}

#[derive(Debug, Deserialize)]
struct ReplyVariable {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    var_type: serde_json::Value,
    #[serde(default)]
    required: serde_json::Value,
}

impl ReplyConfig {
    fn into_config(self) -> Result<IntentConfig, ParseFailure> {
        let variables = self
            .variables
            .map(|variables| {
                variables
                    .into_iter()
                    .enumerate()
                    .map(|(index, variable)| variable.into_variable(index))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(IntentConfig {
            workflow_name: self.workflow_name,
            description: self.description,
            node_types: self.node_types,
            variables,
        })
    }
}

impl ReplyVariable {
    /// Unknown types become `string`; a non-boolean `required` counts as `true`
    fn into_variable(self, index: usize) -> Result<Variable, ParseFailure> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(ParseFailure::MalformedJson(format!(
                    "variable at index {} has no name",
                    index
                )));
            }
        };

        let var_type = self
            .var_type
            .as_str()
            .and_then(|tag| tag.parse().ok())
            .unwrap_or(VariableType::String);
        let required = self.required.as_bool().unwrap_or(true);

        Ok(Variable::new(name, var_type).with_required(required))
    }
}

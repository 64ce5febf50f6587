//! Workflow input variables

use serde::{Deserialize, Serialize};

/// Value type of a workflow input variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    File,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::File => "file",
        }
    }
}

impl std::str::FromStr for VariableType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "file" => Ok(Self::File),
            other => Err(format!(
                "unknown variable type '{}' (expected string, number, boolean or file)",
                other
            )),
        }
    }
}

/// A variable declared by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl Variable {
    pub fn new(name: impl Into<String>, var_type: VariableType) -> Self {
        Self {
            name: name.into(),
            var_type,
            required: true,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Parses the `name:type` shorthand used on the command line
impl std::str::FromStr for Variable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, var_type) = match s.split_once(':') {
            Some((name, var_type)) => (name.trim(), var_type.trim().parse()?),
            None => (s.trim(), VariableType::String),
        };

        if name.is_empty() {
            return Err(format!("variable '{}' has an empty name", s));
        }

        Ok(Self::new(name, var_type))
    }
}

use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("variable name must not be empty");
        assert_eq!(
            error.to_string(),
            "Validation error: variable name must not be empty"
        );
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("openai", "HTTP 401 Unauthorized: bad key");
        assert_eq!(
            error.to_string(),
            "Provider error: openai - HTTP 401 Unauthorized: bad key"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("missing api key");
        assert_eq!(error.to_string(), "Configuration error: missing api key");
    }
}

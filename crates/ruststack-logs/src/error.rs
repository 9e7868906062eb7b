//! CloudWatch Logs error codes.

use std::fmt;

use ruststack_sdk_core::ErrorCode;

/// Documented CloudWatch Logs error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LogsErrorCode {
    /// The batch was already accepted; `expectedSequenceToken` is in the message.
    DataAlreadyAcceptedException,
    /// A parameter is out of range or malformed.
    InvalidParameterException,
    /// The sequence token is stale.
    InvalidSequenceTokenException,
    /// Too many log groups or streams.
    LimitExceededException,
    /// Another operation on the resource is in progress.
    OperationAbortedException,
    /// The group or stream already exists.
    ResourceAlreadyExistsException,
    /// The group or stream does not exist.
    ResourceNotFoundException,
    /// The service is temporarily unavailable.
    ServiceUnavailableException,
    /// The access key or security token is not valid.
    UnrecognizedClientException,
}

impl ErrorCode for LogsErrorCode {
    const ALL: &'static [&'static str] = &[
        "DataAlreadyAcceptedException",
        "InvalidParameterException",
        "InvalidSequenceTokenException",
        "LimitExceededException",
        "OperationAbortedException",
        "ResourceAlreadyExistsException",
        "ResourceNotFoundException",
        "ServiceUnavailableException",
        "UnrecognizedClientException",
    ];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "DataAlreadyAcceptedException" => Some(Self::DataAlreadyAcceptedException),
            "InvalidParameterException" => Some(Self::InvalidParameterException),
            "InvalidSequenceTokenException" => Some(Self::InvalidSequenceTokenException),
            "LimitExceededException" => Some(Self::LimitExceededException),
            "OperationAbortedException" => Some(Self::OperationAbortedException),
            "ResourceAlreadyExistsException" => Some(Self::ResourceAlreadyExistsException),
            "ResourceNotFoundException" => Some(Self::ResourceNotFoundException),
            "ServiceUnavailableException" => Some(Self::ServiceUnavailableException),
            "UnrecognizedClientException" => Some(Self::UnrecognizedClientException),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DataAlreadyAcceptedException => "DataAlreadyAcceptedException",
            Self::InvalidParameterException => "InvalidParameterException",
            Self::InvalidSequenceTokenException => "InvalidSequenceTokenException",
            Self::LimitExceededException => "LimitExceededException",
            Self::OperationAbortedException => "OperationAbortedException",
            Self::ResourceAlreadyExistsException => "ResourceAlreadyExistsException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ServiceUnavailableException => "ServiceUnavailableException",
            Self::UnrecognizedClientException => "UnrecognizedClientException",
        }
    }
}

impl fmt::Display for LogsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_registered_codes() {
        for code in LogsErrorCode::ALL {
            assert_eq!(LogsErrorCode::from_code(code).unwrap().to_string(), *code);
        }
        assert_eq!(LogsErrorCode::from_code("ResourceNotFound"), None);
    }
}

//! Wire shape of an extraction result.
//!
//! Clients test `sms_code !== -1`, so a missing code is the JSON integer `-1`
//! while a found code is always a JSON string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::error::ExtractError;

const SENTINEL: i64 = -1;

/// Either a verbatim digit string or the `-1` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsCode {
    Code(String),
    Missing,
}

impl SmsCode {
    pub fn as_code(&self) -> Option<&str> {
        match self {
            SmsCode::Code(code) => Some(code),
            SmsCode::Missing => None,
        }
    }
}

impl Serialize for SmsCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SmsCode::Code(code) => serializer.serialize_str(code),
            SmsCode::Missing => serializer.serialize_i64(SENTINEL),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSmsCode {
    Code(String),
    Sentinel(i64),
}

impl<'de> Deserialize<'de> for SmsCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawSmsCode::deserialize(deserializer)? {
            RawSmsCode::Code(code) => Ok(SmsCode::Code(code)),
            RawSmsCode::Sentinel(SENTINEL) => Ok(SmsCode::Missing),
            RawSmsCode::Sentinel(other) => Err(serde::de::Error::custom(format!(
                "sms_code must be a string or {SENTINEL}, got {other}"
            ))),
        }
    }
}

/// Body of `GET /get_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CodeResponse {
    /// 4-6 digit code as a string, or the integer `-1` when none was found.
    #[schema(value_type = String, example = "123456")]
    pub sms_code: SmsCode,
    /// `"Code found"` or one of the fixed failure strings.
    #[schema(example = "Code found")]
    pub message: String,
}

impl CodeResponse {
    pub fn found(code: impl Into<String>) -> Self {
        Self {
            sms_code: SmsCode::Code(code.into()),
            message: "Code found".to_owned(),
        }
    }

    pub fn missing(err: &ExtractError) -> Self {
        Self {
            sms_code: SmsCode::Missing,
            message: err.message().to_owned(),
        }
    }
}

impl From<Result<String, ExtractError>> for CodeResponse {
    fn from(result: Result<String, ExtractError>) -> Self {
        match result {
            Ok(code) => CodeResponse::found(code),
            Err(err) => CodeResponse::missing(&err),
        }
    }
}

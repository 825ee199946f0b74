use reqwest::Url;

use crate::error::CoreError;

pub(super) fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidInput(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidInput(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}

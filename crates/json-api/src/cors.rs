//! Cross-origin policy built from the configured origin list.

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::header::{HeaderValue, InvalidHeaderValue},
};

/// Build the CORS handler. A `*` entry anywhere in `origins` allows every origin.
pub(crate) fn handler(origins: &[String]) -> Result<CorsHandler, InvalidHeaderValue> {
    let allow_origin = if origins.iter().any(|origin| origin.trim() == "*") {
        AllowOrigin::any()
    } else {
        let origins = origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        AllowOrigin::list(origins)
    };

    Ok(Cors::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler())
}

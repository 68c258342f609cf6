//! Service Banner Handler

use salvo::prelude::*;

use crate::responses::MessageResponse;

pub(crate) const BANNER: &str = "Ferma Medovik API";

/// Service Banner Handler
#[endpoint(tags("meta"), summary = "Service banner")]
pub(crate) async fn handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(BANNER))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_banner() -> TestResult {
        let router = Router::with_path("api").get(handler);

        let response: MessageResponse = TestClient::get("http://example.com/api")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, BANNER);

        Ok(())
    }
}

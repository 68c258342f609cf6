//! Get About Us Handler

use salvo::prelude::*;

use crate::{
    about::{errors::into_status_error, models::AboutBody},
    extensions::*,
};

/// Get About Us Handler
///
/// The first read stores and returns the default content.
#[endpoint(tags("about"), summary = "Get About Us")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AboutBody>, StatusError> {
    let app = depot.app_context()?;

    let about = app.about
        .get_about()
        .await
        .map_err(into_status_error)?;

    Ok(Json(about.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use medovik_app::domain::about::{MockAboutService, records::AboutRecord};

    use crate::test_helpers::about_service;

    use super::*;

    #[tokio::test]
    async fn test_get_about_returns_content() -> TestResult {
        let mut about = MockAboutService::new();

        about
            .expect_get_about()
            .once()
            .return_once(|| Ok(AboutRecord::default()));

        let service = about_service(about, Router::with_path("about").get(handler));

        let response: AboutBody = TestClient::get("http://example.com/about")
            .send(&service)
            .await
            .take_json()
            .await?;

        let expected: AboutBody = AboutRecord::default().into();

        assert_eq!(response, expected);

        Ok(())
    }
}

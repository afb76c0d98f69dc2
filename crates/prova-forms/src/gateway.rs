//! Backend seam for the create-test form.
//!
//! The form talks to the backend through this trait so tests can substitute
//! a fake and assert on exactly which calls were issued.

use prova_api::{ApiClient, ApiError, CreateTestRequest, TestsInfo};

pub trait CreateTestGateway {
    /// Fetch the combined reference data for the form.
    fn create_test_info(&self, token: &str) -> impl Future<Output = Result<TestsInfo, ApiError>>;

    /// Submit a new test.
    fn create_test(
        &self,
        token: &str,
        request: &CreateTestRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

impl CreateTestGateway for ApiClient {
    async fn create_test_info(&self, token: &str) -> Result<TestsInfo, ApiError> {
        Self::create_test_info(self, token).await
    }

    async fn create_test(&self, token: &str, request: &CreateTestRequest) -> Result<(), ApiError> {
        Self::create_test(self, token, request).await
    }
}

//! Test creation endpoints: reference data, creation, view counting.

use serde::Deserialize;

use crate::{
    ApiClient,
    error::ApiError,
    http::check_response,
    types::{CreateTestRequest, TestsInfo},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestsInfoEnvelope {
    tests_infos: TestsInfo,
}

impl ApiClient {
    /// `GET /tests/info` — categories and teacher-discipline assignments in
    /// one round trip, for populating the create-test form.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success response.
    pub async fn create_test_info(&self, token: &str) -> Result<TestsInfo, ApiError> {
        let resp = self
            .http
            .get(self.url("/tests/info"))
            .bearer_auth(token)
            .send()
            .await?;
        let data: TestsInfoEnvelope = check_response(resp).await?.json().await?;
        Ok(data.tests_infos)
    }

    /// `POST /tests/create`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's validation text, or a
    /// transport error when no response was received.
    pub async fn create_test(
        &self,
        token: &str,
        request: &CreateTestRequest,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/tests/create"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// `PATCH /tests/:id/addView` — bump a test's view counter.
    ///
    /// Fire-and-forget from the caller's perspective: failures are worth a
    /// log line, never an interruption.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success response.
    pub async fn add_test_view(&self, token: &str, test_id: i32) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/tests/{test_id}/addView")))
            .bearer_auth(token)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const INFO_FIXTURE: &str = r#"{
        "testsInfos": {
            "categories": [ { "id": 3, "name": "Projeto" } ],
            "teachersDisciplines": [
                {
                    "id": 42,
                    "discipline": { "id": 7, "name": "React" },
                    "teacher": { "id": 2, "name": "Bruna Hamori" },
                    "tests": []
                }
            ]
        }
    }"#;

    #[test]
    fn parse_tests_info_envelope() {
        let data: TestsInfoEnvelope = serde_json::from_str(INFO_FIXTURE).unwrap();
        assert_eq!(data.tests_infos.categories.len(), 1);
        assert_eq!(data.tests_infos.teachers_disciplines[0].id, 42);
        assert_eq!(
            data.tests_infos.teachers_disciplines[0].discipline.name,
            "React"
        );
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let request = CreateTestRequest {
            name: "Prova 1".into(),
            pdf_url: "http://x/1.pdf".into(),
            category_id: 3,
            teacher_discipline_id: 42,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["pdfUrl"], "http://x/1.pdf");
        assert_eq!(body["categoryId"], 3);
        assert_eq!(body["teacherDisciplineId"], 42);
        assert!(body.get("disciplineId").is_none());
    }
}

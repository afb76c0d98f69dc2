//! Test listing and category endpoints.

use serde::Deserialize;

use prova_core::entities::Category;

use crate::{
    ApiClient,
    error::ApiError,
    http::check_response,
    types::{DisciplineGroup, TeacherGroup},
};

#[derive(Deserialize)]
struct TestsEnvelope<T> {
    tests: Vec<T>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Category>,
}

impl ApiClient {
    /// `GET /tests?groupBy=disciplines` — tests grouped by term and discipline.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success response.
    pub async fn tests_by_discipline(&self, token: &str) -> Result<Vec<DisciplineGroup>, ApiError> {
        let resp = self
            .http
            .get(self.url("/tests?groupBy=disciplines"))
            .bearer_auth(token)
            .send()
            .await?;
        let data: TestsEnvelope<DisciplineGroup> = check_response(resp).await?.json().await?;
        Ok(data.tests)
    }

    /// `GET /tests?groupBy=teachers` — tests grouped by instructor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success response.
    pub async fn tests_by_teacher(&self, token: &str) -> Result<Vec<TeacherGroup>, ApiError> {
        let resp = self
            .http
            .get(self.url("/tests?groupBy=teachers"))
            .bearer_auth(token)
            .send()
            .await?;
        let data: TestsEnvelope<TeacherGroup> = check_response(resp).await?.json().await?;
        Ok(data.tests)
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success response.
    pub async fn categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        let resp = self
            .http
            .get(self.url("/categories"))
            .bearer_auth(token)
            .send()
            .await?;
        let data: CategoriesEnvelope = check_response(resp).await?.json().await?;
        Ok(data.categories)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BY_DISCIPLINE_FIXTURE: &str = r#"{
        "tests": [
            {
                "id": 1,
                "number": 1,
                "disciplines": [
                    {
                        "id": 7,
                        "name": "HTML e CSS",
                        "teacherDisciplines": [
                            {
                                "id": 42,
                                "discipline": { "id": 7, "name": "HTML e CSS" },
                                "teacher": { "id": 2, "name": "Diego Pinho" },
                                "tests": []
                            }
                        ]
                    }
                ]
            },
            { "id": 2, "number": 2, "disciplines": [] }
        ]
    }"#;

    const BY_TEACHER_FIXTURE: &str = r#"{
        "tests": [
            {
                "id": 42,
                "teacher": { "id": 2, "name": "Diego Pinho" },
                "disciplines": [ { "id": 7, "name": "HTML e CSS" } ],
                "tests": [
                    {
                        "id": 9,
                        "name": "Prova 1",
                        "pdfUrl": "http://x/1.pdf",
                        "category": { "id": 3, "name": "Projeto" },
                        "views": 4
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parse_tests_by_discipline() {
        let data: TestsEnvelope<DisciplineGroup> =
            serde_json::from_str(BY_DISCIPLINE_FIXTURE).unwrap();
        assert_eq!(data.tests.len(), 2);

        let term = &data.tests[0];
        assert_eq!(term.number, 1);
        assert_eq!(term.disciplines[0].name, "HTML e CSS");
        assert_eq!(term.disciplines[0].teacher_disciplines[0].id, 42);
        assert!(data.tests[1].disciplines.is_empty());
    }

    #[test]
    fn parse_tests_by_teacher() {
        let data: TestsEnvelope<TeacherGroup> = serde_json::from_str(BY_TEACHER_FIXTURE).unwrap();
        let group = &data.tests[0];
        assert_eq!(group.teacher.name, "Diego Pinho");
        assert_eq!(group.tests[0].name, "Prova 1");
        assert_eq!(group.tests[0].views, 4);
    }

    #[test]
    fn parse_categories() {
        let data: CategoriesEnvelope = serde_json::from_str(
            r#"{ "categories": [ { "id": 3, "name": "Projeto" }, { "id": 4, "name": "Prática" } ] }"#,
        )
        .unwrap();
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.categories[1].name, "Prática");
    }
}

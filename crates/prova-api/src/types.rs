//! Wire types for the prova backend endpoints.

use serde::{Deserialize, Serialize};

use prova_core::entities::{Category, Discipline, Teacher, TeacherDiscipline, Test};

/// One term grouping from `GET /tests?groupBy=disciplines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineGroup {
    pub id: i32,
    pub number: i32,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
}

/// One teacher grouping from `GET /tests?groupBy=teachers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherGroup {
    pub id: i32,
    pub teacher: Teacher,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
    #[serde(default)]
    pub tests: Vec<Test>,
}

/// Combined reference data for the create-test form.
///
/// Fetched in a single round trip on form entry (`GET /tests/info`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestsInfo {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub teachers_disciplines: Vec<TeacherDiscipline>,
}

/// Body of `POST /tests/create`.
///
/// The discipline is not part of the payload — a test references its
/// teacher-discipline assignment, which already pins the discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRequest {
    pub name: String,
    pub pdf_url: String,
    pub category_id: i32,
    pub teacher_discipline_id: i32,
}

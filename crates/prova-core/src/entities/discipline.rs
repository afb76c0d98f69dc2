use serde::{Deserialize, Serialize};

use crate::entities::TeacherDiscipline;

/// An academic period containing disciplines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: i32,
    pub number: i32,
}

/// A course taught in a term.
///
/// `teacher_disciplines` and `term` are absent in some groupings of the
/// `/tests` responses, hence the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub teacher_disciplines: Vec<TeacherDiscipline>,
    #[serde(default)]
    pub term: Option<Term>,
}

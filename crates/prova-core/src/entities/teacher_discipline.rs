use serde::{Deserialize, Serialize};

use crate::entities::{Discipline, Teacher, Test};

/// Join entity: one teacher's assignment to one discipline in one term.
///
/// This is the unit a created test references — the create-test form submits
/// a `teacherDisciplineId`, never a teacher or discipline id directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDiscipline {
    pub id: i32,
    pub discipline: Discipline,
    pub teacher: Teacher,
    #[serde(default)]
    pub tests: Vec<Test>,
}

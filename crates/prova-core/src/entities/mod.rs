//! Entity structs for the prova domain.
//!
//! Field names follow the backend's camelCase JSON (`pdfUrl`,
//! `teacherDisciplines`), so every struct carries a `rename_all` attribute.

mod category;
mod discipline;
mod teacher;
mod teacher_discipline;
mod test;

pub use category::Category;
pub use discipline::{Discipline, Term};
pub use teacher::Teacher;
pub use teacher_discipline::TeacherDiscipline;
pub use test::Test;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEACHER_DISCIPLINE_FIXTURE: &str = r#"{
        "id": 42,
        "discipline": {
            "id": 7,
            "name": "Humildade",
            "term": { "id": 1, "number": 1 }
        },
        "teacher": { "id": 2, "name": "Bruna Hamori" },
        "tests": [
            {
                "id": 9,
                "name": "Prova 1",
                "pdfUrl": "http://x/1.pdf",
                "category": { "id": 3, "name": "Projeto" },
                "views": 12
            }
        ]
    }"#;

    #[test]
    fn parse_teacher_discipline_fixture() {
        let td: TeacherDiscipline = serde_json::from_str(TEACHER_DISCIPLINE_FIXTURE).unwrap();
        assert_eq!(td.id, 42);
        assert_eq!(td.discipline.id, 7);
        assert_eq!(td.discipline.term, Some(Term { id: 1, number: 1 }));
        assert_eq!(td.teacher.name, "Bruna Hamori");
        assert_eq!(td.tests.len(), 1);
        assert_eq!(td.tests[0].pdf_url, "http://x/1.pdf");
        assert_eq!(td.tests[0].views, 12);
    }

    #[test]
    fn discipline_tolerates_missing_nested_fields() {
        let discipline: Discipline =
            serde_json::from_str(r#"{ "id": 7, "name": "Humildade" }"#).unwrap();
        assert_eq!(discipline.teacher_disciplines, vec![]);
        assert_eq!(discipline.term, None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let test = Test {
            id: 9,
            name: "Prova 1".into(),
            pdf_url: "http://x/1.pdf".into(),
            category: Category {
                id: 3,
                name: "Projeto".into(),
            },
            views: 0,
        };
        let json = serde_json::to_value(&test).unwrap();
        assert_eq!(json["pdfUrl"], "http://x/1.pdf");
    }
}

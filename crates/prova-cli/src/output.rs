//! Terminal rendering helpers.

use prova_api::{DisciplineGroup, TeacherGroup};
use prova_core::entities::Category;
use prova_core::{AlertChannel, AlertKind};

/// Print and drain the pending alert, if any. Errors go to stderr.
pub fn flush_alerts(alerts: &mut AlertChannel) {
    if let Some(alert) = alerts.take() {
        match alert.kind {
            AlertKind::Error => eprintln!("✗ {}", alert.text),
            AlertKind::Success => println!("✓ {}", alert.text),
        }
    }
}

pub fn render_discipline_groups(groups: &[DisciplineGroup]) {
    for term in groups {
        println!("Período {}", term.number);
        for discipline in &term.disciplines {
            println!("  {} (id {})", discipline.name, discipline.id);
            for assignment in &discipline.teacher_disciplines {
                for test in &assignment.tests {
                    println!(
                        "    [{}] {} - {} ({} visualizações)",
                        test.category.name, test.name, test.pdf_url, test.views
                    );
                }
            }
        }
    }
}

pub fn render_teacher_groups(groups: &[TeacherGroup]) {
    for group in groups {
        println!("{} (id {})", group.teacher.name, group.id);
        for test in &group.tests {
            println!(
                "  [{}] {} - {} ({} visualizações)",
                test.category.name, test.name, test.pdf_url, test.views
            );
        }
    }
}

pub fn render_categories(categories: &[Category]) {
    for category in categories {
        println!("{:>4}  {}", category.id, category.name);
    }
}

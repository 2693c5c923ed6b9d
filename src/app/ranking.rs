use crate::config::OutputFormat;
use crate::domain::{GroupStatus, School, StudentId};
use crate::utils::error::{Result, SchoolError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub area: String,
    pub direction: String,
    pub level: String,
    pub status: GroupStatus,
    pub rank: usize,
    pub student_id: StudentId,
    pub full_name: String,
    pub average_grade: Option<f64>,
    pub attendance: Option<f64>,
    pub rating: f64,
}

/// Ranks every group in the school (or those whose direction matches) and
/// flattens the result into rows, group by group.
pub fn rank_groups(school: &mut School, direction: Option<&str>) -> Vec<RankingRow> {
    let area_names: Vec<_> = school
        .areas()
        .iter()
        .map(|a| (a.id(), a.name().to_string()))
        .collect();
    let mut rows = Vec::new();

    for group in school.groups_mut() {
        if direction.is_some_and(|d| d != group.direction_name) {
            continue;
        }

        let area = group
            .area()
            .and_then(|id| area_names.iter().find(|(area_id, _)| *area_id == id))
            .map(|(_, name)| name.clone())
            .unwrap_or_default();
        let direction_name = group.direction_name.clone();
        let level_name = group.level_name.clone();
        let status = group.status();

        for (index, student) in group.show_performance().iter().enumerate() {
            rows.push(RankingRow {
                area: area.clone(),
                direction: direction_name.clone(),
                level: level_name.clone(),
                status,
                rank: index + 1,
                student_id: student.id(),
                full_name: student.full_name(),
                average_grade: student.average_grade(),
                attendance: student.attendance_percentage(),
                rating: student.performance_rating(),
            });
        }
    }

    tracing::info!("Ranked {} students", rows.len());
    rows
}

pub fn render(rows: &[RankingRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => render_csv(rows),
    }
}

fn render_table(rows: &[RankingRow]) -> String {
    let mut lines = Vec::new();

    for row in rows {
        if row.rank == 1 {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!(
                "{} / {} / {} [{}]",
                row.area, row.direction, row.level, row.status
            ));
        }
        lines.push(format!(
            "{:>3}. {:<30} {:>7.2}",
            row.rank, row.full_name, row.rating
        ));
    }

    lines.join("\n")
}

fn render_csv(rows: &[RankingRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| SchoolError::IoError(e.into_error()))?;
    String::from_utf8(data)
        .map_err(|e| SchoolError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

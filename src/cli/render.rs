//! Plain-text rendering of the employee list.

use std::io::{self, Write};

use crate::format::format_date;
use crate::i18n::I18n;
use crate::model::{Employee, Language, ViewMode};
use crate::projection::{page_controls, visible_page};
use crate::store::AppState;
use crate::validation::Field;

/// Render the visible page in the state's view mode, followed by the
/// pagination row.
pub fn render_page(state: &AppState, i18n: &I18n, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", i18n.t("employees.list.title"))?;

    let visible = visible_page(&state.employees, &state.pagination);
    if visible.is_empty() {
        writeln!(out, "{}", i18n.t("employees.list.noResults"))?;
        return Ok(());
    }

    match state.view {
        ViewMode::Table => render_table(visible, i18n, out)?,
        ViewMode::List => render_cards(visible, i18n, out)?,
    }

    let controls = page_controls(&state.pagination);
    let buttons: Vec<String> = controls
        .pages
        .iter()
        .map(|p| {
            if *p == controls.current_page {
                format!("[{p}]")
            } else {
                p.to_string()
            }
        })
        .collect();
    let previous = if controls.has_previous { "<" } else { " " };
    let next = if controls.has_next { ">" } else { " " };
    writeln!(out, "{previous} {} {next}", buttons.join(" "))?;
    writeln!(
        out,
        "{}",
        i18n.t_format(
            "employees.list.page",
            &[
                ("current", controls.current_page.to_string().as_str()),
                ("total", controls.total_pages.to_string().as_str()),
            ],
        )
    )
}

/// One row per employee with aligned columns.
pub fn render_table(employees: &[Employee], i18n: &I18n, out: &mut impl Write) -> io::Result<()> {
    let language = i18n.language();
    let header: Vec<String> = Field::all()
        .iter()
        .map(|f| i18n.t(&f.label_key()))
        .chain(std::iter::once("ID".to_string()))
        .collect();
    let rows: Vec<Vec<String>> = employees
        .iter()
        .map(|e| {
            Field::all()
                .iter()
                .map(|f| cell(e, *f, i18n, language))
                .chain(std::iter::once(e.id.clone()))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    write_row(&header, &widths, out)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&rule, &widths, out)?;
    for row in &rows {
        write_row(row, &widths, out)?;
    }
    Ok(())
}

/// One labelled block per employee.
pub fn render_cards(employees: &[Employee], i18n: &I18n, out: &mut impl Write) -> io::Result<()> {
    let language = i18n.language();
    for employee in employees {
        writeln!(out, "{} ({})", employee.full_name(), employee.id)?;
        for field in Field::all() {
            if matches!(field, Field::FirstName | Field::LastName) {
                continue;
            }
            writeln!(
                out,
                "  {}: {}",
                i18n.t(&field.label_key()),
                cell(employee, *field, i18n, language)
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn cell(employee: &Employee, field: Field, i18n: &I18n, language: Language) -> String {
    match field {
        Field::FirstName => employee.first_name.clone(),
        Field::LastName => employee.last_name.clone(),
        Field::DateOfEmployment => employee
            .date_of_employment
            .as_deref()
            .map(|d| format_date(d, language))
            .unwrap_or_default(),
        Field::DateOfBirth => employee
            .date_of_birth
            .as_deref()
            .map(|d| format_date(d, language))
            .unwrap_or_default(),
        Field::PhoneNumber => employee.phone_number.clone(),
        Field::Email => employee.email.clone(),
        Field::Department => employee
            .department
            .map(|d| i18n.t(&format!("employees.form.departments.{}", d.as_str())))
            .unwrap_or_default(),
        Field::Position => employee
            .position
            .map(|p| i18n.t(&format!("employees.form.positions.{}", p.as_str())))
            .unwrap_or_default(),
    }
}

fn write_row(cells: &[String], widths: &[usize], out: &mut impl Write) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}", w = *w))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, EmployeeDraft, Pagination, Position};

    fn state(count: usize, view: ViewMode) -> AppState {
        let employees: Vec<Employee> = (0..count)
            .map(|i| {
                Employee::from_draft(
                    format!("id-{i}"),
                    String::new(),
                    EmployeeDraft {
                        first_name: format!("Name{i}"),
                        last_name: "Doe".to_string(),
                        date_of_employment: Some("2021-03-04T00:00:00.000Z".to_string()),
                        department: Some(Department::Analytics),
                        position: Some(Position::Junior),
                        ..Default::default()
                    },
                )
            })
            .collect();
        AppState {
            pagination: Pagination {
                current_page: 1,
                items_per_page: 2,
                total_items: count,
            },
            employees,
            view,
            ..Default::default()
        }
    }

    fn render(state: &AppState, language: Language) -> String {
        let i18n = I18n::new(language);
        let mut out = Vec::new();
        render_page(state, &i18n, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_list_shows_no_results() {
        let text = render(&state(0, ViewMode::Table), Language::En);
        assert!(text.contains("No employees found"));
    }

    #[test]
    fn table_shows_localized_headers_and_page() {
        let text = render(&state(3, ViewMode::Table), Language::En);
        assert!(text.contains("First Name"));
        assert!(text.contains("Name0"));
        assert!(text.contains("Name1"));
        assert!(!text.contains("Name2"));
        assert!(text.contains("3/4/2021"));
        assert!(text.contains("Analytics"));
        assert!(text.contains("Page 1 of 2"));
        assert!(text.contains("[1] 2 >"));
    }

    #[test]
    fn cards_follow_language() {
        let text = render(&state(1, ViewMode::List), Language::Tr);
        assert!(text.contains("Name0 Doe (id-0)"));
        assert!(text.contains("İşe Başlama Tarihi: 04.03.2021"));
        assert!(text.contains("Departman: Analitik"));
        assert!(text.contains("Sayfa 1 / 1"));
    }
}

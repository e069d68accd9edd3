//! Command-line view over the persisted roster.
//!
//! Each invocation opens the store from its storage slot, performs one
//! action through the store API the same way an interactive view would
//! (open the dialog, validate, mutate, close the dialog), and prints the
//! result in the active language.

mod render;

pub use render::{render_cards, render_page, render_table};

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::i18n::I18n;
use crate::model::{
    Department, Employee, EmployeeDraft, EmployeePatch, Language, ModalKind, PaginationPatch,
    Position, ViewMode,
};
use crate::persist::FileStorage;
use crate::store::Store;
use crate::validation::{validate, ValidationError, ValidationErrors};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Employee roster manager")]
pub struct Cli {
    /// Directory holding the persisted store (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to config.toml (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current page of employees
    List {
        /// Jump to this page first
        #[arg(long)]
        page: Option<usize>,
    },
    /// Add a new employee
    Add(EmployeeArgs),
    /// Edit an existing employee
    Edit {
        id: String,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    /// Delete an employee
    Delete { id: String },
    /// Switch the list layout
    View {
        #[arg(value_parser = parse_view)]
        mode: ViewMode,
    },
    /// Switch the UI language
    Lang {
        #[arg(value_parser = parse_language)]
        language: Language,
    },
    /// Change the number of employees per page
    PageSize { size: usize },
}

/// Form fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct EmployeeArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// Date of employment (YYYY-MM-DD)
    #[arg(long)]
    pub employed: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub born: Option<String>,
    /// Mobile number without the leading 0 (e.g. 5321234567)
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, value_parser = parse_department)]
    pub department: Option<Department>,
    #[arg(long, value_parser = parse_position)]
    pub position: Option<Position>,
}

impl EmployeeArgs {
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            date_of_employment: self.employed.clone(),
            date_of_birth: self.born.clone(),
            phone_number: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            department: self.department,
            position: self.position,
        }
    }

    pub fn to_patch(&self) -> EmployeePatch {
        EmployeePatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_employment: self.employed.clone(),
            date_of_birth: self.born.clone(),
            phone_number: self.phone.clone(),
            email: self.email.clone(),
            department: self.department,
            position: self.position,
        }
    }
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    ViewMode::parse(s).ok_or_else(|| format!("unknown view '{s}' (expected table or list)"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unknown language '{s}' (expected en or tr)"))
}

fn parse_department(s: &str) -> Result<Department, String> {
    Department::parse(s).ok_or_else(|| {
        let known: Vec<_> = Department::all().iter().map(|d| d.as_str()).collect();
        format!("unknown department '{s}' (expected one of: {})", known.join(", "))
    })
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::parse(s).ok_or_else(|| {
        let known: Vec<_> = Position::all().iter().map(|p| p.as_str()).collect();
        format!("unknown position '{s}' (expected one of: {})", known.join(", "))
    })
}

/// Open the store described by `cli` and its config file.
pub fn open_store(cli: &Cli) -> Result<Store> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let storage = FileStorage::new(
        cli.data_dir
            .clone()
            .unwrap_or_else(|| config.storage.dir.clone()),
    );
    tracing::debug!(dir = %storage.dir().display(), slot = %config.storage.slot, "Opening store");

    Ok(Store::load(
        storage,
        &config.storage.slot,
        config.defaults.initial_state(),
    ))
}

/// Execute one command, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<ExitCode> {
    let store = open_store(&cli)?;
    let i18n = I18n::new(store.state().language);
    let follow = i18n.follow(&store);

    let code = match cli.command {
        Command::List { page } => {
            if let Some(page) = page {
                store.update_pagination(PaginationPatch {
                    current_page: Some(page),
                    items_per_page: None,
                })?;
            }
            render_page(&store.state(), &i18n, out)?;
            ExitCode::SUCCESS
        }

        Command::Add(fields) => {
            // Create mode: no selection, every dialog closed.
            store.open_modal(ModalKind::AddEdit, None);
            let outcome = submit_new(&store, &fields, &i18n, out);
            store.close_modal(ModalKind::AddEdit);
            outcome?
        }

        Command::Edit { id, fields } => {
            let patch = fields.to_patch();
            if patch.is_empty() {
                bail!("nothing to change for employee '{id}'");
            }
            let current = store
                .state()
                .find_employee(&id)
                .cloned()
                .with_context(|| format!("employee '{id}' not found"))?;
            store.open_modal(ModalKind::AddEdit, Some(current.clone()));
            let outcome = submit_edit(&store, current, patch, &i18n, out);
            store.close_modal(ModalKind::AddEdit);
            outcome?
        }

        Command::Delete { id } => {
            let target = store
                .state()
                .find_employee(&id)
                .cloned()
                .with_context(|| format!("employee '{id}' not found"))?;
            store.open_modal(ModalKind::Delete, Some(target.clone()));
            let outcome = confirm_delete(&store, &target, &i18n, out);
            store.close_modal(ModalKind::Delete);
            outcome?;
            writeln!(
                out,
                "{}",
                i18n.t_format(
                    "employees.confirmations.deleted",
                    &[("fullName", target.full_name().as_str())],
                )
            )?;
            ExitCode::SUCCESS
        }

        Command::View { mode } => {
            store.set_view(mode);
            writeln!(out, "{}", mode.as_str())?;
            ExitCode::SUCCESS
        }

        Command::Lang { language } => {
            store.set_language(language);
            writeln!(out, "{}", language.native_name())?;
            ExitCode::SUCCESS
        }

        Command::PageSize { size } => {
            store.update_pagination(PaginationPatch {
                current_page: None,
                items_per_page: Some(size),
            })?;
            render_page(&store.state(), &i18n, out)?;
            ExitCode::SUCCESS
        }
    };

    follow.unsubscribe();

    if let Some(error) = store.last_persist_error() {
        writeln!(out, "warning: changes were not saved: {error}")?;
    }
    Ok(code)
}

// The helpers below run while a dialog is open; callers close it whatever
// they return.

fn submit_new(
    store: &Store,
    fields: &EmployeeArgs,
    i18n: &I18n,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let draft = fields.to_draft();
    if let Err(ValidationError(errors)) = validate(&draft, i18n).into_result() {
        write_errors(&errors, i18n, out)?;
        return Ok(ExitCode::FAILURE);
    }

    let employee = store.add_employee(draft)?;
    writeln!(
        out,
        "{}",
        i18n.t_format(
            "employees.confirmations.added",
            &[
                ("fullName", employee.full_name().as_str()),
                ("id", employee.id.as_str()),
            ],
        )
    )?;
    Ok(ExitCode::SUCCESS)
}

fn submit_edit(
    store: &Store,
    current: Employee,
    patch: EmployeePatch,
    i18n: &I18n,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let id = current.id.clone();
    let mut merged = current;
    merged.apply_patch(patch.clone());
    if let Err(ValidationError(errors)) = validate(&merged.to_draft(), i18n).into_result() {
        write_errors(&errors, i18n, out)?;
        return Ok(ExitCode::FAILURE);
    }

    writeln!(out, "{}", i18n.t("employees.confirmations.edit"))?;
    let updated = store.update_employee(&id, patch)?;
    writeln!(
        out,
        "{}",
        i18n.t_format(
            "employees.confirmations.updated",
            &[("fullName", updated.full_name().as_str())],
        )
    )?;
    Ok(ExitCode::SUCCESS)
}

fn confirm_delete(store: &Store, target: &Employee, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", i18n.t("employees.modalTitles.delete"))?;
    writeln!(
        out,
        "{}",
        i18n.t_format(
            "employees.confirmations.delete",
            &[("fullName", target.full_name().as_str())],
        )
    )?;
    store.delete_employee(&target.id)?;
    Ok(())
}

fn write_errors(errors: &ValidationErrors, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    for (field, message) in errors.iter() {
        writeln!(out, "{}: {}", i18n.t(&field.label_key()), message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::DEFAULT_SLOT;
    use crate::store::AppState;
    use std::io;
    use tempfile::TempDir;

    /// Output sink that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn seeded_dir() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let store = Store::load(FileStorage::new(dir.path()), DEFAULT_SLOT, AppState::default());
        let ada = store
            .add_employee(EmployeeDraft {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                date_of_employment: Some("2022-01-10".to_string()),
                date_of_birth: Some("1990-12-10".to_string()),
                phone_number: "5321234567".to_string(),
                email: "ada@example.com".to_string(),
                department: Some(Department::Tech),
                position: Some(Position::Senior),
            })
            .unwrap();
        (dir, ada.id)
    }

    fn cli(dir: &TempDir, args: &[&str]) -> Cli {
        let config = dir.path().join("missing.toml");
        let mut argv = vec![
            "roster",
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn reopen(dir: &TempDir) -> AppState {
        Store::load(FileStorage::new(dir.path()), DEFAULT_SLOT, AppState::default()).state()
    }

    #[test]
    fn failed_delete_output_clears_selection() {
        let (dir, id) = seeded_dir();
        assert!(run(cli(&dir, &["delete", id.as_str()]), &mut BrokenPipe).is_err());

        let state = reopen(&dir);
        assert_eq!(state.current_employee, None);
        assert_eq!(state.employees.len(), 1);
    }

    #[test]
    fn failed_edit_output_clears_selection() {
        let (dir, id) = seeded_dir();
        let args = ["edit", id.as_str(), "--email", "ada@lovelace.dev"];
        assert!(run(cli(&dir, &args), &mut BrokenPipe).is_err());

        let state = reopen(&dir);
        assert_eq!(state.current_employee, None);
        assert_eq!(state.employees[0].email, "ada@example.com");
    }

    #[test]
    fn edit_without_fields_is_rejected() {
        let (dir, id) = seeded_dir();
        let err = run(cli(&dir, &["edit", id.as_str()]), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("nothing to change"));
    }

    #[test]
    fn edit_validates_merged_record() {
        let (dir, id) = seeded_dir();
        let mut out = Vec::new();
        run(cli(&dir, &["edit", id.as_str(), "--phone", "0532"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Phone Number: Please enter a valid phone number"));
        assert_eq!(reopen(&dir).employees[0].phone_number, "5321234567");
    }

    #[test]
    fn parses_add_command() {
        let cli = Cli::try_parse_from([
            "roster",
            "add",
            "--first-name",
            "Ada",
            "--department",
            "tech",
            "--position",
            "senior",
        ])
        .unwrap();
        match cli.command {
            Command::Add(fields) => {
                let draft = fields.to_draft();
                assert_eq!(draft.first_name, "Ada");
                assert_eq!(draft.department, Some(Department::Tech));
                assert_eq!(draft.position, Some(Position::Senior));
                assert_eq!(draft.email, "");
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_department() {
        let err = Cli::try_parse_from(["roster", "add", "--department", "sales"]).unwrap_err();
        assert!(err.to_string().contains("unknown department 'sales'"));
    }

    #[test]
    fn edit_patch_only_carries_given_fields() {
        let cli = Cli::try_parse_from(["roster", "edit", "abc", "--email", "a@b.co"]).unwrap();
        match cli.command {
            Command::Edit { id, fields } => {
                assert_eq!(id, "abc");
                let patch = fields.to_patch();
                assert_eq!(patch.email.as_deref(), Some("a@b.co"));
                assert_eq!(patch.first_name, None);
            }
            other => panic!("expected Edit, got {other:?}"),
        }
    }

    #[test]
    fn global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "list", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}

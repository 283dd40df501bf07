use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use directory_client::{
    config::{load_settings, prepare_api_base_url},
    DirectorySession, EmployeeApi, FieldChange, HttpEmployeeApi,
};
use shared::domain::{wire_date, Employee, EmployeeId, Gender};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Manage the employee directory from a terminal")]
struct Cli {
    /// Base URL of the employee API; overrides directory.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Print records as JSON instead of a table.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Show {
        id: i64,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_dob)]
        dob: NaiveDate,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        department: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_dob)]
        dob: Option<NaiveDate>,
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long)]
        department: Option<String>,
    },
    Delete {
        id: i64,
    },
}

fn parse_dob(raw: &str) -> Result<NaiveDate, String> {
    wire_date::parse(raw).map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn edit_changes(
    name: Option<String>,
    dob: Option<NaiveDate>,
    gender: Option<Gender>,
    department: Option<String>,
) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    if let Some(name) = name {
        changes.push(FieldChange::Name(name));
    }
    if let Some(dob) = dob {
        changes.push(FieldChange::DateOfBirth(Some(dob)));
    }
    if let Some(gender) = gender {
        changes.push(FieldChange::Gender(gender));
    }
    if let Some(department) = department {
        changes.push(FieldChange::Department(department));
    }
    changes
}

fn table_row(e: &Employee) -> [String; 6] {
    [
        e.id.to_string(),
        e.name.clone(),
        e.age.to_string(),
        e.dob.format(wire_date::FORMAT).to_string(),
        e.gender.to_string(),
        e.department.clone(),
    ]
}

fn render_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No Employees Found".to_string();
    }

    let headers = ["ID", "Name", "Age", "Date of Birth", "Gender", "Department"];
    let rows: Vec<[String; 6]> = employees.iter().map(table_row).collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers.to_vec())];
    for row in &rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

fn print_employees(employees: &[Employee], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(employees)?);
    } else {
        println!("{}", render_table(employees));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter.unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let raw_api_url = cli.api_url.unwrap_or(load_settings().api_base_url);
    let api_base_url = prepare_api_base_url(&raw_api_url)?;
    let mut session = DirectorySession::new(HttpEmployeeApi::new(api_base_url));
    session
        .load()
        .await
        .context("could not load the employee directory")?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::List => {}
        Command::Show { id } => {
            let employee = session.api().get_employee(EmployeeId(id)).await?;
            return print_employees(&[employee], cli.json);
        }
        Command::Add {
            name,
            dob,
            gender,
            department,
        } => {
            let state = session.state_mut();
            state.open_create_dialog();
            for change in [
                FieldChange::Name(name),
                FieldChange::DateOfBirth(Some(dob)),
                FieldChange::Gender(gender),
                FieldChange::Department(department),
            ] {
                state.change_field(change, today);
            }
            let created = session.submit().await?;
            tracing::info!(employee_id = %created.id, "added employee");
        }
        Command::Edit {
            id,
            name,
            dob,
            gender,
            department,
        } => {
            session.edit(EmployeeId(id))?;
            for change in edit_changes(name, dob, gender, department) {
                session.state_mut().change_field(change, today);
            }
            session.submit().await?;
        }
        Command::Delete { id } => {
            session.select_for_delete(EmployeeId(id))?;
            session.confirm_delete().await?;
        }
    }

    print_employees(session.state().employees(), cli.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str, department: &str) -> Employee {
        Employee {
            id: EmployeeId(id),
            name: name.to_string(),
            age: 26,
            dob: NaiveDate::from_ymd_opt(2000, 1, 1).expect("date"),
            gender: Gender::Female,
            department: department.to_string(),
        }
    }

    #[test]
    fn parses_add_command_arguments() {
        let cli = Cli::try_parse_from([
            "directory_cli",
            "add",
            "--name",
            "Ann",
            "--dob",
            "2000-01-01",
            "--gender",
            "female",
            "--department",
            "Eng",
        ])
        .expect("parse");

        match cli.command {
            Command::Add {
                name,
                dob,
                gender,
                department,
            } => {
                assert_eq!(name, "Ann");
                assert_eq!(dob, NaiveDate::from_ymd_opt(2000, 1, 1).expect("date"));
                assert_eq!(gender, Gender::Female);
                assert_eq!(department, "Eng");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dob() {
        let err = Cli::try_parse_from(["directory_cli", "edit", "5", "--dob", "01/01/2000"])
            .expect_err("must fail");
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn edit_only_changes_given_fields() {
        let department = Some("Legal".to_string());
        let changes = edit_changes(None, None, Some(Gender::Other), department);
        assert_eq!(
            changes,
            vec![
                FieldChange::Gender(Gender::Other),
                FieldChange::Department("Legal".to_string()),
            ]
        );
    }

    #[test]
    fn renders_aligned_table() {
        let employees = [
            employee(1, "Ann", "Eng"),
            employee(12, "Bartholomew", "Ops"),
        ];
        let table = render_table(&employees);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  Name         Age"));
        assert!(lines[2].starts_with("12  Bartholomew  26"));
        assert!(lines[1].ends_with("female  Eng"));
    }

    #[test]
    fn renders_placeholder_for_empty_directory() {
        assert_eq!(render_table(&[]), "No Employees Found");
    }
}

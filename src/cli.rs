use crate::commands::{GradeFilter, SearchRequest};
use crate::portal::StudentQuery;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "suvctl")]
#[command(about = "Check grades and search the university directory from the terminal")]
#[command(version)]
pub struct CliArgs {
    /// Config file (default: <config dir>/suvctl/config.toml)
    #[arg(long, short = 'f', value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Portal snapshot to read records from
    #[arg(long, short = 's', value_name = "PATH", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Output format: text, table, json or raw
    /// Unknown names fall back to table.
    #[arg(long, short = 'o', value_name = "FORMAT", global = true)]
    pub output: Option<String>,

    /// Print which config file and snapshot were used
    #[arg(long, short = 'd', global = true)]
    pub detailed: bool,

    /// Never emit ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the grades of the current period
    Grades(GradesArgs),
    /// Search a student or professor and show their information
    Search(SearchArgs),
    /// Print the version
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GradesArgs {
    /// Filter by course ID (repeatable)
    #[arg(long = "courseid", short = 'i', value_name = "ID")]
    pub course_ids: Vec<String>,

    /// Filter by a fragment of the course name (repeatable)
    #[arg(long = "course", short = 'n', value_name = "NAME")]
    pub course_names: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search professors (default is students)
    #[arg(long, short = 't', conflicts_with_all = ["dni", "code"])]
    pub professors: bool,

    /// Code of the user to search
    #[arg(long, short = 'c', conflicts_with_all = ["name", "dni"])]
    pub code: Option<String>,

    /// Name of the user to search
    #[arg(long, short = 'n', requires = "lastname", conflicts_with = "dni")]
    pub name: Option<String>,

    /// Last name of the user to search
    #[arg(long, short = 'l', requires = "name")]
    pub lastname: Option<String>,

    /// DNI of the user to search
    #[arg(long, short = 'i')]
    pub dni: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Grades(grades) => {
                // A blank fragment would match every course
                if grades.course_names.iter().any(|n| n.trim().is_empty()) {
                    return Err("Course name filter cannot be blank".to_string());
                }
            }
            Command::Search(search) => {
                let name = search.name.as_deref().map(str::trim);
                let lastname = search.lastname.as_deref().map(str::trim);
                if name.is_some() && (name == Some("") || lastname == Some("")) {
                    return Err("--name and --lastname must both be non-blank".to_string());
                }
            }
            Command::Version => {}
        }

        Ok(())
    }
}

impl GradesArgs {
    pub fn filter(&self) -> GradeFilter {
        GradeFilter { course_ids: self.course_ids.clone(), course_names: self.course_names.clone() }
    }
}

impl SearchArgs {
    /// Build the search to run, `None` when no usable criteria were given
    pub fn request(&self) -> Option<SearchRequest> {
        let given = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        let code = given(&self.code);
        let full_name = given(&self.name).zip(given(&self.lastname));
        let dni = given(&self.dni);

        if self.professors {
            return full_name.map(|(name, lastname)| SearchRequest::Professors { name, lastname });
        }

        let query = match (code, full_name, dni) {
            (Some(code), _, _) => StudentQuery::Code(code),
            (_, Some((name, lastname)), _) => StudentQuery::FullName { name, lastname },
            (_, _, Some(dni)) => StudentQuery::NationalId(dni),
            _ => return None,
        };
        Some(SearchRequest::Students(query))
    }
}

/// Help text of the `search` subcommand
pub fn search_help() -> String {
    let mut command = CliArgs::command();
    command.find_subcommand_mut("search").map(|search| search.render_help().to_string()).unwrap_or_default()
}

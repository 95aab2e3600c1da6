//! odonto: dental chart records from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use jiff::civil::{Date, Time};
use odonto_audit::history::HistoryAction;
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::patient::{EmergencyContact, Sex};
use odonto_core::models::reminder::{NewReminder, Priority, ReminderFilter, ReminderKind};
use odonto_core::models::tooth::{ToothCondition, ToothNumber};
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "odonto", version, about = "Dental chart records")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Register and list patients
    Patient {
        #[command(subcommand)]
        action: PatientAction,
    },
    /// Work with a patient's dental chart
    Chart {
        #[command(subcommand)]
        action: ChartAction,
    },
    /// Format or validate a RUT
    Rut {
        #[command(subcommand)]
        action: RutAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a new config file
    Init {
        /// Directory for patients, charts, and history
        #[arg(long)]
        data_dir: PathBuf,
        /// Name recorded on history entries
        #[arg(long, default_value = "unknown")]
        practitioner: String,
        /// Default dentition for chart commands (adult, child)
        #[arg(long, default_value = "adult")]
        scheme: DentitionScheme,
    },
    /// Print the active config
    Show,
}

#[derive(Subcommand)]
enum PatientAction {
    /// Register a patient
    Add {
        #[arg(long)]
        rut: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Date,
        /// male, female, other
        #[arg(long, default_value = "other")]
        sex: Sex,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// Emergency contact name
        #[arg(long)]
        emergency_contact: Option<String>,
        #[arg(long, requires = "emergency_contact")]
        emergency_phone: Option<String>,
        /// Repeat for each allergy
        #[arg(long = "allergy")]
        allergies: Vec<String>,
        /// Repeat for each medication
        #[arg(long = "medication")]
        medications: Vec<String>,
        /// Repeat for each prior condition
        #[arg(long = "prior-condition")]
        prior_conditions: Vec<String>,
    },
    /// List registered patients
    List,
    /// Schedule and track reminders
    Remind {
        #[command(subcommand)]
        action: RemindAction,
    },
    /// Keep private notes on a patient
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },
}

#[derive(Subcommand)]
enum RemindAction {
    /// Schedule a reminder
    Add {
        patient: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: Date,
        /// Due time (HH:MM)
        #[arg(long)]
        time: Option<Time>,
        /// appointment, follow_up, medication, treatment, custom
        #[arg(long = "type", default_value = "custom")]
        kind: ReminderKind,
        /// low, medium, high
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List reminders (pending by default)
    List {
        patient: Uuid,
        #[arg(long, value_enum, default_value = "pending")]
        filter: ReminderFilterArg,
    },
    /// Mark a pending reminder as done
    Complete { patient: Uuid, reminder: Uuid },
    /// Dismiss a pending reminder
    Dismiss { patient: Uuid, reminder: Uuid },
    /// Remove a reminder
    Delete { patient: Uuid, reminder: Uuid },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Add a note
    Add {
        patient: Uuid,
        content: String,
        /// Hide the note unless --confidential is passed to `note list`
        #[arg(long)]
        confidential: bool,
        /// Repeat for each tag
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List notes, newest first
    List {
        patient: Uuid,
        /// Include confidential notes
        #[arg(long)]
        confidential: bool,
    },
    /// Replace a note's content
    Edit {
        patient: Uuid,
        note: Uuid,
        content: String,
    },
    /// Remove a note
    Delete { patient: Uuid, note: Uuid },
}

#[derive(Subcommand)]
enum ChartAction {
    /// Start a fresh, all-healthy chart
    Init {
        patient: Uuid,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
        /// Replace an existing chart for the same scheme
        #[arg(long)]
        force: bool,
    },
    /// Delete a chart and record it in the history
    Delete {
        patient: Uuid,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
    },
    /// Print the chart grid and findings
    Show {
        patient: Uuid,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
    },
    /// Print per-condition counts
    Stats {
        patient: Uuid,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
    },
    /// Record a tooth's condition
    Set {
        patient: Uuid,
        /// FDI tooth number (e.g. 16, 85)
        tooth: ToothNumber,
        /// healthy, caries, root_canal_treated, extracted, implant, crown
        condition: ToothCondition,
        /// Clinical notes; omitted keeps existing notes
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
    },
    /// Show the edit history
    History {
        patient: Uuid,
        /// created, updated, deleted
        #[arg(long)]
        action: Option<HistoryActionArg>,
    },
    /// Write the odontogram as SVG
    Svg {
        patient: Uuid,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a Markdown chart report
    Report {
        patient: Uuid,
        #[arg(long)]
        scheme: Option<DentitionScheme>,
        /// Custom Tera template
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the condition legend
    Legend,
}

#[derive(Subcommand)]
enum RutAction {
    /// Print the dotted form
    Format { rut: String },
    /// Check the verification digit
    Validate { rut: String },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ReminderFilterArg {
    All,
    Pending,
    Completed,
}

impl From<ReminderFilterArg> for ReminderFilter {
    fn from(arg: ReminderFilterArg) -> Self {
        match arg {
            ReminderFilterArg::All => ReminderFilter::All,
            ReminderFilterArg::Pending => ReminderFilter::Pending,
            ReminderFilterArg::Completed => ReminderFilter::Completed,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum HistoryActionArg {
    Created,
    Updated,
    Deleted,
}

impl From<HistoryActionArg> for HistoryAction {
    fn from(arg: HistoryActionArg) -> Self {
        match arg {
            HistoryActionArg::Created => HistoryAction::Created,
            HistoryActionArg::Updated => HistoryAction::Updated,
            HistoryActionArg::Deleted => HistoryAction::Deleted,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => odonto_cli::config::default_config_path()?,
    };

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Init {
                data_dir,
                practitioner,
                scheme,
            } => commands::config_init(&config_path, data_dir, practitioner, scheme),
            ConfigAction::Show => commands::config_show(&config_path),
        },
        Commands::Patient { action } => match action {
            PatientAction::Add {
                rut,
                first_name,
                last_name,
                birth_date,
                sex,
                email,
                phone,
                address,
                emergency_contact,
                emergency_phone,
                allergies,
                medications,
                prior_conditions,
            } => {
                let input = commands::NewPatient {
                    rut,
                    first_name,
                    last_name,
                    birth_date,
                    sex,
                    email,
                    phone,
                    address,
                    emergency_contact: emergency_contact.map(|name| EmergencyContact {
                        name,
                        phone: emergency_phone,
                    }),
                    allergies,
                    medications,
                    prior_conditions,
                };
                commands::patient_add(&config_path, input).await
            }
            PatientAction::List => commands::patient_list(&config_path).await,
            PatientAction::Remind { action } => match action {
                RemindAction::Add {
                    patient,
                    title,
                    description,
                    date,
                    time,
                    kind,
                    priority,
                } => {
                    let input = NewReminder {
                        title,
                        description,
                        reminder_date: date,
                        reminder_time: time,
                        kind,
                        priority,
                    };
                    commands::reminder_add(&config_path, patient, input).await
                }
                RemindAction::List { patient, filter } => {
                    commands::reminder_list(&config_path, patient, filter.into()).await
                }
                RemindAction::Complete { patient, reminder } => {
                    commands::reminder_complete(&config_path, patient, reminder).await
                }
                RemindAction::Dismiss { patient, reminder } => {
                    commands::reminder_dismiss(&config_path, patient, reminder).await
                }
                RemindAction::Delete { patient, reminder } => {
                    commands::reminder_delete(&config_path, patient, reminder).await
                }
            },
            PatientAction::Note { action } => match action {
                NoteAction::Add {
                    patient,
                    content,
                    confidential,
                    tags,
                } => commands::note_add(&config_path, patient, &content, confidential, tags).await,
                NoteAction::List {
                    patient,
                    confidential,
                } => commands::note_list(&config_path, patient, confidential).await,
                NoteAction::Edit {
                    patient,
                    note,
                    content,
                } => commands::note_edit(&config_path, patient, note, &content).await,
                NoteAction::Delete { patient, note } => {
                    commands::note_delete(&config_path, patient, note).await
                }
            },
        },
        Commands::Chart { action } => match action {
            ChartAction::Init {
                patient,
                scheme,
                force,
            } => commands::chart_init(&config_path, patient, scheme, force).await,
            ChartAction::Delete { patient, scheme } => {
                commands::chart_delete(&config_path, patient, scheme).await
            }
            ChartAction::Show { patient, scheme } => {
                commands::chart_show(&config_path, patient, scheme).await
            }
            ChartAction::Stats { patient, scheme } => {
                commands::chart_stats(&config_path, patient, scheme).await
            }
            ChartAction::Set {
                patient,
                tooth,
                condition,
                notes,
                scheme,
            } => commands::chart_set(&config_path, patient, scheme, tooth, condition, notes).await,
            ChartAction::History { patient, action } => {
                commands::chart_history(&config_path, patient, action.map(Into::into)).await
            }
            ChartAction::Svg {
                patient,
                scheme,
                out,
            } => commands::chart_svg(&config_path, patient, scheme, out).await,
            ChartAction::Report {
                patient,
                scheme,
                template,
                out,
            } => commands::chart_report(&config_path, patient, scheme, template, out).await,
            ChartAction::Legend => {
                commands::chart_legend();
                Ok(())
            }
        },
        Commands::Rut { action } => match action {
            RutAction::Format { rut } => {
                commands::rut_format(&rut);
                Ok(())
            }
            RutAction::Validate { rut } => commands::rut_validate(&rut),
        },
    }
}

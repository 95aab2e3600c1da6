use std::path::{Path, PathBuf};

use eyre::Result;
use jiff::civil::Date;
use odonto_audit::history::{self, HistoryAction, HistoryEntry};
use odonto_chart::StatusCounts;
use odonto_chart::catalog::catalog;
use odonto_chart::render::legend;
use odonto_cli::config::{self, OdontoConfig};
use odonto_cli::records;
use odonto_cli::session::ChartSession;
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::note::visible_notes;
use odonto_core::models::patient::{EmergencyContact, Patient, Sex};
use odonto_core::models::reminder::{NewReminder, ReminderFilter, filter_reminders};
use odonto_core::models::tooth::{ToothCondition, ToothNumber};
use odonto_core::rut;
use odonto_export::render::{ChartReport, render_default_report, render_report};
use odonto_export::styles::OdontogramStyle;
use odonto_export::svg::render_odontogram;
use odonto_storage::FileStore;
use uuid::Uuid;

pub struct NewPatient {
    pub rut: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub sex: Sex,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub prior_conditions: Vec<String>,
}

fn load(config_path: &Path) -> Result<(OdontoConfig, FileStore)> {
    if !config::has_config(config_path) {
        return Err(eyre::eyre!(
            "no config at {}; run `odonto config init --data-dir <dir>` first",
            config_path.display()
        ));
    }
    let config = config::load_config(config_path)?;
    let files = FileStore::new(config.data_dir.clone());
    Ok((config, files))
}

async fn open_session(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
) -> Result<ChartSession> {
    let (config, files) = load(config_path)?;
    let scheme = scheme.unwrap_or(config.default_scheme);
    ChartSession::open(files, patient, scheme, config.practitioner).await
}

fn write_output(out: Option<PathBuf>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(&path, contents)?;
            tracing::info!(path = %path.display(), "written");
        }
        None => println!("{contents}"),
    }
    Ok(())
}

pub fn config_init(
    config_path: &Path,
    data_dir: PathBuf,
    practitioner: String,
    scheme: DentitionScheme,
) -> Result<()> {
    std::fs::create_dir_all(&data_dir)?;
    let config = OdontoConfig::new(data_dir, practitioner, scheme);
    config::save_config(config_path, &config)?;
    println!("config written to {}", config_path.display());
    Ok(())
}

pub fn config_show(config_path: &Path) -> Result<()> {
    let (config, _) = load(config_path)?;
    println!("path:           {}", config_path.display());
    println!("data dir:       {}", config.data_dir.display());
    println!("practitioner:   {}", config.practitioner);
    println!("default scheme: {}", config.default_scheme);
    println!("created:        {}", config.created_at);
    Ok(())
}

pub async fn patient_add(config_path: &Path, input: NewPatient) -> Result<()> {
    let (config, files) = load(config_path)?;
    if !rut::validate(&input.rut) {
        return Err(eyre::eyre!("invalid RUT: {}", input.rut));
    }

    let now = jiff::Timestamp::now();
    let patient = Patient {
        id: Uuid::new_v4(),
        rut: rut::clean(&input.rut).to_ascii_lowercase(),
        first_name: input.first_name,
        last_name: input.last_name,
        birth_date: input.birth_date,
        sex: input.sex,
        email: input.email,
        phone: input.phone,
        address: input.address,
        emergency_contact: input.emergency_contact,
        allergies: input.allergies,
        medications: input.medications,
        prior_conditions: input.prior_conditions,
        created_at: now,
        updated_at: now,
    };
    files.save_patient(&patient).await?;
    files
        .append_history(
            patient.id,
            HistoryEntry::patient_created(patient.id, &config.practitioner),
        )
        .await?;

    println!("{}  {}", patient.id, patient.full_name());
    Ok(())
}

pub async fn patient_list(config_path: &Path) -> Result<()> {
    let (_, files) = load(config_path)?;
    let today = jiff::Zoned::now().date();
    for patient in files.list_patients().await? {
        println!(
            "{}  {:<14} {:<30} {:>3}y",
            patient.id,
            rut::format(&patient.rut),
            patient.full_name(),
            patient.age_on(today)
        );
    }
    Ok(())
}

pub async fn reminder_add(config_path: &Path, patient: Uuid, input: NewReminder) -> Result<()> {
    let (config, files) = load(config_path)?;
    let reminder = records::add_reminder(&files, patient, input, &config.practitioner).await?;
    println!("{}  {} reminder scheduled for {}", reminder.id, reminder.kind.label(), reminder.reminder_date);
    Ok(())
}

pub async fn reminder_list(config_path: &Path, patient: Uuid, filter: ReminderFilter) -> Result<()> {
    let (_, files) = load(config_path)?;
    let reminders = files.load_reminders(patient).await?;
    let today = jiff::Zoned::now().date();
    let shown = filter_reminders(&reminders, filter);
    for r in &shown {
        let when = match r.reminder_time {
            Some(t) => format!("{} {}", r.reminder_date, t.strftime("%H:%M")),
            None => r.reminder_date.to_string(),
        };
        let flag = if r.is_overdue(today) { "  OVERDUE" } else { "" };
        println!(
            "{}  {:<16} {:<11} {:<6} {:<9} {}{flag}",
            r.id,
            when,
            r.kind.label(),
            r.priority.as_str(),
            r.status.as_str(),
            r.title
        );
        if let Some(description) = &r.description {
            println!("{:>38}{description}", "");
        }
    }
    println!("{} reminder(s)", shown.len());
    Ok(())
}

pub async fn reminder_complete(config_path: &Path, patient: Uuid, reminder: Uuid) -> Result<()> {
    let (config, files) = load(config_path)?;
    let r = records::complete_reminder(&files, patient, reminder, &config.practitioner).await?;
    println!("completed: {}", r.title);
    Ok(())
}

pub async fn reminder_dismiss(config_path: &Path, patient: Uuid, reminder: Uuid) -> Result<()> {
    let (config, files) = load(config_path)?;
    let r = records::dismiss_reminder(&files, patient, reminder, &config.practitioner).await?;
    println!("dismissed: {}", r.title);
    Ok(())
}

pub async fn reminder_delete(config_path: &Path, patient: Uuid, reminder: Uuid) -> Result<()> {
    let (config, files) = load(config_path)?;
    let r = records::delete_reminder(&files, patient, reminder, &config.practitioner).await?;
    println!("deleted: {}", r.title);
    Ok(())
}

pub async fn note_add(
    config_path: &Path,
    patient: Uuid,
    content: &str,
    confidential: bool,
    tags: Vec<String>,
) -> Result<()> {
    let (config, files) = load(config_path)?;
    let note =
        records::add_note(&files, patient, content, confidential, tags, &config.practitioner).await?;
    println!("{}  note added", note.id);
    Ok(())
}

pub async fn note_list(config_path: &Path, patient: Uuid, show_confidential: bool) -> Result<()> {
    let (_, files) = load(config_path)?;
    let notes = files.load_notes(patient).await?;
    let shown = visible_notes(&notes, show_confidential);
    for note in &shown {
        let mut badges = Vec::new();
        if note.is_confidential {
            badges.push("confidential");
        }
        if note.is_edited() {
            badges.push("edited");
        }
        println!(
            "{}  {}  {}{}",
            note.id,
            note.created_at.strftime("%Y-%m-%d %H:%M"),
            note.created_by,
            if badges.is_empty() { String::new() } else { format!(" [{}]", badges.join(", ")) }
        );
        println!("    {}", note.content);
        if !note.tags.is_empty() {
            println!("    #{}", note.tags.join(" #"));
        }
    }
    let hidden = notes.len() - shown.len();
    if hidden > 0 {
        println!("{hidden} confidential note(s) hidden; pass --confidential to show");
    }
    Ok(())
}

pub async fn note_edit(config_path: &Path, patient: Uuid, note: Uuid, content: &str) -> Result<()> {
    let (config, files) = load(config_path)?;
    records::edit_note(&files, patient, note, content, &config.practitioner).await?;
    println!("note {note} updated");
    Ok(())
}

pub async fn note_delete(config_path: &Path, patient: Uuid, note: Uuid) -> Result<()> {
    let (config, files) = load(config_path)?;
    records::delete_note(&files, patient, note, &config.practitioner).await?;
    println!("note {note} deleted");
    Ok(())
}

pub async fn chart_init(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
    force: bool,
) -> Result<()> {
    let (config, files) = load(config_path)?;
    let scheme = scheme.unwrap_or(config.default_scheme);
    let session = ChartSession::create(files, patient, scheme, config.practitioner, force).await?;
    println!(
        "{scheme} chart created for {} ({} teeth)",
        session.patient().full_name(),
        session.store().len()
    );
    Ok(())
}

pub async fn chart_delete(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
) -> Result<()> {
    let session = open_session(config_path, patient, scheme).await?;
    let scheme = session.store().scheme();
    let name = session.patient().full_name();
    session.delete().await?;
    println!("{scheme} chart deleted for {name}");
    Ok(())
}

fn symbol(condition: ToothCondition) -> char {
    match condition {
        ToothCondition::Healthy => '.',
        ToothCondition::Caries => 'C',
        ToothCondition::RootCanalTreated => 'R',
        ToothCondition::Extracted => 'X',
        ToothCondition::Implant => 'I',
        ToothCondition::Crown => 'K',
    }
}

pub async fn chart_show(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
) -> Result<()> {
    let session = open_session(config_path, patient, scheme).await?;
    let store = session.store();
    let p = session.patient();
    println!(
        "{} chart: {} ({})",
        store.scheme(),
        p.full_name(),
        rut::format(&p.rut)
    );
    println!();

    let rows = catalog(store.scheme()).display_rows();
    for row in &rows {
        let half = row.len() / 2;
        let mut numbers = String::new();
        let mut marks = String::new();
        for (i, n) in row.iter().enumerate() {
            if i == half {
                numbers.push_str(" |");
                marks.push_str(" |");
            }
            numbers.push_str(&format!(" {:>2}", n.get()));
            marks.push_str(&format!(" {:>2}", symbol(store.get(*n).status)));
        }
        println!("{numbers}");
        println!("{marks}");
    }
    println!();

    let mut any = false;
    for tooth in store
        .teeth()
        .filter(|t| t.status != ToothCondition::Healthy || !t.notes.is_empty())
    {
        any = true;
        println!(
            "  {}  {:<10} {}",
            tooth.number,
            tooth.status.label(),
            tooth.notes
        );
    }
    if !any {
        println!("  no findings");
    }
    Ok(())
}

pub async fn chart_stats(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
) -> Result<()> {
    let session = open_session(config_path, patient, scheme).await?;
    let counts = StatusCounts::from_store(session.store());
    for (condition, count) in counts.iter() {
        println!("{:<12} {count:>2}", condition.label());
    }
    println!("{:<12} {:>2}", "Total", counts.total());
    Ok(())
}

pub async fn chart_set(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
    tooth: ToothNumber,
    condition: ToothCondition,
    notes: Option<String>,
) -> Result<()> {
    let mut session = open_session(config_path, patient, scheme).await?;
    let change = session.set_tooth(tooth, condition, notes).await?;
    println!(
        "tooth {}: {} -> {}",
        change.number,
        change.previous.status.label(),
        change.current.status.label()
    );
    Ok(())
}

pub async fn chart_history(
    config_path: &Path,
    patient: Uuid,
    action: Option<HistoryAction>,
) -> Result<()> {
    let (_, files) = load(config_path)?;
    let entries = files.load_history(patient).await?;
    for entry in history::filter(&entries, action) {
        println!(
            "{}  {:<20} {}",
            entry.timestamp.strftime("%Y-%m-%d %H:%M"),
            entry.changed_by,
            entry.description
        );
    }
    Ok(())
}

pub async fn chart_svg(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
    out: Option<PathBuf>,
) -> Result<()> {
    let session = open_session(config_path, patient, scheme).await?;
    let svg = render_odontogram(session.store(), &OdontogramStyle::default());
    write_output(out, &svg)
}

pub async fn chart_report(
    config_path: &Path,
    patient: Uuid,
    scheme: Option<DentitionScheme>,
    template: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let session = open_session(config_path, patient, scheme).await?;
    let report = ChartReport::new(session.patient(), session.store(), &jiff::Zoned::now());
    let rendered = match template {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| eyre::eyre!("failed to read template {}: {e}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            render_report(&name, &content, &report)?
        }
        None => render_default_report(&report)?,
    };
    write_output(out, &rendered)
}

pub fn chart_legend() {
    for item in legend() {
        println!(
            "{}  {:<12} {:<28} {}",
            symbol(item.condition),
            item.label,
            item.description,
            item.palette.fill
        );
    }
}

pub fn rut_format(value: &str) {
    println!("{}", rut::format(value));
}

pub fn rut_validate(value: &str) -> Result<()> {
    if rut::validate(value) {
        println!("{} is valid", rut::format(value));
        Ok(())
    } else {
        Err(eyre::eyre!("{value} is not a valid RUT"))
    }
}

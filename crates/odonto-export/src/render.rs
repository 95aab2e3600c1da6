use jiff::Zoned;
use serde::Serialize;
use tera::{Context, Tera};

use odonto_chart::catalog::catalog;
use odonto_chart::{StatusCounts, ToothStatusStore};
use odonto_core::models::patient::Patient;
use odonto_core::models::tooth::ToothCondition;
use odonto_core::rut;

use crate::error::ExportError;

pub const DEFAULT_TEMPLATE_NAME: &str = "chart_report.md";
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/chart_report.md.tera");

#[derive(Debug, Clone, Serialize)]
pub struct PatientSummary {
    pub full_name: String,
    pub rut: String,
    pub age: i16,
    pub sex: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// `Name (phone)`, or just the name when no phone was given.
    pub emergency_contact: Option<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub prior_conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub condition: ToothCondition,
    pub label: &'static str,
    pub count: usize,
}

/// A tooth that is not healthy, or that carries notes.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub number: u8,
    pub quadrant: &'static str,
    pub condition: &'static str,
    pub notes: String,
    pub updated: String,
}

/// Everything the chart report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub patient: PatientSummary,
    pub scheme: String,
    pub total_teeth: usize,
    pub counts: StatusCounts,
    pub summary: Vec<SummaryRow>,
    pub findings: Vec<Finding>,
    pub generated_at: String,
}

impl ChartReport {
    pub fn new(patient: &Patient, store: &ToothStatusStore, generated_at: &Zoned) -> Self {
        let counts = StatusCounts::from_store(store);
        let catalog = catalog(store.scheme());
        let tz = generated_at.time_zone().clone();

        let findings = store
            .teeth()
            .filter(|t| t.status != ToothCondition::Healthy || !t.notes.is_empty())
            .map(|t| Finding {
                number: t.number.get(),
                quadrant: catalog.quadrant_of(t.number).map(|q| q.label()).unwrap_or("-"),
                condition: t.status.label(),
                notes: t.notes.replace('|', "\\|").replace('\n', " "),
                updated: t.last_updated.to_zoned(tz.clone()).strftime("%Y-%m-%d").to_string(),
            })
            .collect();

        Self {
            patient: PatientSummary {
                full_name: patient.full_name(),
                rut: rut::format(&patient.rut),
                age: patient.age_on(generated_at.date()),
                sex: patient.sex.label().to_string(),
                phone: patient.phone.clone(),
                email: patient.email.clone(),
                address: patient.address.clone(),
                emergency_contact: patient.emergency_contact.as_ref().map(|c| match &c.phone {
                    Some(phone) => format!("{} ({phone})", c.name),
                    None => c.name.clone(),
                }),
                allergies: patient.allergies.clone(),
                medications: patient.medications.clone(),
                prior_conditions: patient.prior_conditions.clone(),
            },
            scheme: store.scheme().to_string(),
            total_teeth: store.len(),
            counts,
            summary: counts
                .iter()
                .map(|(condition, count)| SummaryRow {
                    condition,
                    label: condition.label(),
                    count,
                })
                .collect(),
            findings,
            generated_at: generated_at.strftime("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Render a Tera template with a [`ChartReport`] as its context.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    report: &ChartReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "chart report rendered");
    Ok(rendered)
}

pub fn render_default_report(report: &ChartReport) -> Result<String, ExportError> {
    render_report(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, report)
}

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;
use vetlog_core::models::profile::ProfileType;
use vetlog_ratings::card::RatingCard;
use vetlog_ratings::criteria::DISCLAIMER;

use crate::error::ExportError;

const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.txt.tera");

#[derive(Debug, Serialize)]
struct SummaryContext<'a> {
    profile_type: ProfileType,
    subject: &'static str,
    cards: &'a [RatingCard],
    disclaimer: &'static str,
}

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in summary of `cards`, worded for `profile_type`.
pub fn render_summary(cards: &[RatingCard], profile_type: ProfileType) -> Result<String, ExportError> {
    let context = SummaryContext {
        profile_type,
        subject: profile_type.subject(),
        cards,
        disclaimer: DISCLAIMER,
    };
    debug!(cards = cards.len(), %profile_type, "rendering summary");
    render_template("summary.txt", SUMMARY_TEMPLATE, &context)
}

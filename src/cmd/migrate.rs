use anyhow::anyhow;
use clap::Parser;
use colored::Colorize;

use crate::{
    api,
    shared_types::{
        ApiError, AppContext, CliSubCmd, DestServerParams, MalformedPolicy, MigrationReport,
        RawKeyRecord, RecordOutcome, RecordReport, ServerEndpoint, SourceServerParams,
    },
    utils::{
        key2user::{key2user, record_name},
        misc::Reporter,
    },
};

#[derive(Parser)]
pub struct MigrateCommand {
    #[command(flatten)]
    source: SourceServerParams,

    #[command(flatten)]
    dest: DestServerParams,

    #[arg(long)]
    /// what to do with a key record that can't be converted, overrides the configured default
    on_malformed: Option<MalformedPolicy>,

    #[arg(long)]
    /// print the users that would be created without sending anything to the new server
    dry_run: bool,
}

impl CliSubCmd for MigrateCommand {
    async fn run(&self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let client = ctx.http_client()?;
        let mut reporter = Reporter::new(ctx.config.get_log_level());
        let on_malformed = self
            .on_malformed
            .unwrap_or(ctx.config.get_on_malformed());

        let source = self.source.resolve()?;
        let keys = match fetch_keys(&client, &source, &mut reporter).await {
            Some(keys) if !keys.is_empty() => keys,
            _ => {
                reporter.info("Nothing to migrate.");
                return Ok(());
            }
        };
        reporter.info(format!("Found {} keys on the old server.", keys.len()));

        if self.dry_run {
            preview_keys(&keys, on_malformed, &mut reporter)?;
            return Ok(());
        }

        let dest = self.dest.resolve()?;
        let report = migrate_keys(&client, &keys, &dest, on_malformed, &mut reporter).await?;

        for record in &report.records {
            if !matches!(record.outcome, RecordOutcome::Created) {
                log::debug!("#{} {:?}: {:?}", record.id, record.name, record.outcome);
            }
        }
        log::debug!(
            "migration done: {} created, {} failed, {} malformed",
            report.created(),
            report.failed(),
            report.malformed()
        );
        if reporter.is_chatty() {
            reporter.info(format!(
                "{} created, {} failed, {} malformed",
                report.created().to_string().green().bold(),
                report.failed().to_string().red().bold(),
                report.malformed().to_string().yellow().bold(),
            ));
        }

        Ok(())
    }
}

/// one GET against the old server. any failure is reported and yields `None`
pub async fn fetch_keys(
    client: &reqwest::Client,
    source: &ServerEndpoint,
    reporter: &mut Reporter,
) -> Option<Vec<RawKeyRecord>> {
    match api::keys::get_keys(client, source).await {
        Ok(keys) => Some(keys),
        Err(err) => {
            match &err {
                ApiError::Status { body: Some(body), .. } => {
                    reporter.failure(format!("Failed to fetch keys: {err} (response: {body})"))
                }
                _ => reporter.failure(format!("Failed to fetch keys: {err}")),
            }
            None
        }
    }
}

/// posts one user per record, in order, ids counting from 1 by array position.
/// http and network failures are reported and skipped over.
pub async fn migrate_keys(
    client: &reqwest::Client,
    records: &[RawKeyRecord],
    dest: &ServerEndpoint,
    on_malformed: MalformedPolicy,
    reporter: &mut Reporter,
) -> anyhow::Result<MigrationReport> {
    let mut report = MigrationReport::default();
    if records.is_empty() {
        return Ok(report);
    }

    reporter.start("migrating", records.len() as u64)?;

    for (id, raw) in (1u32..).zip(records) {
        let name = record_name(raw);
        let label = display_name(id, name.as_deref());

        let outcome = match key2user(id, raw) {
            Err(err) => {
                reporter.failure(format!("Malformed record #{id}: {err}"));
                if on_malformed == MalformedPolicy::Halt {
                    reporter.finish();
                    return Err(anyhow!(
                        "record #{id} (name={label}) is malformed, stopped after {} of {} records: {err}",
                        report.records.len(),
                        records.len()
                    ));
                }
                RecordOutcome::Malformed(err)
            }
            Ok(payload) => match api::users::create_user(client, dest, &payload).await {
                Ok(()) => {
                    reporter.success(format!("OK for name={label}"));
                    RecordOutcome::Created
                }
                Err(err) => {
                    report_api_failure(reporter, &label, &err);
                    RecordOutcome::Failed(err)
                }
            },
        };

        report.records.push(RecordReport { id, name, outcome });
        reporter.tick();
    }

    reporter.finish();

    Ok(report)
}

/// builds every payload and prints it instead of posting
pub fn preview_keys(
    records: &[RawKeyRecord],
    on_malformed: MalformedPolicy,
    reporter: &mut Reporter,
) -> anyhow::Result<MigrationReport> {
    let mut report = MigrationReport::default();

    for (id, raw) in (1u32..).zip(records) {
        let outcome = match key2user(id, raw) {
            Ok(payload) => {
                reporter.output(serde_json::to_string_pretty(&payload)?);
                RecordOutcome::Skipped
            }
            Err(err) => {
                reporter.failure(format!("Malformed record #{id}: {err}"));
                if on_malformed == MalformedPolicy::Halt {
                    return Err(anyhow!("record #{id} is malformed: {err}"));
                }
                RecordOutcome::Malformed(err)
            }
        };

        report.records.push(RecordReport {
            id,
            name: record_name(raw),
            outcome,
        });
    }

    Ok(report)
}

fn display_name(id: u32, name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format!("<unnamed #{id}>"),
    }
}

fn report_api_failure(reporter: &mut Reporter, label: &str, err: &ApiError) {
    match err {
        ApiError::Status { body, .. } => {
            reporter.failure(format!("HTTP error for name={label}: {err}"));
            if let Some(body) = body {
                reporter.failure(format!("Response content: {body}"));
            }
        }
        ApiError::Transport(_) | ApiError::Decode(_) => {
            reporter.failure(format!("Network error for name={label}: {err}"));
        }
    }
}

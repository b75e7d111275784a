use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use catalog_cli::pipeline::{batch, ingest, transform, write};
use catalog_cli::types::{BatchSummary, SyncResult};
use catalog_submit::CatalogClient;
use catalog_transform::{FALLBACK_WORD_COUNT, unit_rules};

use crate::cli::SyncArgs;
use crate::summary::apply_table_style;

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Pattern", "Outcome"]);
    apply_table_style(&mut table);
    for (index, rule) in unit_rules().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            rule.label.to_string(),
            rule.pattern.to_string(),
            rule.outcome.to_string(),
        ]);
    }
    table.add_row(vec![
        (unit_rules().len() + 1).to_string(),
        "fallback by name length".to_string(),
        format!("{FALLBACK_WORD_COUNT}+ words"),
        "UNI, else KG".to_string(),
    ]);
    println!("{table}");
    Ok(())
}

pub fn run_sync(args: &SyncArgs) -> Result<SyncResult> {
    let span = info_span!("sync", catalog = %args.catalog.display());
    let _guard = span.enter();

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.catalog
            .parent()
            .map(|dir| dir.join("batches"))
            .unwrap_or_else(|| "batches".into())
    });

    let rows = ingest(&args.catalog)?;
    let row_count = rows.len();
    let products = transform(&rows);
    let batches = batch(products);

    let mut summaries: Vec<BatchSummary> = batches
        .iter()
        .map(|batch| BatchSummary {
            sequence: batch.sequence,
            products: batch.len(),
            file: None,
            status: None,
        })
        .collect();

    if args.dry_run {
        info!("dry run: skipping batch files and submission");
        return Ok(SyncResult {
            catalog: args.catalog.clone(),
            output_dir,
            rows: row_count,
            batches: summaries,
            dry_run: true,
            submitted: false,
            has_errors: false,
        });
    }

    let paths = write(&batches, &output_dir)?;
    for (summary, path) in summaries.iter_mut().zip(paths) {
        summary.file = Some(path);
    }

    let mut submitted = false;
    let mut has_errors = false;
    if args.no_submit {
        info!("submission skipped (--no-submit)");
    } else if batches.is_empty() {
        warn!("catalog produced no batches; nothing to submit");
    } else {
        let client = CatalogClient::with_key_or_env(args.api_key.clone(), args.api_url.clone())
            .context("configure catalog API client")?;
        let outcomes = client.submit_all(&batches).context("submit batches")?;
        submitted = true;
        for (summary, outcome) in summaries.iter_mut().zip(outcomes) {
            has_errors |= !outcome.status.is_accepted();
            summary.status = Some(outcome.status);
        }
    }

    Ok(SyncResult {
        catalog: args.catalog.clone(),
        output_dir,
        rows: row_count,
        batches: summaries,
        dry_run: false,
        submitted,
        has_errors,
    })
}

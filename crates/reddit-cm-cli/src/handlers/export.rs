use crate::cli::ExportArgs;
use crate::context::CliContext;
use crate::output::Reporter;
use reddit_cm_domain::CommunityExporter;
use reddit_cm_persistence::{DocumentFormat, ExportWriter};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct ExportResult {
    path: PathBuf,
    format: &'static str,
    total_communities: usize,
}

pub async fn handle(args: ExportArgs, out: Reporter) -> anyhow::Result<()> {
    let ctx = CliContext::resolve(&args.credentials)?;
    let format = DocumentFormat::from(args.format);
    let output = args.output_path();

    out.status(format!("Authenticating with Reddit as {}...", ctx.username()));
    let client = ctx.connect().await?;

    out.status(format!("Exporting communities to {} format...", format));
    out.status("Fetching joined communities...");
    let document = CommunityExporter::collect(&client).await?;
    out.status(format!("Found {} communities", document.total_communities));

    ExportWriter::write(&document, format, &output).await?;
    out.status(format!("Communities exported to {}", output.display()));

    out.result(ExportResult {
        path: output,
        format: format.extension(),
        total_communities: document.total_communities,
    });
    Ok(())
}

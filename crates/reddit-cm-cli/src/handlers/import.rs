use crate::cli::ImportArgs;
use crate::context::CliContext;
use crate::output::Reporter;
use crate::progress::ImportProgress;
use reddit_cm_domain::Reconciler;
use reddit_cm_persistence::ImportLoader;

pub async fn handle(args: ImportArgs, out: Reporter) -> anyhow::Result<()> {
    let ctx = CliContext::resolve(&args.credentials)?;
    let records = ImportLoader::load(&args.file).await?;

    out.status(format!("Authenticating with Reddit as {}...", ctx.username()));
    let client = ctx.connect().await?;

    out.status(format!("Found {} communities to import", records.len()));
    if args.dry_run {
        out.status("DRY RUN MODE - No communities will actually be joined");
    }

    let mut progress = ImportProgress::new(!out.is_json());
    let summary = Reconciler::new(&client)
        .simulate(args.dry_run)
        .reconcile(&records, &mut progress)
        .await;
    progress.finish();

    out.summary(&summary);
    Ok(())
}

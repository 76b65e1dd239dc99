//! Prints the release plan for the current CI build as JSON.

use anyhow::Context;
use tracing::info;

use catalog_service::deploy::PipelinePlan;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let branch = std::env::var("BRANCH_NAME").context("BRANCH_NAME must be set")?;
    let image_tag = std::env::var("IMAGE_TAG").context("IMAGE_TAG must be set")?;
    let image = std::env::var("IMAGE_NAME").unwrap_or_else(|_| "catalog-service".to_string());
    let deployment =
        std::env::var("DEPLOYMENT_NAME").unwrap_or_else(|_| "catalog-service".to_string());

    let plan = PipelinePlan::for_branch(&branch, &image_tag, &image, &deployment);
    info!(
        branch = %plan.branch,
        target = ?plan.target,
        pushes = plan.pushes(),
        "Resolved pipeline plan"
    );

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

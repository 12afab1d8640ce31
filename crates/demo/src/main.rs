fn main() -> anyhow::Result<()> {
    acme_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    acme_demo::run_scenario(&mut out).inspect_err(|e| {
        tracing::error!(error = %e, "scenario failed");
    })
}

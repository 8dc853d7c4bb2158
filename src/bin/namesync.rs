fn main() -> anyhow::Result<()> {
    namesync::cli::run_cli()
}

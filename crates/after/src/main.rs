fn main() -> anyhow::Result<()> {
    devicekit_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    devicekit_after::demo::run(&mut out)?;

    Ok(())
}

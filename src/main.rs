use fps_sim::frameworks::config;

fn main() -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(fps_sim::run_with_config());

    // tokio's stdin reads park a blocking thread that only wakes on the next line.
    runtime.shutdown_timeout(config::SHUTDOWN_GRACE);
    result
}

use heat_ring::driver::{self, Args};
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        println!("Run this to view profiling data:  puffin_viewer {server_addr}");
        profiling::puffin::set_scopes_on(true);
        puffin_http::Server::new(&server_addr).ok()
    };

    let result = Args::cli_parse("heat_ring").and_then(|args| driver::run(&args));

    #[cfg(feature = "profile-with-puffin")]
    profiling::finish_frame!();

    match result {
        Ok(report) => {
            report.print();
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "heat_ring failed");
            std::process::ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use convene::app::ConveneApp;

fn main() {
    env_logger::init();
    log::info!("starting convene at {}", chrono::Local::now().to_rfc3339());
    let args = ConveneApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

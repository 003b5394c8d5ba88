fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = frameview::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

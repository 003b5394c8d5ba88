pub mod annotations;
pub mod cli;
pub mod formats;
pub mod model;
pub mod presets;
pub mod render;
pub mod runtime;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}

mod cli;
mod infra;
mod report;

use drive_insights::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

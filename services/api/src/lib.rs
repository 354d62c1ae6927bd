mod cli;
mod infra;
mod listings;
mod routes;
mod server;

use realty_leads::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

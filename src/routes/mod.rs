// Route exports
pub mod questions;
pub mod submissions;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(submissions::configure)
            .configure(questions::configure),
    );
}

// Route exports
pub mod engagement;
pub mod listings;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(listings::configure)
            .configure(engagement::configure),
    );
}

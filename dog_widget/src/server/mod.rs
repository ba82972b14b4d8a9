mod breeds_route;
mod fact_route;
mod run;

pub use run::{run_server, WidgetServer};

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;

use crate::widget::page::FactPanel;

#[derive(Serialize)]
struct CurrentFact {
    pub fact: Option<String>,
}

#[instrument(skip(fact_panel))]
pub async fn handler(fact_panel: web::Data<FactPanel>) -> impl Responder {
    HttpResponse::Ok().json(CurrentFact {
        fact: fact_panel.text(),
    })
}

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::widget::page::BreedMenu;

#[instrument(skip(breed_menu))]
pub async fn handler(breed_menu: web::Data<BreedMenu>) -> impl Responder {
    HttpResponse::Ok().json(breed_menu.options())
}

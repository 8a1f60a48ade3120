use tracing::info;

fn main() {
    dioxus::logger::initialize_default();
    info!("Starting folio web app");
    dioxus::launch(folio_web::App);
}

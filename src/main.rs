use dotenvy::dotenv;
use rocket::{Build, Rocket};

#[rocket::launch]
fn rocket() -> Rocket<Build> {
    dotenv().ok();
    env_logger::init();

    log::info!("🚀 Jobby session service running");
    log::info!("📚 Swagger UI → http://localhost:8000/api/docs");

    jobby::rocket()
}

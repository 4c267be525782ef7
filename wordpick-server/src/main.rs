use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use log::info;

use serde::Deserialize;
use wordpick_core::dictionary::sample_request::SampleRequest;
use wordpick_core::dictionary::word_sampler::{LoadMode, WordSampler};
use wordpick_core::error::RequestError;

mod settings;

use settings::ServerSettings;

/// Word count used when the query has no `count`.
const DEFAULT_COUNT: i64 = 1;

/// Struct representing query parameters for the `/v1/words` endpoint
#[derive(Deserialize)]
struct WordsParams {
	count: Option<i64>,
	lengths: Option<String> // comma-separated, e.g. "5,6"
}

impl WordsParams {
	/// Validates the raw query into a `SampleRequest`.
	fn sample_request(&self) -> Result<SampleRequest, RequestError> {
		let count = self.count.unwrap_or(DEFAULT_COUNT);
		let lengths = match &self.lengths {
			Some(s) => SampleRequest::parse_lengths(s)?,
			None => Vec::new(),
		};
		Ok(SampleRequest::from_raw(count, &[])?.with_lengths(lengths))
	}
}

/// HTTP GET endpoint `/v1/words`
///
/// Draws random words and returns them as JSON, together with the
/// diagnostics of any word list that could not be loaded.
/// Invalid `count` or `lengths` values are rejected with `400`.
#[get("/v1/words")]
async fn get_words(sampler: web::Data<WordSampler>, query: web::Query<WordsParams>) -> impl Responder {
	let request = match query.sample_request() {
		Ok(r) => r,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	let sampler = sampler.clone();
	match web::block(move || sampler.get_words(&request)).await {
		Ok(result) => HttpResponse::Ok().json(result),
		Err(_) => HttpResponse::InternalServerError().body("Sampling failed"),
	}
}

/// HTTP GET endpoint `/v1/sources`
///
/// Lists the word-list files available in the dictionary directory,
/// one file name per line.
#[get("/v1/sources")]
async fn get_sources(sampler: web::Data<WordSampler>) -> impl Responder {
	match sampler.list_sources() {
		Ok(sources) => HttpResponse::Ok().body(
			sources.iter().map(|s| s.file_name()).collect::<Vec<_>>().join("\n")
		),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list word lists")
	}
}

/// Registers every endpoint on an `App`.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_words).service(get_sources);
}

/// Main entry point for the server.
///
/// Reads `ServerSettings`, builds a shared `WordSampler` and starts an
/// Actix-web HTTP server.
///
/// # Notes
/// - The sampler holds no mutable state, so it is shared without a lock.
/// - Logging is controlled with `RUST_LOG` (defaults to `info`).
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let settings = ServerSettings::load()?;
	let load_mode = if settings.parallel_loading { LoadMode::Parallel } else { LoadMode::Sequential };
	let sampler = web::Data::new(WordSampler::new(&settings.dict_dir).with_load_mode(load_mode));

	info!(
		"Serving words from {} on {}:{}",
		sampler.root().display(),
		settings.host,
		settings.port
	);

	let permissive_cors = settings.permissive_cors;
	HttpServer::new(move || {
		let cors = if permissive_cors { Cors::permissive() } else { Cors::default() };
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors)
			.app_data(sampler.clone())
			.configure(routes)
	})
		.bind((settings.host.as_str(), settings.port))?
		.run()
		.await?;

	Ok(())
}

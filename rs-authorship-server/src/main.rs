use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use rs_authorship_core::{FolderCorpus, VerificationInput, VerifyError, verify};
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Struct representing query parameters for the `/v1/verify` endpoint
#[derive(Deserialize)]
struct VerifyParams {
	first: Option<String>,
	second: Option<String>,
	seed: Option<u64>,
	known_ratio: Option<f64>,
}

impl VerifyParams {
	/// Both author names, trimmed and non-empty.
	fn authors(&self) -> Result<(String, String), String> {
		match (self.first.as_deref().map(str::trim), self.second.as_deref().map(str::trim)) {
			(Some(first), Some(second)) if !first.is_empty() && !second.is_empty() => {
				Ok((first.to_owned(), second.to_owned()))
			}
			_ => Err("Both 'first' and 'second' author names are required".into()),
		}
	}

	/// Builds the run parameters from the query.
	fn input(&self) -> Result<VerificationInput, String> {
		let mut input = VerificationInput::with_seed(self.seed);
		if let Some(known_ratio) = self.known_ratio {
			input.set_known_ratio(known_ratio).map_err(|e| e.to_string())?;
		}
		Ok(input)
	}
}

/// Maps a verification error to a response.
///
/// Unknown authors are 404, data problems are 400, I/O failures are 500.
fn error_response(e: VerifyError) -> HttpResponse {
	match e {
		VerifyError::UnknownAuthor(_) => HttpResponse::NotFound().body(e.to_string()),
		VerifyError::Io(_) => {
			error!("verification failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
		_ => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/verify`
///
/// Runs one verification of `first` against `second` and returns the
/// `AccuracyReport` as JSON. The computation runs on the blocking pool.
#[get("/v1/verify")]
async fn get_verify(corpus: web::Data<FolderCorpus>, query: web::Query<VerifyParams>) -> impl Responder {
	let (first, second) = match query.authors() {
		Ok(authors) => authors,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let input = match query.input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let corpus = corpus.into_inner();
	match web::block(move || verify(corpus.as_ref(), &first, &second, &input)).await {
		Ok(Ok(report)) => HttpResponse::Ok().json(report),
		Ok(Err(e)) => error_response(e),
		Err(_) => HttpResponse::InternalServerError().body("Verification task failed"),
	}
}

/// HTTP GET endpoint `/v1/authors`
///
/// Lists the authors available in the data folder, one per line.
#[get("/v1/authors")]
async fn get_authors(corpus: web::Data<FolderCorpus>) -> impl Responder {
	match corpus.list_authors() {
		Ok(authors) => HttpResponse::Ok().body(authors.join("\n")),
		Err(e) => error_response(e),
	}
}

/// Main entry point for the server.
///
/// Opens the `./data` corpus folder and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - `RUST_LOG` controls logging, `info` by default.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	tracing_subscriber::registry()
		.with(fmt::layer())
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let corpus = FolderCorpus::new("./data").map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;
	info!(folder = %corpus.folder().display(), "serving corpus");
	let corpus = web::Data::new(corpus);

	HttpServer::new(move || {
		App::new()
			.app_data(corpus.clone())
			.service(get_verify)
			.service(get_authors)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

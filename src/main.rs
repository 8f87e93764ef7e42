use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use fundex::application::ports::{JobRegistry, StagingStore};
use fundex::application::services::ExtractionService;
use fundex::infrastructure::llm::GeminiClient;
use fundex::infrastructure::observability::{init_tracing, TracingConfig};
use fundex::infrastructure::persistence::InMemoryJobRegistry;
use fundex::infrastructure::spreadsheet::XlsxWorkbookWriter;
use fundex::infrastructure::storage::LocalStagingStore;
use fundex::infrastructure::text_processing::PdfAdapter;
use fundex::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.llm.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not configured; extraction jobs will fail");
    }

    let file_loader = Arc::new(PdfAdapter::new());
    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));
    let workbook_writer = Arc::new(XlsxWorkbookWriter::new());
    let registry: Arc<dyn JobRegistry> = Arc::new(InMemoryJobRegistry::new());
    let staging_store: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(settings.storage.upload_dir.clone())?);
    let output_store: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(settings.storage.output_dir.clone())?);

    let extraction_service = Arc::new(ExtractionService::new(
        file_loader,
        llm_client,
        workbook_writer,
        registry,
        staging_store,
        Arc::clone(&output_store),
        settings.upload.max_bytes(),
    ));

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);

    let state = AppState {
        extraction_service,
        output_store,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

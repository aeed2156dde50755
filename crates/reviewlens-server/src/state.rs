use reviewlens_pipeline::AnalyzeService;

/// Shared handler state. Cloning is cheap; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub service: AnalyzeService,
}

impl AppState {
    pub fn new(service: AnalyzeService) -> Self {
        Self { service }
    }
}

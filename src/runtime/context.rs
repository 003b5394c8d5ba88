use super::{AnnotationService, IoService, PresetService, RenderService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    io_service: IoService,
    render_service: RenderService,
    annotation_service: AnnotationService,
    preset_service: PresetService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn io_service(&self) -> &IoService {
        &self.io_service
    }

    pub fn render_service(&self) -> &RenderService {
        &self.render_service
    }

    pub fn annotation_service(&self) -> &AnnotationService {
        &self.annotation_service
    }

    pub fn preset_service(&self) -> &PresetService {
        &self.preset_service
    }
}

//! ResetModelHandler - Clears the whole model.

use tracing::info;

use super::SharedModel;

/// Handler for resetting the model.
pub struct ResetModelHandler {
    model: SharedModel,
}

impl ResetModelHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(&self) {
        self.model.write().await.reset();
        info!("Model reset");
    }
}

//! Shared state for the axum application.

use crate::config::Config;
use crate::error::ConfigResult;
use crate::services::ContactWorkflow;
use crate::session::FlashStore;
use crate::store::ContactStore;
use crate::web::views::{HtmlViews, ViewRenderer};
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// Cheaply cloneable; all clones share the same workflow, flash store and
/// renderer.
#[derive(Clone)]
pub struct AppState {
    workflow: Arc<ContactWorkflow>,
    flash: FlashStore,
    views: Arc<dyn ViewRenderer>,
}

impl AppState {
    /// `flash` must be the store the workflow pushes to; its TTL doubles as
    /// the session cookie lifetime.
    pub fn new(
        workflow: Arc<ContactWorkflow>,
        flash: FlashStore,
        views: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            workflow,
            flash,
            views,
        }
    }

    /// Wire the standard application over `store`: a flash store with the
    /// configured session TTL, the configured mobile format and HTML views.
    pub fn from_config(store: Arc<dyn ContactStore>, config: &Config) -> ConfigResult<Self> {
        let flash = FlashStore::new(config.session_ttl());
        let workflow = ContactWorkflow::new(store, flash.clone(), config.mobile_format()?);
        Ok(Self::new(Arc::new(workflow), flash, Arc::new(HtmlViews)))
    }

    pub fn workflow(&self) -> &ContactWorkflow {
        &self.workflow
    }

    pub fn flash(&self) -> &FlashStore {
        &self.flash
    }

    pub fn views(&self) -> &dyn ViewRenderer {
        self.views.as_ref()
    }
}

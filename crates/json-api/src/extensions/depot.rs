//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use medovik_app::context::AppContext;

use crate::state::State;

/// Access to the injected storefront services.
pub(crate) trait DepotExt {
    /// The services injected at startup, or a 500 when the state hoop is missing.
    fn app_context(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn app_context(&self) -> Result<&AppContext, StatusError> {
        match self.obtain::<Arc<State>>() {
            Ok(state) => Ok(&state.app),
            Err(_missing) => {
                error!("application state missing from depot");

                Err(StatusError::internal_server_error())
            }
        }
    }
}
